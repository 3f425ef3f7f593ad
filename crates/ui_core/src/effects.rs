//! Decorative background model: particles, pulse rings, pointer trails and
//! orb parallax.
//!
//! The frontend owns the timers; this module decides what exists and how it
//! is styled.

use rand::Rng;

use crate::device::DeviceClass;

/// Keyframes the dynamic elements rely on.
pub const EFFECTS_STYLESHEET: &str = r#"
@keyframes trailFade {
    0% { opacity: 0.6; transform: scale(1); }
    100% { opacity: 0; transform: scale(0); }
}
@keyframes pulseRing {
    0% { opacity: 1; transform: scale(0); }
    100% { opacity: 0; transform: scale(20); }
}
.particle.dynamic {
    box-shadow: 0 0 10px var(--cyber-blue);
}
.glass-card:hover::before {
    animation-duration: 1.5s;
}
"#;

/// Configuration for the background effects.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectsConfig {
    /// Live particle cap on desktop (default: 15)
    pub desktop_particle_cap: usize,
    /// Live particle cap on mobile (default: 8)
    pub mobile_particle_cap: usize,
    /// Particle spawn period on desktop (default: 2000)
    pub desktop_spawn_interval_ms: u32,
    /// Particle spawn period on mobile (default: 4000)
    pub mobile_spawn_interval_ms: u32,
    /// Pulse spawn period (default: 3000)
    pub pulse_interval_ms: u32,
    /// Pulse lifetime (default: 2000)
    pub pulse_lifetime_ms: u32,
    /// Minimum gap between two trail marks (default: 50)
    pub trail_throttle_ms: f64,
    /// Trail mark lifetime (default: 1000)
    pub trail_lifetime_ms: u32,
    /// Orb parallax per orb index for mouse movement, in px (default: 20)
    pub mouse_orb_factor: f64,
    /// Orb parallax per orb index for touch movement, in px (default: 10)
    pub touch_orb_factor: f64,
    /// Dynamic particles kept when switching to mobile (default: 4)
    pub particles_kept_on_mobile: usize,
    /// Orb opacity on mobile (default: "0.2")
    pub mobile_orb_opacity: &'static str,
    /// Number of decorative orbs (default: 3)
    pub orb_count: usize,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            desktop_particle_cap: 15,
            mobile_particle_cap: 8,
            desktop_spawn_interval_ms: 2000,
            mobile_spawn_interval_ms: 4000,
            pulse_interval_ms: 3000,
            pulse_lifetime_ms: 2000,
            trail_throttle_ms: 50.0,
            trail_lifetime_ms: 1000,
            mouse_orb_factor: 20.0,
            touch_orb_factor: 10.0,
            particles_kept_on_mobile: 4,
            mobile_orb_opacity: "0.2",
            orb_count: 3,
        }
    }
}

impl EffectsConfig {
    pub fn particle_cap(&self, device: DeviceClass) -> usize {
        match device {
            DeviceClass::Desktop => self.desktop_particle_cap,
            DeviceClass::Mobile => self.mobile_particle_cap,
        }
    }

    pub fn spawn_interval_ms(&self, device: DeviceClass) -> u32 {
        match device {
            DeviceClass::Desktop => self.desktop_spawn_interval_ms,
            DeviceClass::Mobile => self.mobile_spawn_interval_ms,
        }
    }

    /// Inline orb opacity for `device`; `None` clears the override.
    pub fn orb_opacity(&self, device: DeviceClass) -> Option<&'static str> {
        device.is_mobile().then_some(self.mobile_orb_opacity)
    }

    pub fn orb_factor(&self, pointer: PointerKind) -> f64 {
        match pointer {
            PointerKind::Mouse => self.mouse_orb_factor,
            PointerKind::Touch => self.touch_orb_factor,
        }
    }
}

/// A floating particle with randomized geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.random_range(2.0..6.0),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(6.0..14.0),
            delay_s: rng.random_range(0.0..2.0),
        }
    }

    /// Time until the particle removes itself.
    pub fn lifetime_ms(&self) -> u32 {
        (self.duration_s * 1000.0).round() as u32
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; \
             animation: float {duration}s ease-in-out infinite; animation-delay: {delay}s;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// An expanding ring at a random position.
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    pub left_pct: f64,
    pub top_pct: f64,
}

impl Pulse {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; left: {}%; top: {}%; width: 2px; height: 2px; \
             border: 2px solid var(--cyber-blue); border-radius: 50%; \
             animation: pulseRing 2s ease-out forwards; pointer-events: none;",
            self.left_pct, self.top_pct
        )
    }
}

/// A short-lived mark left behind the mouse cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub x: f64,
    pub y: f64,
}

impl Trail {
    pub fn style(&self) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; width: 4px; height: 4px; \
             background: var(--cyber-blue); border-radius: 50%; pointer-events: none; \
             z-index: 0; opacity: 0.6; animation: trailFade 1s ease-out forwards;",
            self.x, self.y
        )
    }
}

/// Live effect elements, each tagged with a stable id for removal.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectList<T> {
    items: Vec<(u64, T)>,
    next_id: u64,
}

impl<T> Default for EffectList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> EffectList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, T)> {
        self.items.iter()
    }

    /// Add `item`, returning its id.
    pub fn push(&mut self, item: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, item));
        id
    }

    /// Add `item` only while fewer than `cap` are alive.
    pub fn push_capped(&mut self, item: T, cap: usize) -> Option<u64> {
        (self.items.len() < cap).then(|| self.push(item))
    }

    /// Remove the element `id`; a missing id is ignored.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(item_id, _)| *item_id != id);
        self.items.len() != before
    }

    /// Keep the oldest `keep` elements and drop the rest.
    pub fn truncate(&mut self, keep: usize) {
        self.items.truncate(keep);
    }
}

/// What to do with the effects after a device class change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityChange {
    /// Keep this many dynamic particles and dim the orbs.
    Reduce { keep: usize },
    /// Restore orb opacity.
    Restore,
}

impl DensityChange {
    pub fn for_device(config: &EffectsConfig, device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => DensityChange::Reduce {
                keep: config.particles_kept_on_mobile,
            },
            DeviceClass::Desktop => DensityChange::Restore,
        }
    }

    pub fn apply<T>(self, particles: &mut EffectList<T>) {
        if let DensityChange::Reduce { keep } = self {
            particles.truncate(keep);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Parallax offset in px for orb `index` with the pointer at `(x, y)` in a
/// `width` × `height` viewport.
pub fn orb_offset(
    (x, y): (f64, f64),
    (width, height): (f64, f64),
    index: usize,
    factor: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = factor * (index + 1) as f64;
    ((x / width - 0.5) * scale, (y / height - 0.5) * scale)
}

pub fn orb_transform((dx, dy): (f64, f64)) -> String {
    format!("translate({dx}px, {dy}px)")
}

/// Rate limit for trail marks.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailThrottle {
    min_gap_ms: f64,
    last_ms: Option<f64>,
}

impl TrailThrottle {
    pub fn new(min_gap_ms: f64) -> Self {
        Self {
            min_gap_ms,
            last_ms: None,
        }
    }

    /// True when a mark may be emitted at `now_ms`; records the emission.
    pub fn should_emit(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last <= self.min_gap_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}
