//! Decorative animated background.
//!
//! Owns every timer and listener it starts; all of them are cancelled when
//! the component unmounts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ui_core::DeviceClass;
use ui_core::effects::{
    DensityChange, EFFECTS_STYLESHEET, EffectList, EffectsConfig, Particle, PointerKind, Pulse,
    Trail, TrailThrottle, orb_offset, orb_transform,
};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::browser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Layer {
    Particle,
    Pulse,
    Trail,
}

/// Everything currently alive in the background.
struct Scene {
    particles: EffectList<Particle>,
    pulses: EffectList<Pulse>,
    trails: EffectList<Trail>,
    orb_offsets: Vec<(f64, f64)>,
    device: DeviceClass,
    removals: HashMap<(Layer, u64), Timeout>,
    throttle: TrailThrottle,
    rng: SmallRng,
}

impl Scene {
    fn new(config: &EffectsConfig, device: DeviceClass) -> Self {
        Self {
            particles: EffectList::default(),
            pulses: EffectList::default(),
            trails: EffectList::default(),
            orb_offsets: vec![(0.0, 0.0); config.orb_count],
            device,
            removals: HashMap::new(),
            throttle: TrailThrottle::new(config.trail_throttle_ms),
            rng: SmallRng::seed_from_u64(browser::now_ms() as u64),
        }
    }

    fn remove(&mut self, layer: Layer, id: u64) {
        match layer {
            Layer::Particle => self.particles.remove(id),
            Layer::Pulse => self.pulses.remove(id),
            Layer::Trail => self.trails.remove(id),
        };
        self.removals.remove(&(layer, id));
    }

    fn move_orbs(&mut self, pointer: (f64, f64), factor: f64) {
        let viewport = (browser::viewport_width(), browser::viewport_height());
        for (index, offset) in self.orb_offsets.iter_mut().enumerate() {
            *offset = orb_offset(pointer, viewport, index, factor);
        }
    }
}

/// Remove `(layer, id)` from the scene after `delay_ms`.
fn schedule_removal(
    scene: &Rc<RefCell<Scene>>,
    layer: Layer,
    id: u64,
    delay_ms: u32,
    redraw: &UseForceUpdateHandle,
) {
    let weak: Weak<RefCell<Scene>> = Rc::downgrade(scene);
    let redraw = redraw.clone();
    let timeout = Timeout::new(delay_ms, move || {
        if let Some(scene) = weak.upgrade() {
            scene.borrow_mut().remove(layer, id);
            redraw.force_update();
        }
    });
    scene.borrow_mut().removals.insert((layer, id), timeout);
}

/// Properties for BackgroundEffects.
#[derive(Properties, PartialEq)]
pub struct BackgroundEffectsProps {
    #[prop_or_default]
    pub config: EffectsConfig,
}

/// Animated background: orbs, floating particles, pulse rings and pointer
/// trails.
#[function_component(BackgroundEffects)]
pub fn background_effects(props: &BackgroundEffectsProps) -> Html {
    let config = Rc::new(props.config.clone());
    let device = use_state(|| DeviceClass::from_width(browser::viewport_width()));
    let scene = {
        let config = config.clone();
        let device = *device;
        use_mut_ref(move || Scene::new(&config, device))
    };
    let redraw = use_force_update();

    // Spawners follow the current device class.
    {
        let scene = scene.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        use_effect_with(*device, move |device| {
            let device = *device;

            let particles = {
                let scene = scene.clone();
                let redraw = redraw.clone();
                let config = config.clone();
                Interval::new(config.spawn_interval_ms(device), move || {
                    let spawned = {
                        let mut s = scene.borrow_mut();
                        let particle = Particle::random(&mut s.rng);
                        let lifetime = particle.lifetime_ms();
                        s.particles
                            .push_capped(particle, config.particle_cap(device))
                            .map(|id| (id, lifetime))
                    };
                    if let Some((id, lifetime)) = spawned {
                        schedule_removal(&scene, Layer::Particle, id, lifetime, &redraw);
                        redraw.force_update();
                    }
                })
            };

            let pulses = {
                let scene = scene.clone();
                let redraw = redraw.clone();
                let lifetime = config.pulse_lifetime_ms;
                Interval::new(config.pulse_interval_ms, move || {
                    let id = {
                        let mut s = scene.borrow_mut();
                        let pulse = Pulse::random(&mut s.rng);
                        s.pulses.push(pulse)
                    };
                    schedule_removal(&scene, Layer::Pulse, id, lifetime, &redraw);
                    redraw.force_update();
                })
            };

            move || {
                drop(particles);
                drop(pulses);
            }
        });
    }

    // Pointer reactivity: mouse parallax and trails on desktop, single-touch
    // parallax on mobile.
    {
        let scene = scene.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        use_effect_with(*device, move |device| {
            let listener = web_sys::window()
                .and_then(|w| w.document())
                .map(|document| match device {
                    DeviceClass::Desktop => EventListener::new(&document, "mousemove", {
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
                            let trail = {
                                let mut s = scene.borrow_mut();
                                s.move_orbs((x, y), config.orb_factor(PointerKind::Mouse));
                                s.throttle
                                    .should_emit(browser::now_ms())
                                    .then(|| s.trails.push(Trail { x, y }))
                            };
                            if let Some(id) = trail {
                                schedule_removal(
                                    &scene,
                                    Layer::Trail,
                                    id,
                                    config.trail_lifetime_ms,
                                    &redraw,
                                );
                            }
                            redraw.force_update();
                        }
                    }),
                    DeviceClass::Mobile => EventListener::new(&document, "touchmove", {
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            let touches = event.touches();
                            if touches.length() != 1 {
                                return;
                            }
                            let Some(touch) = touches.get(0) else {
                                return;
                            };
                            let point = (f64::from(touch.client_x()), f64::from(touch.client_y()));
                            scene
                                .borrow_mut()
                                .move_orbs(point, config.orb_factor(PointerKind::Touch));
                            redraw.force_update();
                        }
                    }),
                });
            move || drop(listener)
        });
    }

    // Density follows the viewport width.
    {
        let device = device.clone();
        let scene = scene.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    let current = DeviceClass::from_width(browser::viewport_width());
                    {
                        let mut s = scene.borrow_mut();
                        if current == s.device {
                            return;
                        }
                        s.device = current;
                        DensityChange::for_device(&config, current).apply(&mut s.particles);
                    }
                    device.set(current);
                    redraw.force_update();
                })
            });
            move || drop(listener)
        });
    }

    // Pending removals die with the component.
    {
        let scene = scene.clone();
        use_effect_with((), move |_| {
            move || scene.borrow_mut().removals.clear()
        });
    }

    let s = scene.borrow();
    let orb_opacity = config.orb_opacity(*device);

    html! {
        <div class="animated-bg" aria-hidden="true">
            <style>{ EFFECTS_STYLESHEET }</style>
            <div class="bg-gradient"></div>
            <div class="grid-overlay"></div>
            {
                for s.orb_offsets.iter().enumerate().map(|(index, offset)| {
                    let mut style = format!("transform: {};", orb_transform(*offset));
                    if let Some(opacity) = orb_opacity {
                        style.push_str(&format!(" opacity: {opacity};"));
                    }
                    html! { <div class={format!("orb orb-{}", index + 1)} {style}></div> }
                })
            }
            <div class="floating-particles">
                {
                    for s.particles.iter().map(|(id, particle)| html! {
                        <div key={format!("particle-{id}")} class="particle dynamic" style={particle.style()}></div>
                    })
                }
            </div>
            {
                for s.pulses.iter().map(|(id, pulse)| html! {
                    <div key={format!("pulse-{id}")} class="pulse-ring" style={pulse.style()}></div>
                })
            }
            {
                for s.trails.iter().map(|(id, trail)| html! {
                    <div key={format!("trail-{id}")} class="mouse-trail" style={trail.style()}></div>
                })
            }
        </div>
    }
}
