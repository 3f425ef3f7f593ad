//! View model for the generator form, the saved list and toasts.
//!
//! Everything here is a pure function of plain data; the frontend turns it
//! into markup with text nodes only.

use chrono::{DateTime, NaiveDateTime};
use web_types::{GenerationOptions, GenerationRequest, SavedPasswordEntry};

use crate::device::DeviceClass;
use crate::error::{ClientError, Operation, Result};

/// Character used to hide each password character.
pub const MASK_CHAR: char = '•';

pub const COPIED_MESSAGE: &str = "Password copied to clipboard!";
pub const DELETED_MESSAGE: &str = "Password deleted successfully";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this password?";

/// Slider track colours (filled, empty).
const SLIDER_FILL: &str = "#00d4ff";
const SLIDER_TRACK: &str = "#374151";

/// Current values of the generation form.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorForm {
    pub length: u32,
    pub options: GenerationOptions,
    pub site_name: String,
}

impl GeneratorForm {
    /// Build the request body, refusing when no character class is selected.
    pub fn request(&self) -> Result<GenerationRequest> {
        if !self.options.any_selected() {
            return Err(ClientError::InvalidOptions);
        }
        Ok(GenerationRequest {
            length: self.length,
            options: self.options,
        })
    }
}

/// A generated password waiting to be saved.
///
/// Lives between a successful generation and the next save or generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPassword {
    pub password: String,
    /// Site-name field value at generation time
    pub site_name: String,
}

impl PendingPassword {
    /// The save button is only offered when a site name was typed first.
    pub fn save_visible(&self) -> bool {
        !self.site_name.trim().is_empty()
    }

    pub fn save_label(&self) -> String {
        format!("Save Password for {}", self.site_name)
    }
}

pub fn saved_message(site_name: &str) -> String {
    format!("Password saved for {site_name}!")
}

/// What happened on the generator panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SiteNameTyped(String),
    Generated(PendingPassword),
    Saved,
}

/// Site-name field and pending password of the generator panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorSession {
    /// Site-name field as currently typed
    pub site_name: String,
    pub pending: Option<PendingPassword>,
}

impl GeneratorSession {
    pub fn apply(&self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SiteNameTyped(site_name) => Self {
                site_name,
                pending: self.pending.clone(),
            },
            SessionEvent::Generated(pending) => Self {
                site_name: self.site_name.clone(),
                pending: Some(pending),
            },
            SessionEvent::Saved => Self::default(),
        }
    }

    /// The result panel shows only while a password is pending.
    pub fn result_visible(&self) -> bool {
        self.pending.is_some()
    }

    /// Password shown in the result panel.
    pub fn password(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.password.as_str())
    }

    /// Label of the save button, when it is offered.
    pub fn save_label(&self) -> Option<String> {
        self.pending
            .as_ref()
            .filter(|p| p.save_visible())
            .map(PendingPassword::save_label)
    }
}

/// Masked or revealed rendering of one saved password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    /// Text to display for `password`.
    pub fn render(self, password: &str) -> String {
        match self {
            Visibility::Masked => mask(password),
            Visibility::Revealed => password.to_string(),
        }
    }

    /// Font Awesome class for the eye toggle.
    pub fn icon_class(self) -> &'static str {
        match self {
            Visibility::Masked => "fas fa-eye",
            Visibility::Revealed => "fas fa-eye-slash",
        }
    }
}

/// One mask character per password character.
pub fn mask(password: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, password.chars().count()).collect()
}

/// "0 passwords saved", "1 password saved", "N passwords saved".
pub fn count_text(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} password{plural} saved")
}

/// Render a server timestamp as e.g. `Jan 5, 2024, 03:07 PM`.
///
/// Accepts RFC 3339 and naive ISO-8601 timestamps; anything else is shown
/// unchanged.
pub fn format_created_at(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %I:%M %p";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// Staggered entrance for the row at `index`.
pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}

/// Filled fraction of the length slider, in percent.
pub fn slider_fill_percent(value: u32, min: u32, max: u32) -> f64 {
    if max <= min {
        return 100.0;
    }
    let value = value.clamp(min, max);
    f64::from(value - min) / f64::from(max - min) * 100.0
}

/// Inline style painting the slider track up to the current value.
pub fn slider_background(value: u32, min: u32, max: u32) -> String {
    let pct = slider_fill_percent(value, min, max);
    format!(
        "background: linear-gradient(to right, {SLIDER_FILL} 0%, {SLIDER_FILL} {pct}%, {SLIDER_TRACK} {pct}%, {SLIDER_TRACK} 100%)"
    )
}

/// Snapshot of the saved list as last fetched.
///
/// Every applied snapshot bumps `revision`, so rows are rebuilt from scratch
/// and any revealed password goes back to masked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedListView {
    pub entries: Vec<SavedPasswordEntry>,
    pub revision: u64,
}

impl SavedListView {
    /// Replace the whole list with a fresh snapshot.
    pub fn replaced(&self, entries: Vec<SavedPasswordEntry>) -> Self {
        Self {
            entries,
            revision: self.revision + 1,
        }
    }

    /// Render key for the row showing entry `id`.
    pub fn row_key(&self, id: i64) -> String {
        format!("{}-{id}", self.revision)
    }

    pub fn count_text(&self) -> String {
        count_text(self.entries.len())
    }

    pub fn show_empty_state(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Toast for `err` raised while performing `op`.
    pub fn failure(op: Operation, err: &ClientError) -> Self {
        Self::error(err.user_message(op))
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast",
            ToastKind::Error => "toast error",
        }
    }

    /// Haptic pattern for this toast on `device`, in milliseconds.
    pub fn vibration(&self, device: DeviceClass) -> Option<&'static [u32]> {
        if !device.is_mobile() {
            return None;
        }
        let pattern: &'static [u32] = match self.kind {
            ToastKind::Success => &[50],
            ToastKind::Error => &[100, 50, 100],
        };
        Some(pattern)
    }
}
