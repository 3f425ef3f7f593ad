//! Device classification and the presentation policies that depend on it.

/// Widest viewport still treated as mobile, in CSS pixels.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// User-agent fragments that mark a mobile browser.
const MOBILE_UA_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Viewport meta content while an input has focus on mobile.
pub const VIEWPORT_ZOOM_LOCKED: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";

/// Viewport meta content otherwise.
pub const VIEWPORT_ZOOM_ALLOWED: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=5.0, user-scalable=yes";

/// Body class present while the device is classified as mobile.
pub const MOBILE_BODY_CLASS: &str = "mobile-device";

/// Body class present while the viewport is wider than tall.
pub const LANDSCAPE_BODY_CLASS: &str = "landscape";

/// Vibration on touching a button, in milliseconds.
pub const TOUCH_VIBRATION_MS: u32 = 10;

/// How long a touched button keeps its active class after release.
pub const TOUCH_RELEASE_MS: u32 = 150;

/// What the browser tells us about the device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSignals {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub user_agent: String,
}

impl DeviceSignals {
    /// True when the user agent names a mobile browser.
    pub fn mobile_user_agent(&self) -> bool {
        let ua = self.user_agent.to_lowercase();
        MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
    }

    pub fn orientation(&self) -> Orientation {
        if self.viewport_height < self.viewport_width {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Coarse device class driving every adaptive behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classification used by the controller: narrow viewport or mobile UA.
    pub fn classify(signals: &DeviceSignals) -> Self {
        if signals.viewport_width <= MOBILE_MAX_WIDTH || signals.mobile_user_agent() {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classification used by the background effects: width only.
    pub fn from_width(viewport_width: f64) -> Self {
        if viewport_width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }

    /// How long a toast stays on screen.
    pub fn toast_duration_ms(self) -> u32 {
        match self {
            DeviceClass::Desktop => 3000,
            DeviceClass::Mobile => 4000,
        }
    }

    /// Viewport meta content to apply when an input gains focus, if any.
    pub fn viewport_on_focus(self) -> Option<&'static str> {
        self.is_mobile().then_some(VIEWPORT_ZOOM_LOCKED)
    }

    /// Viewport meta content to apply when an input loses focus, if any.
    pub fn viewport_on_blur(self) -> Option<&'static str> {
        self.is_mobile().then_some(VIEWPORT_ZOOM_ALLOWED)
    }
}

/// Compare two classifications and report a change.
pub fn reclassify(previous: DeviceClass, signals: &DeviceSignals) -> Option<DeviceClass> {
    let current = DeviceClass::classify(signals);
    (current != previous).then_some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0";

    fn signals(width: f64, user_agent: &str) -> DeviceSignals {
        DeviceSignals {
            viewport_width: width,
            viewport_height: 900.0,
            user_agent: user_agent.to_string(),
            ..DeviceSignals::default()
        }
    }

    #[test]
    fn test_narrow_viewport_is_mobile() {
        assert_eq!(DeviceClass::classify(&signals(768.0, DESKTOP_UA)), DeviceClass::Mobile);
        assert_eq!(DeviceClass::classify(&signals(769.0, DESKTOP_UA)), DeviceClass::Desktop);
    }

    #[test]
    fn test_mobile_user_agent_wins_on_wide_viewport() {
        assert_eq!(DeviceClass::classify(&signals(1024.0, IPHONE_UA)), DeviceClass::Mobile);
        assert_eq!(
            DeviceClass::classify(&signals(1280.0, "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)")),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_effects_classification_ignores_user_agent() {
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(375.0), DeviceClass::Mobile);
    }

    #[test]
    fn test_orientation() {
        let mut s = signals(1024.0, DESKTOP_UA);
        assert_eq!(s.orientation(), Orientation::Landscape);

        s.viewport_width = 390.0;
        assert_eq!(s.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_toast_duration() {
        assert_eq!(DeviceClass::Desktop.toast_duration_ms(), 3000);
        assert_eq!(DeviceClass::Mobile.toast_duration_ms(), 4000);
    }

    #[test]
    fn test_zoom_policy_only_on_mobile() {
        assert_eq!(DeviceClass::Mobile.viewport_on_focus(), Some(VIEWPORT_ZOOM_LOCKED));
        assert_eq!(DeviceClass::Mobile.viewport_on_blur(), Some(VIEWPORT_ZOOM_ALLOWED));
        assert_eq!(DeviceClass::Desktop.viewport_on_focus(), None);
        assert_eq!(DeviceClass::Desktop.viewport_on_blur(), None);
    }

    #[test]
    fn test_reclassify_reports_changes_only() {
        assert_eq!(reclassify(DeviceClass::Desktop, &signals(1200.0, DESKTOP_UA)), None);
        assert_eq!(
            reclassify(DeviceClass::Desktop, &signals(600.0, DESKTOP_UA)),
            Some(DeviceClass::Mobile)
        );
        assert_eq!(
            reclassify(DeviceClass::Mobile, &signals(1200.0, DESKTOP_UA)),
            Some(DeviceClass::Desktop)
        );
    }
}
