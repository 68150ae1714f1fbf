//! Animation timings for the navigation bar.
//!
//! These are rendered as CSS custom properties and picked up by the
//! keyframes in `assets/main.css`.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// A slide-in on the vertical axis, optionally fading from transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f32,
    pub offset_y_px: f32,
    pub fade: bool,
    pub easing: Easing,
}

impl Transition {
    pub fn style(&self) -> String {
        let from_opacity = if self.fade { 0.0 } else { 1.0 };
        format!(
            "--motion-duration: {}s; --motion-offset: {}px; --motion-opacity: {}; --motion-easing: {};",
            self.duration_secs,
            self.offset_y_px,
            from_opacity,
            self.easing.css()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarMotion {
    /// Header sliding down on mount.
    pub entrance: Transition,
    /// Mobile panel appearing.
    pub panel: Transition,
    pub hover_scale: f32,
    pub tap_scale: f32,
    pub panel_hover_scale: f32,
}

impl Default for NavbarMotion {
    fn default() -> Self {
        Self {
            entrance: Transition {
                duration_secs: 0.5,
                offset_y_px: -100.0,
                fade: false,
                easing: Easing::EaseOut,
            },
            panel: Transition {
                duration_secs: 0.3,
                offset_y_px: -20.0,
                fade: true,
                easing: Easing::EaseInOut,
            },
            hover_scale: 1.1,
            tap_scale: 0.9,
            panel_hover_scale: 1.05,
        }
    }
}

impl NavbarMotion {
    pub fn scale_style(&self) -> String {
        format!(
            "--hover-scale: {}; --tap-scale: {}; --panel-hover-scale: {};",
            self.hover_scale, self.tap_scale, self.panel_hover_scale
        )
    }
}
