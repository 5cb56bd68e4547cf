//! Declarative description of how the route is revealed.
//!
//! The descriptor only says what to animate (the drawn length of the
//! stroke), between which values, for how long and with which timing
//! curve. Turning it into markup or frames is up to the renderer, see
//! [`crate::emit::svg`].

/// SVG presentation attribute the descriptor drives.
pub const DASHARRAY_ATTRIBUTE: &str = "stroke-dasharray";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-in-out.
    EaseInOut,
}

impl Easing {
    /// Control points of the cubic Bézier timing curve, `None` for linear.
    pub fn key_splines(self) -> Option<[f64; 4]> {
        match self {
            Self::Linear => None,
            Self::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Play once and hold the final frame.
    Once,
    #[default]
    Indefinite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub attribute: &'static str,
    /// Drawn length at the start.
    pub from: f64,
    /// Drawn length at the end, also used as the dash gap.
    pub to: f64,
    pub duration_secs: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl AnimationDescriptor {
    /// Reveal a path of `path_length` from nothing to fully drawn.
    pub fn draw_path(path_length: f64, duration_secs: f64, easing: Easing, repeat: Repeat) -> Self {
        Self {
            attribute: DASHARRAY_ATTRIBUTE,
            from: 0.0,
            to: path_length,
            duration_secs,
            easing,
            repeat,
        }
    }

    /// Dash pattern at the first keyframe: nothing drawn, one full gap.
    pub fn start_dasharray(&self) -> String {
        format!("{} {}", self.from, self.to)
    }

    /// Dash pattern at the last keyframe: the whole path drawn.
    pub fn end_dasharray(&self) -> String {
        format!("{} {}", self.to, self.to)
    }
}
