use std::f64::consts::PI;
use std::str::FromStr;

use crate::foundation::error::BoxTweenError;

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;
const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Easing functions used to map normalized animation progress.
///
/// Every curve returns exactly `0.0` at `t = 0` and exactly `1.0` at `t = 1`. Back and
/// elastic curves leave `[0, 1]` in between and are not clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Sine ease-in.
    InSine,
    /// Sine ease-out.
    OutSine,
    /// Sine ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in/out.
    InOutCirc,
    /// Back ease-in (undershoots below 0).
    InBack,
    /// Back ease-out (overshoots above 1).
    OutBack,
    /// Back ease-in/out.
    InOutBack,
    /// Elastic ease-in.
    InElastic,
    /// Elastic ease-out.
    OutElastic,
    /// Elastic ease-in/out.
    InOutElastic,
    /// Bounce ease-in.
    InBounce,
    /// Bounce ease-out.
    OutBounce,
    /// Bounce ease-in/out.
    InOutBounce,
}

// Canonical names first, then aliases. Lookup walks the whole table.
const NAMES: &[(&str, Ease)] = &[
    ("linear", Ease::Linear),
    ("ease_in_quad", Ease::InQuad),
    ("ease_out_quad", Ease::OutQuad),
    ("ease_in_out_quad", Ease::InOutQuad),
    ("ease_in_cubic", Ease::InCubic),
    ("ease_out_cubic", Ease::OutCubic),
    ("ease_in_out_cubic", Ease::InOutCubic),
    ("ease_in_quart", Ease::InQuart),
    ("ease_out_quart", Ease::OutQuart),
    ("ease_in_out_quart", Ease::InOutQuart),
    ("ease_in_quint", Ease::InQuint),
    ("ease_out_quint", Ease::OutQuint),
    ("ease_in_out_quint", Ease::InOutQuint),
    ("ease_in_sine", Ease::InSine),
    ("ease_out_sine", Ease::OutSine),
    ("ease_in_out_sine", Ease::InOutSine),
    ("ease_in_expo", Ease::InExpo),
    ("ease_out_expo", Ease::OutExpo),
    ("ease_in_out_expo", Ease::InOutExpo),
    ("ease_in_circ", Ease::InCirc),
    ("ease_out_circ", Ease::OutCirc),
    ("ease_in_out_circ", Ease::InOutCirc),
    ("ease_in_back", Ease::InBack),
    ("ease_out_back", Ease::OutBack),
    ("ease_in_out_back", Ease::InOutBack),
    ("ease_in_elastic", Ease::InElastic),
    ("ease_out_elastic", Ease::OutElastic),
    ("ease_in_out_elastic", Ease::InOutElastic),
    ("ease_in_bounce", Ease::InBounce),
    ("ease_out_bounce", Ease::OutBounce),
    ("ease_in_out_bounce", Ease::InOutBounce),
    ("ease_in", Ease::InQuad),
    ("ease_out", Ease::OutQuad),
    ("ease_in_out", Ease::InOutQuad),
];

impl Ease {
    /// Every distinct curve, in catalog order.
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
    ];

    /// Canonical snake_case name, e.g. `ease_in_out_cubic`.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, e)| *e == self)
            .map(|(n, _)| *n)
            .unwrap_or("linear")
    }

    /// Resolve a curve name, falling back to [`Ease::Linear`] for anything unrecognized.
    ///
    /// Names are trimmed and matched case-insensitively; `ease_in`, `ease_out` and
    /// `ease_in_out` are aliases of the quadratic curves.
    pub fn lookup(name: &str) -> Ease {
        match Self::resolve(name) {
            Some(ease) => ease,
            None => {
                tracing::warn!(name, "unknown easing name, falling back to linear");
                Ease::Linear
            }
        }
    }

    pub(crate) fn resolve(name: &str) -> Option<Ease> {
        let name = name.trim().to_ascii_lowercase();
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, e)| *e)
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => (t - 1.0).powi(3) + 1.0,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    0.5 * (2.0 * t - 2.0).powi(3) + 1.0
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (t - 1.0).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => (t - 1.0).powi(5) + 1.0,
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    16.0 * (t - 1.0).powi(5) + 1.0
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => 0.5 * (1.0 - (PI * t).cos()),
            Self::InExpo => 2f64.powf(10.0 * (t - 1.0)),
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::InOutExpo => {
                if t < 0.5 {
                    0.5 * 2f64.powf(20.0 * t - 10.0)
                } else {
                    1.0 - 0.5 * 2f64.powf(-20.0 * t + 10.0)
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    0.5 * (1.0 - (1.0 - 4.0 * t * t).sqrt())
                } else {
                    0.5 * ((1.0 - (2.0 * t - 2.0).powi(2)).sqrt() + 1.0)
                }
            }
            Self::InBack => t * t * ((BACK_C1 + 1.0) * t - BACK_C1),
            Self::OutBack => {
                let u = t - 1.0;
                u * u * ((BACK_C1 + 1.0) * u + BACK_C1) + 1.0
            }
            Self::InOutBack => {
                if t < 0.5 {
                    0.5 * (4.0 * t * t * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2))
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * (u * u * ((BACK_C2 + 1.0) * u + BACK_C2) + 2.0)
                }
            }
            Self::InElastic => {
                -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
            }
            Self::OutElastic => {
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
            }
            Self::InOutElastic => {
                let s = ((20.0 * t - 11.125) * ELASTIC_C5).sin();
                if t < 0.5 {
                    -0.5 * 2f64.powf(20.0 * t - 10.0) * s
                } else {
                    0.5 * 2f64.powf(-20.0 * t + 10.0) * s + 1.0
                }
            }
            Self::InBounce => 1.0 - bounce_out(1.0 - t),
            Self::OutBounce => bounce_out(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    0.5 * (1.0 - bounce_out(1.0 - 2.0 * t))
                } else {
                    0.5 * bounce_out(2.0 * t - 1.0) + 0.5
                }
            }
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict resolution: unknown names are an [`BoxTweenError::Easing`] instead of linear.
impl FromStr for Ease {
    type Err = BoxTweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| BoxTweenError::easing(format!("unknown easing '{s}'")))
    }
}

/// Grouping used when presenting the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseCategory {
    /// Linear plus the short aliases.
    Basic,
    /// `t^2` family.
    Quadratic,
    /// `t^3` family.
    Cubic,
    /// `t^4` family.
    Quartic,
    /// `t^5` family.
    Quintic,
    /// Quarter-period sine.
    Sine,
    /// Powers of two.
    Exponential,
    /// Quarter-circle arcs.
    Circular,
    /// Overshooting cubic.
    Back,
    /// Damped oscillation.
    Elastic,
    /// Piecewise parabolic bounces.
    Bounce,
}

impl EaseCategory {
    /// Categories in presentation order.
    pub const ALL: [EaseCategory; 11] = [
        EaseCategory::Basic,
        EaseCategory::Quadratic,
        EaseCategory::Cubic,
        EaseCategory::Quartic,
        EaseCategory::Quintic,
        EaseCategory::Sine,
        EaseCategory::Exponential,
        EaseCategory::Circular,
        EaseCategory::Back,
        EaseCategory::Elastic,
        EaseCategory::Bounce,
    ];

    /// Lowercase category name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
            Self::Quintic => "quintic",
            Self::Sine => "sine",
            Self::Exponential => "exponential",
            Self::Circular => "circular",
            Self::Back => "back",
            Self::Elastic => "elastic",
            Self::Bounce => "bounce",
        }
    }

    /// Selectable names in this category.
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &["linear", "ease_in", "ease_out", "ease_in_out"],
            Self::Quadratic => &["ease_in_quad", "ease_out_quad", "ease_in_out_quad"],
            Self::Cubic => &["ease_in_cubic", "ease_out_cubic", "ease_in_out_cubic"],
            Self::Quartic => &["ease_in_quart", "ease_out_quart", "ease_in_out_quart"],
            Self::Quintic => &["ease_in_quint", "ease_out_quint", "ease_in_out_quint"],
            Self::Sine => &["ease_in_sine", "ease_out_sine", "ease_in_out_sine"],
            Self::Exponential => &["ease_in_expo", "ease_out_expo", "ease_in_out_expo"],
            Self::Circular => &["ease_in_circ", "ease_out_circ", "ease_in_out_circ"],
            Self::Back => &["ease_in_back", "ease_out_back", "ease_in_out_back"],
            Self::Elastic => &["ease_in_elastic", "ease_out_elastic", "ease_in_out_elastic"],
            Self::Bounce => &["ease_in_bounce", "ease_out_bounce", "ease_in_out_bounce"],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
