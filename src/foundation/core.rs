use crate::foundation::error::{BoxTweenError, BoxTweenResult};

/// Number of independently configurable overlay layers.
pub const LAYER_COUNT: usize = 4;

/// Identity of one overlay layer, always in `0..=3`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
#[serde(transparent)]
pub struct LayerIndex(u8);

impl LayerIndex {
    /// All four layers in ascending order.
    pub const ALL: [LayerIndex; LAYER_COUNT] =
        [LayerIndex(0), LayerIndex(1), LayerIndex(2), LayerIndex(3)];

    /// Create a validated layer index.
    pub fn new(index: u8) -> BoxTweenResult<Self> {
        if usize::from(index) >= LAYER_COUNT {
            return Err(BoxTweenError::validation(format!(
                "layer index must be < {LAYER_COUNT}, got {index}"
            )));
        }
        Ok(Self(index))
    }

    /// Raw index value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Index usable for slot arrays.
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl std::fmt::Display for LayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of a transition in frames; always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FrameCount(u32);

impl FrameCount {
    /// Create a validated frame count.
    ///
    /// Accepts a signed value so callers can hand over raw user input and get the
    /// rejection as a [`BoxTweenError::Validation`].
    pub fn new(frames: i64) -> BoxTweenResult<Self> {
        if frames <= 0 {
            return Err(BoxTweenError::validation(format!(
                "duration must be > 0 frames, got {frames}"
            )));
        }
        let frames = u32::try_from(frames).map_err(|_| {
            BoxTweenError::validation(format!("duration must be <= {} frames", u32::MAX))
        })?;
        Ok(Self(frames))
    }

    /// Raw frame count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Normalized time of 1-based frame `k`; frame `N` lands exactly on `1.0`.
    pub fn progress(self, k: u32) -> f64 {
        if k >= self.0 {
            return 1.0;
        }
        f64::from(k) / f64::from(self.0)
    }
}
