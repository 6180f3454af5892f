use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::core::{FrameCount, LAYER_COUNT, LayerIndex};
use crate::foundation::error::BoxTweenResult;
use crate::snapshot::model::{BoxState, MaskRect, Snapshot};

/// One transition run: two complete arrangements, a length in frames and a curve.
///
/// The constructor copies both snapshots into fresh four-slot arrays, so the caller's
/// snapshots are never modified and absent layers become disabled placeholders. Every
/// sampling method returns new values; a `Transition` is immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    initial: [BoxState; LAYER_COUNT],
    target: [BoxState; LAYER_COUNT],
    duration: FrameCount,
    ease: Ease,
    easing_name: String,
}

/// Serializable description of a run, for logs and tooling.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TransitionSummary {
    /// Number of animated frames.
    pub frames: u32,
    /// Curve name as selected (see [`Transition::easing_name`]).
    pub easing: String,
    /// Layers that receive per-frame commands.
    pub participating: Vec<LayerIndex>,
}

impl Transition {
    /// Build a run from two snapshots.
    pub fn new(initial: &Snapshot, target: &Snapshot, duration: FrameCount, ease: Ease) -> Self {
        Self {
            initial: initial.padded(),
            target: target.padded(),
            duration,
            ease,
            easing_name: ease.name().to_owned(),
        }
    }

    /// Label the run with the name the curve was selected by.
    ///
    /// The name is trimmed and lowercased, so `Ease_In_Out` shows as `ease_in_out`. A name
    /// that does not resolve to this run's curve (an unknown name that fell back to linear)
    /// is replaced by the curve's canonical name.
    pub fn with_easing_name(mut self, name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        self.easing_name = if Ease::resolve(&name) == Some(self.ease) {
            name
        } else {
            self.ease.name().to_owned()
        };
        self
    }

    /// Build a run from raw user input.
    ///
    /// A non-positive `duration` is rejected before anything else happens; an unknown
    /// `easing` name falls back to linear.
    pub fn from_names(
        initial: &Snapshot,
        target: &Snapshot,
        duration: i64,
        easing: &str,
    ) -> BoxTweenResult<Self> {
        let duration = FrameCount::new(duration)?;
        Ok(Self::new(initial, target, duration, Ease::lookup(easing)).with_easing_name(easing))
    }

    /// Like [`Transition::from_names`] but an unknown easing name is an error.
    pub fn from_names_strict(
        initial: &Snapshot,
        target: &Snapshot,
        duration: i64,
        easing: &str,
    ) -> BoxTweenResult<Self> {
        let duration = FrameCount::new(duration)?;
        Ok(Self::new(initial, target, duration, easing.parse()?).with_easing_name(easing))
    }

    /// Initial arrangement, all four layers.
    pub fn initial_states(&self) -> &[BoxState; LAYER_COUNT] {
        &self.initial
    }

    /// Final arrangement, all four layers.
    pub fn final_states(&self) -> &[BoxState; LAYER_COUNT] {
        &self.target
    }

    /// Number of animated frames.
    pub fn duration(&self) -> FrameCount {
        self.duration
    }

    /// Curve applied to every field of every layer.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Name printed in the listing header: the selected name, or `linear` after a fallback.
    pub fn easing_name(&self) -> &str {
        &self.easing_name
    }

    /// A layer animates iff it is enabled at either end.
    pub fn participates(&self, layer: LayerIndex) -> bool {
        let i = layer.as_usize();
        self.initial[i].enabled || self.target[i].enabled
    }

    /// Participating layers in ascending order.
    pub fn participating_layers(&self) -> Vec<LayerIndex> {
        LayerIndex::ALL
            .into_iter()
            .filter(|&l| self.participates(l))
            .collect()
    }

    /// The crop rectangle animates iff the mask is enabled at either end.
    pub fn mask_relevant(&self, layer: LayerIndex) -> bool {
        let i = layer.as_usize();
        self.initial[i].mask_enabled || self.target[i].mask_enabled
    }

    /// Interpolated state of `layer` at normalized time `t`.
    ///
    /// Numeric fields follow `start + (end - start) * ease(t)`. Visibility is not blended: it
    /// keeps the initial flag until `t` reaches 1. The mask flag is the OR of both ends.
    pub fn interpolate_layer(&self, layer: LayerIndex, t: f64) -> BoxState {
        let a = &self.initial[layer.as_usize()];
        let b = &self.target[layer.as_usize()];
        let e = self.ease.apply(t);

        let mut out = BoxState::with_source(layer, a.source_id);
        out.enabled = if t < 1.0 { a.enabled } else { b.enabled };
        out.scale = <f64 as Lerp>::lerp(&a.scale, &b.scale, e);
        out.x = <f64 as Lerp>::lerp(&a.x, &b.x, e);
        out.y = <f64 as Lerp>::lerp(&a.y, &b.y, e);
        out.mask_enabled = a.mask_enabled || b.mask_enabled;
        out.mask = <MaskRect as Lerp>::lerp(&a.mask, &b.mask, e);
        out
    }

    /// All four layers at normalized time `t`.
    pub fn states_at(&self, t: f64) -> [BoxState; LAYER_COUNT] {
        LayerIndex::ALL.map(|l| self.interpolate_layer(l, t))
    }

    /// Normalized time of frame `k`: `k / duration`, exactly `1.0` from the last frame on.
    pub fn progress(&self, k: u32) -> f64 {
        self.duration.progress(k)
    }

    /// All four layers at frame `k`, for preview playback.
    ///
    /// Frame `0` is the initial arrangement before any animation; frames at or past the
    /// duration show the final values.
    pub fn frame_states(&self, k: u32) -> [BoxState; LAYER_COUNT] {
        self.states_at(self.progress(k))
    }

    /// Same run played backwards: initial and final arrangements exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            initial: self.target,
            target: self.initial,
            duration: self.duration,
            ease: self.ease,
            easing_name: self.easing_name.clone(),
        }
    }

    /// Frame count, curve and participating layers.
    pub fn summary(&self) -> TransitionSummary {
        TransitionSummary {
            frames: self.duration.get(),
            easing: self.easing_name.clone(),
            participating: self.participating_layers(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/engine.rs"]
mod tests;
