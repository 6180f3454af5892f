use std::collections::BTreeMap;

use crate::animation::lerp::Lerp;
use crate::foundation::core::{LAYER_COUNT, LayerIndex};

/// Crop amounts of a layer's mask, in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct MaskRect {
    /// Crop from the left edge.
    pub left: f64,
    /// Crop from the top edge.
    pub top: f64,
    /// Crop from the right edge.
    pub right: f64,
    /// Crop from the bottom edge.
    pub bottom: f64,
}

impl Lerp for MaskRect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            left: <f64 as Lerp>::lerp(&a.left, &b.left, t),
            top: <f64 as Lerp>::lerp(&a.top, &b.top, t),
            right: <f64 as Lerp>::lerp(&a.right, &b.right, t),
            bottom: <f64 as Lerp>::lerp(&a.bottom, &b.bottom, t),
        }
    }
}

/// Complete configuration of one overlay layer at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BoxState {
    layer: LayerIndex,
    /// Which SuperSource the layer belongs to (`superSource` attribute).
    pub source_id: u32,
    /// Whether the layer is visible.
    pub enabled: bool,
    /// Size relative to full screen (`1.0` = full screen).
    pub scale: f64,
    /// Horizontal center position in scene units.
    pub x: f64,
    /// Vertical center position in scene units.
    pub y: f64,
    /// Whether the crop mask is active.
    pub mask_enabled: bool,
    /// Crop rectangle; meaningful only while `mask_enabled` is set.
    pub mask: MaskRect,
}

impl BoxState {
    /// Disabled layer with default geometry (full-screen scale, centered, no crop).
    pub fn new(layer: LayerIndex) -> Self {
        Self::with_source(layer, 0)
    }

    /// Like [`BoxState::new`] but tagged with a SuperSource id.
    pub fn with_source(layer: LayerIndex, source_id: u32) -> Self {
        Self {
            layer,
            source_id,
            enabled: false,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            mask_enabled: false,
            mask: MaskRect::default(),
        }
    }

    /// Layer this state describes. Fixed at construction.
    pub fn layer(&self) -> LayerIndex {
        self.layer
    }
}

/// One arrangement of layers, keyed by layer index.
///
/// Parsed snapshots only contain the layers their input referenced; [`Snapshot::padded`]
/// fills the gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    layers: BTreeMap<LayerIndex, BoxState>,
}

impl Snapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the state of `state.layer()`.
    pub fn insert(&mut self, state: BoxState) {
        self.layers.insert(state.layer(), state);
    }

    /// State of `layer`, if present.
    pub fn get(&self, layer: LayerIndex) -> Option<&BoxState> {
        self.layers.get(&layer)
    }

    pub(crate) fn entry(&mut self, layer: LayerIndex, source_id: u32) -> &mut BoxState {
        self.layers
            .entry(layer)
            .or_insert_with(|| BoxState::with_source(layer, source_id))
    }

    /// Present layers in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxState> {
        self.layers.values()
    }

    /// Number of present layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// `true` when no layer is present.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// All four slots, with absent layers replaced by disabled placeholders.
    pub fn padded(&self) -> [BoxState; LAYER_COUNT] {
        LayerIndex::ALL.map(|layer| {
            self.get(layer)
                .copied()
                .unwrap_or_else(|| BoxState::new(layer))
        })
    }
}

impl FromIterator<BoxState> for Snapshot {
    fn from_iter<I: IntoIterator<Item = BoxState>>(iter: I) -> Self {
        let mut snap = Self::new();
        for state in iter {
            snap.insert(state);
        }
        snap
    }
}
