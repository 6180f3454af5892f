//! boxtween turns two SuperSource box arrangements into a frame-by-frame macro.
//!
//! A run takes an initial and a final command listing (four overlay layers, each with
//! visibility, scale, position and crop mask), a frame count and an easing curve, and emits a
//! listing that steps every visible layer from one arrangement to the other, one
//! `MacroSleep` per frame:
//!
//! - Parse both listings with [`parse_snapshot`] into [`Snapshot`]s
//! - Build a [`Transition`] (or load a [`TransitionJob`])
//! - Serialize it with [`emit_transition`]
//!
//! Everything is synchronous and deterministic; the same inputs always produce the same
//! text.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod emit;
mod foundation;
mod job;
mod snapshot;
mod transition;

pub use crate::animation::ease::{Ease, EaseCategory};
pub use crate::animation::lerp::Lerp;
pub use crate::emit::script::{emit_snapshot, emit_transition};
pub use crate::foundation::core::{FrameCount, LAYER_COUNT, LayerIndex};
pub use crate::foundation::error::{BoxTweenError, BoxTweenResult};
pub use crate::job::TransitionJob;
pub use crate::snapshot::model::{BoxState, MaskRect, Snapshot};
pub use crate::snapshot::parse::{parse_snapshot, parse_snapshot_strict};
pub use crate::transition::engine::{Transition, TransitionSummary};
