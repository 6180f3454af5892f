use crate::emit::commands::CommandWriter;
use crate::foundation::core::{LAYER_COUNT, LayerIndex};
use crate::snapshot::model::BoxState;
use crate::transition::engine::Transition;

/// Serialize a full transition run as a playable command listing.
///
/// Layout: header, initial enable flags for all four layers, starting geometry of the
/// participating layers, one pacing command, one block per frame `1..=N`, then the final
/// enable flags and final crops. Layers disabled at both ends only ever appear in the two
/// enable blocks.
#[tracing::instrument(skip(tr), fields(frames = tr.duration().get(), easing = tr.easing_name()))]
pub fn emit_transition(tr: &Transition) -> String {
    let initial = tr.initial_states();
    let target = tr.final_states();
    let animating = tr.participating_layers();
    let frames = tr.duration().get();

    let mut w = CommandWriter::new();
    w.comment(format_args!(
        "Duration: {frames} frames | Easing: {}",
        tr.easing_name()
    ));
    w.blank();

    w.comment("Initial Enable States");
    for layer in LayerIndex::ALL {
        let a = &initial[layer.as_usize()];
        w.enable(a.source_id, layer, tr.participates(layer));
    }
    w.blank();

    w.comment("Initial Positions and Masks");
    for &layer in &animating {
        let a = &initial[layer.as_usize()];
        w.geometry(a);
        if tr.mask_relevant(layer) {
            w.mask_enable(a.source_id, layer, true);
            w.crop(a.source_id, layer, &a.mask);
        }
        w.blank();
    }

    w.sleep();
    w.blank();

    w.comment("Animation Frames");
    for k in 1..=frames {
        let t = tr.progress(k);
        w.comment(format_args!("Frame {k}/{frames} (t={t:.3})"));
        for &layer in &animating {
            let s = tr.interpolate_layer(layer, t);
            w.geometry(&s);
            if tr.mask_relevant(layer) {
                w.crop(s.source_id, layer, &s.mask);
            }
        }
        w.sleep();
        w.blank();
    }

    w.comment("Final States");
    for layer in LayerIndex::ALL {
        let b = &target[layer.as_usize()];
        w.enable(b.source_id, layer, b.enabled);
    }
    for &layer in &animating {
        let b = &target[layer.as_usize()];
        if b.mask_enabled {
            w.mask_enable(b.source_id, layer, true);
            w.crop(b.source_id, layer, &b.mask);
        }
    }

    tracing::debug!(layers = animating.len(), "transition emitted");
    w.finish()
}

/// Serialize one complete arrangement: all nine commands for each of the four layers.
///
/// The output parses back to the same states, up to 4 decimals for geometry and 2 for crops.
pub fn emit_snapshot(states: &[BoxState; LAYER_COUNT]) -> String {
    let mut w = CommandWriter::new();
    for s in states {
        w.enable(s.source_id, s.layer(), s.enabled);
        w.geometry(s);
        w.mask_enable(s.source_id, s.layer(), s.mask_enabled);
        w.crop(s.source_id, s.layer(), &s.mask);
    }
    w.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/emit/script.rs"]
mod tests;
