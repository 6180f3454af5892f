use crate::foundation::core::LayerIndex;
use crate::snapshot::model::{BoxState, MaskRect};

/// Decimal places for scale and position values.
pub(crate) const GEOMETRY_DECIMALS: usize = 4;
/// Decimal places for crop values.
pub(crate) const MASK_DECIMALS: usize = 2;

/// Line-oriented builder for a command listing.
///
/// Lines are joined with `\n` by [`CommandWriter::finish`]; no trailing newline.
#[derive(Debug, Default)]
pub(crate) struct CommandWriter {
    lines: Vec<String>,
}

impl CommandWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub(crate) fn comment(&mut self, text: impl std::fmt::Display) {
        self.lines.push(format!("<!-- {text} -->"));
    }

    /// One frame of playback delay.
    pub(crate) fn sleep(&mut self) {
        self.lines.push(r#"<Op id="MacroSleep" frames="1"/>"#.to_owned());
    }

    pub(crate) fn enable(&mut self, source_id: u32, layer: LayerIndex, on: bool) {
        self.lines.push(format!(
            r#"<Op id="SuperSourceV2BoxEnable" superSource="{source_id}" boxIndex="{layer}" enable="{}" />"#,
            flag(on)
        ));
    }

    /// Size, X and Y of `state`.
    pub(crate) fn geometry(&mut self, state: &BoxState) {
        let (ss, idx) = (state.source_id, state.layer());
        self.lines.push(format!(
            r#"<Op id="SuperSourceV2BoxSize" superSource="{ss}" boxIndex="{idx}" size="{}"/>"#,
            fixed(state.scale, GEOMETRY_DECIMALS)
        ));
        self.lines.push(format!(
            r#"<Op id="SuperSourceV2BoxXPosition" superSource="{ss}" boxIndex="{idx}" xPosition="{}"/>"#,
            fixed(state.x, GEOMETRY_DECIMALS)
        ));
        self.lines.push(format!(
            r#"<Op id="SuperSourceV2BoxYPosition" superSource="{ss}" boxIndex="{idx}" yPosition="{}"/>"#,
            fixed(state.y, GEOMETRY_DECIMALS)
        ));
    }

    pub(crate) fn mask_enable(&mut self, source_id: u32, layer: LayerIndex, on: bool) {
        self.lines.push(format!(
            r#"<Op id="SuperSourceV2BoxMaskEnable" superSource="{source_id}" boxIndex="{layer}" enable="{}"/>"#,
            flag(on)
        ));
    }

    /// The four crop commands, always in left/top/right/bottom order.
    pub(crate) fn crop(&mut self, source_id: u32, layer: LayerIndex, mask: &MaskRect) {
        for (op, attr, v) in [
            ("Left", "left", mask.left),
            ("Top", "top", mask.top),
            ("Right", "right", mask.right),
            ("Bottom", "bottom", mask.bottom),
        ] {
            self.lines.push(format!(
                r#"<Op id="SuperSourceV2BoxMask{op}" superSource="{source_id}" boxIndex="{layer}" {attr}="{}"/>"#,
                fixed(v, MASK_DECIMALS)
            ));
        }
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn flag(on: bool) -> &'static str {
    if on { "True" } else { "False" }
}

/// Fixed-point rendering. Negative values that round to zero keep their sign
/// (`-0.00001` prints `-0.0000`).
pub(crate) fn fixed(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}")
}

#[cfg(test)]
#[path = "../../tests/unit/emit/commands.rs"]
mod tests;
