use crate::foundation::core::LayerIndex;
use crate::foundation::error::{BoxTweenError, BoxTweenResult};
use crate::snapshot::model::Snapshot;
use crate::snapshot::record::{Record, scan};

const BOX_OP_PREFIX: &str = "SuperSourceV2Box";

/// Historical spelling of the mask operation family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MaskSpelling {
    Mask,
    Crop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MaskField {
    Enable,
    Left,
    Top,
    Right,
    Bottom,
}

/// One attribute write, as identified by a record's `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OpKind {
    Enable,
    Size,
    XPosition,
    YPosition,
    Mask(MaskSpelling, MaskField),
}

impl OpKind {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        let rest = id.strip_prefix(BOX_OP_PREFIX)?;
        let kind = match rest {
            "Enable" => Self::Enable,
            "Size" => Self::Size,
            "XPosition" => Self::XPosition,
            "YPosition" => Self::YPosition,
            _ => {
                let (spelling, field) = if let Some(f) = rest.strip_prefix("Mask") {
                    (MaskSpelling::Mask, f)
                } else if let Some(f) = rest.strip_prefix("Crop") {
                    (MaskSpelling::Crop, f)
                } else {
                    return None;
                };
                let field = match field {
                    "Enable" => MaskField::Enable,
                    "Left" => MaskField::Left,
                    "Top" => MaskField::Top,
                    "Right" => MaskField::Right,
                    "Bottom" => MaskField::Bottom,
                    _ => return None,
                };
                Self::Mask(spelling, field)
            }
        };
        Some(kind)
    }

    /// Name of the attribute carrying the written value.
    pub(crate) fn value_attr(self) -> &'static str {
        match self {
            Self::Enable | Self::Mask(_, MaskField::Enable) => "enable",
            Self::Size => "size",
            Self::XPosition => "xPosition",
            Self::YPosition => "yPosition",
            Self::Mask(_, MaskField::Left) => "left",
            Self::Mask(_, MaskField::Top) => "top",
            Self::Mask(_, MaskField::Right) => "right",
            Self::Mask(_, MaskField::Bottom) => "bottom",
        }
    }

    pub(crate) fn spelling(self) -> Option<MaskSpelling> {
        match self {
            Self::Mask(spelling, _) => Some(spelling),
            _ => None,
        }
    }

    fn default_number(self) -> f64 {
        match self {
            Self::Size => 1.0,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Value {
    Flag(bool),
    Number(f64),
}

/// A record that passed validation: target layer, source id and the write itself.
#[derive(Clone, Copy, Debug)]
struct FieldWrite {
    layer: LayerIndex,
    source_id: u32,
    kind: OpKind,
    value: Value,
}

impl FieldWrite {
    fn apply(self, snap: &mut Snapshot) {
        let state = snap.entry(self.layer, self.source_id);
        match (self.kind, self.value) {
            (OpKind::Enable, Value::Flag(v)) => state.enabled = v,
            (OpKind::Mask(_, MaskField::Enable), Value::Flag(v)) => state.mask_enabled = v,
            (OpKind::Size, Value::Number(v)) => state.scale = v,
            (OpKind::XPosition, Value::Number(v)) => state.x = v,
            (OpKind::YPosition, Value::Number(v)) => state.y = v,
            (OpKind::Mask(_, MaskField::Left), Value::Number(v)) => state.mask.left = v,
            (OpKind::Mask(_, MaskField::Top), Value::Number(v)) => state.mask.top = v,
            (OpKind::Mask(_, MaskField::Right), Value::Number(v)) => state.mask.right = v,
            (OpKind::Mask(_, MaskField::Bottom), Value::Number(v)) => state.mask.bottom = v,
            _ => {}
        }
    }
}

fn parse_bool(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn parse_number(raw: &str) -> Result<f64, String> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !v.is_finite() {
        return Err(format!("'{raw}' is not finite"));
    }
    Ok(v)
}

/// Validate one record. `Ok(None)` is a record outside the box-write family (e.g. `MacroSleep`).
fn interpret(rec: &Record<'_>) -> Result<Option<FieldWrite>, String> {
    let Some(id) = rec.id() else {
        return Err("record has no id".to_owned());
    };
    let Some(kind) = OpKind::from_id(id) else {
        if id.starts_with(BOX_OP_PREFIX) {
            return Err(format!("unknown box operation '{id}'"));
        }
        return Ok(None);
    };

    let raw_layer = rec
        .get("boxIndex")
        .ok_or_else(|| format!("{id}: missing boxIndex"))?;
    let layer = raw_layer
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|i| LayerIndex::new(i).ok())
        .ok_or_else(|| format!("{id}: invalid boxIndex '{raw_layer}'"))?;

    let source_id = match rec.get("superSource") {
        None => 0,
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("{id}: invalid superSource '{raw}'"))?,
    };

    let raw_value = rec.get(kind.value_attr());
    let value = match kind {
        OpKind::Enable | OpKind::Mask(_, MaskField::Enable) => Value::Flag(parse_bool(raw_value)),
        _ => match raw_value {
            None => Value::Number(kind.default_number()),
            Some(raw) => Value::Number(parse_number(raw).map_err(|e| format!("{id}: {e}"))?),
        },
    };

    Ok(Some(FieldWrite {
        layer,
        source_id,
        kind,
        value,
    }))
}

/// Parse a command listing into a snapshot, skipping anything malformed.
///
/// Each record writes one attribute of one layer; later writes win. Records with an unknown
/// id (including pacing commands), a bad `boxIndex` or an unparseable value are dropped
/// without creating a layer. Only layers actually written appear in the result.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_snapshot(text: &str) -> Snapshot {
    let mut snap = Snapshot::new();
    for rec in scan(text) {
        match interpret(&rec) {
            Ok(Some(write)) => {
                if write.kind.spelling() == Some(MaskSpelling::Crop) {
                    tracing::trace!(offset = rec.offset, "normalizing crop spelling to mask");
                }
                write.apply(&mut snap);
            }
            Ok(None) => {
                tracing::trace!(offset = rec.offset, id = ?rec.id(), "ignoring non-box record");
            }
            Err(reason) => {
                tracing::debug!(offset = rec.offset, %reason, "skipping malformed record");
            }
        }
    }
    snap
}

/// Strict counterpart of [`parse_snapshot`]: the first malformed box record is an error.
///
/// Records with an id outside the box-write family are still ignored, so a full transition
/// listing (comments, pacing commands) parses cleanly.
pub fn parse_snapshot_strict(text: &str) -> BoxTweenResult<Snapshot> {
    let mut snap = Snapshot::new();
    for rec in scan(text) {
        match interpret(&rec) {
            Ok(Some(write)) => write.apply(&mut snap),
            Ok(None) => {}
            Err(reason) => {
                return Err(BoxTweenError::parse(format!(
                    "record at byte {}: {reason}",
                    rec.offset
                )));
            }
        }
    }
    Ok(snap)
}

#[cfg(test)]
#[path = "../../tests/unit/snapshot/parse.rs"]
mod tests;
