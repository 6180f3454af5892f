use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::ease::Ease;
use crate::emit::script::emit_transition;
use crate::foundation::core::FrameCount;
use crate::foundation::error::{BoxTweenError, BoxTweenResult};
use crate::snapshot::model::Snapshot;
use crate::snapshot::parse::{parse_snapshot, parse_snapshot_strict};
use crate::transition::engine::Transition;

/// JSON description of one transition run.
///
/// ```json
/// { "initial": "wide.xml", "final": "split.xml", "duration": 30, "easing": "ease_in_out_cubic" }
/// ```
///
/// Snapshot paths are resolved against the directory passed to [`TransitionJob::run`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionJob {
    /// Command listing of the starting arrangement.
    pub initial: PathBuf,
    /// Command listing of the ending arrangement.
    #[serde(rename = "final")]
    pub target: PathBuf,
    /// Frame count; must be positive.
    pub duration: i64,
    /// Curve name; unknown names mean linear unless `strict` is set.
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Reject malformed records and unknown curve names instead of skipping them.
    #[serde(default)]
    pub strict: bool,
}

fn default_easing() -> String {
    "linear".to_owned()
}

impl TransitionJob {
    /// Parse a job from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BoxTweenResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BoxTweenError::serde(format!("parse transition job JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BoxTweenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BoxTweenError::validation(format!("open transition job '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the settings, load both snapshots and build the transition.
    pub fn build(&self, base_dir: &Path) -> BoxTweenResult<Transition> {
        let duration = FrameCount::new(self.duration)?;
        let ease = if self.strict {
            self.easing.parse::<Ease>()?
        } else {
            Ease::lookup(&self.easing)
        };
        let initial = self.load_snapshot(base_dir, &self.initial)?;
        let target = self.load_snapshot(base_dir, &self.target)?;
        Ok(Transition::new(&initial, &target, duration, ease).with_easing_name(&self.easing))
    }

    /// Build the transition and serialize it.
    pub fn run(&self, base_dir: &Path) -> BoxTweenResult<String> {
        Ok(emit_transition(&self.build(base_dir)?))
    }

    fn load_snapshot(&self, base_dir: &Path, rel: &Path) -> BoxTweenResult<Snapshot> {
        let path = base_dir.join(rel);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            BoxTweenError::validation(format!("read snapshot '{}': {e}", path.display()))
        })?;
        if self.strict {
            parse_snapshot_strict(&text)
        } else {
            Ok(parse_snapshot(&text))
        }
    }
}
