//! Scripted input: JSON-lines transitions with millisecond offsets.
//!
//! ```text
//! # shift, then a held "A"
//! {"at_ms": 0,   "switch": "shift",   "old": "false", "new": "true"}
//! {"at_ms": 40,  "switch": "regular", "new": "A"}
//! {"at_ms": 120, "switch": "regular", "old": "A", "new": "false"}
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::gateway::GatewayHandle;
use crate::router::Transition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Offset from the start of playback.
    pub at_ms: u64,
    #[serde(flatten)]
    pub transition: Transition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayScript {
    steps: Vec<ScriptStep>,
}

impl ReplayScript {
    /// Parses one step per line. Blank lines and `#` comments are skipped and
    /// offsets must never decrease.
    pub fn parse(text: &str) -> Result<Self> {
        let mut steps: Vec<ScriptStep> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = index + 1;
            let step: ScriptStep = serde_json::from_str(line)
                .with_context(|| format!("Invalid replay step on line {}", line_no))?;

            if let Some(previous) = steps.last() {
                if step.at_ms < previous.at_ms {
                    bail!(
                        "Replay step on line {} goes back in time ({} ms after {} ms)",
                        line_no,
                        step.at_ms,
                        previous.at_ms
                    );
                }
            }
            steps.push(step);
        }

        Ok(Self { steps })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {:?}", path))?;
        Self::parse(&text).with_context(|| format!("Invalid replay script {:?}", path))
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset of the last step.
    pub fn duration(&self) -> Duration {
        self.steps
            .last()
            .map(|step| Duration::from_millis(step.at_ms))
            .unwrap_or_default()
    }

    /// Sends every step to `handle` at its offset from now. Fails if the
    /// gateway stops before the script ends.
    pub async fn play(&self, handle: &GatewayHandle) -> Result<()> {
        let start = tokio::time::Instant::now();
        info!("Replaying {} step(s) over {:?}", self.steps.len(), self.duration());

        for step in &self.steps {
            tokio::time::sleep_until(start + Duration::from_millis(step.at_ms)).await;
            debug!("replay: {} ms {:?}", step.at_ms, step.transition);
            if !handle.send(step.transition.clone()) {
                bail!("Gateway stopped at replay offset {} ms", step.at_ms);
            }
        }

        Ok(())
    }
}
