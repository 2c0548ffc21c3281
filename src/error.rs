use std::io;

use crate::hardware::{HardwareState, HardwareSwitch};

/// Errors raised while routing a transition to the display.
///
/// Every variant means a collaborator broke its contract; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("unknown hardware switch {0:?}")]
    UnknownSwitch(String),

    #[error("cannot derive a state for switch {0:?}: old and new values are both empty")]
    AmbiguousState(String),

    #[error("no glyph for {switch} in state {state}")]
    MissingGlyph {
        switch: HardwareSwitch,
        state: HardwareState,
    },

    #[error("display surface failed: {0}")]
    Surface(#[from] io::Error),
}
