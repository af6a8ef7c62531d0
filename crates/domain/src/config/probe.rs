use crate::probe_request::{DEFAULT_FORWARD_DELAY_MS, DEFAULT_ITERATIONS};
use serde::{Deserialize, Serialize};

/// Values used when a command omits `--count` or `--delay`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProbeDefaults {
    #[serde(default = "default_count")]
    pub count: u32,

    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ProbeDefaults {
    fn default() -> Self {
        Self {
            count: default_count(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_count() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_delay_ms() -> u64 {
    DEFAULT_FORWARD_DELAY_MS
}
