//! Sequencer configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the sequencer. Keep this minimal; expand as needed without
/// breaking the API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Debounce window for resize-driven marquee reinitialization, seconds.
    pub resize_debounce_seconds: f32,
    /// Default count-up duration when a spec does not override it, seconds.
    pub count_up_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resize_debounce_seconds: 0.25,
            count_up_duration: 1.5,
        }
    }
}
