//! Input contracts for the sequencer.
//!
//! The adapter observes the host (load, intersection observers, clicks,
//! resizes, link activations) and passes the events into
//! `Sequencer::update()` each tick.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub events: Vec<HostEvent>,
}

impl Inputs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(event: HostEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// The expanded page is ready and measured; load-triggered units may run.
    PageReady,
    /// A scroll trigger's viewport threshold was crossed.
    TriggerEntered { trigger: String },
    /// An accordion entry's question was activated.
    Toggle { entry: String },
    /// The viewport changed size. Measurements are re-read from the page
    /// composition once the debounce window closes.
    Resized,
    /// An internal link was activated; run the page fade before navigating.
    NavigateRequested { href: String },
}

/// One intersection the adapter must observe on the sequencer's behalf.
/// `viewport_fraction` 0.8 means "top of the trigger element reaches 80%
/// down the viewport". All reveal triggers fire once, forward-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollTriggerSpec {
    pub trigger: String,
    pub viewport_fraction: f32,
    pub once: bool,
}
