//! Output contracts from the sequencer.
//!
//! Per-tick [`Outputs`] carry the property changes for this tick, keyed by
//! element handle, plus discrete semantic events. One-time [`SetupOp`]s are
//! returned at unit registration and describe structural rewrites the adapter
//! applies before the first tick.

use serde::{Deserialize, Serialize};

use crate::ids::{TweenId, UnitId};
use crate::value::{Property, Value};

/// One changed target property for this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub unit: UnitId,
    pub target: String,
    pub property: Property,
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    UnitStarted {
        unit: UnitId,
    },
    UnitFinished {
        unit: UnitId,
    },
    /// A marquee re-measured and restarted under a fresh tween handle.
    MarqueeRestarted {
        unit: UnitId,
        tween: TweenId,
        set_width: f32,
    },
    EntryOpened {
        unit: UnitId,
        entry: String,
    },
    EntryClosed {
        unit: UnitId,
        entry: String,
    },
    /// The transition overlay finished fading out and can be hidden.
    OverlayHidden {
        target: String,
    },
    /// The transition overlay must be shown before a fade-in starts.
    OverlayShown {
        target: String,
    },
    /// The fade-in finished (or the link was exempt); navigation may proceed.
    NavigationReady {
        href: String,
    },
}

/// One-time structural rewrite applied by the adapter at registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SetupOp {
    /// Replace the element's text with individually wrapped words, one target
    /// per word (handles `{target}::w{i}`).
    SplitWords { target: String, words: Vec<String> },
    /// Append `copies` clones of the element's children after the originals.
    DuplicateChildren { target: String, copies: u32 },
    /// Apply an immediate horizontal offset before any tween runs.
    SetX { target: String, x: f32 },
}

/// Outputs returned by `Sequencer::update()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: MotionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
