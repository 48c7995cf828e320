//! Animatable values and property channels.
//!
//! Reveal tweens use gsap-`from` semantics: each property animates from its
//! declared starting value to the property's neutral resting value, which is
//! where the stylesheet left the element.

use serde::{Deserialize, Serialize};

/// A value written to a target: numeric property frames, or whole-text frames
/// (count-up stats rewrite the element's text each tick).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Float(f32),
    Text(String),
}

/// Property channels the sequencer animates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    X,
    Y,
    XPercent,
    YPercent,
    Opacity,
    Scale,
    Rotation,
    Blur,
    Height,
    Text,
}

impl Property {
    /// The resting value a `from`-style tween settles on.
    #[inline]
    pub fn neutral(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            _ => 0.0,
        }
    }
}
