//! Declarative timeline model.
//!
//! A [`TimelineSpec`] is an ordered list of [`TweenSpec`]s. Each tween names a
//! selector, the properties it animates *from* (settling on each property's
//! neutral value), a duration, an optional per-tween ease, a stagger across
//! matched elements, and a [`Position`] against the timeline built so far.

use serde::{Deserialize, Serialize};

use crate::easing::Ease;
use crate::value::Property;

/// Where a tween starts relative to the timeline built so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Begin at the running end of the timeline.
    #[default]
    Sequential,
    /// Begin before the running end by this many seconds ("-=0.4").
    Overlap(f32),
    /// Begin at an absolute timeline time.
    At(f32),
}

/// One property animated from a starting value to its neutral resting value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropFrom {
    pub property: Property,
    pub from: f32,
}

/// One tween over every element matched by `targets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    /// Selector resolved against the page composition.
    pub targets: String,
    pub props: Vec<PropFrom>,
    /// Seconds.
    pub duration: f32,
    /// Falls back to the timeline's default ease when absent.
    #[serde(default)]
    pub ease: Option<Ease>,
    /// Per-element start delay across matched elements, in seconds.
    #[serde(default)]
    pub stagger: f32,
    #[serde(default)]
    pub position: Position,
}

/// An ordered, time-offset sequence of property tweens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
    pub name: String,
    #[serde(default)]
    pub default_ease: Ease,
    pub tweens: Vec<TweenSpec>,
}

impl TimelineSpec {
    /// Validate basic invariants (finite positive durations, non-negative
    /// stagger, finite offsets).
    pub fn validate_basic(&self) -> Result<(), String> {
        for tween in &self.tweens {
            if !tween.duration.is_finite() || tween.duration <= 0.0 {
                return Err(format!(
                    "tween duration must be finite and > 0 for '{}'",
                    tween.targets
                ));
            }
            if !tween.stagger.is_finite() || tween.stagger < 0.0 {
                return Err(format!(
                    "tween stagger must be finite and >= 0 for '{}'",
                    tween.targets
                ));
            }
            match tween.position {
                Position::Overlap(d) if !d.is_finite() || d < 0.0 => {
                    return Err(format!(
                        "overlap offset must be finite and >= 0 for '{}'",
                        tween.targets
                    ));
                }
                Position::At(t) if !t.is_finite() || t < 0.0 => {
                    return Err(format!(
                        "absolute position must be finite and >= 0 for '{}'",
                        tween.targets
                    ));
                }
                _ => {}
            }
            if tween.props.is_empty() {
                return Err(format!("tween has no properties for '{}'", tween.targets));
            }
        }
        Ok(())
    }
}
