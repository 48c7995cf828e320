//! Timeline construction and sampling.
//!
//! A [`Timeline`] is built once from a [`TimelineSpec`] against the current
//! page composition: selectors resolve to concrete element handles, tween
//! positions resolve to absolute start times (sequential, overlap against the
//! running end, or absolute), and stagger fans each tween out across its
//! matched elements. Sampling at time `t` emits eased per-element property
//! values; before a step's start the step holds its `from` value, so revealed
//! elements stay hidden until their step begins.

use hashbrown::HashMap;

use crate::data::{Position, TimelineSpec};
use crate::easing::{lerp_f32, Ease};
use crate::ids::UnitId;
use crate::outputs::{Change, Outputs};
use crate::page::{Element, PageComposition};
use crate::value::{Property, Value};

/// One property tween on one element, placed on the timeline.
#[derive(Clone, Debug)]
pub struct TimelineStep {
    pub target: String,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl TimelineStep {
    /// Value at timeline time `t` (holds `from` before start, `to` after end).
    #[inline]
    pub fn value_at(&self, t: f32) -> f32 {
        let u = if self.duration > 0.0 {
            ((t - self.start) / self.duration).clamp(0.0, 1.0)
        } else if t >= self.start {
            1.0
        } else {
            0.0
        };
        lerp_f32(self.from, self.to, self.ease.eval(u))
    }
}

/// A built, playable timeline. Plays once, forward-only.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub name: String,
    steps: Vec<TimelineStep>,
    duration: f32,
}

impl Timeline {
    /// Resolve a spec against the page. Tweens whose selector matches nothing
    /// are skipped silently and contribute nothing to the duration.
    pub fn build(spec: &TimelineSpec, page: &PageComposition) -> Self {
        Self::build_with_extra(spec, page, &HashMap::new())
    }

    /// Like [`Timeline::build`], with synthetic elements layered over the page
    /// (used for split-word targets that only exist after a setup op).
    pub fn build_with_extra(
        spec: &TimelineSpec,
        page: &PageComposition,
        extra: &HashMap<String, Vec<Element>>,
    ) -> Self {
        let mut steps = Vec::new();
        let mut running_end = 0.0f32;

        for tween in &spec.tweens {
            let elements: &[Element] = match extra.get(&tween.targets) {
                Some(list) => list.as_slice(),
                None => page.elements(&tween.targets),
            };
            if elements.is_empty() {
                log::debug!(
                    "timeline '{}': no elements for '{}', skipping tween",
                    spec.name,
                    tween.targets
                );
                continue;
            }

            let start = match tween.position {
                Position::Sequential => running_end,
                Position::Overlap(d) => (running_end - d).max(0.0),
                Position::At(t) => t.max(0.0),
            };
            let ease = tween.ease.unwrap_or(spec.default_ease);

            for (i, el) in elements.iter().enumerate() {
                let element_start = start + tween.stagger * i as f32;
                for prop in &tween.props {
                    steps.push(TimelineStep {
                        target: el.handle.clone(),
                        property: prop.property,
                        from: prop.from,
                        to: prop.property.neutral(),
                        start: element_start,
                        duration: tween.duration,
                        ease,
                    });
                }
            }

            let last_start = start + tween.stagger * (elements.len() - 1) as f32;
            running_end = running_end.max(last_start + tween.duration);
        }

        Self {
            name: spec.name.clone(),
            steps,
            duration: running_end,
        }
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn finished(&self, t: f32) -> bool {
        t >= self.duration
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    /// Emit a change for every step at timeline time `t`.
    pub fn sample(&self, t: f32, unit: UnitId, out: &mut Outputs) {
        for step in &self.steps {
            out.push_change(Change {
                unit,
                target: step.target.clone(),
                property: step.property,
                value: Value::Float(step.value_at(t)),
            });
        }
    }
}

/// A single live tween used by the accordion, the page fade, and anything
/// else that animates outside a built timeline.
#[derive(Clone, Debug)]
pub(crate) struct Tween {
    pub target: String,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub ease: Ease,
    pub elapsed: f32,
}

impl Tween {
    pub fn new(
        target: impl Into<String>,
        property: Property,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> Self {
        Self {
            target: target.into(),
            property,
            from,
            to,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    /// Advance and return the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        let u = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        lerp_f32(self.from, self.to, self.ease.eval(u))
    }

    #[inline]
    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}
