//! Reveal units: load-triggered and scroll-triggered one-shot timelines.
//!
//! Load reveals start on `PageReady` in declared order. Scroll reveals start
//! on their trigger's first intersection and never replay. The hero variant
//! splits its heading text on whitespace first and fans the word tweens out
//! over synthetic per-word targets.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data::TimelineSpec;
use crate::ids::UnitId;
use crate::inputs::ScrollTriggerSpec;
use crate::outputs::{MotionEvent, Outputs, SetupOp};
use crate::page::{Element, PageComposition};
use crate::timeline::Timeline;
use crate::units::PlayState;

/// What starts a reveal timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealTrigger {
    /// Fires once on `PageReady`.
    Load,
    /// Fires once when the trigger element crosses the viewport threshold.
    Scroll {
        trigger: String,
        viewport_fraction: f32,
    },
}

/// Heading split: the heading's text is split on whitespace, each word
/// wrapped for independent animation, and the word tweens target
/// `word_targets` (handles `{heading-handle}::w{i}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitHeading {
    /// Selector of the heading whose text is split.
    pub selector: String,
    /// Synthetic selector the timeline's word tweens use.
    pub word_targets: String,
}

/// Declarative reveal unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Anchor region; the unit is a no-op when this region is absent.
    pub region: String,
    pub trigger: RevealTrigger,
    pub timeline: TimelineSpec,
    #[serde(default)]
    pub split_heading: Option<SplitHeading>,
}

#[derive(Debug)]
pub(crate) struct RevealUnit {
    pub id: UnitId,
    pub trigger: RevealTrigger,
    pub timeline: Timeline,
    pub state: PlayState,
}

impl RevealUnit {
    /// Build against the page; `None` when the anchor region is absent or the
    /// timeline resolves to nothing. Returns the unit plus its setup ops.
    pub fn build(
        id: UnitId,
        spec: &RevealSpec,
        page: &PageComposition,
    ) -> Option<(Self, Vec<SetupOp>)> {
        if !page.has_region(&spec.region) {
            return None;
        }

        let mut setup = Vec::new();
        let mut extra: HashMap<String, Vec<Element>> = HashMap::new();

        if let Some(split) = &spec.split_heading {
            if let Some(heading) = page.first(&split.selector) {
                let text = heading.text.as_deref().unwrap_or("").trim();
                let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
                if !words.is_empty() {
                    let elements = (0..words.len())
                        .map(|i| Element::new(format!("{}::w{}", heading.handle, i)))
                        .collect();
                    extra.insert(split.word_targets.clone(), elements);
                    setup.push(SetupOp::SplitWords {
                        target: heading.handle.clone(),
                        words,
                    });
                }
            }
        }

        let timeline = Timeline::build_with_extra(&spec.timeline, page, &extra);
        if timeline.is_empty() {
            return None;
        }

        Some((
            Self {
                id,
                trigger: spec.trigger.clone(),
                timeline,
                state: PlayState::Idle,
            },
            setup,
        ))
    }

    pub fn scroll_trigger(&self) -> Option<ScrollTriggerSpec> {
        match &self.trigger {
            RevealTrigger::Load => None,
            RevealTrigger::Scroll {
                trigger,
                viewport_fraction,
            } => Some(ScrollTriggerSpec {
                trigger: trigger.clone(),
                viewport_fraction: *viewport_fraction,
                once: true,
            }),
        }
    }

    /// Start if idle. Finished units never replay (forward-only).
    pub fn start(&mut self, out: &mut Outputs) {
        if self.state == PlayState::Idle {
            self.state = PlayState::Playing { t: 0.0 };
            out.push_event(MotionEvent::UnitStarted { unit: self.id });
        }
    }

    pub fn matches_trigger(&self, fired: &str) -> bool {
        matches!(&self.trigger, RevealTrigger::Scroll { trigger, .. } if trigger == fired)
    }

    pub fn advance(&mut self, dt: f32, out: &mut Outputs) {
        if let PlayState::Playing { t } = self.state {
            let t = t + dt;
            self.timeline.sample(t, self.id, out);
            if self.timeline.finished(t) {
                self.state = PlayState::Done;
                out.push_event(MotionEvent::UnitFinished { unit: self.id });
            } else {
                self.state = PlayState::Playing { t };
            }
        }
    }
}
