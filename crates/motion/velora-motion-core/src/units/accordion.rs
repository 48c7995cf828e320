//! FAQ accordion: at most one entry is open across the whole set at any
//! time. Activating a closed entry opens it and closes every other entry
//! (plus indicator 0 -> 45 degrees, answer panel height/opacity to the
//! measured natural height / 1). Re-activating the open entry closes it with
//! nothing else opening. Last click wins: a new toggle replaces in-flight
//! tweens for the affected targets.

use serde::{Deserialize, Serialize};

use crate::easing::Ease;
use crate::ids::UnitId;
use crate::outputs::{Change, MotionEvent, Outputs};
use crate::page::PageComposition;
use crate::timeline::Tween;
use crate::value::{Property, Value};

const PLUS_DURATION: f32 = 0.3;
const CLOSE_DURATION: f32 = 0.35;
const OPEN_DURATION: f32 = 0.4;
const OPEN_ROTATION: f32 = 45.0;

/// Declarative accordion unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccordionSpec {
    /// Anchor region; the unit is a no-op when this region is absent.
    pub region: String,
    /// Selector of the FAQ items (each with a measured answer height).
    pub items: String,
}

#[derive(Debug)]
struct AccordionEntry {
    handle: String,
    /// Natural height of the expanded answer panel.
    answer_height: f32,
    rotation: f32,
    height: f32,
    opacity: f32,
}

impl AccordionEntry {
    fn plus_target(&self) -> String {
        format!("{}::plus", self.handle)
    }
    fn answer_target(&self) -> String {
        format!("{}::answer", self.handle)
    }
}

#[derive(Debug)]
pub(crate) struct AccordionUnit {
    pub id: UnitId,
    entries: Vec<AccordionEntry>,
    open: Option<usize>,
    active: Vec<Tween>,
}

impl AccordionUnit {
    pub fn build(id: UnitId, spec: &AccordionSpec, page: &PageComposition) -> Option<Self> {
        if !page.has_region(&spec.region) {
            return None;
        }
        let entries: Vec<AccordionEntry> = page
            .elements(&spec.items)
            .iter()
            .map(|el| AccordionEntry {
                handle: el.handle.clone(),
                answer_height: el.height,
                rotation: 0.0,
                height: 0.0,
                opacity: 0.0,
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            id,
            entries,
            open: None,
            active: Vec::new(),
        })
    }

    pub fn open_entry(&self) -> Option<&str> {
        self.open.map(|i| self.entries[i].handle.as_str())
    }

    pub fn has_entry(&self, handle: &str) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    fn retarget(&mut self, target: String, property: Property, from: f32, to: f32, duration: f32, ease: Ease) {
        // Replace any in-flight tween on the same channel (last click wins).
        self.active
            .retain(|t| !(t.target == target && t.property == property));
        if (from - to).abs() > f32::EPSILON {
            self.active
                .push(Tween::new(target, property, from, to, duration, ease));
        }
    }

    fn close(&mut self, idx: usize) {
        let (plus, answer, rotation, height, opacity) = {
            let e = &self.entries[idx];
            (e.plus_target(), e.answer_target(), e.rotation, e.height, e.opacity)
        };
        self.retarget(plus, Property::Rotation, rotation, 0.0, PLUS_DURATION, Ease::Power2InOut);
        self.retarget(answer.clone(), Property::Height, height, 0.0, CLOSE_DURATION, Ease::Power2InOut);
        self.retarget(answer, Property::Opacity, opacity, 0.0, CLOSE_DURATION, Ease::Power2InOut);
    }

    fn open_up(&mut self, idx: usize) {
        let (plus, answer, rotation, height, opacity, natural) = {
            let e = &self.entries[idx];
            (
                e.plus_target(),
                e.answer_target(),
                e.rotation,
                e.height,
                e.opacity,
                e.answer_height,
            )
        };
        self.retarget(plus, Property::Rotation, rotation, OPEN_ROTATION, PLUS_DURATION, Ease::Power2InOut);
        self.retarget(answer.clone(), Property::Height, height, natural, OPEN_DURATION, Ease::Power2Out);
        self.retarget(answer, Property::Opacity, opacity, 1.0, OPEN_DURATION, Ease::Power2Out);
    }

    /// Handle a click on an entry's question.
    pub fn toggle(&mut self, handle: &str, out: &mut Outputs) {
        let Some(idx) = self.entries.iter().position(|e| e.handle == handle) else {
            return;
        };
        let was_open = self.open == Some(idx);

        // Close everything, mirroring the source behavior; tweens on already
        // closed entries collapse to no-ops in retarget.
        for i in 0..self.entries.len() {
            self.close(i);
        }
        if let Some(prev) = self.open.take() {
            out.push_event(MotionEvent::EntryClosed {
                unit: self.id,
                entry: self.entries[prev].handle.clone(),
            });
        }

        if !was_open {
            self.open_up(idx);
            self.open = Some(idx);
            out.push_event(MotionEvent::EntryOpened {
                unit: self.id,
                entry: handle.to_string(),
            });
        }
    }

    pub fn advance(&mut self, dt: f32, out: &mut Outputs) {
        if self.active.is_empty() {
            return;
        }
        let unit = self.id;
        let mut updates: Vec<(String, Property, f32)> = Vec::new();
        for tween in &mut self.active {
            let value = tween.advance(dt);
            out.push_change(Change {
                unit,
                target: tween.target.clone(),
                property: tween.property,
                value: Value::Float(value),
            });
            updates.push((tween.target.clone(), tween.property, value));
        }
        // Record current values back on the entries so the next toggle starts
        // from the true current state (last click wins mid-flight).
        for (target, property, value) in updates {
            let Some((base, channel)) = target.rsplit_once("::") else {
                continue;
            };
            if let Some(entry) = self.entries.iter_mut().find(|e| e.handle == base) {
                match (channel, property) {
                    ("plus", Property::Rotation) => entry.rotation = value,
                    ("answer", Property::Height) => entry.height = value,
                    ("answer", Property::Opacity) => entry.opacity = value,
                    _ => {}
                }
            }
        }
        self.active.retain(|t| !t.done());
    }
}
