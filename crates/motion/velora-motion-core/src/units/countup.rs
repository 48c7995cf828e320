//! Count-up stats: on first intersection, a numeric display animates from 0
//! to its original value, preserving any non-digit suffix ("%", "+"). Every
//! emitted frame is an integer; the final frame is exactly the original text.
//! Fires at most once per element.

use serde::{Deserialize, Serialize};

use crate::easing::{lerp_f32, Ease};
use crate::ids::UnitId;
use crate::inputs::ScrollTriggerSpec;
use crate::outputs::{Change, Outputs};
use crate::page::PageComposition;
use crate::units::PlayState;
use crate::value::{Property, Value};

fn default_fraction() -> f32 {
    0.8
}

/// Declarative count-up unit, one entry per matched stat element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountUpSpec {
    /// Anchor region; the unit is a no-op when this region is absent.
    pub region: String,
    /// Selector of the stat value elements.
    pub targets: String,
    #[serde(default = "default_fraction")]
    pub viewport_fraction: f32,
    /// Seconds; falls back to the sequencer config when absent.
    #[serde(default)]
    pub duration: Option<f32>,
}

#[derive(Debug)]
pub(crate) struct CountUpEntry {
    pub target: String,
    pub end: u64,
    pub suffix: String,
    pub state: PlayState,
}

#[derive(Debug)]
pub(crate) struct CountUpUnit {
    pub id: UnitId,
    pub viewport_fraction: f32,
    pub duration: f32,
    pub entries: Vec<CountUpEntry>,
}

/// Extract the first run of digits and the remaining non-digit text.
/// `"250+"` -> `(250, "+")`, `"98%"` -> `(98, "%")`.
pub(crate) fn parse_stat(text: &str) -> Option<(u64, String)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits_len = text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - start);
    let digits = &text[start..start + digits_len];
    let value: u64 = digits.parse().ok()?;
    let mut suffix = String::with_capacity(text.len() - digits_len);
    suffix.push_str(&text[..start]);
    suffix.push_str(&text[start + digits_len..]);
    Some((value, suffix))
}

impl CountUpUnit {
    /// `None` when the region is absent or no element carries a parsable
    /// integer. Elements with non-numeric text are skipped individually.
    pub fn build(
        id: UnitId,
        spec: &CountUpSpec,
        page: &PageComposition,
        default_duration: f32,
    ) -> Option<Self> {
        if !page.has_region(&spec.region) {
            return None;
        }
        let entries: Vec<CountUpEntry> = page
            .elements(&spec.targets)
            .iter()
            .filter_map(|el| {
                let text = el.text.as_deref()?.trim();
                let (end, suffix) = parse_stat(text)?;
                Some(CountUpEntry {
                    target: el.handle.clone(),
                    end,
                    suffix,
                    state: PlayState::Idle,
                })
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            id,
            viewport_fraction: spec.viewport_fraction,
            duration: spec.duration.unwrap_or(default_duration),
            entries,
        })
    }

    /// One trigger per entry; each element counts up the first time it enters.
    pub fn scroll_triggers(&self) -> Vec<ScrollTriggerSpec> {
        self.entries
            .iter()
            .map(|e| ScrollTriggerSpec {
                trigger: e.target.clone(),
                viewport_fraction: self.viewport_fraction,
                once: true,
            })
            .collect()
    }

    pub fn on_trigger(&mut self, fired: &str) {
        for entry in &mut self.entries {
            if entry.target == fired && entry.state == PlayState::Idle {
                entry.state = PlayState::Playing { t: 0.0 };
            }
        }
    }

    pub fn advance(&mut self, dt: f32, out: &mut Outputs) {
        for entry in &mut self.entries {
            if let PlayState::Playing { t } = entry.state {
                let t = t + dt;
                let u = if self.duration > 0.0 {
                    (t / self.duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let eased = Ease::Power2Out.eval(u);
                let val = lerp_f32(0.0, entry.end as f32, eased).round() as u64;
                out.push_change(Change {
                    unit: self.id,
                    target: entry.target.clone(),
                    property: Property::Text,
                    value: Value::Text(format!("{}{}", val, entry.suffix)),
                });
                entry.state = if t >= self.duration {
                    PlayState::Done
                } else {
                    PlayState::Playing { t }
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_value_and_suffix() {
        assert_eq!(parse_stat("250+"), Some((250, "+".to_string())));
        assert_eq!(parse_stat("98%"), Some((98, "%".to_string())));
        assert_eq!(parse_stat("12"), Some((12, String::new())));
        assert_eq!(parse_stat("n/a"), None);
    }

    #[test]
    fn prefix_is_preserved_outside_the_digit_run() {
        assert_eq!(parse_stat("+40 pts"), Some((40, "+ pts".to_string())));
    }
}
