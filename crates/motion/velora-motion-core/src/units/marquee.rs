//! Continuous marquee: the container's children are duplicated two extra
//! times for a seamless wraparound set, then translated at constant speed,
//! looping forever. Travel per loop is exactly the measured width of one
//! original set, so the loop point is invisible. Resize kills the tween and
//! restarts it against fresh measurements.

use serde::{Deserialize, Serialize};

use crate::ids::{IdAllocator, TweenId, UnitId};
use crate::outputs::{Change, MotionEvent, Outputs, SetupOp};
use crate::page::PageComposition;
use crate::value::{Property, Value};

/// Declarative marquee unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarqueeSpec {
    /// Anchor region; the unit is a no-op when this region is absent.
    pub region: String,
    /// Selector of the translated container.
    pub container: String,
    /// Selector of the original items (before duplication).
    pub items: String,
    /// Seconds to traverse one full set width.
    pub seconds_per_set: f32,
    /// Inter-item gap included in the set width, if the layout uses one.
    #[serde(default)]
    pub gap: f32,
    /// Start offset one set to the left (the loop seam starts off-screen).
    #[serde(default)]
    pub start_at_set_offset: bool,
}

#[derive(Debug)]
pub(crate) struct MarqueeUnit {
    pub id: UnitId,
    pub spec: MarqueeSpec,
    pub tween: TweenId,
    pub container: String,
    pub set_width: f32,
    /// Wrap-window start; x travels from `origin` down to `origin - set_width`.
    pub origin: f32,
    pub x: f32,
}

impl MarqueeUnit {
    /// `None` when the region, container, or items are absent.
    pub fn build(
        id: UnitId,
        spec: &MarqueeSpec,
        page: &PageComposition,
        ids: &mut IdAllocator,
    ) -> Option<(Self, Vec<SetupOp>)> {
        if !page.has_region(&spec.region) {
            return None;
        }
        let container = page.first(&spec.container)?.handle.clone();
        if page.elements(&spec.items).is_empty() {
            return None;
        }

        let set_width = measure_set(spec, page);
        let origin = if spec.start_at_set_offset {
            -set_width
        } else {
            0.0
        };

        let setup = vec![
            SetupOp::DuplicateChildren {
                target: container.clone(),
                copies: 2,
            },
            SetupOp::SetX {
                target: container.clone(),
                x: origin,
            },
        ];

        Some((
            Self {
                id,
                spec: spec.clone(),
                tween: ids.alloc_tween(),
                container,
                set_width,
                origin,
                x: origin,
            },
            setup,
        ))
    }

    /// Kill the running tween and restart against fresh measurements.
    /// The configured speed (seconds per set) survives; only the width changes.
    pub fn reinitialize(&mut self, page: &PageComposition, ids: &mut IdAllocator, out: &mut Outputs) {
        self.set_width = measure_set(&self.spec, page);
        self.origin = if self.spec.start_at_set_offset {
            -self.set_width
        } else {
            0.0
        };
        self.x = self.origin;
        self.tween = ids.alloc_tween();
        out.push_event(MotionEvent::MarqueeRestarted {
            unit: self.id,
            tween: self.tween,
            set_width: self.set_width,
        });
    }

    pub fn advance(&mut self, dt: f32, out: &mut Outputs) {
        if self.set_width <= 0.0 || self.spec.seconds_per_set <= 0.0 {
            return;
        }
        let speed = self.set_width / self.spec.seconds_per_set;
        self.x -= speed * dt;
        let lower = self.origin - self.set_width;
        while self.x <= lower {
            self.x += self.set_width;
        }
        out.push_change(Change {
            unit: self.id,
            target: self.container.clone(),
            property: Property::X,
            value: Value::Float(self.x),
        });
    }
}

/// Width of one original set: item widths plus one gap per item.
fn measure_set(spec: &MarqueeSpec, page: &PageComposition) -> f32 {
    page.elements(&spec.items)
        .iter()
        .map(|el| el.width + spec.gap)
        .sum()
}
