//! Sequencer: unit ownership and the public update API.
//!
//! Mirrors the flow of one page: set the page composition, register units
//! (each silently skipped when its region is absent), hand the scroll
//! triggers to the adapter, then step with `update(dt, inputs)` each tick and
//! apply the resulting changes/events.

use crate::config::Config;
use crate::ids::{IdAllocator, UnitId};
use crate::inputs::{HostEvent, Inputs, ScrollTriggerSpec};
use crate::outputs::{Outputs, SetupOp};
use crate::page::PageComposition;
use crate::units::accordion::{AccordionSpec, AccordionUnit};
use crate::units::countup::{CountUpSpec, CountUpUnit};
use crate::units::marquee::{MarqueeSpec, MarqueeUnit};
use crate::units::reveal::{RevealSpec, RevealTrigger, RevealUnit};
use crate::units::transition::{TransitionSpec, TransitionUnit};

/// Result of registering a unit: its id plus the one-time structural ops the
/// adapter applies before the first tick.
#[derive(Clone, Debug)]
pub struct Registration {
    pub unit: UnitId,
    pub setup: Vec<SetupOp>,
}

/// Owns every registered unit for the current page and steps them.
#[derive(Debug)]
pub struct Sequencer {
    cfg: Config,
    ids: IdAllocator,
    page: PageComposition,
    reveals: Vec<RevealUnit>,
    marquees: Vec<MarqueeUnit>,
    count_ups: Vec<CountUpUnit>,
    accordions: Vec<AccordionUnit>,
    transition: Option<TransitionUnit>,
    /// Single pending debounce timer, reset on each resize event.
    resize_pending: Option<f32>,
    outputs: Outputs,
}

impl Sequencer {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            page: PageComposition::default(),
            reveals: Vec::new(),
            marquees: Vec::new(),
            count_ups: Vec::new(),
            accordions: Vec::new(),
            transition: None,
            resize_pending: None,
            outputs: Outputs::default(),
        }
    }

    /// Declare the current page's regions and measured elements.
    pub fn set_page(&mut self, page: PageComposition) {
        self.page = page;
    }

    /// Refresh measurements after a layout change; marquees pick the new
    /// widths up on their next (debounced) reinitialization.
    pub fn update_measurements(&mut self, page: PageComposition) {
        self.page = page;
    }

    pub fn page(&self) -> &PageComposition {
        &self.page
    }

    /// Register a reveal timeline. `None` when the spec is invalid or its
    /// region or targets are absent from this page.
    pub fn add_reveal(&mut self, spec: &RevealSpec) -> Option<Registration> {
        if let Err(reason) = spec.timeline.validate_basic() {
            log::warn!("reveal '{}' rejected: {reason}", spec.region);
            return None;
        }
        let id = self.ids.alloc_unit();
        match RevealUnit::build(id, spec, &self.page) {
            Some((unit, setup)) => {
                self.reveals.push(unit);
                Some(Registration { unit: id, setup })
            }
            None => {
                log::debug!("reveal '{}' skipped: region absent", spec.region);
                None
            }
        }
    }

    pub fn add_marquee(&mut self, spec: &MarqueeSpec) -> Option<Registration> {
        let id = self.ids.alloc_unit();
        match MarqueeUnit::build(id, spec, &self.page, &mut self.ids) {
            Some((unit, setup)) => {
                self.marquees.push(unit);
                Some(Registration { unit: id, setup })
            }
            None => {
                log::debug!("marquee '{}' skipped: region absent", spec.region);
                None
            }
        }
    }

    pub fn add_count_up(&mut self, spec: &CountUpSpec) -> Option<Registration> {
        let id = self.ids.alloc_unit();
        match CountUpUnit::build(id, spec, &self.page, self.cfg.count_up_duration) {
            Some(unit) => {
                self.count_ups.push(unit);
                Some(Registration {
                    unit: id,
                    setup: Vec::new(),
                })
            }
            None => {
                log::debug!("count-up '{}' skipped: region absent", spec.region);
                None
            }
        }
    }

    pub fn add_accordion(&mut self, spec: &AccordionSpec) -> Option<Registration> {
        let id = self.ids.alloc_unit();
        match AccordionUnit::build(id, spec, &self.page) {
            Some(unit) => {
                self.accordions.push(unit);
                Some(Registration {
                    unit: id,
                    setup: Vec::new(),
                })
            }
            None => {
                log::debug!("accordion '{}' skipped: region absent", spec.region);
                None
            }
        }
    }

    pub fn add_transition(&mut self, spec: &TransitionSpec) -> Option<Registration> {
        let id = self.ids.alloc_unit();
        match TransitionUnit::build(id, spec, &self.page) {
            Some(unit) => {
                self.transition = Some(unit);
                Some(Registration {
                    unit: id,
                    setup: Vec::new(),
                })
            }
            None => None,
        }
    }

    /// Every intersection the adapter must observe for the registered units.
    pub fn scroll_triggers(&self) -> Vec<ScrollTriggerSpec> {
        let mut triggers: Vec<ScrollTriggerSpec> = self
            .reveals
            .iter()
            .filter_map(|r| r.scroll_trigger())
            .collect();
        for cu in &self.count_ups {
            triggers.extend(cu.scroll_triggers());
        }
        triggers
    }

    /// Step the sequencer by dt with the tick's host events, producing the
    /// changes and events for this tick.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Apply host events.
        for event in inputs.events {
            match event {
                HostEvent::PageReady => {
                    for reveal in &mut self.reveals {
                        if matches!(reveal.trigger, RevealTrigger::Load) {
                            reveal.start(&mut self.outputs);
                        }
                    }
                    if let Some(tr) = &mut self.transition {
                        tr.on_page_ready();
                    }
                }
                HostEvent::TriggerEntered { trigger } => {
                    for reveal in &mut self.reveals {
                        if reveal.matches_trigger(&trigger) {
                            reveal.start(&mut self.outputs);
                        }
                    }
                    for cu in &mut self.count_ups {
                        cu.on_trigger(&trigger);
                    }
                }
                HostEvent::Toggle { entry } => {
                    for acc in &mut self.accordions {
                        if acc.has_entry(&entry) {
                            acc.toggle(&entry, &mut self.outputs);
                        }
                    }
                }
                HostEvent::Resized => {
                    self.resize_pending = Some(self.cfg.resize_debounce_seconds);
                }
                HostEvent::NavigateRequested { href } => {
                    if let Some(tr) = &mut self.transition {
                        tr.on_navigate(&href, &mut self.outputs);
                    }
                }
            }
        }

        // 2) Debounced marquee reinitialization.
        if let Some(remaining) = self.resize_pending {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.resize_pending = None;
                for marquee in &mut self.marquees {
                    marquee.reinitialize(&self.page, &mut self.ids, &mut self.outputs);
                }
            } else {
                self.resize_pending = Some(remaining);
            }
        }

        // 3) Advance units.
        for reveal in &mut self.reveals {
            reveal.advance(dt, &mut self.outputs);
        }
        for marquee in &mut self.marquees {
            marquee.advance(dt, &mut self.outputs);
        }
        for cu in &mut self.count_ups {
            cu.advance(dt, &mut self.outputs);
        }
        for acc in &mut self.accordions {
            acc.advance(dt, &mut self.outputs);
        }
        if let Some(tr) = &mut self.transition {
            tr.advance(dt, &mut self.outputs);
        }

        &self.outputs
    }
}

impl Sequencer {
    /// Total duration of a registered reveal timeline (useful for adapters
    /// and tests).
    pub fn reveal_duration(&self, unit: UnitId) -> Option<f32> {
        self.reveals
            .iter()
            .find(|r| r.id == unit)
            .map(|r| r.timeline.duration())
    }

    /// Measured one-set width of a registered marquee.
    pub fn marquee_set_width(&self, unit: UnitId) -> Option<f32> {
        self.marquees
            .iter()
            .find(|m| m.id == unit)
            .map(|m| m.set_width)
    }

    /// Currently open accordion entry, if any.
    pub fn open_entry(&self, unit: UnitId) -> Option<&str> {
        self.accordions
            .iter()
            .find(|a| a.id == unit)
            .and_then(|a| a.open_entry())
    }
}
