//! Velora Motion Core (host-agnostic)
//!
//! Declarative animation sequencing for marketing pages: load- and
//! scroll-triggered reveal timelines, continuous marquees, count-up stats,
//! an exclusive FAQ accordion, and the page-transition fade.
//!
//! The crate owns no render target. A hosting adapter declares which page
//! regions exist (with measured elements), forwards host events each tick
//! (`PageReady`, `TriggerEntered`, `Toggle`, `Resized`, `NavigateRequested`),
//! and applies the per-tick property [`Change`]s and one-time [`SetupOp`]s the
//! [`Sequencer`] emits. Absent regions or selectors are silent no-ops, never
//! errors: the same plan serves pages that contain only a subset of regions.

pub mod config;
pub mod data;
pub mod easing;
pub mod engine;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod page;
pub mod timeline;
pub mod units;
pub mod value;

// Re-exports for adapters.
pub use config::Config;
pub use data::{Position, PropFrom, TimelineSpec, TweenSpec};
pub use easing::Ease;
pub use engine::{Registration, Sequencer};
pub use ids::{IdAllocator, TweenId, UnitId};
pub use inputs::{HostEvent, Inputs, ScrollTriggerSpec};
pub use outputs::{Change, MotionEvent, Outputs, SetupOp};
pub use page::{Element, PageComposition, Region};
pub use timeline::Timeline;
pub use units::accordion::AccordionSpec;
pub use units::countup::CountUpSpec;
pub use units::marquee::MarqueeSpec;
pub use units::reveal::{RevealSpec, RevealTrigger, SplitHeading};
pub use units::transition::TransitionSpec;
pub use value::{Property, Value};
