//! Animation units. Each unit is registered only when its anchor region and
//! selectors are present in the page composition; everything else is a
//! silent skip.

pub mod accordion;
pub mod countup;
pub mod marquee;
pub mod reveal;
pub mod transition;

/// Playback state shared by one-shot units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayState {
    Idle,
    Playing { t: f32 },
    Done,
}
