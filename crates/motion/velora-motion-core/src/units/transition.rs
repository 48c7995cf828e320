//! Page-transition fade: a full-page overlay fades out shortly after load,
//! and fades back in before an internal navigation. External targets,
//! fragment links, mailto:/tel:, and the current page are exempt and
//! navigate immediately.

use serde::{Deserialize, Serialize};

use crate::easing::Ease;
use crate::ids::UnitId;
use crate::outputs::{Change, MotionEvent, Outputs};
use crate::page::PageComposition;
use crate::timeline::Tween;
use crate::value::{Property, Value};

const FADE_OUT_DELAY: f32 = 0.05;
const FADE_OUT_DURATION: f32 = 0.5;
const FADE_IN_DURATION: f32 = 0.35;

/// Declarative page-transition unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Selector of the overlay element.
    pub overlay: String,
    /// File name of the page currently shown, e.g. "index.html".
    pub current_page: String,
}

/// True when the href leaves this page through the normal navigation flow
/// and should get the fade treatment.
pub(crate) fn needs_fade(href: &str, current_page: &str) -> bool {
    if href.is_empty()
        || href == "#"
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("http")
    {
        return false;
    }
    href != current_page
}

#[derive(Debug)]
enum FadeState {
    /// Waiting out the initial delay before the load fade-out.
    PendingOut { remaining: f32 },
    FadingOut { tween: Tween },
    Idle,
    FadingIn { href: String, tween: Tween },
}

#[derive(Debug)]
pub(crate) struct TransitionUnit {
    pub id: UnitId,
    overlay: String,
    current_page: String,
    state: FadeState,
}

impl TransitionUnit {
    pub fn build(id: UnitId, spec: &TransitionSpec, page: &PageComposition) -> Option<Self> {
        let overlay = page.first(&spec.overlay)?.handle.clone();
        Some(Self {
            id,
            overlay,
            current_page: spec.current_page.clone(),
            state: FadeState::Idle,
        })
    }

    pub fn on_page_ready(&mut self) {
        self.state = FadeState::PendingOut {
            remaining: FADE_OUT_DELAY,
        };
    }

    pub fn on_navigate(&mut self, href: &str, out: &mut Outputs) {
        if !needs_fade(href, &self.current_page) {
            out.push_event(MotionEvent::NavigationReady {
                href: href.to_string(),
            });
            return;
        }
        out.push_event(MotionEvent::OverlayShown {
            target: self.overlay.clone(),
        });
        self.state = FadeState::FadingIn {
            href: href.to_string(),
            tween: Tween::new(
                self.overlay.clone(),
                Property::Opacity,
                0.0,
                1.0,
                FADE_IN_DURATION,
                Ease::Power2In,
            ),
        };
    }

    pub fn advance(&mut self, dt: f32, out: &mut Outputs) {
        match &mut self.state {
            FadeState::PendingOut { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.state = FadeState::FadingOut {
                        tween: Tween::new(
                            self.overlay.clone(),
                            Property::Opacity,
                            1.0,
                            0.0,
                            FADE_OUT_DURATION,
                            Ease::Power2Out,
                        ),
                    };
                }
            }
            FadeState::FadingOut { tween } => {
                let value = tween.advance(dt);
                out.push_change(Change {
                    unit: self.id,
                    target: tween.target.clone(),
                    property: Property::Opacity,
                    value: Value::Float(value),
                });
                if tween.done() {
                    out.push_event(MotionEvent::OverlayHidden {
                        target: self.overlay.clone(),
                    });
                    self.state = FadeState::Idle;
                }
            }
            FadeState::Idle => {}
            FadeState::FadingIn { href, tween } => {
                let value = tween.advance(dt);
                out.push_change(Change {
                    unit: self.id,
                    target: tween.target.clone(),
                    property: Property::Opacity,
                    value: Value::Float(value),
                });
                if tween.done() {
                    let href = href.clone();
                    out.push_event(MotionEvent::NavigationReady { href });
                    self.state = FadeState::Idle;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exempt_links_do_not_fade() {
        for href in ["", "#", "#pricing", "mailto:a@b.c", "tel:+56 2", "https://x.com", "http://x.com"] {
            assert!(!needs_fade(href, "index.html"), "{href}");
        }
        assert!(!needs_fade("index.html", "index.html"));
    }

    #[test]
    fn internal_links_fade() {
        assert!(needs_fade("contact.html", "index.html"));
        assert!(needs_fade("terms.html", "index.html"));
    }
}
