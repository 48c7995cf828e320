//! Built-in shorthand tags.
//!
//! `site-btn`, `site-tag`, `site-faq`, `site-navbar`, `site-footer`: the
//! reusable blocks page authors stamp out. Registered together with
//! [`Registry::with_builtin_tags`].

use crate::chrome::SiteChrome;
use crate::node::Node;
use crate::registry::{broken, Registry, TagInvocation};

const ARROW_SVG: &str = r#"<svg class="arrow-icon" viewBox="0 0 12 12" fill="none"><path d="M2 6H10M10 6L6 2M10 6L6 10" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

impl Registry {
    /// A registry with every built-in tag registered against the given
    /// site chrome.
    pub fn with_builtin_tags(chrome: &SiteChrome) -> Self {
        let mut registry = Self::new();
        registry.register("site-btn", expand_button);
        registry.register("site-tag", expand_section_tag);
        registry.register("site-faq", expand_faq_item);
        let nav_chrome = chrome.clone();
        registry.register("site-navbar", move |inv| expand_navbar(inv, &nav_chrome));
        let footer_chrome = chrome.clone();
        registry.register("site-footer", move |inv| expand_footer(inv, &footer_chrome));
        registry
    }
}

/// `<site-btn variant="primary" [href="..."]>Text</site-btn>`
///
/// Renders a `button`, or an `a` when `href` is present; external targets
/// open in a new tab. The `link` variant uses a bare arrow icon, every other
/// variant wraps it.
pub fn expand_button(inv: &TagInvocation) -> Node {
    let variant = inv.attr("variant").unwrap_or("primary");
    let href = inv.attr("href");

    let mut el = match href {
        Some(href) => {
            let mut a = Node::element("a").attr("href", href);
            if href.starts_with("http") {
                a = a
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer");
            }
            a
        }
        None => Node::element("button"),
    };
    el = el.class(format!("btn btn--{variant}"));

    el = el.child(Node::element("span").child(Node::text(&inv.text)));
    if variant == "link" {
        el.child(Node::raw(ARROW_SVG))
    } else {
        el.child(Node::element("span").class("btn__icon").child(Node::raw(ARROW_SVG)))
    }
}

/// `<site-tag [variant="blue"] [center]>Text</site-tag>`
///
/// Section label with a `/` prefix.
pub fn expand_section_tag(inv: &TagInvocation) -> Node {
    let blue = inv.attr("variant") == Some("blue");

    let mut div_class = String::from("section-tag");
    if blue {
        div_class.push_str(" section-tag--blue");
    }
    if inv.has_flag("center") {
        div_class.push_str(" section-tag--center");
    }

    let mut span = Node::element("span");
    if blue {
        span = span.class("section-tag__text section-tag__text--blue");
    }
    span = span.child(Node::text(format!("/{}", inv.text)));

    Node::element("div").class(div_class).child(span)
}

/// `<site-faq question="...">Answer text</site-faq>`
///
/// Expands to the question/answer pair the accordion drives. `question` is
/// required; without it the tag renders as a broken element.
pub fn expand_faq_item(inv: &TagInvocation) -> Node {
    let Some(question) = inv.attr("question") else {
        return broken("site-faq", "missing attribute question");
    };

    Node::element("div")
        .class("faq__item faq__item--default")
        .child(
            Node::element("button")
                .class("faq__question")
                .child(
                    Node::element("span")
                        .class("faq__question-text")
                        .child(Node::text(question)),
                )
                .child(Node::element("span").class("faq__plus")),
        )
        .child(
            Node::element("div")
                .class("faq__answer")
                .child(Node::element("p").child(Node::text(&inv.text))),
        )
}

/// `<site-navbar></site-navbar>`, the shared navigation across all pages.
pub fn expand_navbar(_inv: &TagInvocation, chrome: &SiteChrome) -> Node {
    let links = chrome.nav_links.iter().map(|link| {
        Node::element("a")
            .attr("href", &link.href)
            .class("navbar__link")
            .child(Node::text(&link.label))
    });

    Node::element("nav").class("navbar").child(
        Node::element("div")
            .class("navbar__inner")
            .child(
                Node::element("a")
                    .attr("href", &chrome.home_href)
                    .class("navbar__logo")
                    .child(
                        Node::element("img")
                            .attr("src", &chrome.logo_src)
                            .attr("alt", &chrome.brand),
                    ),
            )
            .child(Node::element("div").class("navbar__links").children(links)),
    )
}

/// `<site-footer></site-footer>`, the shared footer across all pages.
pub fn expand_footer(_inv: &TagInvocation, chrome: &SiteChrome) -> Node {
    let nav_col = |label: &str, links: Vec<Node>| {
        Node::element("div")
            .class("footer__nav-col")
            .child(
                Node::element("span")
                    .class("footer__nav-label")
                    .child(Node::text(label)),
            )
            .child(Node::element("div").class("footer__nav-links").children(links))
    };

    let site_links: Vec<Node> = chrome
        .nav_links
        .iter()
        .map(|l| Node::element("a").attr("href", &l.href).child(Node::text(&l.label)))
        .collect();
    let legal_links: Vec<Node> = chrome
        .legal_links
        .iter()
        .map(|l| Node::element("a").attr("href", &l.href).child(Node::text(&l.label)))
        .collect();
    let contact_links = vec![
        Node::element("a")
            .attr("href", format!("mailto:{}", chrome.contact_email))
            .child(Node::text(&chrome.contact_email)),
        Node::element("span").child(Node::text(&chrome.location)),
    ];

    Node::element("footer")
        .class("footer")
        .child(Node::element("div").class("footer__orb footer__orb--blue"))
        .child(Node::element("div").class("footer__orb footer__orb--light"))
        .child(
            Node::element("div")
                .class("footer__inner")
                .child(
                    Node::element("div")
                        .class("footer__brand")
                        .child(
                            Node::element("h2")
                                .class("footer__brand-name")
                                .child(Node::text(&chrome.brand)),
                        )
                        .child(
                            Node::element("p")
                                .class("footer__brand-desc")
                                .child(Node::text(&chrome.tagline)),
                        ),
                )
                .child(
                    Node::element("nav")
                        .class("footer__nav")
                        .child(nav_col("/NAVIGATION", site_links))
                        .child(nav_col("/LEGAL", legal_links))
                        .child(nav_col("/CONTACT", contact_links)),
                )
                .child(
                    Node::element("div").class("footer__bottom").child(
                        Node::element("span")
                            .class("footer__copyright")
                            .child(Node::text(&chrome.copyright)),
                    ),
                ),
        )
}
