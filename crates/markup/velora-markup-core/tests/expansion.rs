use velora_markup_core::{Node, Registry, SiteChrome, TagInvocation};

fn builtin() -> Registry {
    Registry::with_builtin_tags(&SiteChrome::default())
}

#[test]
fn button_defaults_to_primary_variant() {
    let registry = builtin();
    let inv = TagInvocation::new().with_text("Get started");
    let node = registry.expand("site-btn", &inv).unwrap();

    assert_eq!(node.tag(), Some("button"));
    assert_eq!(node.get_attr("class"), Some("btn btn--primary"));
    let html = node.render();
    assert!(html.contains("<span>Get started</span>"));
    assert!(html.contains("btn__icon"));
    assert!(html.contains("arrow-icon"));
}

#[test]
fn button_with_href_renders_anchor() {
    let registry = builtin();
    let inv = TagInvocation::new()
        .with_attr("variant", "secondary")
        .with_attr("href", "contact.html")
        .with_text("Contact");
    let node = registry.expand("site-btn", &inv).unwrap();

    assert_eq!(node.tag(), Some("a"));
    assert_eq!(node.get_attr("href"), Some("contact.html"));
    assert_eq!(node.get_attr("class"), Some("btn btn--secondary"));
    assert_eq!(node.get_attr("target"), None);
}

#[test]
fn external_href_opens_in_new_tab() {
    let registry = builtin();
    let inv = TagInvocation::new()
        .with_attr("href", "https://example.com/docs")
        .with_text("Docs");
    let node = registry.expand("site-btn", &inv).unwrap();

    assert_eq!(node.get_attr("target"), Some("_blank"));
    assert_eq!(node.get_attr("rel"), Some("noopener noreferrer"));
}

#[test]
fn link_variant_uses_bare_icon() {
    let registry = builtin();
    let inv = TagInvocation::new()
        .with_attr("variant", "link")
        .with_text("Read more");
    let html = registry.expand("site-btn", &inv).unwrap().render();

    assert!(!html.contains("btn__icon"));
    assert!(html.contains("arrow-icon"));
}

#[test]
fn section_tag_prefixes_slash() {
    let registry = builtin();
    let inv = TagInvocation::new().with_text("Features");
    let node = registry.expand("site-tag", &inv).unwrap();

    assert_eq!(node.get_attr("class"), Some("section-tag"));
    assert!(node.render().contains("/Features"));
}

#[test]
fn section_tag_modifiers() {
    let registry = builtin();
    let inv = TagInvocation::new()
        .with_attr("variant", "blue")
        .with_attr("center", "")
        .with_text("Pricing");
    let node = registry.expand("site-tag", &inv).unwrap();

    assert_eq!(
        node.get_attr("class"),
        Some("section-tag section-tag--blue section-tag--center")
    );
    assert!(node
        .render()
        .contains(r#"<span class="section-tag__text section-tag__text--blue">/Pricing</span>"#));
}

#[test]
fn faq_item_expands_question_and_answer() {
    let registry = builtin();
    let inv = TagInvocation::new()
        .with_attr("question", "How does it work?")
        .with_text("It just does.");
    let html = registry.expand("site-faq", &inv).unwrap().render();

    assert!(html.contains(r#"<span class="faq__question-text">How does it work?</span>"#));
    assert!(html.contains(r#"<span class="faq__plus">"#));
    assert!(html.contains(r#"<div class="faq__answer"><p>It just does.</p></div>"#));
}

#[test]
fn faq_without_question_is_visibly_broken() {
    let registry = builtin();
    let inv = TagInvocation::new().with_text("orphan answer");
    let node = registry.expand("site-faq", &inv).unwrap();

    assert_eq!(node.get_attr("class"), Some("component-error"));
    assert_eq!(node.get_attr("data-component"), Some("site-faq"));
    assert!(node.text_content().contains("site-faq"));
}

#[test]
fn navbar_and_footer_use_chrome() {
    let mut chrome = SiteChrome::default();
    chrome.brand = "Acme".to_string();
    chrome.contact_email = "hola@acme.test".to_string();
    let registry = Registry::with_builtin_tags(&chrome);

    let navbar = registry
        .expand("site-navbar", &TagInvocation::new())
        .unwrap()
        .render();
    assert!(navbar.contains(r#"alt="Acme""#));
    assert!(navbar.contains(r#"href="index.html""#));
    assert!(navbar.contains(r#"href="contact.html""#));

    let footer = registry
        .expand("site-footer", &TagInvocation::new())
        .unwrap()
        .render();
    assert!(footer.contains("Acme"));
    assert!(footer.contains("mailto:hola@acme.test"));
    assert!(footer.contains("/NAVIGATION"));
}

#[test]
fn expand_tree_replaces_in_place() {
    let registry = builtin();
    let page = Node::element("section")
        .class("hero")
        .child(
            Node::element("site-tag").child(Node::text("Platform")),
        )
        .child(
            Node::element("site-btn")
                .attr("href", "contact.html")
                .child(Node::text("Talk to us")),
        );

    let expanded = registry.expand_tree(&page);
    let html = expanded.render();

    assert!(!html.contains("site-tag"));
    assert!(!html.contains("site-btn"));
    assert!(html.contains("section-tag"));
    assert!(html.contains(r#"<a href="contact.html""#));
    // The outer section survives unchanged.
    assert_eq!(expanded.tag(), Some("section"));
    assert_eq!(expanded.get_attr("class"), Some("hero"));
}

#[test]
fn unknown_tags_pass_through() {
    let registry = builtin();
    let page = Node::element("custom-widget")
        .attr("data-x", "1")
        .child(Node::text("keep me"));

    let expanded = registry.expand_tree(&page);
    assert_eq!(expanded, page);
}

#[test]
fn nested_custom_tags_expand_recursively() {
    let registry = builtin();
    let page = Node::element("div").child(
        Node::element("div").child(
            Node::element("site-faq")
                .attr("question", "Nested?")
                .child(Node::text("Yes.")),
        ),
    );

    let html = registry.expand_tree(&page).render();
    assert!(html.contains("faq__item"));
    assert!(!html.contains("site-faq"));
}
