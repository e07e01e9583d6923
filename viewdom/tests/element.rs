use viewdom::{find_element, find_element_mut, Content, Display, Element};

fn page() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("Title").id("title"))
        .child(
            Element::col()
                .id("outer")
                .child(Element::text("inner").id("inner")),
        )
        .child(Element::text("Footer").id("footer"))
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_root() {
    let root = page();
    assert_eq!(find_element(&root, "root").map(|e| e.id.as_str()), Some("root"));
}

#[test]
fn test_find_element_nested() {
    let root = page();
    let inner = find_element(&root, "inner").unwrap();
    assert_eq!(inner.text_content(), Some("inner"));
}

#[test]
fn test_find_element_missing() {
    let root = page();
    assert!(find_element(&root, "nope").is_none());
    assert!(find_element(&root, "").is_none());
}

#[test]
fn test_find_element_first_match_wins() {
    let root = Element::col()
        .child(Element::text("first").id("dup"))
        .child(Element::text("second").id("dup"));

    assert_eq!(find_element(&root, "dup").unwrap().text_content(), Some("first"));
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = page();

    find_element_mut(&mut root, "inner").unwrap().set_text("changed");
    find_element_mut(&mut root, "outer").unwrap().set_display(Display::None);

    assert_eq!(find_element(&root, "inner").unwrap().text_content(), Some("changed"));
    assert!(find_element(&root, "outer").unwrap().is_hidden());
}

#[test]
fn test_find_element_mut_missing() {
    let mut root = page();
    assert!(find_element_mut(&mut root, "nope").is_none());
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("box-"));
}

#[test]
fn test_display_defaults_to_unset() {
    let el = Element::text("x");
    assert_eq!(el.display, Display::Unset);
    assert!(!el.is_hidden());
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::text("x").child(Element::text("y").id("y"));
    assert_eq!(el.child_elements().len(), 1);
    assert!(el.text_content().is_none());
}

#[test]
fn test_set_text_replaces_children() {
    let mut el = Element::col().child(Element::text("y"));
    el.set_text("+");
    assert_eq!(el.content, Content::Text("+".into()));
    assert!(el.child_elements().is_empty());
}

// ============================================================================
// Display parsing
// ============================================================================

#[test]
fn test_display_parse() {
    assert_eq!("none".parse::<Display>(), Ok(Display::None));
    assert_eq!("block".parse::<Display>(), Ok(Display::Block));
    assert_eq!("flex".parse::<Display>(), Ok(Display::Flex));
    assert_eq!("".parse::<Display>(), Ok(Display::Unset));
}

#[test]
fn test_display_parse_is_exact() {
    for raw in [" none ", "none\n", "None", "NONE"] {
        let display = Display::from(raw);
        assert_eq!(display, Display::Other(raw.to_string()));
        assert!(!display.is_hidden(), "{raw:?} should not hide");
    }
}

#[test]
fn test_display_parse_unknown_modes_are_kept() {
    for raw in ["inline-block", "grid", "table"] {
        let display: Display = raw.parse().unwrap();
        assert_eq!(display, Display::Other(raw.to_string()));
        assert_eq!(display.to_string(), raw);
        assert!(!display.is_hidden());
    }
}

#[test]
fn test_display_to_string() {
    assert_eq!(Display::None.to_string(), "none");
    assert_eq!(Display::Block.to_string(), "block");
    assert_eq!(Display::Unset.to_string(), "");
}

#[test]
fn test_only_none_is_hidden() {
    assert!(Display::None.is_hidden());
    for display in [
        Display::Unset,
        Display::Block,
        Display::Inline,
        Display::Flex,
        Display::Other("grid".into()),
    ] {
        assert!(!display.is_hidden(), "{display:?} should not hide");
    }
}
