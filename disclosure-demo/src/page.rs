use disclosure::ToggleController;
use viewdom::{Display, Element};

pub const DEFAULT_SECTIONS: usize = 3;
pub const MAX_SECTIONS: usize = 9;

/// Parse the section count argument, clamped to what the number keys reach.
pub fn section_count(arg: Option<&str>) -> usize {
    arg.and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SECTIONS)
        .clamp(1, MAX_SECTIONS)
}

pub fn section_id(n: usize) -> String {
    format!("section{n}")
}

/// Build the demo page. Every section starts expanded.
pub fn build(sections: usize) -> Element {
    let mut root = Element::col()
        .id("root")
        .child(Element::text("Disclosure demo"))
        .child(Element::text("1-9 toggle · c collapse all · e expand all · q quit"))
        .child(Element::text(""));

    for n in 1..=sections {
        let id = section_id(n);
        root = root
            .child(
                Element::row()
                    .id(format!("{id}_header"))
                    .child(Element::text("-").id(format!("{id}_div")))
                    .child(Element::text(format!("Section {n}"))),
            )
            .child(
                Element::col()
                    .id(id)
                    .display(Display::Block)
                    .child(Element::text(format!("Contents of section {n}."))),
            );
    }

    root
}

pub fn controllers(sections: usize) -> Vec<ToggleController> {
    (1..=sections)
        .map(|n| ToggleController::new(section_id(n)))
        .collect()
}

/// Controller bound to number key `key`: `'1'` is the first section.
pub fn controller_for_key(
    controllers: &[ToggleController],
    key: char,
) -> Option<&ToggleController> {
    let n = key.to_digit(10)? as usize;
    n.checked_sub(1).and_then(|i| controllers.get(i))
}

#[cfg(test)]
mod tests {
    use disclosure::Visibility;
    use viewdom::text::render_lines;

    use super::*;

    #[test]
    fn test_section_count() {
        assert_eq!(section_count(None), DEFAULT_SECTIONS);
        assert_eq!(section_count(Some("5")), 5);
        assert_eq!(section_count(Some("0")), 1);
        assert_eq!(section_count(Some("42")), MAX_SECTIONS);
        assert_eq!(section_count(Some("lots")), DEFAULT_SECTIONS);
    }

    #[test]
    fn test_controller_for_key() {
        let controllers = controllers(3);

        let first = controller_for_key(&controllers, '1').unwrap();
        assert_eq!(first.target().content, "section1");
        let last = controller_for_key(&controllers, '3').unwrap();
        assert_eq!(last.target().content, "section3");

        assert!(controller_for_key(&controllers, '0').is_none());
        assert!(controller_for_key(&controllers, '4').is_none());
        assert!(controller_for_key(&controllers, 'x').is_none());
    }

    #[test]
    fn test_controllers_match_page() {
        let mut page = build(2);
        for c in controllers(2) {
            assert_eq!(c.toggle(&mut page), Ok(Visibility::Hidden));
        }

        let lines = render_lines(&page);
        assert!(lines.contains(&"+ Section 1".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Contents of section")));
    }
}
