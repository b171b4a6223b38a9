use crate::components::IconKind;
use crate::views::{ copyright_line, initials, SECTION_LINKS };

#[test]
fn test_initials() {
    assert_eq!(initials("Sumit Pande"), "SP");
    assert_eq!(initials("ada lovelace byron"), "AL");
    assert_eq!(initials("  Prince "), "P");
    assert_eq!(initials(""), "");
}

#[test]
fn test_social_icons_by_label() {
    assert_eq!(IconKind::for_label("GitHub"), Some(IconKind::Github));
    assert_eq!(IconKind::for_label("LinkedIn"), Some(IconKind::Linkedin));
    assert_eq!(IconKind::for_label("Email"), Some(IconKind::Mail));
    assert_eq!(IconKind::for_label("Dribbble"), None);
}

#[test]
fn test_section_links_point_at_sections() {
    let anchors: Vec<_> = SECTION_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(anchors, ["#projects", "#skills", "#experience", "#contact"]);
}

#[test]
fn test_copyright_line() {
    assert_eq!(
        copyright_line(2026, "Sumit Pande"),
        "© 2026 Sumit Pande. Built with Rust + Dioxus."
    );
}
