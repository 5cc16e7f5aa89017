use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_lowercase_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_and_mixed_case_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("blue"), None);
    assert_eq!(Theme::parse(" dark"), None);
}

#[test]
fn as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

// =============================================================
// Mapping
// =============================================================

#[test]
fn from_prefers_dark_maps_media_match() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
}

#[test]
fn opposite_flips_and_is_an_involution() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
    assert_eq!(Theme::Dark.opposite().opposite(), Theme::Dark);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}
