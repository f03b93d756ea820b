use super::*;

// =============================================================
// from_persisted
// =============================================================

#[test]
fn from_persisted_light_is_light() {
    assert_eq!(ThemeState::from_persisted(Some("light")), ThemeState::Light);
}

#[test]
fn from_persisted_absent_is_dark() {
    assert_eq!(ThemeState::from_persisted(None), ThemeState::Dark);
}

#[test]
fn from_persisted_dark_is_dark() {
    assert_eq!(ThemeState::from_persisted(Some("dark")), ThemeState::Dark);
}

#[test]
fn from_persisted_anything_else_is_dark() {
    for raw in ["", "Light", "LIGHT", " light", "light ", "true", "{}", "lite"] {
        assert_eq!(ThemeState::from_persisted(Some(raw)), ThemeState::Dark, "value {raw:?}");
    }
}

// =============================================================
// Encodings
// =============================================================

#[test]
fn as_str_round_trips_through_from_persisted() {
    for state in [ThemeState::Light, ThemeState::Dark] {
        assert_eq!(ThemeState::from_persisted(Some(state.as_str())), state);
    }
}

#[test]
fn display_matches_storage_value() {
    assert_eq!(ThemeState::Light.to_string(), "light");
    assert_eq!(ThemeState::Dark.to_string(), "dark");
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&ThemeState::Light).unwrap(), "\"light\"");
    let parsed: ThemeState = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, ThemeState::Dark);
}

#[test]
fn default_is_dark() {
    assert_eq!(ThemeState::default(), ThemeState::Dark);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggled_is_its_own_inverse() {
    for state in [ThemeState::Light, ThemeState::Dark] {
        assert_ne!(state.toggled(), state);
        assert_eq!(state.toggled().toggled(), state);
    }
}

#[test]
fn from_root_flag_maps_presence_to_light() {
    assert_eq!(ThemeState::from_root_flag(true), ThemeState::Light);
    assert_eq!(ThemeState::from_root_flag(false), ThemeState::Dark);
    assert!(ThemeState::from_root_flag(true).is_light());
}
