use super::*;

#[test]
fn dark_markup_hides_sun() {
    let (sun, moon) = indicator_classes(&ThemeConfig::default(), ThemeState::Dark);
    assert_eq!(sun, "theme-icon hidden");
    assert_eq!(moon, "theme-icon");
}

#[test]
fn light_markup_hides_moon() {
    let (sun, moon) = indicator_classes(&ThemeConfig::default(), ThemeState::Light);
    assert_eq!(sun, "theme-icon");
    assert_eq!(moon, "theme-icon hidden");
}

#[test]
fn markup_uses_configured_hidden_class() {
    let config = ThemeConfig { hidden_class: "d-none".into(), ..ThemeConfig::default() };
    let (sun, _) = indicator_classes(&config, ThemeState::Dark);
    assert_eq!(sun, "theme-icon d-none");
}
