use diagram_rs::core::{Palette, PaletteBlend, Rgb};
use diagram_rs::theme::render_config_from_palette;

fn light_palette() -> Palette {
    Palette::derive(
        Rgb::new(17.0, 17.0, 17.0),
        Rgb::new(255.0, 255.0, 255.0),
        Rgb::new(0.0, 102.0, 204.0),
        PaletteBlend::default(),
    )
}

#[test]
fn auto_start_is_always_disabled() {
    let config = render_config_from_palette(&light_palette(), "base");
    assert!(!config.start_on_load);
}

#[test]
fn every_palette_role_reaches_its_theme_variable() {
    let palette = light_palette();
    let config = render_config_from_palette(&palette, "base");
    let vars = &config.theme_variables;

    assert_eq!(vars.background, palette.background.to_css());
    assert_eq!(vars.primary_text_color, palette.text.to_css());
    assert_eq!(vars.primary_border_color, palette.border.to_css());
    assert_eq!(vars.line_color, palette.border.to_css());
    assert_eq!(vars.cluster_border, palette.border.to_css());
    assert_eq!(vars.cluster_bkg, palette.panel.to_css());
    assert_eq!(vars.primary_color, palette.panel.to_css());
    assert_eq!(vars.tertiary_color, palette.accent.to_css());
    assert_eq!(vars.edge_label_background, palette.background.to_css());
}

#[test]
fn base_theme_is_configurable() {
    let config = render_config_from_palette(&light_palette(), "neutral");
    assert_eq!(config.theme, "neutral");
}

#[test]
fn json_contract_uses_the_library_key_names() {
    let config = render_config_from_palette(&light_palette(), "base");
    let json = config.to_json_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");

    assert_eq!(value["startOnLoad"], serde_json::Value::Bool(false));
    assert_eq!(value["theme"], "base");
    let vars = &value["themeVariables"];
    for key in [
        "background",
        "primaryTextColor",
        "primaryBorderColor",
        "lineColor",
        "clusterBorder",
        "clusterBkg",
        "primaryColor",
        "tertiaryColor",
        "edgeLabelBackground",
    ] {
        assert!(vars.get(key).is_some(), "missing theme variable `{key}`");
    }
}

#[test]
fn css_output_is_integer_rgb() {
    let config = render_config_from_palette(&light_palette(), "base");
    assert_eq!(config.theme_variables.primary_text_color, "rgb(17, 17, 17)");
    assert_eq!(config.theme_variables.background, "rgb(255, 255, 255)");
}
