use serde::{Deserialize, Serialize};

use crate::core::Palette;
use crate::error::{DiagramError, DiagramResult};

/// Theme-variable block consumed by the external rendering library.
///
/// Key names are the library's own (camelCase on the wire). This mapping is
/// the integration contract and must stay stable even when the library's
/// internal variable names are versioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariables {
    pub background: String,
    pub primary_text_color: String,
    pub primary_border_color: String,
    pub line_color: String,
    pub cluster_border: String,
    pub cluster_bkg: String,
    pub primary_color: String,
    pub tertiary_color: String,
    pub edge_label_background: String,
}

/// Full configuration handed to the library's `initialize` entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Always false: rendering is triggered explicitly by the orchestrator.
    pub start_on_load: bool,
    pub theme: String,
    pub theme_variables: ThemeVariables,
}

impl RenderConfig {
    /// JSON form for hosts that forward the config across a script boundary.
    pub fn to_json_pretty(&self) -> DiagramResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DiagramError::InvalidConfig(format!("failed to serialize render config: {e}"))
        })
    }
}

/// Pure mapping from a sampled palette onto the library's theme variables.
#[must_use]
pub fn render_config_from_palette(palette: &Palette, base_theme: &str) -> RenderConfig {
    RenderConfig {
        start_on_load: false,
        theme: base_theme.to_owned(),
        theme_variables: ThemeVariables {
            background: palette.background.to_css(),
            primary_text_color: palette.text.to_css(),
            primary_border_color: palette.border.to_css(),
            line_color: palette.border.to_css(),
            cluster_border: palette.border.to_css(),
            cluster_bkg: palette.panel.to_css(),
            primary_color: palette.panel.to_css(),
            tertiary_color: palette.accent.to_css(),
            edge_label_background: palette.background.to_css(),
        },
    }
}
