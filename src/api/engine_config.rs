use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PaletteBlend;
use crate::error::{DiagramError, DiagramResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load their
/// embedding setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEngineConfig {
    /// Location the rendering library is fetched from when absent at boot.
    #[serde(default = "default_library_source")]
    pub library_source: String,
    /// Library base theme the derived variables are applied on top of.
    #[serde(default = "default_base_theme")]
    pub base_theme: String,
    /// Debounce window coalescing change triggers, in milliseconds.
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: u64,
    /// Class marking code fences as diagram source.
    #[serde(default = "default_fence_language_class")]
    pub fence_language_class: String,
    /// Class of diagram container elements.
    #[serde(default = "default_container_class")]
    pub container_class: String,
    /// Border/panel blend fractions applied to the sampled palette.
    #[serde(default)]
    pub blend: PaletteBlend,
}

fn default_library_source() -> String {
    "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.min.js".to_owned()
}

fn default_base_theme() -> String {
    "base".to_owned()
}

const fn default_debounce_window_ms() -> u64 {
    120
}

fn default_fence_language_class() -> String {
    "language-mermaid".to_owned()
}

fn default_container_class() -> String {
    "mermaid".to_owned()
}

impl Default for DiagramEngineConfig {
    fn default() -> Self {
        Self {
            library_source: default_library_source(),
            base_theme: default_base_theme(),
            debounce_window_ms: default_debounce_window_ms(),
            fence_language_class: default_fence_language_class(),
            container_class: default_container_class(),
            blend: PaletteBlend::default(),
        }
    }
}

impl DiagramEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_library_source(mut self, source: impl Into<String>) -> Self {
        self.library_source = source.into();
        self
    }

    #[must_use]
    pub fn with_base_theme(mut self, theme: impl Into<String>) -> Self {
        self.base_theme = theme.into();
        self
    }

    #[must_use]
    pub fn with_debounce_window_ms(mut self, window_ms: u64) -> Self {
        self.debounce_window_ms = window_ms;
        self
    }

    #[must_use]
    pub fn with_fence_language_class(mut self, class: impl Into<String>) -> Self {
        self.fence_language_class = class.into();
        self
    }

    #[must_use]
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }

    #[must_use]
    pub fn with_blend(mut self, blend: PaletteBlend) -> Self {
        self.blend = blend;
        self
    }

    #[must_use]
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }

    pub fn validate(&self) -> DiagramResult<()> {
        for (name, value) in [("border", self.blend.border), ("panel", self.blend.panel)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DiagramError::InvalidBlendFraction { name, value });
            }
        }
        if self.debounce_window_ms == 0 {
            return Err(DiagramError::InvalidConfig(
                "debounce window must be at least 1ms".to_owned(),
            ));
        }
        for (name, value) in [
            ("library_source", &self.library_source),
            ("base_theme", &self.base_theme),
            ("fence_language_class", &self.fence_language_class),
            ("container_class", &self.container_class),
        ] {
            if value.trim().is_empty() {
                return Err(DiagramError::InvalidConfig(format!(
                    "`{name}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}
