//! diagram-rs: theme-adaptive diagram embedding engine.
//!
//! Converts fenced code blocks marked as diagram source into containers for
//! an external Mermaid-compatible rendering library, derives the library's
//! theme variables from the hosting page's computed styles, and coalesces
//! theme/DOM change signals into debounced re-renders. Browser-specific
//! surfaces (computed style, the rendering library, its lazy loader) sit
//! behind traits so the whole pipeline runs headless.

pub mod api;
pub mod core;
pub mod dom;
pub mod error;
pub mod render;
pub mod style;
pub mod telemetry;
pub mod theme;

pub use api::{DiagramEngine, DiagramEngineConfig};
pub use error::{DiagramError, DiagramResult};
