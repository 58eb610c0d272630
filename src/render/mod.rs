mod loader;
mod null_renderer;

pub use loader::{LibraryLoader, NullLoader};
pub use null_renderer::NullRenderer;

use crate::dom::Document;
use crate::error::DiagramResult;
use crate::theme::RenderConfig;

/// Attribute caching a container's original diagram source, so re-renders
/// can restore text the library mutated in place.
pub const SOURCE_ATTR: &str = "data-mmd";

/// Progress marker the library leaves on containers it has processed;
/// cleared before every render pass.
pub const PROCESSED_ATTR: &str = "data-processed";

/// Contract implemented by the external diagram-rendering library.
///
/// Backends receive a fully derived [`RenderConfig`] and the page, so
/// rendering code remains isolated from theme sampling and scheduling
/// logic. One major version line is assumed; there is no negotiation.
pub trait DiagramRenderer {
    /// Applies a freshly built configuration ahead of a batch render.
    fn initialize(&mut self, config: &RenderConfig) -> DiagramResult<()>;

    /// Renders every element carrying `container_class` in place.
    fn run(&mut self, page: &mut Document, container_class: &str) -> DiagramResult<()>;
}
