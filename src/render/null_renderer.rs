use crate::dom::Document;
use crate::error::DiagramResult;
use crate::theme::RenderConfig;

use super::{DiagramRenderer, PROCESSED_ATTR};

/// No-op backend used by tests and headless hosts.
///
/// It behaves like the real library just enough to keep orchestration
/// observable: each run marks containers processed and overwrites their
/// text, so cache-restore logic has real mutation to undo.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub initialize_count: usize,
    pub run_count: usize,
    pub last_config: Option<RenderConfig>,
    pub last_container_count: usize,
}

impl NullRenderer {
    /// Placeholder text a run leaves behind in each container.
    pub const RENDERED_TEXT: &'static str = "[rendered diagram]";
}

impl DiagramRenderer for NullRenderer {
    fn initialize(&mut self, config: &RenderConfig) -> DiagramResult<()> {
        self.initialize_count += 1;
        self.last_config = Some(config.clone());
        Ok(())
    }

    fn run(&mut self, page: &mut Document, container_class: &str) -> DiagramResult<()> {
        let containers = page.elements_with_class(container_class);
        self.run_count += 1;
        self.last_container_count = containers.len();
        for node in containers {
            page.set_text(node, Self::RENDERED_TEXT);
            page.set_attr(node, PROCESSED_ATTR, "true");
        }
        Ok(())
    }
}
