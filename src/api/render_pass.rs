use tracing::debug;

use crate::dom::Document;
use crate::error::DiagramResult;
use crate::render::{DiagramRenderer, PROCESSED_ATTR, SOURCE_ATTR};
use crate::style::StyleEngine;
use crate::theme::{RenderConfig, ThemeSampler, render_config_from_palette};

use super::DiagramEngineConfig;

/// Restores every container to its cached source and clears the library's
/// progress marker, undoing prior in-place mutation.
pub(super) fn reset_containers(page: &mut Document, container_class: &str) -> usize {
    let containers = page.elements_with_class(container_class);
    for &node in &containers {
        if let Some(source) = page.attr(node, SOURCE_ATTR).map(str::to_owned) {
            if !source.is_empty() {
                page.set_text(node, &source);
            }
        }
        page.remove_attr(node, PROCESSED_ATTR);
    }
    containers.len()
}

/// One full render: reset containers, sample the palette, configure the
/// backend, and batch-render.
pub(super) fn run_render_pass<R: DiagramRenderer>(
    renderer: &mut R,
    page: &mut Document,
    styles: &impl StyleEngine,
    config: &DiagramEngineConfig,
) -> DiagramResult<RenderConfig> {
    let container_count = reset_containers(page, &config.container_class);
    let palette = ThemeSampler::new(config.blend).sample(page, styles);
    let render_config = render_config_from_palette(&palette, &config.base_theme);
    renderer.initialize(&render_config)?;
    renderer.run(page, &config.container_class)?;
    debug!(container_count, "render pass completed");
    Ok(render_config)
}
