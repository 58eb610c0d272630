use tracing::debug;

use crate::dom::{Document, NodeId};
use crate::render::SOURCE_ATTR;

/// Converts marked code fences into diagram containers and backfills source
/// caches on pre-existing containers.
///
/// Safe to run repeatedly: converted fences no longer match the fence
/// class, and populated caches are left alone. Pages without matching
/// elements are a no-op. Returns the number of fences converted.
pub fn normalize_fences(
    page: &mut Document,
    fence_language_class: &str,
    container_class: &str,
) -> usize {
    let mut converted = 0;
    for fence in page.elements_with_class(fence_language_class) {
        if convert_fence(page, fence, container_class) {
            converted += 1;
        }
    }

    // Containers not born from a fence still need their source cached, so a
    // later theme change can restore text without the library's internal
    // state.
    for container in page.elements_with_class(container_class) {
        let cached = page
            .attr(container, SOURCE_ATTR)
            .is_some_and(|value| !value.is_empty());
        if !cached {
            let source = page.text_content(container);
            page.set_attr(container, SOURCE_ATTR, &source);
        }
    }

    if converted > 0 {
        debug!(converted, "converted diagram fences");
    }
    converted
}

fn convert_fence(page: &mut Document, fence: NodeId, container_class: &str) -> bool {
    let source = page.text_content(fence);
    let target = highlight_wrapper(page, fence)
        .or_else(|| page.parent(fence))
        .unwrap_or(fence);

    let container = page.create_element("div");
    page.add_class(container, container_class);
    page.set_text(container, &source);
    page.set_attr(container, SOURCE_ATTR, &source);
    page.replace_with(target, container)
}

/// Nearest self-or-ancestor highlight wrapper: `figure.highlight`, `pre`,
/// or `div.highlight`.
fn highlight_wrapper(page: &Document, fence: NodeId) -> Option<NodeId> {
    page.closest(fence, |page, node| {
        let tag = page.tag(node);
        tag == "pre" || (page.has_class(node, "highlight") && (tag == "figure" || tag == "div"))
    })
}
