use crate::core::{Palette, PaletteBlend, Rgb};
use crate::dom::{Document, NodeId};
use crate::style::StyleEngine;

/// Derives a [`Palette`] from the page's computed styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeSampler {
    blend: PaletteBlend,
}

impl ThemeSampler {
    #[must_use]
    pub fn new(blend: PaletteBlend) -> Self {
        Self { blend }
    }

    /// Samples text, background, and accent from the live page and derives
    /// the blended border/panel roles.
    ///
    /// The accent probe element is inserted and removed within this call;
    /// no probe node stays reachable afterwards.
    pub fn sample(&self, page: &mut Document, styles: &impl StyleEngine) -> Palette {
        let body = page.body();
        let text = styles
            .computed(page, body, "color")
            .as_deref()
            .map(Rgb::parse_css_or_fallback)
            .unwrap_or(Rgb::FALLBACK_FOREGROUND);
        let background = effective_background(page, styles, body);
        let accent = sample_link_color(page, styles);
        Palette::derive(text, background, accent, self.blend)
    }
}

/// First computed background from `start` upward that is present and not
/// fully transparent; white when the whole chain is transparent. Handles
/// transparent body backgrounds inheriting from `html` or the user agent.
fn effective_background(
    page: &Document,
    styles: &impl StyleEngine,
    start: NodeId,
) -> Rgb {
    let mut current = Some(start);
    while let Some(node) = current {
        if let Some(css) = styles.computed(page, node, "background-color") {
            if !Rgb::is_fully_transparent(&css) {
                return Rgb::parse_css_or_fallback(&css);
            }
        }
        current = page.parent(node);
    }
    Rgb::FALLBACK_BACKGROUND
}

/// Probes the page's link-color convention with a synthetic, invisible
/// anchor element.
fn sample_link_color(page: &mut Document, styles: &impl StyleEngine) -> Rgb {
    let probe = page.create_element("a");
    page.set_attr(probe, "href", "#");
    page.set_inline_style(probe, "display", "none");
    let body = page.body();
    page.append_child(body, probe);
    let css = styles.computed(page, probe, "color");
    page.remove(probe);
    css.as_deref()
        .map(Rgb::parse_css_or_fallback)
        .unwrap_or(Rgb::FALLBACK_FOREGROUND)
}
