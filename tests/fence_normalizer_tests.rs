use diagram_rs::api::normalize_fences;
use diagram_rs::dom::{Document, NodeId};
use diagram_rs::render::SOURCE_ATTR;

fn fence_in_wrapper(page: &mut Document, wrapper_tag: &str, wrapper_class: Option<&str>) -> NodeId {
    let wrapper = page.create_element(wrapper_tag);
    if let Some(class) = wrapper_class {
        page.add_class(wrapper, class);
    }
    page.append_child(page.body(), wrapper);
    let code = page.create_element("code");
    page.append_child(wrapper, code);
    page.add_class(code, "language-mermaid");
    page.set_text(code, "sequenceDiagram; a->>b: hi");
    wrapper
}

#[test]
fn figure_highlight_wrapper_is_replaced() {
    let mut page = Document::new();
    fence_in_wrapper(&mut page, "figure", Some("highlight"));

    let converted = normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert_eq!(converted, 1);
    assert!(page.elements_with_tag("figure").is_empty());
    let containers = page.elements_with_class("mermaid");
    assert_eq!(containers.len(), 1);
    assert_eq!(
        page.attr(containers[0], SOURCE_ATTR),
        Some("sequenceDiagram; a->>b: hi")
    );
}

#[test]
fn div_highlight_wrapper_is_replaced() {
    let mut page = Document::new();
    fence_in_wrapper(&mut page, "div", Some("highlight"));

    normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert!(page.elements_with_class("highlight").is_empty());
    assert_eq!(page.elements_with_class("mermaid").len(), 1);
}

#[test]
fn plain_div_wrapper_falls_back_to_parent_replacement() {
    let mut page = Document::new();
    // Not a highlight wrapper (no class), so the immediate parent is used.
    fence_in_wrapper(&mut page, "aside", None);

    normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert!(page.elements_with_tag("aside").is_empty());
    assert_eq!(page.elements_with_class("mermaid").len(), 1);
}

#[test]
fn nested_fence_text_is_flattened_into_the_container() {
    let mut page = Document::new();
    let pre = page.create_element("pre");
    page.append_child(page.body(), pre);
    let code = page.create_element("code");
    page.append_child(pre, code);
    page.add_class(code, "language-mermaid");
    // Syntax highlighters split source across spans; the full text must
    // survive conversion.
    for chunk in ["graph TD; ", "a ", "--> b"] {
        let span = page.create_element("span");
        page.append_child(code, span);
        page.set_text(span, chunk);
    }

    normalize_fences(&mut page, "language-mermaid", "mermaid");

    let containers = page.elements_with_class("mermaid");
    assert_eq!(page.attr(containers[0], SOURCE_ATTR), Some("graph TD; a --> b"));
}

#[test]
fn preexisting_container_gets_its_source_cached() {
    let mut page = Document::new();
    let container = page.create_element("div");
    page.append_child(page.body(), container);
    page.add_class(container, "mermaid");
    page.set_text(container, "flowchart LR; x --> y");

    normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert_eq!(page.attr(container, SOURCE_ATTR), Some("flowchart LR; x --> y"));
}

#[test]
fn populated_cache_is_never_overwritten() {
    let mut page = Document::new();
    let container = page.create_element("div");
    page.append_child(page.body(), container);
    page.add_class(container, "mermaid");
    page.set_attr(container, SOURCE_ATTR, "original source");
    // Simulates the library having replaced the text in place.
    page.set_text(container, "<svg>rendered</svg>");

    normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert_eq!(page.attr(container, SOURCE_ATTR), Some("original source"));
}

#[test]
fn page_without_fences_is_a_no_op() {
    let mut page = Document::new();
    let para = page.create_element("p");
    page.append_child(page.body(), para);
    page.set_text(para, "no diagrams here");
    let revision = page.revision();

    let converted = normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert_eq!(converted, 0);
    assert_eq!(page.revision(), revision);
}

#[test]
fn two_fences_produce_two_containers() {
    let mut page = Document::new();
    fence_in_wrapper(&mut page, "pre", None);
    fence_in_wrapper(&mut page, "pre", None);

    let converted = normalize_fences(&mut page, "language-mermaid", "mermaid");

    assert_eq!(converted, 2);
    assert_eq!(page.elements_with_class("mermaid").len(), 2);
    assert!(page.elements_with_class("language-mermaid").is_empty());
}
