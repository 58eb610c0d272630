use indexmap::IndexMap;
use smallvec::SmallVec;

/// Handle to an element inside a [`Document`] arena.
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    classes: SmallVec<[String; 4]>,
    attrs: IndexMap<String, String>,
    inline_style: IndexMap<String, String>,
    text: String,
    children: SmallVec<[NodeId; 8]>,
    parent: Option<NodeId>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: SmallVec::new(),
            attrs: IndexMap::new(),
            inline_style: IndexMap::new(),
            text: String::new(),
            children: SmallVec::new(),
            parent: None,
        }
    }
}

/// Owned element tree standing in for the page DOM.
///
/// Provides the operations the embedding pipeline needs: class/tag queries
/// in document order, self-or-ancestor walks, node replacement, attributes,
/// inline styles, subtree text, and a mutation revision counter embedders
/// can poll to drive re-render notifications. The arena never reclaims
/// detached elements; they become unreachable from the root and stop
/// matching queries.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<ElementData>,
    root: NodeId,
    body: NodeId,
    revision: u64,
}

impl Document {
    /// Empty page: an `html` root with a `body` child.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            revision: 0,
        };
        doc.root = doc.push_node(ElementData::new("html"));
        doc.body = doc.push_node(ElementData::new("body"));
        doc.nodes[doc.body.0].parent = Some(doc.root);
        doc.nodes[doc.root.0].children.push(doc.body);
        doc
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Monotonic counter bumped by every attribute, text, or child-list
    /// mutation. Embedders diff revisions to emit mutation notifications.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Creates a detached element; attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(ElementData::new(tag))
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first. Appending an element into its own subtree is
    /// rejected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.is_ancestor(child, parent) {
            return false;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.bump();
        true
    }

    /// Detaches `node` (and with it, its subtree) from its parent.
    pub fn remove(&mut self, node: NodeId) {
        if self.nodes[node.0].parent.is_some() {
            self.detach(node);
            self.bump();
        }
    }

    /// Swaps `replacement` into `old`'s position under `old`'s parent.
    /// No-op (returning false) when `old` has no parent.
    pub fn replace_with(&mut self, old: NodeId, replacement: NodeId) -> bool {
        let Some(parent) = self.nodes[old.0].parent else {
            return false;
        };
        if old == replacement || self.is_ancestor(replacement, parent) {
            return false;
        }
        self.detach(replacement);
        let slot = self.nodes[parent.0]
            .children
            .iter()
            .position(|&child| child == old);
        let Some(slot) = slot else {
            return false;
        };
        self.nodes[parent.0].children[slot] = replacement;
        self.nodes[old.0].parent = None;
        self.nodes[replacement.0].parent = Some(parent);
        self.bump();
        true
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_owned());
            self.bump();
        }
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
        self.bump();
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if self.nodes[node.0].attrs.shift_remove(name).is_some() {
            self.bump();
        }
    }

    #[must_use]
    pub fn inline_style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0]
            .inline_style
            .get(property)
            .map(String::as_str)
    }

    pub fn set_inline_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.nodes[node.0]
            .inline_style
            .insert(property.to_owned(), value.to_owned());
        self.bump();
    }

    /// Own text run of `node`, excluding descendants.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    /// Replaces the whole subtree of `node` with a single text run,
    /// mirroring `textContent` assignment: existing children are detached.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let children: SmallVec<[NodeId; 8]> = self.nodes[node.0].children.drain(..).collect();
        for child in children {
            self.nodes[child.0].parent = None;
        }
        self.nodes[node.0].text = text.to_owned();
        self.bump();
    }

    /// Concatenated text of `node` and its descendants, document order.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    /// Nearest self-or-ancestor matching `predicate`.
    #[must_use]
    pub fn closest(
        &self,
        node: NodeId,
        predicate: impl Fn(&Self, NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if predicate(self, candidate) {
                return Some(candidate);
            }
            current = self.nodes[candidate.0].parent;
        }
        None
    }

    /// Elements reachable from the root carrying `class`, document order.
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&node| self.has_class(node, class))
            .collect()
    }

    /// Elements reachable from the root with tag `tag`, document order.
    #[must_use]
    pub fn elements_with_tag(&self, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.walk()
            .into_iter()
            .filter(|&node| self.nodes[node.0].tag == tag)
            .collect()
    }

    /// Number of elements reachable from the root.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.walk().len()
    }

    fn push_node(&mut self, data: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent {
            self.nodes[parent.0].children.retain(|child| *child != node);
            self.nodes[node.0].parent = None;
        }
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = self.nodes[of.0].parent;
        while let Some(node) = current {
            if node == candidate {
                return true;
            }
            current = self.nodes[node.0].parent;
        }
        false
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        out.push_str(&self.nodes[node.0].text);
        for &child in &self.nodes[node.0].children {
            self.collect_text(child, out);
        }
    }

    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            order.push(node);
            for &child in self.nodes[node.0].children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
