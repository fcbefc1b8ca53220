use super::{NodeId, NodeRef};

/// Ordered list of nodes returned by [`search_tree`].
///
/// The list only references nodes, releasing it never releases the tree.
#[derive(Default)]
pub struct TokenList<'t> {
    nodes: Vec<NodeRef<'t>>,
}

/// Collect nodes in pre-order starting at `start`.
///
/// The result is `start` itself when `label` is [`None`] or equal to its label, followed by the
/// matches within its first child, followed by the matches within its next sibling. Rooted at
/// [`ParseTree::root`], this walks the whole tree in document order.
///
/// Returns an empty list if `start` is [`None`] or nothing matched.
///
/// [`ParseTree::root`]: super::ParseTree::root
pub fn search_tree<'t>(start: Option<NodeRef<'t>>, label: Option<&str>) -> TokenList<'t> {
    let mut list = TokenList::new();
    let Some(start) = start else {
        return list;
    };

    let tree = start.tree();
    let mut stack: Vec<NodeId> = vec![start.id()];

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if label.is_none_or(|label| label == node.rule.as_str()) {
            list.nodes.push(NodeRef { tree, id });
        }
        // sibling closure is visited after the whole child closure
        if let Some(sibling) = node.sibling {
            stack.push(sibling);
        }
        if let Some(child) = node.child {
            stack.push(child);
        }
    }

    list
}

impl<'t> TokenList<'t> {
    /// Create new empty [`TokenList`].
    #[inline]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Returns the number of matches.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the first match in document order.
    #[inline]
    pub fn first(&self) -> Option<NodeRef<'t>> {
        self.nodes.first().copied()
    }

    /// Returns the match at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<NodeRef<'t>> {
        self.nodes.get(index).copied()
    }

    /// Returns an iterator over the matches in document order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NodeRef<'t>>> {
        self.nodes.iter().copied()
    }

    /// Returns the matches as slice.
    #[inline]
    pub fn as_slice(&self) -> &[NodeRef<'t>] {
        &self.nodes
    }

    /// Release the list, the referenced nodes stay alive in their tree.
    #[inline]
    pub fn release(self) { }
}

impl<'t> IntoIterator for TokenList<'t> {
    type Item = NodeRef<'t>;

    type IntoIter = std::vec::IntoIter<NodeRef<'t>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, 't> IntoIterator for &'a TokenList<'t> {
    type Item = NodeRef<'t>;

    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeRef<'t>>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}
