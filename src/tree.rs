//! Labeled parse tree.
//!
//! A [`ParseTree`] is the result of one successful [`parse_message`] call. It owns a shared
//! handle to the request buffer and an arena of nodes, each node referencing a span of that
//! buffer, its first child, and its next sibling at the same grammar level.
//!
//! Nodes are only reachable through [`NodeRef`], which borrows the tree. Query results in a
//! [`TokenList`] borrow the tree the same way, so they can never outlive it.
//!
//! Dropping the tree releases every node at once, there is no per node recursion.
//!
//! [`parse_message`]: crate::parse_message
use bytes::Bytes;

mod rule;
mod query;


pub use rule::Rule;
pub use query::{search_tree, TokenList};

/// Index of a node inside its [`ParseTree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of the node.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A grammar match.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) rule: Rule,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

impl Node {
    #[inline]
    pub(crate) const fn new(rule: Rule, offset: usize, len: usize) -> Self {
        Self {
            rule,
            offset,
            len,
            child: None,
            sibling: None,
        }
    }
}

/// Parse tree of a complete HTTP message.
pub struct ParseTree {
    buf: Bytes,
    nodes: Vec<Node>,
}

impl ParseTree {
    pub(crate) fn from_parts(buf: Bytes, nodes: Vec<Node>) -> Self {
        debug_assert!(!nodes.is_empty(), "parse tree without root");
        Self { buf, nodes }
    }

    /// Parse HTTP message by copying from slice reference.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a complete HTTP request message.
    #[inline]
    pub fn parse<A: AsRef<[u8]>>(bytes: A) -> Result<Self, crate::ParseError> {
        crate::grammar::parse_message(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Parse HTTP message from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a complete HTTP request message.
    #[inline]
    pub fn parse_from<B: Into<Bytes>>(bytes: B) -> Result<Self, crate::ParseError> {
        crate::grammar::parse_message(bytes)
    }

    /// Returns the node matching the whole message.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// Returns the node with given id.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        match id.0 < self.nodes.len() {
            true => Some(NodeRef { tree: self, id }),
            false => None,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the buffer the tree spans over.
    #[inline]
    pub fn as_bytes(&self) -> &Bytes {
        &self.buf
    }

    /// Collect every node labelled `label` in document order.
    ///
    /// This is [`search_tree`] rooted at [`ParseTree::root`].
    #[inline]
    pub fn search(&self, label: &str) -> TokenList<'_> {
        search_tree(Some(self.root()), Some(label))
    }

    /// Release the tree and all of its nodes.
    #[inline]
    pub fn release(self) {
        crate::log::trace!("release parse tree of {} nodes", self.nodes.len());
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Reference to a node of a [`ParseTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t ParseTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    /// Returns the node id.
    #[inline]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    #[inline]
    pub const fn tree(&self) -> &'t ParseTree {
        self.tree
    }

    /// Returns the production that matched this node.
    #[inline]
    pub fn rule(&self) -> Rule {
        self.tree.node(self.id).rule
    }

    /// Returns the production label, e.g: `"method"`.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.rule().as_str()
    }

    /// Returns the offset of the matched span in the message buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.tree.node(self.id).offset
    }

    /// Returns the length of the matched span.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.node(self.id).len
    }

    /// Returns `true` if the production matched an empty span.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the matched span.
    #[inline]
    pub fn value(&self) -> &'t [u8] {
        let node = self.tree.node(self.id);
        &self.tree.buf[node.offset..node.offset + node.len]
    }

    /// Returns the matched span as shared [`Bytes`] without copying.
    #[inline]
    pub fn value_bytes(&self) -> Bytes {
        let node = self.tree.node(self.id);
        self.tree.buf.slice(node.offset..node.offset + node.len)
    }

    /// Returns the first sub-match.
    #[inline]
    pub fn first_child(&self) -> Option<NodeRef<'t>> {
        self.tree.node(self.id).child.map(|id| NodeRef { tree: self.tree, id })
    }

    /// Returns the next match at the same grammar level.
    #[inline]
    pub fn next_sibling(&self) -> Option<NodeRef<'t>> {
        self.tree.node(self.id).sibling.map(|id| NodeRef { tree: self.tree, id })
    }

    /// Returns an iterator over direct sub-matches in grammar order.
    #[inline]
    pub fn children(&self) -> Children<'t> {
        Children {
            next: self.first_child(),
        }
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("label", &self.label())
            .field("offset", &self.offset())
            .field("value", &self.value().escape_ascii().to_string())
            .finish()
    }
}

/// Iterator over direct children of a node, created by [`NodeRef::children`].
#[derive(Debug)]
pub struct Children<'t> {
    next: Option<NodeRef<'t>>,
}

impl<'t> Iterator for Children<'t> {
    type Item = NodeRef<'t>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}

// ===== Formatting =====

impl std::fmt::Debug for ParseTree {
    /// Writes one line per node, indented by depth.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            writeln!(
                f,
                "{:indent$}{} [{}..{}] {:?}",
                "",
                node.rule,
                node.offset,
                node.offset + node.len,
                self.buf[node.offset..node.offset + node.len].escape_ascii().to_string(),
                indent = depth * 2,
            )?;
            if let Some(sibling) = node.sibling {
                stack.push((sibling, depth));
            }
            if let Some(child) = node.child {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}
