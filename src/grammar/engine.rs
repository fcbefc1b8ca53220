//! Backtracking primitives.
//!
//! Every production is a method `fn(&mut Engine, pos) -> Match`. The cursor is passed by value,
//! a successful match returns the id of the node it pushed, and the advanced cursor is derived
//! from that node span. A failed match returns [`None`] and leaves the arena exactly as it was
//! on entry.
//!
//! Composite productions are built with [`Engine::rule`], which hands a [`Frame`] to the rule
//! body. The frame owns the cursor of the production being built and links sub-matches as
//! children. All combinators on the frame restore both the cursor and the arena on failure.
use crate::log;
use crate::tree::{Node, NodeId, Rule};

/// Outcome of applying a production.
pub(crate) type Match = Option<NodeId>;

pub(crate) struct Engine<'a> {
    src: &'a [u8],
    nodes: Vec<Node>,
    max_nodes: usize,
    exhausted: bool,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(src: &'a [u8], max_nodes: usize) -> Self {
        Self {
            src,
            nodes: Vec::new(),
            max_nodes,
            exhausted: false,
        }
    }

    /// Returns `true` if the node budget was hit during parsing.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline]
    pub(crate) fn input_len(&self) -> usize {
        self.src.len()
    }

    /// Returns the cursor position right after the node span.
    #[inline]
    pub(crate) fn end_of(&self, id: NodeId) -> usize {
        let node = &self.nodes[id.index()];
        node.offset + node.len
    }

    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    fn alloc(&mut self, rule: Rule, offset: usize, len: usize) -> Match {
        if self.exhausted {
            return None;
        }
        if self.nodes.len() >= self.max_nodes || self.nodes.try_reserve(1).is_err() {
            log::warning!("parse tree node budget exhausted at {} nodes", self.nodes.len());
            self.exhausted = true;
            return None;
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(rule, offset, len));
        Some(id)
    }

    // ===== Leaf primitives =====

    /// Case insensitive ASCII text, labelled by the text itself.
    #[inline]
    pub(crate) fn literal(&mut self, pos: usize, text: &'static str) -> Match {
        self.keyword(Rule::Literal(text), pos, text)
    }

    /// Case insensitive ASCII text, labelled by `rule`.
    pub(crate) fn keyword(&mut self, rule: Rule, pos: usize, text: &'static str) -> Match {
        let end = pos.checked_add(text.len())?;
        let span = self.src.get(pos..end)?;
        if !span.eq_ignore_ascii_case(text.as_bytes()) {
            return None;
        }
        self.alloc(rule, pos, text.len())
    }

    /// Single byte matching `class`.
    #[inline]
    pub(crate) fn class(&mut self, rule: Rule, pos: usize, class: impl Fn(u8) -> bool) -> Match {
        let byte = *self.src.get(pos)?;
        if !class(byte) {
            return None;
        }
        self.alloc(rule, pos, 1)
    }

    /// Single byte within the inclusive range.
    #[inline]
    pub(crate) fn range(&mut self, pos: usize, lo: u8, hi: u8) -> Match {
        self.class(Rule::Range, pos, |byte| lo <= byte && byte <= hi)
    }

    /// Longest run of bytes matching `class`, may be empty.
    pub(crate) fn run(&mut self, rule: Rule, pos: usize, class: impl Fn(u8) -> bool) -> Match {
        let rest = self.src.get(pos..).unwrap_or_default();
        let len = rest.iter().take_while(|&&byte| class(byte)).count();
        self.alloc(rule, pos, len)
    }

    // ===== Composite =====

    /// Build composite production `rule` at `pos`.
    ///
    /// The node length is the sum of the children attached by `body`. If `body` fails, the node
    /// and everything below it is discarded.
    pub(crate) fn rule<F>(&mut self, rule: Rule, pos: usize, body: F) -> Match
    where
        F: FnOnce(&mut Self, &mut Frame) -> Option<()>,
    {
        let mark = self.nodes.len();
        let parent = self.alloc(rule, pos, 0)?;
        let mut frame = Frame {
            parent,
            end: pos,
            last: None,
        };
        match body(self, &mut frame) {
            Some(()) => Some(parent),
            None => {
                self.nodes.truncate(mark);
                None
            }
        }
    }
}

/// Composite production under construction.
pub(crate) struct Frame {
    parent: NodeId,
    end: usize,
    last: Option<NodeId>,
}

/// Rollback point inside a [`Frame`].
#[derive(Clone, Copy)]
struct Save {
    mark: usize,
    end: usize,
    last: Option<NodeId>,
    len: usize,
}

impl Frame {
    fn attach(&mut self, e: &mut Engine<'_>, child: NodeId) {
        let len = e.nodes[child.index()].len;
        debug_assert_eq!(e.nodes[child.index()].offset, self.end);
        match self.last {
            Some(last) => e.nodes[last.index()].sibling = Some(child),
            None => e.nodes[self.parent.index()].child = Some(child),
        }
        e.nodes[self.parent.index()].len += len;
        self.last = Some(child);
        self.end += len;
    }

    fn save(&self, e: &Engine<'_>) -> Save {
        Save {
            mark: e.nodes.len(),
            end: self.end,
            last: self.last,
            len: e.nodes[self.parent.index()].len,
        }
    }

    fn restore(&mut self, e: &mut Engine<'_>, save: Save) {
        e.nodes.truncate(save.mark);
        match save.last {
            Some(last) => e.nodes[last.index()].sibling = None,
            None => e.nodes[self.parent.index()].child = None,
        }
        e.nodes[self.parent.index()].len = save.len;
        self.end = save.end;
        self.last = save.last;
    }

    /// Apply production at the cursor and attach it as the next child.
    #[inline]
    pub(crate) fn push<'a, F>(&mut self, e: &mut Engine<'a>, rule: F) -> Option<()>
    where
        F: FnOnce(&mut Engine<'a>, usize) -> Match,
    {
        let child = rule(e, self.end)?;
        self.attach(e, child);
        Some(())
    }

    /// Attach a literal match.
    #[inline]
    pub(crate) fn lit(&mut self, e: &mut Engine<'_>, text: &'static str) -> Option<()> {
        self.push(e, |e, pos| e.literal(pos, text))
    }

    /// Attach a byte range match.
    #[inline]
    pub(crate) fn range(&mut self, e: &mut Engine<'_>, lo: u8, hi: u8) -> Option<()> {
        self.push(e, |e, pos| e.range(pos, lo, hi))
    }

    /// Ordered choice over literals, the first that matches is attached.
    pub(crate) fn one_of(&mut self, e: &mut Engine<'_>, texts: &[&'static str]) -> Option<()> {
        texts.iter().find_map(|&text| self.lit(e, text))
    }

    /// Sequence: all of `body` or nothing.
    pub(crate) fn group<'a, F>(&mut self, e: &mut Engine<'a>, body: F) -> Option<()>
    where
        F: FnOnce(&mut Engine<'a>, &mut Frame) -> Option<()>,
    {
        let save = self.save(e);
        let result = body(e, self);
        if result.is_none() {
            self.restore(e, save);
        }
        result
    }

    /// Optional: `[ body ]`, never fails.
    #[inline]
    pub(crate) fn opt<'a, F>(&mut self, e: &mut Engine<'a>, body: F) -> Option<()>
    where
        F: FnOnce(&mut Engine<'a>, &mut Frame) -> Option<()>,
    {
        let _ = self.group(e, body);
        Some(())
    }

    /// Repetition: `min*max body`.
    ///
    /// Applies `body` until it fails, then checks the count. An iteration that consumes nothing
    /// is discarded and ends the loop. On a violated bound, the whole repetition is rolled back.
    pub(crate) fn repeat<'a, F>(
        &mut self,
        e: &mut Engine<'a>,
        min: usize,
        max: usize,
        mut body: F,
    ) -> Option<()>
    where
        F: FnMut(&mut Engine<'a>, &mut Frame) -> Option<()>,
    {
        let start = self.save(e);
        let mut count = 0;
        loop {
            let before = self.save(e);
            match body(e, self) {
                Some(()) if self.end > before.end => count += 1,
                _ => {
                    self.restore(e, before);
                    break;
                }
            }
        }
        if count < min || count > max {
            self.restore(e, start);
            return None;
        }
        Some(())
    }

    /// Exact repetition: `n body`, each occurrence applied once in sequence.
    pub(crate) fn times<'a, F>(&mut self, e: &mut Engine<'a>, n: usize, mut body: F) -> Option<()>
    where
        F: FnMut(&mut Engine<'a>, &mut Frame) -> Option<()>,
    {
        self.group(e, |e, f| (0..n).try_for_each(|_| body(e, f)))
    }

    /// `*body`
    #[inline]
    pub(crate) fn any<'a, F>(&mut self, e: &mut Engine<'a>, body: F) -> Option<()>
    where
        F: FnMut(&mut Engine<'a>, &mut Frame) -> Option<()>,
    {
        self.repeat(e, 0, usize::MAX, body)
    }

    /// `1*body`
    #[inline]
    pub(crate) fn some<'a, F>(&mut self, e: &mut Engine<'a>, body: F) -> Option<()>
    where
        F: FnMut(&mut Engine<'a>, &mut Frame) -> Option<()>,
    {
        self.repeat(e, 1, usize::MAX, body)
    }
}
