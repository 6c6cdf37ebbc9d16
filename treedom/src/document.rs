use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::node::{Node, NodeId, NodeKind};

/// Error from a structural document mutation.
///
/// Only operations that would corrupt the tree shape refuse; attribute
/// mutators such as [`Document::set_open`] are lenient no-ops instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("node {0} is already attached to a parent")]
    AlreadyAttached(NodeId),
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
    #[error("the document root cannot be moved or removed")]
    ImmovableRoot,
    #[error("index {index} exceeds the {len} children of {parent}")]
    IndexOutOfBounds {
        parent: NodeId,
        index: usize,
        len: usize,
    },
}

/// An owned tree of visual-element nodes.
///
/// The document holds every node in an arena and owns all structure: parent
/// links and child order only move through its methods. One node is special,
/// the root sentinel created by [`Document::new`]. It is an ordinary `Box`
/// container distinguished purely by identity; a parentless node that is not
/// the sentinel is the top of a detached fragment, not part of the rendered
/// document.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

impl Document {
    /// Create a document containing only the root sentinel.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::new(NodeKind::Box));
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// The document-root sentinel.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Mint a fresh node. It starts detached; attach it with
    /// [`append_child`] or [`insert_child`].
    ///
    /// [`append_child`]: Document::append_child
    /// [`insert_child`]: Document::insert_child
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(kind));
        id
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Whether `id` names a node in this document, attached or not.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// The containing node. `None` for the root, for fragment tops, and for
    /// unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    /// The ordered children of `id`. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// The node's kind.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(&id).map(|node| &node.kind)
    }

    /// Mutable access to the node's kind for host-side edits.
    pub fn kind_mut(&mut self, id: NodeId) -> Option<&mut NodeKind> {
        self.nodes.get_mut(&id).map(|node| &mut node.kind)
    }

    /// Whether the node carries the display-suppressing hidden flag.
    pub fn hidden(&self, id: NodeId) -> bool {
        self.nodes.get(&id).map(|node| node.hidden).unwrap_or(false)
    }

    /// Iterate the parent chain of `id`, nearest first. Does not yield `id`
    /// itself; ends at the root for attached nodes and at the fragment top
    /// for detached ones.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            cur: self.parent(id),
        }
    }

    /// Iterate `id` and every node below it, depth first in document order.
    /// Yields nothing for unknown ids.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: if self.contains(id) { vec![id] } else { Vec::new() },
        }
    }

    /// Follow parent links to the top and check the walk ends at the root
    /// sentinel. A fragment top has no parent yet still fails this.
    pub fn is_rooted(&self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut cur = id;
        while let Some(parent) = self.parent(cur) {
            cur = parent;
        }
        cur == self.root
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child)
    }

    /// Insert `child` at `index` among the children of `parent`. The child
    /// must currently be detached; move a node by detaching it first.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::UnknownNode(child));
        }
        if child == self.root {
            return Err(TreeError::ImmovableRoot);
        }
        if self.parent(child).is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        // The child must not appear on the parent's own ancestor chain.
        let mut cur = Some(parent);
        while let Some(id) = cur {
            if id == child {
                return Err(TreeError::WouldCycle { parent, child });
            }
            cur = self.parent(id);
        }
        let len = self.children(parent).len();
        if index > len {
            return Err(TreeError::IndexOutOfBounds { parent, index, len });
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.insert(index, child);
        }
        Ok(())
    }

    /// Unlink `id` from its parent, making it the top of a detached fragment
    /// with its own subtree intact. Detaching an already-detached node is a
    /// no-op.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::ImmovableRoot);
        }
        if !self.contains(id) {
            return Err(TreeError::UnknownNode(id));
        }
        let Some(parent) = self.parent(id) else {
            return Ok(());
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|c| *c != id);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
        Ok(())
    }

    /// Dispose of `id` and its entire subtree. The ids become unknown and
    /// are never minted again.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::ImmovableRoot);
        }
        if !self.contains(id) {
            return Err(TreeError::UnknownNode(id));
        }
        self.detach(id)?;
        self.drop_subtree(id);
        debug!("[document] removed subtree at {id}");
        Ok(())
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let children = self
            .nodes
            .get(&id)
            .map(|node| node.children.clone())
            .unwrap_or_default();
        for child in children {
            self.drop_subtree(child);
        }
        self.nodes.remove(&id);
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    /// Force a disclosure's open attribute. No-op on every other kind.
    pub fn set_open(&mut self, id: NodeId, open: bool) {
        if let Some(NodeKind::Disclosure { open: o, .. }) = self.kind_mut(id) {
            *o = open;
        }
    }

    /// Show a modal. No-op on every other kind.
    pub fn show_modal(&mut self, id: NodeId) {
        if let Some(NodeKind::Modal { open }) = self.kind_mut(id) {
            *open = true;
        }
    }

    /// Close a modal again. No-op on every other kind.
    pub fn close_modal(&mut self, id: NodeId) {
        if let Some(NodeKind::Modal { open }) = self.kind_mut(id) {
            *open = false;
        }
    }

    /// Set or clear the hidden flag. No-op on unknown ids.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.hidden = hidden;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// See [`Document::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    cur: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cur?;
        self.cur = self.doc.parent(id);
        Some(id)
    }
}

/// See [`Document::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push in reverse so the first child is visited next.
        self.stack.extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
