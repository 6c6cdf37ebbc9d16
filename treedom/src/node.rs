use std::fmt;

/// Identity of a node within a [`Document`](crate::Document).
///
/// Ids are minted by the document and never reused, even after the node is
/// removed, so side tables keyed by `NodeId` cannot confuse an old node with
/// a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// What a node is.
///
/// The set is closed on purpose: everything that wants to act on a node's
/// display behavior resolves it to an [`ExpandBehavior`] and matches that
/// exhaustively, so adding a kind forces every call site to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Generic container with no display behavior of its own.
    Box,
    /// Leaf text content.
    Text(String),
    /// Disclosure widget: the summary row always renders, the children only
    /// render while `open` is set.
    Disclosure { summary: String, open: bool },
    /// Modal dialog: renders nothing at all until shown.
    Modal { open: bool },
}

impl NodeKind {
    /// A leaf text node.
    pub fn text(content: impl Into<String>) -> Self {
        NodeKind::Text(content.into())
    }

    /// A disclosure that starts collapsed.
    pub fn disclosure(summary: impl Into<String>) -> Self {
        NodeKind::Disclosure {
            summary: summary.into(),
            open: false,
        }
    }

    /// A modal that starts closed.
    pub fn modal() -> Self {
        NodeKind::Modal { open: false }
    }

    /// How this kind responds to a programmatic expansion request.
    pub fn expand_behavior(&self) -> ExpandBehavior {
        match self {
            NodeKind::Disclosure { .. } => ExpandBehavior::Disclosure,
            NodeKind::Modal { .. } => ExpandBehavior::Modal,
            NodeKind::Box | NodeKind::Text(_) => ExpandBehavior::Inert,
        }
    }

    /// True while this node suppresses the rendering of its children.
    pub fn hides_children(&self) -> bool {
        matches!(
            self,
            NodeKind::Disclosure { open: false, .. } | NodeKind::Modal { open: false }
        )
    }

    /// True while the node suppresses its own rendering (a closed modal).
    pub fn hides_self(&self) -> bool {
        matches!(self, NodeKind::Modal { open: false })
    }
}

/// How a node participates in programmatic expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandBehavior {
    /// Expansion forces the open attribute, like a disclosure widget.
    Disclosure,
    /// Expansion invokes the show operation, like a modal dialog.
    Modal,
    /// Expansion passes over the node without touching it.
    Inert,
}

/// Arena slot for a single node. The structural links stay crate-private so
/// they can only change through [`Document`](crate::Document) operations.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) hidden: bool,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            hidden: false,
        }
    }
}
