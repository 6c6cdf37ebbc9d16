//! The reveal protocol: make a node actually visible by expanding every
//! collapsing container between it and the document root.

use log::warn;
use treedom::{Document, ExpandBehavior, NodeId, NodeKind, NoticeHub};

/// Name of the bubbling notice dispatched at the start of every reveal, so
/// containers with their own hiding mechanism can expand themselves.
pub const REVEAL: &str = "reveal";

/// Make `node` visible on screen.
///
/// The [`REVEAL`] notice bubbles from `node` first, giving custom containers
/// their chance to react. Then the walk from `node` to the root forces every
/// disclosure open and shows every modal, the node itself included.
///
/// Returns `false`, after logging a warning, when the walk tops out somewhere
/// other than the document root (the node is detached) or when the node still
/// measures zero width afterwards. The width check is a proxy that cannot
/// tell a hidden node from a legitimately empty one. Expansions already
/// performed are kept either way.
pub fn reveal(doc: &mut Document, notices: &mut NoticeHub, node: NodeId) -> bool {
    notices.dispatch(doc, REVEAL, node);

    let mut cur = node;
    loop {
        let behavior = doc.kind(cur).map(NodeKind::expand_behavior);
        match behavior {
            Some(ExpandBehavior::Disclosure) => doc.set_open(cur, true),
            Some(ExpandBehavior::Modal) => doc.show_modal(cur),
            Some(ExpandBehavior::Inert) | None => {}
        }
        match doc.parent(cur) {
            Some(parent) => cur = parent,
            None => {
                if cur == doc.root() {
                    break;
                }
                warn!("[reveal] cannot reveal {node}: walk ended at unrooted {cur}");
                return false;
            }
        }
    }

    if doc.rendered_width(node) == 0 {
        warn!("[reveal] {node} still has zero rendered width after expansion");
        return false;
    }
    true
}
