//! Bubbling notices.
//!
//! A notice dispatched at a node is delivered to handlers on that node and
//! then on each ancestor in turn, which lets a container react to conditions
//! raised anywhere inside it without knowing the exact origin up front.

use std::collections::HashMap;

use log::trace;

use crate::document::Document;
use crate::node::NodeId;

/// Payload handed to every handler on the bubble path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Name of the condition being signalled.
    pub name: &'static str,
    /// Node the notice was dispatched at.
    pub origin: NodeId,
}

/// Handler attached to a node. Runs for notices dispatched at that node or
/// at any of its descendants.
pub type NoticeHandler = Box<dyn FnMut(&mut Document, &Notice)>;

/// Side table of bubbling notice handlers.
///
/// Handlers live beside the document rather than inside it, the same
/// arrangement as focus or scroll state beside an element tree. That split
/// is what lets a running handler mutate the document it was notified about.
#[derive(Default)]
pub struct NoticeHub {
    handlers: HashMap<NodeId, Vec<NoticeHandler>>,
}

impl NoticeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler to `node`. Handlers on one node run in registration
    /// order; the only removal is [`forget`], which drops them all.
    ///
    /// [`forget`]: NoticeHub::forget
    pub fn observe<F>(&mut self, node: NodeId, handler: F)
    where
        F: FnMut(&mut Document, &Notice) + 'static,
    {
        self.handlers.entry(node).or_default().push(Box::new(handler));
    }

    /// Dispatch `name` at `origin` and let it bubble: the origin's handlers
    /// run first, then each ancestor's in turn. The path is captured before
    /// any handler runs, so a handler that reparents nodes does not reroute
    /// the remaining deliveries. A detached origin bubbles within its
    /// fragment only.
    pub fn dispatch(&mut self, doc: &mut Document, name: &'static str, origin: NodeId) {
        let notice = Notice { name, origin };
        let mut path = vec![origin];
        path.extend(doc.ancestors(origin));
        trace!("[notice] {name} from {origin} across {} node(s)", path.len());
        for id in path {
            if let Some(handlers) = self.handlers.get_mut(&id) {
                for handler in handlers.iter_mut() {
                    handler(doc, &notice);
                }
            }
        }
    }

    /// Drop every handler attached to `node`. Meant for hosts disposing a
    /// node; ids are never reused, so a skipped call leaks but never misfires.
    pub fn forget(&mut self, node: NodeId) {
        self.handlers.remove(&node);
    }

    /// Drop the handlers of `node` and of everything below it in `doc`.
    /// Call before the host removes the subtree; after removal the
    /// descendant ids are no longer enumerable and only `node`'s own
    /// handlers can still be dropped.
    pub fn forget_subtree(&mut self, doc: &Document, node: NodeId) {
        self.forget(node);
        for id in doc.descendants(node) {
            self.forget(id);
        }
    }
}
