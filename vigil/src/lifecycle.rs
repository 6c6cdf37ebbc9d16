//! Node lifecycle tracking.
//!
//! Hosts call [`LifecycleState::init`] when a subtree has landed in the live
//! document and [`LifecycleState::destroy`] when one is discarded for good.
//! Observers registered with [`LifecycleState::add_listener`] run
//! synchronously inside those calls.

use std::collections::HashMap;

use log::{debug, warn};
use treedom::{Document, NodeId};

/// Where a node is in its lifecycle. The state only moves forward, from
/// `Unset` to `Live` to `Dead`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Liveness {
    /// No transition observed yet.
    #[default]
    Unset,
    /// Part of the rendered document; init listeners have run.
    Live,
    /// Torn down permanently; destroy listeners have run.
    Dead,
}

/// The two observable transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The node became part of the live document.
    Init,
    /// The node is being discarded, never to return.
    Destroy,
}

/// Zero-argument observer. A returned error is logged and contained so the
/// remaining listeners still run.
pub type LifecycleListener = Box<dyn FnMut() -> anyhow::Result<()>>;

#[derive(Default)]
struct Entry {
    liveness: Liveness,
    init: Vec<LifecycleListener>,
    destroy: Vec<LifecycleListener>,
}

impl Entry {
    fn listeners_mut(&mut self, condition: Condition) -> &mut Vec<LifecycleListener> {
        match condition {
            Condition::Init => &mut self.init,
            Condition::Destroy => &mut self.destroy,
        }
    }
}

/// Per-node lifecycle side table.
///
/// Nothing here lives inside the document. The table maps node identity to a
/// small record created lazily on first registration or first transition,
/// and dropped with [`forget`] once the host disposes the node. Node ids are
/// never reused, so a stale entry is garbage, not a hazard.
///
/// [`forget`]: LifecycleState::forget
#[derive(Default)]
pub struct LifecycleState {
    entries: HashMap<NodeId, Entry>,
}

impl LifecycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current liveness of `node`. `Unset` until a transition is recorded.
    pub fn liveness(&self, node: NodeId) -> Liveness {
        self.entries
            .get(&node)
            .map(|entry| entry.liveness)
            .unwrap_or_default()
    }

    /// Register `listener` to run when `node` reaches `condition`.
    ///
    /// Listener lists are append-only and fire in registration order.
    /// Registration does not consult the node's state or attachment; a
    /// listener added after its transition already happened simply never
    /// runs.
    pub fn add_listener<F>(&mut self, node: NodeId, condition: Condition, listener: F)
    where
        F: FnMut() -> anyhow::Result<()> + 'static,
    {
        self.entries
            .entry(node)
            .or_default()
            .listeners_mut(condition)
            .push(Box::new(listener));
    }

    /// Mark `node` live and fire its init listeners.
    ///
    /// A no-op when the node already has a recorded state (second init, or
    /// init after destroy) and when the node is not attached under the
    /// document root. A fragment still under construction must not be marked
    /// live; init it again after insertion.
    pub fn init(&mut self, doc: &Document, node: NodeId) {
        if self.liveness(node) != Liveness::Unset {
            return;
        }
        if !doc.is_rooted(node) {
            debug!("[lifecycle] init skipped for {node}: not rooted in the document");
            return;
        }
        debug!("[lifecycle] {node} -> live");
        let entry = self.entries.entry(node).or_default();
        entry.liveness = Liveness::Live;
        fire(&mut entry.init, node, Condition::Init);
    }

    /// Tear down `node` and everything below it, depth first.
    ///
    /// Each visited node that is live turns dead and fires its destroy
    /// listeners, parent before child. A node that never went live fires
    /// nothing and keeps its state, but its children are still visited, so a
    /// live grandchild is torn down even under a never-initialized parent.
    pub fn destroy(&mut self, doc: &Document, node: NodeId) {
        if self.liveness(node) == Liveness::Live {
            debug!("[lifecycle] {node} -> dead");
            let entry = self.entries.entry(node).or_default();
            entry.liveness = Liveness::Dead;
            fire(&mut entry.destroy, node, Condition::Destroy);
        }
        for &child in doc.children(node) {
            self.destroy(doc, child);
        }
    }

    /// Drop the entry for `node` once the host has disposed it. Ids are
    /// never minted twice, so a skipped call leaks but never misfires.
    pub fn forget(&mut self, node: NodeId) {
        self.entries.remove(&node);
    }

    /// Drop the entries of `node` and of everything below it in `doc`,
    /// listeners included. Call between the destroy cascade and the host's
    /// removal of the subtree; after removal the descendant ids are no
    /// longer enumerable and only `node`'s own entry can still be dropped.
    pub fn forget_subtree(&mut self, doc: &Document, node: NodeId) {
        self.forget(node);
        for id in doc.descendants(node) {
            self.forget(id);
        }
    }
}

/// Run every listener, containing failures: one broken observer must not
/// silence its siblings or stop a teardown cascade.
fn fire(listeners: &mut [LifecycleListener], node: NodeId, condition: Condition) {
    for listener in listeners.iter_mut() {
        if let Err(err) = listener() {
            warn!("[lifecycle] {condition:?} listener failed for {node}: {err:#}");
        }
    }
}
