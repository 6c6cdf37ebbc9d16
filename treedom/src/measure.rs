use unicode_width::UnicodeWidthStr;

use crate::document::Document;
use crate::node::{NodeId, NodeKind};

/// Columns taken by a disclosure indicator plus the separating space.
const INDICATOR_WIDTH: u16 = 2;

impl Document {
    /// Whether `id` currently renders at all: rooted in the document and not
    /// suppressed by its own flags or by any ancestor (closed disclosure,
    /// closed modal, hidden flag).
    pub fn is_visible(&self, id: NodeId) -> bool {
        let Some(kind) = self.kind(id) else {
            return false;
        };
        if self.hidden(id) || kind.hides_self() {
            return false;
        }
        let mut cur = id;
        loop {
            match self.parent(cur) {
                Some(parent) => {
                    let Some(kind) = self.kind(parent) else {
                        return false;
                    };
                    if self.hidden(parent) || kind.hides_self() || kind.hides_children() {
                        return false;
                    }
                    cur = parent;
                }
                None => return cur == self.root(),
            }
        }
    }

    /// Rendered width of `id` in columns: zero whenever the node is not
    /// visible, otherwise its intrinsic width. This is a proxy for "shows up
    /// on screen" and has one blind spot: a legitimately empty container
    /// measures zero even when fully revealed.
    pub fn rendered_width(&self, id: NodeId) -> u16 {
        if !self.is_visible(id) {
            return 0;
        }
        self.intrinsic_width(id)
    }

    fn intrinsic_width(&self, id: NodeId) -> u16 {
        let Some(kind) = self.kind(id) else {
            return 0;
        };
        if self.hidden(id) {
            return 0;
        }
        match kind {
            NodeKind::Text(text) => text_width(text),
            NodeKind::Box => self.children_width(id),
            NodeKind::Disclosure { summary, open } => {
                let header = text_width(summary).saturating_add(INDICATOR_WIDTH);
                if *open {
                    header.max(self.children_width(id))
                } else {
                    header
                }
            }
            NodeKind::Modal { open: false } => 0,
            NodeKind::Modal { open: true } => self.children_width(id),
        }
    }

    fn children_width(&self, id: NodeId) -> u16 {
        self.children(id)
            .iter()
            .map(|child| self.intrinsic_width(*child))
            .max()
            .unwrap_or(0)
    }
}

fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}
