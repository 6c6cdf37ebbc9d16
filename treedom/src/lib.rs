pub mod document;
mod measure;
pub mod node;
pub mod notice;

pub use document::{Ancestors, Descendants, Document, TreeError};
pub use node::{ExpandBehavior, NodeId, NodeKind};
pub use notice::{Notice, NoticeHandler, NoticeHub};
