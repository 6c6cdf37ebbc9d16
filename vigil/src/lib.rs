pub mod lifecycle;
pub mod reveal;

pub use lifecycle::{Condition, LifecycleListener, LifecycleState, Liveness};
pub use reveal::{reveal, REVEAL};
