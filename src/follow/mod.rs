pub mod chain;
pub mod layers;
pub mod spring;
pub mod tracker;

pub use chain::{FOLLOWER_COUNT, FollowerChain};
pub use layers::{Layer, hit_circle, layers};
pub use tracker::{DragEvent, DragPhase, PointTracker};
