pub mod scene;

pub use scene::{FollowScene, setup_scene};
