pub mod circles;
pub mod interactions;
pub mod plugin;
pub mod setup;
