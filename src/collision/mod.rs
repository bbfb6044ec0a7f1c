pub mod detection;
pub mod info;

// Re-export key types
pub use detection::find_collision;
pub use info::CollisionInfo;
