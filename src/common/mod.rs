pub mod color;
pub mod config;
pub mod tag;

pub use color::Color;
pub use config::SceneConfig;
pub use tag::{BodyTag, EntityRole, ProjectileKind};
