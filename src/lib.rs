//! Physics and collision core for a top-down arcade shooter.
//!
//! Bodies are convex polygons in a single world coordinate space. A [`Scene`]
//! owns them together with a list of [`ForceCreator`]s (gravity, springs,
//! drag, collision watchers) that run once per [`Scene::tick`].

pub mod collision;
pub mod common;
pub mod error;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{find_collision, CollisionInfo};
pub use common::{BodyTag, Color, EntityRole, ProjectileKind, SceneConfig};
pub use error::{PhysicsError, Result};
pub use forces::{
    create_collision, create_damaging_collision, create_destructive_collision, create_drag,
    create_newtonian_gravity, create_physics_collision, create_solo_destructive_collision,
    create_spring, CollisionHandler, ForceCreator,
};
pub use math::vec2::Vec2;
pub use objects::body::Body;
pub use shapes::Polygon;
pub use world::{BodyId, BodySet, ForceId, Scene};
