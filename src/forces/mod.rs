//! Per-tick force creators.
//!
//! Everything that pushes bodies around, from drag to collision response, is a
//! [`ForceCreator`] registered on a [`Scene`] together with the bodies it
//! depends on. The scene calls every creator once per tick in registration
//! order and drops a creator as soon as one of its bodies is removed.

use crate::error::{PhysicsError, Result};
use crate::world::{BodyId, BodySet, Scene};

pub mod collision;
pub mod drag;
pub mod gravity;
pub mod response;
pub mod spring;

pub use collision::{create_collision, Collision, CollisionHandler};
pub use drag::{create_drag, Drag};
pub use gravity::{create_newtonian_gravity, Gravity};
pub use response::{
    create_damaging_collision, create_destructive_collision, create_physics_collision,
    create_solo_destructive_collision, DamagingResponse, DestructiveResponse, PhysicsResponse,
};
pub use spring::{create_spring, Spring};

/// A callback evaluated once per scene tick.
///
/// Implementations read and mutate bodies through the [`BodySet`]: add forces
/// or impulses, move bodies, or flag them removed.
pub trait ForceCreator {
    fn apply(&mut self, bodies: &mut BodySet);
}

impl<F> ForceCreator for F
where
    F: FnMut(&mut BodySet),
{
    fn apply(&mut self, bodies: &mut BodySet) {
        self(bodies)
    }
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidParameter { name, value })
    }
}

/// Checks that a pairwise creator gets two distinct bodies of `scene`.
pub(crate) fn require_pair(scene: &Scene, body1: BodyId, body2: BodyId) -> Result<()> {
    for id in [body1, body2] {
        if !scene.contains(id) {
            return Err(PhysicsError::UnknownBody(id));
        }
    }
    if body1 == body2 {
        return Err(PhysicsError::SelfInteraction(body1));
    }
    Ok(())
}
