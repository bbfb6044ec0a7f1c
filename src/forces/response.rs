//! Collision handlers used by the game, and the helpers that register them.

use super::collision::{create_collision, CollisionHandler};
use crate::common::BodyTag;
use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::world::{BodyId, ForceId, Scene};

/// Impulse exchange along the contact normal.
///
/// `elasticity` of 1 conserves kinetic energy along the normal, 0 makes the
/// pair move together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsResponse {
    pub elasticity: f64,
}

impl PhysicsResponse {
    pub fn new(elasticity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&elasticity) {
            return Err(PhysicsError::InvalidParameter { name: "elasticity", value: elasticity });
        }
        Ok(PhysicsResponse { elasticity })
    }
}

fn reduced_mass(body1: &Body, body2: &Body) -> f64 {
    match (body1.is_static(), body2.is_static()) {
        (true, _) => body2.mass(),
        (_, true) => body1.mass(),
        _ => {
            let total = body1.mass() + body2.mass();
            if total == 0.0 {
                0.0
            } else {
                body1.mass() * body2.mass() / total
            }
        }
    }
}

impl CollisionHandler for PhysicsResponse {
    fn on_collision(&mut self, body1: &mut Body, body2: &mut Body, axis: Vec2) {
        if body1.is_static() && body2.is_static() {
            return;
        }

        let normal = axis.normalize();
        let u1 = normal.dot(body1.velocity());
        let u2 = normal.dot(body2.velocity());
        let impulse = reduced_mass(body1, body2) * (1.0 + self.elasticity) * (u2 - u1);

        if !body1.is_static() {
            body1.add_impulse(normal * impulse);
        }
        if !body2.is_static() {
            body2.add_impulse(normal * -impulse);
        }
    }
}

/// Flags `body2` removed on contact, and `body1` too when `destroy_both` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestructiveResponse {
    pub destroy_both: bool,
}

impl CollisionHandler for DestructiveResponse {
    fn on_collision(&mut self, body1: &mut Body, body2: &mut Body, _axis: Vec2) {
        body2.remove();
        if self.destroy_both {
            body1.remove();
        }
    }
}

/// Adds a projectile's damage to the body it hits, then removes the projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamagingResponse {
    pub damage: f64,
}

impl CollisionHandler for DamagingResponse {
    fn on_collision(&mut self, damaged: &mut Body, projectile: &mut Body, _axis: Vec2) {
        damaged.add_damage(self.damage);
        projectile.remove();
    }
}

/// Registers an elastic or inelastic collision between two bodies.
pub fn create_physics_collision(
    scene: &mut Scene,
    elasticity: f64,
    body1: BodyId,
    body2: BodyId,
) -> Result<ForceId> {
    create_collision(scene, body1, body2, PhysicsResponse::new(elasticity)?)
}

/// Registers a collision that destroys both bodies on contact.
pub fn create_destructive_collision(scene: &mut Scene, body1: BodyId, body2: BodyId) -> Result<ForceId> {
    create_collision(scene, body1, body2, DestructiveResponse { destroy_both: true })
}

/// Registers a collision that destroys only `removed` on contact.
pub fn create_solo_destructive_collision(
    scene: &mut Scene,
    retained: BodyId,
    removed: BodyId,
) -> Result<ForceId> {
    create_collision(scene, retained, removed, DestructiveResponse { destroy_both: false })
}

/// Registers a hit of `projectile` on `damaged`.
///
/// The damage is read from the projectile's tag now, so `projectile` must be
/// tagged with a [`ProjectileKind`](crate::common::ProjectileKind).
pub fn create_damaging_collision(
    scene: &mut Scene,
    damaged: BodyId,
    projectile: BodyId,
) -> Result<ForceId> {
    let tag = scene
        .body(projectile)
        .ok_or(PhysicsError::UnknownBody(projectile))?
        .tag();
    let Some(BodyTag::Projectile(kind)) = tag else {
        return Err(PhysicsError::NotAProjectile(projectile));
    };
    create_collision(scene, damaged, projectile, DamagingResponse { damage: kind.damage() })
}
