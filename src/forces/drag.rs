use super::{require_finite, ForceCreator};
use crate::error::{PhysicsError, Result};
use crate::world::{BodyId, BodySet, ForceId, Scene};

/// Linear drag `F = -gamma * v` on one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub gamma: f64,
    pub body: BodyId,
}

impl ForceCreator for Drag {
    fn apply(&mut self, bodies: &mut BodySet) {
        if let Some(body) = bodies.get_mut(self.body) {
            let force = body.velocity() * -self.gamma;
            body.add_force(force);
        }
    }
}

/// Registers linear drag with coefficient `gamma` on `body`.
pub fn create_drag(scene: &mut Scene, gamma: f64, body: BodyId) -> Result<ForceId> {
    require_finite("gamma", gamma)?;
    if !scene.contains(body) {
        return Err(PhysicsError::UnknownBody(body));
    }
    scene.add_bodies_force_creator(Drag { gamma, body }, &[body])
}
