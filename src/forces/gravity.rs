use log::trace;

use super::{require_finite, require_pair, ForceCreator};
use crate::error::Result;
use crate::math::vec2::Vec2;
use crate::world::{BodyId, BodySet, ForceId, Scene};

/// Inverse-square attraction between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Gravitational constant.
    pub g: f64,
    pub body1: BodyId,
    pub body2: BodyId,
    /// Below this centroid separation no force is applied.
    pub min_distance: f64,
}

impl ForceCreator for Gravity {
    fn apply(&mut self, bodies: &mut BodySet) {
        let (Some(a), Some(b)) = (bodies.get(self.body1), bodies.get(self.body2)) else {
            return;
        };
        if !a.mass().is_finite() || !b.mass().is_finite() {
            return;
        }

        let distance = a.centroid().distance(b.centroid());
        if distance < self.min_distance || distance == 0.0 {
            trace!("gravity between {:?} and {:?} below floor ({})", self.body1, self.body2, distance);
            return;
        }

        // Points from body1 toward body2.
        let direction = Vec2::unit_vector(b.centroid(), a.centroid());
        let magnitude = self.g * a.mass() * b.mass() / (distance * distance);
        let force = direction * magnitude;

        if let Some((a, b)) = bodies.pair_mut(self.body1, self.body2) {
            a.add_force(force);
            b.add_force(-force);
        }
    }
}

/// Registers Newtonian gravity with constant `g` between two bodies.
///
/// The distance floor comes from the scene's
/// [`SceneConfig::gravity_min_distance`](crate::common::SceneConfig).
pub fn create_newtonian_gravity(scene: &mut Scene, g: f64, body1: BodyId, body2: BodyId) -> Result<ForceId> {
    require_finite("g", g)?;
    require_pair(scene, body1, body2)?;
    let gravity = Gravity {
        g,
        body1,
        body2,
        min_distance: scene.config().gravity_min_distance,
    };
    scene.add_bodies_force_creator(gravity, &[body1, body2])
}
