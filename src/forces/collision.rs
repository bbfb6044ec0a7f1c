use log::trace;

use super::{require_pair, ForceCreator};
use crate::collision::find_collision;
use crate::error::Result;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::world::{BodyId, BodySet, ForceId, Scene};

/// Reaction to two bodies coming into contact.
///
/// `axis` is the minimum translation vector, pointing from `body1` toward
/// `body2`.
pub trait CollisionHandler {
    fn on_collision(&mut self, body1: &mut Body, body2: &mut Body, axis: Vec2);
}

impl<F> CollisionHandler for F
where
    F: FnMut(&mut Body, &mut Body, Vec2),
{
    fn on_collision(&mut self, body1: &mut Body, body2: &mut Body, axis: Vec2) {
        self(body1, body2, axis)
    }
}

/// Watches a pair of bodies for overlap.
///
/// While the pair overlaps it is pushed apart every tick. The handler only
/// fires on the tick contact begins and is re-armed once the pair separates.
#[derive(Debug, Clone)]
pub struct Collision<H> {
    body1: BodyId,
    body2: BodyId,
    handler: H,
    colliding: bool,
}

impl<H: CollisionHandler> Collision<H> {
    pub fn new(body1: BodyId, body2: BodyId, handler: H) -> Self {
        Collision { body1, body2, handler, colliding: false }
    }

    /// Whether the pair overlapped on the last evaluation.
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }
}

impl<H: CollisionHandler> ForceCreator for Collision<H> {
    fn apply(&mut self, bodies: &mut BodySet) {
        let Some((body1, body2)) = bodies.pair_mut(self.body1, self.body2) else {
            return;
        };

        let info = find_collision(body1.vertices(), body2.vertices());
        if !info.collided {
            self.colliding = false;
            return;
        }

        separate(body1, body2, info.axis);

        if !self.colliding {
            self.colliding = true;
            trace!("contact between {:?} and {:?}, depth {}", self.body1, self.body2, info.depth());
            self.handler.on_collision(body1, body2, info.axis);
        }
    }
}

/// Pushes an overlapping pair apart along `mtv`.
///
/// Finite bodies share the correction half each. Against an infinite-mass body
/// the other one moves the full distance.
pub(crate) fn separate(body1: &mut Body, body2: &mut Body, mtv: Vec2) {
    match (body1.is_static(), body2.is_static()) {
        (true, true) => {}
        (true, false) => body2.set_centroid(body2.centroid() + mtv),
        (false, true) => body1.set_centroid(body1.centroid() - mtv),
        (false, false) => {
            let half = mtv * 0.5;
            body1.set_centroid(body1.centroid() - half);
            body2.set_centroid(body2.centroid() + half);
        }
    }
}

/// Registers `handler` to run whenever `body1` and `body2` start touching.
pub fn create_collision<H>(scene: &mut Scene, body1: BodyId, body2: BodyId, handler: H) -> Result<ForceId>
where
    H: CollisionHandler + 'static,
{
    require_pair(scene, body1, body2)?;
    scene.add_bodies_force_creator(Collision::new(body1, body2, handler), &[body1, body2])
}
