use super::{require_finite, require_pair, ForceCreator};
use crate::error::Result;
use crate::world::{BodyId, BodySet, ForceId, Scene};

/// Hooke spring with zero rest length between two centroids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// Spring constant.
    pub k: f64,
    pub body1: BodyId,
    pub body2: BodyId,
}

impl ForceCreator for Spring {
    fn apply(&mut self, bodies: &mut BodySet) {
        let Some((a, b)) = bodies.pair_mut(self.body1, self.body2) else {
            return;
        };
        let force = (b.centroid() - a.centroid()) * self.k;
        a.add_force(force);
        b.add_force(-force);
    }
}

/// Registers a spring with constant `k` pulling two bodies together.
pub fn create_spring(scene: &mut Scene, k: f64, body1: BodyId, body2: BodyId) -> Result<ForceId> {
    require_finite("k", k)?;
    require_pair(scene, body1, body2)?;
    scene.add_bodies_force_creator(Spring { k, body1, body2 }, &[body1, body2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::objects::body::Body;
    use crate::shapes::builders;

    const EPSILON: f64 = 1e-9;

    fn body_at(center: Vec2) -> Body {
        Body::new(builders::rectangle(center, 1.0, 1.0).unwrap(), 1.0).unwrap()
    }

    #[test]
    fn test_spring_force_is_proportional_to_separation() {
        let mut bodies = BodySet::default();
        let a = bodies.insert(body_at(Vec2::new(0.0, 0.0)));
        let b = bodies.insert(body_at(Vec2::new(3.0, 4.0)));
        let mut spring = Spring { k: 2.0, body1: a, body2: b };

        spring.apply(&mut bodies);

        let fa = bodies.get(a).unwrap().force();
        let fb = bodies.get(b).unwrap().force();
        assert!((fa.x - 6.0).abs() < EPSILON);
        assert!((fa.y - 8.0).abs() < EPSILON);
        assert!((fa + fb).magnitude() < EPSILON);
    }

    #[test]
    fn test_create_spring_rejects_non_finite_constant() {
        let mut scene = Scene::new();
        let a = scene.add_body(body_at(Vec2::ZERO));
        let b = scene.add_body(body_at(Vec2::new(1.0, 0.0)));
        assert!(create_spring(&mut scene, f64::INFINITY, a, b).is_err());
        assert!(create_spring(&mut scene, 1.0, a, b).is_ok());
        assert_eq!(scene.force_count(), 1);
    }
}
