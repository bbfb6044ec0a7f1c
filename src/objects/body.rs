use crate::common::{BodyTag, Color};
use crate::error::{PhysicsError, Result};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::shapes::Polygon;

/// A simulated polygon with mass, velocity and per-tick force/impulse accumulators.
///
/// The shape is stored in world space. The centroid is always recomputed from
/// the shape after it moves, never tracked on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) shape: Polygon,
    pub(crate) mass: f64,
    pub(crate) centroid: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) force: Vec2,
    pub(crate) impulse: Vec2,
    rotation: f64,
    tag: Option<BodyTag>,
    color: Color,
    removed: bool,
    damage: f64,
}

impl Body {
    /// Creates an untagged body at rest.
    ///
    /// `mass` may be `f64::INFINITY` for immovable bodies. A mass of zero makes
    /// a kinematic body that only moves through [`Body::set_velocity`] and
    /// [`Body::set_centroid`]. Negative or NaN mass is rejected.
    pub fn new(shape: Polygon, mass: f64) -> Result<Self> {
        if mass.is_nan() || mass < 0.0 {
            return Err(PhysicsError::InvalidMass { mass });
        }
        let centroid = shape.centroid();
        Ok(Body {
            shape,
            mass,
            centroid,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            impulse: Vec2::ZERO,
            rotation: 0.0,
            tag: None,
            color: Color::default(),
            removed: false,
            damage: 0.0,
        })
    }

    /// Creates a body carrying `tag` for its whole lifetime.
    pub fn with_tag(shape: Polygon, mass: f64, tag: impl Into<BodyTag>) -> Result<Self> {
        let mut body = Body::new(shape, mass)?;
        body.tag = Some(tag.into());
        Ok(body)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    pub fn vertices(&self) -> &[Vec2] {
        self.shape.vertices()
    }

    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Facing angle in radians, as last passed to [`Body::set_rotation`].
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// True for infinite-mass bodies, which no force or collision can move.
    pub fn is_static(&self) -> bool {
        self.mass.is_infinite()
    }

    /// `1 / mass`, or 0 for infinite-mass and zero-mass bodies.
    pub fn inverse_mass(&self) -> f64 {
        if self.mass.is_infinite() || self.mass == 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Force accumulated since the last tick.
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Impulse accumulated since the last tick.
    pub fn impulse(&self) -> Vec2 {
        self.impulse
    }

    pub fn tag(&self) -> Option<BodyTag> {
        self.tag
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Moves the body so that its centroid lands on `new_centroid`.
    pub fn set_centroid(&mut self, new_centroid: Vec2) {
        self.shape.translate(new_centroid - self.centroid);
        self.centroid = self.shape.centroid();
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Sets the absolute facing angle by undoing the current rotation and
    /// applying the new one, both about the centroid.
    pub fn set_rotation(&mut self, angle: f64) {
        let pivot = self.centroid;
        self.shape.rotate(-self.rotation, pivot);
        self.shape.rotate(angle, pivot);
        self.centroid = self.shape.centroid();
        self.rotation = angle;
    }

    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }

    /// Advances the body by `dt` seconds and clears the accumulators.
    pub fn tick(&mut self, dt: f64) {
        integrator::integrate(self, dt);
    }

    /// Flags the body for removal at the next tick boundary of its scene.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Adds to the damage counter. Pass a negative amount to drain it.
    pub fn add_damage(&mut self, amount: f64) {
        self.damage += amount;
    }

    /// Damage accumulated from collisions and not yet drained by the caller.
    pub fn damage_collisions(&self) -> f64 {
        self.damage
    }

    pub(crate) fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{EntityRole, ProjectileKind};
    use crate::shapes::builders;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn square(center: Vec2) -> Polygon {
        builders::rectangle(center, 2.0, 2.0).unwrap()
    }

    #[test]
    fn test_body_new() {
        let body = Body::new(square(Vec2::new(3.0, 4.0)), 2.0).unwrap();
        assert_eq!(body.mass(), 2.0);
        assert!((body.inverse_mass() - 0.5).abs() < EPSILON);
        assert!((body.centroid().x - 3.0).abs() < EPSILON);
        assert!((body.centroid().y - 4.0).abs() < EPSILON);
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert_eq!(body.force(), Vec2::ZERO);
        assert_eq!(body.impulse(), Vec2::ZERO);
        assert_eq!(body.rotation(), 0.0);
        assert_eq!(body.tag(), None);
        assert!(!body.is_removed());
        assert!(!body.is_static());
    }

    #[test]
    fn test_body_rejects_bad_mass() {
        assert_eq!(
            Body::new(square(Vec2::ZERO), -1.0),
            Err(PhysicsError::InvalidMass { mass: -1.0 })
        );
        assert!(Body::new(square(Vec2::ZERO), f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_and_zero_mass() {
        let wall = Body::new(square(Vec2::ZERO), f64::INFINITY).unwrap();
        assert!(wall.is_static());
        assert_eq!(wall.inverse_mass(), 0.0);

        let kinematic = Body::new(square(Vec2::ZERO), 0.0).unwrap();
        assert!(!kinematic.is_static());
        assert_eq!(kinematic.inverse_mass(), 0.0);
    }

    #[test]
    fn test_with_tag_and_color() {
        let bullet = Body::with_tag(square(Vec2::ZERO), 1.0, ProjectileKind::Shotgun)
            .unwrap()
            .with_color(Color::WHITE);
        assert_eq!(bullet.tag(), Some(BodyTag::Projectile(ProjectileKind::Shotgun)));
        assert_eq!(bullet.color(), Color::WHITE);

        let floor = Body::with_tag(square(Vec2::ZERO), f64::INFINITY, EntityRole::Floor).unwrap();
        assert_eq!(floor.tag().and_then(BodyTag::role), Some(EntityRole::Floor));
    }

    #[test]
    fn test_set_centroid_moves_shape() {
        let mut body = Body::new(square(Vec2::ZERO), 1.0).unwrap();
        body.set_centroid(Vec2::new(10.0, -2.0));
        assert!((body.centroid().x - 10.0).abs() < EPSILON);
        assert!((body.centroid().y - -2.0).abs() < EPSILON);
        // First rectangle vertex is the (+,+) corner.
        assert!((body.vertices()[0].x - 11.0).abs() < EPSILON);
        assert!((body.vertices()[0].y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_rotation_is_absolute() {
        let mut body = Body::new(square(Vec2::new(5.0, 5.0)), 1.0).unwrap();
        let original = body.vertices().to_vec();

        body.set_rotation(PI / 2.0);
        // (+1,+1) corner swings to (-1,+1) relative to the centroid.
        assert!((body.vertices()[0].x - 4.0).abs() < EPSILON);
        assert!((body.vertices()[0].y - 6.0).abs() < EPSILON);

        body.set_rotation(0.0);
        for (v, o) in body.vertices().iter().zip(&original) {
            assert!((v.x - o.x).abs() < EPSILON);
            assert!((v.y - o.y).abs() < EPSILON);
        }
        assert_eq!(body.rotation(), 0.0);
    }

    #[test]
    fn test_set_rotation_twice_keeps_vertices() {
        let mut body = Body::new(square(Vec2::new(-3.0, 8.0)), 1.0).unwrap();
        body.set_rotation(0.7);
        let once = body.vertices().to_vec();
        body.set_rotation(0.7);
        for (v, o) in body.vertices().iter().zip(&once) {
            assert!((v.x - o.x).abs() < EPSILON);
            assert!((v.y - o.y).abs() < EPSILON);
        }
    }

    #[test]
    fn test_accumulators_add_up() {
        let mut body = Body::new(square(Vec2::ZERO), 1.0).unwrap();
        body.add_force(Vec2::new(1.0, 0.0));
        body.add_force(Vec2::new(0.0, 2.0));
        body.add_impulse(Vec2::new(-1.0, 1.0));
        body.add_impulse(Vec2::new(-1.0, 1.0));
        assert_eq!(body.force(), Vec2::new(1.0, 2.0));
        assert_eq!(body.impulse(), Vec2::new(-2.0, 2.0));

        body.clear_accumulators();
        assert_eq!(body.force(), Vec2::ZERO);
        assert_eq!(body.impulse(), Vec2::ZERO);
    }

    #[test]
    fn test_damage_is_drained_by_owner() {
        let mut body = Body::new(square(Vec2::ZERO), 1.0).unwrap();
        body.add_damage(15.0);
        body.add_damage(50.0);
        assert_eq!(body.damage_collisions(), 65.0);
        body.tick(0.1);
        assert_eq!(body.damage_collisions(), 65.0);
        body.add_damage(-body.damage_collisions());
        assert_eq!(body.damage_collisions(), 0.0);
    }

    #[test]
    fn test_remove_is_sticky() {
        let mut body = Body::new(square(Vec2::ZERO), 1.0).unwrap();
        body.remove();
        body.remove();
        assert!(body.is_removed());
    }
}
