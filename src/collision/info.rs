use crate::math::vec2::Vec2;

/// Result of a pairwise overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionInfo {
    /// Whether the two shapes overlap (touching counts).
    pub collided: bool,
    /// Minimum translation vector, pointing from the first shape toward the
    /// second. Its length is the penetration depth. Meaningless when
    /// `collided` is false.
    pub axis: Vec2,
}

impl CollisionInfo {
    pub(crate) fn separated() -> Self {
        CollisionInfo { collided: false, axis: Vec2::ZERO }
    }

    /// Penetration depth along [`CollisionInfo::axis`].
    pub fn depth(&self) -> f64 {
        self.axis.magnitude()
    }

    /// Unit direction of the MTV, or zero for a zero-depth contact.
    pub fn normal(&self) -> Vec2 {
        self.axis.normalize()
    }
}
