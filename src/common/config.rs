#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for a [`Scene`](crate::world::Scene).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Number of bodies and force creators reserved up front.
    pub initial_capacity: usize,
    /// Separation below which Newtonian gravity applies no force.
    pub gravity_min_distance: f64,
}

impl SceneConfig {
    pub const DEFAULT_CAPACITY: usize = 10;
    pub const DEFAULT_GRAVITY_MIN_DISTANCE: f64 = 5.0;
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            initial_capacity: Self::DEFAULT_CAPACITY,
            gravity_min_distance: Self::DEFAULT_GRAVITY_MIN_DISTANCE,
        }
    }
}
