pub mod body_set;
pub mod scene;

use slotmap::new_key_type;

new_key_type! {
    /// Generation-checked handle to a body owned by a [`Scene`].
    pub struct BodyId;
    /// Handle to a force creator registered on a [`Scene`].
    pub struct ForceId;
}

pub use body_set::BodySet;
pub use scene::Scene;
