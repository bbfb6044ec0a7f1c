use slotmap::SlotMap;

use super::BodyId;
use crate::objects::body::Body;

/// The bodies owned by a scene, iterated in insertion order.
///
/// Force creators receive a `&mut BodySet` each tick and address bodies by
/// [`BodyId`]. Handles of reaped bodies simply stop resolving.
#[derive(Debug, Default)]
pub struct BodySet {
    bodies: SlotMap<BodyId, Body>,
    order: Vec<BodyId>,
}

impl BodySet {
    pub fn with_capacity(capacity: usize) -> Self {
        BodySet {
            bodies: SlotMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, body: Body) -> BodyId {
        let id = self.bodies.insert(body);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    /// Mutable access to two distinct bodies at once.
    ///
    /// Returns `None` if either handle is stale or both are the same body.
    pub fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        self.bodies
            .get_disjoint_mut([a, b])
            .map(|[body_a, body_b]| (body_a, body_b))
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(id)
    }

    /// True when the body is flagged removed or already gone.
    pub fn is_removed(&self, id: BodyId) -> bool {
        self.bodies.get(id).map_or(true, Body::is_removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle of the `index`-th live body in insertion order.
    pub fn id_at(&self, index: usize) -> Option<BodyId> {
        self.order.get(index).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.order.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.order.iter().map(move |&id| (id, &self.bodies[id]))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        // Slot order, not insertion order.
        self.bodies.values_mut()
    }

    /// Handles of every body currently flagged removed, in insertion order.
    pub(crate) fn removed_ids(&self) -> Vec<BodyId> {
        self.iter()
            .filter(|(_, body)| body.is_removed())
            .map(|(id, _)| id)
            .collect()
    }

    /// Drops every flagged body and returns how many were reaped.
    pub(crate) fn reap(&mut self) -> usize {
        let bodies = &mut self.bodies;
        let before = self.order.len();
        self.order.retain(|&id| {
            let dead = bodies.get(id).map_or(true, Body::is_removed);
            if dead {
                bodies.remove(id);
            }
            !dead
        });
        before - self.order.len()
    }
}
