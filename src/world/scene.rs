use log::{debug, trace, warn};
use slotmap::{SecondaryMap, SlotMap};

use super::body_set::BodySet;
use super::{BodyId, ForceId};
use crate::common::{BodyTag, EntityRole, SceneConfig};
use crate::error::{PhysicsError, Result};
use crate::forces::ForceCreator;
use crate::objects::body::Body;

struct ForceEntry {
    creator: Box<dyn ForceCreator>,
    participants: Vec<BodyId>,
}

/// Owns every body and force creator of a simulation and advances them.
///
/// Each [`Scene::tick`] runs four phases:
/// 1. every force creator is evaluated once, in registration order;
/// 2. creators bound to a body flagged removed are dropped;
/// 3. bodies flagged removed are dropped;
/// 4. the remaining bodies are integrated by `dt`.
pub struct Scene {
    config: SceneConfig,
    bodies: BodySet,
    forces: SlotMap<ForceId, ForceEntry>,
    force_order: Vec<ForceId>,
    // Creators that must go when the keyed body goes.
    dependents: SecondaryMap<BodyId, Vec<ForceId>>,
}

impl Scene {
    /// Creates an empty scene with [`SceneConfig::default`].
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            config,
            bodies: BodySet::with_capacity(config.initial_capacity),
            forces: SlotMap::with_capacity_and_key(config.initial_capacity),
            force_order: Vec::with_capacity(config.initial_capacity),
            dependents: SecondaryMap::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Takes ownership of `body` and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = self.bodies.insert(body);
        self.dependents.insert(id, Vec::new());
        id
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains(id)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    /// The `index`-th body in insertion order.
    pub fn body_at(&self, index: usize) -> Option<&Body> {
        self.bodies.id_at(index).and_then(|id| self.bodies.get(id))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body_set(&self) -> &BodySet {
        &self.bodies
    }

    /// Live bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().map(|(_, body)| body)
    }

    pub fn body_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.ids()
    }

    /// Bodies whose tag equals `tag`, in insertion order.
    pub fn bodies_with_tag(&self, tag: BodyTag) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies
            .iter()
            .filter(move |(_, body)| body.tag() == Some(tag))
    }

    pub fn bodies_with_role(&self, role: EntityRole) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies_with_tag(BodyTag::Entity(role))
    }

    /// Every projectile, whatever its kind.
    pub fn bodies_with_projectile(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies
            .iter()
            .filter(|(_, body)| matches!(body.tag(), Some(BodyTag::Projectile(_))))
    }

    /// Flags a body for removal. It is dropped at the next tick boundary.
    pub fn remove_body(&mut self, id: BodyId) -> Result<()> {
        let body = self.bodies.get_mut(id).ok_or(PhysicsError::UnknownBody(id))?;
        body.remove();
        Ok(())
    }

    /// Flags every body matching `predicate` for removal and returns how many
    /// were newly flagged.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Body) -> bool,
    {
        let ids: Vec<BodyId> = self
            .bodies
            .iter()
            .filter(|&(_, body)| !body.is_removed() && predicate(body))
            .map(|(id, _)| id)
            .collect();
        for &id in &ids {
            if let Some(body) = self.bodies.get_mut(id) {
                body.remove();
            }
        }
        ids.len()
    }

    /// Registers a creator bound to no body. It lives as long as the scene.
    pub fn add_force_creator<C>(&mut self, creator: C) -> ForceId
    where
        C: ForceCreator + 'static,
    {
        self.insert_force(Box::new(creator), Vec::new())
    }

    /// Registers a creator that is dropped as soon as any of `bodies` is removed.
    pub fn add_bodies_force_creator<C>(&mut self, creator: C, bodies: &[BodyId]) -> Result<ForceId>
    where
        C: ForceCreator + 'static,
    {
        if let Some(&unknown) = bodies.iter().find(|&&id| !self.bodies.contains(id)) {
            return Err(PhysicsError::UnknownBody(unknown));
        }
        Ok(self.insert_force(Box::new(creator), bodies.to_vec()))
    }

    fn insert_force(&mut self, creator: Box<dyn ForceCreator>, participants: Vec<BodyId>) -> ForceId {
        let id = self.forces.insert(ForceEntry { creator, participants });
        self.force_order.push(id);
        for &body in &self.forces[id].participants {
            if let Some(list) = self.dependents.get_mut(body) {
                list.push(id);
            }
        }
        debug!("registered force creator {:?} on {} bodies", id, self.forces[id].participants.len());
        id
    }

    /// Unregisters a creator. Returns `false` if it was already gone.
    pub fn remove_force_creator(&mut self, id: ForceId) -> bool {
        let removed = self.drop_force(id);
        if removed {
            self.force_order.retain(|&f| f != id);
        }
        removed
    }

    pub fn force_count(&self) -> usize {
        self.force_order.len()
    }

    fn drop_force(&mut self, id: ForceId) -> bool {
        let Some(entry) = self.forces.remove(id) else {
            return false;
        };
        for body in entry.participants {
            if let Some(list) = self.dependents.get_mut(body) {
                list.retain(|&f| f != id);
            }
        }
        true
    }

    /// Advances the scene by `dt` seconds.
    ///
    /// A negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("invalid time step {}, using 0", dt);
            0.0
        };

        self.evaluate_forces();
        self.reap();

        for body in self.bodies.values_mut() {
            body.tick(dt);
        }
    }

    fn evaluate_forces(&mut self) {
        for &id in &self.force_order {
            let Some(entry) = self.forces.get_mut(id) else {
                continue;
            };
            // A participant may have been removed earlier in this pass.
            if entry.participants.iter().any(|&body| self.bodies.is_removed(body)) {
                trace!("skipping force creator {:?} bound to a removed body", id);
                continue;
            }
            entry.creator.apply(&mut self.bodies);
        }
    }

    fn reap(&mut self) {
        let removed = self.bodies.removed_ids();
        if removed.is_empty() {
            return;
        }

        let mut dropped = 0;
        for &body in &removed {
            if let Some(dependents) = self.dependents.remove(body) {
                for force in dependents {
                    if self.drop_force(force) {
                        dropped += 1;
                    }
                }
            }
        }
        if dropped > 0 {
            let forces = &self.forces;
            self.force_order.retain(|&f| forces.contains_key(f));
        }

        let reaped = self.bodies.reap();
        debug!("reaped {} bodies and {} force creators", reaped, dropped);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ProjectileKind;
    use crate::math::vec2::Vec2;
    use crate::shapes::builders;
    use std::cell::Cell;
    use std::rc::Rc;

    const EPSILON: f64 = 1e-9;

    fn square_body(center: Vec2, mass: f64) -> Body {
        Body::new(builders::rectangle(center, 1.0, 1.0).unwrap(), mass).unwrap()
    }

    fn counting_creator(counter: Rc<Cell<u32>>) -> impl FnMut(&mut BodySet) {
        move |_: &mut BodySet| counter.set(counter.get() + 1)
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new();
        assert_eq!(scene.body_count(), 0);
        assert_eq!(scene.force_count(), 0);
        assert_eq!(scene.config().initial_capacity, 10);
    }

    #[test]
    fn test_add_and_enumerate_bodies() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::new(0.0, 0.0), 1.0));
        let b = scene.add_body(square_body(Vec2::new(5.0, 0.0), 1.0));

        assert_eq!(scene.body_count(), 2);
        assert_eq!(scene.body_ids().collect::<Vec<_>>(), vec![a, b]);
        let second = scene.body_at(1).unwrap();
        assert!((second.centroid().x - 5.0).abs() < EPSILON);
        assert!(scene.body_at(2).is_none());
    }

    #[test]
    fn test_tick_integrates_bodies() {
        let mut scene = Scene::new();
        let id = scene.add_body(square_body(Vec2::ZERO, 1.0));
        scene.body_mut(id).unwrap().set_velocity(Vec2::new(2.0, 0.0));

        scene.tick(0.5);

        assert!((scene.body(id).unwrap().centroid().x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_dt_is_clamped() {
        let mut scene = Scene::new();
        let id = scene.add_body(square_body(Vec2::ZERO, 1.0));
        scene.body_mut(id).unwrap().set_velocity(Vec2::new(2.0, 0.0));

        scene.tick(-1.0);
        scene.tick(f64::NAN);

        assert!(scene.body(id).unwrap().centroid().magnitude() < EPSILON);
    }

    #[test]
    fn test_creators_run_in_registration_order() {
        let mut scene = Scene::new();
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = Rc::clone(&log);
            scene.add_force_creator(move |_: &mut BodySet| log.borrow_mut().push(i));
        }
        scene.tick(0.1);
        scene.tick(0.1);
        assert_eq!(*log.borrow(), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_removed_body_is_reaped_with_its_creators() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::ZERO, 1.0));
        let b = scene.add_body(square_body(Vec2::new(3.0, 0.0), 1.0));
        let runs = Rc::new(Cell::new(0));
        let unbound = Rc::new(Cell::new(0));

        scene
            .add_bodies_force_creator(counting_creator(Rc::clone(&runs)), &[a, b])
            .unwrap();
        scene.add_force_creator(counting_creator(Rc::clone(&unbound)));
        assert_eq!(scene.force_count(), 2);

        scene.tick(0.1);
        assert_eq!(runs.get(), 1);

        scene.remove_body(b).unwrap();
        scene.tick(0.1);

        assert_eq!(runs.get(), 1, "creator must not run once a participant is removed");
        assert_eq!(unbound.get(), 2);
        assert_eq!(scene.force_count(), 1);
        assert_eq!(scene.body_count(), 1);
        assert!(scene.body(b).is_none());
        assert!(scene.body(a).is_some());
    }

    #[test]
    fn test_creator_skipped_after_participant_removed_mid_tick() {
        let mut scene = Scene::new();
        let target = scene.add_body(square_body(Vec2::ZERO, 1.0));
        let runs = Rc::new(Cell::new(0));

        scene.add_force_creator(move |set: &mut BodySet| {
            if let Some(body) = set.get_mut(target) {
                body.remove();
            }
        });
        scene
            .add_bodies_force_creator(counting_creator(Rc::clone(&runs)), &[target])
            .unwrap();

        scene.tick(0.1);
        assert_eq!(runs.get(), 0);
        assert_eq!(scene.body_count(), 0);
        assert_eq!(scene.force_count(), 1);
    }

    #[test]
    fn test_reaping_unlinks_creator_from_other_participants() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::ZERO, 1.0));
        let b = scene.add_body(square_body(Vec2::new(3.0, 0.0), 1.0));
        let c = scene.add_body(square_body(Vec2::new(6.0, 0.0), 1.0));
        let shared = scene.add_bodies_force_creator(|_: &mut BodySet| {}, &[a, b]).unwrap();
        let other = scene.add_bodies_force_creator(|_: &mut BodySet| {}, &[a, c]).unwrap();

        scene.remove_body(b).unwrap();
        scene.tick(0.0);

        assert!(!scene.remove_force_creator(shared));
        assert_eq!(scene.dependents[a], vec![other]);

        scene.remove_body(a).unwrap();
        scene.tick(0.0);
        assert_eq!(scene.force_count(), 0);
        assert!(scene.dependents[c].is_empty());
    }

    #[test]
    fn test_add_bodies_force_creator_rejects_unknown_body() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::ZERO, 1.0));
        let gone = scene.add_body(square_body(Vec2::ZERO, 1.0));
        scene.remove_body(gone).unwrap();
        scene.tick(0.0);

        let result = scene.add_bodies_force_creator(|_: &mut BodySet| {}, &[a, gone]);
        assert_eq!(result, Err(PhysicsError::UnknownBody(gone)));
        assert_eq!(scene.remove_body(gone), Err(PhysicsError::UnknownBody(gone)));
    }

    #[test]
    fn test_remove_force_creator() {
        let mut scene = Scene::new();
        let runs = Rc::new(Cell::new(0));
        let id = scene.add_force_creator(counting_creator(Rc::clone(&runs)));

        assert!(scene.remove_force_creator(id));
        assert!(!scene.remove_force_creator(id));
        scene.tick(0.1);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_tag_filtering() {
        let mut scene = Scene::new();
        let enemy = Body::with_tag(builders::rectangle(Vec2::ZERO, 1.0, 1.0).unwrap(), 1.0, EntityRole::Enemy)
            .unwrap();
        let bullet = Body::with_tag(
            builders::rectangle(Vec2::ZERO, 0.2, 0.2).unwrap(),
            0.1,
            ProjectileKind::Pistol,
        )
        .unwrap();
        let enemy_id = scene.add_body(enemy.clone());
        scene.add_body(square_body(Vec2::ZERO, 1.0));
        let bullet_id = scene.add_body(bullet);
        let second_enemy = scene.add_body(enemy);

        let enemies: Vec<BodyId> = scene.bodies_with_role(EntityRole::Enemy).map(|(id, _)| id).collect();
        assert_eq!(enemies, vec![enemy_id, second_enemy]);

        let bullets: Vec<BodyId> = scene.bodies_with_projectile().map(|(id, _)| id).collect();
        assert_eq!(bullets, vec![bullet_id]);

        assert_eq!(scene.bodies_with_tag(BodyTag::Projectile(ProjectileKind::Sniper)).count(), 0);
    }

    #[test]
    fn test_remove_where() {
        let mut scene = Scene::new();
        let slow = scene.add_body(square_body(Vec2::ZERO, 1.0));
        let fast = scene.add_body(square_body(Vec2::new(5.0, 0.0), 1.0));
        scene.body_mut(slow).unwrap().set_velocity(Vec2::new(0.5, 0.0));
        scene.body_mut(fast).unwrap().set_velocity(Vec2::new(50.0, 0.0));

        let flagged = scene.remove_where(|body| body.velocity().magnitude() < 1.0);
        assert_eq!(flagged, 1);
        assert_eq!(scene.remove_where(|body| body.velocity().magnitude() < 1.0), 0);

        scene.tick(0.1);
        assert_eq!(scene.body_ids().collect::<Vec<_>>(), vec![fast]);
    }
}
