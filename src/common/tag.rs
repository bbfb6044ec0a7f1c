//! Classification values attached to bodies by gameplay code.
//!
//! A body is either a game entity with a role, or a projectile whose kind
//! fixes how much damage it deals. The two spaces never overlap.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a non-projectile body represents in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityRole {
    Enemy,
    Character,
    Obstacle,
    Floor,
    Background,
    Shield,
}

/// Bullet families fired by the game's weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProjectileKind {
    Pistol,
    Shotgun,
    AssaultRifle,
    Sniper,
}

impl ProjectileKind {
    /// Damage added to whatever this projectile hits.
    pub fn damage(self) -> f64 {
        match self {
            ProjectileKind::Pistol => 15.0,
            ProjectileKind::Shotgun => 20.0,
            ProjectileKind::AssaultRifle => 25.0,
            ProjectileKind::Sniper => 50.0,
        }
    }
}

/// The tag carried by a body, fixed when the body is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyTag {
    Entity(EntityRole),
    Projectile(ProjectileKind),
}

impl BodyTag {
    pub fn role(self) -> Option<EntityRole> {
        match self {
            BodyTag::Entity(role) => Some(role),
            BodyTag::Projectile(_) => None,
        }
    }

    pub fn projectile(self) -> Option<ProjectileKind> {
        match self {
            BodyTag::Projectile(kind) => Some(kind),
            BodyTag::Entity(_) => None,
        }
    }
}

impl From<EntityRole> for BodyTag {
    fn from(role: EntityRole) -> Self {
        BodyTag::Entity(role)
    }
}

impl From<ProjectileKind> for BodyTag {
    fn from(kind: ProjectileKind) -> Self {
        BodyTag::Projectile(kind)
    }
}
