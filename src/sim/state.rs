//! Game state and core simulation types

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;
use crate::level::Level;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every pickup collected; terminal, simulation frozen
    Won,
    /// Out of lives; terminal, simulation frozen
    Lost,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner position
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Set when the last vertical resolution pushed the player up onto a
    /// platform; cleared at the start of every vertical pass
    pub on_ground: bool,
    /// Remaining lives
    pub lives: u32,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            size,
            vel: Vec2::ZERO,
            on_ground: false,
            lives: START_LIVES,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Reposition at the spawn point after taking damage. The player is
    /// repositioned, never recreated, so lives survive.
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// A static platform rectangle, immutable after load
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A circular collectible; removed permanently on collection
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    /// Circle center
    pub pos: Vec2,
    pub radius: f32,
}

impl Pickup {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
        }
    }

    /// Circumscribing square, used for overlap testing against the player
    pub fn bounding_box(&self) -> Aabb {
        let r = Vec2::splat(self.radius);
        Aabb::new(self.pos - r, r * 2.0)
    }
}

/// A patrolling hazard; reverses direction at its patrol bounds, removed
/// permanently when stomped
#[derive(Debug, Clone, Copy)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity, units/tick
    pub vel_x: f32,
    /// Patrol bounds on `pos.x`, inclusive
    pub patrol_left: f32,
    pub patrol_right: f32,
}

impl Hazard {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// Complete game state. Single instance owned by the tick pipeline;
/// everything mutable in the simulation lives here.
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    /// Player start position, also the damage respawn point
    pub spawn: Vec2,
    /// Static geometry, immutable after construction
    pub platforms: Vec<Platform>,
    /// Active pickups; shrinks as they are collected
    pub pickups: Vec<Pickup>,
    /// Active hazards; shrinks as they are stomped
    pub hazards: Vec<Hazard>,
    pub score: u32,
    pub phase: GamePhase,
}

impl World {
    /// Build the world from an already-scaled level
    pub fn new(level: Level) -> Self {
        debug_assert!(level.width > 0.0 && level.height > 0.0);
        debug_assert!(
            level
                .platforms
                .iter()
                .all(|p| p.size.x > 0.0 && p.size.y > 0.0),
            "degenerate platform in level data"
        );

        Self {
            player: Player::new(level.spawn, level.player_size),
            spawn: level.spawn,
            platforms: level.platforms,
            pickups: level.pickups,
            hazards: level.hazards,
            score: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Remaining lives (lives are carried on the player entity)
    #[inline]
    pub fn lives(&self) -> u32 {
        self.player.lives
    }
}
