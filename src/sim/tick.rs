//! Per-frame simulation tick
//!
//! One tick per display refresh: physics, then interaction resolution.
//! Terminal phases freeze the world; the renderer keeps painting it.

use crate::consts::WORLD_W;
use crate::input::Intent;

use super::interact;
use super::physics;
use super::state::{GamePhase, World};

/// Advance the world by one tick
pub fn tick(world: &mut World, intent: &Intent) {
    if world.phase != GamePhase::Playing {
        return;
    }

    physics::step_player(&mut world.player, &world.platforms, intent, WORLD_W);
    physics::step_hazards(&mut world.hazards);
    interact::resolve(world);
}
