//! Pickup, hazard, and phase-transition rules
//!
//! Runs after physics each tick. Hazards are evaluated independently in
//! iteration order against the current player state: a stomp on one hazard
//! does not shield the player from a different overlapping hazard in the
//! same tick, and after a damage respawn later hazards are judged against
//! the respawned rectangle.

use crate::consts::*;

use super::state::{GamePhase, World};

/// Apply all interaction rules for one tick
pub fn resolve(world: &mut World) {
    collect_pickups(world);
    resolve_hazards(world);

    // Win fires the same tick the last pickup is collected, unless a
    // hazard ended the run first
    if world.phase == GamePhase::Playing && world.pickups.is_empty() {
        world.phase = GamePhase::Won;
    }
}

/// Collect every pickup overlapping the player. Pickups are tested as
/// their circumscribing square; removal is mark-and-compact, so each
/// pickup scores at most once.
fn collect_pickups(world: &mut World) {
    let player_box = world.player.aabb();
    let mut collected = 0u32;

    world.pickups.retain(|pickup| {
        if player_box.overlaps(&pickup.bounding_box()) {
            collected += 1;
            false
        } else {
            true
        }
    });

    world.score += collected * PICKUP_SCORE;
}

/// Classify every overlapping hazard as a landing (stomp) or damage.
/// Removal is swap-remove under a stable cursor, so the list is never
/// iterated while being restructured.
fn resolve_hazards(world: &mut World) {
    let mut i = 0;
    while i < world.hazards.len() {
        let hazard = world.hazards[i];
        let player_box = world.player.aabb();

        if !player_box.overlaps(&hazard.aabb()) {
            i += 1;
            continue;
        }

        let falling = world.player.vel.y > 0.0;
        let shallow = player_box.bottom() - hazard.top() < STOMP_TOLERANCE;

        if falling && shallow {
            // Landing: defeat the hazard, bounce, bonus score. The cursor
            // stays put so the swapped-in tail hazard is still evaluated.
            world.hazards.swap_remove(i);
            world.player.vel.y = -STOMP_BOUNCE;
            world.score += STOMP_SCORE;
        } else {
            // Damage: back to the start, one life down
            world.player.respawn(world.spawn);
            world.player.lives = world.player.lives.saturating_sub(1);
            if world.player.lives == 0 {
                world.phase = GamePhase::Lost;
                return;
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Hazard, Pickup, Player};
    use glam::{Vec2, vec2};

    fn bare_world() -> World {
        World {
            player: Player::new(vec2(16.0, 148.0), vec2(12.0, 16.0)),
            spawn: vec2(16.0, 148.0),
            platforms: Vec::new(),
            pickups: Vec::new(),
            hazards: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
        }
    }

    fn hazard_at(x: f32, y: f32) -> Hazard {
        Hazard {
            pos: Vec2::new(x, y),
            size: Vec2::new(12.0, 10.0),
            vel_x: 0.7,
            patrol_left: x - 20.0,
            patrol_right: x + 20.0,
        }
    }

    #[test]
    fn test_pickup_collection_scores_once() {
        let mut world = bare_world();
        world.pickups.push(Pickup::new(20.0, 156.0, 3.0));
        world.pickups.push(Pickup::new(200.0, 50.0, 3.0));

        resolve(&mut world);
        assert_eq!(world.score, 1);
        assert_eq!(world.pickups.len(), 1);

        // The remaining pickup is out of reach; nothing more happens
        resolve(&mut world);
        assert_eq!(world.score, 1);
    }

    #[test]
    fn test_win_on_last_pickup_same_tick() {
        let mut world = bare_world();
        world.pickups.push(Pickup::new(20.0, 156.0, 3.0));

        resolve(&mut world);
        assert_eq!(world.score, 1);
        assert!(world.pickups.is_empty());
        assert_eq!(world.phase, GamePhase::Won);
    }

    #[test]
    fn test_stomp_defeats_hazard() {
        let mut world = bare_world();
        // Player bottom at 164, hazard top at 163: 1 unit of overlap
        world.player.pos = vec2(20.0, 148.0);
        world.player.vel.y = 5.0;
        world.hazards.push(hazard_at(20.0, 163.0));

        resolve(&mut world);
        assert!(world.hazards.is_empty());
        assert_eq!(world.player.vel.y, -STOMP_BOUNCE);
        assert_eq!(world.score, STOMP_SCORE);
        assert_eq!(world.player.lives, START_LIVES);
    }

    #[test]
    fn test_side_contact_damages() {
        let mut world = bare_world();
        world.player.pos = vec2(100.0, 150.0);
        world.player.vel = vec2(2.0, 0.0);
        world.hazards.push(hazard_at(108.0, 152.0));

        resolve(&mut world);
        assert_eq!(world.hazards.len(), 1);
        assert_eq!(world.player.lives, START_LIVES - 1);
        assert_eq!(world.player.pos, world.spawn);
        assert_eq!(world.player.vel, Vec2::ZERO);
        assert!(!world.player.on_ground);
    }

    #[test]
    fn test_deep_overlap_while_falling_is_damage() {
        let mut world = bare_world();
        // Falling, but the bottom edge is far past the hazard top
        world.player.pos = vec2(100.0, 150.0);
        world.player.vel.y = 1.0;
        world.hazards.push(hazard_at(100.0, 152.0));

        resolve(&mut world);
        assert_eq!(world.player.lives, START_LIVES - 1);
        assert_eq!(world.hazards.len(), 1);
    }

    #[test]
    fn test_last_life_transitions_to_lost() {
        let mut world = bare_world();
        world.player.lives = 1;
        world.player.pos = vec2(100.0, 150.0);
        world.hazards.push(hazard_at(104.0, 152.0));

        resolve(&mut world);
        assert_eq!(world.player.lives, 0);
        assert_eq!(world.phase, GamePhase::Lost);
    }

    #[test]
    fn test_hazards_evaluated_independently() {
        let mut world = bare_world();
        // Two hazards overlap the player at once; the stomp on the first
        // does not shield against the second, which is judged against the
        // post-bounce player still in place
        world.player.pos = vec2(100.0, 150.0);
        world.player.vel.y = 4.0;
        world.hazards.push(hazard_at(98.0, 165.0));
        world.hazards.push(hazard_at(106.0, 152.0));

        resolve(&mut world);
        // First hazard stomped; second is deep overlap after the bounce
        // reversed vy, so it damages
        assert_eq!(world.hazards.len(), 1);
        assert_eq!(world.score, STOMP_SCORE);
        assert_eq!(world.player.lives, START_LIVES - 1);
        assert_eq!(world.player.pos, world.spawn);
    }

    #[test]
    fn test_lost_stops_win_check() {
        let mut world = bare_world();
        world.player.lives = 1;
        world.player.pos = vec2(100.0, 150.0);
        world.pickups.push(Pickup::new(104.0, 158.0, 3.0));
        world.hazards.push(hazard_at(104.0, 152.0));

        resolve(&mut world);
        // Final pickup collected and final life lost the same tick: the
        // loss wins, the phase is not overwritten to Won
        assert!(world.pickups.is_empty());
        assert_eq!(world.phase, GamePhase::Lost);
    }
}
