//! Player and hazard kinematics
//!
//! Axis-separated collision resolution: horizontal displacement and
//! resolution first, then an independent vertical pass, each testing every
//! platform. Resolving one axis at a time keeps tunneling on one axis from
//! being masked by a correction on the other.

use crate::consts::*;
use crate::input::Intent;

use super::collision::penetration;
use super::state::{Hazard, Platform, Player};

/// Advance the player one tick: intent, jump, gravity, axis-separated
/// platform resolution, world bounds clamp.
pub fn step_player(player: &mut Player, platforms: &[Platform], intent: &Intent, world_w: f32) {
    // Horizontal intent. Friction only applies when no direction is held;
    // it decays exponentially and never hard-zeroes.
    if intent.move_left {
        player.vel.x -= RUN_ACCEL;
    }
    if intent.move_right {
        player.vel.x += RUN_ACCEL;
    }
    if !intent.move_left && !intent.move_right {
        player.vel.x *= FRICTION;
    }
    player.vel.x = player.vel.x.clamp(-MAX_RUN_SPEED, MAX_RUN_SPEED);

    // Jump only triggers from the ground; holding the key re-jumps on the
    // next landing.
    if intent.jump && player.on_ground {
        player.vel.y = -JUMP_IMPULSE;
        player.on_ground = false;
    }

    // Gravity, clamped to terminal fall speed
    player.vel.y = (player.vel.y + GRAVITY).min(MAX_FALL_SPEED);

    // Horizontal pass: displace, then push out of any platform whose
    // horizontal penetration is strictly the smaller of the pair.
    player.pos.x += player.vel.x;
    for platform in platforms {
        if let Some(pen) = penetration(&player.aabb(), &platform.aabb()) {
            if pen.depth.x < pen.depth.y {
                player.pos.x += pen.depth.x.copysign(pen.delta.x);
                player.vel.x = 0.0;
            }
        }
    }

    // Vertical pass: independent displacement and resolution. Grounding is
    // re-derived from scratch every tick.
    player.pos.y += player.vel.y;
    player.on_ground = false;
    for platform in platforms {
        if let Some(pen) = penetration(&player.aabb(), &platform.aabb()) {
            if pen.depth.y <= pen.depth.x {
                player.pos.y += pen.depth.y.copysign(pen.delta.y);
                player.vel.y = 0.0;
                // Pushed upward means the player landed on top
                if pen.delta.y < 0.0 {
                    player.on_ground = true;
                }
            }
        }
    }

    // World bounds apply horizontally only; there is no vertical clamp
    player.pos.x = player.pos.x.clamp(0.0, world_w - player.size.x);
}

/// Advance every hazard along its patrol. Velocity sign flips exactly when
/// a bound is reached; positions never leave [patrol_left, patrol_right].
pub fn step_hazards(hazards: &mut [Hazard]) {
    for hazard in hazards {
        hazard.pos.x += hazard.vel_x;
        if hazard.pos.x <= hazard.patrol_left {
            hazard.pos.x = hazard.patrol_left;
            hazard.vel_x = hazard.vel_x.abs();
        } else if hazard.pos.x >= hazard.patrol_right {
            hazard.pos.x = hazard.patrol_right;
            hazard.vel_x = -hazard.vel_x.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, vec2};

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(vec2(x, y), vec2(12.0, 16.0))
    }

    fn floor() -> Platform {
        Platform::new(0.0, 100.0, 320.0, 12.0)
    }

    #[test]
    fn test_landing_zeroes_vertical_velocity() {
        // Falling player whose next displacement crosses the floor top
        let mut player = player_at(50.0, 82.0);
        player.vel.y = 5.0;

        step_player(&mut player, &[floor()], &Intent::default(), WORLD_W);

        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
        // Resolved flush with the platform top, not overlapping
        assert!((player.pos.y + player.size.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_side_contact_resolves_horizontally() {
        // Wall taller than wide relative to the approach
        let wall = Platform::new(100.0, 60.0, 20.0, 60.0);
        let mut player = player_at(86.0, 80.0);
        player.vel.x = 3.0;
        player.vel.y = 0.0;
        player.on_ground = true;

        step_player(&mut player, &[wall], &Intent::default(), WORLD_W);

        assert_eq!(player.vel.x, 0.0);
        // Pushed back out to the wall's left face
        assert!((player.pos.x + player.size.x - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut player = player_at(50.0, 80.0);
        player.on_ground = false;
        let jump = Intent {
            jump: true,
            ..Default::default()
        };

        step_player(&mut player, &[], &jump, WORLD_W);
        // No impulse applied; only gravity accumulated
        assert!(player.vel.y > 0.0);

        let mut grounded = player_at(50.0, 84.0);
        grounded.on_ground = true;
        step_player(&mut grounded, &[], &jump, WORLD_W);
        assert!(grounded.vel.y < 0.0);
    }

    #[test]
    fn test_friction_decays_without_zeroing() {
        let mut player = player_at(50.0, 84.0);
        player.vel.x = 2.0;

        step_player(&mut player, &[], &Intent::default(), WORLD_W);
        assert!((player.vel.x - 2.0 * FRICTION).abs() < 1e-6);

        for _ in 0..200 {
            step_player(&mut player, &[], &Intent::default(), WORLD_W);
        }
        assert!(player.vel.x > 0.0, "friction never hard-zeroes");
    }

    #[test]
    fn test_fall_speed_clamped() {
        let mut player = player_at(50.0, 0.0);
        for _ in 0..100 {
            step_player(&mut player, &[], &Intent::default(), WORLD_W);
        }
        assert!(player.vel.y <= MAX_FALL_SPEED);
    }

    #[test]
    fn test_bounds_clamp_both_edges() {
        let mut player = player_at(1.0, 84.0);
        player.vel.x = -MAX_RUN_SPEED;
        step_player(&mut player, &[], &Intent::default(), WORLD_W);
        assert_eq!(player.pos.x, 0.0);

        let mut player = player_at(WORLD_W - 13.0, 84.0);
        player.vel.x = MAX_RUN_SPEED;
        let hold = Intent {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            step_player(&mut player, &[], &hold, WORLD_W);
        }
        assert_eq!(player.pos.x, WORLD_W - player.size.x);
    }

    #[test]
    fn test_hazard_reverses_at_bounds() {
        let mut hazards = vec![Hazard {
            pos: Vec2::new(58.5, 50.0),
            size: Vec2::new(12.0, 10.0),
            vel_x: 1.0,
            patrol_left: 40.0,
            patrol_right: 60.0,
        }];

        // Second tick crosses the right bound: clamped exactly, sign flipped
        step_hazards(&mut hazards);
        assert_eq!(hazards[0].pos.x, 59.5);
        step_hazards(&mut hazards);
        assert_eq!(hazards[0].pos.x, 60.0);
        assert!(hazards[0].vel_x < 0.0);
        step_hazards(&mut hazards);
        assert_eq!(hazards[0].pos.x, 59.0);
    }
}
