//! Level data and the geometry scaler
//!
//! Levels are authored in display units (the 960x540 canvas) because those
//! numbers are easy to eyeball against the page. `Level::scaled` divides
//! every linear dimension by the pixel-scale factor once at startup,
//! producing the simulation-unit records the world is built from.

use glam::Vec2;

use crate::consts::{DISPLAY_H, DISPLAY_W, PIXEL_SCALE};
use crate::sim::{Hazard, Pickup, Platform};

/// Level geometry, in whatever unit it was authored or scaled to
#[derive(Debug, Clone)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    pub spawn: Vec2,
    pub player_size: Vec2,
    pub platforms: Vec<Platform>,
    pub pickups: Vec<Pickup>,
    pub hazards: Vec<Hazard>,
}

impl Level {
    /// Divide every linear dimension (positions, sizes, radii, velocities,
    /// patrol bounds) by `factor`. Pure; a factor of 1 is the identity.
    pub fn scaled(&self, factor: f32) -> Level {
        debug_assert!(factor > 0.0);

        Level {
            width: self.width / factor,
            height: self.height / factor,
            spawn: self.spawn / factor,
            player_size: self.player_size / factor,
            platforms: self
                .platforms
                .iter()
                .map(|p| Platform {
                    pos: p.pos / factor,
                    size: p.size / factor,
                })
                .collect(),
            pickups: self
                .pickups
                .iter()
                .map(|p| Pickup {
                    pos: p.pos / factor,
                    radius: p.radius / factor,
                })
                .collect(),
            hazards: self
                .hazards
                .iter()
                .map(|h| Hazard {
                    pos: h.pos / factor,
                    size: h.size / factor,
                    vel_x: h.vel_x / factor,
                    patrol_left: h.patrol_left / factor,
                    patrol_right: h.patrol_right / factor,
                })
                .collect(),
        }
    }
}

/// The single hardcoded level, in display units
pub fn level_one() -> Level {
    Level {
        width: DISPLAY_W as f32,
        height: DISPLAY_H as f32,
        spawn: Vec2::new(48.0, 444.0),
        player_size: Vec2::new(36.0, 48.0),
        platforms: vec![
            // Ground spans the full level width
            Platform::new(0.0, 504.0, 960.0, 36.0),
            Platform::new(90.0, 402.0, 180.0, 24.0),
            Platform::new(360.0, 330.0, 150.0, 24.0),
            Platform::new(630.0, 258.0, 150.0, 24.0),
            Platform::new(330.0, 168.0, 120.0, 24.0),
            Platform::new(750.0, 420.0, 150.0, 24.0),
        ],
        pickups: vec![
            Pickup::new(150.0, 378.0, 9.0),
            Pickup::new(420.0, 306.0, 9.0),
            Pickup::new(690.0, 234.0, 9.0),
            Pickup::new(384.0, 144.0, 9.0),
            Pickup::new(816.0, 396.0, 9.0),
            Pickup::new(570.0, 480.0, 9.0),
        ],
        hazards: vec![
            Hazard {
                pos: Vec2::new(180.0, 474.0),
                size: Vec2::new(36.0, 30.0),
                vel_x: 2.1,
                patrol_left: 120.0,
                patrol_right: 300.0,
            },
            Hazard {
                pos: Vec2::new(480.0, 474.0),
                size: Vec2::new(36.0, 30.0),
                vel_x: 2.4,
                patrol_left: 420.0,
                patrol_right: 720.0,
            },
            // Patrols the high platform guarding its pickup
            Hazard {
                pos: Vec2::new(639.0, 228.0),
                size: Vec2::new(36.0, 30.0),
                vel_x: 1.8,
                patrol_left: 630.0,
                patrol_right: 744.0,
            },
        ],
    }
}

/// `level_one` scaled into simulation units
pub fn level_one_scaled() -> Level {
    level_one().scaled(PIXEL_SCALE as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_one_is_identity() {
        let level = level_one();
        let same = level.scaled(1.0);

        assert_eq!(level.width, same.width);
        assert_eq!(level.height, same.height);
        assert_eq!(level.spawn, same.spawn);
        for (a, b) in level.platforms.iter().zip(&same.platforms) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.size, b.size);
        }
        for (a, b) in level.pickups.iter().zip(&same.pickups) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.radius, b.radius);
        }
        for (a, b) in level.hazards.iter().zip(&same.hazards) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel_x, b.vel_x);
            assert_eq!(a.patrol_left, b.patrol_left);
            assert_eq!(a.patrol_right, b.patrol_right);
        }
    }

    #[test]
    fn test_scaled_level_fits_sim_space() {
        use crate::consts::{WORLD_H, WORLD_W};

        let level = level_one_scaled();
        assert_eq!(level.width, WORLD_W);
        assert_eq!(level.height, WORLD_H);

        for p in &level.platforms {
            assert!(p.pos.x + p.size.x <= WORLD_W);
            assert!(p.pos.y + p.size.y <= WORLD_H);
        }
        for h in &level.hazards {
            assert!(h.patrol_left <= h.pos.x && h.pos.x <= h.patrol_right);
            assert!(h.patrol_right + h.size.x <= WORLD_W);
        }
    }

    #[test]
    fn test_scaling_divides_every_dimension() {
        let level = level_one();
        let scaled = level.scaled(3.0);

        assert_eq!(scaled.platforms[0].size.x, level.platforms[0].size.x / 3.0);
        assert_eq!(scaled.pickups[0].radius, level.pickups[0].radius / 3.0);
        assert_eq!(scaled.hazards[0].vel_x, level.hazards[0].vel_x / 3.0);
        assert_eq!(
            scaled.hazards[0].patrol_right,
            level.hazards[0].patrol_right / 3.0
        );
    }
}
