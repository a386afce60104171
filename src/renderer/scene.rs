//! Paints the world into the low-res frame
//!
//! Pure read-only pass over the world; runs every tick regardless of phase
//! so terminal overlays keep drawing over the frozen scene.

use crate::consts::{FRAME_H, FRAME_W};
use crate::sim::{GamePhase, Hazard, Pickup, Platform, Player, World};

use super::font::{draw_text, text_width};
use super::frame::{Color, Frame, rgb};

/// Colors for game elements
mod palette {
    use super::{Color, rgb};

    pub const SKY_TOP: Color = rgb(88, 132, 212);
    pub const SKY_BOTTOM: Color = rgb(154, 196, 240);
    pub const GROUND_BAND: Color = rgb(64, 110, 52);
    pub const PLATFORM: Color = rgb(106, 74, 48);
    pub const PLATFORM_TOP: Color = rgb(98, 164, 72);
    pub const PICKUP: Color = rgb(240, 202, 60);
    pub const PICKUP_RIM: Color = rgb(178, 128, 24);
    pub const HAZARD: Color = rgb(198, 58, 70);
    pub const HAZARD_ACCENT: Color = rgb(66, 16, 24);
    pub const PLAYER_BODY: Color = rgb(52, 100, 170);
    pub const PLAYER_BELLY: Color = rgb(120, 170, 226);
    pub const PLAYER_EYE: Color = rgb(250, 250, 250);
    pub const HUD_TEXT: Color = rgb(255, 255, 255);
    pub const HUD_SHADOW: Color = rgb(20, 30, 50);
    pub const HEART: Color = rgb(226, 64, 78);
    pub const PANEL_DARK: Color = rgb(10, 10, 24);
    pub const PANEL_LIGHT: Color = rgb(236, 242, 250);
    pub const PANEL_DARK_TEXT: Color = rgb(30, 36, 52);
}

/// Paint one frame of the current world state
pub fn paint(world: &World, frame: &mut Frame) {
    draw_background(frame);

    for platform in &world.platforms {
        draw_platform(frame, platform);
    }
    for pickup in &world.pickups {
        draw_pickup(frame, pickup);
    }
    for hazard in &world.hazards {
        draw_hazard(frame, hazard);
    }
    draw_player(frame, &world.player);
    draw_hud(frame, world);

    match world.phase {
        GamePhase::Playing => {}
        GamePhase::Lost => draw_lost_overlay(frame),
        GamePhase::Won => draw_won_overlay(frame, world.score),
    }
}

fn draw_background(frame: &mut Frame) {
    let h = FRAME_H as i32;
    frame.vertical_gradient(0, h, palette::SKY_TOP, palette::SKY_BOTTOM);
    // Ground tint band behind the lowest platforms
    frame.fill_rect(0, h - 14, FRAME_W as i32, 14, palette::GROUND_BAND);
}

fn draw_platform(frame: &mut Frame, platform: &Platform) {
    let (x, y) = (platform.pos.x as i32, platform.pos.y as i32);
    let (w, h) = (platform.size.x as i32, platform.size.y as i32);
    frame.fill_rect(x, y, w, h, palette::PLATFORM);
    // Grassy highlight strip along the top
    frame.fill_rect(x, y, w, 2, palette::PLATFORM_TOP);
}

fn draw_pickup(frame: &mut Frame, pickup: &Pickup) {
    let (cx, cy) = (pickup.pos.x as i32, pickup.pos.y as i32);
    let r = pickup.radius as i32;
    frame.fill_circle(cx, cy, r, palette::PICKUP);
    frame.circle_outline(cx, cy, r, palette::PICKUP_RIM);
}

fn draw_hazard(frame: &mut Frame, hazard: &Hazard) {
    let (x, y) = (hazard.pos.x as i32, hazard.pos.y as i32);
    let (w, h) = (hazard.size.x as i32, hazard.size.y as i32);
    frame.fill_rect(x, y, w, h, palette::HAZARD);
    // Brow accent, leaning toward the direction of travel
    let lean = if hazard.vel_x >= 0.0 { 1 } else { -1 };
    frame.fill_rect(x + 2 + lean, y + 2, w - 4, 2, palette::HAZARD_ACCENT);
    frame.put(x + 2, y + h - 2, palette::HAZARD_ACCENT);
    frame.put(x + w - 3, y + h - 2, palette::HAZARD_ACCENT);
}

fn draw_player(frame: &mut Frame, player: &Player) {
    let (x, y) = (player.pos.x as i32, player.pos.y as i32);
    let (w, h) = (player.size.x as i32, player.size.y as i32);
    frame.fill_rect(x, y, w, h, palette::PLAYER_BODY);
    frame.fill_rect(x + 2, y + h / 2, w - 4, h / 2 - 2, palette::PLAYER_BELLY);
    // Eyes look the way the player is moving
    let gaze = if player.vel.x < 0.0 { -1 } else { 1 };
    frame.fill_rect(x + w / 2 - 3 + gaze, y + 3, 2, 2, palette::PLAYER_EYE);
    frame.fill_rect(x + w / 2 + 1 + gaze, y + 3, 2, 2, palette::PLAYER_EYE);
}

fn draw_heart(frame: &mut Frame, x: i32, y: i32, c: Color) {
    frame.fill_rect(x, y + 1, 2, 2, c);
    frame.fill_rect(x + 3, y + 1, 2, 2, c);
    frame.fill_rect(x, y + 2, 5, 2, c);
    frame.fill_rect(x + 1, y + 4, 3, 1, c);
    frame.put(x + 2, y + 5, c);
}

fn draw_hud(frame: &mut Frame, world: &World) {
    let score_line = format!("SCORE {}", world.score);
    draw_text(frame, 5, 5, &score_line, palette::HUD_SHADOW, 1);
    draw_text(frame, 4, 4, &score_line, palette::HUD_TEXT, 1);

    // One heart per remaining life, right-aligned
    let w = FRAME_W as i32;
    for i in 0..world.lives() as i32 {
        draw_heart(frame, w - 12 - i * 8, 4, palette::HEART);
    }
}

fn draw_lost_overlay(frame: &mut Frame) {
    frame.blend_overlay(palette::PANEL_DARK, 160);
    let (w, h) = (FRAME_W as i32, FRAME_H as i32);
    let title = "GAME OVER";
    draw_text(
        frame,
        (w - text_width(title, 2)) / 2,
        h / 2 - 8,
        title,
        palette::HUD_TEXT,
        2,
    );
}

fn draw_won_overlay(frame: &mut Frame, score: u32) {
    frame.blend_overlay(palette::PANEL_LIGHT, 180);
    let (w, h) = (FRAME_W as i32, FRAME_H as i32);

    let title = "YOU WIN!";
    draw_text(
        frame,
        (w - text_width(title, 2)) / 2,
        h / 2 - 14,
        title,
        palette::PANEL_DARK_TEXT,
        2,
    );

    let score_line = format!("SCORE {}", score);
    draw_text(
        frame,
        (w - text_width(&score_line, 1)) / 2,
        h / 2 + 4,
        &score_line,
        palette::PANEL_DARK_TEXT,
        1,
    );
}
