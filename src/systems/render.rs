//! Raylib rendering.
//!
//! Draws the resident level, the friends still waiting, the player and the
//! HUD (altitude bar and rescue counter). The end screen replaces all of it
//! once the game is won. Debug mode adds collision boxes, the ground probe
//! and a short diagnostics block.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::collider::Collider;
use crate::components::player::{AnimationState, Facing, Player};
use crate::components::rescuable::FRIENDS;
use crate::components::transform::Transform;
use crate::resources::debugmode::DebugMode;
use crate::resources::endgame::EndGameSummary;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::level::Level;
use crate::resources::levelslider::LevelSlider;
use crate::resources::screensize::ScreenSize;
use crate::systems::collision::ground_probe;

const TILE_FILL: Color = Color::new(96, 72, 52, 255);
const TILE_EDGE: Color = Color::new(60, 44, 30, 255);
const HUD_TEXT: Color = Color::new(240, 240, 240, 255);
const BAR_BACK: Color = Color::new(0, 0, 0, 120);
const BAR_FILL: Color = Color::new(250, 200, 60, 255);

fn friend_color(name: &str) -> Color {
    match name {
        "butter" => Color::new(250, 220, 90, 255),
        "cheese" => Color::new(255, 180, 40, 255),
        "dried_meat" => Color::new(150, 60, 40, 255),
        "milk" => Color::new(245, 245, 250, 255),
        _ => Color::MAGENTA,
    }
}

fn player_color(animation: AnimationState) -> Color {
    match animation {
        AnimationState::Idle => Color::new(196, 150, 90, 255),
        AnimationState::Run => Color::new(206, 160, 95, 255),
        AnimationState::Charge => Color::new(230, 140, 70, 255),
        AnimationState::Jump => Color::new(215, 170, 100, 255),
    }
}

/// Rough pixel width of `text` in the default font.
fn text_width(text: &str, font_size: i32) -> i32 {
    text.chars().count() as i32 * font_size / 2
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, y: i32, font_size: i32, screen_w: i32) {
    let x = (screen_w - text_width(text, font_size)) / 2;
    d.draw_text(text, x, y, font_size, HUD_TEXT);
}

/// Draw one frame.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    screen: Res<ScreenSize>,
    state: Res<GameState>,
    level: Option<Res<Level>>,
    slider: Option<Res<LevelSlider>>,
    summary: Option<Res<EndGameSummary>>,
    debug_mode: Option<Res<DebugMode>>,
    players: Query<(&Transform, &Player)>,
) {
    let mut d = rl.begin_drawing(&th);

    if matches!(state.get(), GameStates::GameWon) {
        render_end_screen(&mut d, summary.as_deref(), *screen);
        return;
    }

    let Some(level) = level else {
        d.clear_background(Color::BLACK);
        return;
    };

    let [r, g, b] = level.background();
    d.clear_background(Color::new(r, g, b, 255));

    for tile in level.tiles() {
        let rec = tile.aabb();
        d.draw_rectangle_rec(rec, TILE_FILL);
        d.draw_rectangle_lines_ex(rec, 1.0, TILE_EDGE);
    }

    for friend in level.rescuables() {
        let rec = friend.aabb();
        d.draw_rectangle_rec(rec, friend_color(&friend.name));
        d.draw_text(
            &friend.name,
            rec.x as i32,
            rec.y as i32 - 12,
            10,
            HUD_TEXT,
        );
    }

    for (transform, player) in players.iter() {
        let rec = transform.aabb();
        d.draw_rectangle_rec(rec, player_color(player.animation));
        // Eye on the facing side.
        let eye_x = match player.facing {
            Facing::Left => rec.x + rec.width * 0.25,
            Facing::Right => rec.x + rec.width * 0.75,
        };
        d.draw_circle(eye_x as i32, (rec.y + rec.height * 0.3) as i32, 3.0, Color::BLACK);

        if player.is_charging_jump && player.max_charge_time > 0.0 {
            let ratio = (player.charge_time / player.max_charge_time).clamp(0.0, 1.0);
            d.draw_rectangle(
                rec.x as i32,
                rec.y as i32 - 8,
                (rec.width * ratio) as i32,
                4,
                BAR_FILL,
            );
        }
    }

    if let Some(slider) = slider.as_deref() {
        render_hud(&mut d, slider, &level, &players, *screen);
    }

    if matches!(state.get(), GameStates::Paused) {
        d.draw_rectangle(0, 0, screen.w, screen.h, Color::new(0, 0, 0, 140));
        draw_centered(&mut d, "PAUSED", screen.h / 2 - 30, 40, screen.w);
        draw_centered(&mut d, "Press Escape to resume", screen.h / 2 + 20, 20, screen.w);
        draw_centered(&mut d, "Press R to restart", screen.h / 2 + 50, 20, screen.w);
    }

    if debug_mode.is_some() {
        render_debug(&mut d, &level, &players);
    }
}

fn render_hud(
    d: &mut RaylibDrawHandle,
    slider: &LevelSlider,
    level: &Level,
    players: &Query<(&Transform, &Player)>,
    screen: ScreenSize,
) {
    let player_y = players
        .iter()
        .next()
        .map(|(t, _)| t.y())
        .unwrap_or(screen.h as f32);
    let progress = slider.altitude_progress(player_y, screen.h);

    let bar_h = screen.h - 80;
    let bar_x = screen.w - 30;
    d.draw_rectangle(bar_x, 40, 12, bar_h, BAR_BACK);
    let filled = (bar_h as f32 * progress) as i32;
    d.draw_rectangle(bar_x, 40 + bar_h - filled, 12, filled, BAR_FILL);

    d.draw_text(
        &format!("Level {}/{}", level.number(), slider.max_level()),
        10,
        10,
        20,
        HUD_TEXT,
    );
    d.draw_text(
        &format!(
            "Friends {}/{}",
            slider.rescued_characters().len(),
            FRIENDS.len()
        ),
        10,
        34,
        20,
        HUD_TEXT,
    );
}

fn render_debug(d: &mut RaylibDrawHandle, level: &Level, players: &Query<(&Transform, &Player)>) {
    for tile in level.tiles() {
        d.draw_rectangle_lines_ex(tile.aabb(), 1.0, Color::RED);
    }
    for friend in level.rescuables() {
        d.draw_rectangle_lines_ex(friend.aabb(), 1.0, Color::SKYBLUE);
    }
    let mut line_y = 70;
    for (transform, player) in players.iter() {
        d.draw_rectangle_lines_ex(transform.aabb(), 1.0, Color::YELLOW);
        d.draw_rectangle_rec(ground_probe(transform), Color::GREEN);
        let text = format!(
            "pos ({:.1}, {:.1}) charge {:.2} lock {} wall {}",
            transform.x(),
            transform.y(),
            player.charge_time,
            player.air_direction_locked,
            player.air_movement_disabled_by_wall
        );
        d.draw_text(&text, 10, line_y, 10, HUD_TEXT);
        line_y += 14;
    }

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F1 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, line_y, 10, HUD_TEXT);
    if level.load_failed() {
        d.draw_text("level failed to load", 10, line_y + 14, 10, Color::RED);
    }
}

fn render_end_screen(d: &mut RaylibDrawHandle, summary: Option<&EndGameSummary>, screen: ScreenSize) {
    d.clear_background(Color::new(20, 24, 40, 255));
    draw_centered(d, "You made it to the top!", screen.h / 4, 40, screen.w);

    let Some(summary) = summary else {
        return;
    };
    draw_centered(d, &summary.headline(), screen.h / 4 + 60, 28, screen.w);

    let size = 48;
    let gap = 24;
    let count = summary.rescued.len() as i32;
    let row_w = count * size + (count - 1).max(0) * gap;
    let mut x = (screen.w - row_w) / 2;
    let y = screen.h / 2;
    for name in &summary.rescued {
        d.draw_rectangle(x, y, size, size, friend_color(name));
        d.draw_text(name, x, y + size + 6, 12, HUD_TEXT);
        x += size + gap;
    }

    draw_centered(d, "Press R to play again or Escape to quit", screen.h - 60, 20, screen.w);
}
