// src/config.rs

use avian2d::math::Vector;
use bevy::color::Color;

// Global game configuration constants
pub const UNIT_SCALE: f32 = 100.0; // 100 pixels = 1 meter

pub const WINDOW_WIDTH: f32 = 1334.0;
pub const WINDOW_HEIGHT: f32 = 750.0;
pub const DEFAULT_GRAVITY: Vector = Vector::new(0.0, -9.8 * UNIT_SCALE);
pub const BACKGROUND_COLOR: Color = Color::srgb(0.62, 0.84, 0.95);

pub const SCENE_ASSET_PATH: &str = "data/launch_site.scene.json";
pub const BEST_SCORE_KEY: &str = "bestScore";

// Boxes are looked up as box1..=BOX_COUNT
pub const BOX_COUNT: usize = 5;

pub const SCORE_FONT_SIZE: f32 = 75.0;
pub const BEST_SCORE_FONT_SIZE: f32 = 40.0;
pub const LABEL_COLOR: Color = Color::BLACK;
pub const SCORE_LABEL_OFFSET_Y: f32 = 200.0;
pub const BEST_SCORE_MARGIN_X: f32 = 20.0;
pub const BEST_SCORE_MARGIN_Y: f32 = 100.0;
