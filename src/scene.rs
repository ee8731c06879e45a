use bevy::prelude::*;
use serde::Deserialize;

/// Scene description loaded from `*.scene.json`.
///
/// Positions are in scene coordinates with the origin at the center of the
/// frame, the same space the world camera looks at.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct SceneLayout {
    pub size: [f32; 2],
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub tuning: SceneTuning,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub position: [f32; 2],
    pub size: [f32; 2],
    #[serde(default = "default_node_color")]
    pub color: [f32; 3],
}

/// Physics knobs for the launch site. Every field falls back to its default
/// when absent from the file.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneTuning {
    pub bird_mass: f32,
    pub box_mass: f32,
    /// Linear and angular speed under which a launched bird counts as resting.
    pub rest_threshold: f32,
    pub launch_impulse_scale: f32,
    pub launched_gravity_scale: f32,
}

impl Default for SceneTuning {
    fn default() -> Self {
        Self {
            bird_mass: 0.15,
            box_mass: 0.35,
            rest_threshold: 0.1,
            launch_impulse_scale: 1.0,
            launched_gravity_scale: 1.0,
        }
    }
}

fn default_node_color() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

impl SceneNode {
    pub fn position(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::from(self.size)
    }

    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }
}

impl SceneLayout {
    /// Finds a node by name. Callers treat `None` as "skip this setup step".
    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn frame_size(&self) -> Vec2 {
        Vec2::from(self.size)
    }

    pub fn mid(&self) -> Vec2 {
        Vec2::ZERO
    }

    pub fn min_x(&self) -> f32 {
        -self.size[0] / 2.0
    }

    pub fn max_x(&self) -> f32 {
        self.size[0] / 2.0
    }

    pub fn min_y(&self) -> f32 {
        -self.size[1] / 2.0
    }

    pub fn max_y(&self) -> f32 {
        self.size[1] / 2.0
    }

    /// Same layout as `assets/data/launch_site.scene.json`, used when the
    /// asset cannot be loaded.
    pub fn builtin() -> Self {
        let node = |name: &str, position: [f32; 2], size: [f32; 2], color: [f32; 3]| SceneNode {
            name: name.to_string(),
            position,
            size,
            color,
        };
        let wood = [0.72, 0.52, 0.3];

        Self {
            size: [1334.0, 750.0],
            nodes: vec![
                node("bird", [-450.0, -190.0], [60.0, 60.0], [0.84, 0.16, 0.16]),
                node("brick", [-450.0, -300.0], [40.0, 150.0], [0.45, 0.3, 0.2]),
                node("box1", [300.0, -325.0], [100.0, 100.0], wood),
                node("box2", [410.0, -325.0], [100.0, 100.0], wood),
                node("box3", [355.0, -225.0], [100.0, 100.0], wood),
                node("box4", [355.0, -125.0], [80.0, 100.0], wood),
                node("box5", [355.0, -35.0], [60.0, 80.0], wood),
            ],
            tuning: SceneTuning::default(),
        }
    }
}
