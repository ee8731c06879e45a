use crate::config::BOX_COUNT;
use crate::layers::GameLayer;
use crate::scene::{SceneLayout, SceneNode, SceneTuning};
use crate::state::GameState;
use avian2d::math::Vector;
use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::sprite::MaterialMesh2dBundle;

const BIRD_Z: f32 = 2.0;
const BODY_Z: f32 = 1.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), (setup_scene, setup_bird, setup_brick, setup_boxes));
    }
}

/// The bird. Pointer hits are tested against its sprite frame, not its collider.
#[derive(Component, Debug)]
pub struct Bird {
    pub half_size: Vec2,
}

impl Bird {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let offset = (point - center).abs();
        offset.x <= self.half_size.x && offset.y <= self.half_size.y
    }
}

/// Where the bird sits before launch and returns to on reset.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LaunchOrigin(pub Vec2);

#[derive(Component, Debug)]
pub struct Brick;

#[derive(Component, Debug)]
pub struct TargetBox {
    pub index: usize,
}

#[derive(Component, Debug)]
pub struct Boundary;

#[derive(Bundle)]
struct BirdBundle {
    name: Name,
    bird: Bird,
    origin: LaunchOrigin,
    rigid_body: RigidBody,
    collider: Collider,
    collider_density: ColliderDensity,
    gravity_scale: GravityScale,
    collision_layers: CollisionLayers,
    mesh_bundle: MaterialMesh2dBundle<ColorMaterial>,
}

#[derive(Bundle)]
struct BoxBundle {
    name: Name,
    target: TargetBox,
    rigid_body: RigidBody,
    collider: Collider,
    collider_density: ColliderDensity,
    collision_layers: CollisionLayers,
    mesh_bundle: MaterialMesh2dBundle<ColorMaterial>,
}

/// Density that gives a collider of `area` the requested mass.
pub fn density_for_mass(mass: f32, area: f32) -> f32 {
    if area > f32::EPSILON {
        mass / area
    } else {
        1.0
    }
}

fn sprite(
    node: &SceneNode,
    mesh: Handle<Mesh>,
    z: f32,
    materials: &mut Assets<ColorMaterial>,
) -> MaterialMesh2dBundle<ColorMaterial> {
    MaterialMesh2dBundle {
        mesh: mesh.into(),
        material: materials.add(ColorMaterial::from(node.color())),
        transform: Transform::from_translation(node.position().extend(z)),
        ..default()
    }
}

/// Static edge loop around the scene frame.
fn setup_scene(mut commands: Commands, layout: Res<SceneLayout>) {
    let (min_x, max_x, min_y, max_y) = (layout.min_x(), layout.max_x(), layout.min_y(), layout.max_y());
    let corners = [
        Vector::new(min_x, min_y),
        Vector::new(max_x, min_y),
        Vector::new(max_x, max_y),
        Vector::new(min_x, max_y),
    ];

    for i in 0..corners.len() {
        let (a, b) = (corners[i], corners[(i + 1) % corners.len()]);
        commands.spawn((
            Name::new(format!("boundary{i}")),
            Boundary,
            RigidBody::Static,
            Collider::segment(a, b),
            GameLayer::boundary(),
            TransformBundle::default(),
        ));
    }
    debug!("Scene edge loop spawned for frame {:?}", layout.frame_size());
}

fn setup_bird(
    mut commands: Commands,
    layout: Res<SceneLayout>,
    tuning: Res<SceneTuning>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(node) = layout.node("bird") else {
        debug!("Scene has no bird node, skipping bird setup");
        return;
    };

    let radius = node.size().y / 2.0;
    let area = std::f32::consts::PI * radius.powi(2);
    let mesh = meshes.add(Circle { radius });

    commands.spawn(BirdBundle {
        name: Name::new("bird"),
        bird: Bird { half_size: node.size() / 2.0 },
        origin: LaunchOrigin(node.position()),
        rigid_body: RigidBody::Dynamic,
        collider: Collider::circle(radius),
        collider_density: ColliderDensity(density_for_mass(tuning.bird_mass, area)),
        gravity_scale: GravityScale(0.0),
        collision_layers: GameLayer::bird(),
        mesh_bundle: sprite(node, mesh, BIRD_Z, &mut materials),
    });
    debug!("Bird spawned at {:?} with radius {radius}", node.position());
}

fn setup_brick(
    mut commands: Commands,
    layout: Res<SceneLayout>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(node) = layout.node("brick") else {
        debug!("Scene has no brick node, skipping brick setup");
        return;
    };

    let size = node.size();
    let mesh = meshes.add(Rectangle::new(size.x, size.y));
    commands.spawn((
        Name::new("brick"),
        Brick,
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        LockedAxes::ROTATION_LOCKED,
        GameLayer::brick(),
        sprite(node, mesh, BODY_Z, &mut materials),
    ));
}

fn setup_boxes(
    mut commands: Commands,
    layout: Res<SceneLayout>,
    tuning: Res<SceneTuning>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for index in 1..=BOX_COUNT {
        let name = format!("box{index}");
        let Some(node) = layout.node(&name) else {
            debug!("Scene has no {name} node");
            continue;
        };

        let size = node.size();
        let mesh = meshes.add(Rectangle::new(size.x, size.y));
        commands.spawn(BoxBundle {
            name: Name::new(name),
            target: TargetBox { index },
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collider_density: ColliderDensity(density_for_mass(tuning.box_mass, size.x * size.y)),
            collision_layers: GameLayer::boxes(),
            mesh_bundle: sprite(node, mesh, BODY_Z, &mut materials),
        });
    }
}
