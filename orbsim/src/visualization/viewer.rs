use bevy::input::mouse::MouseMotion;
use bevy::math::primitives::Sphere;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::clock::iso_date;
use crate::simulation::control::ControlInput;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Color as BodyColor;

/// Component tagging each sphere with its body index into the simulation
#[derive(Component)]
struct BodyIndex(pub usize);

/// The scenario being viewed, stepped once per rendered frame
#[derive(Resource)]
struct ViewedScenario(Scenario);

/// World meters -> scene units
const POSITION_SCALE: f64 = 1e-11;

/// Sphere radius is this times ln(radius in meters)
const RADIUS_SCALE: f32 = 0.005;

const CAMERA_SPEED: f32 = 5.0; // scene units per second
const MOUSE_SENSITIVITY: f32 = 0.003; // radians per pixel

/// Open a window and run `scenario` until it is closed.
///
/// Camera: WASD to fly, Space / LShift up and down, hold the right mouse
/// button to look around. Craft thrust: arrow keys on the x-z plane,
/// PageUp / PageDown along y.
pub fn run_viewer(scenario: Scenario) {
    log::info!(
        "starting viewer with {} bodies at {} fps",
        scenario.system.body_count(),
        scenario.engine.fps()
    );

    App::new()
        .insert_resource(ViewedScenario(scenario))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbital simulation".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup)
        .add_systems(Update, (physics_step, sync_transforms, update_title).chain())
        .add_systems(Update, fly_camera)
        .run();
}

fn to_bevy_color(c: BodyColor) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, c.a)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    viewed: Res<ViewedScenario>,
) {
    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    for (i, b) in viewed.0.system.bodies().iter().enumerate() {
        let radius = (RADIUS_SCALE * (b.radius as f32).ln()).max(0.001);

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: to_bevy_color(b.color),
                    unlit: true,
                    ..default()
                }),
                transform: Transform::from_translation(scene_position(b.position)),
                ..default()
            },
            BodyIndex(i),
        ));
    }
}

fn scene_position(p: crate::simulation::states::NVec3) -> Vec3 {
    let p = p * POSITION_SCALE;
    Vec3::new(p.x as f32, p.y as f32, p.z as f32)
}

fn read_control_input(keys: &ButtonInput<KeyCode>) -> ControlInput {
    ControlInput {
        pos_x: keys.pressed(KeyCode::ArrowRight),
        neg_x: keys.pressed(KeyCode::ArrowLeft),
        pos_y: keys.pressed(KeyCode::PageUp),
        neg_y: keys.pressed(KeyCode::PageDown),
        pos_z: keys.pressed(KeyCode::ArrowDown),
        neg_z: keys.pressed(KeyCode::ArrowUp),
    }
}

fn physics_step(mut viewed: ResMut<ViewedScenario>, keys: Res<ButtonInput<KeyCode>>) {
    let input = read_control_input(&keys);
    viewed.0.step(&input);
}

fn sync_transforms(viewed: Res<ViewedScenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let bodies = viewed.0.system.bodies();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = bodies.get(*i) {
            transform.translation = scene_position(b.position);
        }
    }
}

fn update_title(viewed: Res<ViewedScenario>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = format!("Orbital simulation - {}", iso_date(viewed.0.system.time_total()));
    }
}

fn fly_camera(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut cameras: Query<&mut Transform, (With<Camera3d>, Without<BodyIndex>)>,
) {
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };

    let look: Vec2 = motion.read().map(|m| m.delta).sum();
    if buttons.pressed(MouseButton::Right) {
        transform.rotate_y(-look.x * MOUSE_SENSITIVITY);
        transform.rotate_local_x(-look.y * MOUSE_SENSITIVITY);
    }

    let forward = *transform.forward();
    let right = *transform.right();
    let mut dir = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        dir += forward;
    }
    if keys.pressed(KeyCode::KeyS) {
        dir -= forward;
    }
    if keys.pressed(KeyCode::KeyD) {
        dir += right;
    }
    if keys.pressed(KeyCode::KeyA) {
        dir -= right;
    }
    if keys.pressed(KeyCode::Space) {
        dir += Vec3::Y;
    }
    if keys.pressed(KeyCode::ShiftLeft) {
        dir -= Vec3::Y;
    }

    transform.translation += dir.normalize_or_zero() * CAMERA_SPEED * time.delta_seconds();
}
