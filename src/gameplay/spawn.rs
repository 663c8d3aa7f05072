//! Scene construction: background, the three boundaries, the ball.
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, EntityKind};
use crate::core::config::GameConfig;

/// One fixed collider of the pit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySpec {
    pub name: &'static str,
    pub kind: EntityKind,
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// Walls span `wall_height_factor` window heights centered on the bottom
/// edge and sit `wall_inset` inside the side edges; the ground is a thin
/// strip across the bottom edge.
pub fn arena_layout(cfg: &GameConfig) -> [BoundarySpec; 3] {
    let half_w = cfg.window.width * 0.5;
    let bottom = -cfg.window.height * 0.5;
    let a = &cfg.arena;
    let wall_half = Vec2::new(
        a.wall_thickness * 0.5,
        cfg.window.height * a.wall_height_factor * 0.5,
    );
    [
        BoundarySpec {
            name: "WallLeft",
            kind: EntityKind::Wall,
            center: Vec2::new(-half_w + a.wall_inset, bottom),
            half_extents: wall_half,
        },
        BoundarySpec {
            name: "WallRight",
            kind: EntityKind::Wall,
            center: Vec2::new(half_w - a.wall_inset, bottom),
            half_extents: wall_half,
        },
        BoundarySpec {
            name: "Ground",
            kind: EntityKind::Ground,
            center: Vec2::new(0.0, bottom),
            half_extents: Vec2::new(half_w, a.ground_thickness * 0.5),
        },
    ]
}

fn load_or_default<A: Asset>(asset_server: Option<&AssetServer>, path: &str) -> Handle<A> {
    asset_server.map(|a| a.load(path.to_owned())).unwrap_or_default()
}

pub fn spawn_scene(
    mut commands: Commands,
    asset_server: Option<Res<AssetServer>>,
    cfg: Res<GameConfig>,
) {
    let assets = asset_server.as_deref();

    commands.spawn((
        Name::new("Background"),
        Sprite {
            image: load_or_default(assets, &cfg.assets.background),
            anchor: Anchor::BottomLeft,
            ..default()
        },
        Transform::from_xyz(-cfg.window.width * 0.5, -cfg.window.height * 0.5, -10.0)
            .with_scale(Vec3::splat(cfg.arena.background_scale)),
    ));

    for b in arena_layout(&cfg) {
        commands.spawn((
            Name::new(b.name),
            b.kind,
            RigidBody::Fixed,
            Collider::cuboid(b.half_extents.x, b.half_extents.y),
            Transform::from_translation(b.center.extend(0.0)),
        ));
    }

    let radius = cfg.ball.effective_radius();
    let locked = if cfg.variant.rotation_enabled() {
        LockedAxes::empty()
    } else {
        LockedAxes::ROTATION_LOCKED
    };
    commands
        .spawn((
            Name::new("Ball"),
            Ball,
            EntityKind::Ball,
            Sprite {
                image: load_or_default(assets, &cfg.assets.ball),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
            Transform::from_translation(cfg.ball_start().extend(1.0)),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::ball(radius),
            ColliderMassProperties::Density(cfg.ball.density),
            Restitution::coefficient(cfg.ball.restitution),
            Friction::coefficient(cfg.ball.friction),
            GravityScale(1.0),
            locked,
            Velocity::zero(),
            ExternalImpulse::default(),
            ActiveEvents::COLLISION_EVENTS,
        ));
    info!(
        target: "scene",
        "scene ready: {}x{} variant={:?}",
        cfg.window.width,
        cfg.window.height,
        cfg.variant
    );
}
