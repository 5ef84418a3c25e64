use std::sync::Arc;

use controller2d::{
    Bounds, CollisionMask, Controller2D, ControllerConfig, Point2, SegmentScene, Vec2, Vec3,
};

fn body_at(x: f32, bottom: f32) -> Bounds {
    Bounds::new(Point2::new(x, bottom), Point2::new(x + 1.0, bottom + 2.0))
}

fn flat_floor() -> SegmentScene {
    let mut scene = SegmentScene::new();
    scene.push_segment(
        Point2::new(-100.0, 0.0),
        Point2::new(100.0, 0.0),
        CollisionMask::ALL,
    );
    scene
}

#[test]
fn walks_up_a_ramp_onto_the_plateau() {
    let mut scene = SegmentScene::new();
    scene
        .push_segment(Point2::new(-10.0, 0.0), Point2::new(3.0, 0.0), CollisionMask::ALL)
        .push_segment(Point2::new(3.0, 0.0), Point2::new(6.0, 3.0), CollisionMask::ALL)
        .push_segment(Point2::new(6.0, 3.0), Point2::new(20.0, 3.0), CollisionMask::ALL);

    let mut controller = Controller2D::default();
    let mut body = body_at(0.0, 0.0);
    let mut climbed = false;

    for _ in 0..60 {
        controller.move_body(&scene, &mut body, Vec3::new(0.2, -0.1, 0.0));
        climbed |= controller.contacts().climbing_slope;
    }

    assert!(climbed);
    assert!(body.min.x > 6.0, "body stopped at x = {}", body.min.x);
    assert!((body.min.y - 3.0).abs() < 1.0e-3, "bottom at {}", body.min.y);
    assert!(controller.contacts().below);
    assert!(!controller.contacts().climbing_slope);
}

#[test]
fn fast_motion_stops_flush_against_a_wall() {
    let mut scene = flat_floor();
    scene.push_segment(Point2::new(5.0, 0.0), Point2::new(5.0, 10.0), CollisionMask::ALL);

    let mut controller = Controller2D::default();
    let mut body = body_at(0.0, 0.0);

    for _ in 0..5 {
        controller.move_body(&scene, &mut body, Vec3::new(3.0, -0.1, 0.0));
    }

    assert!((body.max.x - 5.0).abs() < 1.0e-4, "right edge at {}", body.max.x);
    assert!(controller.contacts().right);
    assert!(controller.contacts().below);
}

#[test]
fn fast_fall_lands_on_a_thin_floor() {
    let scene = flat_floor();
    let mut controller = Controller2D::default();
    let mut body = body_at(0.0, 50.0);

    let v = controller.move_body(&scene, &mut body, Vec3::new(0.0, -100.0, 0.0));

    assert!((v.y + 50.0).abs() < 1.0e-3);
    assert!(body.min.y.abs() < 1.0e-3, "bottom at {}", body.min.y);
    assert!(controller.contacts().below);
}

#[test]
fn head_hits_a_ceiling_while_jumping() {
    let mut scene = flat_floor();
    scene.push_segment(Point2::new(-5.0, 4.0), Point2::new(5.0, 4.0), CollisionMask::ALL);

    let mut controller = Controller2D::default();
    let body = body_at(0.0, 0.0);

    let v = controller.resolve_move_2d(&scene, &body, Vec2::new(0.0, 5.0));

    assert!((v.y - 2.0).abs() < 1.0e-4);
    assert!(controller.contacts().above);
    assert!(!controller.contacts().below);
}

controller2d::define_collision_layers!(Layer, u32, { Ground, Ghost });

#[test]
fn configured_mask_ignores_other_layers() {
    let mut scene = SegmentScene::new();
    scene
        .push_segment(
            Point2::new(-100.0, 0.0),
            Point2::new(100.0, 0.0),
            CollisionMask::from_layers(&[Layer::Ground]),
        )
        .push_segment(
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 10.0),
            CollisionMask::from_layers(&[Layer::Ghost]),
        );

    let config = ControllerConfig {
        collision_mask: CollisionMask::from_layers(&[Layer::Ground]),
        ..ControllerConfig::default()
    };
    let mut controller = Controller2D::new(config);
    let mut body = body_at(0.0, 0.0);

    controller.move_body(&scene, &mut body, Vec3::new(8.0, -0.1, 0.0));

    assert!((body.min.x - 8.0).abs() < 1.0e-4);
    assert!(!controller.contacts().right);
    assert!(controller.contacts().below);
}

#[test]
fn controllers_share_a_scene_across_threads() {
    let scene = Arc::new(flat_floor());

    let landed: Vec<f32> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let scene = Arc::clone(&scene);
                s.spawn(move || {
                    let mut controller = Controller2D::default();
                    let mut body = body_at(i as f32 * 3.0, 1.0 + i as f32);
                    for _ in 0..20 {
                        controller.move_body(&scene, &mut body, Vec3::new(0.0, -0.5, 0.0));
                    }
                    body.min.y
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for bottom in landed {
        assert!(bottom.abs() < 1.0e-3, "bottom at {bottom}");
    }
}

#[test]
fn debug_rays_are_recorded_only_on_request() {
    let scene = flat_floor();
    let body = body_at(0.0, 1.0);

    let mut quiet = Controller2D::default();
    quiet.resolve_move(&scene, &body, Vec3::new(0.5, -2.0, 0.0));
    assert!(quiet.debug_rays().is_empty());

    let mut recording = Controller2D::new(ControllerConfig {
        record_debug_rays: true,
        ..ControllerConfig::default()
    });
    recording.resolve_move(&scene, &body, Vec3::new(0.5, -2.0, 0.0));
    let rays = recording.debug_rays();
    assert!(rays.iter().any(|r| r.hit.is_some()));
    assert!(rays.iter().all(|r| r.length > 0.0));
}
