//! Whole-simulation scenarios driven through the public API

use glam::Vec2;
use hex_bounce::consts::*;
use hex_bounce::draw::{DrawCommand, colors};
use hex_bounce::scene::{Overlay, compose};
use hex_bounce::sim::{Ball, Hexagon, Segment, SimState, resolve, tick};
use proptest::prelude::*;

/// Smallest distance from the ball's center to any edge line, measured inward
fn inward_margin(hexagon: &Hexagon, pos: Vec2) -> f32 {
    hexagon
        .edges()
        .map(|edge| {
            let outward = (edge.midpoint() - hexagon.center).normalize();
            hexagon.apothem() - (pos - hexagon.center).dot(outward)
        })
        .fold(f32::INFINITY, f32::min)
}

#[test]
fn test_ball_stays_inside_for_ten_seconds() {
    let mut state = SimState::new();

    for _ in 0..TARGET_FPS * 10 {
        tick(&mut state);
        let margin = inward_margin(&state.hexagon, state.ball.pos);
        assert!(
            margin >= BALL_RADIUS - 0.5,
            "frame {}: ball at {:?} is {} from the nearest edge",
            state.frame,
            state.ball.pos,
            margin
        );
    }

    assert_eq!(state.frame, 600);
    assert!(state.bounces > 0);
}

#[test]
fn test_ball_never_outruns_its_radius() {
    // Moving less than a radius per frame means edges cannot be skipped
    let mut state = SimState::new();
    for _ in 0..TARGET_FPS * 10 {
        tick(&mut state);
        assert!(state.ball.vel.length() < BALL_RADIUS);
    }
}

#[test]
fn test_rotation_keeps_vertices_on_circle() {
    let mut state = SimState::new();
    // Over two full turns, so wrapping is exercised
    for _ in 0..1300 {
        tick(&mut state);
        assert!(state.hexagon.rotation >= 0.0 && state.hexagon.rotation < std::f32::consts::TAU);
        for v in state.hexagon.vertices() {
            let d = (v - state.hexagon.center).length();
            assert!((d - HEXAGON_RADIUS).abs() < 1e-3);
        }
    }
}

#[test]
fn test_simulation_is_deterministic() {
    let mut a = SimState::new();
    let mut b = SimState::new();
    for _ in 0..300 {
        assert_eq!(tick(&mut a), tick(&mut b));
    }
    assert_eq!(a.ball.pos, b.ball.pos);
    assert_eq!(a.ball.vel, b.ball.vel);
    assert_eq!(a.bounces, b.bounces);
}

#[test]
fn test_resting_ball_in_still_hexagon() {
    let mut state = SimState::new();
    state.ball.vel = Vec2::ZERO;
    state.hexagon.rotation_speed = 0.0;

    let outcome = tick(&mut state);

    // Gravity lands first, then friction scales it
    assert!((state.ball.vel.y - GRAVITY * FRICTION).abs() < 1e-6);
    assert_eq!(state.ball.vel.x, 0.0);
    assert!(!outcome.any_bounce());
}

#[test]
fn test_penetrating_ball_is_pushed_out_and_bounces() {
    let edge = Segment::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0));
    let mut ball = Ball::new(Vec2::new(100.0, 100.0 - BALL_RADIUS / 2.0), BALL_RADIUS);
    ball.vel = Vec2::new(0.0, 10.0);

    assert!(resolve(&mut ball, &edge));

    assert!((100.0 - ball.pos.y - BALL_RADIUS).abs() < 1e-4);
    assert!(ball.vel.y < 0.0);
    assert!(ball.vel.y.abs() < 10.0);
}

#[test]
fn test_degenerate_edge_is_ignored() {
    let point = Vec2::new(50.0, 50.0);
    let mut ball = Ball::new(point, BALL_RADIUS);
    ball.vel = Vec2::new(1.0, 1.0);

    assert!(!resolve(&mut ball, &Segment::new(point, point)));
    assert_eq!(ball.pos, point);
    assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
}

#[test]
fn test_frame_matches_state_after_ticks() {
    let mut state = SimState::new();
    for _ in 0..42 {
        tick(&mut state);
    }

    let frame = compose(&state, &Overlay::default());
    let commands = frame.commands();
    assert_eq!(commands.len(), 4);

    assert!(matches!(commands[0], DrawCommand::Clear(c) if c == colors::BLACK));
    match &commands[1] {
        DrawCommand::PolygonOutline { points, color, .. } => {
            assert_eq!(points.as_slice(), state.hexagon.vertices().as_slice());
            assert_eq!(*color, colors::BLUE);
        }
        other => panic!("expected hexagon outline, got {:?}", other),
    }
    match &commands[2] {
        DrawCommand::FillCircle { center, radius, .. } => {
            assert_eq!(*center, state.ball.pos.trunc());
            assert_eq!(*radius, BALL_RADIUS);
        }
        other => panic!("expected ball, got {:?}", other),
    }
    match &commands[3] {
        DrawCommand::Text { text, pos, .. } => {
            assert!(text.starts_with("Velocity X: "));
            assert_eq!(*pos, OVERLAY_POS);
        }
        other => panic!("expected overlay text, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_ball_stays_inside_from_any_gentle_start(
        vx in -8.0f32..8.0,
        vy in -8.0f32..8.0,
        rotation_speed in -0.02f32..0.02,
    ) {
        let mut state = SimState::new();
        state.ball.vel = Vec2::new(vx, vy);
        state.hexagon.rotation_speed = rotation_speed;

        for _ in 0..TARGET_FPS * 5 {
            tick(&mut state);
            prop_assert!(inward_margin(&state.hexagon, state.ball.pos) >= BALL_RADIUS - 0.5);
        }
    }
}
