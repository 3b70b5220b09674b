// Host-side tests for the scene update rules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod entities {
    include!("../src/core/entities.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;
use entities::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn hd() -> Viewport {
    Viewport::new(1920.0, 1080.0)
}

fn make_scene(node_count: usize, packet_count: usize, seed: u64) -> AnimationState {
    AnimationState::new(
        SceneParams {
            node_count,
            packet_count,
        },
        hd(),
        seed,
    )
}

fn flag_count(state: &AnimationState) -> usize {
    state.nodes.iter().filter(|n| n.is_flag).count()
}

fn quiet_node(pos: Vec2, vel: Vec2) -> Node {
    Node {
        pos,
        vel,
        radius: 2.0,
        pulse: 0.0,
        is_flag: false,
        influence: 0.0,
    }
}

#[test]
fn default_scene_matches_reference_population() {
    let state = AnimationState::new(SceneParams::default(), hd(), 7);
    assert_eq!(state.nodes.len(), 150);
    assert_eq!(state.packets.len(), 60);
    assert!(state.ripples.is_empty());
    assert_eq!(flag_count(&state), 1);
    for n in &state.nodes {
        assert!(hd().contains(n.pos), "node outside viewport: {:?}", n.pos);
        assert!(n.radius >= 1.5 && n.radius < 3.5);
        assert!(n.pulse >= 0.0 && n.pulse < std::f32::consts::TAU);
        assert!(n.vel.x >= -0.1 && n.vel.x < 0.1);
        assert!(n.vel.y >= -0.1 && n.vel.y < 0.1);
    }
    for p in &state.packets {
        assert_ne!(p.start, p.end, "packet endpoints should come from distinct nodes");
        assert_eq!(p.progress, 0.0);
        assert!(p.speed >= 0.005 && p.speed < 0.013);
    }
}

#[test]
fn packet_tints_are_mixed() {
    let state = make_scene(20, 200, 3);
    let red = state
        .packets
        .iter()
        .filter(|p| p.tint == PacketTint::Red)
        .count();
    assert!(red > 0 && red < 200, "expected both tints, got {red} red");
}

#[test]
fn empty_and_single_node_scenes_degrade_quietly() {
    let mut empty = make_scene(0, 5, 1);
    assert_eq!(flag_count(&empty), 0);
    assert_eq!(empty.flagged_index(), None);
    empty.set_pointer(Some(Vec2::new(10.0, 10.0)));
    for _ in 0..300 {
        empty.update();
    }
    assert!(empty.ripples.is_empty());
    assert!(empty.packets.iter().all(|p| p.progress < 1.0));

    let mut single = make_scene(1, 3, 1);
    assert_eq!(flag_count(&single), 1);
    for p in &single.packets {
        assert_eq!(p.start, p.end);
    }
    let at = single.nodes[0].pos;
    single.set_pointer(Some(at));
    single.update();
    assert_eq!(single.ripples.len(), 1);
    assert_eq!(flag_count(&single), 1, "lone node keeps the flag");
}

#[test]
fn pick_distinct_reports_fallback() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(pick_distinct(&mut rng, 1, 0, 10), Draw::Fallback(0));
    for _ in 0..100 {
        let d = pick_distinct(&mut rng, 2, 1, 10);
        assert!(d.index() < 2);
        if d.is_distinct() {
            assert_eq!(d.index(), 0);
        }
    }
    let hits = (0..200)
        .filter(|_| pick_distinct(&mut rng, 150, 3, 10) == Draw::Distinct(3))
        .count();
    assert_eq!(hits, 0);
}

#[test]
fn node_reflects_once_per_crossing() {
    let vp = Viewport::new(100.0, 100.0);
    let mut n = quiet_node(Vec2::new(99.95, 50.0), Vec2::new(0.1, 0.0));
    n.step(vp);
    assert!(n.pos.x > 100.0);
    assert!(n.vel.x < 0.0, "velocity flips on crossing the right edge");
    n.step(vp);
    assert!(n.vel.x < 0.0, "already heading back, must not flip again");
    assert!(n.pos.x <= 100.0);

    let mut n = quiet_node(Vec2::new(50.0, 0.05), Vec2::new(0.0, -0.1));
    n.step(vp);
    assert!(n.vel.y > 0.0);
    assert_eq!(n.vel.x, 0.0);
}

#[test]
fn pulse_advances_each_frame() {
    let mut n = quiet_node(Vec2::new(10.0, 10.0), Vec2::ZERO);
    n.step(Viewport::new(100.0, 100.0));
    n.step(Viewport::new(100.0, 100.0));
    assert!((n.pulse - 2.0 * PULSE_STEP).abs() < 1e-6);
}

#[test]
fn influence_falls_off_linearly() {
    let mut n = quiet_node(Vec2::new(0.0, 0.0), Vec2::ZERO);
    n.refresh_influence(None);
    assert_eq!(n.influence, 0.0);
    n.refresh_influence(Some(Vec2::new(0.0, 0.0)));
    assert!((n.influence - 1.0).abs() < 1e-6);
    n.refresh_influence(Some(Vec2::new(75.0, 0.0)));
    assert!((n.influence - 0.5).abs() < 1e-6);
    n.refresh_influence(Some(Vec2::new(150.0, 0.0)));
    assert_eq!(n.influence, 0.0);

    let idle = quiet_node(Vec2::ZERO, Vec2::ZERO);
    let mut near = idle.clone();
    near.influence = 0.5;
    assert!((near.render_radius() - idle.render_radius() * 2.0).abs() < 1e-5);
    assert_eq!(idle.glow(), NODE_GLOW);
    assert!((near.glow() - 25.0).abs() < 1e-5);
}

#[test]
fn render_radius_never_collapses() {
    let mut n = quiet_node(Vec2::ZERO, Vec2::ZERO);
    n.radius = 1.5;
    n.is_flag = true;
    n.pulse = -std::f32::consts::FRAC_PI_2;
    assert_eq!(n.render_radius(), NODE_RADIUS_FLOOR);
}

#[test]
fn pointer_on_flag_captures_it() {
    let mut state = make_scene(150, 10, 11);
    let before = state.flagged_index().expect("one node is flagged");
    state.set_pointer(Some(state.nodes[before].pos));
    state.update();

    assert_eq!(state.ripples.len(), 1);
    let ripple = &state.ripples[0];
    assert!(ripple.origin.distance(state.nodes[before].pos) < 1e-4);
    assert!(!state.nodes[before].is_flag);
    let after = state.flagged_index().expect("flag moved to another node");
    assert_ne!(after, before);
    assert_eq!(flag_count(&state), 1);
}

#[test]
fn flag_count_stays_one_while_chasing() {
    let mut state = make_scene(40, 5, 21);
    let mut captures = 0;
    for _ in 0..200 {
        let flagged = state.flagged_index().unwrap();
        state.set_pointer(Some(state.nodes[flagged].pos));
        let ripples_before = state.ripples.len();
        state.update();
        assert_eq!(flag_count(&state), 1);
        if state.ripples.len() > ripples_before {
            captures += 1;
        }
    }
    assert!(captures > 0);
}

#[test]
fn distant_pointer_leaves_flag_alone() {
    let mut state = make_scene(1, 0, 2);
    let pos = state.nodes[0].pos;
    state.set_pointer(Some(pos + Vec2::new(CAPTURE_RADIUS + 5.0, 0.0)));
    state.update();
    assert!(state.ripples.is_empty());
    assert!(state.nodes[0].is_flag);
}

#[test]
fn capture_needs_pointer_strictly_inside_radius() {
    let mut state = make_scene(5, 0, 17);
    let flagged = state.flagged_index().unwrap();
    state.nodes[flagged].pos = Vec2::new(100.0, 100.0);
    state.nodes[flagged].vel = Vec2::ZERO;

    state.set_pointer(Some(Vec2::new(100.0 + CAPTURE_RADIUS, 100.0)));
    state.update();
    assert!(state.ripples.is_empty(), "pointer on the capture boundary");
    assert_eq!(state.flagged_index(), Some(flagged));

    state.set_pointer(Some(Vec2::new(119.9, 100.0)));
    state.update();
    assert_eq!(state.ripples.len(), 1);
    assert_eq!(state.ripples[0].origin, Vec2::new(100.0, 100.0));
    assert_ne!(state.flagged_index(), Some(flagged));
    assert_eq!(flag_count(&state), 1);
}

#[test]
fn packets_reset_in_the_same_step() {
    let mut state = make_scene(30, 20, 9);
    state.packets[0].progress = 0.999;
    state.packets[0].speed = 0.01;
    let tint = state.packets[0].tint;
    state.update();
    assert_eq!(state.packets[0].progress, 0.0);
    assert_eq!(state.packets[0].tint, tint, "tint survives a reset");

    for _ in 0..1000 {
        state.update();
        for p in &state.packets {
            assert!((0.0..1.0).contains(&p.progress), "progress {}", p.progress);
        }
    }
}

#[test]
fn packet_path_is_a_snapshot() {
    let mut state = make_scene(10, 4, 4);
    let (start, end) = (state.packets[0].start, state.packets[0].end);
    for n in &mut state.nodes {
        n.pos += Vec2::new(50.0, 50.0);
    }
    state.packets[0].speed = 0.001;
    state.update();
    assert_eq!(state.packets[0].start, start);
    assert_eq!(state.packets[0].end, end);
}

#[test]
fn ripples_fade_and_are_pruned() {
    let mut state = make_scene(2, 0, 8);
    state.ripples.push(Ripple::new(Vec2::new(5.0, 5.0)));
    let mut last_life = 1.0;
    let mut frames = 0;
    while !state.ripples.is_empty() {
        state.update();
        frames += 1;
        for r in &state.ripples {
            assert!(r.life > 0.0, "dead ripple kept in the pool");
            assert!(r.life <= last_life);
            last_life = r.life;
        }
        assert!(frames < 100);
    }
    assert!((49..=51).contains(&frames), "ripple lived {frames} frames");
}

#[test]
fn resize_replaces_the_pool() {
    let mut state = make_scene(50, 10, 13);
    state.ripples.push(Ripple::new(Vec2::ZERO));
    let old_first = state.nodes[0].pos;
    state.resize(Viewport::new(320.0, 200.0));

    assert_eq!(state.viewport, Viewport::new(320.0, 200.0));
    assert_eq!(state.nodes.len(), 50);
    assert_eq!(state.packets.len(), 10);
    assert!(state.ripples.is_empty());
    assert_eq!(flag_count(&state), 1);
    assert!(state.nodes.iter().all(|n| state.viewport.contains(n.pos)));
    assert_ne!(state.nodes[0].pos, old_first);
}

#[test]
fn nearest_node_needs_a_pointer() {
    let mut state = make_scene(3, 0, 1);
    assert_eq!(state.nearest_to_pointer(), None);
    state.nodes[0].pos = Vec2::new(10.0, 10.0);
    state.nodes[1].pos = Vec2::new(500.0, 500.0);
    state.nodes[2].pos = Vec2::new(900.0, 100.0);
    state.set_pointer(Some(Vec2::new(480.0, 470.0)));
    assert_eq!(state.nearest_to_pointer(), Some(1));
}

#[test]
fn same_seed_same_scene() {
    let a = make_scene(25, 5, 99);
    let b = make_scene(25, 5, 99);
    for (x, y) in a.nodes.iter().zip(&b.nodes) {
        assert_eq!(x.pos, y.pos);
    }
    assert_eq!(a.flagged_index(), b.flagged_index());
}
