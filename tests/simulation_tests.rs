// Host-side tests for the per-frame step, resize handling and depth opacity.

use glam::DVec3;
use parallax_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn card_at(x: f64, y: f64, z: f64) -> Card {
    Card {
        position: DVec3::new(x, y, z),
        rotation: DVec3::new(10.0, 0.0, 20.0),
        velocity: DVec3::new(0.2, 0.004, -0.002),
        rot_speed: 0.01,
        image: "a".into(),
        placement_attempts: 1,
    }
}

fn single_card_sim(card: Card) -> Simulation {
    Simulation::with_cards(
        ParallaxConfig::default(),
        Viewport::new(1000.0, 800.0),
        vec![card],
    )
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn new_places_configured_card_count() {
    let config = ParallaxConfig {
        card_count: 3,
        images: vec!["a".into(), "b".into(), "c".into()],
        ..ParallaxConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let sim = Simulation::new(config, Viewport::new(1280.0, 720.0), &mut rng);
    assert_eq!(sim.cards.len(), 3);
    let images: Vec<_> = sim.cards.iter().map(|c| c.image.as_str()).collect();
    assert_eq!(images, ["a", "b", "c"]);
    assert_eq!(sim.scroll, ScrollState::default());
    assert_eq!(sim.frames(), 0);
}

#[test]
fn step_integrates_and_emits_one_visual_per_card() {
    let mut sim = single_card_sim(card_at(100.0, 400.0, 50.0));
    let mut out = Vec::new();
    sim.step(FRAME, &mut out);
    assert_eq!(out.len(), 1);

    let card = &sim.cards[0];
    assert!(approx(card.position.x, 100.2));
    assert!(approx(card.position.y, 400.004));
    assert!(approx(card.position.z, 49.998));
    assert!(approx(card.rotation.x, 10.35));
    assert_eq!(card.rotation.y, 0.0);
    assert!(approx(card.rotation.z, 20.1));

    let v = out[0];
    assert!(approx(v.translate.x, 100.2));
    assert!(approx(v.translate.z, 49.998));
    assert_eq!(v.rot_y, 0.0);
    assert!(approx(v.opacity, 1.0 - 49.998 / 1000.0));
}

#[test]
fn scroll_only_shifts_render_y() {
    let mut sim = single_card_sim(card_at(0.0, 400.0, 0.0));
    sim.set_scroll_target(100.0);
    let mut out = Vec::new();

    sim.step(FRAME, &mut out);
    assert!(approx(sim.scroll.current, 8.0));
    // Parallax uses y from before this frame's drift.
    assert!(approx(out[0].translate.y, 400.0 - 8.0 * 0.08));
    assert!(approx(sim.cards[0].position.y, 400.004));

    sim.step(FRAME, &mut out);
    assert!(approx(sim.scroll.current, 15.36));
    assert!(approx(out[0].translate.y, 400.004 - 15.36 * 0.08));
}

#[test]
fn elapsed_time_does_not_change_motion() {
    let mut fast = single_card_sim(card_at(10.0, 10.0, 10.0));
    let mut slow = single_card_sim(card_at(10.0, 10.0, 10.0));
    let (mut a, mut b) = (Vec::new(), Vec::new());
    for _ in 0..5 {
        fast.step(Duration::from_millis(4), &mut a);
        slow.step(Duration::from_millis(100), &mut b);
    }
    assert_eq!(a, b);
    assert_eq!(fast.frames(), 5);
    assert_eq!(slow.elapsed(), Duration::from_millis(500));
}

#[test]
fn opacity_stays_between_point_seven_and_one() {
    assert_eq!(depth_opacity(0.0), 1.0);
    assert!(approx(depth_opacity(250.0), 0.75));
    assert!(approx(depth_opacity(-250.0), 0.75));
    for z in [-1.0e9_f64, -5000.0, -300.0, -1.0, 0.5, 299.0, 301.0, 1.0e9] {
        let o = depth_opacity(z);
        assert!((0.7 - 1e-6..=1.0).contains(&o), "z={z} gave {o}");
    }
    assert!(approx(depth_opacity(1.0e9), 0.7));
}

#[test]
fn resize_clamps_x_into_margin() {
    let mut sim = Simulation::with_cards(
        ParallaxConfig::default(),
        Viewport::new(1000.0, 800.0),
        vec![
            card_at(-500.0, 0.0, 0.0),
            card_at(50.0, 0.0, 0.0),
            card_at(5000.0, 0.0, 0.0),
        ],
    );
    sim.resize(Viewport::new(1000.0, 600.0));
    assert_eq!(sim.cards[0].position.x, -300.0);
    assert_eq!(sim.cards[1].position.x, 50.0);
    assert_eq!(sim.cards[2].position.x, 1300.0);
    assert_eq!(sim.viewport(), Viewport::new(1000.0, 600.0));
}

#[test]
fn clamp_x_bounds() {
    assert_eq!(clamp_x(-500.0, 800.0), -300.0);
    assert_eq!(clamp_x(50.0, 800.0), 50.0);
    assert_eq!(clamp_x(1100.0, 800.0), 1100.0);
    assert_eq!(clamp_x(1101.0, 800.0), 1100.0);
}

#[test]
fn initial_visual_carries_all_rotations() {
    let card = card_at(1.0, 2.0, 3.0);
    let v = card.initial_visual();
    assert_eq!(v.translate, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(v.rotation, DVec3::new(10.0, 0.0, 20.0));
}

#[test]
fn virtual_height_scales_viewport() {
    assert_eq!(Viewport::new(1280.0, 800.0).virtual_height(5.0), 4000.0);
}

#[test]
fn slow_drift_accumulates_deep_in_virtual_space() {
    let mut card = card_at(100.0, 4500.0, 0.0);
    card.velocity = DVec3::new(0.0, 0.0002, 0.0);
    let mut sim = single_card_sim(card);
    let mut out = Vec::new();
    for _ in 0..3600 {
        sim.step(FRAME, &mut out);
    }
    let y = sim.cards[0].position.y;
    assert!((y - 4500.72).abs() < 1e-6, "y={y}");
}
