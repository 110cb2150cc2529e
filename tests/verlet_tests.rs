use drapery::solver::{self, StepContext};
use drapery::{
    Curtain, CurtainConfig, DistanceConstraint, NoOpStepObserver, Panel, Particle, PointerState,
    Side, Vec2,
};

#[test]
fn one_pass_reduces_length_error() {
    let cases = [
        (Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0), 1.0),
        (Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 0.5),
        (Vec2::new(-2.0, 7.0), Vec2::new(1.0, -9.0), 0.1),
        (Vec2::new(10.0, 10.0), Vec2::new(10.5, 10.0), 0.9),
        (Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0), 0.01),
    ];
    for (a, b, stiffness) in cases {
        let mut particles = [Particle::new(a), Particle::new(b)];
        let c = DistanceConstraint::new(0, 1, 15.0f64);
        let before = (c.current_length(&particles) - c.rest_length()).abs();
        c.solve(&mut particles, stiffness);
        let after = (c.current_length(&particles) - c.rest_length()).abs();
        assert!(
            after < before,
            "stiffness {}: error {} did not drop below {}",
            stiffness, after, before
        );
    }
}

#[test]
fn pinned_easing_decays_geometrically() {
    let config = CurtainConfig::new().with_opening_speed(0.1f64);
    let mut panel = Panel::build(Side::Right, 400.0, 120.0, &config);
    panel.open(&config);

    let initial: Vec<f64> = panel.pinned_row_distances();
    let ctx = StepContext::new(PointerState::inactive(), &config);
    for n in 1..=50 {
        panel.step(&ctx, &mut NoOpStepObserver);
        let expected_factor = (1.0 - config.opening_speed).powi(n);
        for (col, d) in panel.pinned_row_distances().into_iter().enumerate() {
            let expected = initial[col] * expected_factor;
            assert!(
                (d - expected).abs() <= 1e-9 * initial[col].max(1.0),
                "tick {} col {}: distance {} expected {}",
                n, col, d, expected
            );
        }
    }
}

#[test]
fn close_resets_targets_exactly() {
    let config = CurtainConfig::new().with_spacing(13.7f32).with_rod_y(-3.3);
    let mut panel = Panel::build(Side::Left, 517.0, 333.0, &config);
    let home: Vec<Vec2<f32>> = panel.pinned_row().collect();

    panel.open(&config);
    let ctx = StepContext::new(PointerState::new(100.0, 50.0, true), &config);
    for _ in 0..25 {
        panel.step(&ctx, &mut NoOpStepObserver);
    }
    panel.close();

    for (col, expected) in home.iter().enumerate() {
        let target = panel.particle(col).target;
        assert_eq!(target.x.to_bits(), expected.x.to_bits(), "col {}", col);
        assert_eq!(target.y.to_bits(), expected.y.to_bits(), "col {}", col);
    }
}

#[test]
fn pointer_push_falls_off_linearly() {
    let radius = 50.0f64;
    let strength = 6.0;
    let config = CurtainConfig::new()
        .with_gravity(0.0)
        .with_friction(0.0)
        .with_mouse(radius, strength);
    let pointer = PointerState::new(0.0, 0.0, true);
    let ctx = StepContext::new(pointer, &config);

    let displacement = |d: f64| {
        let mut particles = [Particle::new(Vec2::new(d, 0.0))];
        solver::integrate(&mut particles, &ctx);
        // Zero friction drops the implied velocity, leaving only the push.
        particles[0].pos.distance(Vec2::new(d, 0.0))
    };

    let mut previous = f64::INFINITY;
    let mut d = 0.0;
    while d < radius {
        let moved = displacement(d);
        assert!(moved < previous, "push at {} ({}) not below push at smaller distance ({})", d, moved, previous);
        assert!((moved - strength * (1.0 - d / radius)).abs() < 1e-9);
        previous = moved;
        d += 2.5;
    }
    assert!(previous > 0.0);
    for d in [radius, radius + 0.001, 2.0 * radius] {
        assert_eq!(displacement(d), 0.0, "no push expected at {}", d);
    }
}

#[test]
fn closed_curtain_drapes_under_gravity() {
    let config = CurtainConfig::new().with_spacing(10.0f32).with_gravity(0.5);
    let mut curtain = Curtain::new(100.0, 60.0, config);
    let left = curtain.panel(Side::Left);
    let bottom = left.rows() - 1;
    let top_initial: Vec<_> = left.pinned_row().collect();
    let bottom_initial: Vec<_> = (0..left.cols()).map(|c| left.position_at(c, bottom)).collect();

    for _ in 0..120 {
        curtain.step(&mut NoOpStepObserver);
    }

    let left = curtain.panel(Side::Left);
    for (col, init) in top_initial.iter().enumerate() {
        assert_eq!(left.position_at(col, 0), *init, "pin {} should hold", col);
    }
    for (col, init) in bottom_initial.iter().enumerate() {
        let pos = left.position_at(col, bottom);
        assert!(pos.y > init.y, "bottom col {} should sag below {}, got {}", col, init.y, pos.y);
        assert!(pos.is_finite());
    }
}

#[test]
fn opening_gathers_panels_outward() {
    let config = CurtainConfig::new().with_spacing(15.0f64);
    let mut curtain = Curtain::new(600.0, 300.0, config);
    let mean_x = |curtain: &Curtain<f64>, side: Side| {
        let panel = curtain.panel(side);
        let bottom = panel.rows() - 1;
        (0..panel.cols()).map(|c| panel.position_at(c, bottom).x).sum::<f64>() / panel.cols() as f64
    };
    let left_before = mean_x(&curtain, Side::Left);
    let right_before = mean_x(&curtain, Side::Right);

    curtain.open();
    for _ in 0..600 {
        curtain.step(&mut NoOpStepObserver);
    }

    assert!(curtain.is_settled(1e-6));
    assert!(mean_x(&curtain, Side::Left) < left_before);
    assert!(mean_x(&curtain, Side::Right) > right_before);
    for frame in curtain.frames() {
        assert!(frame.positions.iter().all(|p| p.is_finite()));
    }

    curtain.close();
    for _ in 0..600 {
        curtain.step(&mut NoOpStepObserver);
    }
    assert!(curtain.is_settled(1e-6));
    assert!((curtain.panel(Side::Right).position_at(0, 0).x - 300.0).abs() < 1e-6);
}

trait PinnedDistances {
    fn pinned_row_distances(&self) -> Vec<f64>;
}

impl PinnedDistances for Panel<f64> {
    fn pinned_row_distances(&self) -> Vec<f64> {
        self.particles()
            .iter()
            .take(self.cols())
            .map(|p| p.pos.distance(p.target))
            .collect()
    }
}
