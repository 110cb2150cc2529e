//! Per-tick physics: constraint relaxation followed by particle integration.

use crate::config::CurtainConfig;
use crate::constraint::{DistanceConstraint, Relaxation};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::pointer::PointerState;

/// Everything a tick reads besides the panel itself.
#[derive(Copy, Clone, Debug)]
pub struct StepContext<'a, F: Float> {
    pub pointer: PointerState<F>,
    pub config: &'a CurtainConfig<F>,
}

impl<'a, F: Float> StepContext<'a, F> {
    pub fn new(pointer: PointerState<F>, config: &'a CurtainConfig<F>) -> Self {
        StepContext { pointer, config }
    }
}

/// Gauss-Seidel relaxation: `passes` sweeps over `constraints` in order,
/// each seeing the positions left by the previous constraint.
pub fn relax<F: Float, O: StepObserver>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    stiffness: F,
    passes: usize,
    observer: &mut O,
) {
    for pass in 0..passes {
        for (index, c) in constraints.iter().enumerate() {
            if c.solve(particles, stiffness) == Relaxation::Degenerate {
                observer.on_degenerate_constraint(index);
            }
        }
        observer.on_relaxation_pass(pass);
    }
}

/// Advance every particle by one tick.
///
/// Pinned particles only ease toward their targets. Free particles are
/// pushed by an active pointer, then Verlet-integrated with gravity.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], ctx: &StepContext<'_, F>) {
    let config = ctx.config;
    for p in particles.iter_mut() {
        if p.pinned {
            p.ease_toward_target(config.opening_speed);
            continue;
        }
        if ctx.pointer.active {
            p.repel_from(ctx.pointer.position, config.mouse_radius, config.mouse_strength);
        }
        p.integrate(config.friction, config.gravity);
    }
}

/// One full tick over a particle set: relaxation, then integration.
pub fn step<F: Float, O: StepObserver>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    ctx: &StepContext<'_, F>,
    observer: &mut O,
) {
    relax(particles, constraints, ctx.config.stiffness, ctx.config.iterations, observer);
    integrate(particles, ctx);
    observer.on_integrate();
}
