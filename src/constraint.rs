//! Distance constraints between grid neighbors.

use crate::error::CurtainError;
use crate::float::Float;
use crate::particle::Particle;

/// Keeps two particles of the same panel near a fixed rest length.
///
/// Endpoints are indices into the panel's particle list. The rest length is
/// captured once, when the constraint is created.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
}

/// What a single constraint visit did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    Applied,
    /// Endpoints coincide; no direction to correct along.
    Degenerate,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Capture the current distance between `a` and `b` as the rest length.
    ///
    /// Panics if either index is out of bounds; see [`between`](Self::between).
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        DistanceConstraint { a, b, rest_length }
    }

    /// Checked variant of [`from_particles`](Self::from_particles).
    pub fn between(a: usize, b: usize, particles: &[Particle<F>]) -> Result<Self, CurtainError> {
        let count = particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(CurtainError::ParticleOutOfBounds { index, count });
            }
        }
        Ok(Self::from_particles(a, b, particles))
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Current distance between the endpoints.
    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// Move the endpoints toward the rest length.
    ///
    /// Each free endpoint takes half of the correction. A pinned endpoint
    /// does not move and its half is dropped, so a constraint with one
    /// pinned end closes only half the gap per visit.
    pub fn solve(&self, particles: &mut [Particle<F>], stiffness: F) -> Relaxation {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return Relaxation::Degenerate;
        }

        let correction = (self.rest_length - dist) / dist * stiffness;
        let offset = delta.scale(correction * F::half());

        if !particles[self.a].pinned {
            particles[self.a].pos -= offset;
        }
        if !particles[self.b].pinned {
            particles[self.b].pos += offset;
        }
        Relaxation::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn rest_length_captured_at_creation() {
        let particles = [
            Particle::new(Vec2::new(0.0f32, 0.0)),
            Particle::new(Vec2::new(3.0, 4.0)),
        ];
        let c = DistanceConstraint::from_particles(0, 1, &particles);
        assert_eq!(c.rest_length(), 5.0);
    }

    #[test]
    fn between_rejects_bad_index() {
        let particles = [Particle::new(Vec2::new(0.0f32, 0.0))];
        assert_eq!(
            DistanceConstraint::between(0, 3, &particles),
            Err(CurtainError::ParticleOutOfBounds { index: 3, count: 1 })
        );
    }

    #[test]
    fn full_stiffness_restores_rest_length() {
        let mut particles = [
            Particle::new(Vec2::new(0.0f64, 0.0)),
            Particle::new(Vec2::new(20.0, 0.0)),
        ];
        let c = DistanceConstraint::new(0, 1, 10.0);
        assert_eq!(c.solve(&mut particles, 1.0), Relaxation::Applied);
        assert_eq!(particles[0].pos, Vec2::new(5.0, 0.0));
        assert_eq!(particles[1].pos, Vec2::new(15.0, 0.0));
    }

    #[test]
    fn pinned_endpoint_half_is_dropped() {
        let mut particles = [
            Particle::pinned(Vec2::new(0.0f64, 0.0)),
            Particle::new(Vec2::new(20.0, 0.0)),
        ];
        let c = DistanceConstraint::new(0, 1, 10.0);
        c.solve(&mut particles, 1.0);
        assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
        // Only half of the 10 unit error is corrected.
        assert_eq!(particles[1].pos, Vec2::new(15.0, 0.0));
    }

    #[test]
    fn coincident_endpoints_are_left_alone() {
        let mut particles = [
            Particle::new(Vec2::new(1.0f32, 1.0)),
            Particle::new(Vec2::new(1.0, 1.0)),
        ];
        let c = DistanceConstraint::new(0, 1, 15.0);
        assert_eq!(c.solve(&mut particles, 1.0), Relaxation::Degenerate);
        assert!(particles.iter().all(|p| p.pos == Vec2::new(1.0, 1.0)));
    }
}
