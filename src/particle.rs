//! Verlet point masses: free cloth particles and eased rod particles.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle with implicit velocity (`pos - prev_pos`).
///
/// Pinned particles carry a `target` and are eased toward it instead of
/// being integrated. Free particles keep their `target` equal to their
/// spawn position; it is never read for them.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
    pub target: Vec2<F>,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            pinned: false,
            target: pos,
        }
    }

    /// A pinned particle at rest whose target is its spawn position.
    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle {
            pinned: true,
            ..Particle::new(pos)
        }
    }

    /// Move a fixed fraction of the remaining distance toward `target`.
    ///
    /// After `n` calls with a constant target the remaining distance is
    /// `d0 * (1 - speed)^n`.
    pub fn ease_toward_target(&mut self, speed: F) {
        self.prev_pos = self.pos;
        self.pos += (self.target - self.pos).scale(speed);
    }

    /// Push the particle away from `pointer` if it lies inside `radius`.
    ///
    /// The offset is applied to the position, not the velocity, and has
    /// magnitude `strength * (1 - d / radius)`. Returns true if the particle
    /// was moved.
    pub fn repel_from(&mut self, pointer: Vec2<F>, radius: F, strength: F) -> bool {
        let delta = self.pos - pointer;
        let dist = delta.length();
        if dist >= radius || !dist.is_finite() {
            return false;
        }
        let falloff = strength * (F::one() - dist / radius);
        // Exactly under the pointer there is no direction to push along.
        let dir = if dist > F::zero() {
            delta.scale(F::one() / dist)
        } else {
            Vec2::new(F::zero(), F::one())
        };
        self.pos += dir.scale(falloff);
        true
    }

    /// Verlet step: damped implied velocity, then gravity as a positional
    /// offset on y.
    pub fn integrate(&mut self, friction: F, gravity: F) {
        let velocity = (self.pos - self.prev_pos).scale(friction);
        self.prev_pos = self.pos;
        self.pos += velocity;
        self.pos.y = self.pos.y + gravity;
    }
}
