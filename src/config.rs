//! Tuning parameters for the curtain simulation.

use crate::error::CurtainError;
use crate::float::Float;

/// Configuration shared by both panels.
///
/// Every value is used as given; the solver performs no clamping. Hosts
/// that accept user input can call [`validate`](Self::validate) first.
///
/// # Builder Pattern
/// ```
/// use drapery::config::CurtainConfig;
///
/// let config: CurtainConfig<f32> = CurtainConfig::new()
///     .with_spacing(12.0)
///     .with_gravity(0.3)
///     .with_iterations(8)
///     .with_opening_speed(0.08);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurtainConfig<F: Float> {
    /// Downward offset added to every free particle each tick. Default: 0.4.
    pub gravity: F,
    /// Multiplier on the implied velocity. 1.0 = no damping. Default: 0.97.
    pub friction: F,
    /// Rest distance between grid neighbors. Default: 15.
    pub spacing: F,
    /// Fraction of the length error corrected per constraint visit. Default: 1.0.
    pub stiffness: F,
    /// Fraction of the gap to its target a pinned particle closes per tick. Default: 0.06.
    pub opening_speed: F,
    /// Pointer influence radius. Default: 80.
    pub mouse_radius: F,
    /// Displacement applied right under the pointer. Default: 4.
    pub mouse_strength: F,
    /// Constraint relaxation passes per tick. Default: 5.
    pub iterations: usize,
    /// y coordinate of the pinned row. Default: 0.
    pub rod_y: F,
    /// Horizontal extent a fully gathered panel occupies past its outer edge. Default: 40.
    pub bunch_width: F,
    /// Upward lift of the innermost gathered pin. Default: 10.
    pub lift: F,
}

impl<F: Float> CurtainConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        CurtainConfig {
            gravity: F::from_f64(0.4),
            friction: F::from_f64(0.97),
            spacing: F::from_f64(15.0),
            stiffness: F::one(),
            opening_speed: F::from_f64(0.06),
            mouse_radius: F::from_f64(80.0),
            mouse_strength: F::from_f64(4.0),
            iterations: 5,
            rod_y: F::zero(),
            bunch_width: F::from_f64(40.0),
            lift: F::from_f64(10.0),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_opening_speed(mut self, opening_speed: F) -> Self {
        self.opening_speed = opening_speed;
        self
    }

    /// Set the pointer radius and the displacement at its center.
    pub fn with_mouse(mut self, radius: F, strength: F) -> Self {
        self.mouse_radius = radius;
        self.mouse_strength = strength;
        self
    }

    /// Set the number of relaxation passes per tick.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_rod_y(mut self, rod_y: F) -> Self {
        self.rod_y = rod_y;
        self
    }

    /// Set the geometry of the gathered (open) pose.
    pub fn with_open_pose(mut self, bunch_width: F, lift: F) -> Self {
        self.bunch_width = bunch_width;
        self.lift = lift;
        self
    }

    /// Check the values against the ranges the solver behaves well in.
    ///
    /// Never called by the solver itself.
    pub fn validate(&self) -> Result<(), CurtainError> {
        let finite = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("spacing", self.spacing),
            ("stiffness", self.stiffness),
            ("opening_speed", self.opening_speed),
            ("mouse_radius", self.mouse_radius),
            ("mouse_strength", self.mouse_strength),
            ("rod_y", self.rod_y),
            ("bunch_width", self.bunch_width),
            ("lift", self.lift),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CurtainError::InvalidConfig { field, reason: "must be finite" });
            }
        }
        if self.spacing <= F::zero() {
            return Err(CurtainError::InvalidConfig { field: "spacing", reason: "must be positive" });
        }
        let unit = [
            ("friction", self.friction),
            ("stiffness", self.stiffness),
            ("opening_speed", self.opening_speed),
        ];
        for (field, value) in unit {
            if value < F::zero() || value > F::one() {
                return Err(CurtainError::InvalidConfig { field, reason: "must be in [0, 1]" });
            }
        }
        if self.mouse_radius < F::zero() {
            return Err(CurtainError::InvalidConfig {
                field: "mouse_radius",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

impl<F: Float> Default for CurtainConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
