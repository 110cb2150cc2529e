//! One curtain half: a pinned-top particle grid with neighbor constraints.

use alloc::vec::Vec;

use crate::config::CurtainConfig;
use crate::constraint::DistanceConstraint;
use crate::error::CurtainError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::solver::{self, StepContext};
use crate::vec::Vec2;

/// Upper bound on particles per panel.
pub const MAX_CELLS: usize = 1 << 22;

/// `cols = ceil(half_width/spacing) + 1`, `rows = ceil(height/spacing) + 2`,
/// or `None` when the grid would not fit in [`MAX_CELLS`].
fn grid_dimensions<F: Float>(half_width: F, height: F, spacing: F) -> Option<(usize, usize)> {
    let cols = (half_width / spacing).ceil().to_usize().checked_add(1)?;
    let rows = (height / spacing).ceil().to_usize().checked_add(2)?;
    let cells = cols.checked_mul(rows)?;
    (cells <= MAX_CELLS).then_some((cols, rows))
}

/// Which half of the viewport a panel covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Commands that retarget a panel's pinned row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelCommand {
    Open,
    Close,
}

/// A cloth panel built from a grid of Verlet particles.
///
/// Particle at (col, row) has index `row * cols + col`. Row 0 is pinned to
/// the rod. Only horizontal and vertical neighbors are constrained; there is
/// no shear or bend bracing, so the cloth folds and shears freely.
#[derive(Clone, Debug)]
pub struct Panel<F: Float> {
    side: Side,
    cols: usize,
    rows: usize,
    spacing: F,
    start_x: F,
    outer_x: F,
    rod_y: F,
    particles: Vec<Particle<F>>,
    constraints: Vec<DistanceConstraint<F>>,
    horizontal: usize,
}

impl<F: Float> Panel<F> {
    /// A panel with no particles.
    pub fn empty(side: Side) -> Self {
        Panel {
            side,
            cols: 0,
            rows: 0,
            spacing: F::zero(),
            start_x: F::zero(),
            outer_x: F::zero(),
            rod_y: F::zero(),
            particles: Vec::new(),
            constraints: Vec::new(),
            horizontal: 0,
        }
    }

    /// Build the panel for `side` of a `width` x `height` viewport.
    ///
    /// The left panel spans `[0, width/2]`, the right `[width/2, width]`.
    /// With `spacing` s and half width h: `cols = ceil(h/s) + 1`,
    /// `rows = ceil(height/s) + 2`. Every particle starts at rest.
    ///
    /// Non-positive dimensions, or a spacing that is not a positive finite
    /// number, produce an empty panel. So does a grid of more than
    /// [`MAX_CELLS`] particles.
    pub fn build(side: Side, width: F, height: F, config: &CurtainConfig<F>) -> Self {
        let spacing = config.spacing;
        // NaN fails every comparison, so it lands here too.
        let usable = width > F::zero()
            && height > F::zero()
            && width.is_finite()
            && height.is_finite()
            && spacing > F::zero()
            && spacing.is_finite();
        if !usable {
            log::warn!(
                "{:?} panel left empty: viewport {}x{}, spacing {}",
                side,
                width,
                height,
                spacing
            );
            return Self::empty(side);
        }

        let half_width = width * F::half();
        let Some((cols, rows)) = grid_dimensions(half_width, height, spacing) else {
            log::warn!(
                "{:?} panel left empty: {}x{} viewport at spacing {} exceeds {} cells",
                side,
                width,
                height,
                spacing,
                MAX_CELLS
            );
            return Self::empty(side);
        };
        let (start_x, outer_x) = match side {
            Side::Left => (F::zero(), F::zero()),
            Side::Right => (half_width, width),
        };

        let mut panel = Panel {
            side,
            cols,
            rows,
            spacing,
            start_x,
            outer_x,
            rod_y: config.rod_y,
            particles: Vec::with_capacity(cols * rows),
            constraints: Vec::with_capacity(rows * (cols - 1) + (rows - 1) * cols),
            horizontal: 0,
        };

        for row in 0..rows {
            for col in 0..cols {
                let pos = panel.grid_point(col, row);
                let particle = if row == 0 {
                    Particle::pinned(pos)
                } else {
                    Particle::new(pos)
                };
                panel.particles.push(particle);

                let index = row * cols + col;
                if col > 0 {
                    let left = index - 1;
                    panel
                        .constraints
                        .push(DistanceConstraint::from_particles(left, index, &panel.particles));
                    panel.horizontal += 1;
                }
                if row > 0 {
                    let above = index - cols;
                    panel
                        .constraints
                        .push(DistanceConstraint::from_particles(above, index, &panel.particles));
                }
            }
        }

        log::debug!(
            "built {:?} panel: {}x{} particles, {} constraints",
            side,
            cols,
            rows,
            panel.constraints.len()
        );
        panel
    }

    /// Spawn position of grid cell (col, row).
    fn grid_point(&self, col: usize, row: usize) -> Vec2<F> {
        Vec2::new(
            self.start_x + F::from_usize(col) * self.spacing,
            self.rod_y + F::from_usize(row) * self.spacing,
        )
    }

    /// Gather the pinned row past the panel's outer edge.
    ///
    /// Column `x` gets `ratio = x/cols` on the left side and `1 - x/cols` on
    /// the right, so the ratio grows toward the middle of the viewport.
    /// Targets are laid out linearly in `ratio`: the outermost pin sits a
    /// full `bunch_width` beyond the edge, the innermost closest to it and
    /// lifted by up to `lift`.
    pub fn open(&mut self, config: &CurtainConfig<F>) {
        let cols = F::from_usize(self.cols);
        let direction = match self.side {
            Side::Left => -F::one(),
            Side::Right => F::one(),
        };
        for (col, p) in self.particles.iter_mut().take(self.cols).enumerate() {
            let x = F::from_usize(col) / cols;
            let ratio = match self.side {
                Side::Left => x,
                Side::Right => F::one() - x,
            };
            p.target = Vec2::new(
                self.outer_x + direction * config.bunch_width * (F::one() - ratio),
                self.rod_y - config.lift * ratio,
            );
        }
        log::debug!("{:?} panel opening", self.side);
    }

    /// Send every pin back to the exact coordinate it was built at.
    pub fn close(&mut self) {
        for col in 0..self.cols {
            let home = self.grid_point(col, 0);
            self.particles[col].target = home;
        }
        log::debug!("{:?} panel closing", self.side);
    }

    pub fn apply(&mut self, command: PanelCommand, config: &CurtainConfig<F>) {
        match command {
            PanelCommand::Open => self.open(config),
            PanelCommand::Close => self.close(),
        }
    }

    /// Advance the panel by one tick.
    pub fn step<O: StepObserver>(&mut self, ctx: &StepContext<'_, F>, observer: &mut O) {
        solver::step(&mut self.particles, &self.constraints, ctx, observer);
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn index_checked(&self, col: usize, row: usize) -> Result<usize, CurtainError> {
        if col >= self.cols || row >= self.rows {
            return Err(CurtainError::CellOutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.index(col, row))
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    /// Row-major particle positions, ready for a renderer.
    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Positions of the pinned row (the rod line).
    pub fn pinned_row(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.particles.iter().take(self.cols).map(|p| p.pos)
    }

    /// Largest remaining distance between a pin and its target.
    pub fn max_target_distance(&self) -> F {
        self.particles
            .iter()
            .filter(|p| p.pinned)
            .map(|p| p.pos.distance(p.target))
            .fold(F::zero(), F::max)
    }

    pub fn side(&self) -> Side { self.side }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn horizontal_count(&self) -> usize { self.horizontal }
    pub fn vertical_count(&self) -> usize { self.constraints.len() - self.horizontal }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
}
