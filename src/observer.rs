//! Step observer trait for monitoring curtain ticks.

/// Trait for observing simulation ticks.
///
/// Implement this to monitor solver progress (debugging, visualization,
/// profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after each relaxation pass over a panel's constraints.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a constraint was skipped because its endpoints coincide.
    fn on_degenerate_constraint(&mut self, _index: usize) {}

    /// Called after all particles of a panel have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a tick has been applied to every panel.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that reports tick summaries through the `log` facade.
#[derive(Debug, Default)]
pub struct LogStepObserver {
    ticks: u64,
    degenerate: usize,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl StepObserver for LogStepObserver {
    fn on_degenerate_constraint(&mut self, index: usize) {
        self.degenerate += 1;
        log::trace!("constraint {} skipped: endpoints coincide", index);
    }

    fn on_step_complete(&mut self) {
        self.ticks += 1;
        if self.degenerate > 0 {
            log::debug!(
                "tick {}: {} degenerate constraint visits skipped",
                self.ticks,
                self.degenerate
            );
            self.degenerate = 0;
        }
    }
}
