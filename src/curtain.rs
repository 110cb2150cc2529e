//! The two-panel curtain and its tick loop.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::config::CurtainConfig;
use crate::driver::FrameDriver;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::panel::{Panel, PanelCommand, Side};
use crate::pointer::{PointerCell, PointerState};
use crate::solver::StepContext;
use crate::vec::Vec2;

/// Input buffered until the start of the next tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CurtainEvent<F: Float> {
    Command(PanelCommand),
    Resize { width: F, height: F },
}

/// What a renderer needs to draw one panel for the current tick.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelFrame<F: Float> {
    pub side: Side,
    pub cols: usize,
    pub rows: usize,
    /// Row-major, `rows * cols` entries.
    pub positions: Vec<Vec2<F>>,
}

/// A left and a right [`Panel`] driven together.
///
/// Commands and resizes are queued and applied in arrival order at the
/// start of the next [`step`](Self::step); the pointer is a latest-value
/// cell read once per tick. Stepping is single threaded and never fails.
///
/// ```
/// use drapery::{Curtain, CurtainConfig, NoOpStepObserver};
///
/// let mut curtain: Curtain<f32> = Curtain::new(800.0, 600.0, CurtainConfig::new());
/// curtain.open();
/// curtain.set_pointer(400.0, 300.0, true);
/// for _ in 0..60 {
///     curtain.step(&mut NoOpStepObserver);
/// }
/// let frames = curtain.frames();
/// assert_eq!(frames.len(), 2);
/// ```
#[derive(Debug)]
pub struct Curtain<F: Float> {
    config: CurtainConfig<F>,
    width: F,
    height: F,
    panels: [Panel<F>; 2],
    pointer: PointerCell<F>,
    pending: VecDeque<CurtainEvent<F>>,
}

impl<F: Float> Curtain<F> {
    pub fn new(width: F, height: F, config: CurtainConfig<F>) -> Self {
        let panels = Self::build_panels(width, height, &config);
        Curtain {
            config,
            width,
            height,
            panels,
            pointer: PointerCell::new(),
            pending: VecDeque::new(),
        }
    }

    fn build_panels(width: F, height: F, config: &CurtainConfig<F>) -> [Panel<F>; 2] {
        [
            Panel::build(Side::Left, width, height, config),
            Panel::build(Side::Right, width, height, config),
        ]
    }

    /// Queue an open command for both panels.
    pub fn open(&mut self) {
        self.push_event(CurtainEvent::Command(PanelCommand::Open));
    }

    /// Queue a close command for both panels.
    pub fn close(&mut self) {
        self.push_event(CurtainEvent::Command(PanelCommand::Close));
    }

    /// Queue a viewport change. Both panels are rebuilt from scratch.
    pub fn resize(&mut self, width: F, height: F) {
        self.push_event(CurtainEvent::Resize { width, height });
    }

    pub fn push_event(&mut self, event: CurtainEvent<F>) {
        self.pending.push_back(event);
    }

    /// Record the latest pointer state. Only the last call before a tick counts.
    pub fn set_pointer(&self, x: F, y: F, active: bool) {
        self.pointer.set(PointerState::new(x, y, active));
    }

    /// Handle for event code that updates the pointer piecemeal.
    pub fn pointer(&self) -> &PointerCell<F> {
        &self.pointer
    }

    /// Apply queued input, then advance every panel by one tick.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.apply_pending();
        let pointer = self.pointer.snapshot();
        let ctx = StepContext::new(pointer, &self.config);
        for panel in self.panels.iter_mut() {
            panel.step(&ctx, observer);
        }
        observer.on_step_complete();
    }

    /// Step once per frame the driver yields. Returns the number of ticks run.
    pub fn run<D: FrameDriver, O: StepObserver>(&mut self, driver: &mut D, observer: &mut O) -> usize {
        let mut ticks = 0;
        while driver.next_frame() {
            self.step(observer);
            ticks += 1;
        }
        ticks
    }

    fn apply_pending(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            match event {
                CurtainEvent::Command(command) => {
                    for panel in self.panels.iter_mut() {
                        panel.apply(command, &self.config);
                    }
                }
                CurtainEvent::Resize { width, height } => {
                    log::debug!("rebuilding curtain for {}x{} viewport", width, height);
                    self.width = width;
                    self.height = height;
                    self.panels = Self::build_panels(width, height, &self.config);
                }
            }
        }
    }

    /// Positions and layout of every panel, left first.
    pub fn frames(&self) -> Vec<PanelFrame<F>> {
        self.panels
            .iter()
            .map(|panel| PanelFrame {
                side: panel.side(),
                cols: panel.cols(),
                rows: panel.rows(),
                positions: panel.positions(),
            })
            .collect()
    }

    /// True when every pin is within `tolerance` of its target.
    pub fn is_settled(&self, tolerance: F) -> bool {
        self.panels.iter().all(|p| p.max_target_distance() <= tolerance)
    }

    pub fn panels(&self) -> &[Panel<F>] { &self.panels }
    pub fn panel(&self, side: Side) -> &Panel<F> {
        match side {
            Side::Left => &self.panels[0],
            Side::Right => &self.panels[1],
        }
    }
    pub fn config(&self) -> &CurtainConfig<F> { &self.config }

    /// Tuning read by every later tick. Panels keep their grid until the
    /// next rebuild, so `spacing` and `rod_y` changes show up after a resize.
    pub fn config_mut(&mut self) -> &mut CurtainConfig<F> { &mut self.config }

    pub fn viewport(&self) -> (F, F) { (self.width, self.height) }
    pub fn pending_events(&self) -> usize { self.pending.len() }
}
