use drapery::{Curtain, CurtainConfig, LogStepObserver, Side};
use wasm_bindgen::prelude::*;

// ---- Curtain Demo ----

/// Browser binding: the page's animation-frame loop calls `update` once per
/// frame and draws `panel_positions` however it likes.
#[wasm_bindgen]
pub struct CurtainDemo {
    curtain: Curtain<f32>,
    observer: LogStepObserver,
}

#[wasm_bindgen]
impl CurtainDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        init_logging();
        let config = CurtainConfig::new();
        if let Err(err) = config.validate() {
            log::warn!("curtain config out of range: {}", err);
        }
        CurtainDemo {
            curtain: Curtain::new(width, height, config),
            observer: LogStepObserver::new(),
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32, active: bool) {
        self.curtain.set_pointer(x, y, active);
    }

    pub fn open(&mut self) {
        self.curtain.open();
    }

    pub fn close(&mut self) {
        self.curtain.close();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.curtain.resize(width, height);
    }

    pub fn update(&mut self) {
        self.curtain.step(&mut self.observer);
    }

    pub fn is_settled(&self) -> bool {
        self.curtain.is_settled(0.5)
    }

    pub fn panel_count(&self) -> usize {
        self.curtain.panels().len()
    }

    /// 0 for the left panel, 1 for the right, `undefined` past the last panel.
    pub fn panel_side(&self, index: usize) -> Option<u8> {
        self.curtain.panels().get(index).map(|panel| match panel.side() {
            Side::Left => 0,
            Side::Right => 1,
        })
    }

    pub fn panel_cols(&self, index: usize) -> usize {
        self.curtain.panels().get(index).map_or(0, |panel| panel.cols())
    }

    pub fn panel_rows(&self, index: usize) -> usize {
        self.curtain.panels().get(index).map_or(0, |panel| panel.rows())
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order, empty for an
    /// index past the last panel.
    pub fn panel_positions(&self, index: usize) -> Vec<f32> {
        let Some(panel) = self.curtain.panels().get(index) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(panel.particle_count() * 2);
        for p in panel.particles() {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }
}

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // A second demo on the same page finds the logger already set.
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_queries_past_the_end_are_empty() {
        let demo = CurtainDemo::new(300.0, 600.0);
        assert_eq!(demo.panel_count(), 2);
        assert_eq!(demo.panel_side(1), Some(1));
        assert_eq!(demo.panel_positions(0).len(), 2 * 11 * 42);

        assert_eq!(demo.panel_side(2), None);
        assert_eq!(demo.panel_cols(2), 0);
        assert_eq!(demo.panel_rows(usize::MAX), 0);
        assert!(demo.panel_positions(7).is_empty());
    }
}
