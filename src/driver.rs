//! Frame sources that decide when the curtain ticks.
//!
//! In a browser the host's animation-frame callback calls
//! [`Curtain::step`](crate::Curtain::step) directly. Headless hosts, tests
//! and benchmarks use a [`FrameDriver`] with [`Curtain::run`](crate::Curtain::run).

/// Yields one frame signal per tick.
pub trait FrameDriver {
    /// Returns `false` once no further frames should be simulated.
    fn next_frame(&mut self) -> bool;
}

/// Produces a fixed number of frames, then stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedStepDriver {
    remaining: usize,
    elapsed: usize,
}

impl FixedStepDriver {
    pub fn new(frames: usize) -> Self {
        FixedStepDriver { remaining: frames, elapsed: 0 }
    }

    /// Frames handed out so far.
    pub fn elapsed(&self) -> usize {
        self.elapsed
    }
}

impl FrameDriver for FixedStepDriver {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.elapsed += 1;
        true
    }
}

/// Any `FnMut() -> bool` can drive the loop, e.g. a closure polling a clock.
impl<T: FnMut() -> bool> FrameDriver for T {
    fn next_frame(&mut self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_driver_counts_down() {
        let mut driver = FixedStepDriver::new(3);
        let mut frames = 0;
        while driver.next_frame() {
            frames += 1;
        }
        assert_eq!(frames, 3);
        assert_eq!(driver.elapsed(), 3);
        assert!(!driver.next_frame());
    }

    #[test]
    fn closure_driver() {
        let mut left = 2;
        let mut driver = || {
            left -= 1;
            left >= 0
        };
        assert!(driver.next_frame());
        assert!(driver.next_frame());
        assert!(!driver.next_frame());
    }
}
