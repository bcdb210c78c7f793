use std::time::Instant;

use log::debug;

/// Drop guard that logs how long a pipeline step took.
pub struct Timing {
    started: Instant,
    step: &'static str,
}

impl Timing {
    pub fn new(step: &'static str) -> Self {
        Self {
            started: Instant::now(),
            step,
        }
    }
}

impl Drop for Timing {
    #[inline]
    fn drop(&mut self) {
        debug!("[{:?}] {}", self.started.elapsed(), self.step)
    }
}

macro_rules! TIME {
    ($step: expr) => {
        let _x = $crate::debug::Timing::new($step);
    };
}
pub(crate) use TIME;
