//! Horizontal swipe detection.

use crate::messages::Direction;

/// Tracks the last touch start/end coordinates.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f32,
    end_x: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = x;
    }

    /// Record the end coordinate and classify the gesture.
    ///
    /// Only a delta strictly greater than `threshold` counts. A leftward
    /// swipe moves to the next slide, a rightward one to the previous.
    pub fn touch_end(&mut self, x: f32, threshold: u32) -> Option<Direction> {
        self.end_x = x;
        let delta = self.start_x - self.end_x;

        if delta.abs() > threshold as f32 {
            Some(if delta > 0.0 {
                Direction::Next
            } else {
                Direction::Prev
            })
        } else {
            None
        }
    }
}
