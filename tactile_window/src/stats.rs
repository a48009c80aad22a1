// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame rate bookkeeping for the frame loop.

use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Frames-per-second counter.
///
/// Counts frames and, whenever more than a second has passed since the last
/// report, publishes the count as [`FrameStats::fps`] and starts over.
#[derive(Clone, Debug)]
pub struct FrameStats {
    start: Instant,
    frames: u32,
    fps: Option<u32>,
}

impl FrameStats {
    /// Start counting at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            frames: 0,
            fps: None,
        }
    }

    /// Count one frame finished at `now`.
    ///
    /// Returns the completed count when a reporting window closes.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.saturating_duration_since(self.start) > REPORT_INTERVAL {
            let fps = self.frames;
            self.start = now;
            self.frames = 0;
            self.fps = Some(fps);
            Some(fps)
        } else {
            None
        }
    }

    /// Frames counted in the last completed window.
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }
}
