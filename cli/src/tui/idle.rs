// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::{Duration, Instant};

/// Defers a task until the input queue is idle, or until `max_wait` has passed.
#[derive(Debug, Clone, Copy)]
pub struct IdleScheduler {
    deadline: Instant,
}

impl IdleScheduler {
    pub fn new(max_wait: Duration) -> Self {
        Self::starting_at(Instant::now(), max_wait)
    }

    pub fn starting_at(start: Instant, max_wait: Duration) -> Self {
        Self {
            deadline: start + max_wait,
        }
    }

    /// Whether the task should run now, given whether input is waiting to be handled.
    pub fn ready(&self, input_pending: bool) -> bool {
        self.ready_at(Instant::now(), input_pending)
    }

    pub fn ready_at(&self, now: Instant, input_pending: bool) -> bool {
        !input_pending || now >= self.deadline
    }
}
