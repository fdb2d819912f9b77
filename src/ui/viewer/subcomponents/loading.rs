// SPDX-License-Identifier: MPL-2.0
//! Loading indicator sub-component.
//!
//! Tracks how long the current selection has been opening and drives the
//! spinner angle. It never decides anything about the selection itself.

use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Opening for longer than this is reported once, for logs.
const SLOW_OPEN_THRESHOLD: Duration = Duration::from_secs(5);

/// Loading indicator state.
#[derive(Debug, Clone, Default)]
pub struct State {
    started_at: Option<Instant>,
    spinner_rotation: f32,
    slow_reported: bool,
}

/// Messages for the loading sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new selection started opening.
    Start,
    /// The selection settled (ready, failed or closed).
    Stop,
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by the loading sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Opening has taken longer than expected.
    SlowOpen(Duration),
}

impl State {
    /// Handle a loading message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start => {
                self.started_at = Some(Instant::now());
                self.slow_reported = false;
                Effect::None
            }
            Message::Stop => {
                self.started_at = None;
                self.spinner_rotation = 0.0;
                Effect::None
            }
            Message::SpinnerTick => {
                let Some(started) = self.started_at else {
                    return Effect::None;
                };
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                let elapsed = started.elapsed();
                if !self.slow_reported && elapsed > SLOW_OPEN_THRESHOLD {
                    self.slow_reported = true;
                    return Effect::SlowOpen(elapsed);
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current spinner angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
