//! Simulation runner: the fixed-timestep accumulator around the tick
//!
//! Hosts construct one, `start()` it once their own loading is done, then
//! feed it raw frame deltas. Frame time is clamped, substeps are capped,
//! and leftover time stays in the accumulator for the next frame.

use crate::consts::*;
use crate::tuning::Tuning;

use super::error::SimError;
use super::state::GameState;
use super::tick::{ControlIntent, tick};

/// One running simulation: state, balance, live intent, and loop
/// bookkeeping. No globals anywhere; run as many of these side by side as
/// you like.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
    tuning: Tuning,
    intent: ControlIntent,
    accumulator_ms: f32,
    started: bool,
}

impl Simulation {
    pub fn new(tuning: Tuning) -> Self {
        let state = GameState::new(tuning.gravity);
        log::debug!("world seeded with {} entities", state.entities().len());
        Self {
            state,
            tuning,
            intent: ControlIntent::default(),
            accumulator_ms: 0.0,
            started: false,
        }
    }

    /// Readiness gate: ticks run only after this. Hosts call it once
    /// their assets and wiring are in place.
    pub fn start(&mut self) {
        if !self.started {
            self.started = true;
            log::info!("simulation started");
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Read-only snapshot for rendering and queries
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Milliseconds banked toward the next tick
    #[inline]
    pub fn accumulator_ms(&self) -> f32 {
        self.accumulator_ms
    }

    /// Replace the live intent (typically once per frame)
    pub fn set_intent(&mut self, intent: ControlIntent) {
        self.intent = intent;
    }

    /// In-place access for hosts that edit single fields
    pub fn intent_mut(&mut self) -> &mut ControlIntent {
        &mut self.intent
    }

    /// Feed one frame's elapsed milliseconds. Runs up to
    /// `MAX_STEPS_PER_FRAME` fixed ticks and returns how many ran.
    /// One-shot intent flags are cleared after the first tick consumes
    /// them, so a held flag cannot fire once per substep.
    pub fn advance(&mut self, frame_ms: f32) -> Result<u32, SimError> {
        if !self.started {
            return Ok(0);
        }

        // A stalled tab or a debugger pause must not become a tick storm
        let frame_ms = frame_ms.min(MAX_FRAME_MS);
        self.accumulator_ms += frame_ms;

        let mut steps = 0;
        while self.accumulator_ms >= STEP_MS && steps < MAX_STEPS_PER_FRAME {
            tick(&mut self.state, &self.intent, &self.tuning, STEP_MS)?;
            self.accumulator_ms -= STEP_MS;
            steps += 1;

            // Clear one-shot inputs after processing
            self.intent.fire_requested = false;
            self.intent.toggle_character_requested = false;
        }

        if steps == MAX_STEPS_PER_FRAME && self.accumulator_ms >= STEP_MS {
            log::warn!(
                "substep cap hit, carrying {:.1} ms of backlog",
                self.accumulator_ms
            );
        }

        Ok(steps)
    }
}
