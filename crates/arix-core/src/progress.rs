use crate::constants::DEFAULT_MAX_STEPS;
use crate::error::{Result, SceneError};

/// Coarse phase of the assembly cycle, mainly for UI labeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Scattered,
    Gathering(u32),
    Assembled,
}

/// Discrete step counter driven by interaction events.
///
/// Steps run `0..=max_steps`; `advance` wraps from `max_steps` back to 0 so a
/// fully assembled form falls apart on the next click.
#[derive(Clone, Debug)]
pub struct ProgressController {
    step: u32,
    max_steps: u32,
}

impl Default for ProgressController {
    fn default() -> Self {
        Self {
            step: 0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl ProgressController {
    pub fn new(max_steps: u32) -> Result<Self> {
        if max_steps == 0 {
            return Err(SceneError::ZeroSteps);
        }
        Ok(Self { step: 0, max_steps })
    }

    /// Step forward (or wrap to 0) and return the new step.
    pub fn advance(&mut self) -> u32 {
        self.step = if self.step >= self.max_steps {
            0
        } else {
            self.step + 1
        };
        self.step
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[inline]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Normalized progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.step as f32 / self.max_steps as f32
    }

    pub fn stage(&self) -> Stage {
        match self.step {
            0 => Stage::Scattered,
            s if s >= self.max_steps => Stage::Assembled,
            s => Stage::Gathering(s),
        }
    }

    /// Caption for the control that triggers the next `advance`.
    pub fn label(&self) -> String {
        match self.stage() {
            Stage::Scattered => "Begin Assembly".to_string(),
            Stage::Assembled => "Deconstruct".to_string(),
            Stage::Gathering(s) => format!("Gather ({}/{})", s, self.max_steps),
        }
    }
}
