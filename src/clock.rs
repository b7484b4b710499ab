//! Fixed timestep accumulator.
//! Turns variable frame deltas into a whole number of simulation ticks.

use crate::consts::MAX_FRAME_DT;

pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Most ticks run for a single frame.
    max_substeps: u32,
    /// Accumulated time not yet simulated.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Add frame time and return how many ticks to run.
    ///
    /// Frame time is capped, and any backlog beyond `max_substeps` ticks is
    /// dropped to prevent a spiral of death.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.dt).min(1.0)
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
