//! Fixed-cycle predictor.
//!
//! Derives the phase from `timestamp mod cycle` using a static
//! green → red → amber plan. It needs no network, which makes it the
//! secondary for offline runs and a deterministic stand-in for tests.

use super::types::{BoxFuture, PredictionRequest, Predictor, PredictorError, SignalPrediction};
use crate::advisory::SignalPhase;

/// Durations of each phase in one signal cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclePlan {
    pub green_secs: f64,
    pub red_secs: f64,
    pub amber_secs: f64,
}

impl CyclePlan {
    pub fn cycle_secs(&self) -> f64 {
        self.green_secs + self.red_secs + self.amber_secs
    }

    /// Phase and seconds remaining at the given epoch time.
    pub fn phase_at(&self, timestamp: f64) -> SignalPrediction {
        let t = timestamp.rem_euclid(self.cycle_secs());
        let red_end = self.green_secs + self.red_secs;

        let (phase, to_change) = if t < self.green_secs {
            (SignalPhase::Green, self.green_secs - t)
        } else if t < red_end {
            (SignalPhase::Red, red_end - t)
        } else {
            (SignalPhase::Amber, self.cycle_secs() - t)
        };

        SignalPrediction {
            phase,
            seconds_to_change: (to_change * 10.0).round() / 10.0,
        }
    }
}

impl Default for CyclePlan {
    /// 60 s cycle: 30 s green, 25 s red, 5 s amber.
    fn default() -> Self {
        Self {
            green_secs: 30.0,
            red_secs: 25.0,
            amber_secs: 5.0,
        }
    }
}

/// Predictor backed by a [`CyclePlan`].
#[derive(Debug, Clone, Default)]
pub struct FixedCyclePredictor {
    plan: CyclePlan,
}

impl FixedCyclePredictor {
    pub fn new(plan: CyclePlan) -> Self {
        Self { plan }
    }
}

impl Predictor for FixedCyclePredictor {
    fn predict<'a>(
        &'a self,
        request: &'a PredictionRequest,
    ) -> BoxFuture<'a, Result<SignalPrediction, PredictorError>> {
        let prediction = self.plan.phase_at(request.timestamp);
        Box::pin(async move { Ok(prediction) })
    }

    fn name(&self) -> &str {
        "fixed-cycle"
    }
}
