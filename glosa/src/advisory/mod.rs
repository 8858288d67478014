//! GLOSA advisory engine.
//!
//! Maps the distance to a junction and the predicted signal state to a
//! recommended approach speed. The mapping is a pure function: it performs
//! no I/O, holds no state and assumes its inputs were validated upstream
//! (non-negative distance and seconds-to-change).
//!
//! # Policy
//!
//! | Phase | Condition | Speed | Message |
//! |-------|-----------|-------|---------|
//! | GREEN | can clear before red (with buffer) | `max(needed, MIN)` | maintain speed |
//! | GREEN | cannot clear | `MIN` | slow down |
//! | RED   | `MIN <= needed <= MAX` | `needed` | optimal speed |
//! | RED   | `needed < MIN` | `MIN` | slow approach |
//! | RED   | `needed > MAX` | 0 | stop and wait |
//! | AMBER | always | `MIN` | prepare to stop |

mod phase;

pub use phase::SignalPhase;

use serde::Serialize;

/// Slowest speed ever recommended while moving (~18 km/h).
pub const MIN_SPEED_MPS: f64 = 5.0;

/// Fastest speed ever recommended (~58 km/h).
pub const MAX_SPEED_MPS: f64 = 16.0;

/// Safety margin applied around the predicted phase change.
pub const TARGET_BUFFER_SECS: f64 = 2.0;

/// Floor for the GREEN-branch time window, so `t == buffer` never divides by zero.
pub const MIN_TIME_WINDOW_SECS: f64 = 1e-6;

const MPS_TO_KMH: f64 = 3.6;

pub const MSG_MAINTAIN_SPEED: &str = "Maintain speed to clear signal.";
pub const MSG_SLOW_DOWN: &str = "Slow down. Signal turning Red soon.";
pub const MSG_OPTIMAL_SPEED: &str = "Optimal speed to arrive at Green.";
pub const MSG_SLOW_APPROACH: &str = "Slow approach. Arrive after signal turns Green.";
pub const MSG_STOP: &str = "Stop and wait for Green.";
pub const MSG_PREPARE_TO_STOP: &str = "Prepare to stop.";

/// Recommended speed and driver-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryResult {
    pub recommended_speed_kmh: u32,
    pub message: &'static str,
}

/// Computes the speed advisory for an approaching vehicle.
///
/// # Arguments
///
/// * `distance_m` - Distance to the stop line in meters (>= 0)
/// * `seconds_to_change` - Predicted seconds until the phase changes (>= 0)
/// * `phase` - Current signal phase
pub fn advise(distance_m: f64, seconds_to_change: f64, phase: SignalPhase) -> AdvisoryResult {
    let (speed_mps, message) = match phase {
        SignalPhase::Green => {
            let window = (seconds_to_change - TARGET_BUFFER_SECS).max(MIN_TIME_WINDOW_SECS);
            let needed = distance_m / window;

            if needed <= MAX_SPEED_MPS {
                (needed.max(MIN_SPEED_MPS), MSG_MAINTAIN_SPEED)
            } else {
                (MIN_SPEED_MPS, MSG_SLOW_DOWN)
            }
        }
        SignalPhase::Red => {
            let needed = distance_m / (seconds_to_change + TARGET_BUFFER_SECS);

            if (MIN_SPEED_MPS..=MAX_SPEED_MPS).contains(&needed) {
                (needed, MSG_OPTIMAL_SPEED)
            } else if needed < MIN_SPEED_MPS {
                (MIN_SPEED_MPS, MSG_SLOW_APPROACH)
            } else {
                (0.0, MSG_STOP)
            }
        }
        SignalPhase::Amber => (MIN_SPEED_MPS, MSG_PREPARE_TO_STOP),
    };

    AdvisoryResult {
        recommended_speed_kmh: to_kmh(speed_mps),
        message,
    }
}

/// Converts m/s to whole km/h, rounding half away from zero.
#[inline]
fn to_kmh(speed_mps: f64) -> u32 {
    (speed_mps * MPS_TO_KMH).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_can_clear() {
        // 100m / (10s - 2s) = 12.5 m/s
        let result = advise(100.0, 10.0, SignalPhase::Green);
        assert_eq!(result.recommended_speed_kmh, 45);
        assert_eq!(result.message, MSG_MAINTAIN_SPEED);
    }

    #[test]
    fn test_green_too_far_to_clear() {
        // 500m / 3s = 166.7 m/s
        let result = advise(500.0, 5.0, SignalPhase::Green);
        assert_eq!(result.recommended_speed_kmh, 18);
        assert_eq!(result.message, MSG_SLOW_DOWN);
    }

    #[test]
    fn test_green_slow_needed_speed_is_raised_to_minimum() {
        // 20m / 28s = 0.7 m/s, raised to 5 m/s
        let result = advise(20.0, 30.0, SignalPhase::Green);
        assert_eq!(result.recommended_speed_kmh, 18);
        assert_eq!(result.message, MSG_MAINTAIN_SPEED);
    }

    #[test]
    fn test_green_exactly_at_max_speed() {
        // 128m / 8s = 16 m/s
        let result = advise(128.0, 10.0, SignalPhase::Green);
        assert_eq!(result.recommended_speed_kmh, 58);
        assert_eq!(result.message, MSG_MAINTAIN_SPEED);
    }

    #[test]
    fn test_green_time_equal_to_buffer_does_not_divide_by_zero() {
        let result = advise(50.0, TARGET_BUFFER_SECS, SignalPhase::Green);
        assert_eq!(result.recommended_speed_kmh, 18);
        assert_eq!(result.message, MSG_SLOW_DOWN);
    }

    #[test]
    fn test_green_time_below_buffer_cannot_make_it() {
        let result = advise(10.0, 0.5, SignalPhase::Green);
        assert_eq!(result.message, MSG_SLOW_DOWN);
    }

    #[test]
    fn test_red_optimal_speed() {
        // 160m / 22s = 7.27 m/s
        let result = advise(160.0, 20.0, SignalPhase::Red);
        assert_eq!(result.recommended_speed_kmh, 26);
        assert_eq!(result.message, MSG_OPTIMAL_SPEED);
    }

    #[test]
    fn test_red_slow_approach() {
        // 50m / 27s = 1.85 m/s
        let result = advise(50.0, 25.0, SignalPhase::Red);
        assert_eq!(result.recommended_speed_kmh, 18);
        assert_eq!(result.message, MSG_SLOW_APPROACH);
    }

    #[test]
    fn test_red_stop_and_wait() {
        // 500m / 4s = 125 m/s
        let result = advise(500.0, 2.0, SignalPhase::Red);
        assert_eq!(result.recommended_speed_kmh, 0);
        assert_eq!(result.message, MSG_STOP);
    }

    #[test]
    fn test_red_at_vehicle_position() {
        let result = advise(0.0, 10.0, SignalPhase::Red);
        assert_eq!(result.message, MSG_SLOW_APPROACH);
    }

    #[test]
    fn test_amber_always_prepares_to_stop() {
        for (distance, seconds) in [(0.0, 0.0), (100.0, 3.0), (5000.0, 60.0)] {
            let result = advise(distance, seconds, SignalPhase::Amber);
            assert_eq!(result.recommended_speed_kmh, 18);
            assert_eq!(result.message, MSG_PREPARE_TO_STOP);
        }
    }

    #[test]
    fn test_unrecognized_phase_takes_amber_branch() {
        let result = advise(100.0, 10.0, SignalPhase::parse("BLINKING"));
        assert_eq!(result.message, MSG_PREPARE_TO_STOP);
    }

    #[test]
    fn test_speed_always_within_range() {
        let max_kmh = (MAX_SPEED_MPS * MPS_TO_KMH).round() as u32;
        assert_eq!(max_kmh, 58);

        for phase in [SignalPhase::Green, SignalPhase::Red, SignalPhase::Amber] {
            for d in [0.0, 1.0, 15.0, 99.9, 250.0, 1000.0, 20_000.0] {
                for t in [0.0, 0.5, 2.0, 2.000001, 5.0, 17.3, 30.0, 120.0] {
                    let result = advise(d, t, phase);
                    assert!(
                        result.recommended_speed_kmh <= max_kmh,
                        "{:?} d={} t={} gave {}",
                        phase,
                        d,
                        t,
                        result.recommended_speed_kmh
                    );
                }
            }
        }
    }

    #[test]
    fn test_advise_is_deterministic() {
        let first = advise(333.3, 17.7, SignalPhase::Red);
        let second = advise(333.3, 17.7, SignalPhase::Red);
        assert_eq!(first, second);
    }
}
