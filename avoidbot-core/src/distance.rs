// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Pulse-width to distance conversion.
//!
//! Pure arithmetic, no side effects, no state. A timing count of zero is
//! the no-echo sentinel produced by the range sensor and maps to the
//! clear-path distance; anything else converts at the fixed HC-SR04
//! calibration of 58 µs of round-trip echo time per centimeter.

use crate::config::{CLEAR_PATH_CM, US_PER_CM_ROUND_TRIP};

/// Timing count reserved to mean "no echo observed before timeout".
pub const NO_ECHO: u32 = 0;

/// Converts an echo pulse width in ticks to a distance in centimeters.
///
/// # Arguments
///
/// * `ticks` - Measured echo high time in 1 µs polling ticks, or
///   [`NO_ECHO`] when the echo never arrived
///
/// # Returns
///
/// Estimated obstacle distance in centimeters. [`NO_ECHO`] maps to
/// [`CLEAR_PATH_CM`]; all other inputs floor-divide by
/// [`US_PER_CM_ROUND_TRIP`]. Truncated over-long readings are converted
/// as-is, with no clamping.
///
/// # Examples
///
/// ```
/// use avoidbot_core::distance::pulse_to_cm;
///
/// assert_eq!(pulse_to_cm(0), 1000); // no echo: treat as clear
/// assert_eq!(pulse_to_cm(1160), 20);
/// ```
pub fn pulse_to_cm(ticks: u32) -> u32 {
    if ticks == NO_ECHO {
        return CLEAR_PATH_CM;
    }
    ticks / US_PER_CM_ROUND_TRIP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ECHO_TIMEOUT_TICKS;

    #[test]
    fn no_echo_maps_to_clear_path_sentinel() {
        assert_eq!(pulse_to_cm(NO_ECHO), 1000);
    }

    #[test]
    fn converts_with_floor_division() {
        assert_eq!(pulse_to_cm(58), 1);
        assert_eq!(pulse_to_cm(57), 0);
        assert_eq!(pulse_to_cm(115), 1);
        assert_eq!(pulse_to_cm(116), 2);
        assert_eq!(pulse_to_cm(1160), 20);
        assert_eq!(pulse_to_cm(1218), 21);
    }

    #[test]
    fn truncated_readings_convert_without_clamping() {
        assert_eq!(pulse_to_cm(ECHO_TIMEOUT_TICKS), ECHO_TIMEOUT_TICKS / 58);
        assert_eq!(pulse_to_cm(u32::MAX), u32::MAX / 58);
    }
}
