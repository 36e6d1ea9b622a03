// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Software-timed HC-SR04 range measurement.
//!
//! The board has no input-capture timer wired to the echo pin, so the
//! pulse width is measured entirely in software: trigger the sensor, then
//! poll the echo line in a busy-wait loop, counting 1 µs ticks while it is
//! high. Two independent ceilings bound the worst case:
//!
//! - waiting for the rising edge is bounded so an obstacle just out of
//!   sensor range cannot hang the controller; timing out here yields the
//!   no-echo sentinel `0`, which downstream means "path clear";
//! - measuring the high time is bounded so an electrically stuck echo
//!   line cannot hang it either; timing out here returns the capped tick
//!   count as a truncated reading, not a sentinel.
//!
//! Measurement therefore blocks the whole control loop for up to roughly
//! twice the ceiling in the worst case. That is the accepted cost of
//! software timing on this hardware.
//!
//! # Examples
//!
//! ```ignore
//! let mut sensor = RangeSensor::new(trigger_pin, echo_pin);
//! let cm = sensor.distance_cm(&mut clock);
//! if cm > OBSTACLE_THRESHOLD_CM {
//!     // path is clear
//! }
//! ```

use crate::config::{ECHO_TIMEOUT_TICKS, TRIGGER_PULSE_US, TRIGGER_SETTLE_US};
use crate::distance::{pulse_to_cm, NO_ECHO};
use crate::ports::{EchoLine, TimeSource, TriggerLine};

/// One HC-SR04 ultrasonic range sensor.
///
/// Owns the trigger output and echo input lines. The polling time source
/// is passed into each measurement so it can be shared with the rest of
/// the control loop.
pub struct RangeSensor<T, E> {
    /// Trigger output line.
    trigger: T,
    /// Echo input line.
    echo: E,
}

impl<T: TriggerLine, E: EchoLine> RangeSensor<T, E> {
    /// Creates a new range sensor from its two GPIO lines.
    ///
    /// Forces the trigger line low so the first measurement starts from a
    /// known level regardless of how the pin came out of reset.
    ///
    /// # Arguments
    ///
    /// * `trigger` - Output line wired to the sensor's TRIG pin
    /// * `echo` - Input line wired to the sensor's ECHO pin
    pub fn new(mut trigger: T, echo: E) -> Self {
        trigger.set_low();
        Self { trigger, echo }
    }

    /// Runs one trigger-and-measure cycle, returning the echo pulse width
    /// in 1 µs polling ticks.
    ///
    /// Protocol, in strict order:
    ///
    /// 1. Trigger low, hold for the settle interval.
    /// 2. Trigger high for the 10 µs pulse the sensor requires, then low.
    /// 3. Poll for the echo rising edge, one tick per poll; if
    ///    [`ECHO_TIMEOUT_TICKS`] polls pass without it, return
    ///    [`NO_ECHO`]. This is the defined "nothing in range" outcome,
    ///    not an error.
    /// 4. Poll while the echo stays high, counting ticks; if the count
    ///    reaches the same ceiling, stop and return it as-is (a truncated
    ///    reading).
    /// 5. Otherwise return the accumulated count when the echo drops.
    ///
    /// # Returns
    ///
    /// * `0` - No echo within the timeout window
    /// * `1..=25_000` - Measured (or truncated) echo high time in ticks
    pub fn measure(&mut self, clock: &mut impl TimeSource) -> u32 {
        // Clean rising edge on the trigger pulse.
        self.trigger.set_low();
        clock.delay_us(TRIGGER_SETTLE_US);

        self.trigger.set_high();
        clock.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low();

        // Wait for the echo rising edge, bounded.
        let mut waited = 0u32;
        while !self.echo.is_asserted() {
            clock.delay_us(1);
            waited += 1;
            if waited >= ECHO_TIMEOUT_TICKS {
                return NO_ECHO;
            }
        }

        // Measure the high time, bounded by the same ceiling.
        let mut count = 0u32;
        while self.echo.is_asserted() {
            clock.delay_us(1);
            count += 1;
            if count >= ECHO_TIMEOUT_TICKS {
                break;
            }
        }

        count
    }

    /// Runs one measurement cycle and converts the result to centimeters.
    ///
    /// Convenience wrapper combining [`RangeSensor::measure`] with
    /// [`pulse_to_cm`]; a no-echo cycle comes back as the clear-path
    /// distance.
    pub fn distance_cm(&mut self, clock: &mut impl TimeSource) -> u32 {
        pulse_to_cm(self.measure(clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CLEAR_PATH_CM;
    use crate::sim::{EchoPulse, SimClock, SimEcho, SimTrigger};

    #[test]
    fn silent_echo_returns_no_echo_sentinel() {
        let echo = SimEcho::script(&[EchoPulse::Silent]);
        let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
        let mut clock = SimClock::new();

        assert_eq!(sensor.measure(&mut clock), NO_ECHO);
        // Settle + pulse + one tick per failed poll.
        assert_eq!(
            clock.us_total,
            (TRIGGER_SETTLE_US + TRIGGER_PULSE_US + ECHO_TIMEOUT_TICKS) as u64
        );
    }

    #[test]
    fn returns_pulse_width_when_echo_drops_in_time() {
        let echo = SimEcho::script(&[EchoPulse::Return {
            lead: 3,
            width: 580,
        }]);
        let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
        let mut clock = SimClock::new();

        assert_eq!(sensor.measure(&mut clock), 580);
    }

    #[test]
    fn measured_width_matches_scripted_high_time_exactly() {
        // The poll that observes the rising edge ends the rise-wait loop
        // and must not count toward the measured width. Pin the identity
        // at the threshold-relevant widths: 1160 ticks is exactly 20 cm,
        // 1218 is 21 cm.
        for width in [1_u32, 580, 1160, 1218] {
            let echo = SimEcho::script(&[EchoPulse::Return { lead: 2, width }]);
            let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
            let mut clock = SimClock::new();

            assert_eq!(sensor.measure(&mut clock), width);
        }
    }

    #[test]
    fn stuck_echo_truncates_at_ceiling() {
        let echo = SimEcho::script(&[EchoPulse::Stuck]);
        let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
        let mut clock = SimClock::new();

        assert_eq!(sensor.measure(&mut clock), ECHO_TIMEOUT_TICKS);
    }

    #[test]
    fn trigger_pulse_shape_is_low_high_low() {
        let echo = SimEcho::script(&[EchoPulse::Silent]);
        let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
        let mut clock = SimClock::new();

        sensor.measure(&mut clock);
        let trigger = sensor.trigger;
        // One low at construction, then low-settle / high-pulse / low.
        assert_eq!(trigger.highs, 1);
        assert_eq!(trigger.lows, 3);
    }

    #[test]
    fn no_echo_converts_to_clear_path_distance() {
        let echo = SimEcho::script(&[EchoPulse::Silent]);
        let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
        let mut clock = SimClock::new();

        assert_eq!(sensor.distance_cm(&mut clock), CLEAR_PATH_CM);
    }

    #[test]
    fn consecutive_measurements_consume_the_script_in_order() {
        let echo = SimEcho::script(&[
            EchoPulse::Return { lead: 1, width: 1160 },
            EchoPulse::Return { lead: 1, width: 1218 },
            EchoPulse::Silent,
        ]);
        let mut sensor = RangeSensor::new(SimTrigger::new(), echo);
        let mut clock = SimClock::new();

        assert_eq!(sensor.distance_cm(&mut clock), 20);
        assert_eq!(sensor.distance_cm(&mut clock), 21);
        assert_eq!(sensor.distance_cm(&mut clock), CLEAR_PATH_CM);
    }
}
