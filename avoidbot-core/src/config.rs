// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Fixed protocol and decision constants.
//!
//! Everything the controller tunes on lives here. None of these values are
//! configurable at runtime; the threshold in particular is a single fixed
//! scalar chosen for the reference deployment.
//!
//! # Timing Model
//!
//! The sensor protocol counts time in 1 µs busy-wait ticks supplied by the
//! [`TimeSource`](crate::ports::TimeSource) implementation. Every derived
//! quantity (the trigger pulse shape, the echo timeouts, the distance
//! calibration divisor) assumes that one tick is one real microsecond. If
//! the underlying tick granularity drifts, all of them drift with it.

/// Obstacle distance threshold in centimeters.
///
/// A reading less than or equal to this value is classified as blocked;
/// strictly greater is clear. The tie goes to "blocked" at every check the
/// controller performs.
pub const OBSTACLE_THRESHOLD_CM: u32 = 20;

/// Distance substituted when no echo returns within the timeout window.
///
/// "No echo" is deliberately mapped to "path is clear", not "unknown": an
/// obstacle the sensor cannot see is treated as absent.
pub const CLEAR_PATH_CM: u32 = 1000;

/// Round-trip echo microseconds per centimeter of obstacle distance.
///
/// Standard HC-SR04 calibration for sound in air: distance_cm = pulse_us / 58,
/// integer floor division with no rounding correction.
pub const US_PER_CM_ROUND_TRIP: u32 = 58;

/// Ceiling on both echo polling loops, in 1 µs ticks.
///
/// Applied independently to the wait-for-rising-edge loop (exceeding it
/// yields the no-echo sentinel `0`) and to the high-time measurement loop
/// (exceeding it returns the capped count as a truncated reading). Bounds
/// worst-case blocking per measurement at roughly twice this value.
pub const ECHO_TIMEOUT_TICKS: u32 = 25_000;

/// Microseconds to hold the trigger line low before pulsing.
///
/// Guarantees a clean rising edge even if the line was left high.
pub const TRIGGER_SETTLE_US: u32 = 5;

/// Width of the trigger pulse in microseconds, required by the HC-SR04.
pub const TRIGGER_PULSE_US: u32 = 10;

/// Milliseconds to sit stopped after first detecting an obstacle.
///
/// Gives transient obstacles (a person walking past) time to clear before
/// the controller commits to a recovery turn.
pub const OBSTACLE_WAIT_MS: u32 = 5_000;

/// Duration of one recovery turn pulse in milliseconds.
pub const TURN_PULSE_MS: u32 = 200;

/// Delay between control-loop iterations in milliseconds.
pub const LOOP_DELAY_MS: u32 = 50;

/// Milliseconds the robot holds stopped at power-on before the first
/// measurement, giving the operator time to place it.
pub const STARTUP_HOLD_MS: u32 = 5_000;
