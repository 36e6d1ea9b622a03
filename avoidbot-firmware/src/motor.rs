// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Motor control module for the dual DC motor H-bridge driver.
//!
//! Provides the three drive modes the avoidance controller uses (forward,
//! stop, and an in-place left turn) over PWM speed control and H-bridge
//! direction pins. The duty cycle is fixed at [`DRIVE_DUTY`]; there is no
//! speed profiling.
//!
//! # Hardware Interface
//!
//! - 2 PWM channels for left and right motor speed
//! - 4 GPIO pins for H-bridge direction control (2 per motor)
//!
//! # Examples
//!
//! ```ignore
//! let mut motors = MotorDriver::new(
//!     pwm_left, pwm_right,
//!     left_fwd, left_back,
//!     right_fwd, right_back,
//! );
//!
//! motors.forward();
//! motors.stop();
//! ```

use avoidbot_core::MotorPort;
use defmt::info;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::{Pwm, SetDutyCycle};

use crate::config::DRIVE_DUTY;

/// Dual DC motor driver with H-bridge direction control.
///
/// The driver never enables opposing direction pins of one motor at the
/// same time, which would damage the H-bridge.
pub struct MotorDriver {
    /// PWM controller for left motor speed
    pwm_left: Pwm<'static>,
    /// PWM controller for right motor speed
    pwm_right: Pwm<'static>,
    /// Left motor forward direction pin (AIN1)
    left_fwd: Output<'static>,
    /// Left motor backward direction pin (AIN2)
    left_back: Output<'static>,
    /// Right motor forward direction pin (BIN1)
    right_fwd: Output<'static>,
    /// Right motor backward direction pin (BIN2)
    right_back: Output<'static>,
}

impl MotorDriver {
    /// Creates a new motor driver with all motors stopped.
    ///
    /// # Arguments
    ///
    /// * `pwm_left` - PWM controller for left motor (PWMA)
    /// * `pwm_right` - PWM controller for right motor (PWMB)
    /// * `left_fwd` - GPIO output for left motor forward (AIN1)
    /// * `left_back` - GPIO output for left motor backward (AIN2)
    /// * `right_fwd` - GPIO output for right motor forward (BIN1)
    /// * `right_back` - GPIO output for right motor backward (BIN2)
    pub fn new(
        pwm_left: Pwm<'static>,
        pwm_right: Pwm<'static>,
        left_fwd: Output<'static>,
        left_back: Output<'static>,
        right_fwd: Output<'static>,
        right_back: Output<'static>,
    ) -> Self {
        let mut driver = Self {
            pwm_left,
            pwm_right,
            left_fwd,
            left_back,
            right_fwd,
            right_back,
        };
        driver.stop();
        driver
    }
}

impl MotorPort for MotorDriver {
    /// Drives both wheels forward at the fixed duty cycle.
    fn forward(&mut self) {
        self.pwm_left.set_duty_cycle(DRIVE_DUTY).ok();
        self.pwm_right.set_duty_cycle(DRIVE_DUTY).ok();
        self.left_fwd.set_high();
        self.left_back.set_low();
        self.right_fwd.set_high();
        self.right_back.set_low();
        info!("motors: forward");
    }

    /// Stops both motors immediately.
    ///
    /// Sets PWM duty to zero and disables all direction pins so no current
    /// flows through the H-bridge.
    fn stop(&mut self) {
        self.pwm_left.set_duty_cycle(0).ok();
        self.pwm_right.set_duty_cycle(0).ok();
        self.left_fwd.set_low();
        self.left_back.set_low();
        self.right_fwd.set_low();
        self.right_back.set_low();
        info!("motors: stop");
    }

    /// Rotates the robot counter-clockwise in place.
    ///
    /// Left motor reverses while the right motor drives forward.
    fn turn_left(&mut self) {
        self.pwm_left.set_duty_cycle(DRIVE_DUTY).ok();
        self.pwm_right.set_duty_cycle(DRIVE_DUTY).ok();
        self.left_fwd.set_low();
        self.left_back.set_high();
        self.right_fwd.set_high();
        self.right_back.set_low();
        info!("motors: turn left");
    }
}
