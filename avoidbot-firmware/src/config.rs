// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Hardware configuration and pin mappings for the RP2350A robot.
//!
//! This module defines all hardware-specific configuration: GPIO pin
//! assignments and PWM drive parameters. Decision and sensor-protocol
//! constants live in `avoidbot_core::config`; nothing here is tunable at
//! runtime.
//!
//! # Pin Mapping Summary
//!
//! ## Ultrasonic Sensor (HC-SR04)
//! - **Trigger**: GPIO 2 (output)
//! - **Echo**: GPIO 3 (input, pull-down)
//!
//! ## Motors
//! - **Left Motor PWM**: GPIO 16 (PWM_SLICE0 Channel A)
//! - **Left Forward**: GPIO 18 (AIN1)
//! - **Left Backward**: GPIO 17 (AIN2)
//! - **Right Motor PWM**: GPIO 21 (PWM_SLICE2 Channel B)
//! - **Right Forward**: GPIO 19 (BIN1)
//! - **Right Backward**: GPIO 20 (BIN2)
//!
//! ## Status Display (SSD1306 over I2C1)
//! - **SDA**: GPIO 14
//! - **SCL**: GPIO 15
//!
//! ## Indicators
//! - **Status LED**: GPIO 25 (onboard LED)
//!
//! # PWM Configuration
//!
//! Both motor PWM slices run with a fixed period and a fixed drive duty;
//! the avoidance controller has no speed profiling, so the duty never
//! changes at runtime.

/// GPIO pin number for status LED (onboard LED on RP2350)
#[allow(dead_code)]
pub const LED_PIN: u8 = 25;

/// GPIO pin number for the HC-SR04 trigger output
#[allow(dead_code)]
pub const TRIGGER_PIN: u8 = 2;

/// GPIO pin number for the HC-SR04 echo input (pull-down)
#[allow(dead_code)]
pub const ECHO_PIN: u8 = 3;

/// GPIO pin number for the display I2C data line (I2C1 SDA)
#[allow(dead_code)]
pub const DISPLAY_SDA_PIN: u8 = 14;

/// GPIO pin number for the display I2C clock line (I2C1 SCL)
#[allow(dead_code)]
pub const DISPLAY_SCL_PIN: u8 = 15;

/// GPIO pin number for left motor PWM (PWMA)
#[allow(dead_code)]
pub const LEFT_MOTOR_PWM_PIN: u8 = 16;

/// GPIO pin number for left motor forward direction (AIN1)
#[allow(dead_code)]
pub const LEFT_MOTOR_FORWARD_PIN: u8 = 18;

/// GPIO pin number for left motor backward direction (AIN2)
#[allow(dead_code)]
pub const LEFT_MOTOR_BACKWARD_PIN: u8 = 17;

/// GPIO pin number for right motor PWM (PWMB)
#[allow(dead_code)]
pub const RIGHT_MOTOR_PWM_PIN: u8 = 21;

/// GPIO pin number for right motor forward direction (BIN1)
#[allow(dead_code)]
pub const RIGHT_MOTOR_FORWARD_PIN: u8 = 19;

/// GPIO pin number for right motor backward direction (BIN2)
#[allow(dead_code)]
pub const RIGHT_MOTOR_BACKWARD_PIN: u8 = 20;

/// PWM top value defining the drive period
pub const PWM_TOP: u16 = 62_500;

/// Fixed PWM compare value used for every drive and turn command (~24% duty)
pub const DRIVE_DUTY: u16 = 15_000;
