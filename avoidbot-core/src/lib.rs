// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Obstacle-avoidance logic for a differential-drive robot.
//!
//! This crate holds everything about the robot that is not tied to a
//! particular board: the HC-SR04 range-sampling protocol, the pulse-width
//! to distance conversion, and the avoidance state machine that decides
//! between driving forward, waiting for a transient obstacle to clear, and
//! turning left until the path opens up.
//!
//! # Architecture
//!
//! All hardware access goes through the capability traits in [`ports`]:
//!
//! - [`ports::TriggerLine`] / [`ports::EchoLine`]: the two sensor GPIOs
//! - [`ports::TimeSource`]: blocking busy-wait delays
//! - [`ports::MotorPort`]: forward, stop, and turn-left drive commands
//! - [`ports::DisplayPort`]: status label rendering
//!
//! The firmware crate provides hardware-backed implementations; [`sim`]
//! provides no-std simulation implementations used by the tests in this
//! crate.
//!
//! # Control flow
//!
//! [`controller::AvoidanceController::run`] owns the loop: each iteration
//! takes one fresh distance sample and either drives forward or enters the
//! stop / recheck / recovery-turn sequence. There is no error type anywhere
//! in this crate; sensor failure modes degrade to defined sentinel values
//! (see [`distance`]).

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod distance;
pub mod ports;
pub mod range_sensor;
pub mod sim;

pub use controller::{AvoidanceController, MotionState};
pub use ports::{DisplayPort, EchoLine, MotorPort, StatusLabel, TimeSource, TriggerLine};
pub use range_sensor::RangeSensor;
