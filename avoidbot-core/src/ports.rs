// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Capability traits for the robot's peripherals.
//!
//! The controller and range sensor are written entirely against these
//! traits. Each one has a hardware-backed implementation in the firmware
//! crate and a simulation implementation in [`crate::sim`], so the whole
//! decision procedure can be exercised on a host without a board attached.
//!
//! None of the operations return errors. The peripherals these model
//! (GPIO levels, PWM duty registers, a status OLED) either cannot fail or
//! fail in ways the original hardware silently ignored, and the avoidance
//! logic has no error path to route a failure into.

/// The sensor trigger output line.
pub trait TriggerLine {
    /// Drives the trigger line high.
    fn set_high(&mut self);

    /// Drives the trigger line low.
    fn set_low(&mut self);
}

/// The sensor echo input line.
pub trait EchoLine {
    /// Samples the current echo line level.
    ///
    /// Non-blocking: one call is one instantaneous level read. The range
    /// protocol calls this once per polling tick.
    fn is_asserted(&mut self) -> bool;
}

/// Blocking busy-wait time source.
///
/// Every wait in the system goes through this trait: trigger settle, echo
/// polling ticks, the obstacle settle hold, turn pulses, and the
/// inter-cycle delay. There is no cancellation; a delay blocks the single
/// thread of control for its full duration.
pub trait TimeSource {
    /// Busy-waits for approximately `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Busy-waits for approximately `ms` milliseconds.
    ///
    /// Default implementation loops over [`TimeSource::delay_us`];
    /// hardware implementations may override it with a native
    /// millisecond delay.
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

/// Drive motor commands.
///
/// All three commands are idempotent: re-issuing the current mode is
/// harmless, and the controller relies on that in its recovery sub-loop.
pub trait MotorPort {
    /// Drives both wheels forward.
    fn forward(&mut self);

    /// Stops both wheels.
    fn stop(&mut self);

    /// Rotates the robot counter-clockwise in place.
    fn turn_left(&mut self);
}

/// Status display commands.
pub trait DisplayPort {
    /// Renders the given status label, replacing whatever was shown before.
    fn show(&mut self, label: StatusLabel);
}

/// The fixed set of status labels the controller can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLabel {
    /// Path is clear, robot is driving.
    Forward,
    /// Robot is held stopped (shown during the power-on hold).
    Stop,
    /// Obstacle detected, waiting for it to clear.
    Waiting,
    /// Recovery turn in progress.
    TurnLeft,
}

impl StatusLabel {
    /// Returns the display text for this label.
    pub fn text(&self) -> &'static str {
        match self {
            StatusLabel::Forward => "FORWARD",
            StatusLabel::Stop => "STOP",
            StatusLabel::Waiting => "WAITING",
            StatusLabel::TurnLeft => "TURN LEFT",
        }
    }
}
