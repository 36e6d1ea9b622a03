// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Hardware port implementations for the range sensor and time source.
//!
//! Thin adapters from the capability traits in `avoidbot_core::ports` to
//! `embassy-rp` GPIO and `embassy-time` busy-wait delays. The echo
//! measurement is software timed (there is no input-capture timer wired
//! to the echo pin), so the time source here blocks with
//! [`embassy_time::block_for`] rather than yielding to the executor;
//! polling granularity is what the distance calibration depends on.

use avoidbot_core::{EchoLine, TimeSource, TriggerLine};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{block_for, Duration};

/// HC-SR04 trigger line over a push-pull GPIO output.
pub struct TriggerPin {
    pin: Output<'static>,
}

impl TriggerPin {
    /// Wraps the given output pin.
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl TriggerLine for TriggerPin {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// HC-SR04 echo line over a pulled-down GPIO input.
pub struct EchoPin {
    pin: Input<'static>,
}

impl EchoPin {
    /// Wraps the given input pin.
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl EchoLine for EchoPin {
    fn is_asserted(&mut self) -> bool {
        self.pin.is_high()
    }
}

/// Busy-wait time source backed by the embassy time driver.
///
/// Both delays block the executor thread for their full duration. That is
/// intentional: the controller is a single serial thread of control and
/// every wait in the decision procedure is an in-line busy-wait.
pub struct BusyWaitClock;

impl TimeSource for BusyWaitClock {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
