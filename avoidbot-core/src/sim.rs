// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Simulation implementations of the peripheral ports.
//!
//! Each capability trait in [`crate::ports`] gets a no-std double here:
//! instant-returning delays, a scripted echo line, and command-recording
//! motor and display ports. They exist so the whole avoidance state
//! machine can be driven deterministically on a host; the tests in this
//! crate are their primary consumer.
//!
//! The echo double is scripted at the electrical level: per measurement
//! it describes when the line rises and how long it stays high, in the
//! same 1 µs polling ticks the sensor counts. The sensor's timeout and
//! truncation behavior is therefore exercised for real rather than
//! stubbed out.

use heapless::{Deque, Vec};

use crate::config::ECHO_TIMEOUT_TICKS;
use crate::ports::{DisplayPort, EchoLine, MotorPort, StatusLabel, TimeSource, TriggerLine};

/// One scripted echo response, consumed by a single measurement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EchoPulse {
    /// The line never rises; the measurement times out to the no-echo
    /// sentinel.
    Silent,
    /// The line rises after `lead` polls and measures `width` ticks high.
    ///
    /// The poll that first observes the rising edge is the edge itself,
    /// not part of the measured width; the line stays asserted for
    /// `width` further polls, so a measurement of this pulse counts
    /// exactly `width` ticks.
    Return {
        /// Polls before the rising edge.
        lead: u32,
        /// Asserted ticks observed by the measuring loop.
        width: u32,
    },
    /// The line is asserted and never drops again. Every measurement from
    /// here on truncates at the ceiling.
    Stuck,
}

/// Scripted echo input line.
///
/// Plays back a queue of [`EchoPulse`] entries, one per measurement
/// cycle. Once the script is exhausted the line reads permanently low,
/// which the sensor reports as no echo, unless a repeating pulse was
/// configured, in which case that pulse plays for every further
/// measurement.
pub struct SimEcho {
    pulses: Deque<EchoPulse, 16>,
    /// Pulse replayed forever once the queue is empty.
    repeat: Option<EchoPulse>,
    /// Polls consumed from the current pulse.
    emitted: u32,
}

impl SimEcho {
    /// Creates a scripted echo line from the given pulse sequence.
    pub fn script(pulses: &[EchoPulse]) -> Self {
        let mut queue = Deque::new();
        for pulse in pulses {
            queue.push_back(*pulse).ok();
        }
        Self {
            pulses: queue,
            repeat: None,
            emitted: 0,
        }
    }

    /// Creates an echo line that plays the same pulse on every
    /// measurement, indefinitely.
    pub fn repeating(pulse: EchoPulse) -> Self {
        Self {
            pulses: Deque::new(),
            repeat: Some(pulse),
            emitted: 0,
        }
    }

    fn advance(&mut self) {
        self.pulses.pop_front();
        self.emitted = 0;
    }
}

impl EchoLine for SimEcho {
    fn is_asserted(&mut self) -> bool {
        let pulse = match self.pulses.front().copied().or(self.repeat) {
            Some(pulse) => pulse,
            None => return false,
        };
        match pulse {
            EchoPulse::Silent => {
                self.emitted += 1;
                // The sensor gives up after exactly the ceiling in failed
                // polls; line up the script advance with that.
                if self.emitted >= ECHO_TIMEOUT_TICKS {
                    self.advance();
                }
                false
            }
            EchoPulse::Return { lead, width } => {
                if self.emitted < lead {
                    self.emitted += 1;
                    false
                } else if self.emitted <= lead + width {
                    // The poll at `lead` is the rising edge that ends the
                    // rise-wait loop; the next `width` polls are what the
                    // measuring loop counts.
                    self.emitted += 1;
                    true
                } else {
                    // Falling edge; this poll ends the measurement.
                    self.advance();
                    false
                }
            }
            EchoPulse::Stuck => true,
        }
    }
}

/// Edge-counting trigger output line.
#[derive(Debug, Default)]
pub struct SimTrigger {
    /// Number of `set_high` calls observed.
    pub highs: u32,
    /// Number of `set_low` calls observed.
    pub lows: u32,
}

impl SimTrigger {
    /// Creates a trigger line with zeroed edge counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TriggerLine for SimTrigger {
    fn set_high(&mut self) {
        self.highs += 1;
    }

    fn set_low(&mut self) {
        self.lows += 1;
    }
}

/// Instant-returning time source that records requested delays.
#[derive(Debug, Default)]
pub struct SimClock {
    /// Total microseconds requested via `delay_us`.
    pub us_total: u64,
    /// Total milliseconds requested via `delay_ms`.
    pub ms_total: u64,
}

impl SimClock {
    /// Creates a time source with zeroed accumulators.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeSource for SimClock {
    fn delay_us(&mut self, us: u32) {
        self.us_total += us as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_total += ms as u64;
    }
}

/// A drive command observed by [`SimMotor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Both wheels forward.
    Forward,
    /// Both wheels stopped.
    Stop,
    /// Counter-clockwise in-place turn.
    TurnLeft,
}

/// Command-recording motor port.
///
/// Keeps per-command counters plus a best-effort ordered history of the
/// first commands received. Long recovery runs overflow the history; the
/// counters stay exact.
#[derive(Debug, Default)]
pub struct SimMotor {
    /// Ordered history of commands, capped at capacity.
    pub history: Vec<MotorCommand, 32>,
    /// Total `forward` calls.
    pub forward_count: u32,
    /// Total `stop` calls.
    pub stop_count: u32,
    /// Total `turn_left` calls.
    pub turn_left_count: u32,
}

impl SimMotor {
    /// Creates a motor port with empty history and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MotorPort for SimMotor {
    fn forward(&mut self) {
        self.forward_count += 1;
        self.history.push(MotorCommand::Forward).ok();
    }

    fn stop(&mut self) {
        self.stop_count += 1;
        self.history.push(MotorCommand::Stop).ok();
    }

    fn turn_left(&mut self) {
        self.turn_left_count += 1;
        self.history.push(MotorCommand::TurnLeft).ok();
    }
}

/// Label-recording display port.
#[derive(Debug, Default)]
pub struct SimDisplay {
    /// Ordered history of shown labels, capped at capacity.
    pub history: Vec<StatusLabel, 32>,
}

impl SimDisplay {
    /// Creates a display port with empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayPort for SimDisplay {
    fn show(&mut self, label: StatusLabel) {
        self.history.push(label).ok();
    }
}
