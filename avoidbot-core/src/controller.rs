// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Obstacle-avoidance state machine.
//!
//! The controller owns the single thread of control: each loop iteration
//! takes one fresh distance sample and decides between driving forward,
//! stopping to wait out a transient obstacle, and turning left until the
//! path clears. At most one motor command and one display update are
//! issued per decision.
//!
//! # Decision Procedure
//!
//! 1. Measure. Above the threshold: drive forward.
//! 2. At or below the threshold: stop, show `WAITING`, hold for the
//!    settle delay, and re-measure.
//! 3. Cleared during the wait: drive forward.
//! 4. Still blocked: show `TURN LEFT` and pulse left turns, re-measuring
//!    after each pulse, until a reading clears the threshold. Then drive
//!    forward.
//!
//! A distance exactly equal to the threshold counts as blocked at every
//! check.
//!
//! # Liveness
//!
//! The recovery sub-loop in step 4 has no iteration bound; it exits only
//! on a clear reading. A persistently blocked path or an echo line stuck
//! asserted (which truncates every measurement to a short distance) keeps
//! the robot turning in place forever. That matches the deployed
//! behavior; see DESIGN.md for the known-risk note.
//!
//! # State
//!
//! [`MotionState`] is the controller's only memory across iterations.
//! Distance values are ephemeral: sampled, classified, and discarded
//! within one decision, with no smoothing or history.

use crate::config::{
    LOOP_DELAY_MS, OBSTACLE_THRESHOLD_CM, OBSTACLE_WAIT_MS, STARTUP_HOLD_MS, TURN_PULSE_MS,
};
use crate::ports::{DisplayPort, EchoLine, MotorPort, StatusLabel, TimeSource, TriggerLine};
use crate::range_sensor::RangeSensor;

/// Current motion decision of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// Power-on state, before the first measurement.
    Idle,
    /// Path clear, driving forward.
    Forward,
    /// Obstacle detected, holding position.
    Stopped,
    /// Recovery turn in progress.
    TurningLeft,
}

/// The avoidance state machine.
///
/// Owns the range sensor, the motor and display ports, and the time
/// source, and runs the decision procedure over them. Generic over the
/// port traits so the same logic drives real hardware and the simulation
/// doubles.
pub struct AvoidanceController<T, E, M, D, C> {
    sensor: RangeSensor<T, E>,
    motors: M,
    display: D,
    clock: C,
    state: MotionState,
}

impl<T, E, M, D, C> AvoidanceController<T, E, M, D, C>
where
    T: TriggerLine,
    E: EchoLine,
    M: MotorPort,
    D: DisplayPort,
    C: TimeSource,
{
    /// Creates a controller in the [`MotionState::Idle`] state.
    ///
    /// # Arguments
    ///
    /// * `sensor` - Range sensor to sample each iteration
    /// * `motors` - Drive motor port
    /// * `display` - Status display port
    /// * `clock` - Time source for all decision delays and sensor polling
    pub fn new(sensor: RangeSensor<T, E>, motors: M, display: D, clock: C) -> Self {
        Self {
            sensor,
            motors,
            display,
            clock,
            state: MotionState::Idle,
        }
    }

    /// Returns the current motion state.
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Power-on sequence: motors stopped, `STOP` on the display, and a
    /// fixed hold before the first measurement.
    ///
    /// The state stays [`MotionState::Idle`]; the hold is not a decision.
    pub fn startup(&mut self) {
        self.motors.stop();
        self.display.show(StatusLabel::Stop);
        self.clock.delay_ms(STARTUP_HOLD_MS);
    }

    /// Runs the controller forever.
    ///
    /// Performs the power-on sequence once, then loops: one decision per
    /// iteration followed by the fixed inter-cycle delay. Never returns;
    /// there is no terminal state.
    pub fn run(&mut self) -> ! {
        self.startup();
        loop {
            self.poll();
            self.clock.delay_ms(LOOP_DELAY_MS);
        }
    }

    /// Executes one full decision procedure.
    ///
    /// Takes the first measurement and either drives forward or walks the
    /// stop / recheck / recovery sequence. Blocks for the settle delay
    /// and, if the recheck is still blocked, inside the recovery sub-loop
    /// until a clear reading arrives.
    pub fn poll(&mut self) {
        let first = self.sensor.distance_cm(&mut self.clock);
        if first > OBSTACLE_THRESHOLD_CM {
            self.drive_forward();
            return;
        }

        // Obstacle at or inside the threshold: hold and give it a chance
        // to clear on its own.
        self.state = MotionState::Stopped;
        self.motors.stop();
        self.display.show(StatusLabel::Waiting);
        self.clock.delay_ms(OBSTACLE_WAIT_MS);

        let recheck = self.sensor.distance_cm(&mut self.clock);
        if recheck > OBSTACLE_THRESHOLD_CM {
            self.drive_forward();
            return;
        }

        // Still blocked: turn in place until a reading clears. Unbounded.
        self.state = MotionState::TurningLeft;
        self.display.show(StatusLabel::TurnLeft);
        while !self.turn_step() {}
        self.drive_forward();
    }

    /// Performs one recovery turn pulse and re-measures.
    ///
    /// Commands a left turn, holds for the pulse duration, then takes a
    /// fresh measurement.
    ///
    /// # Returns
    ///
    /// `true` if the new reading clears the threshold (the recovery
    /// sub-loop may exit), `false` if the path is still blocked.
    pub fn turn_step(&mut self) -> bool {
        self.motors.turn_left();
        self.clock.delay_ms(TURN_PULSE_MS);
        self.sensor.distance_cm(&mut self.clock) > OBSTACLE_THRESHOLD_CM
    }

    fn drive_forward(&mut self) {
        self.state = MotionState::Forward;
        self.motors.forward();
        self.display.show(StatusLabel::Forward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EchoPulse, MotorCommand, SimClock, SimDisplay, SimEcho, SimMotor, SimTrigger};

    /// Echo pulse widths used across the scenarios: 1160 ticks is exactly
    /// 20 cm (blocked by tie-break), 1218 is 21 cm (clear).
    const BLOCKED_PULSE: EchoPulse = EchoPulse::Return {
        lead: 2,
        width: 1160,
    };
    const CLEAR_PULSE: EchoPulse = EchoPulse::Return {
        lead: 2,
        width: 1218,
    };

    fn controller(
        script: &[EchoPulse],
    ) -> AvoidanceController<SimTrigger, SimEcho, SimMotor, SimDisplay, SimClock> {
        let sensor = RangeSensor::new(SimTrigger::new(), SimEcho::script(script));
        AvoidanceController::new(sensor, SimMotor::new(), SimDisplay::new(), SimClock::new())
    }

    #[test]
    fn starts_idle() {
        let ctl = controller(&[]);
        assert_eq!(ctl.state(), MotionState::Idle);
    }

    #[test]
    fn startup_stops_motors_and_holds() {
        let mut ctl = controller(&[]);
        ctl.startup();

        assert_eq!(ctl.motors.history.as_slice(), &[MotorCommand::Stop]);
        assert_eq!(ctl.display.history.as_slice(), &[StatusLabel::Stop]);
        assert_eq!(ctl.clock.ms_total, 5_000);
        assert_eq!(ctl.state(), MotionState::Idle);
    }

    #[test]
    fn no_echo_reads_as_clear_and_drives_forward() {
        // Scenario: the sensor sees nothing at all. No echo maps to the
        // clear-path distance and the robot drives without any settle
        // delay.
        let mut ctl = controller(&[EchoPulse::Silent]);
        ctl.poll();

        assert_eq!(ctl.state(), MotionState::Forward);
        assert_eq!(ctl.motors.history.as_slice(), &[MotorCommand::Forward]);
        assert_eq!(ctl.display.history.as_slice(), &[StatusLabel::Forward]);
        assert_eq!(ctl.clock.ms_total, 0);
    }

    #[test]
    fn clear_first_reading_drives_forward() {
        let mut ctl = controller(&[CLEAR_PULSE]);
        ctl.poll();

        assert_eq!(ctl.state(), MotionState::Forward);
        assert_eq!(ctl.motors.history.as_slice(), &[MotorCommand::Forward]);
        assert_eq!(ctl.clock.ms_total, 0);
    }

    #[test]
    fn threshold_tie_counts_as_blocked_then_recheck_clears() {
        // Scenario: exactly 20 cm on the first reading (blocked by
        // tie-break), 21 cm after the settle wait. The robot waits once
        // and drives forward without entering the recovery sub-loop.
        let mut ctl = controller(&[BLOCKED_PULSE, CLEAR_PULSE]);
        ctl.poll();

        assert_eq!(ctl.state(), MotionState::Forward);
        assert_eq!(
            ctl.motors.history.as_slice(),
            &[MotorCommand::Stop, MotorCommand::Forward]
        );
        assert_eq!(
            ctl.display.history.as_slice(),
            &[StatusLabel::Waiting, StatusLabel::Forward]
        );
        assert_eq!(ctl.clock.ms_total, 5_000);
        assert_eq!(ctl.motors.turn_left_count, 0);
    }

    #[test]
    fn recovery_turns_until_a_reading_clears() {
        // Scenario: blocked at the first check, still blocked at the
        // recheck and after the first turn pulse; the second turn pulse
        // measures clear. Forward is emitted exactly once, after the
        // clear reading.
        let mut ctl = controller(&[
            BLOCKED_PULSE,
            BLOCKED_PULSE,
            BLOCKED_PULSE,
            CLEAR_PULSE,
        ]);
        ctl.poll();

        assert_eq!(ctl.state(), MotionState::Forward);
        assert_eq!(
            ctl.motors.history.as_slice(),
            &[
                MotorCommand::Stop,
                MotorCommand::TurnLeft,
                MotorCommand::TurnLeft,
                MotorCommand::Forward,
            ]
        );
        assert_eq!(
            ctl.display.history.as_slice(),
            &[
                StatusLabel::Waiting,
                StatusLabel::TurnLeft,
                StatusLabel::Forward,
            ]
        );
        assert_eq!(ctl.motors.forward_count, 1);
        // Settle wait plus two turn pulses.
        assert_eq!(ctl.clock.ms_total, 5_000 + 200 + 200);
    }

    #[test]
    fn recovery_never_exits_while_every_reading_stays_blocked() {
        // A path that never clears: every measurement reads exactly the
        // threshold. The sub-loop has no iteration bound, so the only
        // observable guarantee is per step: each step reports blocked and
        // forward is never emitted, however long the loop runs.
        let sensor = RangeSensor::new(SimTrigger::new(), SimEcho::repeating(BLOCKED_PULSE));
        let mut ctl =
            AvoidanceController::new(sensor, SimMotor::new(), SimDisplay::new(), SimClock::new());

        ctl.state = MotionState::TurningLeft;
        for _ in 0..250 {
            assert!(!ctl.turn_step());
        }

        assert_eq!(ctl.motors.turn_left_count, 250);
        assert_eq!(ctl.motors.forward_count, 0);
        assert_eq!(ctl.state(), MotionState::TurningLeft);
    }
}
