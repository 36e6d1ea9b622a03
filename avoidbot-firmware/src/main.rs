// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! RP2350A Obstacle-Avoidance Robot
//!
//! Autonomous firmware for a differential-drive robot that samples the
//! distance to the nearest obstacle with an HC-SR04 ultrasonic sensor and
//! decides between driving forward, waiting for the path to clear, and
//! turning left until it does. The current decision is mirrored on an
//! SSD1306 status display.
//!
//! # Hardware Configuration
//! - **Microcontroller**: RP2350A (ARM Cortex-M33)
//! - **Range sensor**: HC-SR04, trigger on GPIO 2, echo on GPIO 3 (pull-down)
//! - **Motors**: Dual DC motors with H-bridge driver
//!   - Left motor: PWM on GPIO 16 (PWMA), direction on GPIO 17 (AIN2) & GPIO 18 (AIN1)
//!   - Right motor: PWM on GPIO 21 (PWMB), direction on GPIO 19 (BIN1) & GPIO 20 (BIN2)
//! - **Display**: SSD1306 128x64 OLED on I2C1 (SDA GPIO 14, SCL GPIO 15)
//! - **Status LED**: GPIO 25
//!
//! # Behavior
//! - Clear path (> 20 cm, or no echo at all): drive forward, show `FORWARD`
//! - Obstacle at or inside 20 cm: stop, show `WAITING`, hold 5 s, recheck
//! - Still blocked: show `TURN LEFT` and pulse left turns until a reading
//!   clears, then drive forward again
//!
//! All timing is software busy-wait; there is no interrupt-driven capture.
//! The decision logic itself lives in the `avoidbot-core` crate and is
//! exercised by host tests there.
//!
//! # Build
//! ```bash
//! cargo build --release
//! ```
//!
//! # Flash
//! ```bash
//! cargo run --release
//! ```

#![no_std]
#![no_main]

use avoidbot_core::{AvoidanceController, RangeSensor};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

mod config;
mod display;
mod motor;
mod range_io;

use config::{DRIVE_DUTY, PWM_TOP};
use display::StatusDisplay;
use motor::MotorDriver;
use range_io::{BusyWaitClock, EchoPin, TriggerPin};

/// Firmware image definition required by the RP2350 bootrom
#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Program metadata for picotool info command
///
/// This information is embedded in the binary and can be read by picotool
/// to display program information when querying the firmware.
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Obstacle Avoidance Robot"),
    embassy_rp::binary_info::rp_program_description!(c"RP2350A robot with HC-SR04 avoidance"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Main robot task
///
/// Brings up all peripherals, assembles the port implementations, and
/// hands control to the avoidance state machine.
///
/// # Initialization Sequence
/// 1. Configure sensor GPIOs (trigger output, pulled-down echo input)
/// 2. Configure PWM slices and H-bridge direction pins for the motors
/// 3. Initialize the SSD1306 status display on I2C1
/// 4. Run the controller loop
///
/// # Safety
/// Never returns. Runs indefinitely until power loss or reset.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RP2350A Obstacle Avoidance Robot starting");
    let p = embassy_rp::init(Default::default());

    // Status LED on GPIO 25, high once bring-up completes
    let mut led = Output::new(p.PIN_25, Level::Low);

    // HC-SR04 sensor lines
    let trigger = TriggerPin::new(Output::new(p.PIN_2, Level::Low));
    let echo = EchoPin::new(Input::new(p.PIN_3, Pull::Down));
    let sensor = RangeSensor::new(trigger, echo);

    // Motor direction control pins
    let left_fwd = Output::new(p.PIN_18, Level::Low); // AIN1
    let left_back = Output::new(p.PIN_17, Level::Low); // AIN2
    let right_fwd = Output::new(p.PIN_19, Level::Low); // BIN1
    let right_back = Output::new(p.PIN_20, Level::Low); // BIN2

    // PWM for motor speed control: fixed period, fixed drive duty
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;

    // Left motor PWM on GPIO 16 (PWMA)
    let pwm_left = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.clone());

    // Right motor PWM on GPIO 21 (PWMB)
    let pwm_right = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, pwm_config.clone());

    let motors = MotorDriver::new(
        pwm_left, pwm_right, left_fwd, left_back, right_fwd, right_back,
    );

    // Status display on I2C1
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, I2cConfig::default());
    let display = StatusDisplay::new(i2c);

    let mut controller = AvoidanceController::new(sensor, motors, display, BusyWaitClock);

    info!(
        "Robot ready: threshold {} cm, drive duty {}/{}",
        avoidbot_core::config::OBSTACLE_THRESHOLD_CM,
        DRIVE_DUTY,
        PWM_TOP
    );
    led.set_high();

    controller.run()
}
