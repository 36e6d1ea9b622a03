// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! SSD1306 status display over I2C.
//!
//! The display shows exactly one status label at a time, the current
//! decision of the avoidance controller. The `ssd1306` driver runs in
//! terminal mode, which keeps the character cursor as instance state
//! inside the driver; each `show` clears the screen and writes the label
//! from the home position.

use core::fmt::Write;

use avoidbot_core::{DisplayPort, StatusLabel};
use defmt::info;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use ssd1306::mode::TerminalMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Oled = Ssd1306<I2CInterface<I2c<'static, I2C1, Blocking>>, DisplaySize128x64, TerminalMode>;

/// Status display on a 128x64 SSD1306 panel.
pub struct StatusDisplay {
    oled: Oled,
}

impl StatusDisplay {
    /// Initializes the panel in terminal mode and clears it.
    ///
    /// Initialization failures are logged and otherwise ignored; a robot
    /// with a dead display still avoids obstacles.
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_terminal_mode();
        if oled.init().is_err() {
            defmt::warn!("display: init failed");
        }
        oled.clear().ok();
        Self { oled }
    }
}

impl DisplayPort for StatusDisplay {
    fn show(&mut self, label: StatusLabel) {
        self.oled.clear().ok();
        self.oled.write_str(label.text()).ok();
        info!("display: {}", label.text());
    }
}
