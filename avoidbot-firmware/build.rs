// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Build script for the obstacle-avoidance robot firmware
//!
//! Configures the linker for the RP2350 by copying the `memory.x` layout
//! into the build output directory and adding it to the linker search
//! path. The layout defines FLASH (4MB at 0x10000000), RAM (512KB at
//! 0x20000000) and the two dedicated scratch banks SRAM8/SRAM9, plus the
//! boot and binary-info sections the RP2350 bootrom and picotool expect.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // Get the output directory where cargo places build artifacts
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    // Copy memory.x to the output directory for the linker to find
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();

    // Tell cargo to add the output directory to the linker search path
    println!("cargo:rustc-link-search={}", out.display());

    // Rebuild if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
}
