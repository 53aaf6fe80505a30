// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

pub mod circular;
pub mod linear;

pub use circular::{CircularQueue, CIRCULAR_CAPACITY};
pub use linear::{LinearQueue, LINEAR_CAPACITY};

use crate::pins::{GpioPin, SpiMode, SpiPin};
use crate::registers::RegisterId;
use std::fmt;

/// A pending register access: READ or WRITE against one register, with a
/// data byte for the write case. Immutable once enqueued; consumed exactly
/// once by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Instruction {
    pub mode: SpiMode,
    pub register: RegisterId,
    pub data: u8,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SPI mode: {}, register: {} (0x{:02x}), data: 0x{:02x}",
            self.mode,
            self.register,
            self.register.address(),
            self.data
        )
    }
}

/// A pending hardware interrupt event: the GPIO line it arrived on, the SPI
/// pin carrying the transfer, and a data byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Interruption {
    pub gpio_pin: GpioPin,
    pub spi_pin: SpiPin,
    pub data: u8,
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPIO pin: {} (0x{:02x}), SPI pin: {} (0x{:02x}), data: 0x{:02x}",
            self.gpio_pin,
            self.gpio_pin.code(),
            self.spi_pin,
            self.spi_pin.code(),
            self.data
        )
    }
}
