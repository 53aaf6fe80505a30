// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use std::fmt;

/// GPIO lines between the microcontroller and the accelerometer.
///
/// Discriminants are the physical pin codes (0xA0..0xA4). `ChipSelect`
/// drives the SPI slave-select; the four `Int*` lines carry interrupt
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpioPin {
    ChipSelect = 0xA0,
    Int1 = 0xA1,
    Int2 = 0xA2,
    Int3 = 0xA3,
    Int4 = 0xA4,
}

impl GpioPin {
    /// The four lines that can deliver interrupt events, in hardware order.
    pub const INTERRUPT_LINES: [GpioPin; 4] =
        [GpioPin::Int1, GpioPin::Int2, GpioPin::Int3, GpioPin::Int4];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0xA0 => Some(Self::ChipSelect),
            0xA1 => Some(Self::Int1),
            0xA2 => Some(Self::Int2),
            0xA3 => Some(Self::Int3),
            0xA4 => Some(Self::Int4),
            _ => None,
        }
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ChipSelect => "CHIP_SELECT",
            Self::Int1 => "INT_1",
            Self::Int2 => "INT_2",
            Self::Int3 => "INT_3",
            Self::Int4 => "INT_4",
        };
        f.write_str(name)
    }
}

/// SPI lines (0xE0..0xE2). `SerialDataInput` means data inbound to the
/// microcontroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiPin {
    SerialDataOutput = 0xE0,
    SerialDataInput = 0xE1,
    SerialClock = 0xE2,
}

impl SpiPin {
    pub const ALL: [SpiPin; 3] = [
        SpiPin::SerialDataOutput,
        SpiPin::SerialDataInput,
        SpiPin::SerialClock,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0xE0 => Some(Self::SerialDataOutput),
            0xE1 => Some(Self::SerialDataInput),
            0xE2 => Some(Self::SerialClock),
            _ => None,
        }
    }
}

impl fmt::Display for SpiPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SerialDataOutput => "SERIAL_DATA_OUTPUT",
            Self::SerialDataInput => "SERIAL_DATA_INPUT",
            Self::SerialClock => "SERIAL_CLOCK",
        };
        f.write_str(name)
    }
}

/// Transfer direction of a register-access instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiMode {
    Read = 0x00,
    Write = 0x01,
}

impl fmt::Display for SpiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
        };
        f.write_str(name)
    }
}
