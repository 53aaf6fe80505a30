// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::pins::{GpioPin, SpiMode, SpiPin};
use crate::queue::{Instruction, Interruption};
use crate::registers::RegisterBank;
use crate::{SimError, SimResult};
use std::fmt;

/// Result of applying one instruction against the register bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum InstructionOutcome {
    /// READ: the register's current byte.
    Read(u8),
    /// WRITE accepted and stored.
    Written,
}

/// Physical meaning of the interrupt line an event arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Touch,
    GravityChange,
    Inactivity,
    DoubleTap,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Touch => "TOUCH DETECTED",
            Self::GravityChange => "GRAVITY CHANGE",
            Self::Inactivity => "INACTIVITY MODE",
            Self::DoubleTap => "DOUBLE TAP DETECTED",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the SPI pin carried data into or out of the microcontroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Received,
    Sending,
}

/// Result of dispatching one interrupt event. `data` is returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct InterruptionOutcome {
    pub kind: EventKind,
    pub direction: Direction,
    pub data: u8,
}

/// Applies one queued instruction against the register bank.
///
/// Reads always return the current byte; writes only reach the stored byte
/// of the one writable register (INTERRUPT_CONFIGURE) and come back as
/// `PermissionDenied` for the read-only ones, with no mutation. The
/// register enumeration is closed, so the unreachable-register case of the
/// original design is ruled out by exhaustive matching instead of a runtime
/// branch.
pub fn dispatch_instruction(
    bank: &mut RegisterBank,
    instruction: Instruction,
) -> SimResult<InstructionOutcome> {
    match instruction.mode {
        SpiMode::Read => {
            let byte = bank.read(instruction.register);
            tracing::debug!(
                "[{}] read 0x{:02x}",
                instruction.register,
                byte
            );
            Ok(InstructionOutcome::Read(byte))
        }
        SpiMode::Write => {
            bank.write(instruction.register, instruction.data)?;
            tracing::debug!(
                "[{}] write of 0x{:02x} successful",
                instruction.register,
                instruction.data
            );
            Ok(InstructionOutcome::Written)
        }
    }
}

/// Classifies one interrupt event by its GPIO line and SPI transfer pin.
///
/// `SerialDataInput` means the microcontroller received the payload; the
/// other SPI pins mean it was sending. Either way the payload comes back
/// unchanged as the dispatch result. The chip-select line carries no
/// interrupts, so an event claiming it is a programming defect, reported
/// as `InternalInconsistency` and left non-fatal.
pub fn dispatch_interruption(event: Interruption) -> SimResult<InterruptionOutcome> {
    let kind = match event.gpio_pin {
        GpioPin::Int1 => EventKind::Touch,
        GpioPin::Int2 => EventKind::GravityChange,
        GpioPin::Int3 => EventKind::Inactivity,
        GpioPin::Int4 => EventKind::DoubleTap,
        GpioPin::ChipSelect => {
            tracing::error!("chip-select line delivered as an interrupt event");
            return Err(SimError::InternalInconsistency(
                "chip-select line is not an interrupt source",
            ));
        }
    };
    let direction = if event.spi_pin == SpiPin::SerialDataInput {
        Direction::Received
    } else {
        Direction::Sending
    };
    match direction {
        Direction::Received => {
            tracing::debug!("{}, 0x{:02x} received.", kind, event.data);
        }
        Direction::Sending => {
            tracing::debug!("{}, sending 0x{:02x}.", kind, event.data);
        }
    }
    Ok(InterruptionOutcome {
        kind,
        direction,
        data: event.data,
    })
}
