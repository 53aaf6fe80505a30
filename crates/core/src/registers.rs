// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::{SimError, SimResult};
use std::fmt;

/// The accelerometer's register map. Discriminants are the memory-mapped
/// addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterId {
    DeviceDefinition = 0xFF,
    GravityL = 0x10,
    GravityH = 0x11,
    InterruptConfigure = 0x20,
}

impl RegisterId {
    /// All registers, in the order the test workload enumerates them.
    pub const ALL: [RegisterId; 4] = [
        RegisterId::DeviceDefinition,
        RegisterId::GravityL,
        RegisterId::GravityH,
        RegisterId::InterruptConfigure,
    ];

    pub fn address(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DeviceDefinition => "DEVICE_DEFINITION",
            Self::GravityL => "GRAVITY_L",
            Self::GravityH => "GRAVITY_H",
            Self::InterruptConfigure => "INTERRUPT_CONFIGURE",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// Event-enable bits shared by the GRAVITY_H and INTERRUPT_CONFIGURE
    /// layouts. Bits [7:4] of both registers are reserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventEnable: u8 {
        const TAP            = 1 << 0;
        const GRAVITY_CHANGE = 1 << 1;
        const INACTIVITY     = 1 << 2;
        const DOUBLE_TAP     = 1 << 3;
    }
}

/// Mask/shift constants for the multi-bit register fields. Fields read and
/// write through the single stored byte; there is no shadow state.
pub mod fields {
    pub mod device_definition {
        pub const GRAVITY_SIZE_DEF_MASK: u8 = 0b0000_0011; // bits [1:0]
        pub const GRAVITY_SIZE_DEF_SHIFT: u8 = 0;
        pub const EXTRA_INTERRUPT_EN_MASK: u8 = 0b0000_0100; // bit 2
        pub const EXTRA_INTERRUPT_EN_SHIFT: u8 = 2;
        pub const DEVICE_STATE_MASK: u8 = 0b0000_1000; // bit 3
        pub const DEVICE_STATE_SHIFT: u8 = 3;
    }

    pub mod gravity_l {
        // Bits [1:0] are reserved.
        pub const MEASUREMENT_LSB_MASK: u8 = 0b1111_1100; // bits [7:2]
        pub const MEASUREMENT_LSB_SHIFT: u8 = 2;
    }
}

/// One simulated device register: a fixed address, a writability flag and a
/// single stored byte.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Register {
    address: u8,
    writable: bool,
    value: u8,
}

impl Register {
    fn new(address: u8, writable: bool) -> Self {
        Self {
            address,
            writable,
            value: 0,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn field(&self, mask: u8, shift: u8) -> u8 {
        (self.value & mask) >> shift
    }

    fn set_field(&mut self, mask: u8, shift: u8, field: u8) {
        self.value = (self.value & !mask) | ((field << shift) & mask);
    }
}

/// The simulated device's register bank.
///
/// Constructed once per run with the fixed address map and passed by
/// reference to every dispatch call. Not safe for concurrent mutation
/// without external synchronization; the simulator drains queues strictly
/// one item at a time on a single thread.
#[derive(Debug, serde::Serialize)]
pub struct RegisterBank {
    device_definition: Register,
    gravity_l: Register,
    gravity_h: Register,
    interrupt_configure: Register,
}

impl RegisterBank {
    /// One-time system configuration: fixed addresses and writability.
    /// DEVICE_DEFINITION, GRAVITY_L and GRAVITY_H are read-only;
    /// INTERRUPT_CONFIGURE is read-write. All values start at zero.
    pub fn new() -> Self {
        Self {
            device_definition: Register::new(0xFF, false),
            gravity_l: Register::new(0x10, false),
            gravity_h: Register::new(0x11, false),
            interrupt_configure: Register::new(0x20, true),
        }
    }

    pub fn register(&self, id: RegisterId) -> &Register {
        match id {
            RegisterId::DeviceDefinition => &self.device_definition,
            RegisterId::GravityL => &self.gravity_l,
            RegisterId::GravityH => &self.gravity_h,
            RegisterId::InterruptConfigure => &self.interrupt_configure,
        }
    }

    fn register_mut(&mut self, id: RegisterId) -> &mut Register {
        match id {
            RegisterId::DeviceDefinition => &mut self.device_definition,
            RegisterId::GravityL => &mut self.gravity_l,
            RegisterId::GravityH => &mut self.gravity_h,
            RegisterId::InterruptConfigure => &mut self.interrupt_configure,
        }
    }

    /// Reads are always permitted, regardless of writability.
    pub fn read(&self, id: RegisterId) -> u8 {
        self.register(id).value()
    }

    /// Stores `value` if the register is writable; read-only registers
    /// reject the write with no mutation.
    pub fn write(&mut self, id: RegisterId, value: u8) -> SimResult<()> {
        let reg = self.register_mut(id);
        if !reg.writable {
            tracing::debug!("[{}] write of 0x{:02x} rejected: read-only", id, value);
            return Err(SimError::PermissionDenied(id));
        }
        reg.value = value;
        Ok(())
    }

    // DEVICE_DEFINITION fields
    pub fn gravity_size_def(&self) -> u8 {
        use fields::device_definition::*;
        self.device_definition
            .field(GRAVITY_SIZE_DEF_MASK, GRAVITY_SIZE_DEF_SHIFT)
    }

    pub fn extra_interrupt_en(&self) -> bool {
        use fields::device_definition::*;
        self.device_definition
            .field(EXTRA_INTERRUPT_EN_MASK, EXTRA_INTERRUPT_EN_SHIFT)
            != 0
    }

    pub fn device_state(&self) -> bool {
        use fields::device_definition::*;
        self.device_definition
            .field(DEVICE_STATE_MASK, DEVICE_STATE_SHIFT)
            != 0
    }

    // GRAVITY_L fields
    pub fn measurement_lsb(&self) -> u8 {
        use fields::gravity_l::*;
        self.gravity_l
            .field(MEASUREMENT_LSB_MASK, MEASUREMENT_LSB_SHIFT)
    }

    // GRAVITY_H / INTERRUPT_CONFIGURE event-enable sets
    pub fn gravity_h_enable(&self) -> EventEnable {
        EventEnable::from_bits_truncate(self.gravity_h.value())
    }

    pub fn interrupt_enable(&self) -> EventEnable {
        EventEnable::from_bits_truncate(self.interrupt_configure.value())
    }

    /// Updates the enable bits of INTERRUPT_CONFIGURE, preserving the
    /// reserved upper nibble. Goes through the same permission check as a
    /// raw write.
    pub fn set_interrupt_enable(&mut self, enable: EventEnable) -> SimResult<()> {
        let mut scratch = *self.register(RegisterId::InterruptConfigure);
        scratch.set_field(EventEnable::all().bits(), 0, enable.bits());
        self.write(RegisterId::InterruptConfigure, scratch.value())
    }

    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}
