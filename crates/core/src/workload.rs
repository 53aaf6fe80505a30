// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::pins::{GpioPin, SpiMode, SpiPin};
use crate::queue::{CircularQueue, Instruction, Interruption, LinearQueue, CIRCULAR_CAPACITY};
use crate::registers::RegisterId;
use crate::SimResult;
use std::time::{SystemTime, UNIX_EPOCH};

/// Uniformly distributed integers in a caller-given inclusive range.
///
/// The workload generators take this as `&mut dyn RandomSource` so tests
/// can inject deterministic sequences. Randomness feeds test data only,
/// never control decisions.
pub trait RandomSource {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32;
}

/// Default PRNG (splitmix64). Good enough for workload generation and
/// cheap to seed either explicitly or from the system clock.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        Self::from_seed(nanos)
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = u64::from(max - min) + 1;
        min + (self.next_u64() % span) as u32
    }
}

/// Replays a fixed sequence of draws (cycling). Deterministic stand-in for
/// [`SplitMix64`] in tests and reproducible demos; each draw is clamped
/// into the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        let raw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        min + raw % (max - min + 1)
    }
}

/// An instruction targeting `register` with randomized mode and data.
pub fn random_instruction(register: RegisterId, rng: &mut dyn RandomSource) -> Instruction {
    let mode = if rng.next_in_range(0x00, 0x01) == SpiMode::Write as u32 {
        SpiMode::Write
    } else {
        SpiMode::Read
    };
    let data = rng.next_in_range(0x00, 0xFF) as u8;
    Instruction {
        mode,
        register,
        data,
    }
}

/// An interrupt event with randomized line, SPI pin and data.
pub fn random_interruption(rng: &mut dyn RandomSource) -> Interruption {
    let line = rng.next_in_range(0, (GpioPin::INTERRUPT_LINES.len() - 1) as u32);
    let pin = rng.next_in_range(0, (SpiPin::ALL.len() - 1) as u32);
    Interruption {
        gpio_pin: GpioPin::INTERRUPT_LINES[line as usize],
        spi_pin: SpiPin::ALL[pin as usize],
        data: rng.next_in_range(0x00, 0xFF) as u8,
    }
}

/// Test-workload order for the instruction queue: one instruction per
/// register, with INTERRUPT_CONFIGURE exercised twice so both the read and
/// the write path of the only writable register get traffic.
pub const INSTRUCTION_SEQUENCE: [RegisterId; 5] = [
    RegisterId::DeviceDefinition,
    RegisterId::GravityL,
    RegisterId::GravityH,
    RegisterId::InterruptConfigure,
    RegisterId::InterruptConfigure,
];

/// Enqueues the fixed five-instruction test workload. Stops at the first
/// rejected enqueue and reports the full condition to the caller.
pub fn populate_instructions(
    queue: &mut LinearQueue,
    rng: &mut dyn RandomSource,
) -> SimResult<()> {
    for register in INSTRUCTION_SEQUENCE {
        queue.enqueue(random_instruction(register, rng))?;
    }
    Ok(())
}

/// Fills the interrupt queue to capacity with randomized events. Stops at
/// the first rejected enqueue and reports the full condition.
pub fn populate_interruptions(
    queue: &mut CircularQueue,
    rng: &mut dyn RandomSource,
) -> SimResult<()> {
    for _ in 0..CIRCULAR_CAPACITY {
        queue.enqueue(random_interruption(rng))?;
    }
    Ok(())
}
