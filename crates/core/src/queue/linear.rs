// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::Instruction;
use crate::{SimError, SimResult};

pub const LINEAR_CAPACITY: usize = 5;

/// Non-wrapping bounded FIFO of pending register instructions.
///
/// `front` starts at -1 ("no item consumed yet") and only ever advances;
/// `rear` is the next free slot. Empty is `front == rear - 1`, full is
/// `rear == LINEAR_CAPACITY`. Once the queue has been filled and drained it
/// is permanently unusable: there is no wrap and no reset. That single-use
/// property is deliberate, in contrast with [`super::CircularQueue`].
#[derive(Debug, serde::Serialize)]
pub struct LinearQueue {
    slots: [Option<Instruction>; LINEAR_CAPACITY],
    front: i8,
    rear: i8,
}

impl LinearQueue {
    pub fn new() -> Self {
        Self {
            slots: [None; LINEAR_CAPACITY],
            front: -1,
            rear: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear - 1
    }

    pub fn is_full(&self) -> bool {
        self.rear as usize == LINEAR_CAPACITY
    }

    /// Stores `item` at `rear`. A full queue rejects the item and is left
    /// unchanged.
    pub fn enqueue(&mut self, item: Instruction) -> SimResult<()> {
        if self.is_full() {
            return Err(SimError::QueueFull);
        }
        self.slots[self.rear as usize] = Some(item);
        self.rear += 1;
        Ok(())
    }

    /// Advances `front` past the oldest unconsumed item. The slot itself is
    /// not cleared; only the index moves. `peek` + `dequeue` together
    /// implement consume-and-remove.
    pub fn dequeue(&mut self) -> SimResult<()> {
        if self.is_empty() {
            return Err(SimError::QueueEmpty);
        }
        self.front += 1;
        Ok(())
    }

    /// The oldest unconsumed item, without moving any index.
    pub fn peek(&self) -> SimResult<Instruction> {
        if self.is_empty() {
            return Err(SimError::QueueEmpty);
        }
        self.slots[(self.front + 1) as usize]
            .ok_or(SimError::InternalInconsistency("occupied linear slot is vacant"))
    }

    pub fn front(&self) -> i8 {
        self.front
    }

    pub fn rear(&self) -> i8 {
        self.rear
    }

    /// Number of unconsumed items.
    pub fn len(&self) -> usize {
        (self.rear - self.front - 1) as usize
    }

    /// Unconsumed items with their slot indices, oldest first.
    pub fn iter_pending(&self) -> impl Iterator<Item = (usize, Instruction)> + '_ {
        ((self.front + 1) as usize..self.rear as usize)
            .filter_map(|i| self.slots[i].map(|item| (i, item)))
    }

    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for LinearQueue {
    fn default() -> Self {
        Self::new()
    }
}
