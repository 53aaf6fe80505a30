// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::Interruption;
use crate::{SimError, SimResult};

pub const CIRCULAR_CAPACITY: usize = 10;

const CAP: i8 = CIRCULAR_CAPACITY as i8;

/// Wrap-around bounded FIFO of pending interrupt events.
///
/// `front == -1` is the empty sentinel; full is
/// `front == (rear + 1) % CIRCULAR_CAPACITY` while non-empty. The sentinel
/// disambiguates empty from full, so all ten slots are usable (no "N-1
/// capacity" ring idiom). Indices wrap on every enqueue and dequeue, so the
/// queue is reusable indefinitely while occupancy stays within capacity.
#[derive(Debug, serde::Serialize)]
pub struct CircularQueue {
    slots: [Option<Interruption>; CIRCULAR_CAPACITY],
    front: i8,
    rear: i8,
}

impl CircularQueue {
    pub fn new() -> Self {
        Self {
            slots: [None; CIRCULAR_CAPACITY],
            front: -1,
            rear: -1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.front == -1
    }

    pub fn is_full(&self) -> bool {
        !self.is_empty() && self.front == (self.rear + 1) % CAP
    }

    /// Stores `item` at the next wrapped `rear` slot. A full queue rejects
    /// the item and is left unchanged.
    pub fn enqueue(&mut self, item: Interruption) -> SimResult<()> {
        if self.is_full() {
            return Err(SimError::QueueFull);
        }
        if self.is_empty() {
            self.front = 0;
        }
        self.rear = (self.rear + 1) % CAP;
        self.slots[self.rear as usize] = Some(item);
        Ok(())
    }

    /// Captures and removes the oldest item in one step (unlike the linear
    /// queue's split peek/dequeue). Taking the last remaining item resets
    /// both indices to the empty sentinel.
    pub fn dequeue(&mut self) -> SimResult<Interruption> {
        if self.is_empty() {
            return Err(SimError::QueueEmpty);
        }
        let item = self.slots[self.front as usize]
            .ok_or(SimError::InternalInconsistency("occupied circular slot is vacant"))?;
        if self.front == self.rear {
            self.front = -1;
            self.rear = -1;
        } else {
            self.front = (self.front + 1) % CAP;
        }
        Ok(item)
    }

    pub fn front(&self) -> i8 {
        self.front
    }

    pub fn rear(&self) -> i8 {
        self.rear
    }

    /// Current occupancy.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.rear - self.front).rem_euclid(CAP) as usize + 1
        }
    }

    /// Pending items with their slot indices, from front to rear.
    pub fn iter_pending(&self) -> impl Iterator<Item = (usize, Interruption)> + '_ {
        (0..self.len()).filter_map(move |k| {
            let i = (self.front as usize + k) % CIRCULAR_CAPACITY;
            self.slots[i].map(|item| (i, item))
        })
    }

    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for CircularQueue {
    fn default() -> Self {
        Self::new()
    }
}
