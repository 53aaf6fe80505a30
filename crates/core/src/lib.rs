// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

pub mod config;
pub mod dispatch;
pub mod pins;
pub mod queue;
pub mod registers;
pub mod workload;

mod tests;

/// Errors raised by queue and register operations.
///
/// All of these are non-fatal and local to the failed operation: the
/// data structure involved is left unchanged and the caller decides how
/// to proceed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("queue is full")]
    QueueFull,
    #[error("queue is empty")]
    QueueEmpty,
    #[error("register {0} is not writable")]
    PermissionDenied(registers::RegisterId),
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
