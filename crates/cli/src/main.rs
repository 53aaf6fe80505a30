// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::Context;
use axlsim_core::config::{Pipeline, RunConfig};
use axlsim_core::dispatch::{
    dispatch_instruction, dispatch_interruption, Direction, InstructionOutcome,
};
use axlsim_core::queue::{CircularQueue, LinearQueue};
use axlsim_core::registers::{RegisterBank, RegisterId};
use axlsim_core::workload::{populate_instructions, populate_interruptions, SplitMix64};
use axlsim_core::SimError;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info};

const EXIT_OK: u8 = 0;
const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "AXLSim accelerometer interface simulator",
    long_about = None
)]
struct Cli {
    /// Pipeline to run: "instructions" (linear queue against the register
    /// bank) or "interrupts" (circular queue of interrupt events)
    #[arg(long, default_value = "interrupts", value_parser = Pipeline::from_str)]
    pipeline: Pipeline,

    /// Workload seed for reproducible runs (default: system entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final system state snapshot (JSON) to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Enable dispatch-level execution tracing
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the queue/dispatch trace.
    if cli.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = RunConfig {
        pipeline: cli.pipeline,
        seed: cli.seed,
    };
    info!("Starting AXLSim: {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => SplitMix64::from_seed(seed),
        None => SplitMix64::from_entropy(),
    };

    match config.pipeline {
        Pipeline::Instructions => run_instructions(&mut rng, cli.snapshot.as_deref()),
        Pipeline::Interrupts => run_interruptions(&mut rng, cli.snapshot.as_deref()),
    }
}

/// Linear pipeline: configure the bank, populate the instruction queue,
/// then peek/dispatch/dequeue one item at a time until empty.
fn run_instructions(rng: &mut SplitMix64, snapshot: Option<&Path>) -> ExitCode {
    let mut bank = RegisterBank::new();
    let mut queue = LinearQueue::new();

    print_system_config(&bank);

    if let Err(err) = populate_instructions(&mut queue, rng) {
        error!("failed to populate instruction queue: {err}");
        return ExitCode::from(EXIT_RUNTIME_ERROR);
    }
    print_linear_queue(&queue);

    while !queue.is_empty() {
        let instruction = match queue.peek() {
            Ok(instruction) => instruction,
            Err(err) => {
                error!("instruction queue corrupted: {err}");
                return ExitCode::from(EXIT_RUNTIME_ERROR);
            }
        };
        match dispatch_instruction(&mut bank, instruction) {
            Ok(InstructionOutcome::Read(byte)) => {
                println!("[{}] read 0x{:02x}", instruction.register, byte);
            }
            Ok(InstructionOutcome::Written) => {
                println!("[{}] writing successful", instruction.register);
            }
            Err(SimError::PermissionDenied(register)) => {
                println!("[{}] you cannot write to this register", register);
            }
            // Dispatch failures are local to the item; keep draining.
            Err(err) => error!("instruction dispatch failed: {err}"),
        }
        if let Err(err) = queue.dequeue() {
            error!("instruction queue corrupted: {err}");
            return ExitCode::from(EXIT_RUNTIME_ERROR);
        }
        print_linear_queue(&queue);
    }

    let state = serde_json::json!({
        "pipeline": "instructions",
        "registers": bank.snapshot(),
        "queue": queue.snapshot(),
    });
    finish(snapshot, state)
}

/// Circular pipeline: populate the interrupt queue to capacity, then
/// dequeue and dispatch one event at a time until empty.
fn run_interruptions(rng: &mut SplitMix64, snapshot: Option<&Path>) -> ExitCode {
    let mut queue = CircularQueue::new();

    if let Err(err) = populate_interruptions(&mut queue, rng) {
        error!("failed to populate interrupt queue: {err}");
        return ExitCode::from(EXIT_RUNTIME_ERROR);
    }
    print_circular_queue(&queue);

    while !queue.is_empty() {
        let event = match queue.dequeue() {
            Ok(event) => event,
            Err(err) => {
                error!("interrupt queue corrupted: {err}");
                return ExitCode::from(EXIT_RUNTIME_ERROR);
            }
        };
        match dispatch_interruption(event) {
            Ok(outcome) => match outcome.direction {
                Direction::Received => {
                    println!("{}, 0x{:02x} received.", outcome.kind, outcome.data);
                }
                Direction::Sending => {
                    println!("{}, sending 0x{:02x}.", outcome.kind, outcome.data);
                }
            },
            // A bad event is dropped; the queue itself is still sound.
            Err(err) => error!("interrupt dispatch failed: {err}"),
        }
        print_circular_queue(&queue);
    }

    let state = serde_json::json!({
        "pipeline": "interrupts",
        "queue": queue.snapshot(),
    });
    finish(snapshot, state)
}

fn finish(snapshot: Option<&Path>, state: serde_json::Value) -> ExitCode {
    if let Some(path) = snapshot {
        if let Err(err) = write_snapshot(path, &state) {
            error!("failed to write snapshot: {err:#}");
            return ExitCode::from(EXIT_RUNTIME_ERROR);
        }
        info!("Snapshot written to {}", path.display());
    }
    info!("Run complete");
    ExitCode::from(EXIT_OK)
}

fn write_snapshot(path: &Path, state: &serde_json::Value) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(state).context("serializing snapshot")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn print_system_config(bank: &RegisterBank) {
    println!("System configuration:");
    for id in RegisterId::ALL {
        let register = bank.register(id);
        println!(
            "  {} at 0x{:02x}, {}",
            id,
            register.address(),
            if register.is_writable() {
                "read-write"
            } else {
                "read-only"
            }
        );
    }
}

fn print_linear_queue(queue: &LinearQueue) {
    if queue.is_empty() {
        println!("Linear queue is empty");
        return;
    }
    println!("Current queue:");
    for (slot, instruction) in queue.iter_pending() {
        println!("{}. {}", slot, instruction);
    }
}

fn print_circular_queue(queue: &CircularQueue) {
    if queue.is_empty() {
        println!("Circular queue is empty");
        return;
    }
    println!("Circular queue elements are:");
    for (slot, event) in queue.iter_pending() {
        println!("{}. {}", slot, event);
    }
}
