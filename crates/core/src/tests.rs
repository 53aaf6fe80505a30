// AXLSim - Accelerometer Interface Simulator
// Copyright (C) 2026 The AXLSim Authors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

#[cfg(test)]
mod integration_tests {
    use crate::dispatch::{dispatch_instruction, dispatch_interruption};
    use crate::pins::SpiMode;
    use crate::queue::{CircularQueue, LinearQueue, CIRCULAR_CAPACITY, LINEAR_CAPACITY};
    use crate::registers::{RegisterBank, RegisterId};
    use crate::workload::{
        populate_instructions, populate_interruptions, random_interruption, RandomSource,
        ScriptedSource, SplitMix64,
    };
    use crate::SimError;

    /// Full instruction pipeline: populate, then peek/dispatch/dequeue until
    /// empty, exactly like the runner loop.
    #[test]
    fn test_instruction_pipeline_drains_to_empty() {
        let mut bank = RegisterBank::new();
        let mut queue = LinearQueue::new();
        // Draws alternate (mode, data) pairs; every mode draw picks WRITE so
        // the one writable register actually gets written.
        let mut rng = ScriptedSource::new(vec![1, 0x05]);
        populate_instructions(&mut queue, &mut rng).unwrap();

        let mut dispatched = 0;
        let mut denied = 0;
        while !queue.is_empty() {
            let instruction = queue.peek().unwrap();
            match dispatch_instruction(&mut bank, instruction) {
                Ok(_) => {}
                Err(SimError::PermissionDenied(_)) => denied += 1,
                Err(other) => panic!("unexpected dispatch error: {other}"),
            }
            queue.dequeue().unwrap();
            dispatched += 1;
        }

        assert_eq!(dispatched, LINEAR_CAPACITY);
        // Three writes hit read-only registers, two hit INTERRUPT_CONFIGURE.
        assert_eq!(denied, 3);
        assert_eq!(bank.read(RegisterId::InterruptConfigure), 0x05);
        // The linear queue is spent for good after one fill/drain cycle.
        assert!(queue.is_full());
        assert_eq!(
            populate_instructions(&mut queue, &mut rng),
            Err(SimError::QueueFull)
        );
    }

    /// Full interrupt pipeline: populate to capacity, dequeue+dispatch until
    /// empty, then refill to show the circular queue is reusable.
    #[test]
    fn test_interrupt_pipeline_drains_and_queue_is_reusable() {
        let mut queue = CircularQueue::new();
        let mut rng = SplitMix64::from_seed(0xACCE_1E40);
        populate_interruptions(&mut queue, &mut rng).unwrap();

        let mut dispatched = 0;
        while !queue.is_empty() {
            let event = queue.dequeue().unwrap();
            let outcome = dispatch_interruption(event).unwrap();
            assert_eq!(outcome.data, event.data);
            dispatched += 1;
        }
        assert_eq!(dispatched, CIRCULAR_CAPACITY);

        populate_interruptions(&mut queue, &mut rng).unwrap();
        assert!(queue.is_full());
    }

    /// Occupancy equals #enqueues - #dequeues after any prefix of a long
    /// randomized enqueue/dequeue sequence, and never leaves [0, capacity].
    #[test]
    fn test_circular_occupancy_invariant_over_random_sequences() {
        let mut rng = SplitMix64::from_seed(99);
        let mut queue = CircularQueue::new();
        let mut enqueues = 0i64;
        let mut dequeues = 0i64;

        for _ in 0..10_000 {
            if rng.next_in_range(0, 1) == 0 {
                match queue.enqueue(random_interruption(&mut rng)) {
                    Ok(()) => enqueues += 1,
                    Err(SimError::QueueFull) => assert_eq!(queue.len(), CIRCULAR_CAPACITY),
                    Err(other) => panic!("unexpected enqueue error: {other}"),
                }
            } else {
                match queue.dequeue() {
                    Ok(_) => dequeues += 1,
                    Err(SimError::QueueEmpty) => assert_eq!(queue.len(), 0),
                    Err(other) => panic!("unexpected dequeue error: {other}"),
                }
            }
            let occupancy = enqueues - dequeues;
            assert_eq!(queue.len() as i64, occupancy);
            assert!((0..=CIRCULAR_CAPACITY as i64).contains(&occupancy));
        }
    }

    /// Scripted draws make the populated workload fully predictable.
    #[test]
    fn test_scripted_workload_is_deterministic() {
        let mut queue = LinearQueue::new();
        let mut rng = ScriptedSource::new(vec![0, 0xAB]);
        populate_instructions(&mut queue, &mut rng).unwrap();
        for (_, instruction) in queue.iter_pending() {
            assert_eq!(instruction.mode, SpiMode::Read);
            assert_eq!(instruction.data, 0xAB);
        }
    }

    #[test]
    fn test_snapshots_expose_state_as_json() {
        let bank = RegisterBank::new();
        let snapshot = bank.snapshot();
        assert_eq!(snapshot["interrupt_configure"]["address"], 0x20);
        assert_eq!(snapshot["interrupt_configure"]["writable"], true);
        assert_eq!(snapshot["gravity_h"]["writable"], false);

        let mut queue = CircularQueue::new();
        let mut rng = SplitMix64::from_seed(5);
        queue.enqueue(random_interruption(&mut rng)).unwrap();
        let snapshot = queue.snapshot();
        assert_eq!(snapshot["front"], 0);
        assert_eq!(snapshot["rear"], 0);
    }
}
