use {
    pagesim::{Engine, Outcome, Policy, simulate},
    proptest::{collection::vec, prelude::*, sample::select},
    std::collections::HashSet,
};

fn policy() -> impl Strategy<Value = Policy> {
    select(Policy::ALL.to_vec())
}

fn stream() -> impl Strategy<Value = Vec<u8>> {
    vec(0u8..10, 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn every_access_is_hit_or_fault(frames in 1usize..6, policy in policy(), stream in stream()) {
        let engine = simulate(frames, policy, &stream).unwrap();
        let hits = engine.events().iter().filter(|e| e.is_hit()).count();
        let faults = engine.events().iter().filter(|e| e.is_fault()).count();
        prop_assert_eq!(hits + faults, stream.len());
        prop_assert_eq!(engine.clock(), stream.len() as u64);
    }

    #[test]
    fn state_stays_consistent(frames in 1usize..6, policy in policy(), stream in stream()) {
        let mut engine = Engine::with_reference(frames, policy, stream.clone()).unwrap();
        let mut seen = HashSet::new();

        for &page in &stream {
            let before = engine.frames();
            let record = engine.access(page).unwrap();
            seen.insert(page);

            // The page is resident in exactly one frame, the one reported.
            let holders: Vec<_> = record
                .frames
                .iter()
                .enumerate()
                .filter(|(_, slot)| **slot == Some(page))
                .map(|(id, _)| id)
                .collect();
            prop_assert_eq!(holders, vec![record.frame]);
            prop_assert_eq!(engine.frame_of(&page), Some(record.frame));

            // A hit changes no frame.
            if record.outcome == Outcome::Hit {
                prop_assert_eq!(&before, &record.frames);
            }

            // Frames fill up, then stay full.
            prop_assert_eq!(engine.occupancy(), seen.len().min(frames));

            // The queue holds exactly the resident pages.
            let mut resident: Vec<_> = record.frames.iter().flatten().copied().collect();
            let mut queued = record.eviction_queue.clone();
            resident.sort_unstable();
            queued.sort_unstable();
            prop_assert_eq!(resident, queued);
        }
    }

    #[test]
    fn fifo_evicts_earliest_load(frames in 1usize..6, stream in stream()) {
        let engine = simulate(frames, Policy::Fifo, &stream).unwrap();
        for pair in engine.events().windows(2) {
            if let Some(evicted) = &pair[1].evicted {
                prop_assert_eq!(Some(&evicted.page), pair[0].eviction_queue.first());
            }
        }
    }

    #[test]
    fn lifo_evicts_latest_load(frames in 1usize..6, stream in stream()) {
        let engine = simulate(frames, Policy::Lifo, &stream).unwrap();
        for pair in engine.events().windows(2) {
            if let Some(evicted) = &pair[1].evicted {
                prop_assert_eq!(Some(&evicted.page), pair[0].eviction_queue.last());
            }
        }
    }

    #[test]
    fn lru_and_mru_evict_recency_extremes(
        frames in 1usize..6,
        recency in select(vec![Policy::Lru, Policy::Mru]),
        stream in stream(),
    ) {
        let mut engine = Engine::new(frames, recency).unwrap();
        for &page in &stream {
            let last_used: Vec<_> = engine
                .frame_table()
                .iter()
                .map(|frame| frame.last_used())
                .collect();
            let record = engine.access(page).unwrap();

            if let Some(evicted) = &record.evicted {
                let occupied = last_used.iter().flatten().copied();
                let expected = match recency {
                    Policy::Lru => occupied.min(),
                    _ => occupied.max(),
                };
                prop_assert_eq!(last_used[evicted.frame], expected);
            }
        }
    }

    #[test]
    fn optimal_is_a_lower_bound(frames in 1usize..6, stream in stream()) {
        let faults = |policy| {
            simulate(frames, policy, &stream)
                .unwrap()
                .events()
                .iter()
                .filter(|e| e.is_fault())
                .count()
        };
        let optimal = faults(Policy::Optimal);
        for policy in Policy::ALL {
            prop_assert!(optimal <= faults(policy), "{} beat OPTIMAL", policy);
        }
    }

    #[test]
    fn deterministic(frames in 1usize..6, policy in policy(), stream in stream()) {
        let first = simulate(frames, policy, &stream).unwrap();
        let second = simulate(frames, policy, &stream).unwrap();
        prop_assert_eq!(first.events(), second.events());
    }
}
