use {
    pagesim::{AccessLog, Engine, ExplainError, Policy, Session},
    std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    },
};

static EXPLAINED: AtomicUsize = AtomicUsize::new(0);

fn counting(log: &AccessLog<'_, usize>) -> Result<String, ExplainError> {
    EXPLAINED.fetch_add(1, Ordering::SeqCst);
    Ok(log.to_string())
}

#[test]
fn independent_sessions() {
    // Every thread runs a simulation of its own; none sees another's pages.
    let n = 8;
    let mut handles = vec![];
    for i in 0..n {
        handles.push(thread::spawn(move || {
            let session = Session::new(Engine::new(2, Policy::Lru).unwrap());
            for page in [i, i + 100, i] {
                session.access(page).unwrap();
            }
            session.with_engine(|engine| engine.frames())
        }));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let frames = handle.join().unwrap();
        assert_eq!(frames, vec![Some(i), Some(i + 100)]);
    }
}

#[test]
fn shared_session() {
    let n = 10;
    let k = 50;
    let frames = 4;
    let session = Session::with_explainer(Engine::<usize>::new(frames, Policy::Fifo).unwrap(), counting);

    // Clones share one engine: accesses are serialized, none gets lost.
    let mut handles = vec![];
    for i in 0..n {
        let session = session.clone();
        handles.push(thread::spawn(move || {
            for j in 0..k {
                let access = session.access((i * k + j) % 7).unwrap();
                assert!(access.explanation.starts_with("[FIFO] page "));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let summary = session.summary();
    assert_eq!(summary.accesses, n * k);
    assert_eq!(summary.hits + summary.faults, n * k);
    assert_eq!(EXPLAINED.load(Ordering::SeqCst), n * k);
    session.with_engine(|engine| {
        assert_eq!(engine.occupancy(), frames);
        assert_eq!(engine.clock(), (n * k) as u64);
        assert_eq!(engine.eviction_queue().len(), frames);
    });
}
