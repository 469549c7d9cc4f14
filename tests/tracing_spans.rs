#![cfg(feature = "tracing")]
use stair_dp::{
    problems::stairs::{StairsProblem, Strides},
    CountEngine, CountError, Storage,
};
use tracing::Level;

fn init_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn instrumented_runs_match_plain_results() {
    init_subscriber();
    let problem = StairsProblem::with_strides(30, Strides::new([1, 2, 3]).unwrap());
    for storage in [Storage::Table, Storage::Rolling] {
        let engine = CountEngine::with_storage(problem.clone(), storage);
        assert_eq!(engine.run(), Ok(53_798_080));
    }
    let table = CountEngine::new(problem).table().unwrap();
    assert_eq!(table.len(), 31);
}

#[test]
fn instrumented_overflow_still_propagates() {
    init_subscriber();
    let engine = CountEngine::with_storage(StairsProblem::new(200), Storage::Rolling);
    assert_eq!(engine.run(), Err(CountError::Overflow { layer: 147 }));
}
