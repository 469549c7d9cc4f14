use stair_dp::{
    problems::stairs::{StairsProblem, Strides},
    CountEngine, CountEngineBuilder, Storage,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn table_and_rolling_agree(
        n in 0usize..=120,
        sizes in proptest::collection::vec(1usize..8, 1..5),
    ) {
        let strides = Strides::new(sizes).unwrap();
        let problem = StairsProblem::with_strides(n, strides);
        let table = CountEngine::new(problem.clone()).run();
        let rolling = CountEngineBuilder::new(problem).rolling().build().run();
        prop_assert_eq!(table, rolling);
    }

    #[test]
    fn strides_longer_than_the_staircase(
        n in 0usize..20,
        sizes in proptest::collection::vec(1usize..10_000, 1..5),
    ) {
        let strides = Strides::new(sizes).unwrap();
        let problem = StairsProblem::with_strides(n, strides);
        let table = CountEngine::new(problem.clone()).run();
        let rolling = CountEngine::with_storage(problem.clone(), Storage::Rolling).run();
        prop_assert_eq!(&table, &rolling);
        prop_assert_eq!(table.map(num_bigint::BigUint::from), Ok(problem.exact_count()));
    }

    #[test]
    fn run_is_last_table_entry(n in 0usize..=146) {
        let engine = CountEngine::with_storage(StairsProblem::new(n), Storage::Rolling);
        let table = engine.table().unwrap();
        prop_assert_eq!(table.len(), n + 1);
        prop_assert_eq!(table.last().copied(), engine.run().ok());
    }
}

#[test]
fn both_storages_report_the_same_overflow() {
    for storage in [Storage::Table, Storage::Rolling] {
        let engine = CountEngine::with_storage(StairsProblem::new(400), storage);
        assert_eq!(
            engine.run(),
            Err(stair_dp::CountError::Overflow { layer: 147 }),
            "{storage:?}"
        );
    }
}
