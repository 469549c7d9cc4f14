//! Example: custom stride sets, rolling storage and climb reconstruction.
//!
//! Run with:
//! `cargo run --example strides`

use stair_dp::{
    problems::stairs::{StairsProblem, Strides},
    CountEngineBuilder, CountError,
};

fn main() -> Result<(), CountError> {
    let problem = StairsProblem::new(4);
    println!("Climbs of 4 steps with strides {{1, 2, 3}}:");
    for (rank, climb) in problem.climbs()?.enumerate() {
        println!("  #{rank}: {climb:?}");
    }

    let odd = StairsProblem::with_strides(20, Strides::new([1, 3, 5])?);
    let engine = CountEngineBuilder::new(odd).rolling().build();
    println!("Climbs of 20 steps with strides {{1, 3, 5}}: {}", engine.run()?);

    let tall = StairsProblem::new(100);
    println!("Climbs of 100 steps: {}", tall.count()?);
    println!("Middle climb of 10 steps: {:?}", StairsProblem::new(10).unrank(137)?);

    let huge = StairsProblem::new(200);
    if let Err(err) = huge.count() {
        println!("Climbs of 200 steps in u128: {err}");
    }
    println!("Climbs of 200 steps: {}", huge.exact_count());

    Ok(())
}
