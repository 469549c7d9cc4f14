//! Prints the number of ways to climb a four-step staircase.

use stair_dp::step_count;

fn main() {
    println!("{}", step_count(4));
}
