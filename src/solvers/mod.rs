pub mod simplex;
pub mod solver;
pub mod two_phase;

pub use simplex::DictionarySimplex;
pub use solver::{Solution, SolveError, Solver, Status, Step};

use crate::model::Problem;

/// Solves `problem` to completion with the Bland-rule dictionary simplex.
pub fn solve(problem: Problem) -> Result<Solution, SolveError> {
    let mut solver = DictionarySimplex::new();
    solver.solve(problem)
}
