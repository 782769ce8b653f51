//! Exact linear-program solver built on the dictionary form of the simplex
//! method: arbitrary-precision rational arithmetic, Bland's anti-cycling
//! rule, and two-phase initialisation when the starting dictionary is
//! infeasible.

pub mod io;
pub mod model;
pub mod rational;
pub mod solvers;

pub use model::{Dictionary, Goal, Problem, Relation};
pub use solvers::{DictionarySimplex, Solution, Solver, Status, solve};
