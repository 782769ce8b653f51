pub mod dictionary;
pub mod dictionary_operations;
pub mod displays;
pub mod equation;
pub mod problem;
pub mod variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Min,
    Max,
}

pub use dictionary::Dictionary;
pub use dictionary_operations::PivotChoice;
pub use equation::{Equation, PivotError, Row};
pub use problem::{Constraint, Problem, Relation};
pub use variable::{Term, VarId, VarKind};
