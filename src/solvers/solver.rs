use std::fmt;

use num_traits::Zero;

use crate::model::{PivotError, Problem};
use crate::rational::Rational;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Pivot(PivotError),
    Internal(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Pivot(error) => error.fmt(f),
            SolveError::Internal(message) => f.write_str(message),
        }
    }
}

impl From<PivotError> for SolveError {
    fn from(error: PivotError) -> Self {
        SolveError::Pivot(error)
    }
}

pub trait Solver {
    type Error;

    fn init(&mut self, problem: Problem);
    fn step(&mut self) -> Result<Step, Self::Error>;
    fn is_done(&self) -> bool;

    fn solve(&mut self, problem: Problem) -> Result<Solution, Self::Error> {
        self.init(problem);
        let mut last_step = self.step()?;

        while !self.is_done() {
            last_step = self.step()?;
        }

        match last_step.status {
            Status::Optimal => Ok(Solution {
                x: last_step.vertex,
                objective: last_step.objective_value,
                status: Status::Optimal,
            }),
            Status::Infeasible => Ok(Solution::outcome(Status::Infeasible)),
            Status::Unbounded => Ok(Solution::outcome(Status::Unbounded)),
            Status::InProgress => Err(self.handle_error("solver stopped prematurely")),
        }
    }

    fn handle_error(&self, msg: &str) -> Self::Error;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub iteration: usize,
    pub vertex: Vec<Rational>,
    pub objective_value: Rational,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub x: Vec<Rational>,
    pub objective: Rational,
    pub status: Status,
}

impl Solution {
    /// Terminal outcome with no witness point.
    pub fn outcome(status: Status) -> Self {
        Solution {
            x: Vec::new(),
            objective: Rational::zero(),
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Optimal,
    Infeasible,
    Unbounded,
}
