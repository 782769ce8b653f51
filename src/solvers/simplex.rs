use num_traits::Zero;

use crate::model::{Dictionary, PivotChoice, Problem};
use crate::solvers::two_phase;
use crate::solvers::{SolveError, Solver, Status, Step};

/// Dictionary simplex with Bland's rule. Runs the auxiliary phase first when
/// the initial dictionary is infeasible; each `step` is one pivot (or one
/// phase transition).
pub struct DictionarySimplex {
    dictionary: Option<Dictionary>,
    auxiliary: Option<Dictionary>,
    iteration: usize,
    checked_feasibility: bool,
    done: bool,
}

impl DictionarySimplex {
    pub fn new() -> Self {
        Self {
            dictionary: None,
            auxiliary: None,
            iteration: 0,
            checked_feasibility: false,
            done: false,
        }
    }

    /// The phase-2 (or phase-1-free) dictionary, once initialised.
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    /// The auxiliary dictionary while phase 1 is running.
    pub fn auxiliary_dictionary(&self) -> Option<&Dictionary> {
        self.auxiliary.as_ref()
    }
}

impl Default for DictionarySimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for DictionarySimplex {
    type Error = SolveError;

    fn init(&mut self, problem: Problem) {
        self.dictionary = Some(Dictionary::from_problem(&problem));
        self.auxiliary = None;
        self.iteration = 0;
        self.checked_feasibility = false;
        self.done = false;
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn step(&mut self) -> Result<Step, SolveError> {
        let dictionary = self.dictionary.as_mut().expect("Not initialized");

        if !self.checked_feasibility {
            self.checked_feasibility = true;
            if !dictionary.is_feasible() {
                log::info!("initial dictionary is infeasible, starting the auxiliary phase");
                self.auxiliary = Some(two_phase::auxiliary(dictionary)?);
            }
        }

        let status = if let Some(aux) = self.auxiliary.as_mut() {
            if aux.is_unbounded() {
                // a -Ω objective cannot grow without bound
                self.done = true;
                Status::Infeasible
            } else {
                match aux.select_bland() {
                    PivotChoice::Pivot { entering, leaving } => {
                        log::debug!("auxiliary pivot: {entering} enters, {leaving} leaves");
                        aux.pivot(entering, leaving)?;
                        self.iteration += 1;
                        Status::InProgress
                    }
                    PivotChoice::Optimal => {
                        if aux.objective.constant.is_zero() {
                            log::info!("auxiliary optimum is zero, restoring the original objective");
                            *dictionary = two_phase::restore(aux)?;
                            self.auxiliary = None;
                            Status::InProgress
                        } else {
                            log::info!("auxiliary optimum is nonzero, the program is infeasible");
                            self.done = true;
                            Status::Infeasible
                        }
                    }
                    PivotChoice::Unbounded => {
                        self.done = true;
                        Status::Infeasible
                    }
                }
            }
        } else if dictionary.is_unbounded() {
            self.done = true;
            Status::Unbounded
        } else {
            match dictionary.select_bland() {
                PivotChoice::Pivot { entering, leaving } => {
                    log::debug!("pivot: {entering} enters, {leaving} leaves");
                    dictionary.pivot(entering, leaving)?;
                    self.iteration += 1;
                    Status::InProgress
                }
                PivotChoice::Optimal => {
                    self.done = true;
                    Status::Optimal
                }
                PivotChoice::Unbounded => {
                    self.done = true;
                    Status::Unbounded
                }
            }
        };

        let current = match self.auxiliary.as_ref() {
            Some(aux) => aux,
            None => &*dictionary,
        };
        Ok(Step {
            iteration: self.iteration,
            vertex: current.current_vertex(),
            objective_value: current.current_value(),
            status,
        })
    }

    fn handle_error(&self, msg: &str) -> SolveError {
        SolveError::Internal(msg.to_string())
    }
}
