use num_traits::{Signed, Zero};

use super::Goal;
use super::equation::{Equation, Row};
use super::problem::Problem;
use super::variable::{Term, VarId};
use crate::rational::Rational;

/// The objective together with every constraint row in solved form. Built
/// once from a [`Problem`], then mutated in place by pivots.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    pub objective: Equation,
    pub rows: Vec<Row>,
    /// The objective saved before a two-phase replacement; `None` unless
    /// this dictionary was built as an auxiliary.
    pub saved_objective: Option<Equation>,
    /// Number of decision variables in the source problem.
    pub num_decision: usize,
    /// Set for minimization problems: the stored objective is negated, so
    /// reported values flip sign.
    pub negated: bool,
}

impl Dictionary {
    /// Builds the initial dictionary: one slack-basic row per upper bound,
    /// `wᵢ = bᵢ − Σⱼ aᵢⱼ·xⱼ`, and the objective `0 + Σ cⱼ·xⱼ`. Minimization
    /// and `≥`/`=` relations are normalised away first.
    pub fn from_problem(problem: &Problem) -> Self {
        let num_decision = problem.objective.len();
        let negated = problem.goal == Goal::Min;

        let objective_terms = problem
            .objective
            .iter()
            .enumerate()
            .map(|(j, coef)| {
                let coef = if negated { -coef.clone() } else { coef.clone() };
                Term::new(VarId::decision(j + 1), coef)
            })
            .collect();
        let objective = Equation::new(Rational::zero(), objective_terms);

        let mut rows = Vec::new();
        for constraint in &problem.constraints {
            for (coefficients, bound) in constraint.upper_bound_rows() {
                let terms = coefficients
                    .into_iter()
                    .enumerate()
                    .map(|(j, coef)| Term::new(VarId::decision(j + 1), -coef))
                    .collect();
                let basic = VarId::slack(rows.len() + 1);
                rows.push(Row::new(basic, Equation::new(bound, terms)));
            }
        }

        Dictionary {
            objective,
            rows,
            saved_objective: None,
            num_decision,
            negated,
        }
    }

    /// Identity reserved for the auxiliary variable.
    pub fn omega(&self) -> VarId {
        VarId::auxiliary(self.num_decision + 1)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The row in which `id` is basic, if any.
    pub fn row_of(&self, id: VarId) -> Option<&Row> {
        self.rows.iter().find(|row| row.basic == id)
    }

    /// Every row constant is nonnegative.
    pub fn is_feasible(&self) -> bool {
        self.rows.iter().all(|row| !row.rhs.constant.is_negative())
    }

    /// No positive coefficient remains in the objective.
    pub fn is_optimal(&self) -> bool {
        self.objective.terms.iter().all(|t| !t.coef.is_positive())
    }

    /// Some variable with a positive objective coefficient can grow without
    /// bound: no row's coefficient on it is negative.
    pub fn is_unbounded(&self) -> bool {
        self.objective
            .terms
            .iter()
            .filter(|t| t.coef.is_positive())
            .any(|t| {
                self.rows
                    .iter()
                    .all(|row| row.rhs.coef_of(t.id).is_none_or(|c| !c.is_negative()))
            })
    }

    pub fn should_continue(&self) -> bool {
        !self.is_optimal() && !self.is_unbounded()
    }

    /// Objective value at the current vertex, sign-corrected for
    /// minimization problems.
    pub fn current_value(&self) -> Rational {
        if self.negated {
            -self.objective.constant.clone()
        } else {
            self.objective.constant.clone()
        }
    }

    /// Values of the decision variables at the current vertex: the row
    /// constant where the variable is basic, zero where it is nonbasic.
    pub fn current_vertex(&self) -> Vec<Rational> {
        (1..=self.num_decision)
            .map(|index| {
                self.row_of(VarId::decision(index))
                    .map(|row| row.rhs.constant.clone())
                    .unwrap_or_else(Rational::zero)
            })
            .collect()
    }
}
