use super::Goal;
use crate::rational::Rational;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LessEqual,
    GreaterEqual,
    Equal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<Rational>,
    pub relation: Relation,
    pub rhs: Rational,
}

impl Constraint {
    /// Expresses the constraint as one or two `a·x ≤ b` rows: `≥` negates
    /// both sides, `=` becomes the pair of opposite bounds.
    pub fn upper_bound_rows(&self) -> Vec<(Vec<Rational>, Rational)> {
        let as_is = || (self.coefficients.clone(), self.rhs.clone());
        let negated = || {
            (
                self.coefficients.iter().map(|c| -c.clone()).collect(),
                -self.rhs.clone(),
            )
        };
        match self.relation {
            Relation::LessEqual => vec![as_is()],
            Relation::GreaterEqual => vec![negated()],
            Relation::Equal => vec![as_is(), negated()],
        }
    }
}

/// A linear program as stated: objective coefficients, a goal, and a list of
/// constraints over the same decision variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub objective: Vec<Rational>,
    pub goal: Goal,
    pub constraints: Vec<Constraint>,
}

impl Problem {
    pub fn new(objective: Vec<Rational>, goal: Goal) -> Self {
        Self {
            objective,
            goal,
            constraints: Vec::new(),
        }
    }

    pub fn add_constraint(&mut self, coefficients: Vec<Rational>, relation: Relation, rhs: Rational) {
        assert_eq!(
            coefficients.len(),
            self.objective.len(),
            "Constraint length must match the objective dimension"
        );
        self.constraints.push(Constraint {
            coefficients,
            relation,
            rhs,
        });
    }
}
