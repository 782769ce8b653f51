use std::fmt;
use std::mem;

use num_traits::{One, Zero};

use super::variable::{Term, VarId};
use crate::rational::Rational;

/// Errors raised by the pivot machinery. Both indicate a selector bug, not a
/// property of the linear program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PivotError {
    SingularPivot { row: VarId, variable: VarId },
    UnknownLeaving { variable: VarId },
}

impl fmt::Display for PivotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotError::SingularPivot { row, variable } => {
                write!(f, "zero pivot coefficient on {variable} in row {row}")
            }
            PivotError::UnknownLeaving { variable } => {
                write!(f, "no row has {variable} as its basic variable")
            }
        }
    }
}

/// A constant plus a sorted list of nonbasic terms: `s + Σ cᵢ·vᵢ`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub constant: Rational,
    pub terms: Vec<Term>,
}

impl Equation {
    /// Builds an equation, dropping zero coefficients and sorting terms by
    /// variable identity.
    pub fn new(constant: Rational, mut terms: Vec<Term>) -> Self {
        terms.retain(|t| !t.coef.is_zero());
        terms.sort_by(|a, b| a.id.cmp(&b.id));
        Equation { constant, terms }
    }

    /// Coefficient of `id`, if present. A missing term means zero.
    pub fn coef_of(&self, id: VarId) -> Option<&Rational> {
        self.terms.iter().find(|t| t.id == id).map(|t| &t.coef)
    }

    pub fn push_term(&mut self, term: Term) {
        if term.coef.is_zero() {
            return;
        }
        self.terms.push(term);
        self.sort_terms();
    }

    pub fn remove_term(&mut self, id: VarId) -> Option<Term> {
        let pos = self.terms.iter().position(|t| t.id == id)?;
        Some(self.terms.remove(pos))
    }

    /// Replaces every occurrence of `definition.basic` in this equation with
    /// the right-hand side of `definition`. A no-op when that variable does
    /// not appear here. Terms cancelled to exactly zero are deleted.
    pub fn substitute(&mut self, definition: &Row) {
        let Some(term) = self.remove_term(definition.basic) else {
            return;
        };
        let multiplier = term.coef;
        self.constant += &multiplier * &definition.rhs.constant;
        for new in &definition.rhs.terms {
            let added = &multiplier * &new.coef;
            match self.terms.iter_mut().find(|t| t.id == new.id) {
                Some(existing) => existing.coef += added,
                None => self.terms.push(Term::new(new.id, added)),
            }
        }
        self.terms.retain(|t| !t.coef.is_zero());
        self.sort_terms();
    }

    fn sort_terms(&mut self) {
        self.terms.sort_by(|a, b| a.id.cmp(&b.id));
    }
}

/// A constraint row in solved form: `basic = rhs`. The basic variable never
/// appears in its own term list, or in any other row's.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub basic: VarId,
    pub rhs: Equation,
}

impl Row {
    pub fn new(basic: VarId, rhs: Equation) -> Self {
        Row { basic, rhs }
    }

    /// Re-solves the row for `target`: the old basic variable moves to the
    /// right-hand side with coefficient −1 and everything is divided by the
    /// negated pivot coefficient. Fails when `target` is absent, i.e. its
    /// pivot coefficient is zero.
    pub fn solve_for(&mut self, target: VarId) -> Result<(), PivotError> {
        let Some(pivot) = self.rhs.remove_term(target) else {
            return Err(PivotError::SingularPivot {
                row: self.basic,
                variable: target,
            });
        };
        let divisor = -pivot.coef;
        let old_basic = mem::replace(&mut self.basic, target);
        self.rhs.terms.push(Term::new(old_basic, -Rational::one()));
        self.rhs.constant /= divisor.clone();
        for term in &mut self.rhs.terms {
            term.coef /= divisor.clone();
        }
        self.rhs.sort_terms();
        Ok(())
    }

    pub fn substitute(&mut self, definition: &Row) {
        self.rhs.substitute(definition);
    }
}
