use num_traits::Signed;

use super::dictionary::Dictionary;
use super::equation::PivotError;
use super::variable::VarId;
use crate::rational::Rational;

/// Outcome of a selection pass over the current dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotChoice {
    Pivot { entering: VarId, leaving: VarId },
    Optimal,
    Unbounded,
}

impl Dictionary {
    /// Bland's rule, entering half: the first positive-coefficient term of
    /// the objective in identity order.
    pub fn find_entering(&self) -> Option<VarId> {
        self.objective
            .terms
            .iter()
            .find(|t| t.coef.is_positive())
            .map(|t| t.id)
    }

    /// Bland's rule, leaving half: minimum ratio `|s / c|` over rows whose
    /// coefficient on `entering` is negative; exact ties go to the smallest
    /// basic identity. `None` means the entering variable is unbounded.
    pub fn find_leaving(&self, entering: VarId) -> Option<VarId> {
        let mut best: Option<(Rational, VarId)> = None;
        for row in &self.rows {
            let Some(coef) = row.rhs.coef_of(entering) else {
                continue;
            };
            if !coef.is_negative() {
                continue;
            }
            let ratio = (&row.rhs.constant / coef).abs();
            let better = match &best {
                None => true,
                Some((min_ratio, champion)) => {
                    ratio < *min_ratio || (ratio == *min_ratio && row.basic < *champion)
                }
            };
            if better {
                best = Some((ratio, row.basic));
            }
        }
        best.map(|(_, basic)| basic)
    }

    pub fn select_bland(&self) -> PivotChoice {
        match self.find_entering() {
            None => PivotChoice::Optimal,
            Some(entering) => match self.find_leaving(entering) {
                None => PivotChoice::Unbounded,
                Some(leaving) => PivotChoice::Pivot { entering, leaving },
            },
        }
    }

    /// One pivot step: re-solve the leaving row for `entering`, then
    /// substitute the new definition into every other row and the objective.
    /// The row must be rearranged first so that it is in `entering = …` form
    /// when substituted elsewhere.
    pub fn pivot(&mut self, entering: VarId, leaving: VarId) -> Result<(), PivotError> {
        let position = self
            .rows
            .iter()
            .position(|row| row.basic == leaving)
            .ok_or(PivotError::UnknownLeaving { variable: leaving })?;

        let mut row = self.rows.remove(position);
        row.solve_for(entering)?;
        for other in &mut self.rows {
            other.substitute(&row);
        }
        self.objective.substitute(&row);
        self.rows.insert(position, row);
        Ok(())
    }
}
