use num_traits::{One, Zero};

use crate::model::{Dictionary, Equation, PivotError, Term, VarId};
use crate::rational::Rational;

/// Builds the auxiliary dictionary for an infeasible start: the objective
/// becomes `-Ω`, every row gains `+Ω`, and Ω is forced into the basis
/// through the most-negative row, after which every row constant is
/// nonnegative.
pub fn auxiliary(dictionary: &Dictionary) -> Result<Dictionary, PivotError> {
    let mut aux = dictionary.clone();
    aux.saved_objective = Some(aux.objective.clone());

    let omega = aux.omega();
    aux.objective = Equation::new(Rational::zero(), vec![Term::new(omega, -Rational::one())]);
    for row in &mut aux.rows {
        row.rhs.push_term(Term::new(omega, Rational::one()));
    }

    if !aux.is_feasible() {
        if let Some(leaving) = least_feasible_basic(&aux) {
            log::debug!("forcing \u{03a9} into the basis, {leaving} leaves");
            aux.pivot(omega, leaving)?;
        }
    }
    Ok(aux)
}

/// Basic variable of the row with the smallest constant.
fn least_feasible_basic(dictionary: &Dictionary) -> Option<VarId> {
    dictionary
        .rows
        .iter()
        .min_by(|a, b| a.rhs.constant.cmp(&b.rhs.constant))
        .map(|row| row.basic)
}

/// Converts a solved auxiliary dictionary (optimum zero) back into a
/// primal-feasible dictionary: Ω is stripped from every equation and the
/// saved objective is re-expressed in the current nonbasic variables.
pub fn restore(auxiliary: &Dictionary) -> Result<Dictionary, PivotError> {
    let mut dictionary = auxiliary.clone();
    let omega = dictionary.omega();

    // A degenerate optimum can leave Ω basic at value zero; pivot it out
    // before stripping. The pivot is degenerate, so any nonzero coefficient
    // keeps the dictionary feasible.
    if let Some(position) = dictionary.rows.iter().position(|row| row.basic == omega) {
        match dictionary.rows[position].rhs.terms.first().map(|t| t.id) {
            Some(entering) => {
                log::debug!("\u{03a9} still basic at zero, pivoting {entering} in");
                dictionary.pivot(entering, omega)?;
            }
            None => {
                // vacuous row: Ω = 0 with no terms
                dictionary.rows.remove(position);
            }
        }
    }

    dictionary.objective.remove_term(omega);
    for row in &mut dictionary.rows {
        row.rhs.remove_term(omega);
    }

    let original = dictionary
        .saved_objective
        .take()
        .expect("auxiliary dictionaries carry the saved objective");
    let snapshot = original.terms.clone();
    dictionary.objective = original;
    for term in &snapshot {
        if let Some(row) = dictionary.rows.iter().find(|row| row.basic == term.id) {
            dictionary.objective.substitute(row);
        }
    }
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Goal, PivotChoice, Problem, Relation};
    use num_bigint::BigInt;
    use num_traits::Zero;
    use pretty_assertions::assert_eq;

    fn rational(value: i64) -> Rational {
        Rational::from_integer(BigInt::from(value))
    }

    // max x_1 subject to x_1 >= 2 (written as -x_1 <= -2) and x_1 <= 3
    fn lower_bounded() -> Dictionary {
        let mut problem = Problem::new(vec![rational(1)], Goal::Max);
        problem.add_constraint(vec![rational(-1)], Relation::LessEqual, rational(-2));
        problem.add_constraint(vec![rational(1)], Relation::LessEqual, rational(3));
        Dictionary::from_problem(&problem)
    }

    #[test]
    fn auxiliary_dictionary_starts_feasible() {
        let dictionary = lower_bounded();
        assert!(!dictionary.is_feasible());

        let aux = auxiliary(&dictionary).unwrap();
        assert!(aux.is_feasible());
        assert!(aux.saved_objective.is_some());
        // Ω entered through the most negative row, so its value is the
        // violation amount and the auxiliary objective sits at -2
        assert!(aux.row_of(aux.omega()).is_some());
        assert_eq!(aux.objective.constant, rational(-2));
    }

    #[test]
    fn restore_re_expresses_the_saved_objective() {
        let mut aux = auxiliary(&lower_bounded()).unwrap();
        loop {
            match aux.select_bland() {
                PivotChoice::Pivot { entering, leaving } => {
                    aux.pivot(entering, leaving).unwrap()
                }
                _ => break,
            }
        }
        assert!(aux.is_optimal());
        assert!(aux.objective.constant.is_zero());

        let restored = restore(&aux).unwrap();
        assert!(restored.is_feasible());
        assert!(restored.saved_objective.is_none());
        // x_1 is basic at 2, so the objective reads 2 + w_1
        assert_eq!(restored.objective.constant, rational(2));
        assert_eq!(
            restored.objective.coef_of(VarId::slack(1)),
            Some(&rational(1))
        );
        let x1 = restored.row_of(VarId::decision(1)).unwrap();
        assert_eq!(x1.rhs.constant, rational(2));
        // no trace of Ω anywhere
        let omega = restored.omega();
        assert!(restored.objective.coef_of(omega).is_none());
        assert!(restored.rows.iter().all(|r| r.rhs.coef_of(omega).is_none()));
    }
}
