use std::fmt;

use num_traits::{One, Signed, Zero};

use crate::model::equation::{Equation, Row};
use crate::model::problem::{Problem, Relation};
use crate::model::variable::{VarId, VarKind};
use crate::model::{Dictionary, Goal};
use crate::rational::Rational;

fn format_rational(value: &Rational) -> String {
    if value.denom().is_one() {
        format!("{}", value.numer())
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            VarKind::Decision => write!(f, "x_{}", self.index),
            VarKind::Slack => write!(f, "w_{}", self.index),
            VarKind::Auxiliary => write!(f, "\u{03a9}"),
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_rational(&self.constant))?;
        for term in &self.terms {
            let sign = if term.coef.is_negative() { '-' } else { '+' };
            let magnitude = term.coef.abs();
            if magnitude.is_one() {
                write!(f, " {} {}", sign, term.id)?;
            } else {
                write!(f, " {} {}{}", sign, format_rational(&magnitude), term.id)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.basic, self.rhs)
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "max ζ = {}", self.objective)?;
        for row in &self.rows {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let goal = match self.goal {
            Goal::Max => "Max",
            Goal::Min => "Min",
        };
        write!(f, "{} Z = ", goal)?;
        writeln!(f, "{}", format_coefficients(&self.objective))?;

        writeln!(f, "Subject to:")?;
        for constraint in &self.constraints {
            let relation = match constraint.relation {
                Relation::LessEqual => "<=",
                Relation::GreaterEqual => ">=",
                Relation::Equal => "=",
            };
            writeln!(
                f,
                "  {} {} {}",
                format_coefficients(&constraint.coefficients),
                relation,
                format_rational(&constraint.rhs)
            )?;
        }
        writeln!(f, "  where x_1 .. x_{} >= 0", self.objective.len())
    }
}

fn format_coefficients(coefficients: &[Rational]) -> String {
    let mut parts = Vec::new();
    for (j, coef) in coefficients.iter().enumerate() {
        if coef.is_zero() {
            continue;
        }
        let magnitude = coef.abs();
        let term = if magnitude.is_one() {
            format!("x_{}", j + 1)
        } else {
            format!("{}x_{}", format_rational(&magnitude), j + 1)
        };
        if parts.is_empty() {
            parts.push(if coef.is_negative() {
                format!("-{}", term)
            } else {
                term
            });
        } else {
            parts.push(format!(
                " {} {}",
                if coef.is_negative() { "-" } else { "+" },
                term
            ));
        }
    }
    if parts.is_empty() {
        parts.push("0".to_string());
    }
    parts.concat()
}
