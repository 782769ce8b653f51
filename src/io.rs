use std::fmt;
use std::io::{self, Write};

use crate::model::{Goal, Problem, Relation};
use crate::rational::{Rational, format_significant, parse_decimal};
use crate::solvers::{Solution, Status};

/// Significant digits used for reported values.
const REPORT_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    BadLiteral {
        line: usize,
        literal: String,
    },
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("no objective line in the input"),
            ParseError::BadLiteral { line, literal } => {
                write!(f, "line {line}: not a decimal literal: '{literal}'")
            }
            ParseError::WrongFieldCount {
                line,
                expected,
                found,
            } => {
                write!(f, "line {line}: expected {expected} fields, found {found}")
            }
        }
    }
}

/// Parses the stream format: objective coefficients on the first nonblank
/// line, then one `a_1 … a_n b` row per constraint, meaning `a·x ≤ b`.
/// Blank lines are ignored.
pub fn parse_problem(text: &str) -> Result<Problem, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (number, first) = lines.next().ok_or(ParseError::Empty)?;
    let objective = parse_fields(number, first)?;
    let dimension = objective.len();

    let mut problem = Problem::new(objective, Goal::Max);
    for (number, line) in lines {
        let mut fields = parse_fields(number, line)?;
        if fields.len() != dimension + 1 {
            return Err(ParseError::WrongFieldCount {
                line: number + 1,
                expected: dimension + 1,
                found: fields.len(),
            });
        }
        let bound = fields.remove(dimension);
        problem.add_constraint(fields, Relation::LessEqual, bound);
    }
    Ok(problem)
}

fn parse_fields(index: usize, line: &str) -> Result<Vec<Rational>, ParseError> {
    line.split_whitespace()
        .map(|token| {
            parse_decimal(token).map_err(|_| ParseError::BadLiteral {
                line: index + 1,
                literal: token.to_string(),
            })
        })
        .collect()
}

/// Writes the report: the outcome word, then for an optimum the value and
/// the decision-variable coordinates, all to seven significant digits.
pub fn write_report<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    match solution.status {
        Status::Optimal => {
            writeln!(out, "optimal")?;
            writeln!(out, "{}", format_significant(&solution.objective, REPORT_DIGITS))?;
            let coordinates: Vec<String> = solution
                .x
                .iter()
                .map(|value| format_significant(value, REPORT_DIGITS))
                .collect();
            writeln!(out, "{}", coordinates.join(" "))
        }
        Status::Unbounded => writeln!(out, "unbounded"),
        // InProgress never reaches reporting; emit the conservative word
        Status::Infeasible | Status::InProgress => writeln!(out, "infeasible"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;

    fn rational(value: i64) -> Rational {
        Rational::from_integer(BigInt::from(value))
    }

    #[test]
    fn parses_the_stream_format() {
        let text = "5 4 3\n\n2 3 1 5\n4 1 2 11\n3 4 2 8\n";
        let problem = parse_problem(text).unwrap();
        assert_eq!(problem.goal, Goal::Max);
        assert_eq!(problem.objective, vec![rational(5), rational(4), rational(3)]);
        assert_eq!(problem.constraints.len(), 3);
        assert_eq!(problem.constraints[1].rhs, rational(11));
        assert_eq!(
            problem.constraints[2].coefficients,
            vec![rational(3), rational(4), rational(2)]
        );
        assert!(
            problem
                .constraints
                .iter()
                .all(|c| c.relation == Relation::LessEqual)
        );
    }

    #[test]
    fn parses_decimal_coefficients_exactly() {
        let problem = parse_problem("0.75 -150\n0.25 -60 0\n").unwrap();
        assert_eq!(problem.objective[0], Rational::new(BigInt::from(3), BigInt::from(4)));
        assert_eq!(problem.constraints[0].coefficients[0], Rational::new(BigInt::from(1), BigInt::from(4)));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_problem("\n  \n"), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_bad_literals_with_the_line_number() {
        assert_eq!(
            parse_problem("1 2\n1 x 3\n"),
            Err(ParseError::BadLiteral {
                line: 2,
                literal: "x".to_string(),
            })
        );
    }

    #[test]
    fn rejects_rows_with_the_wrong_field_count() {
        assert_eq!(
            parse_problem("1 2\n1 2\n"),
            Err(ParseError::WrongFieldCount {
                line: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn reports_an_optimum_with_value_and_point() {
        let solution = Solution {
            x: vec![rational(2), rational(0), rational(1)],
            objective: rational(13),
            status: Status::Optimal,
        };
        let mut out = Vec::new();
        write_report(&mut out, &solution).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "optimal\n13\n2 0 1\n");
    }

    #[test]
    fn reports_terminal_outcomes_as_single_words() {
        let mut out = Vec::new();
        write_report(&mut out, &Solution::outcome(Status::Unbounded)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "unbounded\n");

        let mut out = Vec::new();
        write_report(&mut out, &Solution::outcome(Status::Infeasible)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "infeasible\n");
    }
}
