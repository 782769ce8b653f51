use std::io::Read;
use std::process::ExitCode;

use dictlp::solvers::{DictionarySimplex, Solver};

fn main() -> ExitCode {
    env_logger::init();

    let mut input = String::new();
    if let Err(error) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("error: {error}");
        return ExitCode::from(1);
    }

    let problem = match dictlp::io::parse_problem(&input) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::from(1);
        }
    };

    let mut solver = DictionarySimplex::new();
    let solution = match solver.solve(problem) {
        Ok(solution) => solution,
        Err(error) => {
            eprintln!("internal error: {error}");
            return ExitCode::from(2);
        }
    };

    let stdout = std::io::stdout();
    if let Err(error) = dictlp::io::write_report(&mut stdout.lock(), &solution) {
        eprintln!("error: {error}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
