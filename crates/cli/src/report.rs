//! Text shown on stdout.

use std::fmt::{self, Write as _};

use ndarray::{Array1, Array2};
use numeth_solvers::{linear, roots};

/// Formats the outcome of a linear solve.
pub fn linear_solution(
    method: linear::Method,
    a: &Array2<f64>,
    b: &Array1<f64>,
    solution: &linear::Solution,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Method: {method}")?;
    writeln!(out, "{}", solution.status)?;

    if let Some(x) = &solution.x {
        for (i, value) in x.iter().enumerate() {
            writeln!(out, "x[{i}] = {value:.10}")?;
        }
        writeln!(out, "Residual ||Ax - b||inf = {:e}", linear::residual_norm(a, x, b))?;
    }
    writeln!(out, "Execution time: {:.6} seconds", solution.elapsed.as_secs_f64())?;

    if let Some(steps) = &solution.steps {
        write!(out, "\nSteps:\n{steps}")?;
    }
    Ok(out)
}

/// Console summary of a root search; the full table goes to the output file.
pub fn root_summary(trace: &roots::RootTrace) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Method: {}", trace.method().label())?;
    if let Some(error) = trace.error() {
        writeln!(out, "Stopped: {error}")?;
    } else if let Some(solution) = trace.solution() {
        writeln!(out, "Status: {}", solution.status)?;
        for warning in trace.warnings() {
            writeln!(out, "{warning}")?;
        }
        writeln!(
            out,
            "x = {:.8}, f(x) = {:.8}, error = {:e} after {} iterations",
            solution.x, solution.fx, solution.error, solution.iters
        )?;
        writeln!(out, "Execution time: {:.6} s", solution.elapsed.as_secs_f64())?;
    }
    Ok(out)
}

/// Lists both dispatch tables.
pub fn methods() -> Result<String, fmt::Error> {
    let mut out = String::from("Linear systems (numeth linear --method <name>):\n");
    for method in linear::Method::ALL {
        writeln!(out, "  {:<10} {}", method.slug(), method.name())?;
    }
    out.push_str("\nRoots (first value of the parameter file):\n");
    for method in roots::Method::ALL {
        writeln!(out, "  {}  {}", method.id(), method.label())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn linear_report_lists_solution_and_residual() {
        let a = array![[2.0, 0.0], [0.0, 4.0]];
        let b = array![2.0, 2.0];
        let solution = linear::solve(linear::Method::Lu, &a, &b, &linear::Options::default())
            .expect("valid options");

        let text = linear_solution(linear::Method::Lu, &a, &b, &solution).expect("formats");

        assert!(text.contains("Success (LU factorization without pivoting)."));
        assert!(text.contains("x[0] = 1.0000000000"));
        assert!(text.contains("x[1] = 0.5000000000"));
        assert!(text.contains("Residual"));
        assert!(!text.contains("Steps:"));
    }

    #[test]
    fn failed_linear_report_has_no_solution_lines() {
        let a = array![[1.0, 2.0], [2.0, 1.0]];
        let b = array![1.0, 1.0];
        let solution = linear::solve(linear::Method::Cholesky, &a, &b, &linear::Options::default())
            .expect("valid options");

        let text = linear_solution(linear::Method::Cholesky, &a, &b, &solution).expect("formats");

        assert!(text.contains("ERROR: Cholesky not applicable"));
        assert!(!text.contains("x[0]"));
    }

    #[test]
    fn roots_summary_mentions_abort_reason() {
        let input = roots::RootInput::default().with_bracket(1.0, 2.0);
        let trace = roots::run(roots::Method::Bisection, &roots::Cubic, &input);

        let text = root_summary(&trace).expect("formats");
        assert!(text.starts_with("Method: BISECTION\nStopped: invalid interval"));
    }

    #[test]
    fn roots_summary_reports_status() {
        let trace = roots::run(roots::Method::Newton, &roots::Cubic, &roots::RootInput::default());
        let text = root_summary(&trace).expect("formats");

        assert!(text.contains("Status: converged"));
        assert!(!text.contains("Stopped"));
    }

    #[test]
    fn methods_lists_every_entry() {
        let text = methods().expect("formats");
        assert!(text.contains("seidel"));
        assert!(text.contains("5  REGULA FALSI"));
    }
}
