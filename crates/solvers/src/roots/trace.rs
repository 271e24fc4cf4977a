//! The text report of a root search.

use std::fmt;

use super::{BracketError, Error, Method, RootInput, Solution, Status};

const RULE: &str = "-----------------------------------------------------------";

/// One iteration line of a [`RootTrace`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub fx: f64,
    pub error: f64,
}

/// The iteration table of one root search and how it ended.
///
/// Built by [`run`](super::run). [`RootTrace::render`] produces the text
/// report: the selected method, a header, one line per iteration, then either
/// the closing warnings and execution time, or the message of the error that
/// aborted the run.
#[derive(Debug, Clone, PartialEq)]
pub struct RootTrace {
    method: Method,
    input: RootInput,
    records: Vec<Record>,
    outcome: Result<Solution, Error>,
}

impl RootTrace {
    pub(super) fn new(
        method: Method,
        input: RootInput,
        records: Vec<Record>,
        outcome: Result<Solution, Error>,
    ) -> Self {
        Self {
            method,
            input,
            records,
            outcome,
        }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the solution, or `None` if the run was aborted.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.outcome.as_ref().ok()
    }

    /// Returns the error that aborted the run, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    /// Returns true if the run met the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        matches!(
            self.outcome,
            Ok(Solution {
                status: Status::Converged,
                ..
            })
        )
    }

    /// Warnings raised by a finished run, in report order.
    #[must_use]
    pub fn warnings(&self) -> Vec<&'static str> {
        let Ok(solution) = &self.outcome else {
            return Vec::new();
        };
        let mut warnings = Vec::new();
        let above_tol = solution.error > self.input.tol;
        if self.method == Method::FixedPoint && above_tol {
            warnings.push("Warning: fixed point method may not converge (|phi'(x)| >= 1).");
        }
        if solution.iters == self.input.max_iters && above_tol {
            warnings.push(
                "ATTENTION: method reached the maximum number of iterations \
                 and may not have converged.",
            );
        }
        if solution.status == Status::StoppedByObserver && above_tol {
            warnings.push("Stopped by observer before reaching the tolerance.");
        }
        warnings
    }

    /// Renders the full text report.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RootTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selected method: {}", self.method.label())?;
        write!(f, "\n=== {} ===\n", self.method.title())?;
        writeln!(f, "Iter |       xk        |      f(xk)       |     Error")?;
        writeln!(f, "{RULE}")?;

        for record in &self.records {
            writeln!(
                f,
                "{:4} | {:14.8} | {:14.8} | {:14.8}",
                record.iter, record.x, record.fx, record.error
            )?;
        }

        match &self.outcome {
            Ok(solution) => {
                for warning in self.warnings() {
                    write!(f, "\n{warning}\n")?;
                }
                write!(
                    f,
                    "\nExecution time: {:.6} seconds\n",
                    solution.elapsed.as_secs_f64()
                )
            }
            Err(error) => writeln!(f, "{}", abort_message(error)),
        }
    }
}

/// The single line written in place of the closing section.
fn abort_message(error: &Error) -> String {
    match error {
        Error::InvalidBracket(BracketError::NoSignChange) => {
            "Invalid interval: f(a)*f(b) > 0".to_owned()
        }
        Error::InvalidBracket(BracketError::NonFinite) => {
            "Invalid interval: non-finite endpoint or function value".to_owned()
        }
        Error::DerivativeNearZero { .. } => "Derivative near zero. Stopping.".to_owned(),
        Error::DenominatorNearZero { .. } => "Division by zero detected. Stopping.".to_owned(),
        Error::NonFiniteEstimate { iter, .. } => {
            format!("Non-finite estimate at iteration {iter}. Stopping.")
        }
        Error::InvalidInput(reason) => format!("Invalid input: {reason}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    fn finished(method: Method, records: Vec<Record>, error: f64, iters: usize) -> RootTrace {
        let input = RootInput {
            max_iters: 3,
            ..RootInput::default()
        };
        let solution = Solution {
            status: if error > input.tol {
                Status::MaxIters
            } else {
                Status::Converged
            },
            x: 1.0,
            fx: 0.0,
            error,
            iters,
            elapsed: Duration::from_micros(1500),
        };
        RootTrace::new(method, input, records, Ok(solution))
    }

    #[test]
    fn renders_header_lines_and_time() {
        let record = Record {
            iter: 1,
            x: 0.5,
            fx: -1.375,
            error: 0.5,
        };
        let trace = finished(Method::Bisection, vec![record], 1e-9, 1);

        assert_eq!(
            trace.render(),
            "Selected method: BISECTION\n\
             \n=== Bisection Method ===\n\
             Iter |       xk        |      f(xk)       |     Error\n\
             -----------------------------------------------------------\n   \
             1 |     0.50000000 |    -1.37500000 |     0.50000000\n\
             \nExecution time: 0.001500 seconds\n"
        );
        assert!(trace.converged());
    }

    #[test]
    fn fixed_point_warns_before_the_cap_warning() {
        let trace = finished(Method::FixedPoint, Vec::new(), 1.0, 3);
        let text = trace.render();

        let divergence = text.find("Warning: fixed point").expect("divergence warning");
        let cap = text.find("ATTENTION").expect("cap warning");
        assert!(divergence < cap);
        assert!(!trace.converged());
        assert_eq!(trace.warnings().len(), 2);
    }

    #[test]
    fn cap_warning_needs_the_error_above_tolerance() {
        let trace = finished(Method::Newton, Vec::new(), 1e-9, 3);
        assert!(trace.warnings().is_empty());
    }

    #[test]
    fn observer_stop_above_tolerance_is_flagged() {
        let input = RootInput::default();
        let solution = Solution {
            status: Status::StoppedByObserver,
            x: 1.0,
            fx: 2.0,
            error: 0.5,
            iters: 2,
            elapsed: Duration::from_micros(10),
        };
        let trace = RootTrace::new(Method::Secant, input, Vec::new(), Ok(solution));

        assert_eq!(
            trace.warnings(),
            vec!["Stopped by observer before reaching the tolerance."]
        );
        assert!(
            trace
                .render()
                .contains("\nStopped by observer before reaching the tolerance.\n\nExecution time")
        );
    }

    #[test]
    fn abort_replaces_the_closing_section() {
        let trace = RootTrace::new(
            Method::Newton,
            RootInput::default(),
            Vec::new(),
            Err(Error::DerivativeNearZero { x: 0.0 }),
        );
        let text = trace.render();

        assert!(text.ends_with("-\nDerivative near zero. Stopping.\n"));
        assert!(!text.contains("Execution time"));
        assert!(trace.solution().is_none());
    }

    #[test]
    fn bracket_errors_use_the_interval_message() {
        let trace = RootTrace::new(
            Method::RegulaFalsi,
            RootInput::default(),
            Vec::new(),
            Err(Error::InvalidBracket(BracketError::NoSignChange)),
        );
        assert!(
            trace
                .render()
                .ends_with("Invalid interval: f(a)*f(b) > 0\n")
        );
    }
}
