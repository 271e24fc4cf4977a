//! Opt-in recording of intermediate matrices, actions and iterates.

use std::fmt;

use ndarray::{Array1, Array2};

use super::Options;

/// Intermediate results recorded during a solve.
///
/// Only built when [`Options::return_steps`] is set. Which parts get filled
/// depends on the method and the remaining option flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepTrace {
    /// Labeled snapshots of the working matrix, in order.
    pub matrices: Vec<(String, Array2<f64>)>,
    /// Human-readable description of each action taken.
    pub actions: Vec<String>,
    /// Lower-triangular factor (LU or Cholesky).
    pub l: Option<Array2<f64>>,
    /// Upper-triangular factor (LU).
    pub u: Option<Array2<f64>>,
    /// Column order after complete pivoting: position `k` holds the original
    /// index of the variable solved at `k`.
    pub column_permutation: Option<Vec<usize>>,
    /// Iterates of the iterative methods, starting with the first sweep.
    pub iterations: Vec<Array1<f64>>,
}

/// Collects a [`StepTrace`] only when the caller asked for one.
///
/// Labels and messages are passed as closures so that nothing is formatted
/// when recording is off.
pub(super) struct Recorder {
    trace: Option<StepTrace>,
    matrices: bool,
    factors: bool,
    permutation: bool,
    iterations: bool,
}

impl Recorder {
    pub(super) fn new(options: &Options) -> Self {
        let on = options.return_steps;
        Self {
            trace: on.then(StepTrace::default),
            matrices: on && options.show_matrices,
            factors: on && options.show_lu,
            permutation: on && options.show_permutation,
            iterations: on && options.record_iterations,
        }
    }

    /// Returns true when matrix snapshots are being recorded.
    pub(super) fn shows_matrices(&self) -> bool {
        self.matrices
    }

    pub(super) fn action(&mut self, message: impl FnOnce() -> String) {
        if let Some(trace) = self.trace.as_mut() {
            trace.actions.push(message());
        }
    }

    pub(super) fn matrix(&mut self, label: impl FnOnce() -> String, matrix: &Array2<f64>) {
        if self.matrices
            && let Some(trace) = self.trace.as_mut()
        {
            trace.matrices.push((label(), matrix.clone()));
        }
    }

    pub(super) fn factors(&mut self, l: &Array2<f64>, u: Option<&Array2<f64>>) {
        if self.factors
            && let Some(trace) = self.trace.as_mut()
        {
            trace.l = Some(l.clone());
            trace.u = u.cloned();
        }
    }

    pub(super) fn permutation(&mut self, permutation: &[usize]) {
        if self.permutation
            && let Some(trace) = self.trace.as_mut()
        {
            trace.column_permutation = Some(permutation.to_vec());
        }
    }

    pub(super) fn iteration(&mut self, k: usize, x: &Array1<f64>) {
        if self.iterations
            && let Some(trace) = self.trace.as_mut()
        {
            trace.iterations.push(x.clone());
            trace.actions.push(format!("Iteration {k}"));
        }
    }

    pub(super) fn finish(self) -> Option<StepTrace> {
        self.trace
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "- {action}")?;
        }
        for (label, matrix) in &self.matrices {
            writeln!(f, "{label}:")?;
            write_matrix(f, matrix)?;
        }
        if let Some(l) = &self.l {
            writeln!(f, "L:")?;
            write_matrix(f, l)?;
        }
        if let Some(u) = &self.u {
            writeln!(f, "U:")?;
            write_matrix(f, u)?;
        }
        if let Some(permutation) = &self.column_permutation {
            writeln!(f, "Column permutation: {permutation:?}")?;
        }
        for (k, x) in self.iterations.iter().enumerate() {
            write!(f, "x({}) =", k + 1)?;
            for value in x {
                write!(f, " {value:12.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_matrix(f: &mut fmt::Formatter<'_>, matrix: &Array2<f64>) -> fmt::Result {
    for row in matrix.rows() {
        for value in row {
            write!(f, " {value:12.6}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn disabled_recorder_builds_nothing() {
        let mut recorder = Recorder::new(&Options::default());
        recorder.action(|| unreachable!("message must not be formatted"));
        recorder.matrix(|| unreachable!("label must not be formatted"), &array![[1.0]]);
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn detail_flags_gate_each_part() {
        let options = Options {
            return_steps: true,
            ..Options::default()
        };
        let mut recorder = Recorder::new(&options);
        recorder.action(|| "kept".to_owned());
        recorder.matrix(|| "dropped".to_owned(), &array![[1.0]]);
        recorder.factors(&array![[1.0]], None);
        recorder.permutation(&[0]);
        recorder.iteration(1, &array![1.0]);

        let trace = recorder.finish().expect("steps requested");
        assert_eq!(trace.actions, vec!["kept".to_owned()]);
        assert!(trace.matrices.is_empty());
        assert!(trace.l.is_none());
        assert!(trace.column_permutation.is_none());
        assert!(trace.iterations.is_empty());
    }

    #[test]
    fn all_steps_records_everything() {
        let mut recorder = Recorder::new(&Options::default().with_all_steps());
        recorder.matrix(|| "M".to_owned(), &array![[2.0]]);
        recorder.factors(&array![[1.0]], Some(&array![[2.0]]));
        recorder.permutation(&[1, 0]);
        recorder.iteration(1, &array![0.5]);

        let trace = recorder.finish().expect("steps requested");
        assert_eq!(trace.matrices.len(), 1);
        assert_eq!(trace.u, Some(array![[2.0]]));
        assert_eq!(trace.column_permutation, Some(vec![1, 0]));
        assert_eq!(trace.iterations, vec![array![0.5]]);
        assert_eq!(trace.actions, vec!["Iteration 1".to_owned()]);

        let text = trace.to_string();
        assert!(text.contains("Column permutation: [1, 0]"));
        assert!(text.contains("x(1) ="));
    }
}
