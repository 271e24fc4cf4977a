//! Readers for the plain-text input files.
//!
//! All formats are whitespace separated and ignore blank lines. Line numbers
//! in errors are 1-based and count blank lines.

use ndarray::{Array1, Array2};
use numeth_solvers::roots::{self, InputError, RootInput, UnknownMethod};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: {token:?} is not a number")]
    Number { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no numbers found")]
    Empty,

    #[error("expected an n x (n+1) augmented matrix, found {rows}x{cols}")]
    NotAugmented { rows: usize, cols: usize },

    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("expected 7 values (method a b x0 x1 tol maxIter), found {found}")]
    TokenCount { found: usize },

    #[error("{name} must be a positive integer, found {token:?}")]
    Integer { name: &'static str, token: String },

    #[error(transparent)]
    Method(#[from] UnknownMethod),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Parses an augmented `A|b` file: `n` rows of `n + 1` numbers.
pub fn system(text: &str) -> Result<(Array2<f64>, Array1<f64>), ParseError> {
    let grid = grid(text)?;
    let (rows, cols) = (grid.len(), grid[0].len());
    if cols != rows + 1 {
        return Err(ParseError::NotAugmented { rows, cols });
    }
    let a = Array2::from_shape_fn((rows, rows), |(i, j)| grid[i][j]);
    let b = grid.iter().map(|row| row[rows]).collect();
    Ok((a, b))
}

/// Parses a square matrix file.
pub fn matrix(text: &str) -> Result<Array2<f64>, ParseError> {
    let grid = grid(text)?;
    let (rows, cols) = (grid.len(), grid[0].len());
    if rows != cols {
        return Err(ParseError::NotSquare { rows, cols });
    }
    Ok(Array2::from_shape_fn((rows, cols), |(i, j)| grid[i][j]))
}

/// Parses a vector file: numbers separated by any whitespace.
pub fn vector(text: &str) -> Result<Array1<f64>, ParseError> {
    let values: Vec<f64> = numbered_tokens(text)
        .map(|(line, token)| number(line, token))
        .collect::<Result<_, _>>()?;
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Array1::from(values))
}

/// Parses a root parameter file: `method a b x0 x1 tol maxIter`.
///
/// The method is an id from 1 to 5. Unused fields must still be present.
pub fn root_params(text: &str) -> Result<(roots::Method, RootInput), ParseError> {
    let tokens: Vec<(usize, &str)> = numbered_tokens(text).collect();
    let [method, a, b, x0, x1, tol, max_iters] = tokens[..] else {
        return Err(ParseError::TokenCount {
            found: tokens.len(),
        });
    };

    let method = roots::Method::from_id(integer("method", method.1)?)?;
    let input = RootInput::new(
        number(a.0, a.1)?,
        number(b.0, b.1)?,
        number(x0.0, x0.1)?,
        number(x1.0, x1.1)?,
        number(tol.0, tol.1)?,
        integer("maxIter", max_iters.1)?,
    )?;
    Ok((method, input))
}

/// Reads non-blank lines as rows of equal width.
fn grid(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let row = line
            .split_whitespace()
            .map(|token| number(line_no, token))
            .collect::<Result<Vec<_>, _>>()?;
        if row.is_empty() {
            continue;
        }
        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            return Err(ParseError::RaggedRow {
                line: line_no,
                expected: first.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(rows)
}

fn numbered_tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)))
}

fn number(line: usize, token: &str) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::Number {
        line,
        token: token.to_owned(),
    })
}

fn integer<T: std::str::FromStr>(name: &'static str, token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::Integer {
        name,
        token: token.to_owned(),
    })
}
