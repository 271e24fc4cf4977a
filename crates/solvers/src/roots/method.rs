//! The closed table of root-finding methods.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The root-finding methods available through [`find_root`](super::find_root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    FixedPoint,
    Newton,
    Secant,
    RegulaFalsi,
}

/// Error returned when a method id or name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown root-finding method: {0:?} (expected 1 to 5)")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Every method, ordered by id.
    pub const ALL: [Method; 5] = [
        Method::Bisection,
        Method::FixedPoint,
        Method::Newton,
        Method::Secant,
        Method::RegulaFalsi,
    ];

    /// Returns the method with the given menu id (1 to 5).
    ///
    /// # Errors
    ///
    /// Returns an error for ids outside `1..=5`.
    pub fn from_id(id: u32) -> Result<Self, UnknownMethod> {
        Method::ALL
            .into_iter()
            .find(|method| method.id() == id)
            .ok_or_else(|| UnknownMethod(id.to_string()))
    }

    /// Returns the menu id.
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Method::Bisection => 1,
            Method::FixedPoint => 2,
            Method::Newton => 3,
            Method::Secant => 4,
            Method::RegulaFalsi => 5,
        }
    }

    /// Returns the upper-case label written as `Selected method: <label>`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Bisection => "BISECTION",
            Method::FixedPoint => "FIXED POINT",
            Method::Newton => "NEWTON-RAPHSON",
            Method::Secant => "SECANT",
            Method::RegulaFalsi => "REGULA FALSI",
        }
    }

    /// Returns the title of the trace section.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Method::Bisection => "Bisection Method",
            Method::FixedPoint => "Fixed Point Method",
            Method::Newton => "Newton-Raphson Method",
            Method::Secant => "Secant Method",
            Method::RegulaFalsi => "Regula Falsi Method",
        }
    }

    /// Returns the short command-line slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::FixedPoint => "fixed-point",
            Method::Newton => "newton",
            Method::Secant => "secant",
            Method::RegulaFalsi => "regula-falsi",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the id, the slug, or the label, ignoring case.
impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            return Method::from_id(id).map_err(|_| UnknownMethod(s.to_owned()));
        }
        Method::ALL
            .into_iter()
            .find(|method| {
                method.slug().eq_ignore_ascii_case(trimmed)
                    || method.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}
