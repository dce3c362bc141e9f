//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! grouped by family, plus name lookup in both directions.

use std::str::FromStr;

use super::errors::InputError;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenFamily {
    Newton,
    ModifiedNewton,
    Secant,
}

impl Algorithm {
    pub const BISECTION: Self       = Algorithm::Bracket(BracketFamily::Bisection);
    pub const FALSE_POSITION: Self  = Algorithm::Bracket(BracketFamily::FalsePosition);
    pub const NEWTON: Self          = Algorithm::Open(OpenFamily::Newton);
    pub const MODIFIED_NEWTON: Self = Algorithm::Open(OpenFamily::ModifiedNewton);
    pub const SECANT: Self          = Algorithm::Open(OpenFamily::Secant);

    /// Every supported algorithm, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Self::BISECTION,
        Self::FALSE_POSITION,
        Self::NEWTON,
        Self::MODIFIED_NEWTON,
        Self::SECANT,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false_position",
            Algorithm::Open(OpenFamily::Newton)              => "newton",
            Algorithm::Open(OpenFamily::ModifiedNewton)      => "modified_newton",
            Algorithm::Open(OpenFamily::Secant)              => "secant",
        }
    }

    /// Human-facing label, e.g. for a method picker.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "Bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "False Position",
            Algorithm::Open(OpenFamily::Newton)              => "Newton",
            Algorithm::Open(OpenFamily::ModifiedNewton)      => "Modified Newton",
            Algorithm::Open(OpenFamily::Secant)              => "Secant",
        }
    }

    /// Highest derivative order the method evaluates.
    /// - `0` : bisection, false position, secant
    /// - `1` : newton
    /// - `2` : modified newton
    pub const fn derivatives_required(self) -> usize {
        match self {
            Algorithm::Open(OpenFamily::Newton)         => 1,
            Algorithm::Open(OpenFamily::ModifiedNewton) => 2,
            _                                           => 0,
        }
    }

    /// Number of numeric inputs (bracket ends or guesses) the method takes.
    pub const fn input_count(self) -> usize {
        match self {
            Algorithm::Bracket(..)                      => 2,
            Algorithm::Open(OpenFamily::Secant)         => 2,
            Algorithm::Open(..)                         => 1,
        }
    }

    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bracket(..))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Accepts both the snake_case name and the label, ignoring case and
/// treating spaces, hyphens and underscores alike.
impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
            .collect();

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.algorithm_name() == key)
            .ok_or_else(|| InputError::UnknownAlgorithm { name: s.to_string() })
    }
}
