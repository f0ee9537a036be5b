//! The three-valued truth domain and its connectors.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

use thiserror::Error;

use crate::Unknown;

/// A Kleene truth value: a classical boolean lifted into the three-valued
/// domain, or [`Unknown`].
///
/// Variants are declared in comparison order, so the derived [`Ord`] is the
/// single three-way decision all six relational operators come from:
/// `False < Unknown < True`. Plain `bool` operands lift through the same
/// decision, which is what keeps `<`, `<=`, `>`, `>=`, `==` and `!=`
/// mutually consistent.
///
/// The default is `Unknown`: a predicate is indeterminate until decided.
///
/// ```
/// use trivalent::{Truth, Unknown};
///
/// assert_eq!(Truth::from(true), Truth::True);
/// assert_eq!(Truth::from(Unknown), Truth::Unknown);
/// assert!(Truth::False < Truth::Unknown);
/// assert!(Truth::Unknown < true);
/// ```
///
/// Ordering against anything that is neither a truth value nor a `bool` is
/// a type error, not a silent answer:
///
/// ```compile_fail
/// use trivalent::Truth;
///
/// let _ = Truth::Unknown < 5;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Truth {
    False,
    #[default]
    Unknown,
    True,
}

impl Truth {
    /// Three-valued conjunction: `False` if either operand is `False`,
    /// `True` only if both are, `Unknown` otherwise.
    ///
    /// Unlike short-circuit `&&` on a collapsed value, this is correct when
    /// an operand is indeterminate: `and3(Unknown, False)` is `False`.
    #[must_use]
    pub fn and3(self, other: impl Into<Truth>) -> Truth {
        match (self, other.into()) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::True, Truth::True) => Truth::True,
            _ => Truth::Unknown,
        }
    }

    /// Three-valued disjunction: `True` if either operand is `True`,
    /// `False` only if both are, `Unknown` otherwise.
    #[must_use]
    pub fn or3(self, other: impl Into<Truth>) -> Truth {
        match (self, other.into()) {
            (Truth::True, _) | (_, Truth::True) => Truth::True,
            (Truth::False, Truth::False) => Truth::False,
            _ => Truth::Unknown,
        }
    }

    /// Three-valued negation. The negation of `Unknown` is `Unknown`.
    #[must_use]
    pub const fn not3(self) -> Truth {
        match self {
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
            Truth::True => Truth::False,
        }
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Truth::True)
    }

    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Truth::False)
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Truth::Unknown)
    }

    /// Whether the value is one of the two classical booleans.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !self.is_unknown()
    }

    /// The definite boolean, if there is one.
    #[must_use]
    pub const fn known(self) -> Option<bool> {
        match self {
            Truth::False => Some(false),
            Truth::Unknown => None,
            Truth::True => Some(true),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Truth::False => "False",
            Truth::Unknown => "Unknown",
            Truth::True => "True",
        }
    }
}

/// Three-valued conjunction over any mix of `bool`, [`Unknown`] and [`Truth`].
#[must_use]
pub fn and3(a: impl Into<Truth>, b: impl Into<Truth>) -> Truth {
    a.into().and3(b)
}

/// Three-valued disjunction over any mix of `bool`, [`Unknown`] and [`Truth`].
#[must_use]
pub fn or3(a: impl Into<Truth>, b: impl Into<Truth>) -> Truth {
    a.into().or3(b)
}

/// Three-valued negation. On plain booleans this is ordinary negation;
/// `not3(Unknown)` is `Unknown`.
#[must_use]
pub fn not3(a: impl Into<Truth>) -> Truth {
    a.into().not3()
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value { Truth::True } else { Truth::False }
    }
}

impl From<Unknown> for Truth {
    fn from(_: Unknown) -> Self {
        Truth::Unknown
    }
}

impl From<Option<bool>> for Truth {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(known) => Truth::from(known),
            None => Truth::Unknown,
        }
    }
}

/// The two-valued collapse: `Unknown` reads as `false`.
///
/// Deliberately imprecise; see the crate docs for the caveat about feeding
/// collapsed values to `&&`, `||` and `!`.
impl From<Truth> for bool {
    fn from(value: Truth) -> Self {
        matches!(value, Truth::True)
    }
}

// ============================================================================
// Parsing & display
// ============================================================================

/// Error returned when parsing a string that names no truth value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a truth value: {0:?} (expected False, Unknown or True)")]
pub struct ParseTruthError(String);

impl FromStr for Truth {
    type Err = ParseTruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "false" => Ok(Truth::False),
            "unknown" => Ok(Truth::Unknown),
            "true" => Ok(Truth::True),
            _ => Err(ParseTruthError(s.to_string())),
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Comparisons against plain booleans
// ============================================================================

impl PartialEq<bool> for Truth {
    fn eq(&self, other: &bool) -> bool {
        *self == Truth::from(*other)
    }
}

impl PartialEq<Truth> for bool {
    fn eq(&self, other: &Truth) -> bool {
        Truth::from(*self) == *other
    }
}

impl PartialOrd<bool> for Truth {
    fn partial_cmp(&self, other: &bool) -> Option<Ordering> {
        Some(self.cmp(&Truth::from(*other)))
    }
}

impl PartialOrd<Truth> for bool {
    fn partial_cmp(&self, other: &Truth) -> Option<Ordering> {
        Some(Truth::from(*self).cmp(other))
    }
}

// ============================================================================
// Operator forms
// ============================================================================

// `&`, `|` and `!` do not short-circuit, so unlike `&&`/`||`/`!` on a
// collapsed bool they can carry full three-valued semantics.

impl<R: Into<Truth>> BitAnd<R> for Truth {
    type Output = Truth;

    fn bitand(self, rhs: R) -> Truth {
        self.and3(rhs)
    }
}

impl<R: Into<Truth>> BitOr<R> for Truth {
    type Output = Truth;

    fn bitor(self, rhs: R) -> Truth {
        self.or3(rhs)
    }
}

impl Not for Truth {
    type Output = Truth;

    fn not(self) -> Truth {
        self.not3()
    }
}

impl BitAnd<Truth> for bool {
    type Output = Truth;

    fn bitand(self, rhs: Truth) -> Truth {
        Truth::from(self).and3(rhs)
    }
}

impl BitOr<Truth> for bool {
    type Output = Truth;

    fn bitor(self, rhs: Truth) -> Truth {
        Truth::from(self).or3(rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
