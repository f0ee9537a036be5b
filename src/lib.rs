//! Kleene three-valued truth: `true`, `false`, and the [`Unknown`] sentinel.
//!
//! Predicates sometimes cannot decide: "is this set a subset of that one?"
//! may be neither provably true nor provably false. [`Unknown`] is the third
//! truth value for exactly that answer, and [`Truth`] is the domain
//! `{False, Unknown, True}` the connectors and comparisons range over.
//! Pure value types with no IO, no async, and minimal dependencies.
//!
//! ```
//! use trivalent::{Truth, Unknown, and3, not3, or3};
//!
//! assert_eq!(and3(Unknown, false), Truth::False);
//! assert_eq!(and3(Unknown, true), Truth::Unknown);
//! assert_eq!(or3(Unknown, true), Truth::True);
//! assert_eq!(not3(Unknown), Truth::Unknown);
//!
//! // The sentinel sorts between the booleans and equals only itself.
//! assert!(false < Unknown && Unknown < true);
//! assert!(Unknown != false && Unknown != true);
//! ```
//!
//! # The two-valued collapse
//!
//! Rust's `&&`, `||` and `!` are defined on `bool` only, so any expression
//! that collapses a truth value first — `bool::from(u) && x` — silently uses
//! the two-valued coercion, under which `Unknown` reads as `false` ("not
//! confirmed true"). That collapse is deliberate and kept for compatibility
//! with the behavior documented here, but it is logically wrong as a
//! three-valued connector: collapsing before a conjunction turns
//! `and3(Unknown, false) == false` into `false` for the wrong reason, and
//! `!bool::from(Unknown)` yields `true` where the three-valued negation of
//! `Unknown` is `Unknown`. Use [`and3`], [`or3`] and [`not3`] — or the
//! non-short-circuit `&`, `|` and `!` operators, which delegate to them —
//! whenever an operand may be indeterminate.

mod truth;
mod unknown;

pub use truth::{ParseTruthError, Truth, and3, not3, or3};
pub use unknown::Unknown;
