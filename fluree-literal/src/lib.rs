//! Typed RDF literal values
//!
//! Literals pair a lexical form with a datatype IRI and, when the lexical form
//! decodes, a native value. The centerpiece is [`IntegerLiteral`] (`xsd:integer`
//! and its derived types); decimal, double, boolean and plain literals exist so
//! that arithmetic results and datatype dispatch always have a variant to land in.
//!
//! # Key Design Principles
//!
//! 1. **Lexical forms are preserved** - A literal built from `"+007"` renders as
//!    `"+007"` until [`Literal::canonicalize`] is called explicitly.
//!
//! 2. **Lenient construction** - Malformed input never fails construction. The
//!    literal simply has no decoded value, and [`Literal::is_valid`] says so.
//!
//! 3. **Value equality** - Two literals with decoded values are equal when their
//!    values are equal, whatever their lexical forms.
//!
//! 4. **Results go through the factory** - Arithmetic and stepping return
//!    [`AnyLiteral`] built by [`literal_from_value`], so the result variant
//!    follows the native result.
//!
//! # Example
//!
//! ```
//! use fluree_literal::{literal_from_lexical, Datatype, Literal};
//!
//! let mut lit = literal_from_lexical("+0042", &Datatype::xsd_integer());
//! assert_eq!(lit.to_string(), "+0042");
//! assert!(lit.is_valid());
//! assert_eq!(lit.canonicalize().to_string(), "42");
//!
//! let half = literal_from_lexical("0.50", &Datatype::xsd_decimal());
//! assert_eq!(half.to_canonical().to_string(), "0.5");
//! ```

pub mod arithmetic;
pub mod convert;
pub mod datatype;
pub mod error;
pub mod factory;
pub mod integer;
pub mod literal;
pub mod variants;

pub use arithmetic::ArithmeticOp;
pub use convert::ToInteger;
pub use datatype::Datatype;
pub use error::{LiteralError, Result};
pub use factory::{literal_from_lexical, literal_from_value, AnyLiteral, NativeValue};
pub use integer::IntegerLiteral;
pub use literal::{Literal, LiteralOptions};
pub use variants::{BooleanLiteral, DecimalLiteral, DoubleLiteral, PlainLiteral};
