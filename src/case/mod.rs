//! Case style recognition and conversion.
//!
//! An input is fingerprinted (separator and casing pattern), the fingerprint
//! is matched against the fixed style table, and recognized inputs can be
//! split into words and rejoined in any other style.

pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod style;

pub use engine::{convert, recognize, render};
pub use error::CaseError;
pub use style::Style;
