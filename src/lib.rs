//! Numeric values of Latin, Greek and Hebrew text under eight gematria and
//! isopsephy methods.
//!
//! Text is expected to be normalized already: uppercase Latin and Greek,
//! Hebrew letters as-is. Anything else adds zero.
//!
//! ```
//! use arithmos::{compute_value, toggle, CalculationMethod};
//!
//! assert_eq!(compute_value("K", CalculationMethod::GEMATRIA).unwrap(), 20);
//!
//! let selection = toggle(CalculationMethod::empty(), CalculationMethod::PRIMES);
//! assert_eq!(toggle(selection, CalculationMethod::PRIMES), CalculationMethod::empty());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod io_utils;
pub mod method;
pub mod script;
pub mod selector;
pub mod table;
mod table_data;

pub use config::Config;
pub use engine::{breakdown, compute_value, Contribution};
pub use error::ArithmosError;
pub use method::CalculationMethod;
pub use script::Script;
pub use selector::{is_selected, toggle, Selection};
pub use table::{lookup, script_of, CharacterValueRecord, CharacterValueTable};
