//! Text to value reduction.
//!
//! A total is the plain sum of the per-character values for one method.
//! Characters missing from the table contribute nothing.

use serde::Serialize;
use tracing::trace;

use crate::error::ArithmosError;
use crate::method::CalculationMethod;
use crate::table::CharacterValueTable;

/// One supported character and what it added to a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    /// Character position in the input, counted in chars.
    pub position: usize,
    pub character: char,
    pub value: u32,
}

fn require_single(method: CalculationMethod) -> Result<usize, ArithmosError> {
    method.index().ok_or_else(ArithmosError::single_method_required)
}

impl CharacterValueTable {
    /// Total value of `text` under exactly one method.
    ///
    /// Fails with [`ArithmosError::InvalidArgument`] when `method` has zero
    /// or several flags set. Unsupported characters are skipped.
    pub fn compute_value(&self, text: &str, method: CalculationMethod) -> Result<u64, ArithmosError> {
        let column = require_single(method)?;
        let mut total = 0u64;
        for c in text.chars() {
            match self.lookup(c) {
                Some(record) => total += u64::from(record.values()[column]),
                None => trace!(character = ?c, "skipping unsupported character"),
            }
        }
        Ok(total)
    }

    /// Per-character contributions of the supported characters in `text`.
    ///
    /// Same precondition as [`compute_value`](Self::compute_value); the
    /// contributions sum to its result.
    pub fn breakdown(&self, text: &str, method: CalculationMethod) -> Result<Vec<Contribution>, ArithmosError> {
        let column = require_single(method)?;
        Ok(text
            .chars()
            .enumerate()
            .filter_map(|(position, character)| {
                self.lookup(character).map(|record| Contribution {
                    position,
                    character,
                    value: record.values()[column],
                })
            })
            .collect())
    }
}

/// Total value of `text` under one method, using the builtin table.
///
/// ```
/// use arithmos::{compute_value, CalculationMethod};
///
/// assert_eq!(compute_value("AB", CalculationMethod::GEMATRIA).unwrap(), 3);
/// assert!(compute_value("AB", CalculationMethod::ALL).is_err());
/// ```
pub fn compute_value(text: &str, method: CalculationMethod) -> Result<u64, ArithmosError> {
    CharacterValueTable::builtin().compute_value(text, method)
}

/// Per-character breakdown of `text` using the builtin table.
pub fn breakdown(text: &str, method: CalculationMethod) -> Result<Vec<Contribution>, ArithmosError> {
    CharacterValueTable::builtin().breakdown(text, method)
}
