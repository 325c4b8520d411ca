//! Calculation methods and multi-method selections.
//!
//! Every numbering scheme owns one bit of a `u8`, so any combination of the
//! eight schemes fits in a single [`CalculationMethod`] value. Value requests
//! need exactly one bit; selections used for display may hold any number.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ArithmosError;

bitflags! {
    /// Set of calculation methods.
    ///
    /// # Example
    ///
    /// ```
    /// use arithmos::CalculationMethod;
    ///
    /// let selection = CalculationMethod::GEMATRIA | CalculationMethod::PRIMES;
    /// assert!(selection.contains(CalculationMethod::PRIMES));
    /// assert!(!selection.is_single());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CalculationMethod: u8 {
        /// Standard alphabetic value (1..9, 10..90, 100..900).
        const GEMATRIA = 1 << 0;
        /// Position in the alphabet.
        const ORDINAL = 1 << 1;
        /// Standard value reduced to a single digit.
        const REDUCED = 1 << 2;
        /// Ordinal times six. Latin only.
        const SUMERIAN = 1 << 3;
        /// The n-th prime for the n-th letter.
        const PRIMES = 1 << 4;
        /// Square of the standard value.
        const SQUARED = 1 << 5;
        /// Standard value with final forms counted 500..900. Hebrew only.
        const MISPAR_GADOL = 1 << 6;
        /// Value of the spelled-out letter name. Hebrew only.
        const MISPAR_SHEMI = 1 << 7;

        const ALL = Self::GEMATRIA.bits()
            | Self::ORDINAL.bits()
            | Self::REDUCED.bits()
            | Self::SUMERIAN.bits()
            | Self::PRIMES.bits()
            | Self::SQUARED.bits()
            | Self::MISPAR_GADOL.bits()
            | Self::MISPAR_SHEMI.bits();
    }
}

/// Single-flag methods paired with their stable names, in bit order.
const METHODS: [(CalculationMethod, &str); 8] = [
    (CalculationMethod::GEMATRIA, "Gematria"),
    (CalculationMethod::ORDINAL, "Ordinal"),
    (CalculationMethod::REDUCED, "Reduced"),
    (CalculationMethod::SUMERIAN, "Sumerian"),
    (CalculationMethod::PRIMES, "Primes"),
    (CalculationMethod::SQUARED, "Squared"),
    (CalculationMethod::MISPAR_GADOL, "MisparGadol"),
    (CalculationMethod::MISPAR_SHEMI, "MisparShemi"),
];

impl Default for CalculationMethod {
    fn default() -> Self {
        CalculationMethod::empty()
    }
}

impl CalculationMethod {
    /// Number of distinct methods.
    pub const COUNT: usize = METHODS.len();

    /// True when exactly one flag is set.
    pub fn is_single(self) -> bool {
        self.bits().is_power_of_two()
    }

    /// Stable name of a single-flag method, `None` for empty or combined
    /// selections.
    pub fn name(self) -> Option<&'static str> {
        METHODS
            .iter()
            .find(|(m, _)| *m == self)
            .map(|(_, name)| *name)
    }

    /// Zero-based bit position of a single-flag method.
    pub fn index(self) -> Option<usize> {
        if self.is_single() {
            Some(self.bits().trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Iterate over the single flags contained in this selection, in
    /// declaration order.
    pub fn iter_methods(self) -> impl Iterator<Item = CalculationMethod> {
        METHODS
            .iter()
            .map(|(m, _)| *m)
            .filter(move |m| self.contains(*m))
    }

    /// Every single-flag method, in declaration order.
    pub fn singles() -> impl Iterator<Item = CalculationMethod> {
        CalculationMethod::ALL.iter_methods()
    }

    /// Names of the contained methods, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_methods().filter_map(|m| m.name()).collect()
    }

    /// Parse a list of names into one selection.
    pub fn from_names<I, S>(names: I) -> Result<Self, ArithmosError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(CalculationMethod::empty(), |acc, name| {
                Ok(acc | name.as_ref().parse::<CalculationMethod>()?)
            })
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&self.names().join(" | "))
    }
}

impl FromStr for CalculationMethod {
    type Err = ArithmosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        METHODS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
            .map(|(m, _)| *m)
            .ok_or_else(|| ArithmosError::UnknownMethod(trimmed.to_string()))
    }
}

impl Serialize for CalculationMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for CalculationMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        CalculationMethod::from_names(&names).map_err(de::Error::custom)
    }
}
