use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArithmosError;
use crate::method::CalculationMethod;

/// Writing system a table character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Greek,
    Hebrew,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::Latin, Script::Greek, Script::Hebrew];

    pub fn name(self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Greek => "Greek",
            Script::Hebrew => "Hebrew",
        }
    }

    /// Whether `method` has meaning for letters of this script.
    ///
    /// Table values are still zero where this returns false; the zero is
    /// summed like any other value.
    pub fn supports(self, method: CalculationMethod) -> bool {
        let inapplicable = match self {
            Script::Latin => CalculationMethod::MISPAR_GADOL | CalculationMethod::MISPAR_SHEMI,
            Script::Greek => {
                CalculationMethod::SUMERIAN
                    | CalculationMethod::MISPAR_GADOL
                    | CalculationMethod::MISPAR_SHEMI
            }
            Script::Hebrew => CalculationMethod::SUMERIAN,
        };
        !method.is_empty() && !inapplicable.contains(method)
    }

    /// Methods with meaning for this script.
    pub fn methods(self) -> CalculationMethod {
        CalculationMethod::singles()
            .filter(|m| self.supports(*m))
            .fold(CalculationMethod::empty(), |acc, m| acc | m)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = ArithmosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::ALL
            .iter()
            .copied()
            .find(|script| script.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ArithmosError::Table(format!("unknown script '{}'", s.trim())))
    }
}
