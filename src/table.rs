//! Character value table.
//!
//! Maps a single character to its value under every [`CalculationMethod`].
//! The builtin table covers uppercase Latin A-Z, uppercase Greek including
//! the archaic numerals and Hebrew including final forms. Lookups are keyed
//! on exact codepoints; case folding belongs to the caller.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::ArithmosError;
use crate::io_utils::io_error;
use crate::method::CalculationMethod;
use crate::script::Script;
use crate::table_data::BUILTIN_RECORDS;

/// Values of one character under every calculation method.
///
/// Zero marks a method that does not apply to the character's script; it is
/// summed like any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterValueRecord {
    pub character: char,
    pub script: Script,
    values: [u32; CalculationMethod::COUNT],
}

impl CharacterValueRecord {
    /// Values are indexed by method bit position.
    pub const fn new(character: char, script: Script, values: [u32; CalculationMethod::COUNT]) -> Self {
        Self {
            character,
            script,
            values,
        }
    }

    /// Value under a single method. `None` if `method` does not name exactly
    /// one flag.
    pub fn value(&self, method: CalculationMethod) -> Option<u32> {
        method.index().map(|i| self.values[i])
    }

    pub fn values(&self) -> &[u32; CalculationMethod::COUNT] {
        &self.values
    }

    /// `(method, value)` pairs in method order.
    pub fn iter(&self) -> impl Iterator<Item = (CalculationMethod, u32)> + '_ {
        CalculationMethod::singles().zip(self.values.iter().copied())
    }
}

/// One line of the canonical CSV form.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    character: char,
    script: Script,
    #[serde(rename = "Gematria")]
    gematria: u32,
    #[serde(rename = "Ordinal")]
    ordinal: u32,
    #[serde(rename = "Reduced")]
    reduced: u32,
    #[serde(rename = "Sumerian")]
    sumerian: u32,
    #[serde(rename = "Primes")]
    primes: u32,
    #[serde(rename = "Squared")]
    squared: u32,
    #[serde(rename = "MisparGadol")]
    mispar_gadol: u32,
    #[serde(rename = "MisparShemi")]
    mispar_shemi: u32,
}

impl From<CsvRow> for CharacterValueRecord {
    fn from(row: CsvRow) -> Self {
        CharacterValueRecord::new(
            row.character,
            row.script,
            [
                row.gematria,
                row.ordinal,
                row.reduced,
                row.sumerian,
                row.primes,
                row.squared,
                row.mispar_gadol,
                row.mispar_shemi,
            ],
        )
    }
}

impl From<&CharacterValueRecord> for CsvRow {
    fn from(record: &CharacterValueRecord) -> Self {
        let [gematria, ordinal, reduced, sumerian, primes, squared, mispar_gadol, mispar_shemi] =
            record.values;
        CsvRow {
            character: record.character,
            script: record.script,
            gematria,
            ordinal,
            reduced,
            sumerian,
            primes,
            squared,
            mispar_gadol,
            mispar_shemi,
        }
    }
}

/// Immutable character → values mapping.
#[derive(Debug, Clone)]
pub struct CharacterValueTable {
    records: Vec<CharacterValueRecord>,
    index: HashMap<char, usize>,
}

static BUILTIN: OnceLock<CharacterValueTable> = OnceLock::new();

impl CharacterValueTable {
    /// The process-wide builtin table. Built on first use and shared by all
    /// threads afterwards.
    pub fn builtin() -> &'static CharacterValueTable {
        BUILTIN.get_or_init(|| {
            let records = BUILTIN_RECORDS.to_vec();
            let index = records
                .iter()
                .enumerate()
                .map(|(i, r)| (r.character, i))
                .collect();
            CharacterValueTable { records, index }
        })
    }

    /// Build a table from records, keeping their order. Characters must be
    /// unique.
    pub fn from_records<I>(records: I) -> Result<Self, ArithmosError>
    where
        I: IntoIterator<Item = CharacterValueRecord>,
    {
        let records: Vec<CharacterValueRecord> = records.into_iter().collect();
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.character, i).is_some() {
                return Err(ArithmosError::Table(format!(
                    "duplicate character '{}' (U+{:04X})",
                    record.character, record.character as u32
                )));
            }
        }
        Ok(Self { records, index })
    }

    /// Parse the canonical CSV form: a header row followed by one row per
    /// character with its script and one column per method.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ArithmosError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut records = Vec::new();
        for row in rdr.deserialize::<CsvRow>() {
            records.push(CharacterValueRecord::from(row?));
        }
        if records.is_empty() {
            return Err(ArithmosError::Table("table has no rows".into()));
        }
        let table = Self::from_records(records)?;
        debug!(characters = table.len(), "loaded character value table");
        Ok(table)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ArithmosError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error("opening table", path, e))?;
        Self::from_csv_reader(file)
    }

    /// Write the canonical CSV form.
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<(), ArithmosError> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        for record in &self.records {
            wtr.serialize(CsvRow::from(record))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, ArithmosError> {
        let mut buf = Vec::new();
        self.to_csv_writer(&mut buf)?;
        String::from_utf8(buf).map_err(|e| ArithmosError::Table(e.to_string()))
    }

    /// Hex SHA-256 of the canonical CSV form.
    pub fn checksum(&self) -> Result<String, ArithmosError> {
        let mut buf = Vec::new();
        self.to_csv_writer(&mut buf)?;
        Ok(hex::encode(Sha256::digest(&buf)))
    }

    pub fn lookup(&self, character: char) -> Option<&CharacterValueRecord> {
        self.index.get(&character).map(|&i| &self.records[i])
    }

    pub fn contains(&self, character: char) -> bool {
        self.index.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterValueRecord> {
        self.records.iter()
    }

    /// Records belonging to one script.
    pub fn script_records(&self, script: Script) -> impl Iterator<Item = &CharacterValueRecord> {
        self.records.iter().filter(move |r| r.script == script)
    }
}

impl<'a> IntoIterator for &'a CharacterValueTable {
    type Item = &'a CharacterValueRecord;
    type IntoIter = std::slice::Iter<'a, CharacterValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Look up a character in the builtin table.
pub fn lookup(character: char) -> Option<CharacterValueRecord> {
    CharacterValueTable::builtin().lookup(character).copied()
}

/// Script of a builtin table character.
pub fn script_of(character: char) -> Option<Script> {
    lookup(character).map(|r| r.script)
}
