//! Builtin character values, in canonical order.
//!
//! Columns: Gematria, Ordinal, Reduced, Sumerian, Primes, Squared,
//! MisparGadol, MisparShemi. Must stay identical to
//! `data/character_values.csv`; `tests/table_data.rs` checks both ways.

use crate::script::Script;
use crate::table::CharacterValueRecord;

const fn record(character: char, script: Script, values: [u32; 8]) -> CharacterValueRecord {
    CharacterValueRecord::new(character, script, values)
}

pub(crate) const BUILTIN_RECORDS: [CharacterValueRecord; 80] = [
    // Latin
    record('A', Script::Latin, [1, 1, 1, 6, 2, 1, 0, 0]),
    record('B', Script::Latin, [2, 2, 2, 12, 3, 4, 0, 0]),
    record('C', Script::Latin, [3, 3, 3, 18, 5, 9, 0, 0]),
    record('D', Script::Latin, [4, 4, 4, 24, 7, 16, 0, 0]),
    record('E', Script::Latin, [5, 5, 5, 30, 11, 25, 0, 0]),
    record('F', Script::Latin, [6, 6, 6, 36, 13, 36, 0, 0]),
    record('G', Script::Latin, [7, 7, 7, 42, 17, 49, 0, 0]),
    record('H', Script::Latin, [8, 8, 8, 48, 19, 64, 0, 0]),
    record('I', Script::Latin, [9, 9, 9, 54, 23, 81, 0, 0]),
    record('J', Script::Latin, [10, 10, 1, 60, 29, 100, 0, 0]),
    record('K', Script::Latin, [20, 11, 2, 66, 31, 400, 0, 0]),
    record('L', Script::Latin, [30, 12, 3, 72, 37, 900, 0, 0]),
    record('M', Script::Latin, [40, 13, 4, 78, 41, 1600, 0, 0]),
    record('N', Script::Latin, [50, 14, 5, 84, 43, 2500, 0, 0]),
    record('O', Script::Latin, [60, 15, 6, 90, 47, 3600, 0, 0]),
    record('P', Script::Latin, [70, 16, 7, 96, 53, 4900, 0, 0]),
    record('Q', Script::Latin, [80, 17, 8, 102, 59, 6400, 0, 0]),
    record('R', Script::Latin, [90, 18, 9, 108, 61, 8100, 0, 0]),
    record('S', Script::Latin, [100, 19, 1, 114, 67, 10000, 0, 0]),
    record('T', Script::Latin, [200, 20, 2, 120, 71, 40000, 0, 0]),
    record('U', Script::Latin, [300, 21, 3, 126, 73, 90000, 0, 0]),
    record('V', Script::Latin, [400, 22, 4, 132, 79, 160000, 0, 0]),
    record('W', Script::Latin, [500, 23, 5, 138, 83, 250000, 0, 0]),
    record('X', Script::Latin, [600, 24, 6, 144, 89, 360000, 0, 0]),
    record('Y', Script::Latin, [700, 25, 7, 150, 97, 490000, 0, 0]),
    record('Z', Script::Latin, [800, 26, 8, 156, 101, 640000, 0, 0]),
    // Greek, with stigma (6), koppa (90) and sampi (900)
    record('Α', Script::Greek, [1, 1, 1, 0, 2, 1, 0, 0]),
    record('Β', Script::Greek, [2, 2, 2, 0, 3, 4, 0, 0]),
    record('Γ', Script::Greek, [3, 3, 3, 0, 5, 9, 0, 0]),
    record('Δ', Script::Greek, [4, 4, 4, 0, 7, 16, 0, 0]),
    record('Ε', Script::Greek, [5, 5, 5, 0, 11, 25, 0, 0]),
    record('Ϛ', Script::Greek, [6, 6, 6, 0, 13, 36, 0, 0]),
    record('Ζ', Script::Greek, [7, 7, 7, 0, 17, 49, 0, 0]),
    record('Η', Script::Greek, [8, 8, 8, 0, 19, 64, 0, 0]),
    record('Θ', Script::Greek, [9, 9, 9, 0, 23, 81, 0, 0]),
    record('Ι', Script::Greek, [10, 10, 1, 0, 29, 100, 0, 0]),
    record('Κ', Script::Greek, [20, 11, 2, 0, 31, 400, 0, 0]),
    record('Λ', Script::Greek, [30, 12, 3, 0, 37, 900, 0, 0]),
    record('Μ', Script::Greek, [40, 13, 4, 0, 41, 1600, 0, 0]),
    record('Ν', Script::Greek, [50, 14, 5, 0, 43, 2500, 0, 0]),
    record('Ξ', Script::Greek, [60, 15, 6, 0, 47, 3600, 0, 0]),
    record('Ο', Script::Greek, [70, 16, 7, 0, 53, 4900, 0, 0]),
    record('Π', Script::Greek, [80, 17, 8, 0, 59, 6400, 0, 0]),
    record('Ϙ', Script::Greek, [90, 18, 9, 0, 61, 8100, 0, 0]),
    record('Ρ', Script::Greek, [100, 19, 1, 0, 67, 10000, 0, 0]),
    record('Σ', Script::Greek, [200, 20, 2, 0, 71, 40000, 0, 0]),
    record('Τ', Script::Greek, [300, 21, 3, 0, 73, 90000, 0, 0]),
    record('Υ', Script::Greek, [400, 22, 4, 0, 79, 160000, 0, 0]),
    record('Φ', Script::Greek, [500, 23, 5, 0, 83, 250000, 0, 0]),
    record('Χ', Script::Greek, [600, 24, 6, 0, 89, 360000, 0, 0]),
    record('Ψ', Script::Greek, [700, 25, 7, 0, 97, 490000, 0, 0]),
    record('Ω', Script::Greek, [800, 26, 8, 0, 101, 640000, 0, 0]),
    record('Ϡ', Script::Greek, [900, 27, 9, 0, 103, 810000, 0, 0]),
    // Hebrew, final forms last
    record('א', Script::Hebrew, [1, 1, 1, 0, 2, 1, 1, 111]),
    record('ב', Script::Hebrew, [2, 2, 2, 0, 3, 4, 2, 412]),
    record('ג', Script::Hebrew, [3, 3, 3, 0, 5, 9, 3, 83]),
    record('ד', Script::Hebrew, [4, 4, 4, 0, 7, 16, 4, 434]),
    record('ה', Script::Hebrew, [5, 5, 5, 0, 11, 25, 5, 6]),
    record('ו', Script::Hebrew, [6, 6, 6, 0, 13, 36, 6, 12]),
    record('ז', Script::Hebrew, [7, 7, 7, 0, 17, 49, 7, 67]),
    record('ח', Script::Hebrew, [8, 8, 8, 0, 19, 64, 8, 418]),
    record('ט', Script::Hebrew, [9, 9, 9, 0, 23, 81, 9, 419]),
    record('י', Script::Hebrew, [10, 10, 1, 0, 29, 100, 10, 20]),
    record('כ', Script::Hebrew, [20, 11, 2, 0, 31, 400, 20, 100]),
    record('ל', Script::Hebrew, [30, 12, 3, 0, 37, 900, 30, 74]),
    record('מ', Script::Hebrew, [40, 13, 4, 0, 41, 1600, 40, 80]),
    record('נ', Script::Hebrew, [50, 14, 5, 0, 43, 2500, 50, 106]),
    record('ס', Script::Hebrew, [60, 15, 6, 0, 47, 3600, 60, 120]),
    record('ע', Script::Hebrew, [70, 16, 7, 0, 53, 4900, 70, 130]),
    record('פ', Script::Hebrew, [80, 17, 8, 0, 59, 6400, 80, 81]),
    record('צ', Script::Hebrew, [90, 18, 9, 0, 61, 8100, 90, 104]),
    record('ק', Script::Hebrew, [100, 19, 1, 0, 67, 10000, 100, 186]),
    record('ר', Script::Hebrew, [200, 20, 2, 0, 71, 40000, 200, 510]),
    record('ש', Script::Hebrew, [300, 21, 3, 0, 73, 90000, 300, 350]),
    record('ת', Script::Hebrew, [400, 22, 4, 0, 79, 160000, 400, 406]),
    record('ך', Script::Hebrew, [20, 23, 2, 0, 83, 400, 500, 100]),
    record('ם', Script::Hebrew, [40, 24, 4, 0, 89, 1600, 600, 80]),
    record('ן', Script::Hebrew, [50, 25, 5, 0, 97, 2500, 700, 106]),
    record('ף', Script::Hebrew, [80, 26, 8, 0, 101, 6400, 800, 81]),
    record('ץ', Script::Hebrew, [90, 27, 9, 0, 103, 8100, 900, 104]),
];
