use phf::{Map, phf_map};
use thiserror::Error;

/// Number of elements known to the resolver (H through Og).
pub const ELEMENT_COUNT: usize = 118;

static ELEMENT_SYMBOLS: [&str; ELEMENT_COUNT] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

static ATOMIC_NUMBERS: Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8,
    "F" => 9, "Ne" => 10, "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16,
    "Cl" => 17, "Ar" => 18, "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24,
    "Mn" => 25, "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32,
    "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36, "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40,
    "Nb" => 41, "Mo" => 42, "Tc" => 43, "Ru" => 44, "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48,
    "In" => 49, "Sn" => 50, "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54, "Cs" => 55, "Ba" => 56,
    "La" => 57, "Ce" => 58, "Pr" => 59, "Nd" => 60, "Pm" => 61, "Sm" => 62, "Eu" => 63, "Gd" => 64,
    "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71, "Hf" => 72,
    "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78, "Au" => 79, "Hg" => 80,
    "Tl" => 81, "Pb" => 82, "Bi" => 83, "Po" => 84, "At" => 85, "Rn" => 86, "Fr" => 87, "Ra" => 88,
    "Ac" => 89, "Th" => 90, "Pa" => 91, "U" => 92, "Np" => 93, "Pu" => 94, "Am" => 95, "Cm" => 96,
    "Bk" => 97, "Cf" => 98, "Es" => 99, "Fm" => 100, "Md" => 101, "No" => 102, "Lr" => 103, "Rf" => 104,
    "Db" => 105, "Sg" => 106, "Bh" => 107, "Hs" => 108, "Mt" => 109, "Ds" => 110, "Rg" => 111, "Cn" => 112,
    "Nh" => 113, "Fl" => 114, "Mc" => 115, "Lv" => 116, "Ts" => 117, "Og" => 118,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Unknown element symbol: '{0}'")]
    UnknownSymbol(String),
    #[error("Unknown atomic number: {0}")]
    UnknownNumber(u8),
}

/// Looks up the atomic number of an element symbol.
///
/// Symbols are matched case-sensitively after trimming surrounding whitespace,
/// so `"Cl"` resolves while `"CL"` does not.
///
/// # Errors
///
/// Returns [`ElementError::UnknownSymbol`] if the symbol has no table entry.
pub fn symbol_to_number(symbol: &str) -> Result<u8, ElementError> {
    ATOMIC_NUMBERS
        .get(symbol.trim())
        .copied()
        .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))
}

/// Looks up the element symbol for an atomic number.
///
/// # Errors
///
/// Returns [`ElementError::UnknownNumber`] for `0` and anything above [`ELEMENT_COUNT`].
pub fn number_to_symbol(number: u8) -> Result<&'static str, ElementError> {
    (number as usize)
        .checked_sub(1)
        .and_then(|idx| ELEMENT_SYMBOLS.get(idx))
        .copied()
        .ok_or(ElementError::UnknownNumber(number))
}

pub fn symbols_to_numbers<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<u8>, ElementError> {
    symbols
        .iter()
        .map(|s| symbol_to_number(s.as_ref()))
        .collect()
}

pub fn numbers_to_symbols(numbers: &[u8]) -> Result<Vec<String>, ElementError> {
    numbers
        .iter()
        .map(|&n| number_to_symbol(n).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_to_number_resolves_common_elements() {
        assert_eq!(symbol_to_number("H"), Ok(1));
        assert_eq!(symbol_to_number("C"), Ok(6));
        assert_eq!(symbol_to_number("Cl"), Ok(17));
        assert_eq!(symbol_to_number("Og"), Ok(118));
    }

    #[test]
    fn symbol_to_number_trims_whitespace_and_is_case_sensitive() {
        assert_eq!(symbol_to_number(" O "), Ok(8));
        assert!(symbol_to_number("CL").is_err());
        assert!(symbol_to_number("cl").is_err());
    }

    #[test]
    fn symbol_to_number_rejects_unknown_symbols() {
        assert_eq!(
            symbol_to_number("Xx"),
            Err(ElementError::UnknownSymbol("Xx".to_string()))
        );
        assert!(symbol_to_number("").is_err());
    }

    #[test]
    fn number_to_symbol_rejects_out_of_range_numbers() {
        assert_eq!(number_to_symbol(0), Err(ElementError::UnknownNumber(0)));
        assert_eq!(number_to_symbol(119), Err(ElementError::UnknownNumber(119)));
        assert_eq!(number_to_symbol(1), Ok("H"));
        assert_eq!(number_to_symbol(118), Ok("Og"));
    }

    #[test]
    fn every_table_entry_round_trips() {
        for (idx, symbol) in ELEMENT_SYMBOLS.iter().enumerate() {
            let number = symbol_to_number(symbol).unwrap();
            assert_eq!(number as usize, idx + 1);
            assert_eq!(number_to_symbol(number).unwrap(), *symbol);
        }
        assert_eq!(ATOMIC_NUMBERS.len(), ELEMENT_COUNT);
    }

    #[test]
    fn sequence_lookups_preserve_order() {
        let elements = ["C", "H", "H", "H", "H"];
        let numbers = symbols_to_numbers(&elements).unwrap();
        assert_eq!(numbers, vec![6, 1, 1, 1, 1]);
        assert_eq!(numbers_to_symbols(&numbers).unwrap(), elements);
    }

    #[test]
    fn sequence_lookup_fails_on_first_unknown_entry() {
        let result = symbols_to_numbers(&["C", "Qq", "Zz"]);
        assert_eq!(result, Err(ElementError::UnknownSymbol("Qq".to_string())));
        assert!(numbers_to_symbols(&[1, 200]).is_err());
    }
}
