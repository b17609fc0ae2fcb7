use crate::core::models::topology::BondOrder;
use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Effective bonding radii of one element, one entry per bond order.
///
/// The sum of two radii for the same order is the longest distance at which
/// the pair is still considered bonded with that order. `None` means the
/// element is never assigned that order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BondRadii {
    pub single: Option<f64>,
    pub aromatic: Option<f64>,
    pub double: Option<f64>,
    pub triple: Option<f64>,
}

impl BondRadii {
    pub const fn single(radius: f64) -> Self {
        Self {
            single: Some(radius),
            aromatic: None,
            double: None,
            triple: None,
        }
    }

    pub fn get(&self, order: BondOrder) -> Option<f64> {
        match order {
            BondOrder::Single => self.single,
            BondOrder::Aromatic => self.aromatic,
            BondOrder::Double => self.double,
            BondOrder::Triple => self.triple,
            BondOrder::Unknown => None,
        }
    }
}

const fn radii(single: f64, aromatic: Option<f64>, double: Option<f64>, triple: Option<f64>) -> BondRadii {
    BondRadii {
        single: Some(single),
        aromatic,
        double,
        triple,
    }
}

static BUILTIN_RADII: Map<&'static str, BondRadii> = phf_map! {
    "H" => BondRadii::single(0.6),
    "B" => radii(0.95, None, Some(0.85), Some(0.8)),
    "C" => radii(0.85, Some(0.72), Some(0.69), Some(0.62)),
    "N" => radii(0.74, Some(0.655), Some(0.63), Some(0.565)),
    "O" => radii(0.71, Some(0.62), Some(0.59), Some(0.53)),
    "F" => BondRadii::single(0.75),
    "Si" => radii(1.2, None, Some(1.1), None),
    "P" => radii(1.04, Some(0.87), Some(0.77), None),
    "S" => radii(1.06, Some(1.03), Some(0.952), None),
    "Cl" => BondRadii::single(1.045),
    "Se" => radii(1.22, None, Some(1.1), None),
    "Br" => BondRadii::single(1.2),
    "I" => BondRadii::single(1.4),
};

#[derive(Debug, Error)]
pub enum RadiusTableError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Radius table '{path}' defines element '{symbol}' more than once")]
    DuplicateElement { path: String, symbol: String },
}

#[derive(Debug, Deserialize)]
struct RadiusRecord {
    symbol: String,
    single: Option<f64>,
    aromatic: Option<f64>,
    double: Option<f64>,
    triple: Option<f64>,
}

/// Lookup table of per-order bonding radii.
///
/// The built-in table covers the main-group elements common in organic
/// molecules. A custom table can be loaded from CSV with the header
/// `symbol,single,aromatic,double,triple`; empty cells mark orders the element
/// does not form.
#[derive(Debug, Clone, Default)]
pub enum CovalentRadii {
    #[default]
    Builtin,
    Custom(Arc<HashMap<String, BondRadii>>),
}

impl CovalentRadii {
    pub fn get(&self, symbol: &str) -> Option<BondRadii> {
        let symbol = symbol.trim();
        match self {
            Self::Builtin => BUILTIN_RADII.get(symbol).copied(),
            Self::Custom(table) => table.get(symbol).copied(),
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn from_map(table: HashMap<String, BondRadii>) -> Self {
        Self::Custom(Arc::new(table))
    }

    pub fn load_csv(path: &Path) -> Result<Self, RadiusTableError> {
        let path_str = path.to_string_lossy().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| RadiusTableError::Csv {
                path: path_str.clone(),
                source: e,
            })?;

        let mut table = HashMap::new();
        for result in reader.deserialize::<RadiusRecord>() {
            let record = result.map_err(|e| RadiusTableError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
            let entry = BondRadii {
                single: record.single,
                aromatic: record.aromatic,
                double: record.double,
                triple: record.triple,
            };
            if table.insert(record.symbol.clone(), entry).is_some() {
                return Err(RadiusTableError::DuplicateElement {
                    path: path_str,
                    symbol: record.symbol,
                });
            }
        }
        Ok(Self::from_map(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_table_has_expected_carbon_radii() {
        let carbon = CovalentRadii::Builtin.get("C").unwrap();
        assert_eq!(carbon.get(BondOrder::Single), Some(0.85));
        assert_eq!(carbon.get(BondOrder::Aromatic), Some(0.72));
        assert_eq!(carbon.get(BondOrder::Double), Some(0.69));
        assert_eq!(carbon.get(BondOrder::Triple), Some(0.62));
        assert_eq!(carbon.get(BondOrder::Unknown), None);
    }

    #[test]
    fn hydrogen_only_forms_single_bonds() {
        let hydrogen = CovalentRadii::Builtin.get(" H ").unwrap();
        assert_eq!(hydrogen.get(BondOrder::Single), Some(0.6));
        assert_eq!(hydrogen.get(BondOrder::Double), None);
        assert_eq!(hydrogen.get(BondOrder::Triple), None);
    }

    #[test]
    fn builtin_table_misses_unlisted_elements() {
        assert!(!CovalentRadii::Builtin.contains("Xx"));
        assert!(!CovalentRadii::Builtin.contains("Fe"));
        assert!(CovalentRadii::Builtin.contains("Cl"));
    }

    #[test]
    fn load_csv_reads_partial_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("radii.csv");
        fs::write(
            &path,
            "symbol,single,aromatic,double,triple\nC,0.8,,0.7,0.6\nH, 0.5,,,\n",
        )
        .unwrap();

        let table = CovalentRadii::load_csv(&path).unwrap();
        let carbon = table.get("C").unwrap();
        assert_eq!(carbon.single, Some(0.8));
        assert_eq!(carbon.aromatic, None);
        assert_eq!(carbon.double, Some(0.7));
        assert_eq!(table.get("H").unwrap(), BondRadii::single(0.5));
        assert!(table.get("O").is_none());
    }

    #[test]
    fn load_csv_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = CovalentRadii::load_csv(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(RadiusTableError::Csv { .. })));
    }

    #[test]
    fn load_csv_fails_for_malformed_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "symbol,single,aromatic,double,triple\nC,abc,,,\n").unwrap();
        let result = CovalentRadii::load_csv(&path);
        assert!(matches!(result, Err(RadiusTableError::Csv { .. })));
    }

    #[test]
    fn load_csv_rejects_duplicate_elements() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.csv");
        fs::write(
            &path,
            "symbol,single,aromatic,double,triple\nC,0.8,,,\nC,0.9,,,\n",
        )
        .unwrap();
        let result = CovalentRadii::load_csv(&path);
        assert!(matches!(
            result,
            Err(RadiusTableError::DuplicateElement { ref symbol, .. }) if symbol == "C"
        ));
    }
}
