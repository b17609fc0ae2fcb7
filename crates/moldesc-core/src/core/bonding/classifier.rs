use super::radii::CovalentRadii;
use crate::core::models::topology::BondOrder;
use std::fmt;
use tracing::warn;

/// Diagnostic emitted when a classified pair involves an element absent from
/// the radius table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElementWarning {
    pub symbols: Vec<String>,
}

impl fmt::Display for UnknownElementWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No bonding radii for element(s) {}; treating their radius as 0",
            self.symbols.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BondClassification {
    pub order: Option<BondOrder>,
    pub warning: Option<UnknownElementWarning>,
}

/// Assigns bond orders from element identities and interatomic distance.
#[derive(Debug, Clone)]
pub struct BondClassifier {
    radii: CovalentRadii,
    tolerance: f64,
}

impl Default for BondClassifier {
    fn default() -> Self {
        Self::new(CovalentRadii::Builtin, 0.0)
    }
}

impl BondClassifier {
    /// `tolerance` scales every cutoff by `1 + tolerance`.
    pub fn new(radii: CovalentRadii, tolerance: f64) -> Self {
        Self { radii, tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn radii(&self) -> &CovalentRadii {
        &self.radii
    }

    /// Classifies the pair `(a, b)` at `distance` Angstroms apart.
    ///
    /// Orders are tried strongest first (triple, double, aromatic, single), and an
    /// order is only considered when both elements define a radius for it. The first
    /// order whose cutoff `(r_a + r_b) * (1 + tolerance)` is not exceeded wins.
    ///
    /// An element missing from the table never aborts classification: the call
    /// yields exactly one warning and the pair is judged against a single-bond cutoff
    /// of zero, so it only counts as bonded (with [`BondOrder::Unknown`]) when the
    /// atoms coincide.
    pub fn classify(&self, a: &str, b: &str, distance: f64) -> BondClassification {
        let (radii_a, radii_b) = match (self.radii.get(a), self.radii.get(b)) {
            (Some(ra), Some(rb)) => (ra, rb),
            (ra, rb) => {
                let mut symbols = Vec::with_capacity(2);
                if ra.is_none() {
                    symbols.push(a.trim().to_string());
                }
                if rb.is_none() && (ra.is_some() || a.trim() != b.trim()) {
                    symbols.push(b.trim().to_string());
                }
                let warning = UnknownElementWarning { symbols };
                warn!("{}", warning);
                let order = (distance <= 0.0).then_some(BondOrder::Unknown);
                return BondClassification {
                    order,
                    warning: Some(warning),
                };
            }
        };

        let scale = 1.0 + self.tolerance;
        let order = BondOrder::PRECEDENCE.into_iter().find(|&order| {
            match (radii_a.get(order), radii_b.get(order)) {
                (Some(ra), Some(rb)) => distance <= (ra + rb) * scale,
                _ => false,
            }
        });

        BondClassification {
            order,
            warning: None,
        }
    }
}
