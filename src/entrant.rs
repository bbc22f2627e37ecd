//! An [Entrant] is a single competitor in the field: a name, the market odds quoted
//! against it, and whatever descriptive metadata the source file carried alongside.
//! The metadata is opaque to the simulator and is echoed unchanged in the output.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub type Metadata = FxHashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    pub odds: f64,
    #[serde(default)]
    pub metadata: Metadata,
}
impl Entrant {
    pub fn new(name: impl Into<String>, odds: f64) -> Self {
        Self {
            name: name.into(),
            odds,
            metadata: Metadata::default(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether this entrant may take part in a simulation. Odds scraped from a file
    /// may be missing or junk (surfacing here as NaN), zero, or negative; none of
    /// these yield a usable implied probability.
    pub fn is_admissible(&self) -> bool {
        self.odds.is_finite() && self.odds > 0.0
    }
}

/// Filters the field down to entrants with usable odds, preserving input order.
pub fn admit(entrants: Vec<Entrant>) -> Vec<Entrant> {
    entrants
        .into_iter()
        .filter(Entrant::is_admissible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admissible() {
        assert!(Entrant::new("Boldden", 4.5).is_admissible());
        assert!(!Entrant::new("Scratched", 0.0).is_admissible());
        assert!(!Entrant::new("Backwards", -2.0).is_admissible());
        assert!(!Entrant::new("Unquoted", f64::NAN).is_admissible());
        assert!(!Entrant::new("Longest Shot", f64::INFINITY).is_admissible());
    }

    #[test]
    fn admit_preserves_order() {
        let field = vec![
            Entrant::new("a", 2.0),
            Entrant::new("b", 0.0),
            Entrant::new("c", 3.0),
            Entrant::new("d", f64::NAN),
            Entrant::new("e", 11.0),
        ];
        let admitted = admit(field);
        let names: Vec<_> = admitted.iter().map(|entrant| entrant.name.as_str()).collect();
        assert_eq!(vec!["a", "c", "e"], names);
    }

    #[test]
    fn metadata_passthrough() {
        let entrant = Entrant::new("Boldden", 4.5)
            .with_metadata("Jockey", "T. Piccone")
            .with_metadata("Trainer", "G. Waterhouse");
        assert_eq!("T. Piccone", entrant.metadata["Jockey"]);
        assert_eq!(2, entrant.metadata.len());
    }
}
