//! Derivation of a normalised win-probability model from quoted market odds.
//! Each admitted entrant's implied probability is the reciprocal of its odds; the
//! implied set is then scaled to sum to 1, with the pre-scaling sum retained as the
//! overround. The model is built once per simulation run and is immutable afterward.

use serde::Serialize;
use thiserror::Error;

use crate::entrant::{self, Entrant};
use crate::probs::SliceExt;

const BOOKSUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("no entrants with positive odds")]
    EmptyField,

    #[error("non-finite probability derived for '{0}'")]
    NonFiniteProbability(String),

    #[error("trial count must be positive")]
    ZeroTrials,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinModel {
    entrants: Vec<Entrant>,
    probs: Vec<f64>,
    overround: f64,
}
impl WinModel {
    /// Builds the model from a raw field. Entrants without usable odds are excluded
    /// up front; the survivors keep their input order, which later acts as the
    /// tie-break order throughout the simulation.
    pub fn from_entrants(entrants: Vec<Entrant>) -> Result<Self, ValidationError> {
        let admitted = entrant::admit(entrants);
        if admitted.is_empty() {
            return Err(ValidationError::EmptyField);
        }

        let odds: Vec<f64> = admitted.iter().map(|entrant| entrant.odds).collect();
        let mut probs = odds.invert();
        let overround = probs.normalise(1.0);
        for (index, &prob) in probs.iter().enumerate() {
            if !prob.is_finite() {
                return Err(ValidationError::NonFiniteProbability(
                    admitted[index].name.clone(),
                ));
            }
        }
        debug_assert!((probs.sum() - 1.0).abs() <= BOOKSUM_TOLERANCE);

        Ok(Self {
            entrants: admitted,
            probs,
            overround,
        })
    }

    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }

    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Sum of the implied probabilities before normalisation. Above 1 indicates the
    /// quoted odds carry a bookmaker margin.
    pub fn overround(&self) -> f64 {
        self.overround
    }

    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_slice_f64_relative;
    use assert_float_eq::*;

    #[test]
    fn from_even_field() {
        let model = WinModel::from_entrants(vec![
            Entrant::new("a", 4.0),
            Entrant::new("b", 4.0),
            Entrant::new("c", 4.0),
            Entrant::new("d", 4.0),
        ])
        .unwrap();
        assert_slice_f64_relative(&[0.25, 0.25, 0.25, 0.25], model.probs(), 0.001);
        assert_f64_near!(1.0, model.overround(), 1);
    }

    #[test]
    fn from_uneven_field() {
        let model =
            WinModel::from_entrants(vec![Entrant::new("a", 2.0), Entrant::new("b", 4.0)]).unwrap();
        assert_slice_f64_relative(&[2.0 / 3.0, 1.0 / 3.0], model.probs(), 0.001);
        assert_float_relative_eq!(0.75, model.overround(), 0.001);
    }

    #[test]
    fn booksum_is_unity() {
        let model = WinModel::from_entrants(vec![
            Entrant::new("a", 1.55),
            Entrant::new("b", 12.0),
            Entrant::new("c", 6.5),
            Entrant::new("d", 9.0),
            Entrant::new("e", 61.0),
        ])
        .unwrap();
        assert!((model.probs().sum() - 1.0).abs() <= BOOKSUM_TOLERANCE);
    }

    #[test]
    fn excludes_inadmissible_entrants() {
        let model = WinModel::from_entrants(vec![
            Entrant::new("a", 2.0),
            Entrant::new("scratched", 0.0),
            Entrant::new("b", 2.0),
        ])
        .unwrap();
        assert_eq!(2, model.len());
        assert_eq!("b", model.entrants()[1].name);
    }

    #[test]
    fn empty_field_rejected() {
        let result = WinModel::from_entrants(vec![Entrant::new("scratched", 0.0)]);
        assert!(matches!(result, Err(ValidationError::EmptyField)));

        let result = WinModel::from_entrants(vec![]);
        assert!(matches!(result, Err(ValidationError::EmptyField)));
    }
}
