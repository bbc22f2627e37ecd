//! Monte Carlo sampling of race outcomes. One trial fills a podium by repeated
//! weighted draws without replacement: at each rank a single uniform variate is
//! inverted against the cumulative probabilities of the entrants still in the pool,
//! the drawn entrant is knocked out of the pool, and its probability is subtracted
//! from the residual mass. Scaling the variate by the residual mass is equivalent to
//! renormalising the remaining weights at every step, so the chance of any complete
//! finishing order is the product of the per-rank conditional probabilities.
//!
//! A podium as long as the field yields a full finishing order; a podium of length 1
//! is a plain winner draw over the whole model.

use tinyrand::Rand;

use crate::probs::SliceExt;

/// Runs a single trial, writing the drawn entrant indices into `podium` in finishing
/// order. `bitmap` is scratch storage for pool eligibility and is reset on entry;
/// both buffers are intended to be reused across trials without reallocation.
pub fn run_once(probs: &[f64], podium: &mut [usize], bitmap: &mut [bool], rand: &mut impl Rand) {
    debug_assert_eq!(probs.len(), bitmap.len());
    debug_assert!(!podium.is_empty());
    debug_assert!(podium.len() <= probs.len());
    debug_assert!(validate_probs(probs));

    let mut prob_sum = probs.sum();
    reset_bitmap(bitmap);
    for ranked_entrant in podium.iter_mut() {
        let random = random_f64(rand) * prob_sum;
        let mut cumulative = 0.0;
        let mut chosen = usize::MAX;
        for (entrant, &prob) in probs.iter().enumerate() {
            if bitmap[entrant] {
                cumulative += prob;
                chosen = entrant;
                if cumulative >= random {
                    break;
                }
            }
        }
        // rounding in the cumulative sum can leave the last eligible entrant as the
        // implicit choice when random lands beyond it
        *ranked_entrant = chosen;
        bitmap[chosen] = false;
        prob_sum -= probs[chosen];
    }
}

fn validate_probs(probs: &[f64]) -> bool {
    for &prob in probs {
        debug_assert!(prob >= 0.0, "invalid probs {probs:?}");
        debug_assert!(prob <= 1.0, "invalid probs {probs:?}");
    }
    true
}

fn reset_bitmap(bitmap: &mut [bool]) {
    for flag in bitmap {
        *flag = true;
    }
}

#[inline]
fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}
