use serde::{Deserialize, Serialize};

use crate::models::ScoringInput;

/// Scoring constants. The defaults are the algorithm; there is no external
/// override surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Holder count at which the normalized holder score saturates at 1.0.
    pub holder_saturation: i64,
    /// Flat bonus applied when the liquidity pool is locked.
    pub lp_lock_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            holder_saturation: 1000,
            lp_lock_bonus: 0.2,
        }
    }
}

/// Final scoring output: a clamped score plus a human-readable trace of the
/// raw inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustScore {
    pub score: f64,
    pub reason: String,
}

/// Compute the clamped trust score and reason line for one input.
pub fn score_token(input: &ScoringInput, weights: &ScoreWeights) -> TrustScore {
    let score = clamp_unit(raw_score(input, weights));
    TrustScore {
        score,
        reason: reason_line(input),
    }
}

// ---------------------------------------------------------------------------
// Holder normalization
// ---------------------------------------------------------------------------

/// Linear interpolation of the holder count onto [0, 1], saturating at
/// `saturation`. Non-positive counts pin to 0.0.
pub fn normalize_holders(holders: i64, saturation: i64) -> f64 {
    if holders <= 0 {
        return 0.0;
    }
    if holders >= saturation {
        return 1.0;
    }
    holders as f64 / saturation as f64
}

// ---------------------------------------------------------------------------
// Raw score + clamp
// ---------------------------------------------------------------------------

/// Pre-clamp sum of weighted inputs:
/// normalized holders + lp-lock bonus - risk.
pub fn raw_score(input: &ScoringInput, weights: &ScoreWeights) -> f64 {
    let h = normalize_holders(input.holders, weights.holder_saturation);
    let lp = if input.lp_locked {
        weights.lp_lock_bonus
    } else {
        0.0
    };
    h + lp - input.risk
}

/// Clamp a value to [0.0, 1.0]. NaN pins to 0.0 and ±∞ saturates at the
/// nearest bound, so the output range holds for every representable input.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        tracing::warn!("raw score is NaN, clamping to 0.0");
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// Reason line over the raw inputs, in fixed textual order. Risk keeps six
/// fractional digits.
fn reason_line(input: &ScoringInput) -> String {
    format!(
        "holders:{} lp_locked:{} risk:{:.6}",
        input.holders,
        if input.lp_locked { "yes" } else { "no" },
        input.risk,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
