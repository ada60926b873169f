use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::TrustScore;

// ---------------------------------------------------------------------------
// ScoringInput
// ---------------------------------------------------------------------------

/// Raw scan inputs as read off the command line. Every field has a neutral
/// default so an empty invocation still produces a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringInput {
    /// Distinct holder count reported for the token.
    pub holders: i64,
    /// Whether the liquidity pool is locked.
    pub lp_locked: bool,
    /// External risk estimate, unconstrained as provided.
    pub risk: f64,
}

impl fmt::Display for ScoringInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "holders={} lp_locked={} risk={}",
            self.holders, self.lp_locked, self.risk,
        )
    }
}

// ---------------------------------------------------------------------------
// ScanVerdict — single-line stdout payload
// ---------------------------------------------------------------------------

/// Wire shape of the CLI output. Declaration order is the serialized order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanVerdict {
    pub ok: bool,
    pub score: f64,
    pub reason: String,
}

impl From<TrustScore> for ScanVerdict {
    fn from(ts: TrustScore) -> Self {
        Self {
            ok: true,
            score: ts.score,
            reason: ts.reason,
        }
    }
}
