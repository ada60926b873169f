pub mod scorer;

pub use scorer::{clamp_unit, normalize_holders, raw_score, score_token, ScoreWeights, TrustScore};
