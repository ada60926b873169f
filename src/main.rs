use std::env;
use std::io::Write;

use rugscore::cli;
use rugscore::config::{self, AppConfig};
use rugscore::models::ScanVerdict;
use rugscore::scoring::{score_token, ScoreWeights};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    config::init_tracing(config.log_format);

    let (input, rejected) = cli::parse_args(env::args().skip(1));
    for err in &rejected {
        tracing::warn!(error = %err, "flag value rejected");
    }
    tracing::debug!(%input, "scoring");

    let verdict = ScanVerdict::from(score_token(&input, &ScoreWeights::default()));

    let line = serde_json::to_string(&verdict)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;

    Ok(())
}
