use rugscore::cli::{parse_args, FlagError};
use rugscore::models::ScanVerdict;
use rugscore::scoring::{score_token, ScoreWeights};

/// Run the full CLI pipeline (tokenize → score → serialize) and return the
/// stdout line the binary would print.
fn scan_line(args: &[&str]) -> String {
    let (input, _) = parse_args(args.iter().map(|s| s.to_string()));
    let verdict = ScanVerdict::from(score_token(&input, &ScoreWeights::default()));
    serde_json::to_string(&verdict).expect("verdict should serialize")
}

#[test]
fn test_worked_example_wire_line() {
    let line = scan_line(&["--holders", "500", "--lp_locked", "true", "--risk", "0.1"]);
    assert_eq!(
        line,
        r#"{"ok":true,"score":0.6,"reason":"holders:500 lp_locked:yes risk:0.100000"}"#
    );
}

#[test]
fn test_smoke_invocation() {
    let line = scan_line(&["--holders", "750", "--lp_locked", "yes", "--risk", "0.12"]);
    assert_eq!(
        line,
        r#"{"ok":true,"score":0.83,"reason":"holders:750 lp_locked:yes risk:0.120000"}"#
    );
}

#[test]
fn test_empty_invocation_scores_zero() {
    let line = scan_line(&[]);
    assert_eq!(
        line,
        r#"{"ok":true,"score":0.0,"reason":"holders:0 lp_locked:no risk:0.000000"}"#
    );
}

#[test]
fn test_excess_risk_clamps_to_zero_on_the_wire() {
    let line = scan_line(&["--holders", "2000", "--risk", "2.0"]);
    let verdict: ScanVerdict = serde_json::from_str(&line).expect("line should parse back");
    assert!(verdict.ok);
    assert_eq!(verdict.score, 0.0);
    assert_eq!(verdict.reason, "holders:2000 lp_locked:no risk:2.000000");
}

#[test]
fn test_malformed_values_score_with_defaults() {
    let (input, rejected) =
        parse_args(["--holders", "many", "--risk", "0.4"].iter().map(|s| s.to_string()));
    assert_eq!(
        rejected,
        vec![FlagError::InvalidInt {
            flag: "--holders",
            value: "many".into(),
        }]
    );

    // The scan still completes on the surviving fields.
    let verdict = ScanVerdict::from(score_token(&input, &ScoreWeights::default()));
    assert!(verdict.ok);
    assert_eq!(verdict.score, 0.0); // 0.0 + 0.0 - 0.4, clamped
    assert_eq!(verdict.reason, "holders:0 lp_locked:no risk:0.400000");
}

#[test]
fn test_score_never_leaves_unit_interval_end_to_end() {
    for args in [
        &["--holders", "-100", "--risk", "-50"][..],
        &["--holders", "9223372036854775807", "--lp_locked", "y"][..],
        &["--risk", "NaN"][..],
        &["--risk", "-inf"][..],
    ] {
        let (input, _) = parse_args(args.iter().map(|s| s.to_string()));
        let verdict = ScanVerdict::from(score_token(&input, &ScoreWeights::default()));
        assert!(
            (0.0..=1.0).contains(&verdict.score),
            "score {} out of range for {args:?}",
            verdict.score
        );
    }
}
