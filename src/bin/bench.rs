use rugscore::bench;
use rugscore::config::{self, AppConfig};

fn main() {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    config::init_tracing(config.log_format);

    tracing::debug!(ops = config.bench_ops, "running indexed-access probe");
    let report = bench::indexed_access(config.bench_ops);

    println!("bench acc={}  ns/op={}", report.acc, report.ns_per_op);
}
