//! check_truenas — monitoring plugin for TrueNAS/FreeNAS servers.
//!
//! Queries the v2.0 API, classifies one resource category, and reports the
//! result the way monitoring frameworks expect: one line on stdout starting
//! with the severity word, plus a matching exit code (0 OK, 1 WARNING,
//! 2 CRITICAL, 3 UNKNOWN).

use std::time::Duration;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use check_truenas::checks;
use check_truenas::config::{ProbeConfig, DEFAULT_POOL_NAME, DEFAULT_TIMEOUT_SECS};
use check_truenas::transport::ApiClient;
use check_truenas::verdict::Verdict;

#[derive(Parser)]
#[command(
    name = "check_truenas",
    about = "Checks a TrueNAS/FreeNAS server using the 2.0 API",
    version
)]
struct Args {
    /// Hostname or IP address of the TrueNAS server
    #[arg(short = 'H', long, env = "CHECK_TRUENAS_HOST")]
    hostname: String,

    /// Username; only root works. If not specified, the password is used as an API key
    #[arg(short, long)]
    user: Option<String>,

    /// Password or API key
    #[arg(short, long, env = "CHECK_TRUENAS_SECRET")]
    passwd: String,

    /// Type of check: alerts, zpool, repl, or update
    #[arg(short = 't', long = "type")]
    check_type: String,

    /// For check type zpool, the name of the zpool to check (default: all zpools)
    #[arg(long, default_value = DEFAULT_POOL_NAME)]
    zpool_name: String,

    /// Disable TLS (use HTTP); default is to use HTTPS
    #[arg(long)]
    no_ssl: bool,

    /// Do not verify the server TLS certificate; default is to verify it
    #[arg(long)]
    no_verify_cert: bool,

    /// Ignore alerts that have already been dismissed in the TrueNAS UI;
    /// default is to treat them as relevant
    #[arg(long)]
    ignore_dismissed_alerts: bool,

    /// Request timeout in seconds for the single API call
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Display debugging information on stderr; run this way and record the
    /// result when asking for help
    #[arg(short, long)]
    debug: bool,
}

/// Route tracing output to stderr so the plugin line on stdout stays clean.
///
/// Verbosity is an explicit value from the CLI, not ambient process state.
fn init_tracing(debug: bool) {
    let filter = if debug { "check_truenas=debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Bare invocation prints usage and exits 1 — a usage error, deliberately
    // distinct from the runtime UNKNOWN exit code 3.
    if std::env::args().len() <= 1 {
        eprintln!("{}", Args::command().render_help());
        std::process::exit(1);
    }

    let args = Args::parse();
    init_tracing(args.debug);

    let config = ProbeConfig {
        hostname: args.hostname,
        user: args.user,
        secret: args.passwd,
        use_tls: !args.no_ssl,
        verify_cert: !args.no_verify_cert,
        ignore_dismissed: args.ignore_dismissed_alerts,
        pool_name: args.zpool_name,
        timeout: Duration::from_secs(args.timeout_secs),
    };
    config.log_startup();

    let verdict = match ApiClient::new(&config) {
        Ok(client) => checks::run(&client, &config, &args.check_type).await,
        Err(e) => Verdict::unknown(format!("request failed - {e}")),
    };

    println!("{}", verdict.plugin_line());
    std::process::exit(verdict.severity.exit_code());
}
