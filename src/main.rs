use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use glean_page::{ErrorReport, PageFetch};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments; any arity or flag mistake gets the short
    // usage line on stderr, not clap's full help
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("Usage: glean-page <url>");
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Starting fetch for URL: {}", args.url);

    let fetch = PageFetch::new(&args.url).with_timeout(args.timeout);

    match fetch.run().await {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                report_failure(&err.to_string());
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            // Debug level: stderr must carry nothing but the error JSON
            // under the default log filter
            ::log::debug!("Fetch failed: {}", err);
            report_failure(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Emit the failure JSON on stderr, never on stdout
fn report_failure(message: &str) {
    eprintln!("{}", ErrorReport::new(message).to_json());
}
