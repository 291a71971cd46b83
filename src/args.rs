use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "glean-page")]
#[command(about = "Fetch a web page and emit its visible text and same-origin links as JSON")]
#[command(version)]
pub struct Args {
    /// URL of the page to fetch
    pub url: String,

    /// Fetch timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,
}
