//! lexis CLI - text chunking and lexical FAQ matching
//!
//! # Examples
//!
//! ```bash
//! # Normalize a text
//! lexis normalize "Hello, World!"
//!
//! # Chunk a document into 50-word windows
//! lexis chunk notes.txt --strategy words --chunk-size 50 --overlap 10
//!
//! # Answer a question from a FAQ file
//! lexis ask "How can I sign up?" --corpus faq.txt
//!
//! # Show configuration
//! lexis show-config
//! ```

use clap::Parser;
use lexis::cli::output::print_error;
use lexis::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let json = std::env::var("LEXIS_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexis=warn".into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
