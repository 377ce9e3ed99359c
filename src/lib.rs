// Number Words - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod words;
pub mod grouping;
pub mod input;
pub mod config;
pub mod repl;
pub mod batch;

// Only compile the API when the server feature is enabled
#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use words::{
    to_english, digit_word, double_digit_words, segment_words,
    Digit, DoubleDigit, Segment, WordSequence, WordsError,
};
pub use grouping::{group_thousands, render_line};
pub use input::{parse_line, parse_number, InputError, LineInput};
pub use config::Config;
pub use repl::{run_session, SessionSummary};
pub use batch::{convert_csv, convert_json, convert_file, BatchReport, BatchRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Env var that overrides the tracing filter
pub const LOG_ENV: &str = "NUMBER_WORDS_LOG";

/// Set up tracing on stderr. NUMBER_WORDS_LOG wins over `default_filter`.
/// Safe to call more than once.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
