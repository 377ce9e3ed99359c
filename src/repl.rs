// 💬 Interactive Loop
// Prompt → validate → convert → print, until a blank line or end of input

use crate::config::Config;
use crate::grouping::render_line;
use crate::input::{parse_line, LineInput};
use crate::words::to_english;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub converted: usize,
    pub rejected: usize,
}

/// Run the prompt loop over any reader/writer pair
pub fn run_session<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &Config,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    loop {
        write!(writer, "{}", config.prompt)?;
        writer.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read input line")?;

        // End of input behaves like a blank line
        let input = if read == 0 {
            LineInput::Quit
        } else {
            parse_line(&line)
        };

        match input {
            LineInput::Quit => {
                writeln!(writer, "{}", config.farewell)?;
                break;
            }
            LineInput::Rejected(e) => {
                summary.rejected += 1;
                writeln!(writer, "{}\n", e)?;
            }
            LineInput::Number(number) => {
                summary.converted += 1;
                writeln!(writer, "{}\n", render_line(number, &to_english(number)))?;
            }
        }
    }

    info!(
        converted = summary.converted,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(summary)
}
