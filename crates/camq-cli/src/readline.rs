//! Readline-based front end.
//!
//! Each line entered is one submission. Used when stdout is not a terminal
//! or when `--no-tui` is given.

use std::io::Write;

use anyhow::Result;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::ExecutableCommand;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use camq_core::{Answerer, QueryPanel, THINKING_LABEL};

const PROMPT: &str = "ask> ";

/// Run the line-oriented loop until EOF.
pub async fn run_readline(answerer: &dyn Answerer, title: &str) -> Result<()> {
    // History stays in memory only
    let config = Config::builder()
        .history_ignore_space(true)
        .history_ignore_dups(true)?
        .build();
    let mut editor: Editor<(), DefaultHistory> = Editor::with_config(config)?;

    print_header(title, answerer.endpoint())?;

    let mut panel = QueryPanel::new();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                panel.on_input_change(line);

                let Some(submission) = panel.on_submit() else {
                    continue;
                };

                print_thinking()?;
                let outcome = answerer.ask(submission.query()).await;
                panel.settle(outcome);

                if let Some(text) = panel.response_view() {
                    let mut stdout = std::io::stdout();
                    writeln!(stdout, "{}", text)?;
                    stdout.flush()?;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(e) => return Err(anyhow::anyhow!("Error reading input: {}", e)),
        }
    }

    Ok(())
}

fn print_header(title: &str, endpoint: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    stderr.execute(SetForegroundColor(Color::Cyan))?;
    write!(stderr, "{}", title)?;
    stderr.execute(SetForegroundColor(Color::DarkGrey))?;
    writeln!(stderr, " ({})", endpoint)?;
    writeln!(stderr, "Type a question and press Enter · Ctrl+D to exit")?;
    stderr.execute(ResetColor)?;
    stderr.flush()
}

fn print_thinking() -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    stderr.execute(SetForegroundColor(Color::DarkGrey))?;
    writeln!(stderr, "{}", THINKING_LABEL)?;
    stderr.execute(ResetColor)?;
    stderr.flush()
}
