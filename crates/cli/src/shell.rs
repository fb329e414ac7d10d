//! Interactive shell
//!
//! Reads one command per line from stdin and renders the active view to
//! stdout after each one.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

use tm_core::app::App;
use tm_core::view::{Confirm, DeleteOutcome, SubmitOutcome};

use crate::command::{Command, HELP};

/// Line source shared by the command loop and the confirmation prompt
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
    assume_yes: bool,
}

impl Prompt {
    pub fn stdin(assume_yes: bool) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            assume_yes,
        }
    }

    /// Print `prompt` and read the next line; `None` at end of input
    pub async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        self.lines.next_line().await
    }
}

#[async_trait]
impl Confirm for Prompt {
    async fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            println!("{} s", message);
            return true;
        }

        match self.read_line(&format!("{} [s/N] ", message)).await {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Run commands until `quit` or end of input
pub async fn run(app: &mut App, prompt: &mut Prompt) -> anyhow::Result<()> {
    println!("{}", app.render());

    while let Some(line) = prompt.read_line("> ").await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        debug!("Command: {:?}", command);

        let handled = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Empty => true,
            Command::Go(path) => {
                app.navigate(&path).await;
                true
            }
            Command::Reload => app.reload().await,
            Command::Search(term) => app.search(&term),
            Command::Delete(id) => match app.delete(id, prompt).await {
                Some(DeleteOutcome::Skipped) => {
                    println!("No hay ninguna tarea #{} en la lista", id);
                    true
                }
                Some(_) => true,
                None => false,
            },
            Command::Title(title) => app.set_title(&title),
            Command::Done => app.set_completed(true),
            Command::Undone => app.set_completed(false),
            Command::Save => match app.save().await {
                Some(SubmitOutcome::Saved(task)) => {
                    println!("Tarea guardada (#{})", task.id.unwrap_or_default());
                    true
                }
                Some(_) => true,
                None => false,
            },
        };

        if handled {
            println!("{}", app.render());
        } else {
            println!("Comando no disponible en esta vista");
        }
    }

    Ok(())
}
