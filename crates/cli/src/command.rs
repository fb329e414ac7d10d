//! Shell command parsing

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a path
    Go(String),
    Search(String),
    Delete(u64),
    Title(String),
    Done,
    Undone,
    Save,
    Reload,
    Help,
    Quit,
    /// Blank line; re-render
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Invalid task id: {0}")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        if line.starts_with('/') {
            return Ok(Self::Go(line.to_string()));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "go" | "ir" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "go",
                        what: "a path",
                    });
                }
                Ok(Self::Go(rest.to_string()))
            }
            // An empty term clears the filter
            "search" | "buscar" => Ok(Self::Search(rest.to_string())),
            "delete" | "eliminar" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "delete",
                        what: "a task id",
                    });
                }
                rest.parse()
                    .map(Self::Delete)
                    .map_err(|_| ParseError::InvalidId(rest.to_string()))
            }
            "title" | "titulo" => Ok(Self::Title(rest.to_string())),
            "done" => Ok(Self::Done),
            "undone" => Ok(Self::Undone),
            "save" | "guardar" => Ok(Self::Save),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "salir" => Ok(Self::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  <path> | go <path>   navigate (/, /tasks, /tasks/new, /tasks/edit/<id>)
  search <term>        filter the task list by title (empty clears)
  delete <id>          delete a listed task
  title <text>         set the title in the task form
  done | undone        set the completion flag in the task form
  save                 submit the task form
  reload               fetch the current view again
  help                 show this help
  quit                 leave
";
