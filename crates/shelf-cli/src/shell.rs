use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use shelf_client::actions::{BOOK_NAME_FIELD, ID_FIELD, KEYWORD_FIELD, STATUS_FIELD};
use shelf_client::{BookApi, ClientError, FormInput, Session};

use crate::cli::OutputFormat;
use crate::render::print_state;

const HELP: &str = "\
commands:
  add <name>             add a book
  search <keyword>       show books whose name contains <keyword>
  update <id> <status>   set status: in-stock, on-loan or returned
  list                   show the current view
  help                   show this text
  quit                   leave the shell";

/// One line of shell input.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellInput {
    Empty,
    List,
    Help,
    Quit,
    Dispatch { action: String, form: FormInput },
}

/// Map a line onto an action name and the form fields its handler reads.
///
/// Unknown words are passed through as actions so the handler layer
/// reports them.
pub fn parse_line(line: &str) -> ShellInput {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let form = match word {
        "" => return ShellInput::Empty,
        "list" | "ls" => return ShellInput::List,
        "help" | "?" => return ShellInput::Help,
        "quit" | "exit" => return ShellInput::Quit,
        "add" => FormInput::new().with(BOOK_NAME_FIELD, rest),
        "search" => FormInput::new().with(KEYWORD_FIELD, rest),
        "update" => {
            let mut parts = rest.split_whitespace();
            let mut form = FormInput::new();
            if let Some(id) = parts.next() {
                form.insert(ID_FIELD, id);
            }
            if let Some(status) = parts.next() {
                form.insert(STATUS_FIELD, status);
            }
            form
        }
        _ => FormInput::new(),
    };
    ShellInput::Dispatch {
        action: word.to_string(),
        form,
    }
}

fn error_line(err: &ClientError) -> String {
    format!("{} {err}", "error:".red().bold())
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run<A: BookApi>(session: Session<A>, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", HELP.dimmed());
    print_state(&session.state(), format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "shelf>".bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        match parse_line(&line) {
            ShellInput::Empty => {}
            ShellInput::List => print_state(&session.state(), format)?,
            ShellInput::Help => println!("{HELP}"),
            ShellInput::Quit => break,
            ShellInput::Dispatch { action, form } => {
                match session.dispatch(&action, &form).await {
                    Ok(state) => print_state(&state, format)?,
                    Err(err) => eprintln!("{}", error_line(&err)),
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_control_words() {
        assert_eq!(parse_line("   "), ShellInput::Empty);
        assert_eq!(parse_line("list"), ShellInput::List);
        assert_eq!(parse_line("help"), ShellInput::Help);
        assert_eq!(parse_line("quit"), ShellInput::Quit);
    }

    #[test]
    fn parse_add_keeps_spaces_in_name() {
        assert_eq!(
            parse_line("add  Go   intro "),
            ShellInput::Dispatch {
                action: "add".into(),
                form: FormInput::new().with(BOOK_NAME_FIELD, "Go   intro"),
            }
        );
    }

    #[test]
    fn parse_add_without_name_gives_blank_field() {
        let ShellInput::Dispatch { form, .. } = parse_line("add") else {
            panic!("expected dispatch");
        };
        assert!(form.required(BOOK_NAME_FIELD).is_err());
    }

    #[test]
    fn parse_update_fields() {
        let ShellInput::Dispatch { action, form } = parse_line("update 3 returned") else {
            panic!("expected dispatch");
        };
        assert_eq!(action, "update");
        assert_eq!(form.get(ID_FIELD), Some("3"));
        assert_eq!(form.get(STATUS_FIELD), Some("returned"));
    }

    #[test]
    fn error_line_reports_pending_dispatch() {
        colored::control::set_override(false);
        assert_eq!(
            error_line(&ClientError::Pending),
            "error: another action is still pending"
        );
        assert_eq!(
            error_line(&ClientError::NotFound(9)),
            "error: book not found: 9"
        );
    }

    #[test]
    fn unknown_word_passes_through() {
        assert_eq!(
            parse_line("delete 1"),
            ShellInput::Dispatch {
                action: "delete".into(),
                form: FormInput::new(),
            }
        );
    }
}
