use colored::{ColoredString, Colorize};

use shelf_client::BookState;
use shelf_types::{Book, BookStatus};

use crate::cli::OutputFormat;

fn status_label(status: BookStatus) -> ColoredString {
    match status {
        BookStatus::InStock => status.as_str().green(),
        BookStatus::OnLoan => status.as_str().yellow(),
        BookStatus::Returned => status.as_str().cyan(),
    }
}

fn book_line(book: &Book) -> String {
    format!(
        "{:>4}  {:<32} {}",
        format!("#{}", book.id).dimmed(),
        book.name,
        status_label(book.status)
    )
}

/// Render the visible list, with a header when a search is active.
pub fn state_text(state: &BookState) -> String {
    let visible = state.visible_books();
    let mut out = String::new();
    if state.is_filtered() {
        out.push_str(&format!(
            "Search {}: {} of {} books\n",
            format!("{:?}", state.keyword).bold(),
            visible.len(),
            state.all_books.len()
        ));
    }
    if visible.is_empty() {
        out.push_str("No books.\n");
    }
    for book in visible {
        out.push_str(&book_line(book));
        out.push('\n');
    }
    out
}

pub fn print_state(state: &BookState, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", state_text(state)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
    }
    Ok(())
}
