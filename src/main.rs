//! Library Catalog - interactive menu
//!
//! Reads menu choices from stdin and renders library results on stdout.
//! Logs go to stderr.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{config::AppConfig, AppError, Library};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", config.logging.level).into());
    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)))
        .init();

    tracing::info!(
        "Starting Library Catalog v{} (loan period: {} days)",
        env!("CARGO_PKG_VERSION"),
        config.loans.duration_days
    );

    let mut library = Library::new(&config.loans)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut library, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

/// Menu loop; returns when the user exits or input runs out
fn run(library: &mut Library, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    loop {
        writeln!(out, "\nLibrary Management System")?;
        writeln!(out, "1. Add Book")?;
        writeln!(out, "2. Add User")?;
        writeln!(out, "3. Search Books")?;
        writeln!(out, "4. Issue Book")?;
        writeln!(out, "5. Return Book")?;
        writeln!(out, "6. Display Overdue Books")?;
        writeln!(out, "7. Display User's Issued Books")?;
        writeln!(out, "8. Exit")?;

        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                let Some(title) = prompt(input, out, "Enter book title: ")? else { return Ok(()) };
                let Some(count) = prompt(input, out, "Enter number of copies: ")? else { return Ok(()) };
                match count.trim().parse::<u32>() {
                    Ok(count) => match library.add_book(&title, count) {
                        Ok(entry) => writeln!(
                            out,
                            "Book added: {} (Count: {}, Total: {})",
                            title, count, entry.total
                        )?,
                        Err(e) => render_error(out, &e)?,
                    },
                    Err(_) => writeln!(out, "Invalid number of copies: {}", count.trim())?,
                }
            }
            "2" => {
                let Some(name) = prompt(input, out, "Enter user name: ")? else { return Ok(()) };
                match library.add_user(&name) {
                    Ok(()) => writeln!(out, "User added: {}", name)?,
                    Err(e) => render_error(out, &e)?,
                }
            }
            "3" => {
                let Some(prefix) = prompt(input, out, "Enter prefix to search for books: ")? else {
                    return Ok(());
                };
                let results = library.search_books(&prefix);
                if results.is_empty() {
                    writeln!(out, "No books found with prefix \"{}\".", prefix)?;
                } else {
                    let listing: Vec<String> = results
                        .iter()
                        .map(|b| format!("{} (Available: {})", b.title, b.available))
                        .collect();
                    writeln!(out, "Books found: {}", listing.join(", "))?;
                }
            }
            "4" => {
                let Some(name) = prompt(input, out, "Enter user name: ")? else { return Ok(()) };
                let Some(title) = prompt(input, out, "Enter book title: ")? else { return Ok(()) };
                match library.issue_book(&name, &title) {
                    Ok(loan) => writeln!(
                        out,
                        "Book issued to {}: {} (due {})",
                        loan.user,
                        loan.title,
                        loan.due_at.format("%Y-%m-%d %H:%M")
                    )?,
                    Err(e) => render_error(out, &e)?,
                }
            }
            "5" => {
                let Some(name) = prompt(input, out, "Enter user name: ")? else { return Ok(()) };
                let Some(title) = prompt(input, out, "Enter book title: ")? else { return Ok(()) };
                match library.return_book(&name, &title) {
                    Ok(()) => writeln!(out, "Book returned: {}", title)?,
                    Err(e) => render_error(out, &e)?,
                }
            }
            "6" => {
                let overdue = library.list_overdue_now();
                if overdue.is_empty() {
                    writeln!(out, "No overdue books.")?;
                } else {
                    writeln!(out, "Overdue Books:")?;
                    for loan in overdue {
                        writeln!(out, "{} (User: {})", loan.title, loan.user)?;
                    }
                }
            }
            "7" => {
                let Some(name) = prompt(input, out, "Enter user name: ")? else { return Ok(()) };
                match library.list_user_books(&name) {
                    Ok(titles) => {
                        let titles: Vec<&str> = titles.iter().map(|t| t.as_str()).collect();
                        writeln!(out, "Books issued to {}: {}", name, titles.join(", "))?;
                    }
                    Err(e) => render_error(out, &e)?,
                }
            }
            "8" => {
                writeln!(out, "Exiting Library Management System. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

/// Print a prompt and read one line without its line ending; `None` on EOF
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn render_error(out: &mut impl Write, e: &AppError) -> io::Result<()> {
    writeln!(out, "[{}] {}", e.code() as u32, e)
}
