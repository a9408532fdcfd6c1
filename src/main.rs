//! Command-line interface for the kindle_vocab library.
//!
//! A thin collaborator over [`VocabStore`]: every subcommand opens the store,
//! performs one library call, and prints the result. All access-layer
//! semantics live in the library.

use clap::{Parser, Subcommand};
use colored::*;
use kindle_vocab::{VocabStore, error::Result};
use log::{LevelFilter, error, info};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Kindle vocabulary database CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the vocab.db file
    /// (e.g. /Volumes/Kindle/system/vocabulary/vocab.db on macOS)
    #[arg(long)]
    db_path: PathBuf,

    /// Set verbosity level (use -v, -vv, or -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List lookups, optionally restricted to one book
    Lookups {
        /// Only show lookups for the book with this id
        #[arg(long)]
        book: Option<String>,
    },
    /// List all books with recorded lookups
    Books,
    /// Delete a book together with its lookups and words
    DeleteBook {
        /// Id of the book to delete
        id: String,
    },
    /// Delete a single lookup
    DeleteLookup {
        /// Id of the lookup to delete
        id: String,
    },
}

/// Sets up logging based on verbosity level.
fn setup_logging(verbose: u8) {
    let log_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter(None, log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut store = VocabStore::new(&cli.db_path);
    if let Err(e) = store.open().await {
        error!("Failed to open vocabulary database: {}", e);
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
    info!("Opened vocabulary database at {:?}", cli.db_path);

    let result = match cli.command {
        Commands::Lookups { book } => handle_lookups(&store, book.as_deref()).await,
        Commands::Books => handle_books(&store).await,
        Commands::DeleteBook { id } => handle_delete_book(&store, &id).await,
        Commands::DeleteLookup { id } => handle_delete_lookup(&store, &id).await,
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn handle_lookups(store: &VocabStore, book_id: Option<&str>) -> Result<()> {
    let entries = match book_id {
        Some(id) => store.list_lookups_for_book(id).await?,
        None => store.list_lookups().await?,
    };

    if entries.is_empty() {
        println!("No lookups found.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{} ({}) ~ {}",
            entry.word.bold().cyan(),
            entry.stem.italic(),
            entry.book_title.dimmed()
        );
        println!("  {}", entry.usage.trim());
    }
    Ok(())
}

async fn handle_books(store: &VocabStore) -> Result<()> {
    let books = store.list_books().await?;

    if books.is_empty() {
        println!("No books found.");
        return Ok(());
    }

    for book in books {
        println!(
            "{} {} [{}] ~ {}",
            book.id.dimmed(),
            book.title.bold().cyan(),
            book.lang,
            book.authors.italic()
        );
    }
    Ok(())
}

async fn handle_delete_book(store: &VocabStore, book_id: &str) -> Result<()> {
    store.delete_book_cascade(book_id).await?;
    println!(
        "{}",
        format!("Deleted book '{}' with its lookups and words.", book_id).green()
    );
    Ok(())
}

async fn handle_delete_lookup(store: &VocabStore, lookup_id: &str) -> Result<()> {
    store.delete_lookup_by_id(lookup_id).await?;
    println!("{}", format!("Deleted lookup '{}'.", lookup_id).green());
    Ok(())
}
