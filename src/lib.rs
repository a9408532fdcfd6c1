// Declare modules
pub mod db;
pub mod error;
pub mod models;

// Re-export key types for easier use
pub use error::{Result, VocabError};
pub use models::{Book, LookupEntry};

use log::{debug, info};
use rusqlite::{Connection, Row, params};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// The main interface to a Kindle vocabulary database (`vocab.db`).
///
/// The store is constructed with the path to the database file and must be
/// opened (and awaited) before any other operation:
///
/// ```no_run
/// # async fn demo() -> kindle_vocab::Result<()> {
/// use kindle_vocab::VocabStore;
///
/// let mut store = VocabStore::new("/Volumes/Kindle/system/vocabulary/vocab.db");
/// store.open().await?;
/// for entry in store.list_lookups().await? {
///     println!("{}: {}", entry.word, entry.usage);
/// }
/// # Ok(())
/// # }
/// ```
///
/// Every operation is an independent round trip against the connection; the
/// store never batches, caches, or wraps statements in transactions. The
/// schema is owned by the device firmware and is never created or migrated
/// here.
#[derive(Clone)] // Clone is cheap due to Arc<Mutex<...>>
pub struct VocabStore {
    path: PathBuf,
    // None until open() succeeds; every accessor checks this before any I/O.
    conn: Option<Arc<Mutex<Connection>>>,
}

impl VocabStore {
    /// Creates a store for the database file at `path`.
    ///
    /// `/Volumes/Kindle/system/vocabulary/vocab.db` is the usual mount
    /// location on macOS. No I/O happens until [`open`](Self::open).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VocabStore {
            path: path.into(),
            conn: None,
        }
    }

    /// Opens the connection to the database file.
    ///
    /// Must be called and awaited before using the rest of the API. On
    /// failure the store stays unopened and `open` may be retried.
    pub async fn open(&mut self) -> Result<()> {
        info!("Opening vocabulary database at {:?}", self.path);
        let conn = db::open_vocab_connection(&self.path)?;
        self.conn = Some(Arc::new(Mutex::new(conn)));
        Ok(())
    }

    /// Returns true once [`open`](Self::open) has succeeded.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Path to the database file this store was constructed with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        let conn = self.conn.as_ref().ok_or(VocabError::NotInitialized)?;
        conn.lock()
            .map_err(|_| VocabError::Internal("connection mutex poisoned".to_string()))
    }

    // --- Read Operations ---

    /// Returns all lookups, joined with their word and book rows, ordered
    /// ascending by timestamp.
    ///
    /// Lookups whose word or book row has been deleted are absent from the
    /// result (INNER JOIN semantics).
    pub async fn list_lookups(&self) -> Result<Vec<LookupEntry>> {
        let conn = self.connection()?;
        debug!("list_lookups");
        let mut stmt = conn.prepare(db::SELECT_ALL_LOOKUPS)?;
        let entry_iter = stmt.query_map([], row_to_lookup_entry)?;
        entry_iter
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(VocabError::from)
    }

    /// Returns all lookups for a specific book, ordered ascending by
    /// timestamp.
    ///
    /// Returns an empty vec if the book is unknown or has no lookups. Book
    /// ids can be found as the `id` field of [`Book`].
    pub async fn list_lookups_for_book(&self, book_id: &str) -> Result<Vec<LookupEntry>> {
        let conn = self.connection()?;
        debug!("list_lookups_for_book: book_id='{}'", book_id);
        let mut stmt = conn.prepare(db::SELECT_LOOKUPS_FOR_BOOK)?;
        let entry_iter = stmt.query_map(params![book_id], row_to_lookup_entry)?;
        entry_iter
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(VocabError::from)
    }

    /// Returns all books, one row per distinct asin.
    ///
    /// When several BOOK_INFO rows share an asin, which row survives the
    /// collapse is chosen by SQLite and is unspecified.
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let conn = self.connection()?;
        debug!("list_books");
        let mut stmt = conn.prepare(db::SELECT_ALL_BOOKS)?;
        let book_iter = stmt.query_map([], row_to_book)?;
        book_iter
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(VocabError::from)
    }

    // --- Delete Operations ---

    /// Deletes a book together with its lookups and the words those lookups
    /// reference.
    ///
    /// Three sequential statements with no enclosing transaction: words
    /// first (found via the book's lookup rows), then the lookups, then the
    /// book row. The word deletion must come first; once the lookups are
    /// gone there is nothing left linking words to this book. A failure
    /// mid-sequence leaves the earlier steps committed; a caller needing
    /// all-or-nothing semantics must wrap this externally.
    pub async fn delete_book_cascade(&self, book_id: &str) -> Result<()> {
        let conn = self.connection()?;
        info!("delete_book_cascade: book_id='{}'", book_id);

        let words = conn.execute(db::DELETE_WORDS_FOR_BOOK, params![book_id])?;
        let lookups = conn.execute(db::DELETE_LOOKUPS_FOR_BOOK, params![book_id])?;
        let books = conn.execute(db::DELETE_BOOK_BY_ID, params![book_id])?;

        debug!(
            "delete_book_cascade removed {} words, {} lookups, {} book rows",
            words, lookups, books
        );
        Ok(())
    }

    /// Deletes every word row.
    pub async fn delete_all_words(&self) -> Result<()> {
        let conn = self.connection()?;
        let deleted = conn.execute(db::DELETE_ALL_WORDS, [])?;
        debug!("delete_all_words removed {} rows", deleted);
        Ok(())
    }

    /// Deletes every book row.
    pub async fn delete_all_books(&self) -> Result<()> {
        let conn = self.connection()?;
        let deleted = conn.execute(db::DELETE_ALL_BOOKS, [])?;
        debug!("delete_all_books removed {} rows", deleted);
        Ok(())
    }

    /// Deletes the single book row with the given id.
    ///
    /// A no-op if the id is unknown. Does not touch the book's lookups or
    /// words; use [`delete_book_cascade`](Self::delete_book_cascade) for
    /// that.
    pub async fn delete_book_by_id(&self, book_id: &str) -> Result<()> {
        let conn = self.connection()?;
        let deleted = conn.execute(db::DELETE_BOOK_BY_ID, params![book_id])?;
        debug!("delete_book_by_id '{}' removed {} rows", book_id, deleted);
        Ok(())
    }

    /// Deletes every lookup row.
    pub async fn delete_all_lookups(&self) -> Result<()> {
        let conn = self.connection()?;
        let deleted = conn.execute(db::DELETE_ALL_LOOKUPS, [])?;
        debug!("delete_all_lookups removed {} rows", deleted);
        Ok(())
    }

    /// Deletes the single lookup row with the given id.
    ///
    /// A no-op if the id is unknown.
    pub async fn delete_lookup_by_id(&self, lookup_id: &str) -> Result<()> {
        let conn = self.connection()?;
        let deleted = conn.execute(db::DELETE_LOOKUP_BY_ID, params![lookup_id])?;
        debug!("delete_lookup_by_id '{}' removed {} rows", lookup_id, deleted);
        Ok(())
    }

    /// Deletes every lookup row referencing the given book.
    ///
    /// A no-op if the book has no lookups.
    pub async fn delete_lookups_for_book(&self, book_id: &str) -> Result<()> {
        let conn = self.connection()?;
        let deleted = conn.execute(db::DELETE_LOOKUPS_FOR_BOOK, params![book_id])?;
        debug!(
            "delete_lookups_for_book '{}' removed {} rows",
            book_id, deleted
        );
        Ok(())
    }
}

// --- Mapping Helpers (Row -> Struct) ---

fn row_to_lookup_entry(row: &Row) -> std::result::Result<LookupEntry, rusqlite::Error> {
    Ok(LookupEntry {
        word_key: row.get(0)?,
        word: row.get(1)?,
        stem: row.get(2)?,
        usage: row.get(3)?,
        timestamp: row.get(4)?,
        book_title: row.get(5)?,
    })
}

fn row_to_book(row: &Row) -> std::result::Result<Book, rusqlite::Error> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        lang: row.get(2)?,
        authors: row.get(3)?,
    })
}
