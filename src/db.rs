use crate::error::{Result, VocabError};
use rusqlite::Connection;
use std::path::Path;

// --- Device Schema ---
//
// The vocab.db schema is created and owned by the Kindle firmware; this crate
// only reads and deletes rows. Three tables are touched:
//
//   WORDS     (id TEXT PRIMARY KEY, word TEXT, stem TEXT)
//   LOOKUPS   (id TEXT PRIMARY KEY, word_key TEXT, book_key TEXT,
//              usage TEXT, timestamp INTEGER)
//   BOOK_INFO (id TEXT PRIMARY KEY, asin TEXT, title TEXT, lang TEXT,
//              authors TEXT)
//
// LOOKUPS.word_key references WORDS.id and LOOKUPS.book_key references
// BOOK_INFO.id, but the device does not enforce them as foreign keys. Reads
// use INNER JOINs, so orphaned lookup rows simply drop out of results.

// --- Read Statements ---

pub(crate) const SELECT_ALL_LOOKUPS: &str = "
SELECT LOOKUPS.word_key, WORDS.word, WORDS.stem, LOOKUPS.usage,
       LOOKUPS.timestamp, BOOK_INFO.title
FROM LOOKUPS
INNER JOIN WORDS ON WORDS.id = LOOKUPS.word_key
INNER JOIN BOOK_INFO ON BOOK_INFO.id = LOOKUPS.book_key
ORDER BY LOOKUPS.timestamp";

pub(crate) const SELECT_LOOKUPS_FOR_BOOK: &str = "
SELECT LOOKUPS.word_key, WORDS.word, WORDS.stem, LOOKUPS.usage,
       LOOKUPS.timestamp, BOOK_INFO.title
FROM LOOKUPS
INNER JOIN WORDS ON WORDS.id = LOOKUPS.word_key
INNER JOIN BOOK_INFO ON BOOK_INFO.id = LOOKUPS.book_key
WHERE LOOKUPS.book_key = ?1
ORDER BY LOOKUPS.timestamp";

// GROUP BY without an aggregate: SQLite picks an arbitrary surviving row per
// asin. The device writes one BOOK_INFO row per reading session, so rows
// sharing an asin describe the same book; which one survives is unspecified.
pub(crate) const SELECT_ALL_BOOKS: &str =
    "SELECT id, title, lang, authors FROM BOOK_INFO GROUP BY asin";

// --- Delete Statements ---

// Must run while the book's LOOKUPS rows still exist; the subquery is the
// only way to discover which words belong to the book.
pub(crate) const DELETE_WORDS_FOR_BOOK: &str = "
DELETE FROM WORDS
WHERE id IN (SELECT word_key FROM LOOKUPS WHERE LOOKUPS.book_key = ?1)";

pub(crate) const DELETE_LOOKUPS_FOR_BOOK: &str =
    "DELETE FROM LOOKUPS WHERE LOOKUPS.book_key = ?1";

pub(crate) const DELETE_BOOK_BY_ID: &str = "DELETE FROM BOOK_INFO WHERE BOOK_INFO.id = ?1";

pub(crate) const DELETE_LOOKUP_BY_ID: &str = "DELETE FROM LOOKUPS WHERE LOOKUPS.id = ?1";

pub(crate) const DELETE_ALL_WORDS: &str = "DELETE FROM WORDS";

pub(crate) const DELETE_ALL_BOOKS: &str = "DELETE FROM BOOK_INFO";

pub(crate) const DELETE_ALL_LOOKUPS: &str = "DELETE FROM LOOKUPS";

// --- Connection ---

/// Opens the vocabulary database at `path` with the engine's default flags
/// (read/write, created if missing).
///
/// No pragmas are applied: this crate does not own the file, so it must not
/// switch the journal mode, and the manual cascade delete relies on foreign
/// key enforcement staying off (the SQLite default).
pub(crate) fn open_vocab_connection(path: &Path) -> Result<Connection> {
    Connection::open(path).map_err(|source| VocabError::Open {
        path: path.to_path_buf(),
        source,
    })
}
