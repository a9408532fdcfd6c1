use serde::{Deserialize, Serialize};

// --- Result Records ---
//
// The device schema returns untyped rows; every query maps its rows into one
// of these records at the boundary.

/// A book the device has indexed, as listed in the BOOK_INFO table.
///
/// Multiple BOOK_INFO rows may share an `asin`; [`crate::VocabStore::list_books`]
/// collapses those to one row per asin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Language code, e.g. "en".
    pub lang: String,
    pub authors: String,
}

/// One recorded lookup event, joined with its word and book rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Key of the looked-up word in the WORDS table.
    pub word_key: String,
    /// Word in its original inflected form in the sentence.
    pub word: String,
    /// Stem (normalized root form) of the word.
    pub stem: String,
    /// Sentence in the book where the word was found.
    pub usage: String,
    /// Event time as recorded by the device (epoch milliseconds).
    pub timestamp: i64,
    /// Title of the book the lookup happened in.
    pub book_title: String,
}
