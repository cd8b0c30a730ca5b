//! Keyword search over the documentation catalog.
//!
//! Matching is literal, case-insensitive containment of the whole query. Ranking uses
//! only the static path priority; the fragment shown per result is the window with
//! the most query words in it.

pub(crate) mod engine;
pub(crate) mod fragment;
pub(crate) mod priority;

pub use engine::{MAX_RESULTS, SearchHit, SearchOutcome, SmartSearch, search, smart_search};
pub use fragment::{DEFAULT_FRAGMENT_LENGTH, ELLIPSIS, extract_fragment};
pub use priority::path_priority;
