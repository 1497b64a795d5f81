pub mod search;

pub use search::{search_word, search_word_path};
