// Lightweight text analysis used by the extractors
pub mod entities;
pub mod lexicon;
pub mod sentences;
pub mod tokens;

pub use entities::geopolitical_entities;
pub use lexicon::Lexicon;
pub use sentences::{split_sentences, Sentence};
pub use tokens::{is_near_duplicate, like_num, numeric_tokens};
