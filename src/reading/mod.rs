pub mod token;
pub mod tokenizer;

pub use token::{WordSequence, MAX_WORDS};
pub use tokenizer::{tokenize_pages, tokenize_text};
