//! Terminal speed reader: tokenizes a PDF, EPUB or text document into a
//! word stream and plays it back one word at a time at a chosen rate.

pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;
