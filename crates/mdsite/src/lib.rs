//! mdsite: render markdown documents into HTML fragments with a table of contents.
//!
//! The binary wraps the `mdsite-document` pipeline with configuration discovery from
//! `mdsite-config` and terminal output from `mdsite-highlight`.

#![warn(missing_docs)]
