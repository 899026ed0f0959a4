//! `nav-search`: place-name lookup by prefix or exact name.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`normalize`] | `clean_name`, the one normalisation used everywhere      |
//! | [`trie`]      | `PrefixIndexBuilder`, `PrefixIndex`, `PlaceMatch`        |
//!
//! Misses are not errors: every query returns an empty `Vec` when nothing
//! matches, so this crate has no error type.

pub mod normalize;
pub mod trie;


pub use normalize::clean_name;
pub use trie::{PlaceMatch, PrefixIndex, PrefixIndexBuilder};
