//! `tws-rs` converts Tile World solution files (`.tws`) to and from a
//! JSON-based move-notation document.
//!
//! The heavy lifting lives in the [`tws_types`] crate; this crate re-exports
//! it and provides the command-line tools `tws2json`, `json2tws`, and
//! `tws2txt`.

pub use tws_types::*;
