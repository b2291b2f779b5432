//! Domain logic for the NPO to XMLTV converter.
//!
//! Holds the channel catalog, the upstream program record shape, the
//! filter/dedup stage, XMLTV time formatting and the document writer.
//! Nothing in here performs I/O beyond reading the catalog file.

pub mod channel;
pub mod error;
pub mod program;
pub mod time;
pub mod xmltv;
