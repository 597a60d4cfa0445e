//! netroute CLI library.
//!
//! Terminal styling and output formatting shared by the `netroute` binary.

pub mod output;
pub mod terminal;
