//! Configuration sources layered on top of defaults and command-line overrides.

pub mod ini_file;
