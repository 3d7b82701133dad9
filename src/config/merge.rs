//! Merge rules for the emulator configuration.

pub mod merge_policy;
