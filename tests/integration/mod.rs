//! Integration tests for the shemu front end

mod config_resolution;
mod startup_script;
