//! CLI domain: parse, route, output, and presentation only.
//! Resolution and script replay live in `config` and `script`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, SummaryFormat};
pub use presentation::{
    format_config_summary, format_config_summary_json, format_config_summary_text,
    format_file_layer, format_logging_issue, FAILURE_MESSAGE, READY_MESSAGE,
};
pub use route::RunContext;
