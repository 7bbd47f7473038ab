//! Source selection
//!
//! Maps the SOURCE argument onto a concrete snapshot source.

use std::time::Duration;

use super::BoxedSource;
use super::file::FileSource;
use super::http::HttpSource;
use super::stdin::StdinSource;

/// Read from standard input when the SOURCE argument is this value
pub(crate) const STDIN_ARG: &str = "-";

fn is_url(arg: &str) -> bool {
    let lower = arg.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Get a source for a file path, URL or `-`
pub(crate) fn source_from_arg(arg: &str, timeout: Duration) -> BoxedSource {
    if arg == STDIN_ARG {
        Box::new(StdinSource::default())
    } else if is_url(arg) {
        Box::new(HttpSource::new(arg, timeout))
    } else {
        Box::new(FileSource::new(arg))
    }
}
