pub(crate) mod args;

pub(crate) use args::{Cli, OutputFormat};
