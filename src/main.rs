mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod source;

use clap::Parser;
use log::LevelFilter;

use app::{RenderOptions, run_once, run_watch};
use cli::Cli;
use config::Config;
use error::AppError;
use source::source_from_arg;

fn init_logging(debug: bool) {
    let mut builder = colog::default_builder();
    builder.filter_level(LevelFilter::Debug);
    builder.init();
    set_log_level(debug);
}

fn set_log_level(debug: bool) {
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let interval = cli.interval()?;
    let timeout = cli.timeout()?;
    let source = source_from_arg(cli.source_arg(), timeout);
    let options = RenderOptions {
        format: cli.output_format(),
        use_color: cli.use_color(),
    };

    log::debug!("Reading session data from {}", source.display_name());

    if cli.watch {
        run_watch(source.as_ref(), options, interval, cli.max_cycles)
    } else {
        run_once(source.as_ref(), options)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let cli = cli.with_config(&Config::load());
    set_log_level(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
