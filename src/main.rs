mod app;
mod cli;
mod config;
mod consts;
mod cookie;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = if cli.debug {
        Config::load_verbose()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
