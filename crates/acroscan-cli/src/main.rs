mod check_cmd;
mod cli;
mod logging;
mod report;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(code) = check_cmd::run(&cli) {
        std::process::exit(code);
    }
}
