use clap::Parser;
use compose_emit::{cli::Cli, config, emitter};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> compose_emit::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let config = config::load_config();

    let stdout = std::io::stdout();
    emitter::run(&config, &mut stdout.lock())
}
