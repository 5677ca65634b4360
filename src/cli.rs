use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "compose-emit")]
#[command(version = crate::VERSION)]
#[command(about = "Write a production-ready docker-compose.yml to the current directory")]
#[command(long_about = "Writes a fixed Docker Compose stack (Express app, MongoDB, Mongo Express, Redis, RedisInsight) to ./docker-compose.yml, overwriting any existing file, and prints a summary of what it contains.")]
pub struct Cli {
    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        env_logger::Builder::from_default_env()
            .filter_level(self.log_level())
            .init();
    }
}
