//! Command line surface for the zoo record manager.

mod menu;
mod terminal;

use std::path::PathBuf;

use clap::ArgAction;
use menagerie::{Config, Repository};
use menu::Menu;

/// Console record management for a small zoo.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Directory holding the record files and an optional config.toml
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

impl Cli {
    /// Runs the interactive menu loop until the operator exits.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = Config::load_or_default(&self.root);
        let animals = Repository::new(self.root.join(config.animals_file()));
        let habitats = Repository::new(self.root.join(config.habitats_file()));

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Menu::new(stdin.lock(), stdout.lock(), animals, habitats).run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // logs go to stderr so they never interleave with menu output
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
