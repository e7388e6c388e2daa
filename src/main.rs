use clap::Parser;
use pawmatch::cli::Cli;
use pawmatch::config::ConfigStore;
use pawmatch::logging::{default_log_path, init_tracing};
use pawmatch::ui::runtime;

fn main() {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if !init_tracing(&log_path) {
        eprintln!("Warning: logging disabled, cannot open {}", log_path.display());
    }

    let overrides = cli.clone();
    let config = cli.load_config().and_then(|(config, path)| {
        cli.apply(config).map(|config| {
            ConfigStore::new(config, path).with_overrides(move |config| overrides.apply(config))
        })
    });
    let store = match config {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = runtime::run(store) {
        tracing::error!(error = %err, "Dashboard exited with error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
