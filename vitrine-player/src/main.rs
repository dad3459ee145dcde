use vitrine_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("vitrine_player", LevelFilter::Debug)
        .filter_module("vitrine_core", LevelFilter::Debug)
        .filter_module("vitrine_config", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment()?;

    app::application(config).run()?;
    Ok(())
}
