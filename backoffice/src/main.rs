use backoffice::{Backoffice, Config, console, init_logger};

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration and logging
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref())?;
    tracing::info!(environment = %config.environment, "Back office starting");

    // 3. State, then the console until the user quits
    let state = Backoffice::new(&config);
    console::run(&config, state)
}
