use anyhow::Result;
use perf_fixtures::Application;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Settings load before the subscriber exists; run() logs them
    let app = Application::new()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app.settings().logging.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = app.run()?;
    println!("{}", report.confirmation());

    Ok(())
}
