use scanstitch::driver::EXIT_FAILURE;
use scanstitch::core::ScanConfig;
use scanstitch::{Driver, PreviewSink};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scanstitch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = scanstitch::init_thread_pool(None) {
        tracing::warn!("Falling back to the default thread pool: {}", e);
    }

    let config = match ScanConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };
    tracing::debug!("Config: {:?}", config);

    let sink = PreviewSink::new(config.data_path.join("preview"));
    let mut driver = Driver::new(config, sink);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let code = driver.execute(&args, &mut stdout.lock());
    std::process::exit(code);
}
