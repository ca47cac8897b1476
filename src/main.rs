use clap::Parser;
use daily_wx::app::WeatherApp;
use daily_wx::cli::{self, Cli};
use daily_wx::error::AppError;
use iced::{Application, Settings, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.dump_semantics {
        cli::dump_semantics(&config, std::io::stdout().lock())?;
        return Ok(());
    }

    info!(
        width = config.window.width,
        height = config.window.height,
        theme = ?config.theme,
        "starting daily-wx"
    );

    let window_size = Size::new(config.window.width, config.window.height);
    let mut settings = Settings::with_flags(config);
    settings.window.size = window_size;

    WeatherApp::run(settings).map_err(AppError::from)?;
    Ok(())
}
