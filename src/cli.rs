use crate::app::WeatherApp;
use crate::config::{Config, ThemeVariant};
use crate::error::AppError;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Single-screen daily weather dashboard
#[derive(Debug, Parser)]
#[command(name = "daily-wx", version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use the dark background
    #[arg(long)]
    pub dark: bool,

    /// Show screen-reader descriptions as hover tooltips
    #[arg(long)]
    pub describe: bool,

    /// Print the accessibility tree as JSON and exit
    #[arg(long)]
    pub dump_semantics: bool,
}

impl Cli {
    /// Loads the config file, if any, then applies the command line flags on top.
    pub fn load_config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                Config::from_file(path)?
            }
            None => Config::default(),
        };

        if self.dark {
            config.theme = ThemeVariant::Dark;
        }
        if self.describe {
            config.show_descriptions = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Writes the semantics tree for `config` as pretty JSON.
pub fn dump_semantics(config: &Config, mut out: impl Write) -> Result<(), AppError> {
    let tree = WeatherApp::from_config(config).semantics();
    serde_json::to_writer_pretty(&mut out, &tree)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::strings::tags;
    use std::path::Path;

    fn write_config(name: &str, yaml: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("daily-wx-{}-{}.yaml", name, std::process::id()));
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["daily-wx"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.dump_semantics);
        assert_eq!(cli.load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "daily-wx",
            "--config",
            "wx.yaml",
            "--dark",
            "--describe",
            "--dump-semantics",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("wx.yaml")));
        assert!(cli.dark);
        assert!(cli.describe);
        assert!(cli.dump_semantics);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["daily-wx", "--sepia"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let path = write_config("override", "theme: light\nshow_descriptions: false\nselected_index: 2\n");
        let cli = Cli::try_parse_from([
            "daily-wx",
            "--config",
            path.to_str().unwrap(),
            "--dark",
            "--describe",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.theme, ThemeVariant::Dark);
        assert!(config.show_descriptions);
        // Untouched by flags
        assert_eq!(config.selected_index, 2);
    }

    #[test]
    fn test_file_values_kept_without_flags() {
        let path = write_config("file-only", "theme: dark\nshow_descriptions: true\n");
        let cli = Cli::try_parse_from(["daily-wx", "-c", path.to_str().unwrap()]).unwrap();

        let config = cli.load_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.theme, ThemeVariant::Dark);
        assert!(config.show_descriptions);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from(["daily-wx", "--config", "/nonexistent/daily-wx.yaml"]).unwrap();
        let err = cli.load_config().unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn test_dump_semantics_writes_json_tree() {
        let mut out = Vec::new();
        dump_semantics(&Config::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let sections = json["children"].as_array().unwrap();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[1]["tag"], tags::WEATHER_ICON_AND_TEXT_SPLIT);
        assert!(sections[1]["content_description"]
            .as_str()
            .unwrap()
            .starts_with("Selected 1 of 5"));
    }

    #[test]
    fn test_dump_follows_selected_page() {
        let config = Config {
            selected_index: 3,
            ..Config::default()
        };
        let mut out = Vec::new();
        dump_semantics(&config, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(json["children"][1]["content_description"]
            .as_str()
            .unwrap()
            .starts_with("Selected 4 of 5"));
    }
}
