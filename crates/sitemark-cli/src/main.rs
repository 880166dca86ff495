use anyhow::{Context, Result, bail};
use clap::Parser;
use sitemark_config::Config;
use sitemark_engine::site;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "Build a static HTML site from a folder of Markdown files")]
struct Cli {
    /// Config file (defaults to ./sitemark.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Folder of Markdown content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Folder of static assets copied as-is
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output folder, deleted and rebuilt on every run
    #[arg(long)]
    public: Option<PathBuf>,

    /// HTML template containing {{ Title }} and {{ Content }}
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let config_path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = match Config::load_from_path(&config_path)? {
            Some(config) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            None => {
                log::info!("No config file at {}, using defaults", config_path.display());
                Config::default()
            }
        };

        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(public) = &self.public {
            config.public_dir = public.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        Ok(config)
    }
}

fn build(config: &Config) -> Result<()> {
    site::clean_dir(&config.public_dir)
        .with_context(|| format!("cleaning {}", config.public_dir.display()))?;

    if config.static_dir.is_dir() {
        let copied = site::copy_static(&config.static_dir, &config.public_dir)
            .context("copying static files")?;
        log::info!("Copied {} static files", copied.len());
    } else {
        log::warn!(
            "Static folder {} not found, skipping asset copy",
            config.static_dir.display()
        );
    }

    let report = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
    )
    .context("generating pages")?;
    log::info!(
        "Generated {} pages into {}",
        report.written.len(),
        config.public_dir.display()
    );
    if !report.is_success() {
        bail!("{} documents failed to convert", report.failures.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    if let Err(e) = build(&config) {
        log::error!("Build failed: {e:#}");
        return Err(e);
    }
    Ok(())
}
