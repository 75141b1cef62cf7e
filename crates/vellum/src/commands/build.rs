//! `vellum build` command implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use vellum_config::{CliSettings, Config};
use vellum_content::DeliveryClient;
use vellum_linkcard::{FetchOptions, HttpFetcher};
use vellum_site::{BuildOptions, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    site_title: Option<String>,

    /// Path to configuration file (default: auto-discover vellum.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            out_dir: self.out_dir.clone(),
            site_title: self.site_title.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let content = config.require_content()?;

        output.info(&format!("Site: {}", config.site.title));
        output.info(&format!("Output: {}", config.build.out_dir.display()));

        let client = DeliveryClient::new(
            &content.host,
            &content.space,
            &content.environment,
            &content.access_token,
        );
        let fetcher = HttpFetcher::new(Duration::from_secs(config.enrich.timeout_secs));

        let builder = SiteBuilder::new(
            &client,
            &fetcher,
            BuildOptions {
                site_title: config.site.title.clone(),
                new_articles_limit: config.enrich.new_articles_limit,
                fetch: FetchOptions {
                    concurrency: config.enrich.concurrency,
                },
            },
        );

        let summary = builder.build(&config.build.out_dir)?;

        output.success(&format!(
            "Generated {} pages in {}",
            summary.pages,
            config.build.out_dir.display()
        ));
        Ok(())
    }
}
