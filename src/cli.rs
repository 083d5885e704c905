use std::path;

use anyhow::Context as _;
use clap::Parser;
use proc_exit::prelude::*;

use crate::model;

#[derive(Debug, Parser)]
#[command(name = "umber", version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

impl Cli {
    pub fn run(self) -> proc_exit::ExitResult {
        self.color.write_global();
        init_logging(self.verbose.log_level_filter());

        match self.command {
            Command::Init(cmd) => cmd.run(),
            Command::Config(cmd) => cmd.run(),
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Scaffold config files for a new site
    Init(InitArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Debug, clap::Args)]
pub struct InitArgs {
    /// Directory to scaffold into
    #[arg(default_value = ".", value_name = "DIRECTORY")]
    pub directory: path::PathBuf,
}

impl InitArgs {
    pub fn run(self) -> proc_exit::ExitResult {
        crate::new::create_new_project(&self.directory).with_code(proc_exit::Code::FAILURE)?;
        anstream::println!(
            "Created `_umber.yml` and `{}`",
            umber_config::PUBLISH_CONFIG_FILE
        );
        Ok(())
    }
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Config file to load instead of searching the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<path::PathBuf>,

    /// Apply the publish overrides next to the config file
    #[arg(long)]
    pub publish: bool,

    /// Apply publish overrides from a specific file
    #[arg(long, value_name = "FILE", conflicts_with = "publish")]
    pub overlay: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub fn run(self) -> proc_exit::ExitResult {
        let settings = self.load().with_code(proc_exit::Code::FAILURE)?;
        anstream::print!("{settings}");
        Ok(())
    }

    fn load(&self) -> anyhow::Result<model::Settings> {
        let config = if let Some(path) = self.config.as_deref() {
            umber_config::Config::from_file(path)?
        } else {
            let cwd = std::env::current_dir().context("Failed to get the current directory")?;
            umber_config::Config::from_cwd(cwd)?
        };

        let config = if let Some(overlay_path) = self.overlay_path(&config) {
            let overlay = umber_config::Overlay::from_file(overlay_path)?;
            config.merge_overlay(&overlay)
        } else {
            config
        };

        model::Settings::from_config(config)
    }

    fn overlay_path(&self, config: &umber_config::Config) -> Option<path::PathBuf> {
        if let Some(path) = self.overlay.clone() {
            Some(path)
        } else if self.publish {
            Some(config.root.join(umber_config::PUBLISH_CONFIG_FILE))
        } else {
            None
        }
    }
}

fn init_logging(level: log::LevelFilter) {
    if level == log::LevelFilter::Off {
        return;
    }

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
