use std::fs;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use update_info::cli::Cli;
use update_info::info::{DOCKER_ENV_TAGNAME, PersonalInfo, RuntimeFields};
use update_info::render::Template;
use update_info::{INFO_SECTION, OUTPUT_PATH, TEMPLATE_PATH};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Guard: refuse to run outside the docker environment. Normal exit,
    // not an error.
    if std::env::var_os(DOCKER_ENV_TAGNAME).is_none() {
        println!("Use ./activate_docker.sh to enter our docker environment first! ");
        return Ok(());
    }

    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("update-info starting (image: {})", cli.imagename);

    let mut personal_info =
        PersonalInfo::load(&cli.config, INFO_SECTION).context("Failed to load student info")?;

    if !cli.restore {
        personal_info.enrich(&RuntimeFields::capture());
    }

    let template = Template::load(TEMPLATE_PATH).context("Failed to load README template")?;
    let rendered = template.safe_substitute(&personal_info);

    fs::write(OUTPUT_PATH, rendered).context(format!("Failed to write {}", OUTPUT_PATH))?;

    if cli.restore {
        println!("{} Restored {} from template", "✓".green(), OUTPUT_PATH.cyan());
    } else {
        println!("{} Updated {}", "✓".green(), OUTPUT_PATH.cyan());
    }

    Ok(())
}
