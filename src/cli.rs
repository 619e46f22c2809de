//! CLI argument parsing for update-info

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "update-info")]
#[command(author, version, about = "Activate homework environment for compiler-s20", long_about = None)]
pub struct Cli {
    /// Restore README.md from the template without injecting runtime fields
    #[arg(short, long)]
    pub restore: bool,

    /// Config file to use
    #[arg(long, default_value = "student_info.ini")]
    pub config: PathBuf,

    /// Docker image name for the homework environment
    #[arg(short, long, default_value = "compiler-s20-env")]
    pub imagename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["update-info"]);

        assert!(!cli.restore);
        assert_eq!(cli.config, PathBuf::from("student_info.ini"));
        assert_eq!(cli.imagename, "compiler-s20-env");
    }

    #[test]
    fn test_short_and_long_restore() {
        let short = Cli::parse_from(["update-info", "-r"]);
        let long = Cli::parse_from(["update-info", "--restore"]);

        assert!(short.restore);
        assert!(long.restore);
    }

    #[test]
    fn test_custom_config_path() {
        let cli = Cli::parse_from(["update-info", "--config", "alt.ini"]);

        assert_eq!(cli.config, PathBuf::from("alt.ini"));
    }
}
