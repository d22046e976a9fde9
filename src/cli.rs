use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::filter::FilterSelection;

#[derive(Debug, Parser)]
#[command(
    name = "charview",
    version,
    about = "Browse Rick and Morty characters in the terminal"
)]
pub struct Cli {
    /// Config file (default: <config_dir>/charview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the character list endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Print the filtered list to stdout instead of opening the browser
    #[arg(long)]
    pub print: bool,

    /// Starting status filter (all, alive, dead, unknown)
    #[arg(long, default_value = "all", value_name = "STATUS")]
    pub status: String,

    /// Starting gender filter (all, male, female, unknown)
    #[arg(long, default_value = "all", value_name = "GENDER")]
    pub gender: String,
}

impl Cli {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::new(&self.status, &self.gender)
    }

    /// Flags take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_everything() {
        let cli = Cli::parse_from(["charview"]);
        assert!(!cli.print);
        assert_eq!(cli.selection(), FilterSelection::default());
    }

    #[test]
    fn selection_flags_are_case_folded() {
        let cli = Cli::parse_from(["charview", "--status", "Dead", "--gender", "FEMALE"]);
        let selection = cli.selection();
        assert_eq!(selection.status.as_str(), "dead");
        assert_eq!(selection.gender.as_str(), "female");
    }

    #[test]
    fn endpoint_flag_overrides_config() {
        let cli = Cli::parse_from(["charview", "--endpoint", "http://127.0.0.1:1/x"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.endpoint, "http://127.0.0.1:1/x");
    }
}
