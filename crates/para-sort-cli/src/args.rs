use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "para-sort")]
#[command(about = "Suggest PARA location, template and tags for a note")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base directory (default: ~/.para-sort)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest PARA location and template for a note
    Classify {
        /// Note file (default: read stdin)
        file: Option<PathBuf>,
    },

    /// Suggest tags for a note
    Tags {
        /// Note file (default: read stdin)
        file: Option<PathBuf>,

        /// Content type hint (recipe, code, task, meeting, idea)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        content_type: Option<String>,

        /// Maximum prioritized tags (overrides tags.max_tags)
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Classification, location, template and tags in one pass
    Analyze {
        /// Note file (default: read stdin)
        file: Option<PathBuf>,

        /// Content type hint (recipe, code, task, meeting, idea)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        content_type: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., tags.max_tags)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., tags.max_tags, tags.custom.homelab)
        key: String,

        /// Value to set (e.g., "8" or "\bproxmox\b,\bnas\b")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with default template
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_tags() {
        let cli = Cli::try_parse_from(["para-sort", "tags", "note.md", "--type", "recipe", "-m", "5"])
            .unwrap();
        match cli.command {
            Some(Commands::Tags {
                file,
                content_type,
                max,
            }) => {
                assert_eq!(file, Some(PathBuf::from("note.md")));
                assert_eq!(content_type.as_deref(), Some("recipe"));
                assert_eq!(max, Some(5));
            }
            _ => panic!("expected tags command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["para-sort", "classify", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Classify { file: None })));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
