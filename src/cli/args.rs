//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Permalink resolver for static site collections
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "permalink.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the output paths of item files
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Report items whose variants resolve to an empty path
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: ItemArgs,
    },
}

/// Item selection shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct ItemArgs {
    /// Item files or directories (.json, .toml, .md, .markdown).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(required = true, value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Collection of every item (default: parent directory name, without `_`)
    #[arg(short, long)]
    pub collection: Option<String>,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub items: ItemArgs,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Hide suppressed variants
    #[arg(short = 'S', long)]
    pub skip_suppressed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["tola-permalink", "resolve", "-c", "posts", "--json", "a.md"]);
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.items.collection.as_deref(), Some("posts"));
        assert!(args.json);
        assert_eq!(args.items.paths, [PathBuf::from("a.md")]);
        assert_eq!(cli.config, PathBuf::from("permalink.toml"));
    }

    #[test]
    fn test_parse_check_global_flags() {
        let cli = Cli::parse_from(["tola-permalink", "c", "-v", "-C", "site.toml", "_posts"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_paths_required() {
        assert!(Cli::try_parse_from(["tola-permalink", "resolve"]).is_err());
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(Cli::try_parse_from(["tola-permalink", "resolve", "-p", "a.md"]).is_err());
    }
}
