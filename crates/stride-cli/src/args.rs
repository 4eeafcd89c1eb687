use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Turn a personal goal into a structured, dated action plan
///
/// Stride analyzes the goal's complexity, breaks it into ordered tasks with
/// effort estimates, and schedules them over the timeframe. When a planning
/// collaborator is configured it is consulted first; the local engine is
/// used whenever it is unavailable or fails.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    name = "stride",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Args {
    /// The goal to plan for, e.g. "Learn to play guitar"
    #[arg(required = true)]
    pub goal: Option<String>,

    /// Timeframe to achieve the goal in, e.g. "3 months"
    #[arg(required = true)]
    pub timeframe: Option<String>,

    /// User the plan is made for. Defaults to the configured user, then
    /// "default-user"
    pub user_id: Option<String>,

    /// Attach end-user attribution to collaborator requests ("true" or
    /// "false")
    #[arg(value_parser = parse_attribution)]
    pub attribution: Option<bool>,

    /// Path to the JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/stride/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format of the plan
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands. Without one, stride plans the given goal.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the MCP server on stdio
    Serve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed result JSON
    Json,
    /// Rendered markdown report
    Markdown,
}

/// Anything other than a case-insensitive "true" disables attribution.
fn parse_attribution(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["stride", "Learn piano", "2 months", "u1", "false"])
            .expect("valid arguments");
        assert_eq!(args.goal.as_deref(), Some("Learn piano"));
        assert_eq!(args.timeframe.as_deref(), Some("2 months"));
        assert_eq!(args.user_id.as_deref(), Some("u1"));
        assert_eq!(args.attribution, Some(false));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_optional_positionals_default_to_none() {
        let args = Args::try_parse_from(["stride", "Learn piano", "2 months"]).unwrap();
        assert!(args.user_id.is_none());
        assert!(args.attribution.is_none());
    }

    #[test]
    fn test_timeframe_is_required() {
        assert!(Args::try_parse_from(["stride", "Learn piano"]).is_err());
        assert!(Args::try_parse_from(["stride"]).is_err());
    }

    #[test]
    fn test_serve_needs_no_goal() {
        let args = Args::try_parse_from(["stride", "serve"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Serve)));
        assert!(args.goal.is_none());
    }

    #[test]
    fn test_attribution_parsing() {
        assert_eq!(parse_attribution("TRUE"), Ok(true));
        assert_eq!(parse_attribution("no"), Ok(false));
    }

    #[test]
    fn test_markdown_format() {
        let args =
            Args::try_parse_from(["stride", "--format", "markdown", "Learn piano", "1 year"])
                .unwrap();
        assert_eq!(args.format, OutputFormat::Markdown);
    }
}
