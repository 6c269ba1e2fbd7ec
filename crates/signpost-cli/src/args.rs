use clap::{Args as ClapArgs, Parser, Subcommand};
use signpost_core::Tone;

/// Print short status messages to the terminal
///
/// Each message is written as `--> FIRST: SECOND REST...`. The first segment
/// is colored by the message tone, the second is highlighted, and anything
/// after it is printed as plain text.
///
/// Colors can be turned off with `--no-color`, `SIGNPOST_COLOR=never`, or by
/// setting `NO_COLOR`.
#[derive(Parser)]
#[command(version, about, name = "signpost")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Signpost CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print an informational message
    Info(SegmentsArgs),
    /// Print a success message
    #[command(alias = "ok")]
    Success(SegmentsArgs),
    /// Print a failure message
    #[command(alias = "error")]
    Fail(SegmentsArgs),
    /// Print a message with the tone chosen at runtime
    Say(SayArgs),
}

#[derive(ClapArgs)]
pub struct SegmentsArgs {
    /// Message segments, e.g. `built target/app`
    pub segments: Vec<String>,
}

#[derive(ClapArgs)]
pub struct SayArgs {
    /// Message tone: info, success or fail
    #[arg(short, long, default_value = "info")]
    pub tone: Tone,

    /// Message segments
    pub segments: Vec<String>,
}

impl Commands {
    /// Split the command into its tone and segments.
    pub fn into_parts(self) -> (Tone, Vec<String>) {
        match self {
            Commands::Info(args) => (Tone::Info, args.segments),
            Commands::Success(args) => (Tone::Success, args.segments),
            Commands::Fail(args) => (Tone::Fail, args.segments),
            Commands::Say(args) => (args.tone, args.segments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_parse_success_alias() {
        let args = parse(&["signpost", "ok", "built", "app"]);
        let (tone, segments) = args.command.into_parts();
        assert_eq!(tone, Tone::Success);
        assert_eq!(segments, vec!["built", "app"]);
    }

    #[test]
    fn test_parse_global_no_color_after_subcommand() {
        let args = parse(&["signpost", "fail", "--no-color", "broke"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_parse_say_default_tone() {
        let args = parse(&["signpost", "say", "hello"]);
        assert_eq!(args.command.into_parts().0, Tone::Info);
    }

    #[test]
    fn test_parse_say_invalid_tone() {
        assert!(Args::try_parse_from(["signpost", "say", "--tone", "warn", "x"]).is_err());
    }

    #[test]
    fn test_parse_no_segments() {
        let args = parse(&["signpost", "info"]);
        assert!(args.command.into_parts().1.is_empty());
    }
}
