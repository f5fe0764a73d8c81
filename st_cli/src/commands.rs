//! Command-line subcommands.

use pico_args::Arguments;
use swiss_tournament::PlayerId;
use thiserror::Error;

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create tables if missing
    Init,
    /// Register a player
    Register(String),
    /// Record a match outcome
    Report { winner: PlayerId, loser: PlayerId },
    /// Print the number of players
    Count,
    /// Print the standings
    Standings,
    /// Print pairings for the next round
    Pairings,
    /// Recompute counters from match rows
    Check,
    /// Clear matches, and players unless `matches_only`
    Reset { matches_only: bool },
}

/// Errors that can occur during command parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No subcommand given
    #[error("Missing command. Run with --help to see available commands")]
    MissingCommand,

    /// Unrecognized subcommand
    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),

    /// Bad or missing positional argument
    #[error("{command}: {source}")]
    InvalidArgument {
        command: &'static str,
        #[source]
        source: pico_args::Error,
    },

    /// Flag given to a command that does not take it
    #[error("{command}: unexpected flag '{flag}'")]
    UnexpectedFlag {
        command: String,
        flag: &'static str,
    },

    /// Flag parsing failed before the subcommand was read
    #[error(transparent)]
    Arguments(#[from] pico_args::Error),
}

/// Parse the subcommand and its arguments.
///
/// Global flags must already have been consumed from `pargs`.
pub fn parse_command(pargs: &mut Arguments) -> Result<Command, ParseError> {
    // Subcommand-specific flags are read before the subcommand itself, since
    // pico-args only treats a leading non-flag argument as the subcommand
    let matches_only = pargs.contains("--matches-only");

    let name = pargs.subcommand()?.ok_or(ParseError::MissingCommand)?;

    let command = match name.as_str() {
        "init" => Command::Init,
        "register" => Command::Register(free(pargs, "register")?),
        "report" => Command::Report {
            winner: free(pargs, "report")?,
            loser: free(pargs, "report")?,
        },
        "count" => Command::Count,
        "standings" => Command::Standings,
        "pairings" => Command::Pairings,
        "check" => Command::Check,
        "reset" => Command::Reset { matches_only },
        _ => return Err(ParseError::UnrecognizedCommand(name)),
    };

    if matches_only && !matches!(command, Command::Reset { .. }) {
        return Err(ParseError::UnexpectedFlag {
            command: name,
            flag: "--matches-only",
        });
    }

    Ok(command)
}

fn free<T>(pargs: &mut Arguments, command: &'static str) -> Result<T, ParseError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    pargs
        .free_from_str()
        .map_err(|source| ParseError::InvalidArgument { command, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Command, ParseError> {
        let mut pargs = Arguments::from_vec(args.iter().map(OsString::from).collect());
        parse_command(&mut pargs)
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse(&["init"]).unwrap(), Command::Init);
        assert_eq!(parse(&["count"]).unwrap(), Command::Count);
        assert_eq!(parse(&["standings"]).unwrap(), Command::Standings);
        assert_eq!(parse(&["pairings"]).unwrap(), Command::Pairings);
        assert_eq!(parse(&["check"]).unwrap(), Command::Check);
    }

    #[test]
    fn test_parse_register() {
        assert_eq!(
            parse(&["register", "Alice Smith"]).unwrap(),
            Command::Register("Alice Smith".to_string())
        );
    }

    #[test]
    fn test_parse_register_missing_name() {
        let result = parse(&["register"]);
        assert!(matches!(
            result,
            Err(ParseError::InvalidArgument {
                command: "register",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_report() {
        assert_eq!(
            parse(&["report", "3", "8"]).unwrap(),
            Command::Report {
                winner: 3,
                loser: 8
            }
        );
    }

    #[test]
    fn test_parse_report_bad_id() {
        assert!(parse(&["report", "three", "8"]).is_err());
        assert!(parse(&["report", "3"]).is_err());
    }

    #[test]
    fn test_parse_reset() {
        assert_eq!(
            parse(&["reset"]).unwrap(),
            Command::Reset {
                matches_only: false
            }
        );
        assert_eq!(
            parse(&["reset", "--matches-only"]).unwrap(),
            Command::Reset { matches_only: true }
        );
    }

    #[test]
    fn test_parse_matches_only_outside_reset() {
        let err = parse(&["count", "--matches-only"]).unwrap_err();
        assert!(matches!(
            &err,
            ParseError::UnexpectedFlag { command, flag: "--matches-only" } if command == "count"
        ));

        assert!(parse(&["register", "Alice", "--matches-only"]).is_err());
    }

    #[test]
    fn test_parse_missing_command() {
        assert!(matches!(parse(&[]), Err(ParseError::MissingCommand)));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse(&["eliminate"]).unwrap_err();
        assert!(matches!(&err, ParseError::UnrecognizedCommand(c) if c == "eliminate"));
        assert!(err.to_string().contains("--help"));
    }
}
