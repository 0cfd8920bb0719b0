use crate::cli::type_enums::Mode;
use crate::libs::errors::SetupError;
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

/// Defines the command-line interface for 'setup-pytoolchain'.
/// There are no subcommands and no positional arguments: no flags means install mode.
#[derive(Parser, Debug)]
#[command(name = "setup-pytoolchain")]
#[command(disable_help_flag = true)] // Help text is printed by `commands::help`
#[command(disable_version_flag = true)]
#[command(args_override_self = true)] // `-h --help` or `--upgrade --upgrade` are just repeats
pub struct Cli {
    /// Install anything missing and upgrade everything already present.
    #[arg(long)]
    pub(crate) upgrade: bool,

    /// Print usage and exit.
    #[arg(short = 'h', long)]
    pub(crate) help: bool,
}

/// What this invocation should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(Mode),
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        // Help wins over --upgrade.
        if cli.help {
            Invocation::Help
        } else if cli.upgrade {
            Invocation::Run(Mode::Upgrade)
        } else {
            Invocation::Run(Mode::Install)
        }
    }
}

/// Parses the full argument list (program name first).
/// A token clap does not recognize becomes `UnknownOption`; any other rejection is `Usage`.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, SetupError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
        .map(Invocation::from)
        .map_err(|err| match (err.kind(), err.get(ContextKind::InvalidArg)) {
            (ErrorKind::UnknownArgument, Some(ContextValue::String(token))) => {
                SetupError::UnknownOption(token.clone())
            }
            (kind, _) => SetupError::Usage(kind.as_str().unwrap_or("invalid usage").to_string()),
        })
}
