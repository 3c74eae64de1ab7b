//! Command-line argument definitions.
//!
//! clap handles the grammar. Help, empty input and unknown commands are
//! resolved before clap runs so their output and exit status stay fixed:
//! usage on standard output, status 0 for help and 1 for errors.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::constants;

const COMMANDS: [&str; 3] = ["connect", "disconnect", "list"];
const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
const ALL_FLAGS: [&str; 2] = ["-a", "--all"];

/// Raw clap grammar.
#[derive(Parser, Debug)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to a VPN
    Connect(TargetArgs),
    /// Disconnect from a VPN
    Disconnect(TargetArgs),
    /// Print a JSON object mapping each connection to its connected state
    List {
        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        _rest: Vec<String>,
    },
}

/// Target of `connect` / `disconnect`.
#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    /// Apply action to all connections
    #[arg(short, long)]
    pub all: bool,

    /// Connection name, as shown by the VPN application
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

/// What to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Connect,
    Disconnect,
    List,
}

/// Options for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Action,
    /// Connection name; empty for `list` and for `--all`.
    pub name: String,
    pub all: bool,
}

impl From<Commands> for Options {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Connect(target) => Self::target(Action::Connect, target),
            Commands::Disconnect(target) => Self::target(Action::Disconnect, target),
            Commands::List { .. } => Self {
                command: Action::List,
                name: String::new(),
                all: false,
            },
        }
    }
}

impl Options {
    fn target(command: Action, target: TargetArgs) -> Self {
        Self {
            command,
            name: target.name.unwrap_or_default(),
            all: target.all,
        }
    }
}

/// Parsing stopped short of a runnable command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Usage {
    /// Help was requested, or no arguments were given.
    Help,
    /// The arguments were invalid.
    Error(String),
}

impl Usage {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Help => 0,
            Self::Error(_) => 1,
        }
    }

    /// Text to print on standard output.
    #[must_use]
    pub fn render(&self, program: &str) -> String {
        let mut out = String::new();
        if let Self::Error(message) = self {
            out.push_str(&format!("{}{message}\n", constants::CLI_MSG_ERROR_PREFIX));
        }
        out.push_str(&usage(program));
        out
    }
}

/// Usage text for `program`.
#[must_use]
pub fn usage(program: &str) -> String {
    format!(
        "{program} <command> [<name>]

Usage:
    {program} (connect|disconnect) [-a|--all] <name>
    {program} list
    {program} -h

Options:
    -a, --all     Apply action to all connections
    -h, --help    Show this message and quit
"
    )
}

/// Parse the arguments that follow the program name.
///
/// # Errors
///
/// Returns [`Usage`] when help was requested or the arguments are invalid.
pub fn parse_args<I, S>(argv: I) -> Result<Options, Usage>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let argv: Vec<String> = argv.into_iter().map(Into::into).collect();

    let Some(command) = argv.first() else {
        return Err(Usage::Help);
    };
    if argv.iter().any(|arg| HELP_FLAGS.contains(&arg.as_str())) {
        return Err(Usage::Help);
    }
    if !COMMANDS.contains(&command.as_str()) {
        return Err(Usage::Error(format!(
            "{}{command}",
            constants::CLI_MSG_UNKNOWN_COMMAND
        )));
    }

    let takes_name = command.as_str() != "list";

    // The word after connect/disconnect is the name even when it looks like
    // a flag; only -a/--all is read as an option there.
    let mut argv = argv;
    if takes_name && argv.len() >= 2 && !ALL_FLAGS.contains(&argv[1].as_str()) {
        argv.insert(1, "--".to_string());
    }

    let args = Args::try_parse_from(std::iter::once(constants::APP_NAME.to_string()).chain(argv))
        .map_err(|err| usage_error(&err))?;
    let options = Options::from(args.command);
    tracing::debug!(?options, "parsed arguments");
    Ok(options)
}

/// Convert raw process arguments, replacing invalid UTF-8 rather than failing.
pub fn lossy_args<I>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

fn usage_error(err: &clap::Error) -> Usage {
    if err.kind() == ErrorKind::MissingRequiredArgument {
        return Usage::Error(constants::CLI_MSG_NO_NAME.to_string());
    }
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first);
    Usage::Error(message.to_string())
}
