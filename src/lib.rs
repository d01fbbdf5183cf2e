//! Declarative command line arguments parser.
//!
//! Describe the expected options, positional arguments and subcommands with a
//! [`Spec`], then [`parse`] a list of tokens against it. Every failure carries a
//! stable [`ErrorCode`] plus the offending token and spec element, so callers
//! can render their own diagnostics.
//!
//! ```
//! use argspec::{ArgumentSpec, CommandSpec, ErrorCode, OptionSpec, Spec};
//!
//! let spec = Spec::Single(
//!     CommandSpec::new("build")
//!         .option(OptionSpec::long("output").with_short('o').value("path").required())
//!         .argument(ArgumentSpec::optional("target")),
//! );
//!
//! let cmd = argspec::parse(&spec, &["-o", "out.bin", "main.c"]).unwrap();
//! assert_eq!(cmd.value("output"), Some("out.bin"));
//! assert_eq!(cmd.argument("target").and_then(|it| it.value()), Some("main.c"));
//!
//! let err = argspec::parse(&spec, &["main.c"]).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::OptionNameRequiredInSpec);
//! ```

mod error;
mod spec;
mod validate;
mod parse;
mod resolve;
mod command;
pub mod config;
pub mod help;

pub use argspec_macros::spec;

pub use crate::{
    command::{ParsedArgument, ParsedCommand, ParsedOption},
    config::{Config, Manifest},
    error::{Error, ErrorCode},
    spec::{ArgumentSpec, CommandSpec, CommandType, MultiCommandSpec, OptionSpec, Spec},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks `spec` for internal consistency, reporting the first violation.
pub fn validate(spec: &Spec) -> Result<()> {
    tracing::debug!(spec = %spec.name(), kind = ?spec.command_type(), "validating");
    validate::spec(spec)
        .inspect_err(|err| tracing::debug!(code = %err.code(), "invalid spec: {err}"))
}

/// Parses `args` against `spec` with the default [`Config`].
///
/// The spec is validated on every call.
pub fn parse<S: AsRef<str>>(spec: &Spec, args: &[S]) -> Result<ParsedCommand> {
    parse_with(spec, args, &Config::default())
}

pub fn parse_with<S: AsRef<str>>(
    spec: &Spec,
    args: &[S],
    config: &Config,
) -> Result<ParsedCommand> {
    config.validate()?;
    validate(spec)?;
    tracing::debug!(spec = %spec.name(), tokens = args.len(), "parsing");
    let mut p = parse::Parser::new(args, config)?;
    parse::spec(&mut p, spec)
        .inspect_err(|err| tracing::debug!(code = %err.code(), "parse failed: {err}"))
}

/// Parses the arguments of the current process, skipping the program name.
pub fn parse_env(spec: &Spec) -> Result<ParsedCommand> {
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string().map_err(|arg| Error::InvalidParameter {
                element: format!("{arg:?}"),
                reason: "argument is not valid UTF-8",
            })
        })
        .collect::<Result<Vec<_>>>()?;
    parse(spec, &args)
}
