//! Error codes and the error type returned by every entry point.
//!
//! [`ErrorCode`] is a closed enumeration whose discriminants are stable: callers
//! may persist them or match on them. [`Error`] carries exactly one code plus the
//! context needed to render a diagnostic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable outcome code of a `validate` or `parse` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ErrorCode {
    Success = 0,
    InvalidParameter = 1,
    MemoryAllocFailed = 2,
    OptionNameNotInSpec = 3,
    OptionNameExpected = 4,
    OptionNameRequiredInSpec = 5,
    OptionValueExpected = 6,
    OptionTooMany = 7,
    OptionSpecNeedsName = 8,
    OptionLongNameInvalid = 9,
    OptionShortNameInvalid = 10,
    OptionFlagAndRequired = 11,
    CommandNameNotInSpec = 12,
    CommandNameRequired = 13,
    CommandNameInvalid = 14,
    ArgumentMaxExceeded = 15,
    ArgumentExceededSpec = 16,
    ArgumentExpectedInSpec = 17,
    ArgumentSpecNeedsName = 18,
    MulticommandNeedsName = 19,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 20] = [
        ErrorCode::Success,
        ErrorCode::InvalidParameter,
        ErrorCode::MemoryAllocFailed,
        ErrorCode::OptionNameNotInSpec,
        ErrorCode::OptionNameExpected,
        ErrorCode::OptionNameRequiredInSpec,
        ErrorCode::OptionValueExpected,
        ErrorCode::OptionTooMany,
        ErrorCode::OptionSpecNeedsName,
        ErrorCode::OptionLongNameInvalid,
        ErrorCode::OptionShortNameInvalid,
        ErrorCode::OptionFlagAndRequired,
        ErrorCode::CommandNameNotInSpec,
        ErrorCode::CommandNameRequired,
        ErrorCode::CommandNameInvalid,
        ErrorCode::ArgumentMaxExceeded,
        ErrorCode::ArgumentExceededSpec,
        ErrorCode::ArgumentExpectedInSpec,
        ErrorCode::ArgumentSpecNeedsName,
        ErrorCode::MulticommandNeedsName,
    ];

    /// Status code of a finished call, `Success` for `Ok`.
    pub fn of<T>(res: &crate::Result<T>) -> ErrorCode {
        match res {
            Ok(_) => ErrorCode::Success,
            Err(err) => err.code(),
        }
    }

    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Success => "SUCCESS",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::MemoryAllocFailed => "MEMORY_ALLOC_FAILED",
            ErrorCode::OptionNameNotInSpec => "OPTION_NAME_NOT_IN_SPEC",
            ErrorCode::OptionNameExpected => "OPTION_NAME_EXPECTED",
            ErrorCode::OptionNameRequiredInSpec => "OPTION_NAME_REQUIRED_IN_SPEC",
            ErrorCode::OptionValueExpected => "OPTION_VALUE_EXPECTED",
            ErrorCode::OptionTooMany => "OPTION_TOO_MANY",
            ErrorCode::OptionSpecNeedsName => "OPTION_SPEC_NEEDS_NAME",
            ErrorCode::OptionLongNameInvalid => "OPTION_LONG_NAME_INVALID",
            ErrorCode::OptionShortNameInvalid => "OPTION_SHORT_NAME_INVALID",
            ErrorCode::OptionFlagAndRequired => "OPTION_FLAG_AND_REQUIRED",
            ErrorCode::CommandNameNotInSpec => "COMMAND_NAME_NOT_IN_SPEC",
            ErrorCode::CommandNameRequired => "COMMAND_NAME_REQUIRED",
            ErrorCode::CommandNameInvalid => "COMMAND_NAME_INVALID",
            ErrorCode::ArgumentMaxExceeded => "ARGUMENT_MAX_EXCEEDED",
            ErrorCode::ArgumentExceededSpec => "ARGUMENT_EXCEEDED_SPEC",
            ErrorCode::ArgumentExpectedInSpec => "ARGUMENT_EXPECTED_IN_SPEC",
            ErrorCode::ArgumentSpecNeedsName => "ARGUMENT_SPEC_NEEDS_NAME",
            ErrorCode::MulticommandNeedsName => "MULTICOMMAND_NEEDS_NAME",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        ErrorCode::ALL.get(usize::from(value)).copied().ok_or(value)
    }
}

/// The first violation detected by a `validate` or `parse` call.
///
/// Spec-definition errors (`Option*Invalid`, `*NeedsName`, `OptionFlagAndRequired`)
/// are fixed by the embedding application. Everything else raised during parsing is
/// attributable to the end user's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid {element}: {reason}")]
    InvalidParameter { element: String, reason: &'static str },

    #[error("memory allocation failed")]
    MemoryAllocFailed,

    #[error("Unknown option: `{token}` for `{command}`")]
    OptionNameNotInSpec { command: String, token: String },

    #[error("Expected an option name after `{token}`")]
    OptionNameExpected { command: String, token: String },

    #[error("Option is required: `{option}`")]
    OptionNameRequiredInSpec { command: String, option: String },

    #[error("Expected a value for `{token}`")]
    OptionValueExpected { option: String, token: String },

    #[error("Option specified more than {max} time(s): `{token}`")]
    OptionTooMany { option: String, token: String, max: usize },

    #[error("option #{index} of `{command}` has neither a long nor a short name")]
    OptionSpecNeedsName { command: String, index: usize },

    #[error("invalid long option name in `{command}`: `{name}`")]
    OptionLongNameInvalid { command: String, name: String },

    #[error("invalid short option name in `{command}`: `{name}`")]
    OptionShortNameInvalid { command: String, name: String },

    #[error("flag can't be required: `{option}`")]
    OptionFlagAndRequired { command: String, option: String },

    #[error("Unknown command: `{token}`")]
    CommandNameNotInSpec { command: String, token: String },

    #[error("A subcommand of `{command}` is required")]
    CommandNameRequired { command: String, token: Option<String> },

    #[error("invalid command name: `{name}`")]
    CommandNameInvalid { name: String },

    #[error("Too many arguments for `{command}` (at most {max}): `{token}`")]
    ArgumentMaxExceeded { command: String, token: String, max: usize },

    #[error("Too many values for argument `{argument}`: `{token}`")]
    ArgumentExceededSpec { argument: String, token: String },

    #[error("Argument is required: `{argument}`")]
    ArgumentExpectedInSpec { argument: String },

    #[error("argument #{index} of `{command}` has no name")]
    ArgumentSpecNeedsName { command: String, index: usize },

    #[error("multi-command has no name")]
    MulticommandNeedsName,
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            Error::MemoryAllocFailed => ErrorCode::MemoryAllocFailed,
            Error::OptionNameNotInSpec { .. } => ErrorCode::OptionNameNotInSpec,
            Error::OptionNameExpected { .. } => ErrorCode::OptionNameExpected,
            Error::OptionNameRequiredInSpec { .. } => ErrorCode::OptionNameRequiredInSpec,
            Error::OptionValueExpected { .. } => ErrorCode::OptionValueExpected,
            Error::OptionTooMany { .. } => ErrorCode::OptionTooMany,
            Error::OptionSpecNeedsName { .. } => ErrorCode::OptionSpecNeedsName,
            Error::OptionLongNameInvalid { .. } => ErrorCode::OptionLongNameInvalid,
            Error::OptionShortNameInvalid { .. } => ErrorCode::OptionShortNameInvalid,
            Error::OptionFlagAndRequired { .. } => ErrorCode::OptionFlagAndRequired,
            Error::CommandNameNotInSpec { .. } => ErrorCode::CommandNameNotInSpec,
            Error::CommandNameRequired { .. } => ErrorCode::CommandNameRequired,
            Error::CommandNameInvalid { .. } => ErrorCode::CommandNameInvalid,
            Error::ArgumentMaxExceeded { .. } => ErrorCode::ArgumentMaxExceeded,
            Error::ArgumentExceededSpec { .. } => ErrorCode::ArgumentExceededSpec,
            Error::ArgumentExpectedInSpec { .. } => ErrorCode::ArgumentExpectedInSpec,
            Error::ArgumentSpecNeedsName { .. } => ErrorCode::ArgumentSpecNeedsName,
            Error::MulticommandNeedsName => ErrorCode::MulticommandNeedsName,
        }
    }

    /// The offending raw token, if the error was caused by one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::OptionNameNotInSpec { token, .. }
            | Error::OptionNameExpected { token, .. }
            | Error::OptionValueExpected { token, .. }
            | Error::OptionTooMany { token, .. }
            | Error::CommandNameNotInSpec { token, .. }
            | Error::ArgumentMaxExceeded { token, .. }
            | Error::ArgumentExceededSpec { token, .. } => Some(token),
            Error::CommandNameRequired { token, .. } => token.as_deref(),
            _ => None,
        }
    }

    /// Name of the spec element implicated by the error.
    pub fn element(&self) -> Option<&str> {
        match self {
            Error::InvalidParameter { element, .. } => Some(element),
            Error::OptionNameRequiredInSpec { option, .. }
            | Error::OptionValueExpected { option, .. }
            | Error::OptionTooMany { option, .. }
            | Error::OptionFlagAndRequired { option, .. } => Some(option),
            Error::OptionLongNameInvalid { name, .. }
            | Error::OptionShortNameInvalid { name, .. }
            | Error::CommandNameInvalid { name } => Some(name),
            Error::ArgumentExceededSpec { argument, .. }
            | Error::ArgumentExpectedInSpec { argument } => Some(argument),
            Error::OptionNameNotInSpec { command, .. }
            | Error::OptionNameExpected { command, .. }
            | Error::OptionSpecNeedsName { command, .. }
            | Error::CommandNameNotInSpec { command, .. }
            | Error::CommandNameRequired { command, .. }
            | Error::ArgumentMaxExceeded { command, .. }
            | Error::ArgumentSpecNeedsName { command, .. } => Some(command),
            Error::MemoryAllocFailed | Error::MulticommandNeedsName => None,
        }
    }

    /// Whether the spec itself is malformed, as opposed to the user's input.
    pub fn is_spec_error(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::OptionSpecNeedsName
                | ErrorCode::OptionLongNameInvalid
                | ErrorCode::OptionShortNameInvalid
                | ErrorCode::OptionFlagAndRequired
                | ErrorCode::ArgumentSpecNeedsName
                | ErrorCode::MulticommandNeedsName
        )
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Error {
        Error::MemoryAllocFailed
    }
}
