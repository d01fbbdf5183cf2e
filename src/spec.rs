//! Declarative description of a command line surface.
//!
//! Specs are plain data: construct them with the builder methods, the
//! [`spec!`](crate::spec) macro, or deserialize them from a manifest. They are
//! read-only once handed to [`crate::validate`] or [`crate::parse`].

use serde::{Deserialize, Serialize};

/// Either a single command or a dispatch table of named subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Spec {
    Single(CommandSpec),
    Multi(MultiCommandSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Single,
    Multi,
}

impl Spec {
    pub fn name(&self) -> &str {
        match self {
            Spec::Single(cmd) => &cmd.name,
            Spec::Multi(multi) => &multi.name,
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            Spec::Single(cmd) => cmd.help.as_deref(),
            Spec::Multi(multi) => multi.help.as_deref(),
        }
    }

    pub fn command_type(&self) -> CommandType {
        match self {
            Spec::Single(_) => CommandType::Single,
            Spec::Multi(_) => CommandType::Multi,
        }
    }
}

impl From<CommandSpec> for Spec {
    fn from(cmd: CommandSpec) -> Spec {
        Spec::Single(cmd)
    }
}

impl From<MultiCommandSpec> for Spec {
    fn from(multi: MultiCommandSpec) -> Spec {
        Spec::Multi(multi)
    }
}

/// A single-mode command: options plus an ordered list of positional slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandSpec {
    pub name: String,
    pub help: Option<String>,
    /// Opaque tag copied into the parsed command.
    pub id: usize,
    pub options: Vec<OptionSpec>,
    pub arguments: Vec<ArgumentSpec>,
    /// Cap on the total number of positional tokens, on top of the per-slot maxima.
    #[serde(with = "bound")]
    pub max_arguments: Option<usize>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> CommandSpec {
        CommandSpec { name: name.into(), ..CommandSpec::default() }
    }

    pub fn help(mut self, help: impl Into<String>) -> CommandSpec {
        self.help = Some(help.into());
        self
    }

    pub fn id(mut self, id: usize) -> CommandSpec {
        self.id = id;
        self
    }

    pub fn option(mut self, option: OptionSpec) -> CommandSpec {
        self.options.push(option);
        self
    }

    pub fn argument(mut self, argument: ArgumentSpec) -> CommandSpec {
        self.arguments.push(argument);
        self
    }

    pub fn max_arguments(mut self, max: usize) -> CommandSpec {
        self.max_arguments = Some(max);
        self
    }

    pub(crate) fn find_long(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|it| it.long.as_deref() == Some(name))
    }

    pub(crate) fn find_short(&self, name: char) -> Option<usize> {
        self.options.iter().position(|it| it.short == Some(name))
    }
}

/// A named dispatch table. Each child's own name is the token that selects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MultiCommandSpec {
    pub name: String,
    pub help: Option<String>,
    pub subcommands: Vec<Spec>,
}

impl MultiCommandSpec {
    pub fn new(name: impl Into<String>) -> MultiCommandSpec {
        MultiCommandSpec { name: name.into(), ..MultiCommandSpec::default() }
    }

    pub fn help(mut self, help: impl Into<String>) -> MultiCommandSpec {
        self.help = Some(help.into());
        self
    }

    pub fn subcommand(mut self, sub: impl Into<Spec>) -> MultiCommandSpec {
        self.subcommands.push(sub.into());
        self
    }

    pub(crate) fn find(&self, name: &str) -> Option<&Spec> {
        self.subcommands.iter().find(|it| it.name() == name)
    }
}

/// One recognized option.
///
/// At least one of `long` and `short` must be set. Flags (`takes_value == false`)
/// can't be required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionSpec {
    pub long: Option<String>,
    pub short: Option<char>,
    pub takes_value: bool,
    /// Placeholder shown in usage text, e.g. `path` in `--output <path>`.
    pub value_name: Option<String>,
    pub required: bool,
    /// Maximum number of occurrences, `None` for unbounded.
    #[serde(with = "bound")]
    pub max: Option<usize>,
    pub help: Option<String>,
}

impl Default for OptionSpec {
    fn default() -> OptionSpec {
        OptionSpec {
            long: None,
            short: None,
            takes_value: false,
            value_name: None,
            required: false,
            max: Some(1),
            help: None,
        }
    }
}

impl OptionSpec {
    pub fn long(name: impl Into<String>) -> OptionSpec {
        OptionSpec { long: Some(name.into()), ..OptionSpec::default() }
    }

    pub fn short(name: char) -> OptionSpec {
        OptionSpec { short: Some(name), ..OptionSpec::default() }
    }

    pub fn with_short(mut self, name: char) -> OptionSpec {
        self.short = Some(name);
        self
    }

    /// Makes the option consume the following token as its value.
    pub fn value(mut self, value_name: impl Into<String>) -> OptionSpec {
        self.takes_value = true;
        self.value_name = Some(value_name.into());
        self
    }

    pub fn required(mut self) -> OptionSpec {
        self.required = true;
        self
    }

    pub fn max(mut self, max: usize) -> OptionSpec {
        self.max = Some(max);
        self
    }

    pub fn repeated(mut self) -> OptionSpec {
        self.max = None;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> OptionSpec {
        self.help = Some(help.into());
        self
    }

    pub fn is_flag(&self) -> bool {
        !self.takes_value
    }
}

/// One positional slot. Slots with `max > 1` (or unbounded) are variadic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArgumentSpec {
    pub name: String,
    pub min: usize,
    #[serde(with = "bound")]
    pub max: Option<usize>,
    pub help: Option<String>,
}

impl Default for ArgumentSpec {
    fn default() -> ArgumentSpec {
        ArgumentSpec { name: String::new(), min: 1, max: Some(1), help: None }
    }
}

impl ArgumentSpec {
    pub fn required(name: impl Into<String>) -> ArgumentSpec {
        ArgumentSpec { name: name.into(), ..ArgumentSpec::default() }
    }

    pub fn optional(name: impl Into<String>) -> ArgumentSpec {
        ArgumentSpec { name: name.into(), min: 0, ..ArgumentSpec::default() }
    }

    pub fn repeated(name: impl Into<String>) -> ArgumentSpec {
        ArgumentSpec { name: name.into(), min: 0, max: None, help: None }
    }

    pub fn min(mut self, min: usize) -> ArgumentSpec {
        self.min = min;
        self
    }

    pub fn max(mut self, max: usize) -> ArgumentSpec {
        self.max = Some(max);
        self
    }

    pub fn unbounded(mut self) -> ArgumentSpec {
        self.max = None;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> ArgumentSpec {
        self.help = Some(help.into());
        self
    }
}

/// Occurrence bounds are written either as a count or as `"unbounded"`.
mod bound {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    const UNBOUNDED: &str = "unbounded";

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Count(usize),
        Word(String),
    }

    pub(super) fn serialize<S: Serializer>(max: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        match max {
            Some(n) => Repr::Count(*n),
            None => Repr::Word(UNBOUNDED.to_string()),
        }
        .serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        match Repr::deserialize(d)? {
            Repr::Count(n) => Ok(Some(n)),
            Repr::Word(w) if w == UNBOUNDED => Ok(None),
            Repr::Word(w) => {
                Err(de::Error::invalid_value(de::Unexpected::Str(&w), &"a count or \"unbounded\""))
            }
        }
    }
}
