//! Parse results.
//!
//! Results own all of their strings and keep no reference to the spec or to the
//! caller's token storage.

use crate::Config;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub id: usize,
    /// Options that occurred at least once, in spec order.
    pub options: Vec<ParsedOption>,
    /// Argument slots that received at least one value, in spec order.
    pub arguments: Vec<ParsedArgument>,
    /// The selected subcommand, when this command is a dispatch table.
    pub subcommand: Option<Box<ParsedCommand>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOption {
    pub long: Option<String>,
    pub short: Option<char>,
    pub occurrences: usize,
    /// One value per occurrence for value-bearing options, empty for flags.
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgument {
    pub name: String,
    pub values: Vec<String>,
}

impl ParsedCommand {
    /// Looks an option up by its long name, falling back to a one-char short name.
    ///
    /// Long names win: with both `--f` and `-f` declared, `option("f")` is `--f`.
    /// Use [`ParsedCommand::short_option`] to reach `-f`.
    pub fn option(&self, name: &str) -> Option<&ParsedOption> {
        if let Some(opt) = self.options.iter().find(|it| it.long.as_deref() == Some(name)) {
            return Some(opt);
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.short_option(c),
            _ => None,
        }
    }

    pub fn short_option(&self, name: char) -> Option<&ParsedOption> {
        self.options.iter().find(|it| it.short == Some(name))
    }

    pub fn flag(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.option(name).and_then(ParsedOption::value)
    }

    pub fn argument(&self, name: &str) -> Option<&ParsedArgument> {
        self.arguments.iter().find(|it| it.name == name)
    }

    pub fn subcommand(&self) -> Option<&ParsedCommand> {
        self.subcommand.as_deref()
    }

    /// The innermost selected command.
    pub fn leaf(&self) -> &ParsedCommand {
        let mut cmd = self;
        while let Some(sub) = cmd.subcommand() {
            cmd = sub;
        }
        cmd
    }

    /// Names along the dispatch chain, starting with this command.
    pub fn path(&self) -> Vec<&str> {
        let mut res = vec![self.name.as_str()];
        let mut cmd = self;
        while let Some(sub) = cmd.subcommand() {
            res.push(&sub.name);
            cmd = sub;
        }
        res
    }

    /// Turns the result back into tokens which parse to an equal result.
    ///
    /// The command's own name is not emitted, the same way a program name is
    /// not part of the parsed tokens.
    pub fn to_args(&self, config: &Config) -> Vec<String> {
        let mut res = Vec::new();
        let mut cmd = self;
        while let Some(sub) = cmd.subcommand() {
            res.push(sub.name.clone());
            cmd = sub;
        }
        for opt in &cmd.options {
            let flag = match (&opt.long, opt.short) {
                (Some(long), _) => format!("{}{long}", config.long_prefix),
                (None, Some(short)) => format!("{}{short}", config.short_prefix),
                (None, None) => continue,
            };
            if opt.values.is_empty() {
                res.extend(std::iter::repeat(flag).take(opt.occurrences));
            } else {
                for value in &opt.values {
                    res.push(flag.clone());
                    res.push(value.clone());
                }
            }
        }
        for arg in &cmd.arguments {
            res.extend(arg.values.iter().cloned());
        }
        res
    }
}

impl ParsedOption {
    pub fn name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }

    /// First value of a value-bearing option.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

impl ParsedArgument {
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
