//! Well-formedness checks for specs.
//!
//! Checks run in a fixed order and stop at the first violation, so a spec with
//! several problems always reports the same one.

use std::collections::HashSet;

use crate::{
    spec::{ArgumentSpec, CommandSpec, MultiCommandSpec, OptionSpec},
    Error, Result, Spec,
};

pub(crate) fn spec(spec: &Spec) -> Result<()> {
    match spec {
        Spec::Single(cmd) => command(cmd),
        Spec::Multi(multi) => {
            if multi.name.is_empty() {
                return Err(Error::MulticommandNeedsName);
            }
            multi_command(multi)
        }
    }
}

fn command(cmd: &CommandSpec) -> Result<()> {
    command_name(&cmd.name)?;

    let mut longs = HashSet::new();
    let mut shorts = HashSet::new();
    for (index, opt) in cmd.options.iter().enumerate() {
        option(cmd, index, opt)?;
        if let Some(long) = &opt.long {
            if !longs.insert(long.as_str()) {
                return Err(Error::OptionLongNameInvalid {
                    command: cmd.name.clone(),
                    name: long.clone(),
                });
            }
        }
        if let Some(short) = opt.short {
            if !shorts.insert(short) {
                return Err(Error::OptionShortNameInvalid {
                    command: cmd.name.clone(),
                    name: short.to_string(),
                });
            }
        }
    }

    for (index, arg) in cmd.arguments.iter().enumerate() {
        argument(cmd, index, arg)?;
    }
    if let Some(max) = cmd.max_arguments {
        let min = cmd.arguments.iter().fold(0usize, |acc, it| acc.saturating_add(it.min));
        if min > max {
            return Err(Error::InvalidParameter {
                element: cmd.name.clone(),
                reason: "argument minimums exceed the argument cap",
            });
        }
    }
    Ok(())
}

fn option(cmd: &CommandSpec, index: usize, opt: &OptionSpec) -> Result<()> {
    let has_long = opt.long.as_deref().is_some_and(|it| !it.is_empty());
    if !has_long && opt.short.is_none() {
        return Err(Error::OptionSpecNeedsName { command: cmd.name.clone(), index });
    }
    if let Some(long) = &opt.long {
        if !is_long_name(long) {
            return Err(Error::OptionLongNameInvalid {
                command: cmd.name.clone(),
                name: long.clone(),
            });
        }
    }
    if let Some(short) = opt.short {
        if !is_short_name(short) {
            return Err(Error::OptionShortNameInvalid {
                command: cmd.name.clone(),
                name: short.to_string(),
            });
        }
    }
    if opt.is_flag() && opt.required {
        return Err(Error::OptionFlagAndRequired {
            command: cmd.name.clone(),
            option: option_name(opt),
        });
    }
    if opt.max == Some(0) {
        return Err(Error::InvalidParameter {
            element: option_name(opt),
            reason: "maximum occurrence count must be at least 1",
        });
    }
    Ok(())
}

fn argument(cmd: &CommandSpec, index: usize, arg: &ArgumentSpec) -> Result<()> {
    if arg.name.is_empty() {
        return Err(Error::ArgumentSpecNeedsName { command: cmd.name.clone(), index });
    }
    if let Some(max) = arg.max {
        if arg.min > max {
            return Err(Error::InvalidParameter {
                element: arg.name.clone(),
                reason: "minimum occurrence count exceeds maximum",
            });
        }
    }
    Ok(())
}

fn multi_command(multi: &MultiCommandSpec) -> Result<()> {
    command_name(&multi.name)?;

    let mut seen = HashSet::new();
    for sub in &multi.subcommands {
        let name = sub.name();
        command_name(name)?;
        if !seen.insert(name) {
            return Err(Error::CommandNameInvalid { name: name.to_string() });
        }
    }

    for sub in &multi.subcommands {
        match sub {
            Spec::Single(cmd) => command(cmd)?,
            Spec::Multi(multi) => multi_command(multi)?,
        }
    }
    Ok(())
}

fn command_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('-') || name.chars().any(char::is_whitespace) {
        return Err(Error::CommandNameInvalid { name: name.to_string() });
    }
    Ok(())
}

fn is_long_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

fn is_short_name(name: char) -> bool {
    name != '-' && !name.is_whitespace() && !name.is_control()
}

fn option_name(opt: &OptionSpec) -> String {
    match (&opt.long, opt.short) {
        (Some(long), _) if !long.is_empty() => long.clone(),
        (_, Some(short)) => short.to_string(),
        _ => String::new(),
    }
}
