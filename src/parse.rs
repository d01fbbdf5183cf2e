//! Token classification.
//!
//! Tokens are consumed left to right with one token of lookahead for option
//! values. Dispatch tables recurse into the selected subcommand with whatever
//! tokens remain.

use crate::{
    resolve::Resolver,
    spec::{CommandSpec, MultiCommandSpec},
    Config, Error, ParsedCommand, Result, Spec,
};

pub(crate) struct Parser<'a> {
    rargs: Vec<&'a str>,
    config: &'a Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Long { raw: &'a str, name: &'a str },
    Short { raw: &'a str, name: &'a str },
    Bare(&'a str),
}

impl<'a> Parser<'a> {
    pub(crate) fn new<S: AsRef<str>>(args: &'a [S], config: &'a Config) -> Result<Self> {
        if args.len() > config.max_tokens {
            return Err(Error::InvalidParameter {
                element: "arguments".to_string(),
                reason: "too many tokens",
            });
        }
        let mut rargs = Vec::new();
        rargs.try_reserve_exact(args.len())?;
        for (i, arg) in args.iter().enumerate().rev() {
            let arg = arg.as_ref();
            if arg.len() > config.max_token_len {
                return Err(Error::InvalidParameter {
                    element: format!("argument #{i}"),
                    reason: "token is too long",
                });
            }
            rargs.push(arg);
        }
        Ok(Self { rargs, config })
    }

    pub(crate) fn config(&self) -> &'a Config {
        self.config
    }

    pub(crate) fn remaining(&self) -> usize {
        self.rargs.len()
    }

    fn next(&mut self) -> Option<&'a str> {
        self.rargs.pop()
    }

    fn classify(&self, arg: &'a str) -> Token<'a> {
        if let Some(name) = arg.strip_prefix(self.config.long_prefix.as_str()) {
            return Token::Long { raw: arg, name };
        }
        if let Some(name) = arg.strip_prefix(self.config.short_prefix.as_str()) {
            return Token::Short { raw: arg, name };
        }
        Token::Bare(arg)
    }
}

pub(crate) fn spec(p: &mut Parser<'_>, spec: &Spec) -> Result<ParsedCommand> {
    match spec {
        Spec::Single(cmd) => command(p, cmd),
        Spec::Multi(multi) => dispatch(p, multi),
    }
}

fn command(p: &mut Parser<'_>, cmd: &CommandSpec) -> Result<ParsedCommand> {
    let mut res = Resolver::new(cmd, p.config(), p.remaining())?;
    while let Some(arg) = p.next() {
        let token = p.classify(arg);
        tracing::trace!(command = %cmd.name, ?token, "classified");
        let (raw, idx) = match token {
            Token::Bare(arg) => {
                res.positional(arg);
                continue;
            }
            Token::Long { raw, name } | Token::Short { raw, name } if name.is_empty() => {
                return Err(Error::OptionNameExpected {
                    command: cmd.name.clone(),
                    token: raw.to_string(),
                })
            }
            Token::Long { raw, name } => (raw, cmd.find_long(name)),
            Token::Short { raw, name } => (raw, single_char(name).and_then(|c| cmd.find_short(c))),
        };
        let idx = idx.ok_or_else(|| Error::OptionNameNotInSpec {
            command: cmd.name.clone(),
            token: raw.to_string(),
        })?;

        res.occurrence(idx, raw)?;
        if cmd.options[idx].takes_value {
            let value = p.next().ok_or_else(|| Error::OptionValueExpected {
                option: p.config().display_name(&cmd.options[idx]),
                token: raw.to_string(),
            })?;
            res.value(idx, value);
        }
    }
    res.finish()
}

fn dispatch(p: &mut Parser<'_>, multi: &MultiCommandSpec) -> Result<ParsedCommand> {
    let Some(arg) = p.next() else {
        return Err(Error::CommandNameRequired { command: multi.name.clone(), token: None });
    };
    if arg.is_empty() {
        return Err(Error::CommandNameInvalid { name: String::new() });
    }
    if let Token::Long { .. } | Token::Short { .. } = p.classify(arg) {
        return Err(Error::CommandNameRequired {
            command: multi.name.clone(),
            token: Some(arg.to_string()),
        });
    }
    let sub = multi.find(arg).ok_or_else(|| Error::CommandNameNotInSpec {
        command: multi.name.clone(),
        token: arg.to_string(),
    })?;
    tracing::debug!(command = %multi.name, subcommand = %arg, "dispatching");

    let sub = spec(p, sub)?;
    Ok(ParsedCommand {
        name: multi.name.clone(),
        id: 0,
        options: Vec::new(),
        arguments: Vec::new(),
        subcommand: Some(Box::new(sub)),
    })
}

fn single_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
