//! Accumulates classified tokens of one command and enforces cardinality.
//!
//! Option maxima are checked as occurrences arrive; everything else is checked
//! once the token stream is exhausted.

use crate::{
    spec::CommandSpec, Config, Error, ParsedArgument, ParsedCommand, ParsedOption, Result,
};

pub(crate) struct Resolver<'a> {
    cmd: &'a CommandSpec,
    config: &'a Config,
    seen: Vec<Seen>,
    positionals: Vec<String>,
}

#[derive(Default)]
struct Seen {
    occurrences: usize,
    values: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(cmd: &'a CommandSpec, config: &'a Config, hint: usize) -> Result<Self> {
        let mut seen = Vec::new();
        seen.try_reserve_exact(cmd.options.len())?;
        seen.resize_with(cmd.options.len(), Seen::default);
        let mut positionals = Vec::new();
        positionals.try_reserve(hint)?;
        Ok(Self { cmd, config, seen, positionals })
    }

    pub(crate) fn occurrence(&mut self, idx: usize, token: &str) -> Result<()> {
        let opt = &self.cmd.options[idx];
        let seen = &mut self.seen[idx];
        seen.occurrences += 1;
        match opt.max {
            Some(max) if seen.occurrences > max => Err(Error::OptionTooMany {
                option: self.config.display_name(opt),
                token: token.to_string(),
                max,
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn value(&mut self, idx: usize, value: &str) {
        self.seen[idx].values.push(value.to_string());
    }

    pub(crate) fn positional(&mut self, arg: &str) {
        self.positionals.push(arg.to_string());
    }

    pub(crate) fn finish(self) -> Result<ParsedCommand> {
        self.check_overflow()?;

        for (opt, seen) in self.cmd.options.iter().zip(&self.seen) {
            if opt.required && seen.occurrences == 0 {
                return Err(Error::OptionNameRequiredInSpec {
                    command: self.cmd.name.clone(),
                    option: self.config.display_name(opt),
                });
            }
        }

        let counts = self.distribute()?;

        let mut options = Vec::new();
        options.try_reserve_exact(self.seen.iter().filter(|it| it.occurrences > 0).count())?;
        for (opt, seen) in self.cmd.options.iter().zip(self.seen) {
            if seen.occurrences > 0 {
                options.push(ParsedOption {
                    long: opt.long.clone(),
                    short: opt.short,
                    occurrences: seen.occurrences,
                    values: seen.values,
                });
            }
        }

        let mut arguments = Vec::new();
        arguments.try_reserve_exact(counts.iter().filter(|&&it| it > 0).count())?;
        let mut positionals = self.positionals.into_iter();
        for (arg, count) in self.cmd.arguments.iter().zip(counts) {
            if count > 0 {
                let values = positionals.by_ref().take(count).collect();
                arguments.push(ParsedArgument { name: arg.name.clone(), values });
            }
        }

        Ok(ParsedCommand {
            name: self.cmd.name.clone(),
            id: self.cmd.id,
            options,
            arguments,
            subcommand: None,
        })
    }

    /// Per-slot bounds are checked before the aggregate cap.
    fn check_overflow(&self) -> Result<()> {
        let total = self.positionals.len();
        let Some(last) = self.cmd.arguments.last() else {
            return match self.positionals.first() {
                Some(token) => Err(Error::ArgumentMaxExceeded {
                    command: self.cmd.name.clone(),
                    token: token.clone(),
                    max: 0,
                }),
                None => Ok(()),
            };
        };

        let capacity =
            self.cmd.arguments.iter().try_fold(0usize, |acc, it| acc.checked_add(it.max?));
        if let Some(capacity) = capacity {
            if total > capacity {
                return Err(Error::ArgumentExceededSpec {
                    argument: last.name.clone(),
                    token: self.positionals[capacity].clone(),
                });
            }
        }

        if let Some(max) = self.cmd.max_arguments {
            if total > max {
                return Err(Error::ArgumentMaxExceeded {
                    command: self.cmd.name.clone(),
                    token: self.positionals[max].clone(),
                    max,
                });
            }
        }
        Ok(())
    }

    /// Number of positional values each slot receives: every slot gets its
    /// minimum first, the rest fills slots left to right up to their maxima.
    fn distribute(&self) -> Result<Vec<usize>> {
        let mut counts = Vec::new();
        counts.try_reserve_exact(self.cmd.arguments.len())?;

        let mut left = self.positionals.len();
        for arg in &self.cmd.arguments {
            if left < arg.min {
                return Err(Error::ArgumentExpectedInSpec { argument: arg.name.clone() });
            }
            left -= arg.min;
            counts.push(arg.min);
        }

        for (arg, count) in self.cmd.arguments.iter().zip(counts.iter_mut()) {
            let room = arg.max.map_or(left, |max| max - arg.min);
            let take = room.min(left);
            *count += take;
            left -= take;
        }
        debug_assert_eq!(left, 0);
        Ok(counts)
    }
}
