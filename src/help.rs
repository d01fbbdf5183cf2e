//! Usage text for a spec.

use std::fmt::Write;

use crate::{
    spec::{ArgumentSpec, OptionSpec},
    Config, Spec,
};

macro_rules! w {
    ($($tt:tt)*) => {
        {
            let _ = write!($($tt)*);
        }
    };
}

/// Renders the usage text of `spec`, recursing into subcommands.
pub fn render(spec: &Spec, config: &Config) -> String {
    let mut buf = String::new();
    help_rec(&mut buf, "", spec, config);
    buf
}

fn help_rec(buf: &mut String, prefix: &str, spec: &Spec, config: &Config) {
    w!(buf, "{prefix}{}\n", spec.name());
    if let Some(doc) = spec.help() {
        write_lines_indented(buf, doc, 2);
    }
    let indent = if prefix.is_empty() { "" } else { "  " };

    let cmd = match spec {
        Spec::Single(cmd) => cmd,
        Spec::Multi(multi) => {
            if prefix.is_empty() {
                blank_line(buf);
                w!(buf, "SUBCOMMANDS:");
            }

            let prefix = format!("{prefix}{} ", multi.name);
            for sub in &multi.subcommands {
                blank_line(buf);
                blank_line(buf);
                help_rec(buf, &prefix, sub, config);
            }
            return;
        }
    };

    if !cmd.arguments.is_empty() {
        blank_line(buf);
        w!(buf, "{indent}ARGS:\n");

        let mut blank = "";
        for arg in &cmd.arguments {
            w!(buf, "{blank}");
            blank = "\n";

            w!(buf, "    {}\n", argument_usage(arg));
            if let Some(doc) = &arg.help {
                write_lines_indented(buf, doc, 6)
            }
        }
    }

    if !cmd.options.is_empty() {
        blank_line(buf);
        w!(buf, "{indent}OPTIONS:\n");

        let mut blank = "";
        for opt in &cmd.options {
            w!(buf, "{blank}");
            blank = "\n";

            w!(buf, "    {}\n", option_usage(opt, config));
            if let Some(doc) = &opt.help {
                write_lines_indented(buf, doc, 6);
            }
        }
    }
}

fn argument_usage(arg: &ArgumentSpec) -> String {
    let (l, r) = if arg.min == 0 { ("[", "]") } else { ("<", ">") };
    let dots = if arg.max == Some(1) { "" } else { "..." };
    format!("{l}{}{r}{dots}", arg.name)
}

fn option_usage(opt: &OptionSpec, config: &Config) -> String {
    let mut names = Vec::new();
    if let Some(short) = opt.short {
        names.push(format!("{}{short}", config.short_prefix));
    }
    if let Some(long) = &opt.long {
        names.push(format!("{}{long}", config.long_prefix));
    }
    let mut res = names.join(", ");
    if opt.takes_value {
        w!(res, " <{}>", opt.value_name.as_deref().unwrap_or("value"));
    }
    if opt.max != Some(1) {
        res.push_str("...");
    }
    if opt.required {
        res.push_str(" (required)");
    }
    res
}

fn write_lines_indented(buf: &mut String, multiline_str: &str, indent: usize) {
    for line in multiline_str.split('\n').map(str::trim_end) {
        if line.is_empty() {
            w!(buf, "\n")
        } else {
            w!(buf, "{blank:indent$}{line}\n", blank = "");
        }
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
