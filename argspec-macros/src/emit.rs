use crate::ast;

use std::fmt::Write;

macro_rules! w {
    ($($tt:tt)*) => {
        {
            let _ = write!($($tt)*);
        }
    };
}

/// Emits an expression of type `argspec::Spec`.
pub(crate) fn emit(cmd: &ast::Cmd) -> String {
    let mut buf = String::new();
    emit_spec(&mut buf, cmd);
    w!(buf, "\n");
    buf
}

fn emit_spec(buf: &mut String, cmd: &ast::Cmd) {
    if cmd.is_multi() {
        w!(buf, "::argspec::Spec::Multi(::argspec::MultiCommandSpec::new({:?})", cmd.name);
        emit_help(buf, cmd.doc.as_deref());
        for sub in &cmd.subcommands {
            w!(buf, "\n.subcommand(");
            emit_spec(buf, sub);
            w!(buf, ")");
        }
    } else {
        w!(buf, "::argspec::Spec::Single(::argspec::CommandSpec::new({:?})", cmd.name);
        emit_help(buf, cmd.doc.as_deref());
        for flag in &cmd.flags {
            w!(buf, "\n.option(");
            emit_flag(buf, flag);
            w!(buf, ")");
        }
        for arg in &cmd.args {
            let ctor = match arg.arity {
                ast::Arity::Optional => "optional",
                ast::Arity::Required => "required",
                ast::Arity::Repeated => "repeated",
            };
            w!(buf, "\n.argument(::argspec::ArgumentSpec::{ctor}({:?})", arg.name);
            emit_help(buf, arg.doc.as_deref());
            w!(buf, ")");
        }
    }
    w!(buf, ")");
}

fn emit_flag(buf: &mut String, flag: &ast::Flag) {
    match (&flag.long, flag.short) {
        (Some(long), short) => {
            w!(buf, "::argspec::OptionSpec::long({long:?})");
            if let Some(short) = short {
                w!(buf, ".with_short({short:?})");
            }
        }
        (None, Some(short)) => w!(buf, "::argspec::OptionSpec::short({short:?})"),
        (None, None) => w!(buf, "::argspec::OptionSpec::default()"),
    }
    if let Some(value) = &flag.value {
        w!(buf, ".value({value:?})");
    }
    match flag.arity {
        ast::Arity::Optional => (),
        ast::Arity::Required => w!(buf, ".required()"),
        ast::Arity::Repeated => w!(buf, ".repeated()"),
    }
    emit_help(buf, flag.doc.as_deref());
}

fn emit_help(buf: &mut String, doc: Option<&str>) {
    if let Some(doc) = doc {
        w!(buf, ".help({doc:?})");
    }
}
