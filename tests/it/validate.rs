use argspec::{ArgumentSpec, CommandSpec, ErrorCode, MultiCommandSpec, OptionSpec, Spec};

use crate::fixtures;

fn with_option(opt: OptionSpec) -> Spec {
    CommandSpec::new("cmd").option(opt).into()
}

fn with_argument(arg: ArgumentSpec) -> Spec {
    CommandSpec::new("cmd").argument(arg).into()
}

fn code(spec: &Spec) -> ErrorCode {
    ErrorCode::of(&argspec::validate(spec))
}

#[test]
fn well_formed_specs() {
    for spec in
        [fixtures::build(), fixtures::project(), fixtures::zlib(), fixtures::git(), fixtures::cp()]
    {
        assert_eq!(argspec::validate(&spec), Ok(()));
    }
    assert_eq!(code(&CommandSpec::new("empty").into()), ErrorCode::Success);
}

#[test]
fn option_names() {
    assert_eq!(code(&with_option(OptionSpec::default())), ErrorCode::OptionSpecNeedsName);
    assert_eq!(code(&with_option(OptionSpec::long(""))), ErrorCode::OptionSpecNeedsName);
    assert_eq!(
        code(&with_option(OptionSpec::long("").with_short('x'))),
        ErrorCode::OptionLongNameInvalid
    );
    assert_eq!(code(&with_option(OptionSpec::long("two words"))), ErrorCode::OptionLongNameInvalid);
    assert_eq!(code(&with_option(OptionSpec::long("--output"))), ErrorCode::OptionLongNameInvalid);
    assert_eq!(code(&with_option(OptionSpec::short('-'))), ErrorCode::OptionShortNameInvalid);
    assert_eq!(code(&with_option(OptionSpec::short(' '))), ErrorCode::OptionShortNameInvalid);
}

#[test]
fn duplicate_option_names() {
    let spec: Spec = CommandSpec::new("cmd")
        .option(OptionSpec::long("level").with_short('l'))
        .option(OptionSpec::long("level"))
        .into();
    let err = argspec::validate(&spec).unwrap_err();
    assert_eq!(err.code(), ErrorCode::OptionLongNameInvalid);
    assert_eq!(err.element(), Some("level"));

    let spec: Spec = CommandSpec::new("cmd")
        .option(OptionSpec::long("level").with_short('l'))
        .option(OptionSpec::long("list").with_short('l'))
        .into();
    assert_eq!(code(&spec), ErrorCode::OptionShortNameInvalid);
}

#[test]
fn required_flag() {
    let err = argspec::validate(&with_option(OptionSpec::long("verbose").required())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::OptionFlagAndRequired);
    assert_eq!(err.to_string(), "flag can't be required: `verbose`");
    assert!(err.is_spec_error());

    let ok = OptionSpec::long("output").value("path").required();
    assert_eq!(code(&with_option(ok)), ErrorCode::Success);
}

#[test]
fn first_violation_wins() {
    let nameless_required_flag = OptionSpec { required: true, ..OptionSpec::default() };
    assert_eq!(code(&with_option(nameless_required_flag)), ErrorCode::OptionSpecNeedsName);

    let spec: Spec = CommandSpec::new("cmd")
        .option(OptionSpec::long("ok"))
        .option(OptionSpec::short('-'))
        .argument(ArgumentSpec::required(""))
        .into();
    assert_eq!(code(&spec), ErrorCode::OptionShortNameInvalid);
}

#[test]
fn arguments() {
    let err = argspec::validate(&with_argument(ArgumentSpec::required(""))).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ArgumentSpecNeedsName);
    assert_eq!(err.to_string(), "argument #0 of `cmd` has no name");

    let inverted = ArgumentSpec::required("file").min(2).max(1);
    assert_eq!(code(&with_argument(inverted)), ErrorCode::InvalidParameter);
    let never = OptionSpec::long("tag").value("t").max(0);
    assert_eq!(code(&with_option(never)), ErrorCode::InvalidParameter);

    let spec: Spec = CommandSpec::new("cmd")
        .argument(ArgumentSpec::required("a"))
        .argument(ArgumentSpec::required("b"))
        .max_arguments(1)
        .into();
    let err = argspec::validate(&spec).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidParameter);
    assert_eq!(err.element(), Some("cmd"));
    assert_eq!(err.to_string(), "invalid cmd: argument minimums exceed the argument cap");

    let spec: Spec = CommandSpec::new("cmd")
        .argument(ArgumentSpec::required("a"))
        .argument(ArgumentSpec::required("b"))
        .max_arguments(2)
        .into();
    assert_eq!(code(&spec), ErrorCode::Success);
}

#[test]
fn command_names() {
    assert_eq!(code(&CommandSpec::new("").into()), ErrorCode::CommandNameInvalid);
    assert_eq!(code(&CommandSpec::new("-x").into()), ErrorCode::CommandNameInvalid);
    assert_eq!(code(&MultiCommandSpec::new("").into()), ErrorCode::MulticommandNeedsName);

    let spec: Spec = MultiCommandSpec::new("tool")
        .subcommand(CommandSpec::new("run"))
        .subcommand(CommandSpec::new("run"))
        .into();
    let err = argspec::validate(&spec).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CommandNameInvalid);
    assert_eq!(err.element(), Some("run"));

    let spec: Spec = MultiCommandSpec::new("tool").subcommand(CommandSpec::new("a b")).into();
    assert_eq!(code(&spec), ErrorCode::CommandNameInvalid);
}

#[test]
fn nested_specs_are_checked() {
    let spec: Spec = MultiCommandSpec::new("git")
        .subcommand(
            MultiCommandSpec::new("remote")
                .subcommand(CommandSpec::new("add").option(OptionSpec::long("f").required())),
        )
        .into();
    assert_eq!(code(&spec), ErrorCode::OptionFlagAndRequired);
}

#[test]
fn parse_rejects_invalid_specs() {
    let spec = with_option(OptionSpec::default());
    let err = argspec::parse(&spec, &["anything"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::OptionSpecNeedsName);
    assert!(err.is_spec_error());
}
