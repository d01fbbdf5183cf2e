use argspec::{config::ConfigError, ErrorCode, Manifest, Spec};

use crate::fixtures;

const ZLIB: &str = r#"
[spec]
type = "multi"
name = "zlib"

[[spec.subcommands]]
type = "single"
name = "compress"
id = 1

[[spec.subcommands.options]]
long = "level"
short = "l"
takes_value = true
value_name = "n"

[[spec.subcommands.options]]
long = "progress"
short = "p"

[[spec.subcommands.arguments]]
name = "FILE"

[[spec.subcommands]]
type = "single"
name = "decompress"
id = 2

[[spec.subcommands.options]]
long = "level"
short = "l"
takes_value = true
value_name = "n"

[[spec.subcommands.options]]
long = "progress"
short = "p"

[[spec.subcommands.arguments]]
name = "FILE"
"#;

#[test]
fn loads_the_same_spec_as_the_builder() {
    let manifest = Manifest::from_toml_str(ZLIB).unwrap();
    assert_eq!(manifest.spec, fixtures::zlib());
    assert_eq!(manifest.parser, argspec::Config::default());

    let cmd = manifest.parse(&["compress", "-l", "9", "data.bin"]).unwrap();
    assert_eq!(cmd.leaf().id, 1);
    assert_eq!(cmd.leaf().value("level"), Some("9"));
}

#[test]
fn parser_section() {
    let text = r#"
        [parser]
        long_prefix = "//"
        short_prefix = "/"
        max_tokens = 4

        [spec]
        type = "single"
        name = "tool"

        [[spec.options]]
        short = "v"
        max = "unbounded"

        [[spec.arguments]]
        name = "files"
        min = 0
        max = 2
    "#;
    let manifest = Manifest::from_toml_str(text).unwrap();
    assert_eq!(manifest.parser.max_tokens, 4);

    let cmd = manifest.parse(&["/v", "/v", "-v", "a"]).unwrap();
    assert_eq!(cmd.option("v").map(|it| it.occurrences), Some(2));
    assert_eq!(cmd.argument("files").map(|it| it.values.len()), Some(2));

    let err = manifest.parse(&["a", "b", "c", "d", "e"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidParameter);
}

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zlib.toml");
    std::fs::write(&path, ZLIB).unwrap();

    let manifest = Manifest::load(&path).unwrap();
    assert!(matches!(manifest.spec, Spec::Multi(_)));

    let err = Manifest::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn rejects_malformed_manifests() {
    let err = Manifest::from_toml_str("[spec]\ntype = \"tree\"\nname = \"x\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let err = Manifest::from_toml_str("[spec]\ntype = \"single\"\nname = \"x\"\ncolour = 1\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let text = "[spec]\ntype = \"single\"\nname = \"x\"\n[[spec.options]]\nmax = \"lots\"\n";
    assert!(matches!(Manifest::from_toml_str(text), Err(ConfigError::ParseError { .. })));
}

#[test]
fn rejects_invalid_specs() {
    let text = "[spec]\ntype = \"single\"\nname = \"x\"\n[[spec.options]]\nrequired = true\n";
    match Manifest::from_toml_str(text) {
        Err(ConfigError::ValidationError { source }) => {
            assert_eq!(source.code(), ErrorCode::OptionSpecNeedsName)
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let text = "[parser]\nshort_prefix = \"--\"\n[spec]\ntype = \"single\"\nname = \"x\"\n";
    match Manifest::from_toml_str(text) {
        Err(ConfigError::ValidationError { source }) => {
            assert_eq!(source.code(), ErrorCode::InvalidParameter)
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
