use argspec::{ArgumentSpec, CommandSpec, ErrorCode, MultiCommandSpec, OptionSpec, Spec};

#[test]
fn single_command() {
    let spec = argspec::spec! {
        /// Compile a target.
        cmd build {
            /// Where to write.
            required -o, --output <path>
            repeated -v
            optional --log-file <file>
            optional target
        }
    };
    let expected: Spec = CommandSpec::new("build")
        .help("Compile a target.")
        .option(
            OptionSpec::long("output")
                .with_short('o')
                .value("path")
                .required()
                .help("Where to write."),
        )
        .option(OptionSpec::short('v').repeated())
        .option(OptionSpec::long("log-file").value("file"))
        .argument(ArgumentSpec::optional("target"))
        .into();
    assert_eq!(spec, expected);

    let cmd = argspec::parse(&spec, &["-v", "-o", "out.bin", "-v", "main.c"]).unwrap();
    assert_eq!(cmd.value("output"), Some("out.bin"));
    assert_eq!(cmd.option("v").map(|it| it.occurrences), Some(2));
}

#[test]
fn multi_command() {
    let spec = argspec::spec! {
        /// A zlib compress command line utility
        cmd zlib {
            /// Perform zlib compression.
            cmd compress {
                optional -l, --level <n>
                optional -p, --progress
                /// A path to the file to compress.
                required FILE
            }
            cmd decompress {
                optional -p, --progress
                required FILE
                repeated extra
            }
        }
    };
    let expected: Spec = MultiCommandSpec::new("zlib")
        .help("A zlib compress command line utility")
        .subcommand(
            CommandSpec::new("compress")
                .help("Perform zlib compression.")
                .option(OptionSpec::long("level").with_short('l').value("n"))
                .option(OptionSpec::long("progress").with_short('p'))
                .argument(ArgumentSpec::required("FILE").help("A path to the file to compress.")),
        )
        .subcommand(
            CommandSpec::new("decompress")
                .option(OptionSpec::long("progress").with_short('p'))
                .argument(ArgumentSpec::required("FILE"))
                .argument(ArgumentSpec::repeated("extra")),
        )
        .into();
    assert_eq!(spec, expected);
    assert_eq!(argspec::validate(&spec), Ok(()));

    let cmd = argspec::parse(&spec, &["decompress", "a", "b", "c"]).unwrap();
    assert_eq!(cmd.path(), vec!["zlib", "decompress"]);
    assert_eq!(cmd.leaf().argument("extra").map(|it| it.values.len()), Some(2));

    let err = argspec::parse(&spec, &["compress"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ArgumentExpectedInSpec);
}

#[test]
fn nested() {
    let spec = argspec::spec! {
        cmd git {
            cmd remote {
                cmd add {
                    required name
                    required url
                }
            }
            cmd status {}
        }
    };
    let cmd = argspec::parse(&spec, &["remote", "add", "origin", "url"]).unwrap();
    assert_eq!(cmd.path(), vec!["git", "remote", "add"]);
    let cmd = argspec::parse(&spec, &["status"]).unwrap();
    assert_eq!(cmd.leaf().name, "status");
}
