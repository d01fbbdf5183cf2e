use argspec::{help, ArgumentSpec, CommandSpec, Config, MultiCommandSpec, OptionSpec, Spec};
use expect_test::expect;

#[test]
fn single_command() {
    let spec: Spec = CommandSpec::new("build")
        .help("Compile a target.")
        .option(
            OptionSpec::long("output")
                .with_short('o')
                .value("path")
                .required()
                .help("Where to write."),
        )
        .option(OptionSpec::short('v').repeated())
        .argument(ArgumentSpec::optional("target").help("What to build."))
        .into();
    expect![[r#"
        build
          Compile a target.

        ARGS:
            [target]
              What to build.

        OPTIONS:
            -o, --output <path> (required)
              Where to write.

            -v...
    "#]]
    .assert_eq(&help::render(&spec, &Config::default()));
}

#[test]
fn multi_command() {
    let spec: Spec = MultiCommandSpec::new("zlib")
        .help("A zlib compress command line utility")
        .subcommand(
            CommandSpec::new("compress")
                .help("Perform zlib compression.")
                .option(
                    OptionSpec::long("level")
                        .with_short('l')
                        .value("n")
                        .help("The compression level to use."),
                )
                .option(OptionSpec::long("progress").with_short('p').help("Print progress."))
                .argument(ArgumentSpec::required("FILE").help("A path to the file to compress.")),
        )
        .into();
    expect![[r#"
        zlib
          A zlib compress command line utility

        SUBCOMMANDS:

        zlib compress
          Perform zlib compression.

          ARGS:
            <FILE>
              A path to the file to compress.

          OPTIONS:
            -l, --level <n>
              The compression level to use.

            -p, --progress
              Print progress.
    "#]]
    .assert_eq(&help::render(&spec, &Config::default()));
}

#[test]
fn custom_prefixes() {
    let spec: Spec =
        CommandSpec::new("dir").option(OptionSpec::long("wide").with_short('w')).into();
    expect![[r#"
        dir

        OPTIONS:
            /w, //wide
    "#]]
    .assert_eq(&help::render(&spec, &Config::default().with_prefixes("//", "/")));
}
