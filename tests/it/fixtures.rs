use argspec::{ArgumentSpec, CommandSpec, MultiCommandSpec, OptionSpec, Spec};

pub(crate) fn build() -> Spec {
    CommandSpec::new("build")
        .option(OptionSpec::long("output").with_short('o').value("path").required())
        .argument(ArgumentSpec::optional("target"))
        .into()
}

pub(crate) fn project() -> Spec {
    MultiCommandSpec::new("project")
        .subcommand(CommandSpec::new("init").id(1))
        .subcommand(CommandSpec::new("run").id(2).option(OptionSpec::long("verbose")))
        .into()
}

pub(crate) fn zlib() -> Spec {
    let command = |name: &str, id: usize| {
        CommandSpec::new(name)
            .id(id)
            .option(OptionSpec::long("level").with_short('l').value("n"))
            .option(OptionSpec::long("progress").with_short('p'))
            .argument(ArgumentSpec::required("FILE"))
    };
    MultiCommandSpec::new("zlib")
        .subcommand(command("compress", 1))
        .subcommand(command("decompress", 2))
        .into()
}

pub(crate) fn git() -> Spec {
    MultiCommandSpec::new("git")
        .subcommand(
            MultiCommandSpec::new("remote")
                .subcommand(
                    CommandSpec::new("add")
                        .argument(ArgumentSpec::required("name"))
                        .argument(ArgumentSpec::required("url")),
                )
                .subcommand(CommandSpec::new("remove").argument(ArgumentSpec::required("name"))),
        )
        .subcommand(CommandSpec::new("status").option(OptionSpec::short('s')))
        .into()
}

pub(crate) fn cp() -> Spec {
    CommandSpec::new("cp")
        .argument(ArgumentSpec::required("src").unbounded())
        .argument(ArgumentSpec::required("dst"))
        .into()
}

pub(crate) fn tagged() -> Spec {
    CommandSpec::new("tagged")
        .option(OptionSpec::long("tag").value("name"))
        .option(OptionSpec::long("label").value("name").max(2))
        .option(OptionSpec::long("verbose").with_short('v').repeated())
        .option(OptionSpec::short('n').value("count"))
        .into()
}
