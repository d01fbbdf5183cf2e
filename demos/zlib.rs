use argspec::{help, ArgumentSpec, CommandSpec, Config, MultiCommandSpec, OptionSpec, Spec};

const COMPRESSION: usize = 1;
const DECOMPRESSION: usize = 2;

fn command(name: &str, id: usize, verb: &str) -> CommandSpec {
    CommandSpec::new(name)
        .help(format!("Perform zlib {verb}."))
        .id(id)
        .option(
            OptionSpec::long("level")
                .with_short('l')
                .value("n")
                .help("The compression level to use."),
        )
        .option(
            OptionSpec::long("progress")
                .with_short('p')
                .help("Whether to print progress to stdout"),
        )
        .argument(ArgumentSpec::required("FILE").help(format!("A path to the file to {name}.")))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let spec: Spec = MultiCommandSpec::new("zlib")
        .help("A zlib compress command line utility")
        .subcommand(command("compress", COMPRESSION, "compression"))
        .subcommand(command("decompress", DECOMPRESSION, "decompression"))
        .into();

    if std::env::args_os().len() <= 1 {
        print!("{}", help::render(&spec, &Config::default()));
        std::process::exit(1)
    }

    let cmd = match argspec::parse_env(&spec) {
        Ok(cmd) => cmd,
        Err(err) => {
            eprintln!("{}: {err}", err.code());
            std::process::exit(1)
        }
    };

    let cmd = cmd.leaf();
    match cmd.id {
        COMPRESSION => println!("Doing compression!"),
        DECOMPRESSION => println!("Doing decompression!"),
        id => unreachable!("unknown command id {id}"),
    }

    if let Some(path) = cmd.argument("FILE").and_then(|it| it.value()) {
        println!("Using file path: {path}");
    }
    let progress = cmd.flag("progress");
    println!("tracking progress: {}", if progress { "YES" } else { "NO" });
    println!("level set to: {}", cmd.value("level").unwrap_or("DEFAULT"));
}
