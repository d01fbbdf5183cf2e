use argspec::{help, Config};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let spec = argspec::spec! {
        /// A command for specifying fruit quantities.
        cmd fruit {
            /// number of apples
            required -a, --apple <count>
            /// change in the number of bananas
            optional -b, --banana <delta>
        }
    };

    let usage = help::render(&spec, &Config::default());
    if std::env::args_os().len() <= 1 {
        println!("{usage}");
        std::process::exit(1)
    }

    match argspec::parse_env(&spec) {
        Ok(cmd) => {
            let apples = cmd.value("apple").unwrap_or_default();
            match cmd.value("banana") {
                Some(delta) => println!("{apples} apples, bananas changed by {delta}"),
                None => println!("{apples} apples"),
            }
        }
        Err(err) => {
            eprintln!("{}: {err}", err.code());
            println!("{usage}");
            std::process::exit(1)
        }
    }
}
