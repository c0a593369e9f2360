use anyhow::Result;
use clap::{App, Arg, SubCommand};
use radhe_log::{banner, demo, Config, LoggerFactory};

fn main() -> Result<()> {
    let matches = App::new("radhe-log")
        .version("0.1.0")
        .about("Writes sample records to logs/app.log and the console")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("TOML file overriding the default logger settings"),
        )
        .subcommand(SubCommand::with_name("banner").about("Print the logo and developer info"))
        .get_matches();

    #[cfg(windows)]
    let _ = ansi_term::enable_ansi_support();

    let config = match matches.value_of("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default()
    };

    match matches.subcommand() {
        ("banner", _) => banner::print_banner(),

        _ => {
            let factory: LoggerFactory = config.factory();

            demo::run(&factory)?
        }
    }

    Ok(())
}
