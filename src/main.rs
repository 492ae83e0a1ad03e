use iced_vitrine::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_vitrine - product media gallery manager

USAGE:
  iced_vitrine [OPTIONS] [PATHS]...

OPTIONS:
  --lang <LOCALE>     Locale override in BCP-47 form (e.g. fr, en-US)
  --i18n-dir <DIR>    Directory with custom Fluent .ftl files
  --data-dir <DIR>    Override the application data directory
  --config-dir <DIR>  Override the configuration directory
  -h, --help          Print this help

ARGS:
  [PATHS]...          Image files to import at startup (jpg, jpeg, png)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let mut flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        paths: Vec::new(),
    };

    for arg in args.finish() {
        let value = arg.to_string_lossy();
        if value.starts_with('-') {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unrecognized option: {value}"),
            });
        }
        flags.paths.push(PathBuf::from(arg));
    }

    Ok(flags)
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("Try 'iced_vitrine --help' for usage.");
            std::process::exit(2);
        }
    };

    // Directory overrides must be in place before anything resolves paths.
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
