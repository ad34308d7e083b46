// SPDX-License-Identifier: MPL-2.0
use jobsite_ui::app::{self, paths, Flags};

const HELP: &str = "\
jobsite_ui - job listing site front end

USAGE:
    jobsite_ui [OPTIONS]

OPTIONS:
    --lang <LOCALE>       Interface language (e.g. en-US, fr)
    --config-dir <DIR>    Directory holding settings.toml
    --page <PATH>         Page to open on launch (/, /jobs, /blog, /about)
    -h, --help            Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        page: args.opt_value_from_str("--page")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
