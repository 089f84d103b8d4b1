// SPDX-License-Identifier: MPL-2.0
use swipe_card::app::{self, paths, Flags};
use swipe_card::logging;

const HELP: &str = "\
Swipe through images: right to like, left to dislike.

USAGE:
  swipe_card [OPTIONS] [IMAGE...]

OPTIONS:
  --lang <ID>         UI language (e.g. en-US, fr)
  --config-dir <DIR>  Directory holding settings.toml
  -h, --help          Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let images = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    Ok(Flags {
        lang,
        config_dir,
        images,
    })
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    paths::set_cli_config_dir(flags.config_dir.clone());
    app::run(flags)
}
