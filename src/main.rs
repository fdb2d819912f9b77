// SPDX-License-Identifier: MPL-2.0
use showreel::app::{self, Flags};

const HELP: &str = "\
showreel - storefront video showcase

USAGE:
  showreel [OPTIONS]

OPTIONS:
  --lang <LANG>           UI language (e.g. en-US, es)
  --config-dir <DIR>      Directory holding settings.toml
  --media-dir <DIR>       Directory local videos are resolved against
  -h, --help              Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        media_dir: read_option(&mut args, "--media-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
