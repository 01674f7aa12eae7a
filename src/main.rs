// SPDX-License-Identifier: MPL-2.0
use value_tracking_slider::app::{self, Flags};
use value_tracking_slider::logging;

const HELP: &str = "\
value-tracking-slider

USAGE:
  value-tracking-slider [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr, de)
  --config-dir <PATH>   Directory holding settings.toml
  --verbose             Log drag lifecycle events
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains("--verbose");
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(verbose);

    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unknown argument");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
