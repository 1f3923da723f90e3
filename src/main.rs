// SPDX-License-Identifier: MPL-2.0
use iced_snack::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        max_snack: args
            .opt_value_from_str("--max-snack")
            .unwrap_or_else(|err| {
                eprintln!("[WARN] ignoring --max-snack: {err}");
                None
            }),
        config_dir: args
            .opt_value_from_str("--config-dir")
            .unwrap_or_else(|err| {
                eprintln!("[WARN] ignoring --config-dir: {err}");
                None
            }),
    };

    for unused in args.finish() {
        eprintln!("[WARN] unrecognized argument: {}", unused.to_string_lossy());
    }

    app::run(flags)
}
