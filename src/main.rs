// SPDX-License-Identifier: MPL-2.0
use iced_landing::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        reduce_motion: args.contains("--reduce-motion"),
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
    };

    app::run(flags)
}
