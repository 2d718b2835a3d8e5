// SPDX-License-Identifier: MPL-2.0
use iced_primer::app::{self, Flags};
use iced_primer::scene::Tab;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        start_tab: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .as_deref()
            .and_then(Tab::from_slug),
    };

    app::run(flags)
}
