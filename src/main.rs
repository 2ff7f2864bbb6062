// SPDX-License-Identifier: MPL-2.0
use agentcore_showcase::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        no_particles: args.contains("--no-particles"),
    };

    app::run(flags)
}
