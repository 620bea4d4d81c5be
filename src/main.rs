// SPDX-License-Identifier: MPL-2.0
use farma_dash::app::{self, Flags};

fn main() -> iced::Result {
    if simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .is_err()
    {
        eprintln!("logger already initialized");
    }

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_base: args.opt_value_from_str("--api-base").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
    };

    app::run(flags)
}
