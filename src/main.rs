use folio::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        content: args.opt_value_from_str("--content").unwrap(),
        theme: args.opt_value_from_str("--theme").unwrap(),
        reduced_motion: args.contains("--reduced-motion"),
    };

    app::run(flags)
}
