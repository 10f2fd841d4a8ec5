mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert, number};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Convert { value, to, locale } => {
            print::header("converting value");
            convert::convert(value, to, locale)
        }
        Commands::Format { value, locale } => {
            print::header("formatting number");
            number::format(value, locale)
        }
        Commands::Parse { value, locale } => {
            print::header("parsing number");
            number::parse(&value, locale)
        }
    }
}
