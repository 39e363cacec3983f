//! hexdrill CLI — hex arithmetic and base-conversion drills on the terminal.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, CommandFactory, Parser};

use hexdrill_core::kind::{Mode, QuestionKind};
use hexdrill_core::session::DrillConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "hexdrill",
    version,
    about = "Drill hex arithmetic and hex/binary/decimal conversion",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Test addition
    #[arg(short = 'a')]
    addition: bool,

    /// Test multiplication
    #[arg(short = 'm')]
    multiplication: bool,

    /// Test hex to binary conversion
    #[arg(short = 'b')]
    hex_to_binary: bool,

    /// Test binary to hex conversion
    #[arg(short = 'B')]
    binary_to_hex: bool,

    /// Test hex to decimal conversion
    #[arg(short = 'd')]
    hex_to_decimal: bool,

    /// Test decimal to hex conversion
    #[arg(short = 'D')]
    decimal_to_hex: bool,

    /// Report time taken to answer
    #[arg(short = 't')]
    time: bool,

    /// Log output to FILE (must not exist yet)
    #[arg(short = 'l', value_name = "FILE", allow_hyphen_values = true)]
    log: Option<PathBuf>,

    // Plain flags so that every other argument is validated before
    // help or version is printed.
    /// Output this help message
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    help: bool,

    /// Output version information
    #[arg(short = 'v', action = ArgAction::SetTrue)]
    version: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        [
            (self.addition, QuestionKind::Addition),
            (self.multiplication, QuestionKind::Multiplication),
            (self.hex_to_binary, QuestionKind::HexToBinary),
            (self.binary_to_hex, QuestionKind::BinaryToHex),
            (self.hex_to_decimal, QuestionKind::HexToDecimal),
            (self.decimal_to_hex, QuestionKind::DecimalToHex),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect()
    }

    fn into_config(self) -> DrillConfig {
        let mut config = DrillConfig::new(self.mode()).with_timing(self.time);
        config.log_path = self.log;
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hexdrill_core=warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if cli.version && !cli.help {
        println!("{}", Cli::command().render_version().trim_end());
        return;
    }

    let show_help = cli.help;
    let config = cli.into_config();
    if show_help || config.mode.is_empty() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        return;
    }

    if let Err(e) = commands::drill::execute(config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
