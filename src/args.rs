use clap::{Arg, ArgAction, Command};

/// Build the clap command for the torstats binary.
///
/// Kept separate from [`parse_args`] so tests can drive it with
/// `try_get_matches_from`.
pub fn build_command() -> Command {
    Command::new("torstats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Aggregates piece-size, size, creator and tracker statistics over directories of .torrent files")
        .arg(
            Arg::new("dirs")
                .help("Directories to scan for .torrent files")
                .required(true)
                .num_args(1..)
                .value_name("DIR"),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .help("Write histograms to fixed-name data files instead of stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Directory for batch-mode output files")
                .value_name("DIR")
                .default_value("."),
        )
        .arg(
            Arg::new("size_quantum")
                .long("size-quantum")
                .help("Total-size bucket width in MiB")
                .value_name("MIB")
                .default_value("200")
                .value_parser(clap::value_parser!(u64).range(1..=1_048_576)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress the progress spinner")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
