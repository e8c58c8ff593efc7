use clap::Parser;
use clap_complete::Shell;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gtrace",
    author,
    version,
    about = "Converts raw cluster job traces into scheduling-simulator inputs."
)]
#[command(styles = gtrace::utils::STYLES)]
pub struct GTrace {
    /// Without a subcommand, every configured trace source is converted
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[arg(long, global = true, help = "Path to the config file", hide = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub enum Commands {
    /// Convert a single raw trace file
    Convert(ConvertArgs),
    /// Generate shell completion scripts
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// The raw trace CSV to convert
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Where to write the converted trace
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_convert_args() {
        let args = GTrace::try_parse_from([
            "gtrace", "convert", "--input", "raw.csv", "--output", "out.csv",
        ])
        .expect("should parse convert");

        match args.command {
            Some(Commands::Convert(convert)) => {
                assert_eq!(convert.input, PathBuf::from("raw.csv"));
                assert_eq!(convert.output, PathBuf::from("out.csv"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_is_batch_mode() {
        let args = GTrace::try_parse_from(["gtrace"]).expect("should parse bare invocation");
        assert!(args.command.is_none());
    }
}
