use clap::{Parser, Subcommand};
use reframe::config::{ConfigError, RunConfig};
use reframe::imaging::OutputFormat;
use reframe::{logging, output, process, prompt};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "reframe")]
#[command(version)]
#[command(about = "Batch crop and resize images to a fixed aspect ratio")]
#[command(long_about = "\
Batch crop and resize images to a fixed aspect ratio

Every file in the input directory is center-cropped to the target aspect
ratio, scaled to the target height, and written to the output directory.

  reframe convert --ext heic photos out 1280 4 3   # 4:3, 1280 px high
  reframe convert --ext png shots thumbs 400 1     # square, 400 px high

Output files keep the input name with the extension replaced:
IMG_0001.heic becomes IMG_0001.webp. Files are processed in name order and
the run stops at the first failure.

Run 'reframe interactive' to be asked for each value instead.")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a directory from command-line arguments
    Convert {
        /// Extension of the input files, without the dot
        #[arg(long = "ext", value_name = "EXT")]
        extension: String,

        /// Output image format
        #[arg(long, value_enum, default_value_t = OutputFormat::Webp)]
        format: OutputFormat,

        /// Directory containing the images to convert
        input: PathBuf,

        /// Directory to write converted images to (created if missing)
        output: PathBuf,

        /// Target height followed by one ratio value (square) or two (width height)
        #[arg(value_name = "HEIGHT RATIO", num_args = 2..=3, required = true)]
        params: Vec<String>,
    },
    /// Ask for extension, directories and parameters on the console
    Interactive {
        /// Output image format
        #[arg(long, value_enum, default_value_t = OutputFormat::Webp)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    let config = match build_config(cli.command) {
        Ok(config) => config,
        Err(err) => {
            output::print_error(&err);
            return ExitCode::FAILURE;
        }
    };

    match process::process(&config, output::print_process_event) {
        Ok(summary) => {
            output::print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn build_config(command: Command) -> Result<RunConfig, ConfigError> {
    match command {
        Command::Convert {
            extension,
            format,
            input,
            output,
            params,
        } => RunConfig::from_parts(&extension, input, output, &params, format),
        Command::Interactive { format } => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            prompt::collect(&mut stdin.lock(), &mut stdout, format)
        }
    }
}
