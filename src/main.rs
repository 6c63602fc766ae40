use clap::{ArgAction, Parser, Subcommand};
use identicon::encoding::{self, PngBackend};
use identicon::{Generator, HashAlgorithm, Options, args, batch, config, logging, output};
use std::path::PathBuf;
use std::process::ExitCode;

/// Style flags shared by every command. Each one overrides the config file.
#[derive(clap::Args, Clone, Default)]
struct StyleArgs {
    /// Side length of the square image in pixels
    #[arg(long, global = true)]
    size: Option<u32>,

    /// Fraction of the size left empty on each side, in [0, 0.5)
    #[arg(long, global = true)]
    margin: Option<f64>,

    /// Leave the background transparent
    #[arg(long, global = true, overrides_with = "opaque")]
    transparent: bool,

    /// Fill the background with light gray
    #[arg(long, global = true, overrides_with = "transparent")]
    opaque: bool,

    /// Grow every painted cell by a border so neighbours merge
    #[arg(long, global = true, overrides_with = "no_stroke")]
    stroke: bool,

    /// Paint cells without a border
    #[arg(long, global = true, overrides_with = "stroke")]
    no_stroke: bool,

    /// Border width used by --stroke
    #[arg(long, global = true)]
    stroke_size: Option<u32>,
}

impl StyleArgs {
    fn apply(&self, mut options: Options) -> Options {
        if let Some(size) = self.size {
            options.size = size;
        }
        if let Some(margin) = self.margin {
            options.margin = margin;
        }
        if self.transparent {
            options.transparent = true;
        } else if self.opaque {
            options.transparent = false;
        }
        if self.stroke {
            options.stroke = true;
        } else if self.no_stroke {
            options.stroke = false;
        }
        if let Some(stroke_size) = self.stroke_size {
            options.stroke_size = stroke_size;
        }
        options
    }
}

#[derive(Parser)]
#[command(name = "identicon")]
#[command(about = "Deterministic identicon avatars from text")]
#[command(long_about = "\
Deterministic identicon avatars from text

The text (and optional salt) is hashed. The digest picks a foreground color
and a horizontally symmetric 5x5 grid, which is written out as a PNG.

Positionals:

  identicon alice alice.png                 # md5, no salt
  identicon sha256 alice alice.png          # ALGORITHM TEXT OUTPUT
  identicon sha512 alice pepper alice.png   # ALGORITHM TEXT SALT OUTPUT
  identicon -- batch batch.png              # text that names a subcommand

Algorithms: md5 (default), sha1, sha256, sha512. An unknown algorithm falls
back to md5 with a warning. Flags go before '--'.

Run 'identicon gen-config' to generate a documented config.toml.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    /// [ALGORITHM] TEXT [SALT] OUTPUT
    #[arg(value_name = "ARGS", num_args = 2..=4, required = true)]
    positionals: Vec<String>,

    /// Config file supplying defaults for every option
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print digest, color, layout and grid without writing a file
    Inspect {
        /// [ALGORITHM] TEXT [SALT]
        #[arg(value_name = "ARGS", num_args = 1..=3, required = true)]
        positionals: Vec<String>,
    },
    /// Generate one identicon per line of a list file (`text` or `text<TAB>salt`)
    Batch {
        /// List file
        list: PathBuf,

        /// Directory for the PNGs and manifest.json
        #[arg(long, default_value = "identicons")]
        out_dir: PathBuf,

        /// Hash algorithm for every entry
        #[arg(long)]
        hash: Option<HashAlgorithm>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    logging::configure_logger(logging::level_for_verbosity(cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let site_config = config::load_config_or_default(cli.config.as_deref())?;
    let base = cli.style.apply(site_config.to_options());

    match cli.command {
        None => {
            let (positionals, path) = args::resolve_with_output(&cli.positionals)?;
            let options = with_positionals(&base, &positionals);
            let identicon = Generator::new().inspect(&options)?;
            encoding::write_png(&PngBackend::new(), &identicon.render(), &path)?;
            output::print_generate_output(options.text(), &identicon, &path);
        }
        Some(Command::Inspect { positionals }) => {
            let positionals = args::resolve(&positionals)?;
            let identicon = Generator::new().inspect(&with_positionals(&base, &positionals))?;
            output::print_inspect_output(&identicon);
        }
        Some(Command::Batch {
            list,
            out_dir,
            hash,
        }) => {
            let mut base = base;
            if let Some(hash) = hash {
                base.hash_algorithm = hash;
            }
            let entries = batch::parse_list(&std::fs::read_to_string(&list)?);
            log::info!("{} entries from {}", entries.len(), list.display());

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    println!("{}", output::format_batch_event(&event));
                }
            });
            let result = batch::run_batch(
                &Generator::new(),
                &PngBackend::new(),
                &base,
                &entries,
                &out_dir,
                Some(tx),
            );
            printer.join().ok();
            let manifest = result?;
            output::print_batch_summary(&manifest, &batch::manifest_path(&out_dir));
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Overlay text, salt and an explicit algorithm onto the configured options.
fn with_positionals(base: &Options, positionals: &args::Positionals) -> Options {
    let mut options = base
        .clone()
        .with_text(&positionals.text)
        .with_salt(&positionals.salt);
    if let Some(algorithm) = positionals.algorithm {
        options.hash_algorithm = algorithm;
    }
    options
}
