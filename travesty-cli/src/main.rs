use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use travesty_core::io::{OutputTarget, default_output_path, read_source, write_output};
use travesty_core::text::paragraph::ParagraphPolicy;
use travesty_core::{Granularity, Settings, TravestyError, travesty};

/// Exit code for any unrecoverable failure (EX_SOFTWARE).
const EX_SOFTWARE: u8 = 70;

/// Build a statistical travesty of a text file.
///
/// The result is written to `<input>.new` unless `--output` says otherwise.
#[derive(Parser, Debug)]
#[command(name = "travesty", version, about, long_about = None)]
struct Args {
	/// The source file for the travesty
	#[arg(short = 'f', long, env = "TRAVESTY_INPUT")]
	input: PathBuf,

	/// How many units make up a key (slice length minus one).
	///
	/// Note: a slice here is `depth + 1` units long, so `-d 10` matches
	/// `-d 11` of the classic travesty tools, which count the whole slice.
	#[arg(short, long, default_value_t = 10, env = "TRAVESTY_DEPTH")]
	depth: usize,

	/// Percent size of the travesty compared with the original
	#[arg(short = 'Z', long, default_value_t = 100, env = "TRAVESTY_SIZE")]
	size: u32,

	/// Work on characters or on word/punctuation tokens
	#[arg(short, long, default_value_t = Granularity::Character, env = "TRAVESTY_GRANULARITY")]
	granularity: Granularity,

	/// Format the output to 70 columns per line
	#[arg(long)]
	fmt: bool,

	/// Start a new paragraph about every N sentences (0 = never)
	#[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
	paragraphs: i64,

	/// Break paragraphs after exactly N sentences instead of around N
	#[arg(long)]
	exact_paragraphs: bool,

	/// Relative spread of the paragraph length around N
	#[arg(long, default_value_t = 0.25)]
	spread: f64,

	/// Keep the source text as is, without typographic clean-up
	#[arg(long)]
	no_scrub: bool,

	/// Seed for a reproducible travesty
	#[arg(long, env = "TRAVESTY_SEED")]
	seed: Option<u64>,

	/// Output file, `-` for standard output (default: <input>.new)
	#[arg(short, long)]
	output: Option<String>,
}

impl Args {
	/// Maps command-line flags onto run settings.
	fn settings(&self) -> Result<Settings, TravestyError> {
		let settings = Settings {
			granularity: self.granularity,
			depth: self.depth,
			size_percent: self.size,
			format: self.fmt,
			paragraph_period: self.paragraphs,
			paragraph_policy: if self.exact_paragraphs {
				ParagraphPolicy::Exact
			} else {
				ParagraphPolicy::Gaussian { spread: self.spread }
			},
			scrub: !self.no_scrub,
			seed: self.seed,
		};
		settings.validate()?;
		Ok(settings)
	}

	fn output_target(&self) -> OutputTarget {
		match &self.output {
			Some(value) => OutputTarget::parse(value),
			None => OutputTarget::File(default_output_path(&self.input)),
		}
	}
}

fn run(args: &Args) -> Result<(), TravestyError> {
	let settings = args.settings()?;

	// Ctrl-C only ends the walk; what was generated so far is still written
	let stop = Arc::new(AtomicBool::new(false));
	let flag = Arc::clone(&stop);
	if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
		warn!("Ctrl-C handler not installed: {e}");
	}

	let source = read_source(&args.input)?;
	let mut rng = match settings.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	let result = travesty(&source, &settings, &mut rng, &stop)?;
	if result.interrupted {
		info!("Stopping via control-c");
	}
	info!(
		"{} units generated from {} ({} restarts).",
		result.generated_units, result.source_units, result.restarts
	);

	let target = args.output_target();
	match &target {
		OutputTarget::Stdout => info!("Writing travesty to standard output"),
		OutputTarget::File(path) => info!("Writing travesty to {}", path.display()),
	}
	write_output(&target, &result.text)
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("travesty: {} failed: {e}", e.phase());
			ExitCode::from(EX_SOFTWARE)
		}
	}
}
