// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use elf_diffusion::Diffusion;


const DEFAULT_ROUNDS: usize = 10;
const DEFAULT_PADDING: usize = 10;
const DEFAULT_STABLE_PADDING: usize = 64;
const DEFAULT_MAX_ROUNDS: usize = 10_000;

const USAGE: &str = "Usage: elf-diffusion [PATH|-] [--rounds N] [--padding N] [--stable] [--max-rounds N] [--print]";


#[derive(Debug, PartialEq, Eq)]
struct Args {
	path: Option<String>,
	rounds: usize,
	padding: Option<usize>,
	stable: bool,
	max_rounds: usize,
	print: bool,
}

impl Default for Args {
	fn default() -> Self {
		Self {
			path: None,
			rounds: DEFAULT_ROUNDS,
			padding: None,
			stable: false,
			max_rounds: DEFAULT_MAX_ROUNDS,
			print: false,
		}
	}
}

impl Args {
	/// Padding must at least cover the number of rounds simulated, as the grid never grows.
	fn padding(&self) -> usize {
		self.padding.unwrap_or_else(|| {
			let default = if self.stable { DEFAULT_STABLE_PADDING } else { DEFAULT_PADDING };
			default.max(self.rounds)
		})
	}
}

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
	Unknown(String),
	MissingValue(&'static str),
	Value { arg: &'static str, source: std::num::ParseIntError },
}

impl std::fmt::Display for ArgsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ArgsError::Unknown(arg) => write!(f, "Unexpected argument {arg:?}")?,
			ArgsError::MissingValue(arg) => write!(f, "Missing value for {arg}")?,
			ArgsError::Value { arg, source } => write!(f, "Invalid value for {arg}: {source}")?,
		}
		write!(f, "\n{USAGE}")
	}
}

impl std::error::Error for ArgsError {}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, ArgsError> {
	use ArgsError as E;

	let mut parsed = Args::default();
	let mut args = args.into_iter();

	while let Some(arg) = args.next() {
		macro_rules! value { ( $name:literal ) => {
			args.next().ok_or(E::MissingValue($name))?
				.parse().map_err(|source| E::Value { arg: $name, source })?
		} }

		match arg.as_str() {
			"--rounds" => parsed.rounds = value!("--rounds"),
			"--padding" => parsed.padding = Some(value!("--padding")),
			"--max-rounds" => parsed.max_rounds = value!("--max-rounds"),
			"--stable" => parsed.stable = true,
			"--print" => parsed.print = true,
			"-" if parsed.path.is_none() => (),
			a if a.starts_with("--") || parsed.path.is_some() => return Err(E::Unknown(a.to_owned())),
			a => parsed.path = Some(a.to_owned()),
		}
	}

	Ok(parsed)
}


fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = parse_args(std::env::args().skip(1))?;

	let input = match &args.path {
		Some(path) => std::fs::read_to_string(path)?,
		None => std::io::read_to_string(std::io::stdin())?,
	};
	let diffusion = Diffusion::try_from_str_padded(&input, args.padding())?;

	let after = diffusion.clone().advance(args.rounds);
	if args.print {
		println!("{}", after.cropped());
	} else {
		println!("Empty ground after {} rounds: {}", args.rounds, after.empty_cells_in_bounding_box()?);
	}

	if args.stable {
		match diffusion.first_stable_round(args.max_rounds) {
			Some(t) => println!("First round without moves: {t}"),
			None => println!("Still moving after {} rounds", args.max_rounds),
		}
	}

	Ok(())
}
