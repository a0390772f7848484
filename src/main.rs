// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Display, io, path::{Path, PathBuf}, process::ExitCode, time::{Duration, Instant}};


type BoxedError = Box<dyn std::error::Error + Send + Sync>;


macro_rules! days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	const DAYS: &[u8] = &[$( $day ),*];

	/// Runs both parts of `day`, returning whether both produced an answer.
	fn run_day(day: u8, input: &str) -> bool {
		match day {
			$( $day => {
				let part1 = report(day, 1, timed(|| [<day $day>]::part1(input)));
				let part2 = report(day, 2, timed(|| [<day $day>]::part2(input)));
				part1 && part2
			} )*
			_ => {
				log::error!("No solution for day {day}");
				false
			}
		}
	}
} } }

days!(01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25);


fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
	let start = Instant::now();
	let res = f();
	(res, start.elapsed())
}

fn report<A, E>(day: u8, part: u8, (res, elapsed): (Result<A, E>, Duration)) -> bool
where A: Display, E: Into<BoxedError> {
	match res {
		Ok(answer) => {
			println!("Day {day:02} part {part}: {answer} ({elapsed:.5?})");
			true
		}
		Err(err) => {
			let err: BoxedError = err.into();
			log::error!("Day {day:02} part {part} failed after {elapsed:.5?}: {err}");
			false
		}
	}
}


#[derive(clap::Parser, Debug)]
#[command(name = "advent24", about = "Advent of Code 2024 solutions", version)]
struct Args {
	/// Days to run (runs every day with an input file if omitted)
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	days: Vec<u8>,

	/// Directory containing the `dayNN.txt` puzzle inputs
	#[arg(short, long, env = "ADVENT24_INPUTS", default_value = "inputs")]
	inputs: PathBuf,
}


/// Runs `days` (every day when empty) on the inputs found in `inputs`. Missing
/// inputs are skipped unless the days were asked for explicitly. Returns
/// whether every day that ran succeeded.
fn run_days(days: &[u8], inputs: &Path) -> bool {
	let explicit = !days.is_empty();
	let days = if explicit { days } else { DAYS };

	let mut all_ok = true;
	for &day in days {
		let path = inputs.join(format!("day{day:02}.txt"));
		let input = match std::fs::read_to_string(&path) {
			Ok(input) => input,
			Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
				log::warn!("Skipping day {day:02}: no input at {}", path.display());
				continue
			}
			Err(err) => {
				log::error!("Day {day:02}: failed to read {}: {err}", path.display());
				all_ok = false;
				continue
			}
		};
		all_ok &= run_day(day, &input);
	}
	all_ok
}


fn main() -> ExitCode {
	use clap::Parser as _;

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	if run_days(&args.days, &args.inputs) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}


#[test]
fn tests() {
	let (answer, _) = timed(|| 6 * 7);
	assert_eq!(answer, 42);
	assert!(report(1, 1, (Ok::<_, std::num::ParseIntError>(42), Duration::ZERO)));
	assert!(!report(1, 2, ("x".parse::<u8>(), Duration::ZERO)));
	assert!(!run_day(26, ""));

	let inputs = tempfile::TempDir::new().unwrap();
	assert!(run_days(&[], inputs.path()));
	assert!(!run_days(&[1], inputs.path()));

	std::fs::write(inputs.path().join("day01.txt"), "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n").unwrap();
	assert!(run_days(&[1], inputs.path()));
	assert!(run_days(&[], inputs.path()));

	std::fs::write(inputs.path().join("day02.txt"), "1 2 x\n").unwrap();
	assert!(!run_days(&[2], inputs.path()));
	assert!(!run_days(&[], inputs.path()));
}
