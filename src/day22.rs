// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::SecretsError;


const STEPS: usize = 2000;
const PRUNE: u64 = (1 << 24) - 1;

/// Each buyer's secret number sequence, as pseudorandom as monkeys get.
fn next_secret(mut secret: u64) -> u64 {
	secret = (secret ^ (secret << 6)) & PRUNE;
	secret = (secret ^ (secret >> 5)) & PRUNE;
	(secret ^ (secret << 11)) & PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
	std::iter::successors(Some(seed), |&s| Some(next_secret(s))).take(STEPS + 1)
}


fn part1_impl(seeds: &[u64]) -> u64 {
	seeds.iter().filter_map(|&seed| secrets(seed).last()).sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, SecretsError> {
	Ok(part1_impl(&parsing::seeds(input)?))
}


/// Price changes range over -9..=9, so a window of four packs into a
/// base-19 index.
fn part2_impl(seeds: &[u64]) -> u64 {
	use itertools::Itertools as _;

	const WINDOWS: usize = 19 * 19 * 19 * 19;
	let mut bananas = vec![0u64; WINDOWS];
	let mut last_buyer = vec![usize::MAX; WINDOWS];
	for (buyer, &seed) in seeds.iter().enumerate() {
		let prices = secrets(seed).map(|s| (s % 10) as usize);
		for (a, b, c, d, e) in prices.tuple_windows() {
			let window = [b + 9 - a, c + 9 - b, d + 9 - c, e + 9 - d]
				.into_iter()
				.fold(0, |acc, change| acc * 19 + change);
			if last_buyer[window] == buyer { continue }
			last_buyer[window] = buyer;
			bananas[window] += e as u64;
		}
	}
	bananas.into_iter().max().unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<u64, SecretsError> {
	Ok(part2_impl(&parsing::seeds(input)?))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: invalid secret number: {source}")]
	pub(crate) struct SecretsError {
		pub(super) line: usize,
		pub(super) source: ParseIntError,
	}

	pub(super) fn seeds(s: &str) -> Result<Vec<u64>, SecretsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.trim().parse().map_err(|e| SecretsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	assert_eq!(secrets(123).skip(1).take(3).collect::<Vec<_>>(), [15887950, 16495136, 527345]);

	const INPUT1: &str = indoc::indoc! { "
		1
		10
		100
		2024
	" };
	assert_eq!(part1_impl(&parsing::seeds(INPUT1).unwrap()), 37327623);

	const INPUT2: &str = indoc::indoc! { "
		1
		2
		3
		2024
	" };
	assert_eq!(part2_impl(&parsing::seeds(INPUT2).unwrap()), 23);
	assert!(matches!(part1("1\n-2"), Err(SecretsError { line: 2, .. })));
}
