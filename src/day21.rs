// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::CodeError;


/// A key's column and row on its keypad.
type Key = [isize; 2];

const NUMERIC_GAP: Key = [0, 3];
const NUMERIC_ACTIVATE: Key = [2, 3];

const DIRECTIONAL_GAP: Key = [0, 0];
const UP: Key = [1, 0];
const ACTIVATE: Key = [2, 0];
const LEFT: Key = [0, 1];
const DOWN: Key = [1, 1];
const RIGHT: Key = [2, 1];

struct Code {
	keys: Vec<Key>,
	value: u64,
}

/// Directional key sequences that move an arm from `from` to `to` and press
/// it, either leg first, skipping the one that would cross the `gap`.
fn routes(from: Key, to: Key, gap: Key) -> impl Iterator<Item = Vec<Key>> {
	let [dx, dy] = [to[0] - from[0], to[1] - from[1]];
	let h = std::iter::repeat(if dx > 0 { RIGHT } else { LEFT }).take(dx.unsigned_abs());
	let v = std::iter::repeat(if dy > 0 { DOWN } else { UP }).take(dy.unsigned_abs());
	let horizontal_first = ([to[0], from[1]] != gap)
		.then(|| h.clone().chain(v.clone()).chain([ACTIVATE]).collect::<Vec<_>>());
	let vertical_first = ([from[0], to[1]] != gap && dx != 0 && dy != 0)
		.then(|| v.chain(h).chain([ACTIVATE]).collect::<Vec<_>>());
	horizontal_first.into_iter().chain(vertical_first)
}

/// Presses needed on the outermost directional keypad, memoised per arm move
/// and number of directional robots in between.
#[derive(Default)]
struct Presses(std::collections::HashMap<(Key, Key, usize), u64>);

impl Presses {
	fn sequence(&mut self, keys: &[Key], robots: usize) -> u64 {
		if robots == 0 { return keys.len() as u64 }
		let mut from = ACTIVATE;
		let mut total = 0;
		for &to in keys {
			total += self.arm_move(from, to, robots);
			from = to;
		}
		total
	}

	fn arm_move(&mut self, from: Key, to: Key, robots: usize) -> u64 {
		if let Some(&presses) = self.0.get(&(from, to, robots)) { return presses }
		let presses = routes(from, to, DIRECTIONAL_GAP)
			.map(|route| self.sequence(&route, robots - 1))
			.min()
			.unwrap_or_default();
		self.0.insert((from, to, robots), presses);
		presses
	}

	fn code(&mut self, code: &Code, robots: usize) -> u64 {
		let mut from = NUMERIC_ACTIVATE;
		let mut total = 0;
		for &to in &code.keys {
			total += routes(from, to, NUMERIC_GAP)
				.map(|route| self.sequence(&route, robots))
				.min()
				.unwrap_or_default();
			from = to;
		}
		total
	}
}

fn complexities(codes: &[Code], robots: usize) -> u64 {
	let mut presses = Presses::default();
	codes.iter().map(|code| presses.code(code, robots) * code.value).sum()
}


fn part1_impl(codes: &[Code]) -> u64 {
	complexities(codes, 2)
}

pub(crate) fn part1(input: &str) -> Result<u64, CodeError> {
	Ok(part1_impl(&parsing::codes(input)?))
}


fn part2_impl(codes: &[Code]) -> u64 {
	complexities(codes, 25)
}

pub(crate) fn part2(input: &str) -> Result<u64, CodeError> {
	Ok(part2_impl(&parsing::codes(input)?))
}


mod parsing {
	use super::{Code, Key, NUMERIC_ACTIVATE};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CodeError {
		#[error("line {line}, column {column}: invalid key {found:?}")]
		Key { line: usize, column: usize, found: char },
		#[error("line {line}: empty code")]
		Empty { line: usize },
	}

	fn numeric_key(chr: char) -> Option<Key> {
		match chr {
			'A' => Some(NUMERIC_ACTIVATE),
			'0' => Some([1, 3]),
			_ => chr.to_digit(10).map(|d| [(d as isize - 1) % 3, 2 - (d as isize - 1) / 3]),
		}
	}

	pub(super) fn codes(s: &str) -> Result<Vec<Code>, CodeError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				if line.is_empty() { return Err(CodeError::Empty { line: l + 1 }) }
				let keys = line.chars()
					.enumerate()
					.map(|(c, chr)| numeric_key(chr)
						.ok_or(CodeError::Key { line: l + 1, column: c + 1, found: chr }))
					.collect::<Result<_, _>>()?;
				let value = line.chars()
					.filter_map(|chr| chr.to_digit(10))
					.fold(0, |acc, d| acc * 10 + d as u64);
				Ok(Code { keys, value })
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		029A
		980A
		179A
		456A
		379A
	" };
	let codes = parsing::codes(INPUT).unwrap();
	assert_eq!(codes[0].value, 29);
	assert_eq!(Presses::default().code(&codes[0], 0), "<A^A>^^AvvvA".len() as u64);
	assert_eq!(Presses::default().code(&codes[0], 1), "v<<A>>^A<A>AvA<^AA>A<vAAA>^A".len() as u64);
	assert_eq!(Presses::default().code(&codes[0], 2), 68);
	assert_eq!(part1_impl(&codes), 126384);
	assert_eq!(part2_impl(&codes), 154115708116294);
	assert!(matches!(part1("029B"), Err(CodeError::Key { line: 1, column: 4, found: 'B' })));
}
