// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::RacetrackError;


const MIN_SAVING: usize = 100;

/// The racetrack's single path from start to end, with each position's
/// index along it.
struct Racetrack {
	path: Vec<[isize; 2]>,
	index: std::collections::HashMap<[isize; 2], usize>,
}

impl Racetrack {
	/// Counts cheats of at most `max_cheat` picoseconds that save at least
	/// `min_saving` picoseconds.
	fn count_cheats(&self, max_cheat: isize, min_saving: usize) -> usize {
		let offsets = (-max_cheat..=max_cheat)
			.flat_map(|dx| {
				let rest = max_cheat - dx.abs();
				(-rest..=rest).map(move |dy| [dx, dy])
			})
			.filter(|&[dx, dy]| dx.abs() + dy.abs() >= 2)
			.collect::<Vec<_>>();

		self.path.iter()
			.enumerate()
			.map(|(i, &[x, y])| offsets.iter()
				.filter(|&&[dx, dy]| {
					let Some(&j) = self.index.get(&[x + dx, y + dy]) else { return false };
					let dist = (dx.abs() + dy.abs()) as usize;
					j > i + dist && j - i - dist >= min_saving
				})
				.count())
			.sum()
	}
}


fn part1_impl(track: &Racetrack, min_saving: usize) -> usize {
	track.count_cheats(2, min_saving)
}

pub(crate) fn part1(input: &str) -> Result<usize, RacetrackError> {
	Ok(part1_impl(&input.parse()?, MIN_SAVING))
}


fn part2_impl(track: &Racetrack, min_saving: usize) -> usize {
	track.count_cheats(20, min_saving)
}

pub(crate) fn part2(input: &str) -> Result<usize, RacetrackError> {
	Ok(part2_impl(&input.parse()?, MIN_SAVING))
}


mod parsing {
	use {std::{collections::{HashMap, HashSet}, str::FromStr}, super::Racetrack};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RacetrackError {
		#[error("line {line}, column {column}: invalid tile {found:?}")]
		Tile { line: usize, column: usize, found: char },
		#[error("missing or repeated {0:?} tile")]
		Endpoint(char),
		#[error("the track forks or dead-ends at ({x}, {y})")]
		NotSinglePath { x: isize, y: isize },
	}

	impl FromStr for Racetrack {
		type Err = RacetrackError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut open = HashSet::new();
			let (mut start, mut end) = (None, None);
			for (l, line) in s.lines().enumerate() {
				for (c, chr) in line.chars().enumerate() {
					let pos = [c as isize, l as isize];
					let slot = match chr {
						'#' => continue,
						'.' => None,
						'S' => Some((&mut start, 'S')),
						'E' => Some((&mut end, 'E')),
						found => return Err(RacetrackError::Tile { line: l + 1, column: c + 1, found }),
					};
					if let Some((slot, chr)) = slot {
						if slot.replace(pos).is_some() { return Err(RacetrackError::Endpoint(chr)) }
					}
					open.insert(pos);
				}
			}
			let start = start.ok_or(RacetrackError::Endpoint('S'))?;
			let end = end.ok_or(RacetrackError::Endpoint('E'))?;

			let mut path = vec![start];
			let mut prev = None;
			let mut pos = start;
			while pos != end {
				let [x, y] = pos;
				let mut next = [[x + 1, y], [x - 1, y], [x, y + 1], [x, y - 1]].into_iter()
					.filter(|p| Some(*p) != prev && open.contains(p));
				let (Some(step), None) = (next.next(), next.next())
					else { return Err(RacetrackError::NotSinglePath { x, y }) };
				prev = Some(pos);
				pos = step;
				path.push(pos);
			}

			let index = path.iter().enumerate().map(|(i, &p)| (p, i)).collect::<HashMap<_, _>>();
			Ok(Racetrack { path, index })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		###############
		#...#...#.....#
		#.#.#.#.#.###.#
		#S#...#.#.#...#
		#######.#.#.###
		#######.#.#...#
		#######.#.###.#
		###..E#...#...#
		###.#######.###
		#...###...#...#
		#.#####.#.###.#
		#.#...#.#.#...#
		#.#.#.#.#.#.###
		#...#...#...###
		###############
	" };
	let track: Racetrack = INPUT.parse().unwrap();
	assert_eq!(part1_impl(&track, 1), 44);
	assert_eq!(part1_impl(&track, 64), 1);
	assert_eq!(part2_impl(&track, 50), 285);
	assert_eq!(part2_impl(&track, 76), 3);
	assert!(matches!(part1("S..\n.E."), Err(RacetrackError::NotSinglePath { x: 0, y: 0 })));
}
