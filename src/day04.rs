// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::GridError;


struct Grid {
	letters: Vec<u8>,
	width: usize,
	height: usize,
}

impl Grid {
	fn get(&self, [x, y]: [isize; 2]) -> Option<u8> {
		if !(0..self.width as isize).contains(&x) || !(0..self.height as isize).contains(&y) { return None }
		Some(self.letters[y as usize * self.width + x as usize])
	}

	fn positions(&self) -> impl Iterator<Item = [isize; 2]> + '_ {
		(0..self.height as isize).flat_map(|y| (0..self.width as isize).map(move |x| [x, y]))
	}

	fn reads(&self, [x, y]: [isize; 2], [dx, dy]: [isize; 2], word: &[u8]) -> bool {
		word.iter().enumerate()
			.all(|(i, &l)| self.get([x + dx * i as isize, y + dy * i as isize]) == Some(l))
	}
}


fn part1_impl(grid: &Grid) -> usize {
	use itertools::Itertools as _;

	let dirs = (-1..=1).cartesian_product(-1..=1)
		.filter(|&d| d != (0, 0))
		.map(|(dx, dy)| [dx, dy])
		.collect::<Vec<_>>();
	grid.positions()
		.map(|pos| dirs.iter().filter(|&&dir| grid.reads(pos, dir, b"XMAS")).count())
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, GridError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(grid: &Grid) -> usize {
	let is_mas = |from, dir| grid.reads(from, dir, b"MAS") || grid.reads(from, dir, b"SAM");
	grid.positions()
		.filter(|&[x, y]| grid.get([x, y]) == Some(b'A')
			&& is_mas([x - 1, y - 1], [1, 1])
			&& is_mas([x - 1, y + 1], [1, -1]))
		.count()
}

pub(crate) fn part2(input: &str) -> Result<usize, GridError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::Grid};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum GridError {
		#[error("empty grid")]
		Empty,
		#[error("line {line}: expected {expected} letters, found {found}")]
		Width { line: usize, expected: usize, found: usize },
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut letters = Vec::new();
			let mut width = None;
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(GridError::Width { line: l + 1, expected, found: line.len() })
				}
				letters.extend_from_slice(line.as_bytes());
			}
			let Some(width) = width.filter(|&w| w > 0) else { return Err(GridError::Empty) };
			Ok(Grid { height: letters.len() / width, letters, width })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		MMMSXXMASM
		MSAMXMSMSA
		AMXSXMAAMM
		MSAMASMSMX
		XMASAMXAMM
		XXAMMXXAMA
		SMSMSASXSS
		SAXAMASAAA
		MAMMMXMMMM
		MXMXAXMASX
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()), 18);
	assert_eq!(part2_impl(&INPUT.parse().unwrap()), 9);
	assert!(matches!(part1(""), Err(GridError::Empty)));
	assert!(matches!(part2("XMAS\nXM"), Err(GridError::Width { line: 2, expected: 4, found: 2 })));
}
