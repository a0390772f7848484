// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::MapError;


struct Map {
	antennas: std::collections::HashMap<char, Vec<[isize; 2]>>,
	width: isize,
	height: isize,
}

impl Map {
	fn contains(&self, [x, y]: [isize; 2]) -> bool {
		(0..self.width).contains(&x) && (0..self.height).contains(&y)
	}

	fn count_antinodes<I>(&self, antinodes: impl Fn([isize; 2], [isize; 2]) -> I) -> usize
	where I: Iterator<Item = [isize; 2]> {
		use itertools::Itertools as _;

		self.antennas.values()
			.flat_map(|positions| positions.iter().tuple_combinations())
			.flat_map(|(&a, &b)| antinodes(a, b).chain(antinodes(b, a)))
			.filter(|&pos| self.contains(pos))
			.unique()
			.count()
	}
}


fn part1_impl(map: &Map) -> usize {
	map.count_antinodes(|[ax, ay], [bx, by]| std::iter::once([2 * bx - ax, 2 * by - ay]))
}

pub(crate) fn part1(input: &str) -> Result<usize, MapError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(map: &Map) -> usize {
	use num_integer::Integer as _;

	map.count_antinodes(move |[ax, ay], [bx, by]| {
		let (dx, dy) = (bx - ax, by - ay);
		let gcd = dx.gcd(&dy).max(1);
		let step = [dx / gcd, dy / gcd];
		(0..).map(move |n| [ax + n * step[0], ay + n * step[1]])
			.take_while(move |&pos| map.contains(pos))
	})
}

pub(crate) fn part2(input: &str) -> Result<usize, MapError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::Map};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MapError {
		#[error("line {line}: expected {expected} cells, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid frequency {found:?}")]
		Frequency { line: usize, column: usize, found: char },
	}

	impl FromStr for Map {
		type Err = MapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut antennas = std::collections::HashMap::<_, Vec<_>>::new();
			let mut width = None;
			let mut height = 0;
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(MapError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					match chr {
						'.' | '#' => (),
						chr if chr.is_ascii_alphanumeric() =>
							antennas.entry(chr).or_default().push([c as isize, l as isize]),
						found => return Err(MapError::Frequency { line: l + 1, column: c + 1, found }),
					}
				}
				height += 1;
			}
			Ok(Map { antennas, width: width.unwrap_or(0) as isize, height })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		............
		........0...
		.....0......
		.......0....
		....0.......
		......A.....
		............
		............
		........A...
		.........A..
		............
		............
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()), 14);
	assert_eq!(part2_impl(&INPUT.parse().unwrap()), 34);

	const T_INPUT: &str = indoc::indoc! { "
		T.........
		...T......
		.T........
		..........
		..........
		..........
		..........
		..........
		..........
		..........
	" };
	assert_eq!(part2_impl(&T_INPUT.parse().unwrap()), 9);
	assert!(matches!(part1("..\n.?"), Err(MapError::Frequency { line: 2, column: 2, found: '?' })));
}
