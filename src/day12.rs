// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::GardenError;


struct Garden {
	plants: Vec<u8>,
	width: isize,
	height: isize,
}

struct Region {
	area: usize,
	perimeter: usize,
	corners: usize,
}

impl Garden {
	fn plant(&self, [x, y]: [isize; 2]) -> Option<u8> {
		if !(0..self.width).contains(&x) || !(0..self.height).contains(&y) { return None }
		Some(self.plants[(y * self.width + x) as usize])
	}

	fn regions(&self) -> Vec<Region> {
		const ORTHOGONAL: [[isize; 2]; 4] = [[1, 0], [0, 1], [-1, 0], [0, -1]];
		const DIAGONAL: [[isize; 2]; 4] = [[1, 1], [1, -1], [-1, 1], [-1, -1]];

		let mut assigned = vec![false; self.plants.len()];
		let mut regions = Vec::new();
		for start in 0..self.plants.len() {
			if assigned[start] { continue }
			assigned[start] = true;
			let plant = self.plants[start];
			let same = |[x, y]: [isize; 2]| self.plant([x, y]) == Some(plant);

			let mut region = Region { area: 0, perimeter: 0, corners: 0 };
			let mut frontier = vec![[start as isize % self.width, start as isize / self.width]];
			while let Some([x, y]) = frontier.pop() {
				region.area += 1;
				for [dx, dy] in ORTHOGONAL {
					let next = [x + dx, y + dy];
					if !same(next) { region.perimeter += 1; continue }
					let i = (next[1] * self.width + next[0]) as usize;
					if !assigned[i] { assigned[i] = true; frontier.push(next) }
				}
				for [dx, dy] in DIAGONAL {
					let (h, v, d) = (same([x + dx, y]), same([x, y + dy]), same([x + dx, y + dy]));
					if (!h && !v) || (h && v && !d) { region.corners += 1 }
				}
			}
			regions.push(region);
		}
		regions
	}
}


fn part1_impl(garden: &Garden) -> usize {
	garden.regions().iter().map(|r| r.area * r.perimeter).sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, GardenError> {
	Ok(part1_impl(&input.parse()?))
}


/// A region has as many sides as it has corners.
fn part2_impl(garden: &Garden) -> usize {
	garden.regions().iter().map(|r| r.area * r.corners).sum()
}

pub(crate) fn part2(input: &str) -> Result<usize, GardenError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::Garden};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum GardenError {
		#[error("line {line}: expected {expected} plots, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid plant {found:?}")]
		Plant { line: usize, column: usize, found: char },
	}

	impl FromStr for Garden {
		type Err = GardenError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut plants = Vec::new();
			let mut width = None;
			let mut height = 0;
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(GardenError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					if !chr.is_ascii_alphabetic() {
						return Err(GardenError::Plant { line: l + 1, column: c + 1, found: chr })
					}
					plants.push(chr as u8);
				}
				height += 1;
			}
			Ok(Garden { plants, width: width.unwrap_or(0) as isize, height })
		}
	}
}


#[test]
fn tests() {
	const SMALL: &str = indoc::indoc! { "
		AAAA
		BBCD
		BBCC
		EEEC
	" };
	const NESTED: &str = indoc::indoc! { "
		OOOOO
		OXOXO
		OOOOO
		OXOXO
		OOOOO
	" };
	const LARGE: &str = indoc::indoc! { "
		RRRRIICCFF
		RRRRIICCCF
		VVRRRCCFFF
		VVRCCCJFFF
		VVVVCJJCFE
		VVIVCCJJEE
		VVIIICJJEE
		MIIIIIJJEE
		MIIISIJEEE
		MMMISSJEEE
	" };
	const E_SHAPE: &str = indoc::indoc! { "
		EEEEE
		EXXXX
		EEEEE
		EXXXX
		EEEEE
	" };
	const DIAGONAL: &str = indoc::indoc! { "
		AAAAAA
		AAABBA
		AAABBA
		ABBAAA
		ABBAAA
		AAAAAA
	" };
	assert_eq!(part1_impl(&SMALL.parse().unwrap()), 140);
	assert_eq!(part1_impl(&NESTED.parse().unwrap()), 772);
	assert_eq!(part1_impl(&LARGE.parse().unwrap()), 1930);
	assert_eq!(part2_impl(&SMALL.parse().unwrap()), 80);
	assert_eq!(part2_impl(&NESTED.parse().unwrap()), 436);
	assert_eq!(part2_impl(&E_SHAPE.parse().unwrap()), 236);
	assert_eq!(part2_impl(&DIAGONAL.parse().unwrap()), 368);
	assert_eq!(part2_impl(&LARGE.parse().unwrap()), 1206);
	assert!(matches!(part1("AB\nA1"), Err(GardenError::Plant { line: 2, column: 2, found: '1' })));
}
