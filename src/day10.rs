// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::TopoMapError;


struct TopoMap {
	heights: Vec<u8>,
	width: usize,
}

impl TopoMap {
	fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
		let (x, y) = (i % self.width, i / self.width);
		let height = self.heights.len() / self.width;
		[
			(x > 0).then(|| i - 1),
			(x + 1 < self.width).then(|| i + 1),
			(y > 0).then(|| i - self.width),
			(y + 1 < height).then(|| i + self.width),
		].into_iter().flatten()
	}

	fn trailheads(&self) -> impl Iterator<Item = usize> + '_ {
		self.heights.iter().enumerate().filter(|&(_, &h)| h == 0).map(|(i, _)| i)
	}

	/// Number of distinct hiking trails from each cell to any summit.
	fn ratings(&self) -> Vec<u64> {
		let mut ratings = vec![0; self.heights.len()];
		for height in (0..=9).rev() {
			for i in (0..self.heights.len()).filter(|&i| self.heights[i] == height) {
				ratings[i] = if height == 9 { 1 } else {
					self.neighbors(i).filter(|&j| self.heights[j] == height + 1).map(|j| ratings[j]).sum()
				};
			}
		}
		ratings
	}
}


fn part1_impl(map: &TopoMap) -> usize {
	map.trailheads()
		.map(|start| {
			let mut seen = std::collections::HashSet::from([start]);
			let mut frontier = vec![start];
			let mut summits = 0;
			while let Some(i) = frontier.pop() {
				if map.heights[i] == 9 { summits += 1; continue }
				for j in map.neighbors(i) {
					if map.heights[j] == map.heights[i] + 1 && seen.insert(j) { frontier.push(j) }
				}
			}
			summits
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, TopoMapError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(map: &TopoMap) -> u64 {
	let ratings = map.ratings();
	map.trailheads().map(|i| ratings[i]).sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, TopoMapError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::TopoMap};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum TopoMapError {
		#[error("line {line}: expected {expected} heights, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid height {found:?}")]
		Height { line: usize, column: usize, found: char },
	}

	impl FromStr for TopoMap {
		type Err = TopoMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = Vec::new();
			let mut width = None;
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(TopoMapError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					// Impassable tiles in hand-made maps
					let height = if chr == '.' { Some(u8::MAX) } else { chr.to_digit(10).map(|d| d as u8) };
					let Some(height) = height
						else { return Err(TopoMapError::Height { line: l + 1, column: c + 1, found: chr }) };
					heights.push(height);
				}
			}
			Ok(TopoMap { heights, width: width.unwrap_or(0).max(1) })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		89010123
		78121874
		87430965
		96549874
		45678903
		32019012
		01329801
		10456732
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()), 36);
	assert_eq!(part2_impl(&INPUT.parse().unwrap()), 81);

	const FORKED: &str = indoc::indoc! { "
		...0...
		...1...
		...2...
		6543456
		7.....7
		8.....8
		9.....9
	" };
	assert_eq!(part1(FORKED).unwrap(), 2);
	assert_eq!(part2(FORKED).unwrap(), 2);
	assert!(matches!(part1("01\n2x"), Err(TopoMapError::Height { line: 2, column: 2, found: 'x' })));
}
