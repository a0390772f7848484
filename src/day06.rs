// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::LabError;


#[derive(Clone, Copy, PartialEq, Eq)]
enum Dir { Up, Right, Down, Left }

impl Dir {
	fn turned_right(self) -> Self {
		match self { Dir::Up => Dir::Right, Dir::Right => Dir::Down, Dir::Down => Dir::Left, Dir::Left => Dir::Up }
	}

	fn delta(self) -> [isize; 2] {
		match self { Dir::Up => [0, -1], Dir::Right => [1, 0], Dir::Down => [0, 1], Dir::Left => [-1, 0] }
	}

	fn bit(self) -> u8 {
		1 << self as u8
	}
}

struct Lab {
	obstacles: Vec<bool>,
	width: usize,
	height: usize,
	start: ([isize; 2], Dir),
}

enum Walk {
	Exits(Vec<bool>),
	Loops,
}

impl Lab {
	fn index(&self, [x, y]: [isize; 2]) -> Option<usize> {
		if !(0..self.width as isize).contains(&x) || !(0..self.height as isize).contains(&y) { return None }
		Some(y as usize * self.width + x as usize)
	}

	/// Walks the guard from the start, optionally with one extra obstacle
	/// at `extra`. Remembers the directions each cell was left in, so
	/// revisiting a cell in the same direction means a loop.
	fn walk(&self, extra: Option<usize>) -> Walk {
		let mut seen = vec![0u8; self.obstacles.len()];
		let (mut pos, mut dir) = self.start;
		let Some(mut i) = self.index(pos) else { return Walk::Exits(vec![]) };
		loop {
			if seen[i] & dir.bit() != 0 { return Walk::Loops }
			seen[i] |= dir.bit();

			let [dx, dy] = dir.delta();
			let next = [pos[0] + dx, pos[1] + dy];
			let Some(j) = self.index(next) else {
				return Walk::Exits(seen.into_iter().map(|s| s != 0).collect())
			};
			if self.obstacles[j] || extra == Some(j) {
				dir = dir.turned_right();
			} else {
				(pos, i) = (next, j);
			}
		}
	}

	fn route(&self) -> Vec<bool> {
		match self.walk(None) {
			Walk::Exits(visited) => visited,
			Walk::Loops => vec![],
		}
	}
}


fn part1_impl(lab: &Lab) -> usize {
	lab.route().into_iter().filter(|&v| v).count()
}

pub(crate) fn part1(input: &str) -> Result<usize, LabError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(lab: &Lab) -> usize {
	use rayon::prelude::*;

	let start = lab.index(lab.start.0);
	let candidates = lab.route().into_iter()
		.enumerate()
		.filter(|&(i, visited)| visited && Some(i) != start)
		.map(|(i, _)| i)
		.collect::<Vec<_>>();
	candidates.par_iter()
		.filter(|&&i| matches!(lab.walk(Some(i)), Walk::Loops))
		.count()
}

pub(crate) fn part2(input: &str) -> Result<usize, LabError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::{Dir, Lab}};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum LabError {
		#[error("line {line}: expected {expected} cells, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid cell {found:?}")]
		Cell { line: usize, column: usize, found: char },
		#[error("line {line}, column {column}: second guard")]
		SecondGuard { line: usize, column: usize },
		#[error("no guard")]
		NoGuard,
	}

	impl FromStr for Lab {
		type Err = LabError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut obstacles = Vec::new();
			let mut width = None;
			let mut start = None;
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(LabError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					let dir = match chr {
						'.' => None,
						'#' => { obstacles.push(true); continue }
						'^' => Some(Dir::Up),
						'>' => Some(Dir::Right),
						'v' => Some(Dir::Down),
						'<' => Some(Dir::Left),
						found => return Err(LabError::Cell { line: l + 1, column: c + 1, found }),
					};
					if let Some(dir) = dir {
						if start.is_some() { return Err(LabError::SecondGuard { line: l + 1, column: c + 1 }) }
						start = Some(([c as isize, l as isize], dir));
					}
					obstacles.push(false);
				}
			}
			let Some(start) = start else { return Err(LabError::NoGuard) };
			let width = width.unwrap_or(0);
			Ok(Lab { height: obstacles.len() / width, obstacles, width, start })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		....#.....
		.........#
		..........
		..#.......
		.......#..
		..........
		.#..^.....
		........#.
		#.........
		......#...
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()), 41);
	assert_eq!(part2_impl(&INPUT.parse().unwrap()), 6);
	assert_eq!(part1(".>.\n...").unwrap(), 2);
	assert!(matches!(part1("..\n.."), Err(LabError::NoGuard)));
	assert!(matches!(part1("^.\n.^"), Err(LabError::SecondGuard { line: 2, column: 2 })));
	assert!(matches!(part2("^x"), Err(LabError::Cell { line: 1, column: 2, found: 'x' })));
}
