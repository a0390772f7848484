// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::MazeError;


const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

/// East, south, west, north; turning is ±1 modulo 4.
const DIRS: [[isize; 2]; 4] = [[1, 0], [0, 1], [-1, 0], [0, -1]];

struct Maze {
	walls: Vec<bool>,
	width: usize,
	start: usize,
	end: usize,
}

impl Maze {
	fn step(&self, node: usize, dir: usize, backwards: bool) -> Option<usize> {
		let [dx, dy] = DIRS[dir];
		let (dx, dy) = if backwards { (-dx, -dy) } else { (dx, dy) };
		let x = (node % self.width).checked_add_signed(dx)?;
		let y = (node / self.width).checked_add_signed(dy)?;
		if x >= self.width { return None }
		let next = y * self.width + x;
		(next < self.walls.len() && !self.walls[next]).then_some(next)
	}

	/// Lowest cost to reach every `(tile, facing)` state from `sources`,
	/// indexed by `tile * 4 + facing`. Walking `backwards` gives the cost
	/// from every state to the sources instead.
	fn costs(&self, sources: impl IntoIterator<Item = (usize, usize)>, backwards: bool) -> Vec<Option<u64>> {
		use std::collections::BinaryHeap;

		#[derive(PartialEq, Eq)]
		struct State {
			cost: u64,
			node: usize,
			dir: usize,
		}

		impl PartialOrd for State {
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for State {
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				self.cost.cmp(&other.cost).reverse()
					.then_with(|| self.node.cmp(&other.node))
					.then_with(|| self.dir.cmp(&other.dir))
			}
		}

		let mut costs = vec![None; self.walls.len() * 4];
		let mut heap = BinaryHeap::new();
		for (node, dir) in sources {
			costs[node * 4 + dir] = Some(0);
			heap.push(State { cost: 0, node, dir });
		}

		while let Some(State { cost, node, dir }) = heap.pop() {
			if costs[node * 4 + dir].is_some_and(|c| c < cost) { continue }
			let moves = [(dir + 1) % 4, (dir + 3) % 4].map(|d| Some((node, d, cost + TURN_COST)));
			let forward = self.step(node, dir, backwards).map(|n| (n, dir, cost + STEP_COST));
			for (node, dir, cost) in moves.into_iter().chain([forward]).flatten() {
				let known = &mut costs[node * 4 + dir];
				if known.is_some_and(|c| c <= cost) { continue }
				*known = Some(cost);
				heap.push(State { cost, node, dir });
			}
		}

		costs
	}
}


fn part1_impl(maze: &Maze) -> Option<u64> {
	let costs = maze.costs([(maze.start, 0)], false);
	(0..4).filter_map(|dir| costs[maze.end * 4 + dir]).min()
}

pub(crate) fn part1(input: &str) -> Result<u64, MazeError> {
	part1_impl(&input.parse()?).ok_or(MazeError::Unreachable)
}


fn part2_impl(maze: &Maze) -> Option<usize> {
	let forward = maze.costs([(maze.start, 0)], false);
	let best = (0..4).filter_map(|dir| forward[maze.end * 4 + dir]).min()?;
	let end_states = (0..4).filter(|&dir| forward[maze.end * 4 + dir] == Some(best)).map(|dir| (maze.end, dir));
	let backward = maze.costs(end_states.collect::<Vec<_>>(), true);

	Some((0..maze.walls.len())
		.filter(|&node| (0..4).any(|dir| {
			let i = node * 4 + dir;
			matches!((forward[i], backward[i]), (Some(f), Some(b)) if f + b == best)
		}))
		.count())
}

pub(crate) fn part2(input: &str) -> Result<usize, MazeError> {
	part2_impl(&input.parse()?).ok_or(MazeError::Unreachable)
}


mod parsing {
	use {std::str::FromStr, super::Maze};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MazeError {
		#[error("line {line}: expected {expected} tiles, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid tile {found:?}")]
		Tile { line: usize, column: usize, found: char },
		#[error("missing or repeated {0:?} tile")]
		Endpoint(char),
		#[error("the end tile cannot be reached")]
		Unreachable,
	}

	impl FromStr for Maze {
		type Err = MazeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut walls = Vec::new();
			let mut width = None;
			let (mut start, mut end) = (None, None);
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(MazeError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					let slot = match chr {
						'#' | '.' => None,
						'S' => Some((&mut start, 'S')),
						'E' => Some((&mut end, 'E')),
						found => return Err(MazeError::Tile { line: l + 1, column: c + 1, found }),
					};
					if let Some((slot, chr)) = slot {
						if slot.replace(walls.len()).is_some() { return Err(MazeError::Endpoint(chr)) }
					}
					walls.push(chr == '#');
				}
			}
			let start = start.ok_or(MazeError::Endpoint('S'))?;
			let end = end.ok_or(MazeError::Endpoint('E'))?;
			Ok(Maze { walls, width: width.unwrap_or(0), start, end })
		}
	}
}


#[test]
fn tests() {
	const FIRST: &str = indoc::indoc! { "
		###############
		#.......#....E#
		#.#.###.#.###.#
		#.....#.#...#.#
		#.###.#####.#.#
		#.#.#.......#.#
		#.#.#####.###.#
		#...........#.#
		###.#.#####.#.#
		#...#.....#.#.#
		#.#.#.###.#.#.#
		#.....#...#.#.#
		#.###.#.#.#.#.#
		#S..#.....#...#
		###############
	" };
	const SECOND: &str = indoc::indoc! { "
		#################
		#...#...#...#..E#
		#.#.#.#.#.#.#.#.#
		#.#.#.#...#...#.#
		#.#.#.#.###.#.#.#
		#...#.#.#.....#.#
		#.#.#.#.#.#####.#
		#.#...#.#.#.....#
		#.#.#####.#.###.#
		#.#.#.......#...#
		#.#.###.#####.###
		#.#.#...#.....#.#
		#.#.#.#####.###.#
		#.#.#.........#.#
		#.#.#.#########.#
		#S#.............#
		#################
	" };
	assert_eq!(part1_impl(&FIRST.parse().unwrap()), Some(7036));
	assert_eq!(part1_impl(&SECOND.parse().unwrap()), Some(11048));
	assert_eq!(part2_impl(&FIRST.parse().unwrap()), Some(45));
	assert_eq!(part2_impl(&SECOND.parse().unwrap()), Some(64));
	assert_eq!(part1("S.E").unwrap(), 2);
	assert_eq!(part2("E.S").unwrap(), 3);
	assert!(matches!(part1("S#E"), Err(MazeError::Unreachable)));
	assert!(matches!(part2("S.S.E"), Err(MazeError::Endpoint('S'))));
}
