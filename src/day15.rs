// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::WarehouseError;


#[derive(Clone)]
struct Warehouse {
	tiles: Vec<Vec<u8>>,
	robot: [usize; 2],
	moves: Vec<[isize; 2]>,
}

impl Warehouse {
	fn widened(&self) -> Self {
		let tiles = self.tiles.iter()
			.map(|row| row.iter()
				.flat_map(|&t| match t {
					b'#' => *b"##",
					b'O' => *b"[]",
					b'@' => *b"@.",
					_ => *b"..",
				})
				.collect())
			.collect();
		let [x, y] = self.robot;
		Warehouse { tiles, robot: [2 * x, y], moves: self.moves.clone() }
	}

	/// Moves the robot one step, pushing every box in the way, unless
	/// something in the pushed cluster would hit a wall.
	fn step(&mut self, [dx, dy]: [isize; 2]) {
		let shifted = |[x, y]: [usize; 2]| [x.wrapping_add_signed(dx), y.wrapping_add_signed(dy)];

		let mut cluster = vec![self.robot];
		let mut i = 0;
		while let Some(&pos) = cluster.get(i) {
			i += 1;
			let next @ [nx, ny] = shifted(pos);
			let partner = match self.tiles[ny][nx] {
				b'#' => return,
				b'O' => None,
				b'[' if dy != 0 => Some([nx + 1, ny]),
				b']' if dy != 0 => Some([nx - 1, ny]),
				b'[' | b']' => None,
				_ => continue,
			};
			for p in std::iter::once(next).chain(partner) {
				if !cluster.contains(&p) { cluster.push(p) }
			}
		}

		let moved = cluster.iter().map(|&[x, y]| self.tiles[y][x]).collect::<Vec<_>>();
		for &[x, y] in &cluster { self.tiles[y][x] = b'.' }
		for (&pos, tile) in cluster.iter().zip(moved) {
			let [x, y] = shifted(pos);
			self.tiles[y][x] = tile;
		}
		self.robot = shifted(self.robot);
	}

	fn gps_sum_after_moves(mut self) -> usize {
		for dir in std::mem::take(&mut self.moves) { self.step(dir) }
		self.tiles.iter()
			.enumerate()
			.flat_map(|(y, row)| row.iter().enumerate()
				.filter(|&(_, &t)| t == b'O' || t == b'[')
				.map(move |(x, _)| 100 * y + x))
			.sum()
	}
}


fn part1_impl(warehouse: &Warehouse) -> usize {
	warehouse.clone().gps_sum_after_moves()
}

pub(crate) fn part1(input: &str) -> Result<usize, WarehouseError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(warehouse: &Warehouse) -> usize {
	warehouse.widened().gps_sum_after_moves()
}

pub(crate) fn part2(input: &str) -> Result<usize, WarehouseError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::Warehouse};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum WarehouseError {
		#[error("line {line}, column {column}: invalid tile {found:?}")]
		Tile { line: usize, column: usize, found: char },
		#[error("line {line}: expected {expected} tiles, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}: invalid move {found:?}")]
		Move { line: usize, found: char },
		#[error("the map is not enclosed by walls")]
		Unwalled,
		#[error("expected exactly one robot, found {found}")]
		Robots { found: usize },
	}

	impl FromStr for Warehouse {
		type Err = WarehouseError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines().enumerate();

			let mut tiles = Vec::new();
			let mut robots = Vec::new();
			let mut width = None;
			for (l, line) in lines.by_ref() {
				if line.is_empty() { break }
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected {
					return Err(WarehouseError::Width { line: l + 1, expected, found: line.len() })
				}
				let mut row = Vec::with_capacity(line.len());
				for (c, chr) in line.chars().enumerate() {
					match chr {
						'#' | 'O' | '.' => (),
						'@' => robots.push([c, l]),
						found => return Err(WarehouseError::Tile { line: l + 1, column: c + 1, found }),
					}
					row.push(chr as u8);
				}
				tiles.push(row);
			}
			let [robot] = robots[..] else { return Err(WarehouseError::Robots { found: robots.len() }) };

			let walled = |row: Option<&Vec<u8>>| row.is_some_and(|r| r.iter().all(|&t| t == b'#'));
			if !walled(tiles.first()) || !walled(tiles.last())
				|| !tiles.iter().all(|r| r.first() == Some(&b'#') && r.last() == Some(&b'#')) {
				return Err(WarehouseError::Unwalled)
			}

			let mut moves = Vec::new();
			for (l, line) in lines {
				for chr in line.chars() {
					moves.push(match chr {
						'^' => [0, -1],
						'v' => [0, 1],
						'<' => [-1, 0],
						'>' => [1, 0],
						found => return Err(WarehouseError::Move { line: l + 1, found }),
					});
				}
			}

			Ok(Warehouse { tiles, robot, moves })
		}
	}
}


#[test]
fn tests() {
	const SMALL: &str = indoc::indoc! { "
		########
		#..O.O.#
		##@.O..#
		#...O..#
		#.#.O..#
		#...O..#
		#......#
		########

		<^^>>>vv<v>>v<<
	" };
	const LARGE: &str = indoc::indoc! { "
		##########
		#..O..O.O#
		#......O.#
		#.OO..O.O#
		#..O@..O.#
		#O#..O...#
		#O..O..O.#
		#.OO.O.OO#
		#....O...#
		##########

		<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
		vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
		><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
		<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
		^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
		^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
		>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
		<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
		^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
		v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
	" };
	const WIDE: &str = indoc::indoc! { "
		#######
		#...#.#
		#.....#
		#..OO@#
		#..O..#
		#.....#
		#######

		<vv<<^^<<^^
	" };
	assert_eq!(part1_impl(&SMALL.parse().unwrap()), 2028);
	assert_eq!(part1_impl(&LARGE.parse().unwrap()), 10092);
	assert_eq!(part2_impl(&WIDE.parse().unwrap()), 618);
	assert_eq!(part2_impl(&LARGE.parse().unwrap()), 9021);
	assert!(matches!(part1("###\n#@#\n###\n\n<x"), Err(WarehouseError::Move { line: 5, found: 'x' })));
	assert!(matches!(part1("###\n#.#\n###\n\n<"), Err(WarehouseError::Robots { found: 0 })));
	assert!(matches!(part1("###\n#@.\n###\n\n<"), Err(WarehouseError::Unwalled)));
	assert!(matches!(part1("#####\n#..@#\n###\n\nv"), Err(WarehouseError::Width { line: 3, expected: 5, found: 3 })));
}
