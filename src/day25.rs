// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::SchematicError;


const WIDTH: usize = 5;
const HEIGHT: usize = 7;

/// Pin or key heights per column, not counting the solid row.
type Heights = [u8; WIDTH];

struct Schematics {
	locks: Vec<Heights>,
	keys: Vec<Heights>,
}


fn part1_impl(schematics: &Schematics) -> usize {
	use itertools::Itertools as _;

	schematics.locks.iter()
		.cartesian_product(&schematics.keys)
		.filter(|(lock, key)| lock.iter().zip(key.iter()).all(|(l, k)| (l + k) as usize <= HEIGHT - 2))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, SchematicError> {
	Ok(part1_impl(&input.parse()?))
}


pub(crate) fn part2(_input: &str) -> Result<&'static str, std::convert::Infallible> {
	Ok("Christmas has been saved!")
}


mod parsing {
	use {std::str::FromStr, super::{Heights, Schematics, HEIGHT, WIDTH}};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum SchematicError {
		#[error("schematic {index}: expected 7 rows of 5 `#` or `.`")]
		Shape { index: usize },
	}

	impl FromStr for Schematics {
		type Err = SchematicError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.replace("\r\n", "\n");
			let mut schematics = Schematics { locks: Vec::new(), keys: Vec::new() };
			for (i, block) in s.split("\n\n").filter(|b| !b.trim().is_empty()).enumerate() {
				let rows = block.lines().map(str::as_bytes).collect::<Vec<_>>();
				if rows.len() != HEIGHT || rows.iter().any(|r| r.len() != WIDTH || r.iter().any(|b| !b"#.".contains(b))) {
					return Err(SchematicError::Shape { index: i + 1 })
				}
				let mut heights: Heights = [0; WIDTH];
				for (c, height) in heights.iter_mut().enumerate() {
					*height = rows.iter().filter(|r| r[c] == b'#').count().saturating_sub(1) as u8;
				}
				let is_lock = rows[0].iter().all(|&b| b == b'#');
				if is_lock { schematics.locks.push(heights) } else { schematics.keys.push(heights) }
			}
			Ok(schematics)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#####
		.####
		.####
		.####
		.#.#.
		.#...
		.....

		#####
		##.##
		.#.##
		...##
		...#.
		...#.
		.....

		.....
		#....
		#....
		#...#
		#.#.#
		#.###
		#####

		.....
		.....
		#.#..
		###..
		###.#
		###.#
		#####

		.....
		.....
		.....
		#....
		#.#..
		#.#.#
		#####
	" };
	let schematics: Schematics = INPUT.parse().unwrap();
	assert_eq!(schematics.locks[0], [0, 5, 3, 4, 3]);
	assert_eq!(schematics.keys[0], [5, 0, 2, 1, 3]);
	assert_eq!(part1_impl(&schematics), 3);
	assert_eq!(part2(INPUT).unwrap(), "Christmas has been saved!");
	assert!(matches!(part1("#####\n....."), Err(SchematicError::Shape { index: 1 })));
}
