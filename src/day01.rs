// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::ListsError;


struct Lists {
	left: Vec<u32>,
	right: Vec<u32>,
}


fn part1_impl(lists: &Lists) -> u64 {
	let mut left = lists.left.clone();
	let mut right = lists.right.clone();
	left.sort_unstable();
	right.sort_unstable();
	left.iter()
		.zip(&right)
		.map(|(&l, &r)| l.abs_diff(r) as u64)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, ListsError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(lists: &Lists) -> u64 {
	use itertools::Itertools as _;

	let right_counts = lists.right.iter().counts();
	lists.left.iter()
		.map(|id| *id as u64 * right_counts.get(id).copied().unwrap_or(0) as u64)
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, ListsError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Lists};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ListsError {
		#[error("line {line}: expected two location IDs")]
		Format { line: usize },
		#[error("line {line}: invalid location ID: {source}")]
		Id { line: usize, source: ParseIntError },
	}

	impl FromStr for Lists {
		type Err = ListsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lists = Lists { left: Vec::new(), right: Vec::new() };
			for (l, line) in s.lines().enumerate() {
				let mut ids = line.split_whitespace();
				let (Some(left), Some(right), None) = (ids.next(), ids.next(), ids.next())
					else { return Err(ListsError::Format { line: l + 1 }) };
				let parse = |id: &str| id.parse()
					.map_err(|e| ListsError::Id { line: l + 1, source: e });
				lists.left.push(parse(left)?);
				lists.right.push(parse(right)?);
			}
			Ok(lists)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		3   4
		4   3
		2   5
		1   3
		3   9
		3   3
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()), 11);
	assert_eq!(part2_impl(&INPUT.parse().unwrap()), 31);
	assert!(matches!(part1("3 4 5"), Err(ListsError::Format { line: 1 })));
	assert!(matches!(part2("3   4\nx   1"), Err(ListsError::Id { line: 2, .. })));
}
