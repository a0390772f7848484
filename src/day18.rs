// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::BytesError;


const SIZE: usize = 71;
const FALLEN: usize = 1024;

/// Shortest path length across a `size`×`size` memory space from the top-left
/// to the bottom-right corner, avoiding the first `fallen` bytes.
fn shortest_path(bytes: &[[usize; 2]], size: usize, fallen: usize) -> Option<usize> {
	let mut corrupted = vec![false; size * size];
	for &[x, y] in &bytes[..fallen.min(bytes.len())] { corrupted[y * size + x] = true }
	if corrupted[0] { return None }

	let mut steps = vec![None; size * size];
	steps[0] = Some(0);
	let mut queue = std::collections::VecDeque::from([0]);
	while let Some(i) = queue.pop_front() {
		let Some(n) = steps[i] else { continue };
		if i == size * size - 1 { return Some(n) }
		let (x, y) = (i % size, i / size);
		let neighbors = [
			(x > 0).then(|| i - 1),
			(x + 1 < size).then(|| i + 1),
			(y > 0).then(|| i - size),
			(y + 1 < size).then(|| i + size),
		];
		for j in neighbors.into_iter().flatten() {
			if corrupted[j] || steps[j].is_some() { continue }
			steps[j] = Some(n + 1);
			queue.push_back(j);
		}
	}
	None
}


fn part1_impl(bytes: &[[usize; 2]], size: usize, fallen: usize) -> Option<usize> {
	shortest_path(bytes, size, fallen)
}

pub(crate) fn part1(input: &str) -> Result<usize, BytesError> {
	let bytes = parsing::bytes(input, SIZE)?;
	part1_impl(&bytes, SIZE, FALLEN).ok_or(BytesError::Blocked)
}


/// Binary search for the fewest fallen bytes that cut off the exit.
fn part2_impl(bytes: &[[usize; 2]], size: usize) -> Option<[usize; 2]> {
	let (mut reachable, mut blocked) = (0, bytes.len());
	if shortest_path(bytes, size, blocked).is_some() { return None }
	while blocked - reachable > 1 {
		let mid = (reachable + blocked) / 2;
		if shortest_path(bytes, size, mid).is_some() { reachable = mid } else { blocked = mid }
	}
	Some(bytes[blocked - 1])
}

pub(crate) fn part2(input: &str) -> Result<String, BytesError> {
	let bytes = parsing::bytes(input, SIZE)?;
	let [x, y] = part2_impl(&bytes, SIZE).ok_or(BytesError::NeverBlocked)?;
	Ok(format!("{x},{y}"))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum BytesError {
		#[error("line {line}: expected `x,y`")]
		Format { line: usize },
		#[error("line {line}: invalid coordinate: {source}")]
		Coordinate { line: usize, source: ParseIntError },
		#[error("line {line}: ({x}, {y}) is outside the memory space")]
		OutOfBounds { line: usize, x: usize, y: usize },
		#[error("the exit cannot be reached")]
		Blocked,
		#[error("the exit stays reachable after every byte")]
		NeverBlocked,
	}

	pub(super) fn bytes(s: &str, size: usize) -> Result<Vec<[usize; 2]>, BytesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let Some((x, y)) = line.split_once(',') else { return Err(BytesError::Format { line: l + 1 }) };
				let coord = |c: &str| c.trim().parse::<usize>()
					.map_err(|e| BytesError::Coordinate { line: l + 1, source: e });
				let (x, y) = (coord(x)?, coord(y)?);
				if x >= size || y >= size { return Err(BytesError::OutOfBounds { line: l + 1, x, y }) }
				Ok([x, y])
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		5,4
		4,2
		4,5
		3,0
		2,1
		6,3
		2,4
		1,5
		0,6
		3,3
		2,6
		5,1
		1,2
		5,5
		2,5
		6,5
		1,4
		0,4
		6,4
		1,1
		6,1
		1,0
		0,5
		1,6
		2,0
	" };
	let bytes = parsing::bytes(INPUT, 7).unwrap();
	assert_eq!(part1_impl(&bytes, 7, 12), Some(22));
	assert_eq!(part2_impl(&bytes, 7), Some([6, 1]));
	assert_eq!(part2_impl(&bytes[..12], 7), None);
	assert!(matches!(parsing::bytes("1,2\n7,0", 7), Err(BytesError::OutOfBounds { line: 2, x: 7, y: 0 })));
	assert!(matches!(part1("1;2"), Err(BytesError::Format { line: 1 })));
}
