// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::DiskMapError;


#[derive(Clone, Copy)]
struct Span {
	start: usize,
	len: usize,
}

/// Files (indexed by id) and the free spans between them, in disk order.
struct DiskMap {
	files: Vec<Span>,
	free: Vec<Span>,
}

fn checksum(files: &[Span]) -> u64 {
	files.iter()
		.enumerate()
		.map(|(id, span)| (span.start..span.start + span.len).map(|pos| (pos * id) as u64).sum::<u64>())
		.sum()
}


fn part1_impl(disk: &DiskMap) -> u64 {
	let len = disk.files.last().map_or(0, |f| f.start + f.len);
	let mut blocks = vec![None; len];
	for (id, file) in disk.files.iter().enumerate() {
		blocks[file.start..file.start + file.len].fill(Some(id));
	}

	let (mut l, mut r) = (0, blocks.len());
	loop {
		while l < r && blocks[l].is_some() { l += 1 }
		while l < r && blocks[r - 1].is_none() { r -= 1 }
		if l >= r { break }
		blocks.swap(l, r - 1);
	}

	blocks.iter()
		.enumerate()
		.filter_map(|(pos, id)| id.map(|id| (pos * id) as u64))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, DiskMapError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(disk: &DiskMap) -> u64 {
	let mut files = disk.files.clone();
	let mut free = disk.free.clone();
	for file in files.iter_mut().rev() {
		let Some(gap) = free.iter_mut()
			.take_while(|gap| gap.start < file.start)
			.find(|gap| gap.len >= file.len)
			else { continue };
		file.start = gap.start;
		gap.start += file.len;
		gap.len -= file.len;
	}
	checksum(&files)
}

pub(crate) fn part2(input: &str) -> Result<u64, DiskMapError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::str::FromStr, super::{DiskMap, Span}};

	#[derive(Debug, thiserror::Error)]
	#[error("column {column}: invalid digit {found:?}")]
	pub(crate) struct DiskMapError {
		pub(super) column: usize,
		pub(super) found: char,
	}

	impl FromStr for DiskMap {
		type Err = DiskMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut disk = DiskMap { files: Vec::new(), free: Vec::new() };
			let mut start = 0;
			for (c, chr) in s.trim_end().chars().enumerate() {
				let len = chr.to_digit(10)
					.ok_or(DiskMapError { column: c + 1, found: chr })? as usize;
				let spans = if c % 2 == 0 { &mut disk.files } else { &mut disk.free };
				spans.push(Span { start, len });
				start += len;
			}
			Ok(disk)
		}
	}
}


#[test]
fn tests() {
	assert_eq!(part1_impl(&"12345".parse().unwrap()), 60);
	assert_eq!(part1_impl(&"2333133121414131402".parse().unwrap()), 1928);
	assert_eq!(part2_impl(&"2333133121414131402\n".parse().unwrap()), 2858);
	assert!(matches!(part1("12a"), Err(DiskMapError { column: 3, found: 'a' })));
}
