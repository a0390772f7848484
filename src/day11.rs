// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::StonesError;


/// Stone numbers with their multiplicity; order never matters.
struct Stones(std::collections::HashMap<u64, u64>);

impl Stones {
	fn blink(&self) -> Result<Self, StonesError> {
		let mut next = std::collections::HashMap::with_capacity(self.0.len() * 2);
		for (&stone, &count) in &self.0 {
			let digits = stone.checked_ilog10().map_or(1, |d| d + 1);
			let (a, b) = if stone == 0 {
				(1, None)
			} else if digits % 2 == 0 {
				let half = 10u64.pow(digits / 2);
				(stone / half, Some(stone % half))
			} else {
				(stone.checked_mul(2024).ok_or(StonesError::Overflow { stone })?, None)
			};
			for s in std::iter::once(a).chain(b) {
				*next.entry(s).or_insert(0) += count;
			}
		}
		Ok(Stones(next))
	}

	fn count_after(&self, blinks: usize) -> Result<u64, StonesError> {
		let mut stones = Stones(self.0.clone());
		for _ in 0..blinks { stones = stones.blink()? }
		Ok(stones.0.values().sum())
	}
}


fn part1_impl(stones: &Stones) -> Result<u64, StonesError> {
	stones.count_after(25)
}

pub(crate) fn part1(input: &str) -> Result<u64, StonesError> {
	part1_impl(&input.parse()?)
}


fn part2_impl(stones: &Stones) -> Result<u64, StonesError> {
	stones.count_after(75)
}

pub(crate) fn part2(input: &str) -> Result<u64, StonesError> {
	part2_impl(&input.parse()?)
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Stones};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum StonesError {
		#[error("stone {index}: {source}")]
		Number { index: usize, source: ParseIntError },
		#[error("stone {stone} grows past 64 bits")]
		Overflow { stone: u64 },
	}

	impl FromStr for Stones {
		type Err = StonesError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut stones = std::collections::HashMap::new();
			for (i, stone) in s.split_whitespace().enumerate() {
				let stone = stone.parse().map_err(|e| StonesError::Number { index: i + 1, source: e })?;
				*stones.entry(stone).or_insert(0) += 1;
			}
			Ok(Stones(stones))
		}
	}
}


#[test]
fn tests() {
	let stones: Stones = "125 17".parse().unwrap();
	assert_eq!(stones.count_after(6).unwrap(), 22);
	assert_eq!(part1_impl(&stones).unwrap(), 55312);
	assert_eq!("0 1 10 99 999".parse::<Stones>().unwrap().count_after(1).unwrap(), 7);
	assert_eq!("1000".parse::<Stones>().unwrap().blink().unwrap().0, std::collections::HashMap::from([(10, 1), (0, 1)]));
	assert!(matches!(part2("1 x"), Err(StonesError::Number { index: 2, .. })));
	assert!(matches!(part1("18446744073709551"), Err(StonesError::Overflow { stone: 18446744073709551 })));
}
