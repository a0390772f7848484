// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::OnsenError;


struct Onsen<'s> {
	towels: Vec<&'s str>,
	designs: Vec<&'s str>,
}

impl Onsen<'_> {
	/// Number of ways to assemble `design` from towels, counted from the
	/// back: `ways[i]` covers the suffix starting at `i`.
	fn arrangements(&self, design: &str) -> u64 {
		let mut ways = vec![0; design.len() + 1];
		ways[design.len()] = 1;
		for i in (0..design.len()).rev() {
			ways[i] = self.towels.iter()
				.filter(|towel| design[i..].starts_with(*towel))
				.map(|towel| ways[i + towel.len()])
				.sum();
		}
		ways[0]
	}
}


fn part1_impl(onsen: &Onsen) -> usize {
	onsen.designs.iter().filter(|d| onsen.arrangements(d) > 0).count()
}

pub(crate) fn part1(input: &str) -> Result<usize, OnsenError> {
	Ok(part1_impl(&input.try_into()?))
}


fn part2_impl(onsen: &Onsen) -> u64 {
	onsen.designs.iter().map(|d| onsen.arrangements(d)).sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, OnsenError> {
	Ok(part2_impl(&input.try_into()?))
}


mod parsing {
	use super::Onsen;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum OnsenError {
		#[error("missing blank line after the towel patterns")]
		Sections,
		#[error("towel {index}: invalid pattern {found:?}")]
		Towel { index: usize, found: String },
		#[error("line {line}: invalid design {found:?}")]
		Design { line: usize, found: String },
	}

	fn is_stripes(s: &str) -> bool {
		!s.is_empty() && s.bytes().all(|b| b"wubrg".contains(&b))
	}

	impl<'s> TryFrom<&'s str> for Onsen<'s> {
		type Error = OnsenError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			let mut lines = s.lines().enumerate();
			let Some((_, towels)) = lines.next() else { return Err(OnsenError::Sections) };
			if !matches!(lines.next(), Some((_, ""))) { return Err(OnsenError::Sections) }

			let towels = towels.split(',')
				.map(str::trim)
				.enumerate()
				.map(|(i, t)| if is_stripes(t) { Ok(t) } else {
					Err(OnsenError::Towel { index: i + 1, found: t.to_owned() })
				})
				.collect::<Result<_, _>>()?;
			let designs = lines
				.map(|(l, d)| if is_stripes(d) { Ok(d) } else {
					Err(OnsenError::Design { line: l + 1, found: d.to_owned() })
				})
				.collect::<Result<_, _>>()?;

			Ok(Onsen { towels, designs })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		r, wr, b, g, bwu, rb, gb, br

		brwrr
		bggr
		gbbr
		rrbgbr
		ubwu
		bwurrg
		brgr
		bbrgwb
	" };
	let onsen = Onsen::try_from(INPUT).unwrap();
	assert_eq!(part1_impl(&onsen), 6);
	assert_eq!(part2_impl(&onsen), 16);
	assert_eq!(onsen.arrangements("gbbr"), 4);
	assert_eq!(onsen.arrangements("ubwu"), 0);
	assert!(matches!(part1("r, x\n\nrr"), Err(OnsenError::Towel { index: 2, .. })));
	assert!(matches!(part2("r, b\nrb"), Err(OnsenError::Sections)));
}
