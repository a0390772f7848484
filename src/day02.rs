// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::ReportsError;


struct Report(Vec<i32>);

fn is_safe(levels: impl Iterator<Item = i32>) -> bool {
	use itertools::Itertools as _;

	let mut sign = 0;
	levels.tuple_windows().all(|(l, r)| {
		let diff = r - l;
		if !(1..=3).contains(&diff.abs()) { return false }
		if sign == 0 { sign = diff.signum() }
		diff.signum() == sign
	})
}

impl Report {
	fn is_safe(&self) -> bool {
		is_safe(self.0.iter().copied())
	}

	fn is_safe_dampened(&self) -> bool {
		self.is_safe() || (0..self.0.len()).any(|skip| is_safe(self.0.iter()
			.enumerate()
			.filter(|&(i, _)| i != skip)
			.map(|(_, &level)| level)))
	}
}


fn input_reports_from_str(s: &str) -> Result<Vec<Report>, ReportsError> {
	s.lines()
		.enumerate()
		.map(|(l, line)| line.parse().map_err(|e| ReportsError { line: l + 1, source: e }))
		.collect()
}


fn part1_impl(reports: &[Report]) -> usize {
	reports.iter().filter(|r| r.is_safe()).count()
}

pub(crate) fn part1(input: &str) -> Result<usize, ReportsError> {
	Ok(part1_impl(&input_reports_from_str(input)?))
}


fn part2_impl(reports: &[Report]) -> usize {
	reports.iter().filter(|r| r.is_safe_dampened()).count()
}

pub(crate) fn part2(input: &str) -> Result<usize, ReportsError> {
	Ok(part2_impl(&input_reports_from_str(input)?))
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Report};

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: invalid level: {source}")]
	pub(crate) struct ReportsError {
		pub(super) line: usize,
		pub(super) source: ParseIntError,
	}

	impl FromStr for Report {
		type Err = ParseIntError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			s.split_whitespace()
				.map(str::parse)
				.collect::<Result<_, _>>()
				.map(Report)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
		1 3 6 7 9
	" };
	let reports = input_reports_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&reports), 2);
	assert_eq!(part2_impl(&reports), 4);
	assert!(Report(vec![5]).is_safe());
	assert!(Report(vec![1, 9, 2]).is_safe_dampened());
	assert!(matches!(part1("1 2\n3 x"), Err(ReportsError { line: 2, .. })));
}
