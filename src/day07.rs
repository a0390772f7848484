// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::EquationError;


struct Equation {
	target: u64,
	operands: Vec<u64>,
}

impl Equation {
	/// Unwinds the operators right to left: the last operand must have been
	/// added, multiplied or concatenated onto whatever came before it.
	fn is_solvable(&self, concat: bool) -> bool {
		fn solve(goal: u64, operands: &[u64], concat: bool) -> bool {
			let Some((&last, rest)) = operands.split_last() else { return false };
			if rest.is_empty() { return goal == last }

			if goal >= last && solve(goal - last, rest, concat) { return true }
			if last == 0 {
				if goal == 0 { return true }
			} else if goal % last == 0 && solve(goal / last, rest, concat) { return true }
			// A `last` of 20 digits leaves no room to concatenate onto.
			concat && 10u64.checked_pow(last.checked_ilog10().unwrap_or(0) + 1)
				.is_some_and(|pow| goal > last && goal % pow == last && solve(goal / pow, rest, concat))
		}

		solve(self.target, &self.operands, concat)
	}
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
	use rayon::prelude::*;

	equations.par_iter()
		.filter(|eq| eq.is_solvable(concat))
		.map(|eq| eq.target)
		.sum()
}


fn input_equations_from_str(s: &str) -> Result<Vec<Equation>, EquationError> {
	s.lines()
		.enumerate()
		.map(|(l, line)| line.parse().map_err(|e| EquationError { line: l + 1, kind: e }))
		.collect()
}


fn part1_impl(equations: &[Equation]) -> u64 {
	calibration(equations, false)
}

pub(crate) fn part1(input: &str) -> Result<u64, EquationError> {
	Ok(part1_impl(&input_equations_from_str(input)?))
}


fn part2_impl(equations: &[Equation]) -> u64 {
	calibration(equations, true)
}

pub(crate) fn part2(input: &str) -> Result<u64, EquationError> {
	Ok(part2_impl(&input_equations_from_str(input)?))
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Equation};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum EquationErrorKind {
		#[error("missing `:`")]
		Colon,
		#[error("no operands")]
		Empty,
		#[error("invalid number: {0}")]
		Number(#[from] ParseIntError),
	}

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: {kind}")]
	pub(crate) struct EquationError {
		pub(super) line: usize,
		pub(super) kind: EquationErrorKind,
	}

	impl FromStr for Equation {
		type Err = EquationErrorKind;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let Some((target, operands)) = s.split_once(':') else { return Err(EquationErrorKind::Colon) };
			let operands = operands.split_whitespace()
				.map(str::parse)
				.collect::<Result<Vec<_>, _>>()?;
			if operands.is_empty() { return Err(EquationErrorKind::Empty) }
			Ok(Equation { target: target.trim().parse()?, operands })
		}
	}
}


#[test]
fn tests() {
	use parsing::EquationErrorKind;

	const INPUT: &str = indoc::indoc! { "
		190: 10 19
		3267: 81 40 27
		83: 17 5
		156: 15 6
		7290: 6 8 6 15
		161011: 16 10 13
		192: 17 8 14
		21037: 9 7 18 13
		292: 11 6 16 20
	" };
	let equations = input_equations_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&equations), 3749);
	assert_eq!(part2_impl(&equations), 11387);
	assert_eq!(part2("100: 10 0").unwrap(), 100);
	assert_eq!(part2("1: 1 10000000000000000000").unwrap(), 0);
	assert_eq!(part2("10000000000000000001: 1 10000000000000000000").unwrap(), 10000000000000000001);
	assert!(matches!(part1("1: 1\n2 2"), Err(EquationError { line: 2, kind: EquationErrorKind::Colon })));
	assert!(matches!(part1("5:"), Err(EquationError { line: 1, kind: EquationErrorKind::Empty })));
}
