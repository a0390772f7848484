// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::InstrError;


#[derive(Debug, PartialEq, Eq)]
enum Instr {
	Mul(i64, i64),
	Do,
	Dont,
}


/// Sums the products, failing if the total leaves `i64`.
fn sum_products(mut muls: impl Iterator<Item = (i64, i64)>) -> Result<i64, InstrError> {
	muls.try_fold(0i64, |sum, (a, b)| a.checked_mul(b)
		.and_then(|product| sum.checked_add(product))
		.ok_or(InstrError::Overflow))
}


fn part1_impl(instrs: &[Instr]) -> Result<i64, InstrError> {
	sum_products(instrs.iter().filter_map(|instr| match *instr {
		Instr::Mul(a, b) => Some((a, b)),
		_ => None,
	}))
}

pub(crate) fn part1(input: &str) -> Result<i64, InstrError> {
	part1_impl(&parsing::instrs(input)?)
}


fn part2_impl(instrs: &[Instr]) -> Result<i64, InstrError> {
	let mut enabled = true;
	sum_products(instrs.iter().filter_map(|instr| match *instr {
		Instr::Do => { enabled = true; None }
		Instr::Dont => { enabled = false; None }
		Instr::Mul(a, b) => enabled.then_some((a, b)),
	}))
}

pub(crate) fn part2(input: &str) -> Result<i64, InstrError> {
	part2_impl(&parsing::instrs(input)?)
}


mod parsing {
	use {std::{num::ParseIntError, sync::OnceLock}, regex::Regex, super::Instr};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum InstrError {
		#[error("offset {offset}: invalid operand: {source}")]
		Operand { offset: usize, source: ParseIntError },
		#[error("sum of products overflows")]
		Overflow,
	}

	fn regex() -> &'static Regex {
		static RE: OnceLock<Regex> = OnceLock::new();
		RE.get_or_init(|| Regex::new(r"mul\((-?\d+),(-?\d+)\)|do\(\)|don't\(\)")
			.expect("valid instruction pattern"))
	}

	pub(super) fn instrs(s: &str) -> Result<Vec<Instr>, InstrError> {
		regex().captures_iter(s)
			.map(|caps| {
				let whole = &caps[0];
				if whole == "do()" { return Ok(Instr::Do) }
				if whole == "don't()" { return Ok(Instr::Dont) }
				let operand = |i: usize| caps[i].parse()
					.map_err(|e| InstrError::Operand { offset: caps.get(i).map_or(0, |m| m.start()), source: e });
				Ok(Instr::Mul(operand(1)?, operand(2)?))
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT1: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
	const INPUT2: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
	assert_eq!(part1_impl(&parsing::instrs(INPUT1).unwrap()).unwrap(), 161);
	assert_eq!(part2_impl(&parsing::instrs(INPUT2).unwrap()).unwrap(), 48);
	assert_eq!(part1_impl(&parsing::instrs(INPUT2).unwrap()).unwrap(), 161);

	let multiline = indoc::indoc! { "
		mul(2,3)don't()
		mul(4,5)do()mul(-1,6)
	" };
	assert_eq!(part2_impl(&parsing::instrs(multiline).unwrap()).unwrap(), 0);
	assert!(matches!(part1("mul(99999999999999999999,1)"), Err(InstrError::Operand { offset: 4, .. })));
	assert!(matches!(part1("mul(9999999999,9999999999)"), Err(InstrError::Overflow)));
	assert!(matches!(part1("mul(3037000499,3037000499)mul(3037000499,3037000499)"), Err(InstrError::Overflow)));
	assert_eq!(part2("don't()mul(9999999999,9999999999)").unwrap(), 0);
}
