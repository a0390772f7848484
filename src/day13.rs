// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::MachineError;


struct Machine {
	a: [i64; 2],
	b: [i64; 2],
	prize: [i64; 2],
}

impl Machine {
	/// Solves `n * a + m * b = prize` by Cramer's rule, keeping only exact
	/// non-negative solutions. Machines with parallel buttons win nothing.
	fn presses(&self, offset: i64) -> Option<[i64; 2]> {
		let ([ax, ay], [bx, by]) = (self.a, self.b);
		let [px, py] = self.prize.map(|p| p + offset);
		let det = ax * by - ay * bx;
		if det == 0 { return None }
		let (n, m) = (px * by - py * bx, ax * py - ay * px);
		if n % det != 0 || m % det != 0 { return None }
		let (n, m) = (n / det, m / det);
		(n >= 0 && m >= 0).then_some([n, m])
	}
}

fn tokens(machines: &[Machine], offset: i64, limit: Option<i64>) -> i64 {
	machines.iter()
		.filter_map(|machine| machine.presses(offset))
		.filter(|presses| limit.map_or(true, |limit| presses.iter().all(|&p| p <= limit)))
		.map(|[n, m]| 3 * n + m)
		.sum()
}


fn part1_impl(machines: &[Machine]) -> i64 {
	tokens(machines, 0, Some(100))
}

pub(crate) fn part1(input: &str) -> Result<i64, MachineError> {
	Ok(part1_impl(&parsing::machines(input)?))
}


fn part2_impl(machines: &[Machine]) -> i64 {
	tokens(machines, 10_000_000_000_000, None)
}

pub(crate) fn part2(input: &str) -> Result<i64, MachineError> {
	Ok(part2_impl(&parsing::machines(input)?))
}


mod parsing {
	use {std::{num::ParseIntError, sync::OnceLock}, regex::Regex, super::Machine};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MachineError {
		#[error("machine {machine}: expected 6 numbers, found {found}")]
		Count { machine: usize, found: usize },
		#[error("machine {machine}: invalid number: {source}")]
		Number { machine: usize, source: ParseIntError },
	}

	fn regex() -> &'static Regex {
		static RE: OnceLock<Regex> = OnceLock::new();
		RE.get_or_init(|| Regex::new(r"-?\d+").expect("valid number pattern"))
	}

	pub(super) fn machines(s: &str) -> Result<Vec<Machine>, MachineError> {
		let s = s.replace("\r\n", "\n");
		s.split("\n\n")
			.filter(|group| !group.trim().is_empty())
			.enumerate()
			.map(|(i, group)| {
				let nums = regex().find_iter(group)
					.map(|m| m.as_str().parse())
					.collect::<Result<Vec<i64>, _>>()
					.map_err(|e| MachineError::Number { machine: i + 1, source: e })?;
				let &[ax, ay, bx, by, px, py] = &nums[..]
					else { return Err(MachineError::Count { machine: i + 1, found: nums.len() }) };
				Ok(Machine { a: [ax, ay], b: [bx, by], prize: [px, py] })
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Button A: X+94, Y+34
		Button B: X+22, Y+67
		Prize: X=8400, Y=5400

		Button A: X+26, Y+66
		Button B: X+67, Y+21
		Prize: X=12748, Y=12176

		Button A: X+17, Y+86
		Button B: X+84, Y+37
		Prize: X=7870, Y=6450

		Button A: X+69, Y+23
		Button B: X+27, Y+71
		Prize: X=18641, Y=10279
	" };
	let machines = parsing::machines(INPUT).unwrap();
	assert_eq!(machines[0].presses(0), Some([80, 40]));
	assert_eq!(machines[1].presses(0), None);
	assert_eq!(part1_impl(&machines), 480);
	assert_eq!(part2_impl(&machines), 875318608908);
	assert!(machines[1].presses(10_000_000_000_000).is_some());
	assert!(matches!(part1("Button A: X+1, Y+2\nPrize: X=3, Y=4"), Err(MachineError::Count { machine: 1, found: 4 })));
}
