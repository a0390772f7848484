// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::ComputerError;


/// Instructions a single run may execute before it counts as looping.
const MAX_STEPS: usize = 1 << 20;

#[derive(Clone)]
struct Computer {
	registers: [u64; 3],
	program: Vec<u8>,
}

impl Computer {
	fn run(&self, a: u64) -> Result<Vec<u8>, ComputerError> {
		let [mut a, mut b, mut c] = [a, self.registers[1], self.registers[2]];
		let mut output = Vec::new();
		let mut ip = 0;
		let mut steps = 0;
		while let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1)) {
			steps += 1;
			if steps > MAX_STEPS { return Err(ComputerError::NoHalt { steps: MAX_STEPS }) }
			let combo = match operand {
				0..=3 => Ok(operand as u64),
				4 => Ok(a),
				5 => Ok(b),
				6 => Ok(c),
				_ => Err(ComputerError::Combo { ip }),
			};
			let shifted = |a: u64, n: u64| a.checked_shr(n.try_into().unwrap_or(u32::MAX)).unwrap_or(0);
			ip += 2;
			match opcode {
				0 => a = shifted(a, combo?),
				1 => b ^= operand as u64,
				2 => b = combo? % 8,
				3 => if a != 0 { ip = operand as usize },
				4 => b ^= c,
				5 => output.push((combo? % 8) as u8),
				6 => b = shifted(a, combo?),
				7 => c = shifted(a, combo?),
				_ => unreachable!(),
			}
		}
		Ok(output)
	}
}


fn part1_impl(computer: &Computer) -> Result<String, ComputerError> {
	use itertools::Itertools as _;
	Ok(computer.run(computer.registers[0])?.iter().join(","))
}

pub(crate) fn part1(input: &str) -> Result<String, ComputerError> {
	part1_impl(&input.parse()?)
}


/// Builds register A three bits at a time, keeping every candidate whose
/// output matches the matching suffix of the program.
fn part2_impl(computer: &Computer) -> Result<u64, ComputerError> {
	let len = computer.program.len();
	let mut candidates = vec![0];
	for i in (0..len).rev() {
		let mut next = Vec::new();
		for a in candidates.iter().flat_map(|&a| (0..8).map(move |d| a << 3 | d)) {
			if computer.run(a)? == computer.program[i..] { next.push(a) }
		}
		log::debug!("{} candidates for the last {} outputs", next.len(), len - i);
		candidates = next;
	}
	candidates.into_iter().min().ok_or(ComputerError::NoQuine)
}

pub(crate) fn part2(input: &str) -> Result<u64, ComputerError> {
	part2_impl(&input.parse()?)
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr, sync::OnceLock}, regex::Regex, super::Computer};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ComputerError {
		#[error("expected three registers and a program")]
		Format,
		#[error("invalid number: {0}")]
		Number(#[from] ParseIntError),
		#[error("program value {0} is not a 3-bit number")]
		Opcode(u64),
		#[error("instruction at {ip}: reserved combo operand 7")]
		Combo { ip: usize },
		#[error("no initial value makes the program output itself")]
		NoQuine,
		#[error("program did not halt within {steps} instructions")]
		NoHalt { steps: usize },
	}

	fn regex() -> &'static Regex {
		static RE: OnceLock<Regex> = OnceLock::new();
		RE.get_or_init(|| Regex::new(r"\d+").expect("valid number pattern"))
	}

	impl FromStr for Computer {
		type Err = ComputerError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let nums = regex().find_iter(s)
				.map(|m| m.as_str().parse())
				.collect::<Result<Vec<u64>, _>>()?;
			let [a, b, c, program @ ..] = &nums[..] else { return Err(ComputerError::Format) };
			let program = program.iter()
				.map(|&n| u8::try_from(n).ok().filter(|&n| n < 8).ok_or(ComputerError::Opcode(n)))
				.collect::<Result<_, _>>()?;
			Ok(Computer { registers: [*a, *b, *c], program })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Register A: 729
		Register B: 0
		Register C: 0

		Program: 0,1,5,4,3,0
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()).unwrap(), "4,6,3,5,6,3,5,2,1,0");

	let computer = Computer { registers: [10, 0, 0], program: vec![5, 0, 5, 1, 5, 4] };
	assert_eq!(computer.run(10).unwrap(), [0, 1, 2]);
	let computer = Computer { registers: [0, 29, 0], program: vec![1, 7] };
	assert_eq!(computer.run(0).unwrap(), Vec::<u8>::new());
	let computer = Computer { registers: [0, 2024, 43690], program: vec![4, 0, 5, 5] };
	assert_eq!(computer.run(0).unwrap(), [2]);

	const QUINE: &str = indoc::indoc! { "
		Register A: 2024
		Register B: 0
		Register C: 0

		Program: 0,3,5,4,3,0
	" };
	let computer: Computer = QUINE.parse().unwrap();
	assert_eq!(part2_impl(&computer).unwrap(), 117440);
	assert_eq!(computer.run(117440).unwrap(), computer.program);
	assert!(matches!(part1("Register A: 1"), Err(ComputerError::Format)));
	assert!(matches!(part1("1 2 3 5,7"), Err(ComputerError::Combo { ip: 0 })));
	assert!(matches!(part1("1 2 3 0,8"), Err(ComputerError::Opcode(8))));
	assert!(matches!(part1("1 0 0 3,0"), Err(ComputerError::NoHalt { .. })));
}
