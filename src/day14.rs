// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::RobotsError;


const SIZE: [i64; 2] = [101, 103];

#[derive(Clone, Copy)]
struct Robot {
	p: [i64; 2],
	v: [i64; 2],
}

impl Robot {
	fn at(&self, axis: usize, t: i64, size: [i64; 2]) -> i64 {
		(self.p[axis] + self.v[axis] * t).rem_euclid(size[axis])
	}
}

/// The time in `0..size[axis]` at which the robots are bunched up closest
/// along `axis`. Compares `n² · variance` to stay in integers.
fn tightest_phase(robots: &[Robot], axis: usize, size: [i64; 2]) -> i64 {
	let n = robots.len() as i64;
	(0..size[axis])
		.min_by_key(|&t| {
			let (sum, sum_sq) = robots.iter()
				.map(|r| r.at(axis, t, size))
				.fold((0, 0), |(s, sq), x| (s + x, sq + x * x));
			n * sum_sq - sum * sum
		})
		.unwrap_or(0)
}


fn part1_impl(robots: &[Robot], size: [i64; 2], seconds: i64) -> usize {
	let [mid_x, mid_y] = size.map(|s| s / 2);
	let mut quadrants = [0; 4];
	for robot in robots {
		let (x, y) = (robot.at(0, seconds, size), robot.at(1, seconds, size));
		if x == mid_x || y == mid_y { continue }
		quadrants[(x > mid_x) as usize + 2 * (y > mid_y) as usize] += 1;
	}
	quadrants.iter().product()
}

pub(crate) fn part1(input: &str) -> Result<usize, RobotsError> {
	Ok(part1_impl(&parsing::robots(input)?, SIZE, 100))
}


/// Combines the per-axis phases with the Chinese remainder theorem:
/// `t = tx + w·k` where `w·k ≡ ty - tx (mod h)`.
fn part2_impl(robots: &[Robot], size: [i64; 2]) -> Result<i64, RobotsError> {
	use num_modular::{ModularCoreOps as _, ModularUnaryOps as _};

	let (tx, ty) = (tightest_phase(robots, 0, size), tightest_phase(robots, 1, size));
	log::debug!("Tightest phases: x at {tx} (mod {}), y at {ty} (mod {})", size[0], size[1]);

	let [w, h] = size.map(|s| s as usize);
	let Some(w_inv) = (w % h).invm(&h) else { return Err(RobotsError::Size { width: w, height: h }) };
	let k = (ty as usize % h).subm(tx as usize % h, &h).mulm(w_inv, &h);
	Ok(tx + (w * k) as i64)
}

pub(crate) fn part2(input: &str) -> Result<i64, RobotsError> {
	part2_impl(&parsing::robots(input)?, SIZE)
}


mod parsing {
	use {std::{num::ParseIntError, sync::OnceLock}, regex::Regex, super::Robot};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RobotsError {
		#[error("line {line}: expected `p=x,y v=dx,dy`")]
		Format { line: usize },
		#[error("line {line}: invalid number: {source}")]
		Number { line: usize, source: ParseIntError },
		#[error("grid sizes {width} and {height} are not coprime")]
		Size { width: usize, height: usize },
	}

	fn regex() -> &'static Regex {
		static RE: OnceLock<Regex> = OnceLock::new();
		RE.get_or_init(|| Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$")
			.expect("valid robot pattern"))
	}

	pub(super) fn robots(s: &str) -> Result<Vec<Robot>, RobotsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| {
				let Some(caps) = regex().captures(line.trim()) else { return Err(RobotsError::Format { line: l + 1 }) };
				let num = |i: usize| caps[i].parse()
					.map_err(|e| RobotsError::Number { line: l + 1, source: e });
				Ok(Robot { p: [num(1)?, num(2)?], v: [num(3)?, num(4)?] })
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		p=0,4 v=3,-3
		p=6,3 v=-1,-3
		p=10,3 v=-1,2
		p=2,0 v=2,-1
		p=0,0 v=1,3
		p=3,0 v=-2,-2
		p=7,6 v=-1,-3
		p=3,0 v=-1,-2
		p=9,3 v=2,3
		p=7,3 v=-1,2
		p=2,4 v=2,-3
		p=9,5 v=-3,-3
	" };
	assert_eq!(part1_impl(&parsing::robots(INPUT).unwrap(), [11, 7], 100), 12);

	// All four robots meet at (5, 3) after 20 seconds, and nowhere else.
	const GATHERING: &str = indoc::indoc! { "
		p=7,5 v=1,2
		p=0,2 v=3,-1
		p=1,6 v=-2,3
		p=2,4 v=4,1
	" };
	let robots = parsing::robots(GATHERING).unwrap();
	assert_eq!(tightest_phase(&robots, 0, [11, 7]), 9);
	assert_eq!(tightest_phase(&robots, 1, [11, 7]), 6);
	assert_eq!(part2_impl(&robots, [11, 7]).unwrap(), 20);
	assert!(matches!(part2_impl(&robots, [4, 6]), Err(RobotsError::Size { width: 4, height: 6 })));
	assert!(matches!(part1("p=1,2 v=3"), Err(RobotsError::Format { line: 1 })));
}
