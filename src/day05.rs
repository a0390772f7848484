// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::QueueError;


struct Queue {
	rules: std::collections::HashSet<(u32, u32)>,
	updates: Vec<Vec<u32>>,
}

impl Queue {
	fn cmp(&self, a: u32, b: u32) -> std::cmp::Ordering {
		use std::cmp::Ordering::*;
		if self.rules.contains(&(a, b)) { Less }
		else if self.rules.contains(&(b, a)) { Greater }
		else { Equal }
	}

	fn is_ordered(&self, update: &[u32]) -> bool {
		update.windows(2).all(|w| self.cmp(w[0], w[1]) != std::cmp::Ordering::Greater)
	}
}

fn middle(update: &[u32]) -> u32 {
	update.get(update.len() / 2).copied().unwrap_or(0)
}


fn part1_impl(queue: &Queue) -> u32 {
	queue.updates.iter()
		.filter(|u| queue.is_ordered(u))
		.map(|u| middle(u))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u32, QueueError> {
	Ok(part1_impl(&input.parse()?))
}


fn part2_impl(queue: &Queue) -> u32 {
	queue.updates.iter()
		.filter(|u| !queue.is_ordered(u))
		.map(|u| {
			let mut sorted = u.clone();
			sorted.sort_by(|&a, &b| queue.cmp(a, b));
			middle(&sorted)
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u32, QueueError> {
	Ok(part2_impl(&input.parse()?))
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Queue};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum QueueError {
		#[error("missing blank line between rules and updates")]
		Sections,
		#[error("line {line}: expected `a|b` rule")]
		Rule { line: usize },
		#[error("line {line}: invalid page number: {source}")]
		Page { line: usize, source: ParseIntError },
	}

	impl FromStr for Queue {
		type Err = QueueError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines().enumerate();
			let page = |l: usize, p: &str| p.trim().parse()
				.map_err(|e| QueueError::Page { line: l + 1, source: e });

			let mut rules = std::collections::HashSet::new();
			loop {
				let Some((l, line)) = lines.next() else { return Err(QueueError::Sections) };
				if line.is_empty() { break }
				let Some((a, b)) = line.split_once('|') else { return Err(QueueError::Rule { line: l + 1 }) };
				rules.insert((page(l, a)?, page(l, b)?));
			}

			let updates = lines
				.filter(|(_, line)| !line.is_empty())
				.map(|(l, line)| line.split(',').map(|p| page(l, p)).collect::<Result<Vec<_>, _>>())
				.collect::<Result<_, _>>()?;

			Ok(Queue { rules, updates })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		47|53
		97|13
		97|61
		97|47
		75|29
		61|13
		75|53
		29|13
		97|29
		53|29
		61|53
		97|53
		61|29
		47|13
		75|47
		97|75
		47|61
		75|61
		47|29
		75|13
		53|13

		75,47,61,53,29
		97,61,53,29,13
		75,29,13
		75,97,47,61,53
		61,13,29
		97,13,75,29,47
	" };
	assert_eq!(part1_impl(&INPUT.parse().unwrap()), 143);
	assert_eq!(part2_impl(&INPUT.parse().unwrap()), 123);
	assert!(matches!(part1("1|2\n3|4"), Err(QueueError::Sections)));
	assert!(matches!(part1("1-2\n\n3,4"), Err(QueueError::Rule { line: 1 })));
	assert!(matches!(part2("1|2\n\n3,x"), Err(QueueError::Page { line: 3, .. })));
}
