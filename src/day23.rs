// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::NetworkError;


use std::collections::{BTreeSet, HashMap};

struct Network<'s> {
	links: HashMap<&'s str, BTreeSet<&'s str>>,
}

impl<'s> Network<'s> {
	fn triangles(&self) -> impl Iterator<Item = [&'s str; 3]> + '_ {
		self.links.iter().flat_map(move |(&a, a_links)| a_links.iter()
			.filter(move |&&b| b > a)
			.flat_map(move |&b| self.links[b].iter()
				.filter(move |&&c| c > b && a_links.contains(c))
				.map(move |&c| [a, b, c])))
	}

	/// Bron–Kerbosch with pivoting, keeping the largest clique seen.
	fn largest_clique(&self) -> BTreeSet<&'s str> {
		fn expand<'s>(
			links: &HashMap<&'s str, BTreeSet<&'s str>>,
			clique: &mut Vec<&'s str>,
			mut candidates: BTreeSet<&'s str>,
			mut excluded: BTreeSet<&'s str>,
			best: &mut BTreeSet<&'s str>,
		) {
			if candidates.is_empty() && excluded.is_empty() {
				if clique.len() > best.len() { *best = clique.iter().copied().collect() }
				return
			}
			let Some(pivot) = candidates.union(&excluded)
				.max_by_key(|&&v| links[v].intersection(&candidates).count())
				.copied()
				else { return };
			let to_visit = candidates.difference(&links[pivot]).copied().collect::<Vec<_>>();
			for v in to_visit {
				let neighbors = &links[v];
				clique.push(v);
				expand(links, clique,
					candidates.intersection(neighbors).copied().collect(),
					excluded.intersection(neighbors).copied().collect(),
					best);
				clique.pop();
				candidates.remove(v);
				excluded.insert(v);
			}
		}

		let mut best = BTreeSet::new();
		expand(&self.links, &mut Vec::new(), self.links.keys().copied().collect(), BTreeSet::new(), &mut best);
		best
	}
}


fn part1_impl(network: &Network) -> usize {
	network.triangles()
		.filter(|triangle| triangle.iter().any(|c| c.starts_with('t')))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, NetworkError> {
	Ok(part1_impl(&input.try_into()?))
}


fn part2_impl(network: &Network) -> String {
	use itertools::Itertools as _;
	network.largest_clique().into_iter().join(",")
}

pub(crate) fn part2(input: &str) -> Result<String, NetworkError> {
	Ok(part2_impl(&input.try_into()?))
}


mod parsing {
	use super::Network;

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: expected `a-b` link")]
	pub(crate) struct NetworkError {
		pub(super) line: usize,
	}

	impl<'s> TryFrom<&'s str> for Network<'s> {
		type Error = NetworkError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			let mut network = Network { links: Default::default() };
			for (l, line) in s.lines().enumerate() {
				let Some((a, b)) = line.split_once('-').filter(|(a, b)| !a.is_empty() && !b.is_empty() && a != b)
					else { return Err(NetworkError { line: l + 1 }) };
				network.links.entry(a).or_default().insert(b);
				network.links.entry(b).or_default().insert(a);
			}
			Ok(network)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		kh-tc
		qp-kh
		de-cg
		ka-co
		yn-aq
		qp-ub
		cg-tb
		vc-aq
		tb-ka
		wh-tc
		yn-cg
		kh-ub
		ta-co
		de-co
		tc-td
		tb-wq
		wh-td
		ta-ka
		td-qp
		aq-cg
		wq-ub
		ub-vc
		de-ta
		wq-aq
		wq-vc
		wh-yn
		ka-de
		kh-ta
		co-tc
		wh-qp
		tb-vc
		td-yn
	" };
	let network = Network::try_from(INPUT).unwrap();
	assert_eq!(network.triangles().count(), 12);
	assert_eq!(part1_impl(&network), 7);
	assert_eq!(part2_impl(&network), "co,de,ka,ta");
	assert!(matches!(part1("ab-cd\nef"), Err(NetworkError { line: 2 })));
}
