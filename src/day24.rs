// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) use parsing::CircuitError;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Op { And, Or, Xor }

impl Op {
	fn apply(self, a: bool, b: bool) -> bool {
		match self { Op::And => a & b, Op::Or => a | b, Op::Xor => a ^ b }
	}
}

struct Gate<'s> {
	a: &'s str,
	op: Op,
	b: &'s str,
	out: &'s str,
}

struct Circuit<'s> {
	initial: std::collections::HashMap<&'s str, bool>,
	gates: Vec<Gate<'s>>,
}

fn is_input(wire: &str) -> bool {
	wire.starts_with('x') || wire.starts_with('y')
}

impl<'s> Circuit<'s> {
	/// Settles every wire, then reads the `z` wires as a binary number
	/// with `z00` as the least significant bit.
	fn output(&self) -> Result<u64, CircuitError> {
		let mut values = self.initial.clone();
		let mut pending = self.gates.iter().collect::<Vec<_>>();
		while !pending.is_empty() {
			let before = pending.len();
			pending.retain(|gate| match (values.get(gate.a), values.get(gate.b)) {
				(Some(&a), Some(&b)) => { values.insert(gate.out, gate.op.apply(a, b)); false }
				_ => true,
			});
			if pending.len() == before {
				return Err(CircuitError::Unsettled { wire: pending[0].out.to_owned() })
			}
		}

		let mut zs = values.into_iter().filter(|(w, _)| w.starts_with('z')).collect::<Vec<_>>();
		zs.sort_unstable();
		Ok(zs.into_iter().rev().fold(0, |acc, (_, bit)| acc << 1 | bit as u64))
	}

	/// Output wires of gates that break the shape of a ripple-carry adder:
	/// sum bits come from an XOR (the final carry from an OR), only input
	/// XORs feed other XORs, and every carry AND feeds an OR.
	fn misplaced_outputs(&self) -> std::collections::BTreeSet<&'s str> {
		let highest_z = self.gates.iter().map(|g| g.out).filter(|w| w.starts_with('z')).max();
		let feeds = |wire: &str, op: Op| self.gates.iter().any(|g| g.op == op && (g.a == wire || g.b == wire));

		self.gates.iter()
			.filter(|gate| {
				let from_inputs = is_input(gate.a) && is_input(gate.b);
				let first_bit = from_inputs && gate.a[1..] == *"00" && gate.b[1..] == *"00";
				let to_z = gate.out.starts_with('z');
				let z_op = if Some(gate.out) == highest_z { Op::Or } else { Op::Xor };
				let bad_z = to_z && gate.op != z_op;
				let bad_xor = gate.op == Op::Xor && match from_inputs {
					true => !first_bit && !feeds(gate.out, Op::Xor),
					false => !to_z,
				};
				let bad_and = gate.op == Op::And && !first_bit && !feeds(gate.out, Op::Or);
				bad_z || bad_xor || bad_and
			})
			.map(|gate| gate.out)
			.collect()
	}
}


fn part1_impl(circuit: &Circuit) -> Result<u64, CircuitError> {
	circuit.output()
}

pub(crate) fn part1(input: &str) -> Result<u64, CircuitError> {
	part1_impl(&input.try_into()?)
}


fn part2_impl(circuit: &Circuit) -> String {
	use itertools::Itertools as _;

	let misplaced = circuit.misplaced_outputs();
	log::debug!("Misplaced outputs: {misplaced:?}");
	if misplaced.len() != 8 { log::warn!("Expected 8 swapped wires, found {}", misplaced.len()) }
	misplaced.into_iter().join(",")
}

pub(crate) fn part2(input: &str) -> Result<String, CircuitError> {
	Ok(part2_impl(&input.try_into()?))
}


mod parsing {
	use super::{Circuit, Gate, Op};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CircuitError {
		#[error("line {line}: expected `wire: 0` or `wire: 1`")]
		Wire { line: usize },
		#[error("line {line}: expected `a OP b -> out`")]
		Gate { line: usize },
		#[error("line {line}: unknown gate {found:?}")]
		Op { line: usize, found: String },
		#[error("wire {wire} never settles")]
		Unsettled { wire: String },
	}

	impl<'s> TryFrom<&'s str> for Circuit<'s> {
		type Error = CircuitError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			let mut lines = s.lines().enumerate();

			let mut initial = std::collections::HashMap::new();
			for (l, line) in lines.by_ref() {
				if line.is_empty() { break }
				let (wire, value) = match line.split_once(": ") {
					Some((wire, "0")) => (wire, false),
					Some((wire, "1")) => (wire, true),
					_ => return Err(CircuitError::Wire { line: l + 1 }),
				};
				initial.insert(wire, value);
			}

			let gates = lines
				.filter(|(_, line)| !line.is_empty())
				.map(|(l, line)| {
					let mut words = line.split_whitespace();
					let (Some(a), Some(op), Some(b), Some("->"), Some(out), None) =
						(words.next(), words.next(), words.next(), words.next(), words.next(), words.next())
						else { return Err(CircuitError::Gate { line: l + 1 }) };
					let op = match op {
						"AND" => Op::And,
						"OR" => Op::Or,
						"XOR" => Op::Xor,
						found => return Err(CircuitError::Op { line: l + 1, found: found.to_owned() }),
					};
					Ok(Gate { a, op, b, out })
				})
				.collect::<Result<_, _>>()?;

			Ok(Circuit { initial, gates })
		}
	}
}


#[test]
fn tests() {
	const SMALL: &str = indoc::indoc! { "
		x00: 1
		x01: 1
		x02: 1
		y00: 0
		y01: 1
		y02: 0

		x00 AND y00 -> z00
		x01 XOR y01 -> z01
		x02 OR y02 -> z02
	" };
	const LARGER: &str = indoc::indoc! { "
		x00: 1
		x01: 0
		x02: 1
		x03: 1
		x04: 0
		y00: 1
		y01: 1
		y02: 1
		y03: 1
		y04: 1

		ntg XOR fgs -> mjb
		y02 OR x01 -> tnw
		kwq OR kpj -> z05
		x00 OR x03 -> fst
		tgd XOR rvg -> z01
		vdt OR tnw -> bfw
		bfw AND frj -> z10
		ffh OR nrd -> bqk
		y00 AND y03 -> djm
		y03 OR y00 -> psh
		bqk OR frj -> z08
		tnw OR fst -> frj
		gnj AND tgd -> z11
		bfw XOR mjb -> z00
		x03 OR x00 -> vdt
		gnj AND wpb -> z02
		x04 AND y00 -> kjc
		djm OR pbm -> qhw
		nrd AND vdt -> hwm
		kjc AND fst -> rvg
		y04 OR y02 -> fgs
		y01 AND x02 -> pbm
		ntg OR kjc -> kwq
		psh XOR fgs -> tgd
		qhw XOR tgd -> z09
		pbm OR djm -> kpj
		x03 XOR y03 -> ffh
		x00 XOR y04 -> ntg
		bfw OR bqk -> z06
		nrd XOR fgs -> wpb
		frj XOR qhw -> z04
		bqk OR frj -> z07
		y03 OR x01 -> nrd
		hwm AND bqk -> z03
		tgd XOR rvg -> z12
		tnw OR pbm -> gnj
	" };
	assert_eq!(part1_impl(&SMALL.try_into().unwrap()).unwrap(), 4);
	assert_eq!(part1_impl(&LARGER.try_into().unwrap()).unwrap(), 2024);

	// 5 + 3 through a three-bit ripple-carry adder
	const ADDER: &str = indoc::indoc! { "
		x00: 1
		x01: 0
		x02: 1
		y00: 1
		y01: 1
		y02: 0

		x00 XOR y00 -> z00
		x00 AND y00 -> c00
		x01 XOR y01 -> s01
		x01 AND y01 -> a01
		s01 XOR c00 -> z01
		s01 AND c00 -> b01
		a01 OR b01 -> c01
		x02 XOR y02 -> s02
		x02 AND y02 -> a02
		s02 XOR c01 -> z02
		s02 AND c01 -> b02
		a02 OR b02 -> z03
	" };
	let adder = Circuit::try_from(ADDER).unwrap();
	assert_eq!(part1_impl(&adder).unwrap(), 8);
	assert_eq!(part2_impl(&adder), "");

	let swapped = ADDER
		.replace("s01 XOR c00 -> z01", "s01 XOR c00 -> b01")
		.replace("s01 AND c00 -> b01", "s01 AND c00 -> z01")
		.replace("x02 XOR y02 -> s02", "x02 XOR y02 -> a02")
		.replace("x02 AND y02 -> a02", "x02 AND y02 -> s02");
	assert_eq!(part2(&swapped).unwrap(), "a02,b01,s02,z01");

	assert!(matches!(part1("x00: 2"), Err(CircuitError::Wire { line: 1 })));
	assert!(matches!(part1("x00: 1\n\nx00 NAND x00 -> z00"), Err(CircuitError::Op { line: 3, .. })));
	assert!(matches!(part1("x00: 1\n\nx00 AND y00 -> z00"), Err(CircuitError::Unsettled { .. })));
}
