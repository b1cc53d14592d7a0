use aoc_harness::runner::solution_runner;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 17: Chronospatial Computer",
    parsed = Computer,
    part_one = Day17,
    part_two = Day17
)]
impl super::AdventOfCode2024<17> {}

/*
Input describes a 3-bit computer: three registers and a program of 3-bit
numbers.

    Register A: 729
    Register B: 0
    Register C: 0

    Program: 0,1,5,4,3,0

Instructions take an opcode and one operand. Literal operands are the
operand value itself; combo operands 0 through 3 are literal and 4 through 6
read registers A through C.
*/

#[derive(Debug, Clone)]
struct Computer {
    registers: [u64; 3],
    program: Vec<u64>,
}

#[derive(thiserror::Error, Debug)]
enum ParseComputerError {
    #[error("expected at least 3 register values before the program")]
    MissingRegisters,
}

impl ParseData for Computer {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        // a free-form numeric scan; the prose around the numbers carries no
        // information
        let numbers = Regex::new(r"\d+")?;
        let values = numbers
            .find_iter(input)
            .map(|found| found.as_str().parse())
            .collect::<Result<Vec<u64>, _>>()?;
        if values.len() < 3 {
            return Err(ParseComputerError::MissingRegisters.into());
        }
        Ok(Self {
            registers: [values[0], values[1], values[2]],
            program: values[3..].to_vec(),
        })
    }
}

/*
For part 1, run the program and report everything the `out` instruction
produces, joined with commas.
*/

/// Divide `value` by `2^shift`, saturating to zero when the shift exceeds
/// the register width.
fn shift_down(value: u64, shift: u64) -> u64 {
    u32::try_from(shift)
        .ok()
        .and_then(|shift| value.checked_shr(shift))
        .unwrap_or(0)
}

impl Computer {
    /// Run the program to halt with register A starting at `register_a`,
    /// returning everything `out` produced.
    fn run(&self, register_a: u64) -> Vec<u64> {
        let mut registers = [register_a, self.registers[1], self.registers[2]];
        let mut instruction_pointer = 0;
        let mut outputs = Vec::new();

        while instruction_pointer + 1 < self.program.len() {
            let opcode = self.program[instruction_pointer];
            let operand = self.program[instruction_pointer + 1];
            let combo = match operand {
                0..=3 => operand,
                4 => registers[0],
                5 => registers[1],
                6 => registers[2],
                _ => 0,
            };
            instruction_pointer += 2;

            match opcode {
                // adv: A divided by 2^combo
                0 => registers[0] = shift_down(registers[0], combo),
                // bxl: B xor literal
                1 => registers[1] ^= operand,
                // bst: B = combo mod 8
                2 => registers[1] = combo % 8,
                // jnz: jump to the literal operand unless A is zero
                3 => {
                    if registers[0] != 0 {
                        instruction_pointer = usize::try_from(operand).unwrap_or(usize::MAX);
                    }
                }
                // bxc: B xor C, operand ignored
                4 => registers[1] ^= registers[2],
                // out: emit combo mod 8
                5 => outputs.push(combo % 8),
                // bdv, cdv: like adv into B and C
                6 => registers[1] = shift_down(registers[0], combo),
                7 => registers[2] = shift_down(registers[0], combo),
                // opcodes are 3-bit by construction
                _ => break,
            }
        }
        outputs
    }
}

struct Day17;

impl Solution<PartOne> for Day17 {
    type Input = Computer;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let outputs: Vec<String> = input
            .run(input.registers[0])
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(outputs.join(","))
    }
}

/*
For part 2, find the lowest initial value of register A that makes the
program output a copy of itself.

The program family consumes register A three bits per output loop (a single
`adv 3`), so A can be reconstructed back to front: keep the octal digits
that already reproduce the program's tail, then try each next digit against
one more trailing output. Digits are tried in ascending order, making the
first full reconstruction the lowest A.
*/

/// No initial register value reproduces the program.
#[derive(thiserror::Error, Debug)]
#[error("no initial register value makes the program a quine")]
struct NoQuine;

impl Computer {
    fn find_quine_register(&self) -> Option<u64> {
        if self.program.is_empty() {
            return None;
        }
        self.reconstruct_register(0, 1)
    }

    /// Extend `register_a`, which reproduces the program's last
    /// `suffix_length - 1` values, by one more octal digit.
    fn reconstruct_register(&self, register_a: u64, suffix_length: usize) -> Option<u64> {
        let suffix = &self.program[self.program.len() - suffix_length..];
        for digit in 0..8 {
            let candidate = (register_a << 3) | digit;
            if self.run(candidate).as_slice() != suffix {
                continue;
            }
            if suffix_length == self.program.len() {
                return Some(candidate);
            }
            if let Some(found) = self.reconstruct_register(candidate, suffix_length + 1) {
                return Some(found);
            }
        }
        None
    }
}

impl Solution<PartTwo> for Day17 {
    type Input = Computer;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let register_a = input.find_quine_register().ok_or(NoQuine)?;
        Ok(register_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    const QUINE_EXAMPLE_INPUT: &str = r"Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Computer::parse(EXAMPLE_INPUT)?;
        let result = <Day17 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "4,6,3,5,6,3,5,2,1,0");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Computer::parse(QUINE_EXAMPLE_INPUT)?;
        let result = <Day17 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 117440);
        Ok(())
    }

    #[test]
    fn out_emits_combo_operands_mod_8() {
        let computer = Computer {
            registers: [10, 0, 0],
            program: vec![5, 0, 5, 1, 5, 4],
        };
        assert_eq!(computer.run(10), vec![0, 1, 2]);
    }

    #[test]
    fn quine_register_reproduces_the_program() -> DynamicResult<()> {
        let parsed = Computer::parse(QUINE_EXAMPLE_INPUT)?;
        assert_eq!(parsed.run(117440), parsed.program);
        Ok(())
    }
}
