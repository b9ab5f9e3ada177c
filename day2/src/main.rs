use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;
use util::read_lines;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Forward(i64),
    Up(i64),
    Down(i64),
}

#[derive(Error, Debug)]
#[error("Error parsing into Command")]
struct CommandParseError;

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: [&str; 2] = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_: Vec<_>| CommandParseError)?;
        let v = parts[1].parse().map_err(|_| CommandParseError)?;
        let command = match parts[0] {
            "forward" => Command::Forward(v),
            "up" => Command::Up(v),
            "down" => Command::Down(v),
            _ => return Err(CommandParseError),
        };

        Ok(command)
    }
}

#[derive(Debug, Default, PartialEq)]
struct Position {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Position {
    fn advance(&mut self, command: &Command) {
        match command {
            Command::Forward(v) => {
                self.horizontal += v;
                self.depth += self.aim * v;
            }
            Command::Up(v) => self.aim -= v,
            Command::Down(v) => self.aim += v,
        }
    }
}

// Lines that don't parse into a known command are skipped, not errors.
fn final_position(input: impl Iterator<Item = impl Into<String>>) -> Position {
    input
        .filter_map(|line| line.into().parse::<Command>().ok())
        .fold(Position::default(), |mut position, command| {
            position.advance(&command);
            position
        })
}

fn main() -> Result<()> {
    let position = final_position(read_lines("data/2.txt")?);

    println!("Final position: {}", position.horizontal * position.depth);
    println!("Aim: {}", position.aim);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_input() -> String {
        r"forward 5
down 5
forward 8
up 3
down 8
forward 2"
            .to_string()
    }

    #[test]
    fn example_course() {
        let position = final_position(test_input().lines());

        assert_eq!(position.horizontal, 15);
        assert_eq!(position.depth, 60);
        assert_eq!(position.horizontal * position.depth, 900);
        assert_eq!(position.aim, 10);
    }

    #[rstest]
    #[case("forward 5", Some(Command::Forward(5)))]
    #[case("up 3", Some(Command::Up(3)))]
    #[case("down 8", Some(Command::Down(8)))]
    #[case("sideways 2", None)]
    #[case("forward", None)]
    #[case("forward two", None)]
    fn command_parsing(#[case] line: &str, #[case] expected: Option<Command>) {
        assert_eq!(line.parse::<Command>().ok(), expected);
    }

    #[test]
    fn unrecognized_commands_are_skipped() {
        let input = r"forward 5
sideways 2
down 5";
        let position = final_position(input.lines());

        assert_eq!(position.horizontal, 5);
        assert_eq!(position.depth, 0);
        assert_eq!(position.aim, 5);
    }
}
