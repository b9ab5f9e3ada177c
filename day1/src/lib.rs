use util::{parse_nice, parse_number};

const WINDOW_LEN: usize = 3;

/// Three measurement windows, staggered by one line each, so every
/// measurement lands in up to three pending sums. A full window yields its
/// sum, gets compared against the previously completed one, and empties.
///
/// A measurement that failed to parse is `None`; it makes every sum it
/// participates in `None`, so no comparison involving it can ever count as
/// an increase.
#[derive(Debug, Default)]
struct MeasurementWindows {
    slots: [Vec<Option<i64>>; WINDOW_LEN],
    line_number: usize,
    last_sum: Option<i64>,
    increases: u32,
}

impl MeasurementWindows {
    fn push(&mut self, measurement: Option<i64>) {
        self.line_number += 1;
        for (offset, slot) in self.slots.iter_mut().enumerate() {
            // Slot j only starts collecting at line j + 1.
            if self.line_number <= offset {
                break;
            }

            slot.push(measurement);
            if slot.len() == WINDOW_LEN {
                let sum = slot.drain(..).sum::<Option<i64>>();
                if let (Some(previous), Some(current)) = (self.last_sum, sum) {
                    if current > previous {
                        self.increases += 1;
                    }
                }
                self.last_sum = sum;
            }
        }
    }
}

pub fn count_measurement_increases(input: impl Iterator<Item = String>) -> u32 {
    let mut increases = 0;
    let mut previous: Option<i64> = None;
    for line in input {
        let current = parse_nice(&line, parse_number);
        if let (Some(previous), Some(current)) = (previous, current) {
            if current > previous {
                increases += 1;
            }
        }
        previous = current;
    }

    increases
}

pub fn count_window_sum_increases(input: impl Iterator<Item = String>) -> u32 {
    let mut windows = MeasurementWindows::default();
    for line in input {
        windows.push(parse_nice(&line, parse_number));
    }

    windows.increases
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEST_INPUT: &str = r"199
200
208
210
200
207
240
269
260
263";

    #[test]
    fn part1() {
        let res = count_measurement_increases(TEST_INPUT.lines().map(|l| l.to_string()));
        assert_eq!(res, 7);
    }

    #[test]
    fn part2() {
        let res = count_window_sum_increases(TEST_INPUT.lines().map(|l| l.to_string()));
        assert_eq!(res, 5);
    }

    #[rstest]
    #[case(&["100", "oops", "300"], 0)]
    #[case(&["100", "200", "oops", "300"], 1)]
    #[case(&["oops", "100", "200", "300"], 2)]
    fn bad_measurement_breaks_the_comparison_chain(
        #[case] lines: &[&str],
        #[case] expected: u32,
    ) {
        let res = count_measurement_increases(lines.iter().map(|l| l.to_string()));
        assert_eq!(res, expected);
    }

    #[test]
    fn no_sum_before_the_first_full_window() {
        let mut windows = MeasurementWindows::default();
        windows.push(Some(1));
        windows.push(Some(2));
        assert_eq!(windows.last_sum, None);
        assert_eq!(windows.increases, 0);
    }

    #[test]
    fn first_full_window_has_no_predecessor() {
        let mut windows = MeasurementWindows::default();
        windows.push(Some(1));
        windows.push(Some(2));
        windows.push(Some(3));
        assert_eq!(windows.last_sum, Some(6));
        assert_eq!(windows.increases, 0);
    }

    #[test]
    fn bad_measurement_poisons_its_windows() {
        // The bad fourth line sits in the windows starting at lines 2, 3
        // and 4, so only the very first window completes with a value.
        let lines = ["1", "2", "3", "oops", "10", "20", "30"];
        let res = count_window_sum_increases(lines.iter().map(|l| l.to_string()));
        assert_eq!(res, 0);
    }

    #[test]
    fn increases_resume_after_a_poisoned_window() {
        let lines = ["1", "2", "3", "oops", "10", "20", "30", "40", "50"];
        // Sums complete in the order 6, None, None, None, 60, 90, 120; the
        // first valid sum after the poisoned stretch has no valid
        // predecessor, then 90 > 60 and 120 > 90 both count.
        let res = count_window_sum_increases(lines.iter().map(|l| l.to_string()));
        assert_eq!(res, 2);
    }
}
