use day1::count_window_sum_increases;

use anyhow::Result;
use util::read_lines;

fn main() -> Result<()> {
    let res = count_window_sum_increases(read_lines("data/1.txt")?);

    println!("Number of increases observed: {res}");

    Ok(())
}
