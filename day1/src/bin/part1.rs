use day1::count_measurement_increases;

use anyhow::Result;
use util::read_lines;

fn main() -> Result<()> {
    let res = count_measurement_increases(read_lines("data/1.txt")?);

    println!("Total number of depth increases: {res}");

    Ok(())
}
