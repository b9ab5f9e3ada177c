use day3::DiagnosticReport;

use anyhow::Result;
use util::read_lines;

fn main() -> Result<()> {
    let report = DiagnosticReport::from_lines(read_lines("data/3.txt")?)?;

    println!("Oxygen generator rating: {}", report.oxygen_generator_rating()?);
    println!("CO2 scrubber rating: {}", report.co2_scrubber_rating()?);
    println!("Life support rating: {}", report.life_support_rating()?);

    Ok(())
}
