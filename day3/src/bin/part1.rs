use day3::DiagnosticReport;

use anyhow::Result;
use util::read_lines;

fn main() -> Result<()> {
    let report = DiagnosticReport::from_lines(read_lines("data/3.txt")?)?;

    println!("Gamma Rate: {}", report.gamma_rate());
    println!("Epsilon Rate: {}", report.epsilon_rate());
    println!("Power consumption: {}", report.power_consumption());

    Ok(())
}
