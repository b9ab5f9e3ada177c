use anyhow::{anyhow, bail, ensure, Result};

#[derive(Debug)]
pub struct DiagnosticReport {
    entries: Vec<String>,
    width: usize,
}

impl DiagnosticReport {
    /// Collects the report entries, rejecting ragged widths and characters
    /// other than `0`/`1` up front so the tallies below can't silently go
    /// wrong.
    pub fn from_lines(input: impl Iterator<Item = impl Into<String>>) -> Result<Self> {
        let entries: Vec<String> = input.map(|line| line.into()).collect();
        let width = entries
            .first()
            .map(|entry| entry.len())
            .ok_or(anyhow!("empty diagnostic report"))?;

        for entry in &entries {
            ensure!(
                entry.len() == width,
                "ragged entry {:?}: expected width {}, got {}",
                entry,
                width,
                entry.len()
            );
            ensure!(
                entry.bytes().all(|b| b == b'0' || b == b'1'),
                "entry {:?} contains characters other than 0 and 1",
                entry
            );
        }

        Ok(Self { entries, width })
    }

    /// Number of entries with a `0` at each position. A position never seen
    /// as `0` simply stays at zero.
    fn zero_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.width];
        for entry in &self.entries {
            for (pos, b) in entry.bytes().enumerate() {
                if b == b'0' {
                    counts[pos] += 1;
                }
            }
        }

        counts
    }

    /// The majority bit of every position: 0 where zeroes outnumber half the
    /// entries, 1 otherwise.
    pub fn gamma_rate(&self) -> u32 {
        let half = self.entries.len() / 2;
        self.zero_counts()
            .iter()
            .fold(0, |rate, &zeroes| (rate << 1) | u32::from(zeroes <= half))
    }

    /// The minority bit of every position: the complement of gamma within
    /// the report width.
    pub fn epsilon_rate(&self) -> u32 {
        !self.gamma_rate() & ((1 << self.width) - 1)
    }

    pub fn power_consumption(&self) -> u32 {
        self.gamma_rate() * self.epsilon_rate()
    }

    pub fn oxygen_generator_rating(&self) -> Result<u32> {
        self.find_rating(BitCriteria::Majority)
    }

    pub fn co2_scrubber_rating(&self) -> Result<u32> {
        self.find_rating(BitCriteria::Minority)
    }

    pub fn life_support_rating(&self) -> Result<u32> {
        Ok(self.oxygen_generator_rating()? * self.co2_scrubber_rating()?)
    }

    /// Filters the candidate set position by position until one entry
    /// survives. The thresholds are deliberately asymmetric: zeroes win a
    /// position only with `> n / 2` (integer division), while ones win with
    /// `>= n / 2`, so an exact tie goes to the ones side. Changing either
    /// comparison changes the surviving entry on tied inputs.
    fn find_rating(&self, criteria: BitCriteria) -> Result<u32> {
        let mut candidates: Vec<&str> = self.entries.iter().map(String::as_str).collect();

        for pos in 0..self.width {
            let zeroes = candidates
                .iter()
                .filter(|entry| entry.as_bytes()[pos] == b'0')
                .count();
            let ones = candidates.len() - zeroes;

            let majority = if zeroes > candidates.len() / 2 {
                b'0'
            } else if 2 * ones >= candidates.len() {
                b'1'
            } else {
                bail!("no majority at position {pos}");
            };
            let keep = match criteria {
                BitCriteria::Majority => majority,
                BitCriteria::Minority => flip(majority),
            };

            candidates.retain(|entry| entry.as_bytes()[pos] == keep);
            if let [rating] = candidates[..] {
                return u32::from_str_radix(rating, 2).map_err(anyhow::Error::msg);
            }
        }

        bail!(
            "no unique candidate left after {} positions, {} remain",
            self.width,
            candidates.len()
        )
    }
}

#[derive(Copy, Clone, Debug)]
enum BitCriteria {
    Majority,
    Minority,
}

fn flip(bit: u8) -> u8 {
    match bit {
        b'0' => b'1',
        _ => b'0',
    }
}
