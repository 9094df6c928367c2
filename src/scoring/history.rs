//! Per-round points history.

use std::fmt;

/// Points a player scored in each round, indexed by round number - 1.
///
/// Empty slots mark rounds the player did not take part in. They are kept so that
/// positions stay aligned with round numbers, but never count towards wins or
/// averages.
///
/// Persisted as a comma-joined string (`"2,,4"`); a missing column is an empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsHistory(Vec<Option<i32>>);

impl PointsHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Reads the stored column value.
    ///
    /// Segments that are not integers are treated as empty slots.
    pub fn from_column(value: Option<&str>) -> Self {
        match value {
            None => Self::new(),
            Some(raw) => Self(
                raw.split(',')
                    .map(|segment| segment.trim().parse::<i32>().ok())
                    .collect(),
            ),
        }
    }

    /// Encodes the history for storage, `None` when there are no slots at all.
    pub fn to_column(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    pub fn slots(&self) -> &[Option<i32>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Points of every round the player took part in.
    pub fn participations(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Mean over non-empty slots, 0 without any participation.
    pub fn average(&self) -> f64 {
        let (sum, count) = self
            .participations()
            .fold((0i64, 0u32), |(sum, count), points| {
                (sum + i64::from(points), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            sum as f64 / f64::from(count)
        }
    }

    /// Grows the history with empty slots until it covers `rounds` rounds.
    pub fn pad_to(&mut self, rounds: usize) {
        if self.0.len() < rounds {
            self.0.resize(rounds, None);
        }
    }

    /// Stores the points for a one-based round number, padding skipped rounds.
    pub fn record(&mut self, round_number: u32, points: i32) {
        let Some(index) = (round_number as usize).checked_sub(1) else {
            return;
        };
        self.pad_to(index + 1);
        self.0[index] = Some(points);
    }
}

impl fmt::Display for PointsHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            if let Some(points) = slot {
                write!(f, "{points}")?;
            }
        }
        Ok(())
    }
}
