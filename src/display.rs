//! Terminal rendering of rolls, bank results and the leaderboard.
//!
//! Every renderer is a borrowed view implementing `Display`; none of them
//! mutate game state.

use std::fmt;

use crate::core::{DiePool, Player};
use crate::rules::{BatchReport, LockOutcome};

const RULE: char = '—';

fn rule(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    for _ in 0..width {
        write!(f, "{}", RULE)?;
    }
    Ok(())
}

/// Table of the pool after a roll, banked dice grouped on the left.
///
/// The index row shows each die's position, which is what selections use.
pub struct PoolTable<'a> {
    pub pool: &'a DiePool,
    pub throw: u8,
}

impl fmt::Display for PoolTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.pool.display_order();
        let width = 12 + 3 * order.len();

        rule(f, width)?;
        writeln!(f, " Roll number {}", self.throw)?;

        write!(f, "Banked |  ")?;
        let banked: Vec<String> = order
            .iter()
            .map(|&p| {
                let locked = self.pool.is_locked(p).unwrap_or(false);
                format!("{:<3}", if locked { 'T' } else { 'F' })
            })
            .collect();
        writeln!(f, "{}", banked.join(" "))?;

        write!(f, "Value  |  ")?;
        let values: Vec<String> = order
            .iter()
            .map(|&p| format!("{:<3}", self.pool.value_at(p).unwrap_or(0)))
            .collect();
        writeln!(f, "{}", values.join(" "))?;

        write!(f, "       |  ")?;
        let bars: Vec<String> = order.iter().map(|_| format!("{:<3}", '|')).collect();
        writeln!(f, "{}", bars.join(" "))?;

        write!(f, "Index  |  ")?;
        let indices: Vec<String> = order.iter().map(|p| format!("{:<3}", p)).collect();
        writeln!(f, "{}", indices.join(" "))?;

        rule(f, width)
    }
}

/// Messages for a batch that did not go through cleanly.
///
/// Renders nothing when every request was banked or dropped.
pub struct BatchNotice<'a>(pub &'a BatchReport);

impl fmt::Display for BatchNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(entry) = self.0.rejection() {
            if let LockOutcome::Rejected(rank) = &entry.outcome {
                write!(f, "Could not bank {} due to \"missing {}\"", entry.value, rank)?;
            }
        }
        if let Some(entry) = self.0.defect() {
            if let LockOutcome::Defect(err) = &entry.outcome {
                write!(f, "Internal error while banking position {}: {}", entry.position, err)?;
            }
        }
        Ok(())
    }
}

/// Players ranked by cumulative score.
pub struct LeaderboardTable<'a>(pub &'a [&'a Player]);

impl fmt::Display for LeaderboardTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "#NN " + name + " - " + score
        let width = 4 + 10 + 3 + 3;

        writeln!(f)?;
        writeln!(f, "LEADERBOARD")?;
        rule(f, width)?;
        writeln!(f)?;
        for (i, player) in self.0.iter().enumerate() {
            writeln!(f, "#{:2} {:<10} - {:3}", i + 1, player.name(), player.score())?;
        }
        rule(f, width)?;
        writeln!(f)
    }
}

/// Framed announcement of the winner.
pub struct WinnerBanner<'a>(pub &'a Player);

impl fmt::Display for WinnerBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!(
            "{} has won the game with {} points",
            self.0.name(),
            self.0.score()
        );
        let width = text.chars().count();

        writeln!(f)?;
        rule(f, width)?;
        writeln!(f)?;
        writeln!(f, "{}", text)?;
        rule(f, width)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceError, PlayerId};
    use crate::rules::{BankingEngine, BatchEntry};

    #[test]
    fn test_pool_table_layout() {
        let mut pool = DiePool::with_values(&[3, 6, 1, 2, 5]);
        pool.lock_at(1).unwrap();

        let table = PoolTable { pool: &pool, throw: 2 }.to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with(" Roll number 2"));
        assert_eq!(lines[0].chars().filter(|&c| c == RULE).count(), 27);
        assert_eq!(lines[1], "Banked |  T   F   F   F   F  ");
        assert_eq!(lines[2], "Value  |  6   3   1   2   5  ");
        assert_eq!(lines[4], "Index  |  1   0   2   3   4  ");
    }

    #[test]
    fn test_batch_notice_rejection() {
        let mut pool = DiePool::with_values(&[5, 1, 1, 1, 1]);
        let report = BankingEngine.apply_batch(&mut pool, &[0]);
        assert_eq!(
            BatchNotice(&report).to_string(),
            "Could not bank 5 due to \"missing ship\""
        );
    }

    #[test]
    fn test_batch_notice_clean() {
        let mut pool = DiePool::with_values(&[6, 1, 1, 1, 1]);
        let report = BankingEngine.apply_batch(&mut pool, &[0, 9]);
        assert!(BatchNotice(&report).to_string().is_empty());
    }

    #[test]
    fn test_batch_notice_defect() {
        let report = BatchReport::from(vec![BatchEntry {
            position: 2,
            value: 3,
            outcome: LockOutcome::Defect(DiceError::InvalidOperation),
        }]);
        assert_eq!(
            BatchNotice(&report).to_string(),
            "Internal error while banking position 2: cannot roll a locked die"
        );
    }

    #[test]
    fn test_leaderboard() {
        let mut dennis = Player::new(PlayerId::new(0), "Dennis");
        let emil = Player::new(PlayerId::new(1), "Emil");
        dennis.add_score(12);

        let rendered = LeaderboardTable(&[&dennis, &emil]).to_string();
        assert!(rendered.contains("LEADERBOARD"));
        assert!(rendered.contains("# 1 Dennis     -  12"));
        assert!(rendered.contains("# 2 Emil       -   0"));
    }

    #[test]
    fn test_winner_banner() {
        let mut emil = Player::new(PlayerId::new(1), "Emil");
        emil.add_score(23);
        let rendered = WinnerBanner(&emil).to_string();
        assert!(rendered.contains("Emil has won the game with 23 points"));
    }
}
