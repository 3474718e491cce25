//! Running log of finished games.
//!
//! Results are labelled by their slot within a block of five games, and
//! the log empties on the restart that follows each completed block, so
//! the panel never grows without bound.

/// Display log of game results, grouped in blocks of five.
#[derive(Debug, Clone, Default)]
pub struct ResultLog {
    entries: Vec<String>,
}

/// Games per display block.
const BLOCK: u32 = 5;

impl ResultLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged result lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Appends the result of a finished game.
    ///
    /// `game_number` is the 1-based session counter; the label shown is
    /// its slot within the current block of five.
    pub fn record(&mut self, game_number: u32, result: &str) {
        let slot = (game_number - 1) % BLOCK + 1;
        self.entries.push(format!("Game {} - {}", slot, result));
    }

    /// Called when a new game starts.
    ///
    /// Clears the log if the previous game closed out a block of five,
    /// i.e. `next_game_number` is the first of a new block.
    pub fn on_restart(&mut self, next_game_number: u32) {
        if next_game_number > 1 && (next_game_number - 1) % BLOCK == 0 {
            self.entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cycle_within_blocks_of_five() {
        let mut log = ResultLog::new();
        for n in 1..=7 {
            log.record(n, "X wins!");
        }
        assert!(log.entries()[0].starts_with("Game 1 -"));
        assert!(log.entries()[4].starts_with("Game 5 -"));
        // Sixth and seventh games wrap back to slots 1 and 2.
        assert!(log.entries()[5].starts_with("Game 1 -"));
        assert!(log.entries()[6].starts_with("Game 2 -"));
    }

    #[test]
    fn clears_after_each_fifth_game() {
        let mut log = ResultLog::new();
        for n in 1..=5 {
            log.record(n, "Draw!");
        }
        assert_eq!(log.entries().len(), 5);

        // Game 6 begins: the block of five just closed, so the log resets.
        log.on_restart(6);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn mid_block_restart_keeps_entries() {
        let mut log = ResultLog::new();
        log.record(1, "O wins!");
        log.record(2, "Draw!");

        log.on_restart(3);
        assert_eq!(log.entries().len(), 2);

        // The very first game also never clears.
        let mut fresh = ResultLog::new();
        fresh.on_restart(1);
        assert!(fresh.entries().is_empty());
    }
}
