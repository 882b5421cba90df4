use log::{error, info};

use crate::storage::HighScoreStore;

/// Points for clearing `lines` rows with one piece.
pub fn points_for(lines: u32) -> u32 {
    match lines {
        0 => 0,
        1 => 100,
        2 => 300,
        3 => 500,
        _ => 800,
    }
}

pub struct ScoreTracker {
    current: u32,
    best: u32,
    store: Box<dyn HighScoreStore>,
}

impl ScoreTracker {
    /// Reads the best score from `store` once; an empty store counts as zero.
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let best = store.load().unwrap_or(0);
        Self {
            current: 0,
            best,
            store,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn HighScoreStore {
        self.store.as_ref()
    }

    pub fn award(&mut self, lines: u32) {
        let points = points_for(lines);
        if points == 0 {
            return;
        }
        self.current = self.current.saturating_add(points);

        if self.current > self.best {
            self.best = self.current;
            info!("new high score: {}", self.best);
            if let Err(e) = self.store.save(self.best) {
                error!("failed to save high score {}: {}", self.best, e);
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
