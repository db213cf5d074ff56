//! Score and lives bookkeeping: stored in `SimulationEngine`, not in a pool.

use tailgunner_core::state::ScoreView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub lives: u32,
    /// Current wave, 1-based once a game starts.
    pub wave: u32,
    /// Score at which the last extra life was awarded.
    pub score_at_last_life: u32,
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub shots_fired: u32,
}

impl ScoreState {
    /// Fresh state for a new game on wave 1.
    pub fn new_game(starting_lives: u32) -> Self {
        Self {
            lives: starting_lives,
            wave: 1,
            ..Default::default()
        }
    }

    /// Record a shot and its hits. Returns how many extra lives were earned.
    pub fn record_shot(&mut self, hits: u32, points_per_extra_life: u32) -> u32 {
        self.shots_fired += 1;
        self.score += hits;
        self.enemies_destroyed += hits;

        let mut extra = 0;
        while points_per_extra_life > 0
            && self.score - self.score_at_last_life >= points_per_extra_life
        {
            self.lives += 1;
            self.score_at_last_life += points_per_extra_life;
            extra += 1;
        }
        extra
    }

    /// Subtract escaped enemies from the life total.
    pub fn record_escapes(&mut self, escaped: u32) {
        self.enemies_escaped += escaped;
        self.lives = self.lives.saturating_sub(escaped);
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            lives: self.lives,
            wave: self.wave,
            enemies_destroyed: self.enemies_destroyed,
            enemies_escaped: self.enemies_escaped,
            shots_fired: self.shots_fired,
        }
    }
}
