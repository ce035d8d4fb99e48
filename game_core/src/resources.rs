use crate::components::Side;

/// Per-player point counters. Only ever goes up during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    pub left: u64,  // Left player score
    pub right: u64, // Right player score
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Apply the scoring signal of one ball update
    pub fn apply(&mut self, signal: Option<Side>) {
        if let Some(side) = signal {
            self.increment(side);
        }
    }

    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = ScoreTracker::new();
        assert_eq!(score.left, 0);
        score.apply(Some(Side::Left));
        assert_eq!(score.left, 1);
        score.apply(Some(Side::Left));
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = ScoreTracker::new();
        score.apply(Some(Side::Right));
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_no_signal_is_noop() {
        let mut score = ScoreTracker::new();
        score.apply(None);
        assert_eq!(score, ScoreTracker::new());
    }

    #[test]
    fn test_score_has_no_cap() {
        let mut score = ScoreTracker {
            left: u32::MAX as u64,
            right: 0,
        };
        score.apply(Some(Side::Left));
        assert_eq!(score.left, u32::MAX as u64 + 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_events_scored() {
        let mut events = Events::new();
        events.scored(Side::Right);
        assert!(events.right_scored);
        assert!(!events.left_scored);
    }
}
