/// Coarse grading of a finished quiz, used for the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Perfect,
    Excellent,
    Good,
    KeepPracticing,
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    score: usize,
    total: usize,
}

impl QuizSummary {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of correct answers, rounded half up. Zero for an empty quiz.
    #[must_use]
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.score * 200 + self.total) / (self.total * 2)
    }

    #[must_use]
    pub fn performance(&self) -> Performance {
        match self.percentage() {
            100.. => Performance::Perfect,
            80..=99 => Performance::Excellent,
            60..=79 => Performance::Good,
            _ => Performance::KeepPracticing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(QuizSummary::new(1, 2).percentage(), 50);
        assert_eq!(QuizSummary::new(1, 3).percentage(), 33);
        assert_eq!(QuizSummary::new(2, 3).percentage(), 67);
        assert_eq!(QuizSummary::new(1, 8).percentage(), 13);
        assert_eq!(QuizSummary::new(0, 0).percentage(), 0);
    }

    #[test]
    fn performance_tiers_follow_percentage() {
        assert_eq!(QuizSummary::new(26, 26).performance(), Performance::Perfect);
        assert_eq!(QuizSummary::new(21, 26).performance(), Performance::Excellent);
        assert_eq!(QuizSummary::new(4, 5).performance(), Performance::Excellent);
        assert_eq!(QuizSummary::new(3, 5).performance(), Performance::Good);
        assert_eq!(QuizSummary::new(1, 2).performance(), Performance::KeepPracticing);
        assert_eq!(QuizSummary::new(0, 0).performance(), Performance::KeepPracticing);
    }

    #[test]
    fn score_is_clamped_to_total() {
        let summary = QuizSummary::new(5, 3);
        assert_eq!(summary.score(), 3);
        assert_eq!(summary.percentage(), 100);
    }
}
