use cipher_core::model::{Performance, QuizSummary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: usize,
    pub total: usize,
    pub percentage: usize,
    pub performance: Performance,
    pub message: String,
}

impl From<QuizSummary> for ResultsVm {
    fn from(summary: QuizSummary) -> Self {
        let percentage = summary.percentage();
        let performance = summary.performance();
        let message = match performance {
            Performance::Perfect => "Perfect score! You're an Al Bhed master!".to_string(),
            Performance::Excellent => format!("Excellent work! {percentage}% correct!"),
            Performance::Good => format!("Good job! {percentage}% correct!"),
            Performance::KeepPracticing => format!("Keep practicing! {percentage}% correct!"),
        };
        Self {
            score: summary.score(),
            total: summary.total(),
            percentage,
            performance,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_tracks_performance() {
        assert_eq!(
            ResultsVm::from(QuizSummary::new(26, 26)).message,
            "Perfect score! You're an Al Bhed master!"
        );
        assert_eq!(
            ResultsVm::from(QuizSummary::new(21, 26)).message,
            "Excellent work! 81% correct!"
        );
        assert_eq!(
            ResultsVm::from(QuizSummary::new(16, 26)).message,
            "Good job! 62% correct!"
        );
        assert_eq!(
            ResultsVm::from(QuizSummary::new(1, 2)).message,
            "Keep practicing! 50% correct!"
        );
    }
}
