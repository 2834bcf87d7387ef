// src/view_models.rs

use crate::scoring::FeedbackTier;

/// Semáforo compartido por el timer y la puntuación.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Bad,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlankCell {
    pub index: usize,
    pub word: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionCell {
    pub index: usize,
    pub word: String,
    pub used: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimerInfo {
    pub time_left: u32,
    pub fraction_left: f32,
    pub warning: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub number: usize, // 1, 2, 3…
    pub total: usize,
    pub parts: Vec<String>, // texto entre huecos, `blanks.len() + 1` trozos
    pub blanks: Vec<BlankCell>,
    pub options: Vec<OptionCell>,
    pub timer: TimerInfo,
    pub can_advance: bool,
    pub is_last: bool,
    pub accepts_input: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRow {
    pub number: usize,
    pub text: String,
    pub is_correct: bool,
    pub user_answer: Vec<String>,
    pub correct_answer: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub percentage: u32,
    pub total_correct: usize,
    pub total_questions: usize,
    pub tier: FeedbackTier,
    pub rows: Vec<ReviewRow>,
}

impl BlankCell {
    pub fn label(&self) -> String {
        self.word.clone().unwrap_or_else(|| "___________".to_string())
    }

    pub fn hover(&self) -> String {
        match &self.word {
            Some(word) => format!("Remove word: {word}"),
            None => format!("Empty blank {}", self.index + 1),
        }
    }
}

impl TimerInfo {
    pub fn label(&self) -> String {
        format!("{}s", self.time_left)
    }

    pub fn tone(&self) -> Tone {
        if self.fraction_left > 0.6 {
            Tone::Good
        } else if self.fraction_left > 0.3 {
            Tone::Caution
        } else {
            Tone::Bad
        }
    }
}

impl QuestionView {
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.number as f32 / self.total as f32
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last { "Finish" } else { "Next" }
    }
}

impl ReviewRow {
    pub fn status_label(&self) -> &'static str {
        if self.is_correct { "Correct" } else { "Incorrect" }
    }

    /// Palabras del usuario; los huecos vacíos se muestran como "—".
    pub fn user_words(&self) -> Vec<String> {
        self.user_answer
            .iter()
            .map(|w| if w.is_empty() { "—".to_string() } else { w.clone() })
            .collect()
    }
}

impl ResultsView {
    pub fn score_line(&self) -> String {
        format!(
            "You got {} out of {} questions correct",
            self.total_correct, self.total_questions
        )
    }

    pub fn tone(&self) -> Tone {
        match self.percentage {
            70.. => Tone::Good,
            50.. => Tone::Caution,
            _ => Tone::Bad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_tone_follows_remaining_fraction() {
        let info = |left: u32| TimerInfo {
            time_left: left,
            fraction_left: left as f32 / 30.0,
            warning: left <= 10,
        };
        assert_eq!(info(30).tone(), Tone::Good);
        assert_eq!(info(18).tone(), Tone::Caution);
        assert_eq!(info(9).tone(), Tone::Bad);
        assert_eq!(info(7).label(), "7s");
    }

    #[test]
    fn blank_labels() {
        let empty = BlankCell { index: 1, word: None };
        let full = BlankCell { index: 0, word: Some("cat".into()) };
        assert_eq!(empty.label(), "___________");
        assert_eq!(empty.hover(), "Empty blank 2");
        assert_eq!(full.label(), "cat");
        assert_eq!(full.hover(), "Remove word: cat");
    }

    #[test]
    fn review_row_marks_missing_words() {
        let row = ReviewRow {
            number: 1,
            text: String::new(),
            is_correct: false,
            user_answer: vec!["cat".into(), String::new()],
            correct_answer: vec!["cat".into(), "mat".into()],
        };
        assert_eq!(row.user_words(), vec!["cat".to_string(), "—".to_string()]);
        assert_eq!(row.status_label(), "Incorrect");
    }
}
