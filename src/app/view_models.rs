use super::*;

impl QuizApp {
    /// Datos de la pregunta en curso para la vista.
    pub fn question_view(&self) -> Option<QuestionView> {
        let session = self.session()?;
        if matches!(session.phase(), QuizPhase::NotStarted | QuizPhase::Completed) {
            return None;
        }
        let question = session.current_question()?;
        let placeholder = &session.settings().placeholder;
        let accepts_input = session.phase() == QuizPhase::InProgress;

        let (blanks, timer) = match session.round() {
            Some(round) => (
                round
                    .blanks
                    .placed()
                    .iter()
                    .enumerate()
                    .map(|(index, word)| BlankCell {
                        index,
                        word: word.clone(),
                    })
                    .collect(),
                TimerInfo {
                    time_left: round.timer.time_left(),
                    fraction_left: round.timer.fraction_left(),
                    warning: round.timer.is_warning(),
                },
            ),
            None => (
                (0..question.blank_count(placeholder))
                    .map(|index| BlankCell { index, word: None })
                    .collect(),
                TimerInfo {
                    time_left: 0,
                    fraction_left: 0.0,
                    warning: true,
                },
            ),
        };

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, word)| OptionCell {
                index,
                word: word.clone(),
                used: session.round().is_some_and(|r| r.blanks.is_used(index)),
            })
            .collect();

        Some(QuestionView {
            number: session.question_number(),
            total: session.total_questions(),
            parts: question
                .parts(placeholder)
                .into_iter()
                .map(str::to_string)
                .collect(),
            blanks,
            options,
            timer,
            can_advance: session.can_advance(),
            is_last: session.is_last_question(),
            accepts_input,
        })
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        let session = self.session()?;
        let summary = session.results()?;
        let placeholder = &session.settings().placeholder;

        let rows = summary
            .review
            .iter()
            .enumerate()
            .map(|(i, entry)| ReviewRow {
                number: i + 1,
                text: entry.question.review_text(placeholder),
                is_correct: entry.is_correct,
                user_answer: entry.user_answer.clone(),
                correct_answer: entry.correct_answer.clone(),
            })
            .collect();

        Some(ResultsView {
            percentage: summary.percentage,
            total_correct: summary.total_correct,
            total_questions: summary.total_questions,
            tier: summary.tier,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::ready_app;
    use crate::scoring::FeedbackTier;

    #[test]
    fn question_view_reflects_blanks_and_options() {
        let mut app = ready_app();
        assert!(app.question_view().is_none());

        app.start_quiz();
        app.place_option(1);
        let view = app.question_view().expect("in progress");

        assert_eq!(view.progress_label(), "Question 1 of 2");
        assert_eq!(view.parts, vec!["The ", " sat on the ", "."]);
        assert_eq!(view.blanks[0].word.as_deref(), Some("mat"));
        assert_eq!(view.blanks[1].word, None);
        assert!(view.options[1].used);
        assert!(!view.options[0].used);
        assert!(!view.can_advance);
        assert_eq!(view.advance_label(), "Next");
        assert_eq!(view.timer.time_left, 30);
        assert!(view.accepts_input);
    }

    #[test]
    fn results_view_summarises_run() {
        let mut app = ready_app();
        app.start_quiz();
        app.place_option(0);
        app.place_option(1);
        app.next_question();
        app.place_option(1);
        app.place_option(0);
        app.next_question();

        let results = app.results_view().expect("completed");
        assert_eq!(results.percentage, 50);
        assert_eq!(results.tier, FeedbackTier::GoodEffort);
        assert_eq!(results.score_line(), "You got 1 out of 2 questions correct");
        assert_eq!(results.rows[0].text, "The _____ sat on the _____.");
        assert!(!results.rows[1].is_correct);
        assert_eq!(results.rows[1].user_answer, vec!["mat".to_string(), "cat".to_string()]);
    }
}
