// src/scoring.rs

use crate::model::{Question, UserAnswer};

/// Igualdad exacta, en orden y sensible a mayúsculas. Sin puntuación parcial.
pub fn is_correct(user_answer: &[String], correct_answer: &[String]) -> bool {
    user_answer.len() == correct_answer.len()
        && user_answer
            .iter()
            .zip(correct_answer)
            .all(|(user, correct)| user == correct)
}

pub fn score_answer(question: &Question, user_answer: Vec<String>) -> UserAnswer {
    let is_correct = is_correct(&user_answer, &question.correct_answer);
    UserAnswer {
        question_id: question.question_id.clone(),
        user_answer,
        is_correct,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl FeedbackTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => FeedbackTier::Excellent,
            70.. => FeedbackTier::GreatJob,
            50.. => FeedbackTier::GoodEffort,
            _ => FeedbackTier::KeepPracticing,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent!",
            FeedbackTier::GreatJob => "Great job!",
            FeedbackTier::GoodEffort => "Good effort!",
            FeedbackTier::KeepPracticing => "Keep practicing!",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "You have an exceptional grasp of sentence construction.",
            FeedbackTier::GreatJob => "You have a strong understanding of sentence construction.",
            FeedbackTier::GoodEffort => "You're on the right track with sentence construction.",
            FeedbackTier::KeepPracticing => {
                "With more practice, you'll improve your sentence construction skills."
            }
        }
    }
}

/// Entrada del repaso: pregunta original + respuesta del usuario + correcta.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewEntry {
    pub question: Question,
    pub user_answer: Vec<String>,
    pub correct_answer: Vec<String>,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsSummary {
    pub total_correct: usize,
    pub total_questions: usize,
    pub percentage: u32,
    pub tier: FeedbackTier,
    pub review: Vec<ReviewEntry>,
}

/// Porcentaje redondeado; 0 si no hay respuestas.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

pub fn summarize(answers: &[UserAnswer], questions: &[Question]) -> ResultsSummary {
    let total_correct = answers.iter().filter(|a| a.is_correct).count();
    let total_questions = answers.len();
    let percentage = percentage(total_correct, total_questions);

    // Las respuestas sin pregunta conocida no aparecen en el repaso
    let review = answers
        .iter()
        .filter_map(|answer| {
            let question = questions
                .iter()
                .find(|q| q.question_id == answer.question_id)?;
            Some(ReviewEntry {
                question: question.clone(),
                user_answer: answer.user_answer.clone(),
                correct_answer: question.correct_answer.clone(),
                is_correct: answer.is_correct,
            })
        })
        .collect();

    ResultsSummary {
        total_correct,
        total_questions,
        percentage,
        tier: FeedbackTier::from_percentage(percentage),
        review,
    }
}
