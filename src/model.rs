use serde::{Deserialize, Serialize};

/// Marcador de hueco que usa el banco de preguntas.
pub const DEFAULT_PLACEHOLDER: &str = "_____________";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub question: String,            // Texto con los huecos
    pub options: Vec<String>,        // Palabras candidatas (puede haber distractores)
    pub correct_answer: Vec<String>, // Una palabra por hueco, en orden
}

impl Question {
    /// Número de huecos = apariciones del marcador.
    pub fn blank_count(&self, placeholder: &str) -> usize {
        if placeholder.is_empty() {
            return 0;
        }
        self.question.matches(placeholder).count()
    }

    /// Fragmentos de texto entre huecos (siempre `blank_count + 1`).
    pub fn parts<'a>(&'a self, placeholder: &str) -> Vec<&'a str> {
        if placeholder.is_empty() {
            return vec![self.question.as_str()];
        }
        self.question.split(placeholder).collect()
    }

    /// Texto para el repaso final, con huecos cortos.
    pub fn review_text(&self, placeholder: &str) -> String {
        if placeholder.is_empty() {
            return self.question.clone();
        }
        self.question.replace(placeholder, "_____")
    }
}

/// Respuesta ya puntuada de una pregunta. No se modifica tras crearse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: String,
    pub user_answer: Vec<String>,
    pub is_correct: bool,
}

/// Cuerpo de `data` en la respuesta de la API (y raíz del YAML embebido).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizResponse {
    pub data: QuizPayload,
}

/// Pantalla visible; se deriva del estado de carga y de la sesión.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Loading,
    LoadFailed,
    Welcome,
    Quiz,
    Results,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            question_id: "q1".into(),
            question: format!("The {p} sat on the {p}.", p = DEFAULT_PLACEHOLDER),
            options: vec!["cat".into(), "mat".into(), "dog".into()],
            correct_answer: vec!["cat".into(), "mat".into()],
        }
    }

    #[test]
    fn blank_count_matches_placeholder_occurrences() {
        let q = sample();
        assert_eq!(q.blank_count(DEFAULT_PLACEHOLDER), 2);
        assert_eq!(q.parts(DEFAULT_PLACEHOLDER), vec!["The ", " sat on the ", "."]);
    }

    #[test]
    fn question_without_placeholder_has_no_blanks() {
        let mut q = sample();
        q.question = "No gaps here.".into();
        assert_eq!(q.blank_count(DEFAULT_PLACEHOLDER), 0);
        assert_eq!(q.parts(DEFAULT_PLACEHOLDER).len(), 1);
    }

    #[test]
    fn review_text_shortens_blanks() {
        assert_eq!(sample().review_text(DEFAULT_PLACEHOLDER), "The _____ sat on the _____.");
    }

    #[test]
    fn api_payload_uses_camel_case() {
        let json = r#"{"data":{"testId":"t","questions":[{"questionId":"a","question":"x _____________","options":["y"],"correctAnswer":["y"]}]}}"#;
        let resp: QuizResponse = serde_json::from_str(json).expect("json ok");
        assert_eq!(resp.data.questions[0].question_id, "a");
        assert_eq!(resp.data.questions[0].correct_answer, vec!["y".to_string()]);
    }
}
