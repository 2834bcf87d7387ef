// src/data.rs

use crate::config::QuizSource;
use crate::error::LoadError;
use crate::model::{Question, QuizPayload, QuizResponse};
use std::collections::HashSet;
use std::sync::mpsc::{Receiver, channel};

pub type LoadResult = Result<Vec<Question>, LoadError>;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<Vec<Question>, LoadError> {
    parse_embedded(include_str!("data/questions.yaml"))
}

pub fn parse_embedded(yaml: &str) -> Result<Vec<Question>, LoadError> {
    let payload: QuizPayload = serde_yaml::from_str(yaml)?;
    Ok(payload.questions)
}

/// Respuesta de la API: `{ "data": { "questions": [...] } }`.
pub fn parse_remote(json: &str) -> Result<Vec<Question>, LoadError> {
    let response: QuizResponse = serde_json::from_str(json)?;
    Ok(response.data.questions)
}

/// Comprueba que cada pregunta tenga tantas respuestas como huecos.
pub fn validate_questions(questions: &[Question], placeholder: &str) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen = HashSet::new();
    for q in questions {
        let invalid = |reason: String| LoadError::InvalidQuestion {
            id: q.question_id.clone(),
            reason,
        };

        if !seen.insert(q.question_id.as_str()) {
            return Err(invalid("duplicate questionId".into()));
        }
        let blanks = q.blank_count(placeholder);
        if blanks != q.correct_answer.len() {
            return Err(invalid(format!(
                "{blanks} blanks but {} correct words",
                q.correct_answer.len()
            )));
        }
        if q.options.len() < blanks {
            return Err(invalid(format!(
                "{blanks} blanks but only {} options",
                q.options.len()
            )));
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(source: &QuizSource) -> LoadResult {
    match source {
        QuizSource::Embedded => read_questions_embedded(),
        QuizSource::Remote(url) => fetch_remote(url),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_remote(url: &str) -> LoadResult {
    use reqwest::header::{ACCEPT, USER_AGENT};

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(USER_AGENT, concat!("sentence-quiz/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http(format!("HTTP {status} from {url}")));
    }

    let body = response.text()?;
    parse_remote(&body)
}

/// Lanza la carga en segundo plano; la UI hace `try_recv` cada frame.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_load(source: QuizSource, placeholder: String) -> Receiver<LoadResult> {
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        log::info!("Loading quiz data from {source:?}");
        let result = fetch_questions(&source)
            .and_then(|qs| validate_questions(&qs, &placeholder).map(|()| qs));
        if let Err(err) = &result {
            log::error!("Failed to load quiz data: {err}");
        }
        let _ = tx.send(result);
    });
    rx
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_load(source: QuizSource, placeholder: String) -> Receiver<LoadResult> {
    let (tx, rx) = channel();
    wasm_bindgen_futures::spawn_local(async move {
        log::info!("Loading quiz data from {source:?}");
        let fetched = match &source {
            QuizSource::Embedded => read_questions_embedded(),
            QuizSource::Remote(url) => fetch_remote(url).await,
        };
        let result =
            fetched.and_then(|qs| validate_questions(&qs, &placeholder).map(|()| qs));
        if let Err(err) = &result {
            log::error!("Failed to load quiz data: {err}");
        }
        let _ = tx.send(result);
    });
    rx
}

#[cfg(target_arch = "wasm32")]
async fn fetch_remote(url: &str) -> LoadResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| LoadError::Http(format!("could not build request: {err:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|err| LoadError::Http(format!("could not set headers: {err:?}")))?;

    let window = web_sys::window().ok_or_else(|| LoadError::Http("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| LoadError::Http(format!("fetch failed: {err:?}")))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| LoadError::Http("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(LoadError::Http(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    let promise = response
        .text()
        .map_err(|err| LoadError::Http(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| LoadError::Http(format!("could not read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".into()))?;

    parse_remote(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_PLACEHOLDER;

    fn question(id: &str, text: &str, options: &[&str], correct: &[&str]) -> Question {
        Question {
            question_id: id.into(),
            question: text.into(),
            options: options.iter().map(|w| w.to_string()).collect(),
            correct_answer: correct.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn embedded_bank_is_valid() {
        let questions = read_questions_embedded().expect("embedded yaml parses");
        assert_eq!(questions.len(), 10);
        validate_questions(&questions, DEFAULT_PLACEHOLDER).expect("embedded bank is valid");
    }

    #[test]
    fn parse_remote_reads_data_envelope() {
        let json = r#"{
            "status": "SUCCESS",
            "data": {
                "testId": "t-1",
                "questions": [{
                    "questionId": "q1",
                    "question": "The _____________ sat on the _____________.",
                    "questionType": "text",
                    "options": ["cat", "mat", "dog"],
                    "correctAnswer": ["cat", "mat"]
                }]
            }
        }"#;
        let questions = parse_remote(json).expect("valid json");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 3);
    }

    #[test]
    fn parse_remote_rejects_garbage() {
        assert!(matches!(parse_remote("<html>"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_remote(r#"{"questions": []}"#), Err(LoadError::Parse(_))));
    }

    #[test]
    fn validation_rejects_empty_and_malformed_banks() {
        assert_eq!(validate_questions(&[], DEFAULT_PLACEHOLDER), Err(LoadError::Empty));

        let mismatch = question("a", "One _____________ here.", &["x", "y"], &["x", "y"]);
        assert!(matches!(
            validate_questions(&[mismatch], DEFAULT_PLACEHOLDER),
            Err(LoadError::InvalidQuestion { id, .. }) if id == "a"
        ));

        let few_options = question(
            "b",
            "_____________ and _____________",
            &["x"],
            &["x", "x"],
        );
        assert!(validate_questions(&[few_options], DEFAULT_PLACEHOLDER).is_err());

        let ok = question("c", "A _____________.", &["x"], &["x"]);
        let dup = ok.clone();
        assert!(matches!(
            validate_questions(&[ok, dup], DEFAULT_PLACEHOLDER),
            Err(LoadError::InvalidQuestion { reason, .. }) if reason.contains("duplicate")
        ));
    }

    #[test]
    fn spawned_embedded_load_delivers_questions() {
        let rx = spawn_load(QuizSource::Embedded, DEFAULT_PLACEHOLDER.to_string());
        let result = rx.recv().expect("loader sends a result");
        assert_eq!(result.map(|qs| qs.len()), Ok(10));
    }
}
