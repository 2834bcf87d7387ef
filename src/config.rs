// src/config.rs

use crate::model::DEFAULT_PLACEHOLDER;

pub const API_URL_VAR: &str = "SENTENCE_QUIZ_API_URL";
pub const DURATION_VAR: &str = "SENTENCE_QUIZ_DURATION";
pub const TRANSITION_VAR: &str = "SENTENCE_QUIZ_TRANSITION_MS";

const DEFAULT_DURATION_SECS: u32 = 30;
const DEFAULT_WARNING_SECS: u32 = 10;
const DEFAULT_TRANSITION_SECS: f64 = 0.3;

/// De dónde salen las preguntas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizSource {
    Embedded,
    Remote(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizConfig {
    pub source: QuizSource,
    pub question_duration_secs: u32,
    pub warning_threshold_secs: u32,
    pub transition_delay_secs: f64,
    pub placeholder: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: QuizSource::Embedded,
            question_duration_secs: DEFAULT_DURATION_SECS,
            warning_threshold_secs: DEFAULT_WARNING_SECS,
            transition_delay_secs: DEFAULT_TRANSITION_SECS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl QuizConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// En WASM no hay entorno de proceso: la URL se fija al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            API_URL_VAR => option_env!("SENTENCE_QUIZ_API_URL").map(str::to_string),
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR).map(|u| u.trim().to_string()) {
            if !url.is_empty() {
                config.source = QuizSource::Remote(url);
            }
        }

        if let Some(raw) = lookup(DURATION_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => config.question_duration_secs = secs,
                _ => log::warn!("Ignoring invalid {DURATION_VAR}={raw:?}"),
            }
        }

        if let Some(raw) = lookup(TRANSITION_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.transition_delay_secs = ms as f64 / 1000.0,
                Err(_) => log::warn!("Ignoring invalid {TRANSITION_VAR}={raw:?}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_embedded_bank_and_thirty_seconds() {
        let config = QuizConfig::from_lookup(|_| None);
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.question_duration_secs, 30);
        assert_eq!(config.warning_threshold_secs, 10);
        assert_eq!(config.placeholder, "_____________");
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, " https://quiz.example/api "),
            (DURATION_VAR, "45"),
            (TRANSITION_VAR, "0"),
        ]));
        assert_eq!(
            config.source,
            QuizSource::Remote("https://quiz.example/api".into())
        );
        assert_eq!(config.question_duration_secs, 45);
        assert_eq!(config.transition_delay_secs, 0.0);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, "   "),
            (DURATION_VAR, "soon"),
            (TRANSITION_VAR, "-3"),
        ]));
        assert_eq!(config, QuizConfig::default());
    }
}
