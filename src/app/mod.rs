use crate::config::QuizConfig;
use crate::data::{LoadResult, spawn_load, validate_questions};
use crate::error::LoadError;
use crate::model::{AppState, Question};
use crate::session::{QuizPhase, QuizSession, SessionSettings};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{BlankCell, OptionCell, QuestionView, ResultsView, ReviewRow, TimerInfo};

/// Estado de la carga de preguntas.
pub enum LoadState {
    Loading(Receiver<LoadResult>),
    Failed(LoadError),
    Ready(QuizSession),
}

pub struct QuizApp {
    pub config: QuizConfig,
    pub load: LoadState,
    pub show_help: bool,
    help_index: Option<usize>, // pregunta para la que se fijó `show_help`
    clock: f64,                // último `now` recibido del frame
}

impl QuizApp {
    /// Arranca la carga en segundo plano.
    pub fn new(config: QuizConfig) -> Self {
        let rx = spawn_load(config.source.clone(), config.placeholder.clone());
        Self::with_load_state(config, LoadState::Loading(rx))
    }

    /// Construye la app con preguntas ya cargadas (sin E/S).
    pub fn with_questions(config: QuizConfig, questions: Vec<Question>) -> Self {
        let load = match Self::build_session(&config, questions) {
            Ok(session) => LoadState::Ready(session),
            Err(err) => LoadState::Failed(err),
        };
        Self::with_load_state(config, load)
    }

    fn with_load_state(config: QuizConfig, load: LoadState) -> Self {
        Self {
            config,
            load,
            show_help: false,
            help_index: None,
            clock: 0.0,
        }
    }

    pub(crate) fn build_session(
        config: &QuizConfig,
        questions: Vec<Question>,
    ) -> Result<QuizSession, LoadError> {
        validate_questions(&questions, &config.placeholder)?;
        QuizSession::new(questions, SessionSettings::from(config))
    }

    /// Pantalla actual, derivada de la carga y de la fase de la sesión.
    pub fn state(&self) -> AppState {
        match &self.load {
            LoadState::Loading(_) => AppState::Loading,
            LoadState::Failed(_) => AppState::LoadFailed,
            LoadState::Ready(session) => match session.phase() {
                QuizPhase::NotStarted => AppState::Welcome,
                QuizPhase::InProgress | QuizPhase::Transitioning { .. } => AppState::Quiz,
                QuizPhase::Completed => AppState::Results,
            },
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.load {
            LoadState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.load {
            LoadState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.load {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_transitioning(&self) -> bool {
        self.session()
            .is_some_and(|s| matches!(s.phase(), QuizPhase::Transitioning { .. }))
    }
}
