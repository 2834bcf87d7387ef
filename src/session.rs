//! Controlador del flujo del quiz.
//!
//! `QuizSession` es la única dueña del registro de respuestas. Cada pregunta
//! vive en un `QuestionRound` (huecos + timer); al enviar la respuesta su timer
//! se cancela y el round entero se sustituye al entrar en la pregunta
//! siguiente, así que un timer viejo no puede disparar contra ella.

use crate::blanks::BlankAssignment;
use crate::config::QuizConfig;
use crate::error::LoadError;
use crate::model::{Question, UserAnswer};
use crate::scoring::{ResultsSummary, score_answer, summarize};
use crate::timer::{Countdown, Expired};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    /// Pausa cosmética entre preguntas; `until` en el reloj del llamador.
    Transitioning {
        until: f64,
    },
    Completed,
}

/// Cómo se envió la respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitReason {
    Advance,
    TimeUp,
}

#[derive(Clone, Debug)]
pub struct QuestionRound {
    pub blanks: BlankAssignment,
    pub timer: Countdown,
}

#[derive(Clone, Debug)]
pub struct SessionSettings {
    pub question_duration_secs: u32,
    pub warning_threshold_secs: u32,
    pub transition_delay_secs: f64,
    pub placeholder: String,
}

impl From<&QuizConfig> for SessionSettings {
    fn from(config: &QuizConfig) -> Self {
        Self {
            question_duration_secs: config.question_duration_secs,
            warning_threshold_secs: config.warning_threshold_secs,
            transition_delay_secs: config.transition_delay_secs.max(0.0),
            placeholder: config.placeholder.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    settings: SessionSettings,
    current: usize,
    answers: Vec<UserAnswer>,
    phase: QuizPhase,
    round: Option<QuestionRound>,
    last_clock: Option<f64>,
}

impl QuizSession {
    /// Requiere al menos una pregunta; la validación de forma la hace `data`.
    pub fn new(questions: Vec<Question>, settings: SessionSettings) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self {
            questions,
            settings,
            current: 0,
            answers: Vec::new(),
            phase: QuizPhase::NotStarted,
            round: None,
            last_clock: None,
        })
    }

    // Consultas

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn round(&self) -> Option<&QuestionRound> {
        self.round.as_ref()
    }

    pub fn can_advance(&self) -> bool {
        self.phase == QuizPhase::InProgress
            && self.round.as_ref().is_some_and(|r| r.blanks.is_complete())
    }

    pub fn results(&self) -> Option<ResultsSummary> {
        (self.phase == QuizPhase::Completed).then(|| summarize(&self.answers, &self.questions))
    }

    // Transiciones

    /// NOT_STARTED/COMPLETED → IN_PROGRESS(0), con el registro vacío.
    pub fn start(&mut self) -> bool {
        if !matches!(self.phase, QuizPhase::NotStarted | QuizPhase::Completed) {
            return false;
        }
        self.current = 0;
        self.answers.clear();
        self.enter_question();
        log::info!("Quiz started with {} questions", self.questions.len());
        true
    }

    /// COMPLETED → NOT_STARTED → IN_PROGRESS(0).
    pub fn restart(&mut self) -> bool {
        if self.phase != QuizPhase::Completed {
            return false;
        }
        self.phase = QuizPhase::NotStarted;
        self.round = None;
        self.start()
    }

    pub fn place_option(&mut self, option: usize) -> bool {
        if self.phase != QuizPhase::InProgress {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        match self.round.as_mut() {
            Some(round) => round.blanks.place(&question.options, option),
            None => false,
        }
    }

    pub fn clear_blank(&mut self, blank: usize) -> bool {
        if self.phase != QuizPhase::InProgress {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        match self.round.as_mut() {
            Some(round) => round.blanks.clear(&question.options, blank),
            None => false,
        }
    }

    /// Avance explícito; sólo con todos los huecos llenos.
    pub fn advance(&mut self, now: f64) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.submit(SubmitReason::Advance, now)
    }

    /// Expiración del timer: envía lo que haya, sin comprobar huecos.
    /// Se ignora si el evento no corresponde a la pregunta en curso.
    pub fn on_time_up(&mut self, expired: &Expired, now: f64) -> bool {
        if self.phase != QuizPhase::InProgress {
            return false;
        }
        let is_current = self
            .current_question()
            .is_some_and(|q| q.question_id == expired.key);
        if !is_current {
            log::debug!("Ignoring stale timer for question {}", expired.key);
            return false;
        }
        self.submit(SubmitReason::TimeUp, now)
    }

    /// Avanza el timer `secs` segundos enteros (para pruebas y arranques en frío).
    pub fn tick_seconds(&mut self, secs: u32, now: f64) -> bool {
        for _ in 0..secs {
            if self.phase != QuizPhase::InProgress {
                return false;
            }
            let expired = match self.round.as_mut() {
                Some(round) => round.timer.tick(),
                None => return false,
            };
            if let Some(expired) = expired {
                return self.on_time_up(&expired, now);
            }
        }
        false
    }

    /// Se llama una vez por frame con el reloj monótono del llamador.
    pub fn update(&mut self, now: f64) {
        let dt = self.last_clock.map(|last| (now - last).max(0.0)).unwrap_or(0.0);
        self.last_clock = Some(now);

        match self.phase {
            QuizPhase::InProgress => {
                let expired = self.round.as_mut().and_then(|r| r.timer.elapse(dt));
                if let Some(expired) = expired {
                    self.on_time_up(&expired, now);
                    // Con retardo cero el cambio se resuelve en el mismo frame
                    self.finish_transition(now);
                }
            }
            QuizPhase::Transitioning { .. } => {
                self.finish_transition(now);
            }
            QuizPhase::NotStarted | QuizPhase::Completed => {}
        }
    }

    /// TRANSITIONING → IN_PROGRESS(i+1) o COMPLETED cuando vence la pausa.
    pub fn finish_transition(&mut self, now: f64) -> bool {
        let QuizPhase::Transitioning { until } = self.phase else {
            return false;
        };
        if now < until {
            return false;
        }
        if self.current + 1 >= self.questions.len() {
            self.phase = QuizPhase::Completed;
            log::info!(
                "Quiz completed: {}/{} correct",
                self.answers.iter().filter(|a| a.is_correct).count(),
                self.answers.len()
            );
        } else {
            self.current += 1;
            self.enter_question();
        }
        true
    }

    fn submit(&mut self, reason: SubmitReason, now: f64) -> bool {
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        // El timer se cancela antes de que exista el round siguiente
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        round.timer.cancel();

        let answer = score_answer(question, round.blanks.answer());
        log::debug!(
            "Question {} submitted ({reason:?}): {:?} correct={}",
            answer.question_id,
            answer.user_answer,
            answer.is_correct
        );
        self.answers.push(answer);
        self.phase = QuizPhase::Transitioning {
            until: now + self.settings.transition_delay_secs,
        };
        true
    }

    fn enter_question(&mut self) {
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        let blanks = BlankAssignment::new(question.blank_count(&self.settings.placeholder));
        let timer = Countdown::new(
            question.question_id.clone(),
            self.settings.question_duration_secs,
            self.settings.warning_threshold_secs,
        );
        self.round = Some(QuestionRound { blanks, timer });
        self.phase = QuizPhase::InProgress;
    }
}
