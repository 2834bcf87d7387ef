use super::*;
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Recoge el resultado de la carga si ya llegó.
    pub fn poll_load(&mut self) {
        let LoadState::Loading(rx) = &self.load else {
            return;
        };

        let next = match rx.try_recv() {
            Ok(Ok(questions)) => {
                log::info!("Loaded {} questions", questions.len());
                match Self::build_session(&self.config, questions) {
                    Ok(session) => LoadState::Ready(session),
                    Err(err) => LoadState::Failed(err),
                }
            }
            Ok(Err(err)) => LoadState::Failed(err),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                log::error!("Quiz loader disconnected without a result");
                LoadState::Failed(LoadError::Disconnected)
            }
        };
        self.load = next;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading(_))
    }

    /// Única salida de la pantalla de error: recargar todo desde cero.
    pub fn reload(&mut self) {
        log::info!("Reloading quiz");
        *self = QuizApp::new(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_questions;
    use std::sync::mpsc::channel;

    fn loading_app() -> (QuizApp, std::sync::mpsc::Sender<LoadResult>) {
        let (tx, rx) = channel();
        let app = QuizApp::with_load_state(QuizConfig::default(), LoadState::Loading(rx));
        (app, tx)
    }

    #[test]
    fn poll_waits_until_result_arrives() {
        let (mut app, tx) = loading_app();
        app.poll_load();
        assert_eq!(app.state(), AppState::Loading);

        tx.send(Ok(sample_questions())).expect("send");
        app.poll_load();
        assert_eq!(app.state(), AppState::Welcome);
        assert_eq!(app.session().map(|s| s.total_questions()), Some(2));
    }

    #[test]
    fn fetch_error_becomes_terminal_failure() {
        let (mut app, tx) = loading_app();
        tx.send(Err(LoadError::Http("HTTP 500".into()))).expect("send");
        app.poll_load();
        assert_eq!(app.state(), AppState::LoadFailed);
        assert_eq!(app.load_error(), Some(&LoadError::Http("HTTP 500".into())));
    }

    #[test]
    fn dropped_loader_is_reported() {
        let (mut app, tx) = loading_app();
        drop(tx);
        app.poll_load();
        assert_eq!(app.load_error(), Some(&LoadError::Disconnected));
    }

    #[test]
    fn reload_starts_over_from_embedded_bank() {
        let mut app = QuizApp::with_questions(QuizConfig::default(), vec![]);
        assert_eq!(app.state(), AppState::LoadFailed);

        app.reload();
        assert!(app.is_loading() || app.state() == AppState::Welcome);

        // El hilo de carga termina enseguida con el banco embebido
        for _ in 0..200 {
            app.poll_load();
            if !app.is_loading() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert_eq!(app.state(), AppState::Welcome);
    }
}
