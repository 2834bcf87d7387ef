use super::*;

impl QuizApp {
    /// Se llama una vez por frame con el reloj de egui (segundos).
    pub fn frame(&mut self, now: f64) {
        self.clock = now;
        self.poll_load();
        if let Some(session) = self.session_mut() {
            session.update(now);
        }
        self.sync_help();
    }

    pub fn start_quiz(&mut self) {
        let started = self.session_mut().is_some_and(|s| s.start());
        if started {
            self.help_index = None;
            self.sync_help();
        }
    }

    pub fn restart_quiz(&mut self) {
        let restarted = self.session_mut().is_some_and(|s| s.restart());
        if restarted {
            self.help_index = None;
            self.sync_help();
        }
    }

    pub fn place_option(&mut self, option: usize) -> bool {
        self.session_mut().is_some_and(|s| s.place_option(option))
    }

    pub fn clear_blank(&mut self, blank: usize) -> bool {
        self.session_mut().is_some_and(|s| s.clear_blank(blank))
    }

    /// Botón "Next"/"Finish": sólo con la frase completa.
    pub fn next_question(&mut self) -> bool {
        let now = self.clock;
        let advanced = self.session_mut().is_some_and(|s| s.advance(now));
        if advanced {
            // Sin retardo se pasa ya a la siguiente pregunta
            if let Some(session) = self.session_mut() {
                session.finish_transition(now);
            }
            self.sync_help();
        }
        advanced
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }

    /// La ayuda se abre sola en la primera pregunta y se cierra en las demás.
    fn sync_help(&mut self) {
        let Some(session) = self.session() else {
            return;
        };
        if session.phase() != QuizPhase::InProgress {
            return;
        }
        let index = session.current_index();
        if self.help_index != Some(index) {
            self.help_index = Some(index);
            self.show_help = index == 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::ready_app;

    #[test]
    fn full_run_through_app_actions() {
        let mut app = ready_app();
        app.frame(0.0);
        app.start_quiz();
        assert_eq!(app.state(), AppState::Quiz);
        assert!(app.show_help, "help opens on the first question");

        assert!(!app.next_question());
        assert!(app.place_option(0));
        assert!(app.place_option(1));
        assert!(app.next_question());
        assert_eq!(app.session().map(|s| s.current_index()), Some(1));
        assert!(!app.show_help, "help closes on later questions");

        app.place_option(2);
        app.place_option(1);
        assert!(app.next_question());
        assert_eq!(app.state(), AppState::Results);

        let answers = app.session().map(|s| s.answers().to_vec()).unwrap_or_default();
        assert_eq!(answers.len(), 2);
        assert!(answers[0].is_correct);
        assert!(!answers[1].is_correct);
    }

    #[test]
    fn timer_expiry_through_frames_submits_partial_answer() {
        let mut app = ready_app();
        app.frame(10.0);
        app.start_quiz();
        app.place_option(0);
        app.frame(40.0);

        let session = app.session().expect("ready");
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers()[0].user_answer, vec!["cat".to_string(), String::new()]);
        assert!(!session.answers()[0].is_correct);
    }

    #[test]
    fn restart_returns_to_first_question_with_empty_log() {
        let mut app = ready_app();
        app.frame(0.0);
        app.start_quiz();
        app.frame(30.0);
        app.frame(60.0);
        assert_eq!(app.state(), AppState::Results);

        app.dismiss_help();
        app.restart_quiz();
        let session = app.session().expect("ready");
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(app.show_help);
    }

    #[test]
    fn help_toggle_flips_visibility() {
        let mut app = ready_app();
        app.start_quiz();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);
        app.toggle_help();
        assert!(app.show_help);
        app.dismiss_help();
        assert!(!app.show_help);
        // Un frame no vuelve a abrirla en la misma pregunta
        app.frame(1.0);
        assert!(!app.show_help);
    }
}
