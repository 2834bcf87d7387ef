use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Ui};

fn feature(ui: &mut Ui, icon: &str, title: &str, body: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(22.0));
        ui.vertical(|ui| {
            ui.label(RichText::new(title).strong());
            ui.label(RichText::new(body).small());
        });
    });
    ui.add_space(8.0);
}

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let duration = app.config.question_duration_secs;
    let total = app.session().map(|s| s.total_questions()).unwrap_or(0);

    let mut start = false;
    centered_panel(ctx, 420.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🎯").size(36.0));
            ui.heading("Sentence Construction");
            ui.add_space(6.0);
            ui.label(
                "Complete sentences by placing words in the correct order. \
                 Test your language skills and build perfect sentences!",
            );
        });
        ui.add_space(18.0);

        feature(
            ui,
            "⏱",
            "Timed Challenge",
            &format!(
                "Each question has a {duration}-second timer. Complete the sentence before time runs out!"
            ),
        );
        feature(
            ui,
            "🧩",
            "Match Words to Blanks",
            "Select from the word options to fill blanks and form grammatically correct sentences.",
        );
        feature(
            ui,
            "🏆",
            "Get Instant Feedback",
            "See your score and review correct answers for any mistakes at the end of the quiz.",
        );

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            start = big_button(ui, "Start Quiz ➡", 220.0, 40.0, total > 0);
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Complete all {total} questions to test your sentence construction skills"
                ))
                .small()
                .weak(),
            );
        });
    });

    if start {
        app.start_quiz();
    }
}
