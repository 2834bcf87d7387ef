use crate::QuizApp;
use crate::ui::helpers::{big_button, tone_color, word_row};
use crate::ui::layout::scroll_panel;
use crate::view_models::{ReviewRow, Tone};
use egui::{Context, RichText, Ui};

fn ui_review_row(ui: &mut Ui, row: &ReviewRow) {
    let tone = if row.is_correct { Tone::Good } else { Tone::Bad };
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let icon = if row.is_correct { "✔" } else { "✖" };
            ui.label(RichText::new(icon).color(tone_color(tone)));
            ui.label(RichText::new(format!("Question {}", row.number)).strong());
            ui.label(RichText::new(row.status_label()).small().color(tone_color(tone)));
        });
        ui.label(RichText::new(&row.text).small());

        if !row.is_correct {
            ui.add_space(6.0);
            ui.label(RichText::new("Your answer:").small().weak());
            word_row(ui, &row.user_words(), tone_color(Tone::Bad));
            ui.label(RichText::new("Correct answer:").small().weak());
            word_row(ui, &row.correct_answer, tone_color(Tone::Good));
        }
    });
    ui.add_space(6.0);
}

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(results) = app.results_view() else {
        return;
    };

    let mut restart = false;
    scroll_panel(ctx, 720.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{}%", results.percentage))
                    .size(40.0)
                    .strong()
                    .color(tone_color(results.tone())),
            );
            ui.add_space(6.0);
            ui.heading(results.tier.headline());
            ui.label(results.tier.description());
            ui.add_space(4.0);
            ui.label(RichText::new(results.score_line()).strong());
        });
        ui.add_space(16.0);

        ui.label(RichText::new("Question Review").heading());
        ui.separator();
        for row in &results.rows {
            ui_review_row(ui, row);
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            restart = big_button(ui, "⟲ Try Again", 180.0, 40.0, true);
        });
    });

    if restart {
        app.restart_quiz();
    }
}
