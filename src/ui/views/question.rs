use crate::QuizApp;
use crate::ui::helpers::{big_button, blank_button, option_button, tone_color};
use crate::ui::layout::scroll_panel;
use crate::view_models::{QuestionView, Tone};
use egui::{Color32, Context, ProgressBar, RichText, Ui};

/// Acción elegida en este frame; se aplica tras pintar.
enum Action {
    ToggleHelp,
    DismissHelp,
    Clear(usize),
    Place(usize),
    Next,
}

fn ui_help(ui: &mut Ui, duration: u32, action: &mut Option<Action>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("How to complete this question:").strong());
        ui.label("1. Select words from the options below to fill in the blanks");
        ui.label("2. Click on a filled blank to remove the word");
        ui.label("3. Fill all blanks to enable the Next button");
        ui.label(format!(
            "4. Complete before the timer runs out ({duration} seconds)"
        ));
        if ui.link("Dismiss").clicked() {
            *action = Some(Action::DismissHelp);
        }
    });
    ui.add_space(8.0);
}

fn ui_timer(ui: &mut Ui, view: &QuestionView, width: f32) {
    ui.horizontal(|ui| {
        ui.label("⏱ Time Remaining");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let text = RichText::new(view.timer.label()).monospace().strong();
            if view.timer.warning {
                ui.label(text.color(tone_color(Tone::Bad)));
            } else {
                ui.label(text);
            }
        });
    });
    ui.add(
        ProgressBar::new(view.timer.fraction_left)
            .desired_width(width)
            .fill(tone_color(view.timer.tone())),
    );
}

fn ui_sentence(ui: &mut Ui, view: &QuestionView, action: &mut Option<Action>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (i, part) in view.parts.iter().enumerate() {
                if !part.is_empty() {
                    ui.label(RichText::new(part).size(18.0));
                }
                if let Some(cell) = view.blanks.get(i) {
                    if blank_button(ui, cell, view.accepts_input) {
                        *action = Some(Action::Clear(cell.index));
                    }
                }
            }
        });
    });
}

pub fn ui_question(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.question_view() else {
        return;
    };
    let show_help = app.show_help;
    let duration = app.config.question_duration_secs;
    let fading = app.is_transitioning();

    let mut action = None;
    scroll_panel(ctx, 720.0, |ui| {
        if fading {
            ui.multiply_opacity(0.4);
        }
        let width = ui.available_width();

        // Progreso
        ui.horizontal(|ui| {
            ui.label(RichText::new(view.progress_label()).weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("ℹ Help").clicked() {
                    action = Some(Action::ToggleHelp);
                }
            });
        });
        ui.add(ProgressBar::new(view.progress()).desired_width(width));
        ui.add_space(12.0);

        if show_help {
            ui_help(ui, duration, &mut action);
        }

        ui_timer(ui, &view, width);
        ui.add_space(16.0);

        ui_sentence(ui, &view, &mut action);
        ui.add_space(16.0);

        // Opciones
        ui.horizontal_wrapped(|ui| {
            for cell in &view.options {
                if option_button(ui, cell, view.accepts_input) {
                    action = Some(Action::Place(cell.index));
                }
            }
        });
        ui.add_space(20.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = format!("{} ›", view.advance_label());
            if big_button(ui, &label, 120.0, 36.0, view.can_advance) {
                action = Some(Action::Next);
            }
            if !view.can_advance && view.accepts_input {
                ui.label(RichText::new("Fill every blank to continue").small().color(Color32::GRAY));
            }
        });
    });

    match action {
        Some(Action::ToggleHelp) => app.toggle_help(),
        Some(Action::DismissHelp) => app.dismiss_help(),
        Some(Action::Clear(blank)) => {
            app.clear_blank(blank);
        }
        Some(Action::Place(option)) => {
            app.place_option(option);
        }
        Some(Action::Next) => {
            app.next_question();
        }
        None => {}
    }
}
