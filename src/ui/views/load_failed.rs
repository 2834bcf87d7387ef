use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_load_failed(app: &mut QuizApp, ctx: &Context) {
    let detail = app
        .load_error()
        .map(|err| err.to_string())
        .unwrap_or_default();

    let mut reload = false;
    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Failed to Load Quiz")
                    .heading()
                    .strong()
                    .color(Color32::from_rgb(220, 38, 38)),
            );
            ui.add_space(8.0);
            ui.label("We couldn't load the quiz data. Please try again later.");
            if !detail.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new(&detail).small().weak());
            }
            ui.add_space(16.0);
            reload = big_button(ui, "Reload", 160.0, 36.0, true);
        });
    });

    // Sin reintentos automáticos: sólo recarga manual
    if reload {
        app.reload();
    }
}
