use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 160.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(48.0));
            ui.add_space(12.0);
            ui.label(RichText::new("Loading quiz...").weak());
        });
    });
}
