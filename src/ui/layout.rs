use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new("Sentence Construction").heading().strong());
            ui.add_space(6.0);
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            },
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll para contenidos largos (pregunta y resultados).
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui);
                        });
                });
            });
    });
}
