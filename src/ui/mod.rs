mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj de egui: monótono y válido también en WASM
        let now = ctx.input(|i| i.time);
        self.frame(now);

        // CABECERA
        top_panel(ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views
        match self.state() {
            AppState::Loading => views::loading::ui_loading(ctx),
            AppState::LoadFailed => views::load_failed::ui_load_failed(self, ctx),
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::question::ui_question(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        // El timer y la carga avanzan aunque no haya input
        if matches!(self.state(), AppState::Loading | AppState::Quiz) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
