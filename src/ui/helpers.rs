// src/ui/helpers.rs
use crate::view_models::{BlankCell, OptionCell, Tone};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Good => Color32::from_rgb(34, 197, 94),
        Tone::Caution => Color32::from_rgb(234, 179, 8),
        Tone::Bad => Color32::from_rgb(239, 68, 68),
    }
}

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Hueco de la frase. Devuelve `true` si se pulsó un hueco lleno.
pub fn blank_button(ui: &mut Ui, cell: &BlankCell, enabled: bool) -> bool {
    let text = match &cell.word {
        Some(word) => RichText::new(word).strong(),
        None => RichText::new(cell.label()).weak(),
    };
    let button = Button::new(text)
        .min_size(Vec2::new(120.0, 28.0))
        .stroke(Stroke::new(1.0, ui.visuals().widgets.inactive.fg_stroke.color));
    let clicked = ui
        .add_enabled(enabled, button)
        .on_hover_text(cell.hover())
        .clicked();
    clicked && cell.word.is_some()
}

/// Opción de palabra; deshabilitada si ya está en uso.
pub fn option_button(ui: &mut Ui, cell: &OptionCell, enabled: bool) -> bool {
    let button = Button::new(RichText::new(&cell.word).size(16.0)).min_size(Vec2::new(80.0, 32.0));
    ui.add_enabled(enabled && !cell.used, button).clicked()
}

/// Fila de palabras como "chips" de color.
pub fn word_row(ui: &mut Ui, words: &[String], color: Color32) {
    ui.horizontal_wrapped(|ui| {
        for word in words {
            ui.label(RichText::new(word).color(color).monospace());
        }
    });
}
