#[cfg(not(target_arch = "wasm32"))]
use sentence_quiz::{QuizApp, QuizConfig};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("Starting sentence quiz ({:?})", config.source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 680.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sentence Construction",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}

// En WASM el punto de entrada está en la librería
#[cfg(target_arch = "wasm32")]
fn main() {}
