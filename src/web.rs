use crate::{QuizApp, QuizConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "sentence_quiz_canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a canvas"))?;

    let config = QuizConfig::from_env();
    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("Failed to start eframe: {err:?}");
        }
    });
    Ok(())
}
