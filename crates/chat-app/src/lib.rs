//! Chat App — WASM entry point.
//!
//! Composition root: builds the browser adapters and hands them to the egui
//! application mounted on the page canvas.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Id of the `<canvas>` in index.html
const CANVAS_ID: &str = "chat_canvas";

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Webhook chat starting...");

    let canvas = find_canvas(CANVAS_ID)?;

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("eframe failed to start: {:?}", e);
        }
    });

    Ok(())
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", id)))
}
