#![warn(clippy::pedantic)]

use wasm_bindgen::{prelude::wasm_bindgen, JsError};
use weekwizard_core::RenderOptions;

/// Course records of a registration page, as JSON.
///
/// # Errors
///
/// Only if the records cannot be serialized.
#[wasm_bindgen]
pub fn parse_html(html: &str) -> Result<String, JsError> {
	to_js(weekwizard_core::records_to_json(&weekwizard_core::parse_html(html)))
}

/// Timetable page for a JSON list of course records.
///
/// # Errors
///
/// When the JSON is not a list of records or a class ends before it starts.
#[wasm_bindgen]
pub fn render_json(json: &str) -> Result<String, JsError> {
	to_js(
		weekwizard_core::records_from_json(json)
			.and_then(|records| weekwizard_core::render(&records, &RenderOptions::default())),
	)
}

/// Timetable page for a registration page.
///
/// # Errors
///
/// When a class ends before it starts.
#[wasm_bindgen]
pub fn from_html(html: &str) -> Result<String, JsError> {
	to_js(weekwizard_core::schedule_from_html(
		html,
		&RenderOptions::default(),
	))
}

fn to_js(result: weekwizard_core::Result<String>) -> Result<String, JsError> {
	result.map_err(|e| JsError::new(&e.to_string()))
}
