//! WASM bindings for the `bitlens` bit-packing explorer.
//!
//! The frontend holds a single [`WasmExplorer`], calls a mutator whenever
//! the user edits an input, then pulls a fresh [`view`](WasmExplorer::view)
//! and re-renders. Field values are derived inside the core on every view
//! call, so the frontend never keeps copies that could drift.
//!
//! Persistence stays on the JavaScript side of the boundary:
//! [`save_state`](WasmExplorer::save_state) returns a version-tagged JSON
//! blob for the host to put wherever it likes (typically localStorage) and
//! [`load_state`](WasmExplorer::load_state) accepts it back. A stale or
//! corrupt blob never throws; the explorer falls back to its default
//! session and reports `false` so the host can drop the blob.
//!
//! Errors from `view` and the mutators are debug strings in a `JsValue`.
//! They signal a broken invariant, not a user mistake; the host's error
//! boundary should clear persisted state and show a generic failure notice.

mod convert;
mod view_def;

use bitlens::persist;
use bitlens::session::Explorer;
use wasm_bindgen::prelude::*;

/// Explorer session driven from JavaScript.
#[wasm_bindgen]
pub struct WasmExplorer {
    session: Explorer,
}

#[wasm_bindgen]
impl WasmExplorer {
    /// Starts a fresh session on the first built-in example.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmExplorer {
        WasmExplorer {
            session: Explorer::new(),
        }
    }

    /// Applies a previously saved blob. Returns false and keeps the default
    /// session when the blob is stale or unreadable; the host should drop
    /// the stored blob in that case.
    pub fn load_state(&mut self, blob: &str) -> bool {
        match persist::decode(blob) {
            Some(session) => {
                self.session = session;
                true
            }
            None => {
                self.session = Explorer::new();
                false
            }
        }
    }

    /// Version-tagged JSON snapshot for the host to persist.
    pub fn save_state(&self) -> Result<String, JsValue> {
        persist::encode(&self.session).map_err(convert::error_to_js)
    }

    /// Entries for the example picker: title and description per example.
    pub fn examples(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&convert::examples_view())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Complete render model for the current state: the packed value and
    /// every field value in all three bases, with bit positions and ranges.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = convert::session_view(&self.session)?;
        serde_wasm_bindgen::to_value(&view).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replaces the field sequence and packed value together from the named
    /// example. Unknown titles select the first example.
    pub fn select_example(&mut self, title: &str) {
        self.session.select_example(title);
    }

    /// Applies an edit of the packed value typed in `radix` ("dec", "bin" or
    /// "hex"). Unparseable text resets the value to 0.
    pub fn set_packed_text(&mut self, text: &str, radix: &str) -> Result<(), JsValue> {
        let radix = convert::radix_from_name(radix)?;
        self.session.set_packed(radix.parse(text));
        Ok(())
    }

    /// Applies an edit of one field's value typed in `radix`. The other
    /// fields keep their values.
    pub fn set_field_text(&mut self, index: usize, text: &str, radix: &str) -> Result<(), JsValue> {
        let radix = convert::radix_from_name(radix)?;
        self.session
            .set_field_value(index, radix.parse(text))
            .map_err(convert::error_to_js)
    }

    /// Appends a field of the given decimal size, clamped into the width
    /// still available.
    pub fn add_field(&mut self, size_text: &str) {
        self.session.add_field(bitlens::radix::parse_decimal(size_text));
    }

    pub fn remove_field(&mut self, index: usize) -> Result<(), JsValue> {
        self.session.remove_field(index).map_err(convert::error_to_js)
    }

    pub fn set_field_size(&mut self, index: usize, size_text: &str) -> Result<(), JsValue> {
        self.session
            .set_field_size(index, bitlens::radix::parse_decimal(size_text))
            .map_err(convert::error_to_js)
    }

    pub fn set_field_label(&mut self, index: usize, label: &str) -> Result<(), JsValue> {
        self.session
            .set_field_label(index, label)
            .map_err(convert::error_to_js)
    }
}
