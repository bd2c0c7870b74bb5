use bitlens::radix::{self, Radix};
use bitlens::session::Explorer;
use wasm_bindgen::JsValue;

use crate::view_def::{BasesView, ExampleView, ExplorerView, FieldView, PackedView};

/// Converts any core error into a `JsValue` the frontend's error boundary
/// can log and show.
pub fn error_to_js<E: std::fmt::Debug>(err: E) -> JsValue {
    JsValue::from_str(&format!("{:?}", err))
}

pub fn radix_from_name(name: &str) -> Result<Radix, JsValue> {
    Radix::from_name(name)
        .ok_or_else(|| JsValue::from_str("unknown radix; expected dec, bin or hex"))
}

fn bases(value: u32) -> BasesView {
    BasesView {
        dec: radix::to_decimal(value),
        bin: radix::to_binary(value),
        hex: radix::to_hex(value),
    }
}

pub fn session_view(session: &Explorer) -> Result<ExplorerView, JsValue> {
    let layout = session.layout().map_err(error_to_js)?;
    let values = layout.unpack(session.packed()).map_err(error_to_js)?;

    let fields = layout
        .fields
        .iter()
        .zip(values)
        .map(|(field, value)| FieldView {
            label: field.label.clone(),
            size: field.size,
            high_bit: field.high_bit(),
            low_bit: field.low_bit(),
            max: bases(field.max_value()),
            value,
            text: bases(value),
        })
        .collect();

    Ok(ExplorerView {
        example: session.example().to_string(),
        total_bits: layout.total_bits(),
        packed: PackedView {
            value: session.packed(),
            text: bases(session.packed()),
        },
        fields,
    })
}

pub fn examples_view() -> Vec<ExampleView> {
    bitlens::presets::catalog()
        .into_iter()
        .map(|preset| ExampleView {
            title: preset.title.to_string(),
            description: preset.description.to_string(),
        })
        .collect()
}
