//! Render-model types handed to the JavaScript frontend.
//!
//! Everything here is derived per call from the live session; none of it is
//! a second copy of state the frontend would have to keep in sync.

use serde::Serialize;

/// One value rendered in all three text bases.
#[derive(Debug, Serialize)]
pub struct BasesView {
    pub dec: String,
    pub bin: String,
    pub hex: String,
}

/// The packed-value panel.
#[derive(Debug, Serialize)]
pub struct PackedView {
    pub value: u32,
    pub text: BasesView,
}

/// A single bitfield row.
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub label: String,
    pub size: u32,
    /// Position of the field's most significant bit in the packed value.
    pub high_bit: u32,
    /// Position of the field's least significant bit.
    pub low_bit: u32,
    /// Largest value the field can hold, for the "0 - max" input hints.
    pub max: BasesView,
    pub value: u32,
    pub text: BasesView,
}

/// Entry in the example picker.
#[derive(Debug, Serialize)]
pub struct ExampleView {
    pub title: String,
    pub description: String,
}

/// Complete render model for one frame.
#[derive(Debug, Serialize)]
pub struct ExplorerView {
    /// Title of the example the session was loaded from.
    pub example: String,
    pub total_bits: u32,
    pub packed: PackedView,
    pub fields: Vec<FieldView>,
}
