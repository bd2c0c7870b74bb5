//! Explorer session: the mutable state a frontend drives.
//!
//! The session owns the field sequence and the packed value, nothing else.
//! Field values are never stored; every read derives them from the packed
//! value through the compiled layout, so they cannot drift out of sync with
//! each other.

use crate::{
    bits::{self, PACKED_BITS},
    errors::ExplorerError,
    field::Bitfield,
    layout::Layout,
    presets::{self, Preset},
};

/// Interactive explorer state: an ordered field sequence and the packed
/// value the fields unpack.
///
/// Every setter accepts the `Option<i64>` a text parse produces; `None`
/// (unparseable input) behaves as 0 and values clamp into range, so no user
/// edit can fail. Size edits additionally clamp into the remaining width
/// budget, keeping the sequence within 32 bits at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    example: String,
    fields: Vec<Bitfield>,
    packed: u32,
}

impl Explorer {
    /// Starts a session on the first built-in example.
    pub fn new() -> Self {
        Self::from_preset(presets::find(""))
    }

    fn from_preset(preset: Preset) -> Self {
        Explorer {
            example: preset.title.to_string(),
            fields: preset.fields,
            packed: preset.value,
        }
    }

    pub(crate) fn from_parts(example: String, fields: Vec<Bitfield>, packed: u32) -> Self {
        Explorer {
            example,
            fields,
            packed,
        }
    }

    /// Title of the example the session was last loaded from.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// The field sequence, most significant field first.
    pub fn fields(&self) -> &[Bitfield] {
        &self.fields
    }

    /// The packed value every field value derives from.
    pub fn packed(&self) -> u32 {
        self.packed
    }

    /// Compiles the current sequence. Session edits keep the sequence inside
    /// the 32-bit budget, so this only fails for sequences built by hand.
    pub fn layout(&self) -> Result<Layout, ExplorerError> {
        Ok(Layout::compile(&self.fields)?)
    }

    /// Current value of every field, derived from the packed value.
    pub fn values(&self) -> Result<Vec<u32>, ExplorerError> {
        Ok(self.layout()?.unpack(self.packed)?)
    }

    /// Replaces the field sequence and packed value together from the named
    /// example. Unknown titles select the first example.
    pub fn select_example(&mut self, title: &str) {
        *self = Self::from_preset(presets::find(title));
        log::debug!("example {:?} selected, packed {}", self.example, self.packed);
    }

    /// Sets the packed value from an edit. Unparseable input behaves as 0;
    /// the value clamps into `[0, 2^32 - 1]`.
    pub fn set_packed(&mut self, value: Option<i64>) {
        self.packed = bits::clamp_packed(value.unwrap_or(0));
        log::debug!("packed value set to {}", self.packed);
    }

    /// Sets one field's value from an edit; the packed value absorbs the
    /// change and all other fields keep their values.
    pub fn set_field_value(
        &mut self,
        index: usize,
        value: Option<i64>,
    ) -> Result<(), ExplorerError> {
        let layout = self.layout()?;
        self.packed = layout.update(self.packed, index, value)?;
        log::debug!("field {} edited, packed now {}", index, self.packed);
        Ok(())
    }

    /// Appends an unnamed field. The size clamps into the remaining width.
    pub fn add_field(&mut self, size: Option<i64>) {
        let size = self.clamp_size(size, 0);
        self.fields.push(Bitfield::new("", size));
        log::debug!("field of size {} added ({} fields)", size, self.fields.len());
    }

    /// Removes the field at `index`. The bits it occupied fall to the fields
    /// above it; the packed value is untouched.
    pub fn remove_field(&mut self, index: usize) -> Result<(), ExplorerError> {
        if index >= self.fields.len() {
            return Err(ExplorerError::NoSuchField);
        }
        self.fields.remove(index);
        log::debug!("field {} removed ({} fields)", index, self.fields.len());
        Ok(())
    }

    /// Resizes the field at `index`, clamping into the remaining width.
    pub fn set_field_size(
        &mut self,
        index: usize,
        size: Option<i64>,
    ) -> Result<(), ExplorerError> {
        let size = self.clamp_size(size, self.field(index)?.size);
        self.field_mut(index)?.size = size;
        log::debug!("field {} resized to {} bits", index, size);
        Ok(())
    }

    /// Renames the field at `index`.
    pub fn set_field_label(&mut self, index: usize, label: &str) -> Result<(), ExplorerError> {
        self.field_mut(index)?.label = label.to_string();
        Ok(())
    }

    fn field(&self, index: usize) -> Result<&Bitfield, ExplorerError> {
        self.fields.get(index).ok_or(ExplorerError::NoSuchField)
    }

    fn field_mut(&mut self, index: usize) -> Result<&mut Bitfield, ExplorerError> {
        self.fields.get_mut(index).ok_or(ExplorerError::NoSuchField)
    }

    /// Clamps a parsed size edit into `[0, budget]`, where the budget is the
    /// width left over once every other field keeps its size.
    fn clamp_size(&self, size: Option<i64>, keep: u32) -> u32 {
        let used: u32 = self.fields.iter().map(|field| field.size).sum();
        let budget = i64::from(PACKED_BITS - (used - keep));
        size.unwrap_or(0).clamp(0, budget) as u32
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
