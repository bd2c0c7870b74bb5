//! Layout: a compiled field sequence used to unpack and update packed values.

use crate::{
    bits::{self, PACKED_BITS},
    errors::{ArithError, LayoutError, UpdateError},
    field::Bitfield,
};

/// A compiled layout: every field placed at its bit offset, most significant
/// field first. Use [Layout::compile] to build one from [Bitfield]s, then
/// [Layout::unpack] and [Layout::update] to move values in and out of a
/// packed `u32`.
#[derive(Debug, Clone)]
pub struct Layout {
    total_bits: u32,
    /// Placed fields in definition order.
    pub fields: Vec<PlacedField>,
}

/// A single field with its position resolved against the whole sequence.
#[derive(Debug, Clone)]
pub struct PlacedField {
    pub label: String,
    pub size: u32,
    /// Number of bits below the field: the distance from bit 0 of the packed
    /// value to the field's low bit.
    pub offset: u32,
}

impl PlacedField {
    /// Largest value this field can hold.
    pub fn max_value(&self) -> u32 {
        bits::max_field_value(self.size)
    }

    /// Position of the field's most significant bit.
    pub fn high_bit(&self) -> u32 {
        self.offset + self.size.saturating_sub(1)
    }

    /// Position of the field's least significant bit.
    pub fn low_bit(&self) -> u32 {
        self.offset
    }
}

impl Layout {
    /// Compiles a field sequence, placing each field at the suffix-sum of the
    /// sizes of all fields after it. Fails if any field would need bits
    /// beyond position 31 of the packed value.
    pub fn compile(fields: &[Bitfield]) -> Result<Self, LayoutError> {
        let mut total_bits: u32 = 0;
        for field in fields {
            if field.size > PACKED_BITS {
                return Err(LayoutError::FieldTooWide);
            }
            total_bits += field.size;
            if total_bits > PACKED_BITS {
                return Err(LayoutError::WidthExceeded);
            }
        }

        let mut placed = Vec::with_capacity(fields.len());
        let mut below = total_bits;
        for field in fields {
            below -= field.size;
            placed.push(PlacedField {
                label: field.label.clone(),
                size: field.size,
                offset: below,
            });
        }

        Ok(Self {
            total_bits,
            fields: placed,
        })
    }

    /// Total width of the sequence in bits. At most 32, possibly less.
    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Unpacks every field of `packed`, in field order. Results are in
    /// `[0, 2^size - 1]` per field.
    pub fn unpack(&self, packed: u32) -> Result<Vec<u32>, ArithError> {
        self.fields
            .iter()
            .map(|field| extract(packed, field.size, field.offset))
            .collect()
    }

    /// Writes a new value into the field at `index` and returns the new
    /// packed value, leaving every other field untouched.
    ///
    /// `None` stands for unparseable input and behaves as 0. The value is
    /// clamped into the field's range before packing. The field's current
    /// contribution is subtracted and the new one added, so no bit-clear
    /// mask wider than 32 bits is ever needed.
    pub fn update(
        &self,
        packed: u32,
        index: usize,
        new_value: Option<i64>,
    ) -> Result<u32, UpdateError> {
        let field = self.fields.get(index).ok_or(UpdateError::NoSuchField)?;

        // The old value must be the live extraction. A stale copy here would
        // subtract the wrong bit pattern and corrupt neighbouring fields.
        let old = extract(packed, field.size, field.offset)?;

        let new = new_value
            .unwrap_or(0)
            .clamp(0, i64::from(field.max_value()));

        let raw = i64::from(packed) - bits::shift_left(i64::from(old), field.offset)?
            + bits::shift_left(new, field.offset)?;

        Ok(bits::clamp_packed(raw))
    }
}

/// Extracts one field value: `(packed >> offset) & (2^size - 1)`.
fn extract(packed: u32, size: u32, offset: u32) -> Result<u32, ArithError> {
    let shifted = bits::shift_right(i64::from(packed), offset)?;
    let value = bits::bitwise_and(shifted, i64::from(bits::max_field_value(size)))?;
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn rgba() -> Layout {
        let fields = vec![
            Bitfield::new("Red", 8),
            Bitfield::new("Green", 8),
            Bitfield::new("Blue", 8),
            Bitfield::new("Alpha", 8),
        ];
        Layout::compile(&fields).unwrap()
    }

    #[test]
    fn test_compile_offsets_are_suffix_sums() {
        let layout = rgba();
        let offsets: Vec<u32> = layout.fields.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, vec![24, 16, 8, 0]);
        assert_eq!(layout.total_bits(), 32);
    }

    #[test]
    fn test_compile_empty() {
        let layout = Layout::compile(&[]).unwrap();
        assert_eq!(layout.total_bits(), 0);
        assert_eq!(layout.unpack(123).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_compile_rejects_wide_field() {
        let err = Layout::compile(&[Bitfield::new("x", 33)]).unwrap_err();
        assert_eq!(err, LayoutError::FieldTooWide);
    }

    #[test]
    fn test_compile_rejects_wide_sequence() {
        let fields = vec![Bitfield::new("a", 20), Bitfield::new("b", 13)];
        let err = Layout::compile(&fields).unwrap_err();
        assert_eq!(err, LayoutError::WidthExceeded);
    }

    #[test]
    fn test_unpack_rgba() {
        let values = rgba().unpack(1714657663).unwrap();
        assert_eq!(values, vec![102, 51, 159, 191]);
    }

    #[test]
    fn test_update_alpha_keeps_other_channels() {
        let layout = rgba();
        let packed = layout.update(1714657663, 3, Some(255)).unwrap();
        assert_eq!(packed, 1714657727);
        assert_eq!(layout.unpack(packed).unwrap(), vec![102, 51, 159, 255]);
    }

    #[test]
    fn test_update_into_zero_value() {
        let fields = vec![
            Bitfield::new("a", 1),
            Bitfield::new("b", 3),
            Bitfield::new("c", 4),
        ];
        let layout = Layout::compile(&fields).unwrap();
        assert_eq!(layout.update(0, 1, Some(5)).unwrap(), 80);
    }

    #[test]
    fn test_update_clamps_into_field_range() {
        let fields = vec![Bitfield::new("a", 1), Bitfield::new("b", 3)];
        let layout = Layout::compile(&fields).unwrap();
        assert_eq!(layout.update(0, 1, Some(999)).unwrap(), 7);
        assert_eq!(layout.update(7, 1, Some(-4)).unwrap(), 0);
    }

    #[test]
    fn test_update_treats_nan_as_zero() {
        let layout = rgba();
        let packed = layout.update(1714657663, 3, None).unwrap();
        assert_eq!(layout.unpack(packed).unwrap(), vec![102, 51, 159, 0]);
    }

    #[test]
    fn test_update_unknown_index() {
        let err = rgba().update(0, 4, Some(1)).unwrap_err();
        assert_eq!(err, UpdateError::NoSuchField);
    }

    #[test]
    fn test_zero_width_field() {
        let fields = vec![Bitfield::new("pad", 0), Bitfield::new("v", 4)];
        let layout = Layout::compile(&fields).unwrap();
        assert_eq!(layout.unpack(0b1111).unwrap(), vec![0, 15]);
        assert_eq!(layout.update(0b1111, 0, Some(3)).unwrap(), 0b1111);
    }

    #[test]
    fn test_sole_full_width_field() {
        let layout = Layout::compile(&[Bitfield::new("all", 32)]).unwrap();
        assert_eq!(layout.unpack(u32::MAX).unwrap(), vec![u32::MAX]);
        assert_eq!(layout.update(0, 0, Some(i64::from(u32::MAX))).unwrap(), u32::MAX);
        assert_eq!(layout.update(u32::MAX, 0, Some(0)).unwrap(), 0);
    }

    fn arb_fields() -> impl Strategy<Value = Vec<Bitfield>> {
        prop::collection::vec(0u32..=8, 1..=4)
            .prop_map(|sizes| sizes.into_iter().map(|s| Bitfield::new("f", s)).collect())
    }

    proptest! {
        #[test]
        fn prop_update_with_own_value_is_noop(
            fields in arb_fields(),
            packed in any::<u32>(),
        ) {
            let layout = Layout::compile(&fields).unwrap();
            let values = layout.unpack(packed).unwrap();
            for (i, value) in values.iter().enumerate() {
                let next = layout.update(packed, i, Some(i64::from(*value))).unwrap();
                prop_assert_eq!(next, packed);
            }
        }

        #[test]
        fn prop_update_leaves_other_fields_alone(
            fields in arb_fields(),
            packed in any::<u32>(),
            index in any::<prop::sample::Index>(),
            new_value in -300i64..5_000_000_000,
        ) {
            let layout = Layout::compile(&fields).unwrap();
            let i = index.index(fields.len());
            let before = layout.unpack(packed).unwrap();
            let next = layout.update(packed, i, Some(new_value)).unwrap();
            let after = layout.unpack(next).unwrap();
            for j in 0..fields.len() {
                if j != i {
                    prop_assert_eq!(after[j], before[j]);
                }
            }
            prop_assert_eq!(
                i64::from(after[i]),
                new_value.clamp(0, i64::from(layout.fields[i].max_value()))
            );
        }

        #[test]
        fn prop_unpack_stays_in_field_range(
            fields in arb_fields(),
            packed in any::<u32>(),
        ) {
            let layout = Layout::compile(&fields).unwrap();
            let values = layout.unpack(packed).unwrap();
            for (field, value) in layout.fields.iter().zip(values) {
                prop_assert!(value <= field.max_value());
            }
        }
    }
}
