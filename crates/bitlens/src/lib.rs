//! # bitlens
//!
//! Core of an interactive bit-packing explorer: an ordered list of
//! fixed-width bitfields packed into a single `u32`, most significant field
//! first, editable in both directions. Unpacking derives every field value
//! from the packed value; updating one field writes it back without
//! disturbing the others.
//!
//! ## Example
//!
//! ```
//! use bitlens::field::Bitfield;
//! use bitlens::layout::Layout;
//!
//! let fields = vec![
//!     Bitfield::new("Red", 8),
//!     Bitfield::new("Green", 8),
//!     Bitfield::new("Blue", 8),
//!     Bitfield::new("Alpha", 8),
//! ];
//! let layout = Layout::compile(&fields).unwrap();
//!
//! let values = layout.unpack(0x66339FBF).unwrap();
//! assert_eq!(values, vec![0x66, 0x33, 0x9F, 0xBF]);
//!
//! let packed = layout.update(0x66339FBF, 3, Some(0xFF)).unwrap();
//! assert_eq!(packed, 0x66339FFF);
//! ```
//!
//! [session::Explorer] holds a live sequence and packed value for a frontend
//! to drive, [presets] carries the built-in examples, and [persist] saves
//! sessions through an injected key-value store.

pub mod bits;
pub mod errors;
pub mod field;
pub mod layout;
pub mod persist;
pub mod presets;
pub mod radix;
pub mod session;
