//! Built-in example formats shown by the explorer.

use crate::field::Bitfield;

/// A worked example: a field sequence plus a packed value to unpack.
#[derive(Debug, Clone)]
pub struct Preset {
    /// Title shown in the example picker. Also the lookup key.
    pub title: &'static str,
    /// Short prose describing the format.
    pub description: &'static str,
    /// Packed value the example starts from.
    pub value: u32,
    /// Field sequence, most significant field first.
    pub fields: Vec<Bitfield>,
}

/// All built-in examples, in presentation order. The last entry is the empty
/// "custom" sequence users build their own format on.
pub fn catalog() -> Vec<Preset> {
    vec![
        Preset {
            title: "RGBA 8/8/8/8 pixel format: 32-bit color with alpha (purple, 50% opacity)",
            description: "A single pixel with 8 bits per color channel and 8 bits of alpha: \
                16,777,216 colors with 256 levels of transparency, as used by the HTML Canvas \
                API among many others. The value shown is 'rebeccapurple' #663399 at 50% opacity.",
            value: 1_714_657_663,
            fields: vec![
                Bitfield::new("Red", 8),
                Bitfield::new("Green", 8),
                Bitfield::new("Blue", 8),
                Bitfield::new("Alpha", 8),
            ],
        },
        Preset {
            title: "Nintendo 64 RGBA 5/5/5/1 pixel format (blue, opaque)",
            description: "A single pixel with 5 bits per color channel and 1 bit of alpha \
                (fully transparent or fully opaque), the Nintendo 64 framebuffer format. The \
                value shown is 'steelblue' #4682B4 at full opacity.",
            value: 214_061,
            fields: vec![
                Bitfield::new("Red", 5),
                Bitfield::new("Green", 5),
                Bitfield::new("Blue", 5),
                Bitfield::new("Alpha", 1),
            ],
        },
        Preset {
            title: "DOOM Q16.16 fixed-point decimal number (\u{3c0}, 3.141592653589793)",
            description: "A decimal number stored as 16 bits of integer part and 16 bits of \
                fractional part. DOOM used this so it could run on integer CPU instructions, \
                far faster than floating point at the time. To recover the number, divide the \
                fractional part by 65535 and add the integer part.",
            value: 205_887,
            fields: vec![
                Bitfield::new("Integer part", 16),
                Bitfield::new("Fractional part", 16),
            ],
        },
        Preset {
            title: "MS-DOS 32-bit Date & Time (2020-4-29 11:48:32AM)",
            description: "The format MS-DOS stored file timestamps in, also the system clock \
                format of IBM PC BIOSes. Seconds are stored divided by 2 because 5 bits cannot \
                hold 60 values, and the year is an offset from 1980 with range 0-127, so the \
                format overflows in 2107.",
            value: 1_350_327_824,
            fields: vec![
                Bitfield::new("Year (since 1980)", 7),
                Bitfield::new("Month (0 - 11)", 4),
                Bitfield::new("Day of Month (0 - 30)", 5),
                Bitfield::new("Hour (0 - 23)", 5),
                Bitfield::new("Minute (0 - 59)", 6),
                Bitfield::new("Second / 2 (0 - 29)", 5),
            ],
        },
        Preset {
            title: "MIDI Message (Note On C3 at 50% velocity)",
            description: "A MIDI command of up to 3 bytes: a status byte (leading 1) carrying \
                a 3-bit message and a 4-bit channel, then up to two data bytes (leading 0). \
                Here: 'Note On' on channel 0, note number 60 (middle C) at velocity 63.",
            value: 9_452_607,
            fields: vec![
                Bitfield::new("is status byte", 1),
                Bitfield::new("status message", 3),
                Bitfield::new("channel", 4),
                Bitfield::new("is status byte", 1),
                Bitfield::new("data 1 (note number)", 7),
                Bitfield::new("is status byte", 1),
                Bitfield::new("data 2 (velocity)", 7),
            ],
        },
        Preset {
            title: "custom (make your own!)",
            description: "",
            value: 0,
            fields: vec![],
        },
    ]
}

/// Finds a preset by title, falling back to the first entry.
pub fn find(title: &str) -> Preset {
    let mut all = catalog();
    match all.iter().position(|preset| preset.title == title) {
        Some(i) => all.swap_remove(i),
        None => all.swap_remove(0),
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::Layout;

    use super::*;

    #[test]
    fn test_every_preset_compiles_and_unpacks() {
        for preset in catalog() {
            let layout = Layout::compile(&preset.fields).unwrap();
            assert!(layout.total_bits() <= 32, "{}", preset.title);
            layout.unpack(preset.value).unwrap();
        }
    }

    #[test]
    fn test_midi_message_width() {
        let preset = find("MIDI Message (Note On C3 at 50% velocity)");
        let total: u32 = preset.fields.iter().map(|f| f.size).sum();
        assert_eq!(total, 24);
    }

    #[test]
    fn test_unknown_title_falls_back_to_first() {
        let preset = find("no such example");
        assert_eq!(preset.value, 1_714_657_663);
    }

    #[test]
    fn test_custom_is_empty() {
        let preset = find("custom (make your own!)");
        assert_eq!(preset.value, 0);
        assert!(preset.fields.is_empty());
    }
}
