use unicode_engine::GraphemeBreakClass;

/// класс сегментации графем кодпоинта.
/// диапазоны перенесены из GraphemeBreakProperty.txt и emoji-data.txt
/// (подмножество); слоги хангыль раскладываются на LV / LVT арифметически
pub fn break_class(code: u32) -> GraphemeBreakClass
{
    use GraphemeBreakClass::*;

    #[rustfmt::skip]
    let class = match code {
        0x000D => CR,
        0x000A => LF,
        0x0000..=0x0009 | 0x000B | 0x000C | 0x000E..=0x001F
            | 0x007F..=0x009F | 0x00AD
            | 0x200B | 0x2028 | 0x2029 => Control,
        0x0300..=0x036F | 0x0483..=0x0489
            | 0x0591..=0x05BD | 0x0610..=0x061A | 0x064B..=0x065F | 0x0670
            | 0x06D6..=0x06DC
            | 0x0900..=0x0902 | 0x093C | 0x0941..=0x0948 | 0x094D
            | 0x200C
            | 0x20D0..=0x20F0
            | 0x3099 | 0x309A
            | 0xFE00..=0xFE0F
            | 0x1F3FB..=0x1F3FF => Extend,
        0x200D => ZWJ,
        0x1F1E6..=0x1F1FF => RegionalIndicator,
        0x0600..=0x0605 | 0x06DD | 0x070F => Prepend,
        0x0903 | 0x093B | 0x093E..=0x0940 | 0x0949..=0x094C => SpacingMark,
        0x1100..=0x115F | 0xA960..=0xA97C => L,
        0x1160..=0x11A7 | 0xD7B0..=0xD7C6 => V,
        0x11A8..=0x11FF | 0xD7CB..=0xD7FB => T,
        0xAC00..=0xD7A3 => match (code - 0xAC00) % 28 {
            0 => LV,
            _ => LVT,
        },
        0x00A9 | 0x00AE | 0x203C | 0x2049 | 0x2600..=0x27BF
            | 0x1F000..=0x1F0FF
            | 0x1F300..=0x1F9FF
            | 0x1FA00..=0x1FAFF => ExtendedPictographic,
        _ => Other,
    };

    class
}
