// подмножество UCD 15.1.0, достаточное для тестов и бенчмарков движка.
// значения перенесены из UnicodeData.txt / CompositionExclusions.txt как есть;
// слоги хангыль не включаются - движок обрабатывает их алгоритмически

/// классы канонического комбинирования нестартеров (UnicodeData.txt, колонка 3)
pub const COMBINING_CLASSES: &[(u32, u8)] = &[
    (0x0300, 230), // combining grave accent
    (0x0301, 230), // combining acute accent
    (0x0302, 230), // combining circumflex accent
    (0x0303, 230), // combining tilde
    (0x0304, 230), // combining macron
    (0x0305, 230), // combining overline
    (0x0306, 230), // combining breve
    (0x0307, 230), // combining dot above
    (0x0308, 230), // combining diaeresis
    (0x030A, 230), // combining ring above
    (0x030C, 230), // combining caron
    (0x0316, 220), // combining grave accent below
    (0x0323, 220), // combining dot below
    (0x0327, 202), // combining cedilla
    (0x0328, 202), // combining ogonek
    (0x0338, 1),   // combining long solidus overlay
    (0x0344, 230), // combining greek dialytika tonos
    (0x0345, 240), // combining greek ypogegrammeni
    (0x093C, 7),   // devanagari sign nukta
    (0x3099, 8),   // combining katakana-hiragana voiced sound mark
    (0x309A, 8),   // combining katakana-hiragana semi-voiced sound mark
];

/// канонические декомпозиции, один уровень (UnicodeData.txt, колонка 5 без тега)
pub const CANONICAL_DECOMPOSITIONS: &[(u32, &[u32])] = &[
    (0x00C0, &[0x0041, 0x0300]),
    (0x00C1, &[0x0041, 0x0301]),
    (0x00C2, &[0x0041, 0x0302]),
    (0x00C4, &[0x0041, 0x0308]),
    (0x00C5, &[0x0041, 0x030A]),
    (0x00C7, &[0x0043, 0x0327]),
    (0x00C8, &[0x0045, 0x0300]),
    (0x00C9, &[0x0045, 0x0301]),
    (0x00CA, &[0x0045, 0x0302]),
    (0x00D1, &[0x004E, 0x0303]),
    (0x00D6, &[0x004F, 0x0308]),
    (0x00DC, &[0x0055, 0x0308]),
    (0x00E0, &[0x0061, 0x0300]),
    (0x00E1, &[0x0061, 0x0301]),
    (0x00E2, &[0x0061, 0x0302]),
    (0x00E4, &[0x0061, 0x0308]),
    (0x00E5, &[0x0061, 0x030A]),
    (0x00E7, &[0x0063, 0x0327]),
    (0x00E8, &[0x0065, 0x0300]),
    (0x00E9, &[0x0065, 0x0301]),
    (0x00EA, &[0x0065, 0x0302]),
    (0x00F1, &[0x006E, 0x0303]),
    (0x00F6, &[0x006F, 0x0308]),
    (0x00FC, &[0x0075, 0x0308]),
    (0x0100, &[0x0041, 0x0304]),
    (0x0101, &[0x0061, 0x0304]),
    (0x0104, &[0x0041, 0x0328]),
    (0x0105, &[0x0061, 0x0328]),
    (0x01DE, &[0x00C4, 0x0304]),
    (0x01DF, &[0x00E4, 0x0304]),
    (0x0344, &[0x0308, 0x0301]),
    (0x0958, &[0x0915, 0x093C]),
    (0x1E60, &[0x0053, 0x0307]),
    (0x1E61, &[0x0073, 0x0307]),
    (0x1E62, &[0x0053, 0x0323]),
    (0x1E63, &[0x0073, 0x0323]),
    (0x1E68, &[0x1E62, 0x0307]),
    (0x1E69, &[0x1E63, 0x0307]),
    (0x1E9B, &[0x017F, 0x0307]),
    (0x1EA4, &[0x00C2, 0x0301]),
    (0x1EA5, &[0x00E2, 0x0301]),
    (0x212B, &[0x00C5]),
    (0x2126, &[0x03A9]),
    (0x30AC, &[0x30AB, 0x3099]),
];

/// декомпозиции совместимости, один уровень (UnicodeData.txt, колонка 5 с тегом)
pub const COMPAT_DECOMPOSITIONS: &[(u32, &[u32])] = &[
    (0x00A0, &[0x0020]),                 // <noBreak>
    (0x00B2, &[0x0032]),                 // <super>
    (0x00BD, &[0x0031, 0x2044, 0x0032]), // <fraction>
    (0x0132, &[0x0049, 0x004A]),         // <compat>
    (0x017F, &[0x0073]),                 // <compat>
    (0x2460, &[0x0031]),                 // <circle>
    (0xFB01, &[0x0066, 0x0069]),         // <compat>
    (0xFF76, &[0x30AB]),                 // <narrow>
    (0xFF9E, &[0x3099]),                 // <narrow>
];

/// исключения композиции (CompositionExclusions.txt, script specifics)
pub const COMPOSITION_EXCLUSIONS: &[u32] = &[
    0x0958, 0x0959, 0x095A, 0x095B, 0x095C, 0x095D, 0x095E, 0x095F,
];
