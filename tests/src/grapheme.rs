use unicode_engine::GraphemeBreakState;

use crate::shared::NORMALIZER;

/// прогнать строку через машину состояний и сверить границы перед
/// каждым кодпоинтом
fn check(codes: &[u32], expected: &[bool])
{
    assert_eq!(codes.len(), expected.len());

    let mut state = GraphemeBreakState::default();

    for (i, &code) in codes.iter().enumerate() {
        assert_eq!(
            NORMALIZER.check_grapheme_break(code, &mut state),
            expected[i],
            "кодпоинт U+{:04X}, позиция {}",
            code,
            i
        );
    }
}

/// GB1: граница перед первым кодпоинтом есть всегда
#[test]
fn break_start_of_text()
{
    check(&[0x0061], &[true]);
    check(&[0x0301], &[true]);
}

/// GB999: между обычными кодпоинтами границы есть
#[test]
fn break_other()
{
    check(&[0x0061, 0x0062, 0x0063], &[true, true, true]);
}

/// GB3..GB5: CR x LF, разрывы вокруг управляющих
#[test]
fn break_crlf_control()
{
    check(&[0x0061, 0x000D, 0x000A, 0x0062], &[true, true, false, true]);

    // LF + CR - в обратном порядке разрыв есть
    check(&[0x000A, 0x000D], &[true, true]);

    // после управляющего кодпоинта разрыв даже перед Extend
    check(&[0x0061, 0x0001, 0x0301], &[true, true, true]);
}

/// GB6..GB8: слоги хангыль не разрываются
#[test]
fn break_hangul()
{
    // L x V x T
    check(&[0x1100, 0x1161, 0x11A8], &[true, false, false]);
    // L x L
    check(&[0x1100, 0x1100], &[true, false]);
    // LV x T
    check(&[0xAC00, 0x11A8], &[true, false]);
    // LVT x T
    check(&[0xAC01, 0x11A8], &[true, false]);
    // V x V, V x T
    check(&[0x1161, 0x1161, 0x11A8], &[true, false, false]);
    // T x L - граница
    check(&[0x11A8, 0x1100], &[true, true]);
    // LV x V
    check(&[0xAC00, 0x1161], &[true, false]);
}

/// GB9, GB9a: Extend, ZWJ и SpacingMark не отрываются от базы
#[test]
fn break_extend()
{
    check(&[0x0061, 0x0301], &[true, false]);
    check(&[0x0061, 0x0308, 0x0301], &[true, false, false]);
    check(&[0x0915, 0x093E], &[true, false]);
    check(&[0x0061, 0x200D], &[true, false]);
}

/// GB9b: после Prepend нет границы
#[test]
fn break_prepend()
{
    check(&[0x0600, 0x0061], &[true, false]);

    // GB5 приоритетнее: перед управляющим разрыв есть
    check(&[0x0600, 0x000D], &[true, true]);
}

/// GB11: эмодзи-последовательность через ZWJ
#[test]
fn break_emoji_zwj()
{
    // семья: женщина + ZWJ + женщина + ZWJ + мальчик - один кластер
    check(
        &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F466],
        &[true, false, false, false, false],
    );

    // ZWJ перед обычной буквой кластер не продолжает
    check(&[0x1F469, 0x200D, 0x0061], &[true, false, true]);
}

/// GB12, GB13: пары Regional_Indicator
#[test]
fn break_regional_indicator()
{
    // пример спецификации: внутри пары флага границы нет,
    // до и после пары - есть
    check(&[0x0061, 0x1F1FA, 0x1F1F8, 0x0062], &[true, true, false, true]);

    // четыре RI - два флага
    check(
        &[0x1F1FA, 0x1F1F8, 0x1F1EF, 0x1F1F5],
        &[true, false, true, false],
    );

    // нечётная цепочка
    check(&[0x1F1FA, 0x1F1F8, 0x1F1EF], &[true, false, true]);

    // цепочка RI прерывается обычным кодпоинтом и начинается заново
    check(
        &[0x1F1FA, 0x1F1F8, 0x0061, 0x1F1FA, 0x1F1F8],
        &[true, false, true, true, false],
    );
}

/// состояние принадлежит одному сканированию: свежее состояние - новая строка
#[test]
fn state_reset()
{
    let mut state = GraphemeBreakState::default();

    assert!(NORMALIZER.check_grapheme_break(0x1F1FA, &mut state));
    assert!(!NORMALIZER.check_grapheme_break(0x1F1F8, &mut state));

    state.reset();

    assert!(NORMALIZER.check_grapheme_break(0x1F1F8, &mut state));
}
