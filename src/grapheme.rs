use crate::properties::GraphemeBreakClass;

/// состояние сканирования границ графем одной строки.
/// свежее состояние означает начало текста; состояние не разделяется
/// между одновременными сканированиями разных строк
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeBreakState
{
    /// класс предыдущего кодпоинта, None - начало текста
    previous: Option<GraphemeBreakClass>,
    /// нечётна ли длина текущей цепочки Regional_Indicator
    ri_parity_odd: bool,
}

impl GraphemeBreakState
{
    /// вернуть состояние к началу текста
    pub fn reset(&mut self)
    {
        *self = Self::default();
    }
}

/// есть ли граница графемы перед кодпоинтом с классом class.
/// машина состояний инкрементальна: решение принимается только по классу
/// предыдущего кодпоинта и флагу чётности, без буферизации строки
pub fn check_grapheme_break(class: GraphemeBreakClass, state: &mut GraphemeBreakState) -> bool
{
    let is_break = match state.previous {
        // GB1: перед первым кодпоинтом текста граница есть всегда
        None => true,
        Some(previous) => decide(previous, class, state.ri_parity_odd),
    };

    state.ri_parity_odd = match class {
        GraphemeBreakClass::RegionalIndicator => match state.previous {
            Some(GraphemeBreakClass::RegionalIndicator) => !state.ri_parity_odd,
            _ => true,
        },
        _ => false,
    };
    state.previous = Some(class);

    is_break
}

/// правила GB3..GB999 в порядке приоритета, применяется первое подошедшее
fn decide(previous: GraphemeBreakClass, next: GraphemeBreakClass, ri_parity_odd: bool) -> bool
{
    use GraphemeBreakClass::*;

    match (previous, next) {
        // GB3: CR x LF
        (CR, LF) => false,
        // GB4, GB5: управляющие кодпоинты разрывают кластер с обеих сторон
        (Control | CR | LF, _) => true,
        (_, Control | CR | LF) => true,
        // GB6, GB7, GB8: слоги хангыль
        (L, L | V | LV | LVT) => false,
        (LV | V, V | T) => false,
        (LVT | T, T) => false,
        // GB9, GB9a: продолжающие кодпоинты, ZWJ и SpacingMark не отрываются от базы
        (_, Extend | ZWJ | SpacingMark) => false,
        // GB9b
        (Prepend, _) => false,
        // GB11: эмодзи-последовательность через ZWJ. проверяется только
        // предыдущий класс, без заглядывания назад
        (ZWJ, ExtendedPictographic) => false,
        // GB12, GB13: пара Regional_Indicator при нечётной длине цепочки
        (RegionalIndicator, RegionalIndicator) => !ri_parity_odd,
        // GB999
        _ => true,
    }
}
