/// количество кодпоинтов Unicode
pub const CODEPOINT_LIMIT: u32 = 0x110000;

/// таблица свойств Unicode - внешний неизменяемый источник данных.
/// все методы - чистые функции по коду кодпоинта, сложность поиска - около O(1).
/// каждый кодпоинт имеет определённое значение каждого свойства,
/// кодпоинты без особых свойств - стартеры без декомпозиции
pub trait PropertyTable
{
    /// класс канонического комбинирования (CCC), 0 - стартер
    fn combining_class(&self, code: u32) -> u8;

    /// каноническая декомпозиция, один уровень (как в UnicodeData.txt)
    fn canonical_decomposition(&self, code: u32) -> Option<&[u32]>;

    /// декомпозиция совместимости, один уровень, без канонического фолбека
    fn compatibility_decomposition(&self, code: u32) -> Option<&[u32]>;

    /// входит ли кодпоинт в список исключений композиции (CompositionExclusions.txt)
    fn is_composition_excluded(&self, code: u32) -> bool;

    /// класс сегментации графем (UAX #29, Grapheme_Cluster_Break)
    fn grapheme_break_class(&self, code: u32) -> GraphemeBreakClass;
}

/// класс кодпоинта для определения границ графем.
/// ExtendedPictographic формально - отдельное свойство (emoji-data.txt),
/// но для правила ZWJ x Extended_Pictographic достаточно выделить его
/// в отдельный класс: во всех остальных правилах он ведёт себя как Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphemeBreakClass
{
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ExtendedPictographic,
    Other,
}
