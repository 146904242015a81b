pub use codepoint::Codepoint;
pub use composition::CompositionPairs;
pub use decomposition::DecompositionMode;
pub use decomposition::DECOMPOSITION_ITERATION_LIMIT;
pub use grapheme::GraphemeBreakState;
pub use properties::GraphemeBreakClass;
pub use properties::PropertyTable;
pub use properties::CODEPOINT_LIMIT;

mod codepoint;
mod composition;
mod decomposition;
mod grapheme;
pub mod hangul;
mod ordering;
mod properties;

/// нормализатор NFD / NFKD / NFC / NFKC и сканер границ графем
/// поверх неизменяемой таблицы свойств
pub struct Normalizer<'a, T>
where
    T: PropertyTable,
{
    /// таблица свойств
    table: &'a T,
    /// индекс канонических пар, построенный по таблице при создании
    pairs: CompositionPairs,
}

impl<'a, T> Normalizer<'a, T>
where
    T: PropertyTable,
{
    /// создать нормализатор. индекс композиций строится здесь, до первого
    /// использования: готовый нормализатор можно разделять между потоками
    /// без блокировок, таблица и индекс далее не изменяются
    pub fn new(table: &'a T) -> Self
    {
        Self {
            pairs: CompositionPairs::build(table),
            table,
        }
    }

    /// каноническая декомпозиция (NFD)
    pub fn to_nfd(&self, input: &[u32]) -> Vec<u32>
    {
        codes(self.decomposed(input, DecompositionMode::Canonical))
    }

    /// декомпозиция совместимости (NFKD)
    pub fn to_nfkd(&self, input: &[u32]) -> Vec<u32>
    {
        codes(self.decomposed(input, DecompositionMode::Compatibility))
    }

    /// каноническая композиция (NFC)
    pub fn to_nfc(&self, input: &[u32]) -> Vec<u32>
    {
        let buffer = self.decomposed(input, DecompositionMode::Canonical);

        codes(composition::compose(&self.pairs, buffer))
    }

    /// композиция совместимости (NFKC)
    pub fn to_nfkc(&self, input: &[u32]) -> Vec<u32>
    {
        let buffer = self.decomposed(input, DecompositionMode::Compatibility);

        codes(composition::compose(&self.pairs, buffer))
    }

    /// NFC-нормализация строки
    pub fn nfc_str(&self, input: &str) -> String
    {
        to_string(self.to_nfc(&to_codes(input)))
    }

    /// NFD-нормализация строки
    pub fn nfd_str(&self, input: &str) -> String
    {
        to_string(self.to_nfd(&to_codes(input)))
    }

    /// NFKC-нормализация строки
    pub fn nfkc_str(&self, input: &str) -> String
    {
        to_string(self.to_nfkc(&to_codes(input)))
    }

    /// NFKD-нормализация строки
    pub fn nfkd_str(&self, input: &str) -> String
    {
        to_string(self.to_nfkd(&to_codes(input)))
    }

    /// есть ли граница графемы перед кодпоинтом code.
    /// состояние переносится между последовательными кодпоинтами одной строки,
    /// для каждой новой строки состояние должно быть свежим
    pub fn check_grapheme_break(&self, code: u32, state: &mut GraphemeBreakState) -> bool
    {
        grapheme::check_grapheme_break(self.table.grapheme_break_class(code), state)
    }

    /// полная декомпозиция + каноническое упорядочивание
    fn decomposed(&self, input: &[u32], mode: DecompositionMode) -> Vec<Codepoint>
    {
        let mut buffer = decomposition::decompose(self.table, input, mode);
        ordering::canonical_reorder(&mut buffer);

        buffer
    }
}

/// коды кодпоинтов буфера
#[inline(always)]
fn codes(buffer: Vec<Codepoint>) -> Vec<u32>
{
    buffer.into_iter().map(|codepoint| codepoint.code).collect()
}

/// кодпоинты строки
#[inline(always)]
fn to_codes(input: &str) -> Vec<u32>
{
    input.chars().map(u32::from).collect()
}

/// собрать строку из кодпоинтов. для входа-строки некорректное скалярное
/// значение могло появиться только из повреждённой таблицы свойств
fn to_string(codes: Vec<u32>) -> String
{
    codes
        .into_iter()
        .map(|code| match char::from_u32(code) {
            Some(char) => char,
            None => panic!(
                "таблица свойств повреждена: U+{:04X} не является скалярным значением Unicode",
                code
            ),
        })
        .collect()
}
