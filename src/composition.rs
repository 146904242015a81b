use std::collections::HashMap;

use crate::codepoint::Codepoint;
use crate::hangul;
use crate::properties::PropertyTable;
use crate::properties::CODEPOINT_LIMIT;

/// индекс канонических пар: (стартер, комбинируемый кодпоинт) -> композит
pub struct CompositionPairs
{
    pairs: HashMap<(u32, u32), u32>,
}

impl CompositionPairs
{
    /// построить индекс по каноническим декомпозициям таблицы свойств.
    /// пару дают только двухэлементные канонические отображения; в индекс
    /// не попадают полные исключения композиции:
    ///  - список исключений таблицы (CompositionExclusions.txt),
    ///  - синглтоны (отображения из одного кодпоинта),
    ///  - декомпозиции нестартеров и декомпозиции, начинающиеся с нестартера
    pub fn build<T>(table: &T) -> Self
    where
        T: PropertyTable,
    {
        let mut pairs = HashMap::new();

        for code in 0 .. CODEPOINT_LIMIT {
            let mapping = match table.canonical_decomposition(code) {
                Some(mapping) if mapping.len() == 2 => mapping,
                _ => continue,
            };

            if table.combining_class(code) != 0 || table.combining_class(mapping[0]) != 0 {
                continue;
            }

            if table.is_composition_excluded(code) {
                continue;
            }

            pairs.insert((mapping[0], mapping[1]), code);
        }

        Self { pairs }
    }

    /// каноническая композиция пары кодпоинтов
    #[inline(always)]
    pub fn combine(&self, starter: u32, code: u32) -> Option<u32>
    {
        match hangul::compose_hangul(starter, code) {
            Some(composite) => Some(composite),
            None => self.pairs.get(&(starter, code)).copied(),
        }
    }
}

/// каноническая композиция последовательности (Unicode 3.11, Canonical
/// Composition Algorithm). вход должен быть полностью канонически
/// декомпозирован и упорядочен
pub fn compose(pairs: &CompositionPairs, buffer: Vec<Codepoint>) -> Vec<Codepoint>
{
    let mut result: Vec<Codepoint> = Vec::with_capacity(buffer.len());

    // индекс текущего стартера в result и CCC последнего записанного
    // после него кодпоинта
    let mut starter: Option<usize> = None;
    let mut last_ccc: u8 = 0;

    for codepoint in buffer {
        if let Some(index) = starter {
            // композиция блокируется, если между стартером и кодпоинтом есть
            // кодпоинт с CCC >= текущего. последовательность упорядочена,
            // поэтому достаточно проверить последний записанный; стартер
            // (CCC = 0) блокирует всё, что не примыкает к нему вплотную
            let blocked = index + 1 != result.len() && last_ccc >= codepoint.ccc;

            if !blocked {
                if let Some(composite) = pairs.combine(result[index].code, codepoint.code) {
                    // композит замещает стартер и сам остаётся стартером
                    result[index].code = composite;
                    continue;
                }
            }
        }

        if codepoint.is_starter() {
            starter = Some(result.len());
            last_ccc = 0;
        } else {
            last_ccc = codepoint.ccc;
        }

        result.push(codepoint);
    }

    result
}
