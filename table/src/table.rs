use std::collections::HashMap;

use unicode_engine::GraphemeBreakClass;
use unicode_engine::PropertyTable;

use crate::entries;
use crate::grapheme;

lazy_static! {
    /// эталонная таблица свойств
    pub static ref TABLE: ReferenceTable = ReferenceTable::new();
}

/// свойства кодпоинта, участвующего в нормализации
struct Entry
{
    /// класс канонического комбинирования
    ccc: u8,
    /// каноническая декомпозиция
    canonical: Option<&'static [u32]>,
    /// декомпозиция совместимости
    compat: Option<&'static [u32]>,
}

/// эталонная реализация таблицы свойств поверх запечённого подмножества UCD.
/// кодпоинты без записи - стартеры без декомпозиции
pub struct ReferenceTable
{
    entries: HashMap<u32, Entry>,
}

impl ReferenceTable
{
    pub fn new() -> Self
    {
        let mut entries: HashMap<u32, Entry> = HashMap::new();

        for &(code, ccc) in entries::COMBINING_CLASSES {
            entry(&mut entries, code).ccc = ccc;
        }

        for &(code, mapping) in entries::CANONICAL_DECOMPOSITIONS {
            entry(&mut entries, code).canonical = Some(mapping);
        }

        for &(code, mapping) in entries::COMPAT_DECOMPOSITIONS {
            entry(&mut entries, code).compat = Some(mapping);
        }

        Self { entries }
    }
}

impl Default for ReferenceTable
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl PropertyTable for ReferenceTable
{
    fn combining_class(&self, code: u32) -> u8
    {
        self.entries.get(&code).map_or(0, |entry| entry.ccc)
    }

    fn canonical_decomposition(&self, code: u32) -> Option<&[u32]>
    {
        self.entries.get(&code).and_then(|entry| entry.canonical)
    }

    fn compatibility_decomposition(&self, code: u32) -> Option<&[u32]>
    {
        self.entries.get(&code).and_then(|entry| entry.compat)
    }

    fn is_composition_excluded(&self, code: u32) -> bool
    {
        entries::COMPOSITION_EXCLUSIONS.contains(&code)
    }

    fn grapheme_break_class(&self, code: u32) -> GraphemeBreakClass
    {
        grapheme::break_class(code)
    }
}

/// запись кодпоинта, по умолчанию - стартер без декомпозиции
fn entry(map: &mut HashMap<u32, Entry>, code: u32) -> &mut Entry
{
    map.entry(code).or_insert(Entry {
        ccc: 0,
        canonical: None,
        compat: None,
    })
}
