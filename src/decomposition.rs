use crate::codepoint::Codepoint;
use crate::hangul;
use crate::properties::PropertyTable;
use crate::properties::CODEPOINT_LIMIT;

/// форма декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionMode
{
    /// каноническая (NFD / NFC)
    Canonical,
    /// совместимости (NFKD / NFKC)
    Compatibility,
}

/// предел количества шагов разворачивания декомпозиции одного кодпоинта.
/// самая длинная полная декомпозиция в UCD - 18 кодпоинтов; превышение предела
/// возможно только при зацикленных отображениях в таблице свойств
pub const DECOMPOSITION_ITERATION_LIMIT: usize = 64;

/// полная декомпозиция последовательности кодпоинтов.
/// порядок верхнего уровня сохраняется, отображения разворачиваются вглубь
pub fn decompose<T>(table: &T, input: &[u32], mode: DecompositionMode) -> Vec<Codepoint>
where
    T: PropertyTable,
{
    let mut result = Vec::with_capacity(input.len());

    for &code in input {
        decompose_code(table, code, mode, &mut result);
    }

    result
}

/// развернуть декомпозицию одного кодпоинта до фиксированной точки.
/// обход вглубь через явный стек, без рекурсии вызовов
fn decompose_code<T>(table: &T, code: u32, mode: DecompositionMode, result: &mut Vec<Codepoint>)
where
    T: PropertyTable,
{
    // кодпоинты за пределами Unicode проходят как есть
    if code >= CODEPOINT_LIMIT {
        result.push(Codepoint::starter(code));
        return;
    }

    let mut stack: Vec<u32> = vec![code];
    let mut iterations = 0;

    while let Some(code) = stack.pop() {
        iterations += 1;

        if iterations > DECOMPOSITION_ITERATION_LIMIT {
            panic!(
                "таблица свойств повреждена: декомпозиция U+{:04X} не достигает фиксированной точки",
                code
            );
        }

        if hangul::is_hangul_syllable(code) {
            hangul::decompose_hangul(code, result);
            continue;
        }

        match lookup(table, code, mode) {
            Some(mapping) => {
                // в стек - в обратном порядке, чтобы развернуть отображение в исходном
                for &element in mapping.iter().rev() {
                    stack.push(element);
                }
            }
            None => result.push(Codepoint {
                ccc: table.combining_class(code),
                code,
            }),
        }
    }
}

/// отображение декомпозиции для запрошенной формы.
/// в форме совместимости при отсутствии собственного отображения
/// используется каноническое
#[inline(always)]
fn lookup<T>(table: &T, code: u32, mode: DecompositionMode) -> Option<&[u32]>
where
    T: PropertyTable,
{
    match mode {
        DecompositionMode::Canonical => table.canonical_decomposition(code),
        DecompositionMode::Compatibility => table
            .compatibility_decomposition(code)
            .or_else(|| table.canonical_decomposition(code)),
    }
}
