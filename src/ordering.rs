use crate::codepoint::Codepoint;

/// каноническое упорядочивание (Unicode 3.11, Canonical Ordering Algorithm).
/// цепочки подряд идущих нестартеров сортируются по CCC по возрастанию,
/// стартеры - границы цепочек и никогда не перемещаются
pub fn canonical_reorder(buffer: &mut [Codepoint])
{
    let mut i = 0;

    while i < buffer.len() {
        if buffer[i].is_starter() {
            i += 1;
            continue;
        }

        let start = i;

        while i < buffer.len() && !buffer[i].is_starter() {
            i += 1;
        }

        // sort_by_key устойчива: кодпоинты с равным CCC сохраняют исходный порядок
        if i - start > 1 {
            buffer[start .. i].sort_by_key(|codepoint| codepoint.ccc);
        }
    }
}
