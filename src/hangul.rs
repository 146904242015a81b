use crate::codepoint::Codepoint;

// слоги хангыль не хранятся в таблице свойств: их декомпозиция и композиция
// вычисляются алгоритмически (Unicode 3.12, Conjoining Jamo Behavior)

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных (на 1 меньше, см. спецификацию)
pub const HANGUL_T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных, включая их отсутствие
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

/// является ли кодпоинт слогом хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// декомпозиция слога хангыль: LV -> L V, LVT -> L V T.
/// все чамо - стартеры без дальнейшей декомпозиции
pub fn decompose_hangul(code: u32, result: &mut Vec<Codepoint>)
{
    let s = code - HANGUL_S_BASE;

    let l = s / HANGUL_N_COUNT;
    let v = (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = s % HANGUL_T_COUNT;

    result.push(Codepoint::starter(HANGUL_L_BASE + l));
    result.push(Codepoint::starter(HANGUL_V_BASE + v));

    if t != 0 {
        result.push(Codepoint::starter(HANGUL_T_BASE + t));
    }
}

/// композиция пары хангыль: L + V -> LV, LV + T -> LVT
#[inline(always)]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT),
            false => None,
        };
    }

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    if lv < HANGUL_S_COUNT && lv % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        if t != 0 && t < HANGUL_T_COUNT {
            return Some(first + t);
        }
    }

    None
}
