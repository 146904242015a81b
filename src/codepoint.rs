/// кодпоинт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint
{
    /// класс комбинирования
    pub ccc: u8,
    /// код символа
    pub code: u32,
}

impl Codepoint
{
    /// стартер
    #[inline(always)]
    pub fn starter(code: u32) -> Self
    {
        Self { ccc: 0, code }
    }

    /// является ли кодпоинт стартером?
    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.ccc == 0
    }
}
