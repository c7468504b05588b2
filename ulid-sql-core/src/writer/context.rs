/// State carried while rendering one statement.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Placeholders written so far, numbered dialects continue from here.
    pub counter: u32,
}
