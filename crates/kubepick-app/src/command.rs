#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectPrev,
    SelectNext,
    Confirm,
    Cancel,
    ClearFilter,
    FilterInput(char),
    FilterBackspace,
}
