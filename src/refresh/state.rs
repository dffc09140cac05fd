/// Where the refresh routine is in its cycle.
///
/// `Idle` only before the first cycle; afterwards the value is the terminal
/// state of the latest cycle until the next one enters `Loading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Loading,
    Rendered,
    ErrorShown,
    EmptyShown,
}

impl RefreshState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshState::Idle => "Idle",
            RefreshState::Loading => "Loading",
            RefreshState::Rendered => "Rendered",
            RefreshState::ErrorShown => "ErrorShown",
            RefreshState::EmptyShown => "EmptyShown",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RefreshState::Rendered | RefreshState::ErrorShown | RefreshState::EmptyShown
        )
    }
}
