/// Discrete input delivered to the heatmap model by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Previous day (wraps to the previous week's Saturday)
    Up,
    /// Next day (wraps to the next week's Sunday), never past the reference date
    Down,
    /// Same weekday, one week earlier
    Left,
    /// Same weekday, one week later, never past the reference date
    Right,
    /// Record one entry on the selected day
    Commit,
}

impl Command {
    /// Whether this command only moves the cursor
    pub fn is_movement(self) -> bool {
        !matches!(self, Self::Commit)
    }
}
