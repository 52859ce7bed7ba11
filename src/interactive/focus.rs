//! Which input the cursor is on

use crate::core::Letter;
use crate::form::FormState;

/// Keys per keyboard line
pub const KEYS_PER_LINE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Length,
    Positioned,
    Misplaced,
    Found,
    Required,
    Excluded,
}

const ORDER: [Section; 6] = [
    Section::Length,
    Section::Positioned,
    Section::Misplaced,
    Section::Found,
    Section::Required,
    Section::Excluded,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Positioned(usize),
    Misplaced(usize),
    Found { row: usize, col: usize },
    /// Cursor on a required-keyboard key (alphabet index)
    Required(usize),
    /// Cursor on an excluded-keyboard key (alphabet index)
    Excluded(usize),
}

impl Focus {
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Length => Section::Length,
            Self::Positioned(_) => Section::Positioned,
            Self::Misplaced(_) => Section::Misplaced,
            Self::Found { .. } => Section::Found,
            Self::Required(_) => Section::Required,
            Self::Excluded(_) => Section::Excluded,
        }
    }

    /// First input of `section`, if it has any
    fn enter(section: Section, state: &FormState) -> Option<Self> {
        match section {
            Section::Length => Some(Self::Length),
            Section::Positioned => (!state.positioned().is_empty()).then_some(Self::Positioned(0)),
            Section::Misplaced => (!state.misplaced().is_empty()).then_some(Self::Misplaced(0)),
            Section::Found => (!state.found_rows().is_empty()).then_some(Self::Found { row: 0, col: 0 }),
            Section::Required => Some(Self::Required(0)),
            Section::Excluded => Some(Self::Excluded(0)),
        }
    }

    fn cycle(self, state: &FormState, forward: bool) -> Self {
        let start = ORDER
            .iter()
            .position(|&s| s == self.section())
            .unwrap_or(0);
        for step in 1..=ORDER.len() {
            let offset = if forward { step } else { ORDER.len() - step };
            let section = ORDER[(start + offset) % ORDER.len()];
            if let Some(focus) = Self::enter(section, state) {
                return focus;
            }
        }
        self
    }

    /// Tab
    #[must_use]
    pub fn next_section(self, state: &FormState) -> Self {
        self.cycle(state, true)
    }

    /// Shift-Tab
    #[must_use]
    pub fn prev_section(self, state: &FormState) -> Self {
        self.cycle(state, false)
    }

    #[must_use]
    pub fn left(self) -> Self {
        match self {
            Self::Length => Self::Length,
            Self::Positioned(i) => Self::Positioned(i.saturating_sub(1)),
            Self::Misplaced(i) => Self::Misplaced(i.saturating_sub(1)),
            Self::Found { row, col } => Self::Found {
                row,
                col: col.saturating_sub(1),
            },
            Self::Required(i) => Self::Required(i.saturating_sub(1)),
            Self::Excluded(i) => Self::Excluded(i.saturating_sub(1)),
        }
    }

    #[must_use]
    pub fn right(self, state: &FormState) -> Self {
        let last = Letter::COUNT - 1;
        match self {
            Self::Length => Self::Length,
            Self::Positioned(i) => Self::Positioned(i + 1),
            Self::Misplaced(i) => Self::Misplaced(i + 1),
            Self::Found { row, col } => Self::Found { row, col: col + 1 },
            Self::Required(i) => Self::Required((i + 1).min(last)),
            Self::Excluded(i) => Self::Excluded((i + 1).min(last)),
        }
        .clamp(state)
    }

    /// Previous found row or keyboard line
    #[must_use]
    pub fn up(self, state: &FormState) -> Self {
        match self {
            Self::Found { row, col } => Self::Found {
                row: row.saturating_sub(1),
                col,
            }
            .clamp(state),
            Self::Required(i) => Self::Required(i.saturating_sub(KEYS_PER_LINE)),
            Self::Excluded(i) => Self::Excluded(i.saturating_sub(KEYS_PER_LINE)),
            other => other,
        }
    }

    /// Next found row or keyboard line
    #[must_use]
    pub fn down(self, state: &FormState) -> Self {
        let last = Letter::COUNT - 1;
        match self {
            Self::Found { row, col } => Self::Found { row: row + 1, col }.clamp(state),
            Self::Required(i) => Self::Required((i + KEYS_PER_LINE).min(last)),
            Self::Excluded(i) => Self::Excluded((i + KEYS_PER_LINE).min(last)),
            other => other,
        }
    }

    /// Pull the cursor back inside the current rows
    ///
    /// Rows shrink or vanish when the word length changes; a cursor left on a
    /// vanished row falls back to the length field.
    #[must_use]
    pub fn clamp(self, state: &FormState) -> Self {
        let within = |len: usize, i: usize| (len > 0).then(|| i.min(len - 1));
        match self {
            Self::Positioned(i) => {
                within(state.positioned().len(), i).map_or(Self::Length, Self::Positioned)
            }
            Self::Misplaced(i) => {
                within(state.misplaced().len(), i).map_or(Self::Length, Self::Misplaced)
            }
            Self::Found { row, col } => {
                let rows = state.found_rows();
                match within(rows.len(), row) {
                    Some(row) => within(rows[row].cells().len(), col)
                        .map_or(Self::Length, |col| Self::Found { row, col }),
                    None => Self::Length,
                }
            }
            other => other,
        }
    }
}
