use crate::error::LibraryError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorState {
    #[default]
    Inactive,
    Active(usize),
}

/// Position of the selected track inside the filtered view.
///
/// The view length is passed to every call; the cursor never holds the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackCursor {
    state: CursorState,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            CursorState::Inactive => None,
            CursorState::Active(index) => Some(index),
        }
    }

    /// Moves to `index`, leaving the cursor untouched when it is out of range.
    pub fn select(&mut self, index: usize, len: usize) -> Result<usize, LibraryError> {
        if index >= len {
            return Err(LibraryError::IndexOutOfRange { index, len });
        }
        self.state = CursorState::Active(index);
        Ok(index)
    }

    /// Inactive cursors start at the first track.
    pub fn next(&mut self, len: usize) -> Result<usize, LibraryError> {
        if len == 0 {
            return Err(LibraryError::EmptyView);
        }
        let index = match self.state {
            CursorState::Inactive => 0,
            CursorState::Active(i) => (i % len + 1) % len,
        };
        self.state = CursorState::Active(index);
        Ok(index)
    }

    /// Inactive cursors start at the last track.
    pub fn previous(&mut self, len: usize) -> Result<usize, LibraryError> {
        if len == 0 {
            return Err(LibraryError::EmptyView);
        }
        let index = match self.state {
            CursorState::Inactive => len - 1,
            CursorState::Active(i) => (i % len + len - 1) % len,
        };
        self.state = CursorState::Active(index);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(index: usize) -> PlaybackCursor {
        PlaybackCursor {
            state: CursorState::Active(index),
        }
    }

    #[test]
    fn starts_inactive() {
        let cursor = PlaybackCursor::new();
        assert_eq!(cursor.state(), CursorState::Inactive);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut cursor = active(2);
        assert_eq!(cursor.next(3), Ok(0));
        assert_eq!(cursor.current(), Some(0));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut cursor = active(0);
        assert_eq!(cursor.previous(3), Ok(2));
        assert_eq!(cursor.previous(3), Ok(1));
    }

    #[test]
    fn empty_view_is_reported_and_cursor_kept() {
        let mut cursor = active(1);
        assert_eq!(cursor.next(0), Err(LibraryError::EmptyView));
        assert_eq!(cursor.previous(0), Err(LibraryError::EmptyView));
        assert_eq!(cursor.current(), Some(1));
    }

    #[test]
    fn inactive_cursor_enters_at_either_end() {
        let mut cursor = PlaybackCursor::new();
        assert_eq!(cursor.next(4), Ok(0));

        let mut cursor = PlaybackCursor::new();
        assert_eq!(cursor.previous(4), Ok(3));
    }

    #[test]
    fn select_out_of_range_leaves_state_unchanged() {
        let mut cursor = PlaybackCursor::new();
        assert_eq!(
            cursor.select(5, 2),
            Err(LibraryError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(cursor.state(), CursorState::Inactive);

        cursor.select(1, 2).unwrap();
        assert!(cursor.select(2, 2).is_err());
        assert_eq!(cursor.state(), CursorState::Active(1));
    }

    #[test]
    fn stale_index_after_view_shrinks_still_wraps() {
        let mut cursor = active(7);
        assert_eq!(cursor.next(3), Ok(2));

        let mut cursor = active(7);
        assert_eq!(cursor.previous(3), Ok(0));
    }
}
