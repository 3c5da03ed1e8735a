//! The four Wireworld cell states and their text/numeric encodings.

use std::fmt;

/// A single Wireworld cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Conductor = 1,
    Head = 2,
    Tail = 3,
}

impl Cell {
    /// Decode a text character. Unknown characters are `Empty`.
    pub fn from_char(ch: char) -> Self {
        match ch {
            'w' | 'W' | '#' => Cell::Conductor,
            'h' | 'H' => Cell::Head,
            't' | 'T' => Cell::Tail,
            _ => Cell::Empty,
        }
    }

    /// Canonical character written by the serializer.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Conductor => 'w',
            Cell::Head => 'h',
            Cell::Tail => 't',
        }
    }

    /// Decode a numeric code (0-3). Anything else is `Empty`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Cell::Conductor,
            2 => Cell::Head,
            3 => Cell::Tail,
            _ => Cell::Empty,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Next state given how many of the 8 Moore neighbors are heads.
    #[inline]
    pub fn next(self, head_neighbors: u8) -> Self {
        match self {
            Cell::Head => Cell::Tail,
            Cell::Tail => Cell::Conductor,
            Cell::Conductor if head_neighbors == 1 || head_neighbors == 2 => Cell::Head,
            other => other,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Cell; 4] = [Cell::Empty, Cell::Conductor, Cell::Head, Cell::Tail];

    #[test]
    fn test_char_aliases() {
        assert_eq!(Cell::from_char('.'), Cell::Empty);
        assert_eq!(Cell::from_char(' '), Cell::Empty);
        assert_eq!(Cell::from_char('w'), Cell::Conductor);
        assert_eq!(Cell::from_char('#'), Cell::Conductor);
        assert_eq!(Cell::from_char('h'), Cell::Head);
        assert_eq!(Cell::from_char('H'), Cell::Head);
        assert_eq!(Cell::from_char('t'), Cell::Tail);
        assert_eq!(Cell::from_char('T'), Cell::Tail);

        // Unknown characters normalize to Empty
        assert_eq!(Cell::from_char('x'), Cell::Empty);
        assert_eq!(Cell::from_char('1'), Cell::Empty);
        assert_eq!(Cell::from_char('é'), Cell::Empty);
    }

    #[test]
    fn test_canonical_chars_decode_back() {
        for cell in ALL {
            assert_eq!(Cell::from_char(cell.to_char()), cell);
        }
    }

    #[test]
    fn test_codes() {
        for cell in ALL {
            assert_eq!(Cell::from_code(cell.code()), cell);
        }
        assert_eq!(Cell::from_code(4), Cell::Empty);
        assert_eq!(Cell::from_code(255), Cell::Empty);
    }

    #[test]
    fn test_head_and_tail_ignore_neighbors() {
        for n in 0..=8 {
            assert_eq!(Cell::Head.next(n), Cell::Tail);
            assert_eq!(Cell::Tail.next(n), Cell::Conductor);
            assert_eq!(Cell::Empty.next(n), Cell::Empty);
        }
    }

    #[test]
    fn test_conductor_fires_on_one_or_two_heads() {
        assert_eq!(Cell::Conductor.next(0), Cell::Conductor);
        assert_eq!(Cell::Conductor.next(1), Cell::Head);
        assert_eq!(Cell::Conductor.next(2), Cell::Head);
        for n in 3..=8 {
            assert_eq!(Cell::Conductor.next(n), Cell::Conductor);
        }
    }
}
