/// Browse index coordinates: the starting letter and the page number
///
/// Both types are validated at construction so that a value in hand is always
/// usable in a browse request.
use crate::ValidationError;
use std::fmt;

/// An uppercase ASCII letter in the range `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// First letter of the browse index
    pub const FIRST: Letter = Letter('A');

    /// Last letter of the browse index
    pub const LAST: Letter = Letter('Z');

    /// Creates a letter, rejecting anything outside `A`-`Z`
    ///
    /// Lowercase letters are rejected rather than converted.
    ///
    /// # Examples
    ///
    /// ```
    /// use urban_scrape::model::Letter;
    ///
    /// assert!(Letter::new('Q').is_ok());
    /// assert!(Letter::new('q').is_err());
    /// ```
    pub fn new(value: char) -> Result<Self, ValidationError> {
        if value.is_ascii_uppercase() {
            Ok(Self(value))
        } else {
            Err(ValidationError::Letter(value))
        }
    }

    /// Returns the underlying character
    pub fn as_char(&self) -> char {
        self.0
    }

    /// Returns the following letter, or None after `Z`
    pub fn next(&self) -> Option<Self> {
        match self.0 {
            'Z' => None,
            c => Some(Self((c as u8 + 1) as char)),
        }
    }

    /// Iterates over all letters from `first` to `last` inclusive
    ///
    /// Yields nothing when `first` comes after `last`.
    pub fn range(first: Letter, last: Letter) -> impl Iterator<Item = Letter> {
        std::iter::successors(Some(first), |letter| letter.next())
            .take_while(move |letter| *letter <= last)
    }

    /// Iterates over the whole alphabet, `A` through `Z`
    pub fn all() -> impl Iterator<Item = Letter> {
        Self::range(Self::FIRST, Self::LAST)
    }
}

impl TryFrom<char> for Letter {
    type Error = ValidationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative browse page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    /// Creates a page number, rejecting negative (or out of range) values
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::PageNumber(value))
    }

    /// Returns the page number as an integer
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PageNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
