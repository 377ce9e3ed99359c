// 🔢 Number Words - Integer → English
// Splits a number into groups of thousands and names each group

use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

// ============================================================================
// LOOKUP TABLES
// ============================================================================

/// English words for 0-9. Zero is empty: it only appears as the whole number
/// and `to_english` handles that case itself.
pub static ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// 10-19 are irregular, so they get their own table
pub static TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];

/// Tens words, indexed by `tens digit - 1`.
/// "ten" only keeps the indexes aligned; 10-19 are looked up in TEENS.
pub static TENS: [&str; 9] = [
    "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale names for each group of thousands. i64 needs at most 7 groups.
pub static SCALES: [&str; 7] = [
    "", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion",
];

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    /// A helper was handed a value outside the range it names.
    /// The top-level conversion never triggers this.
    #[error("invalid argument: {value} is not a {kind} (expected 0..={max})")]
    InvalidArgument {
        kind: &'static str,
        value: u64,
        max: u64,
    },
}

fn check_range(kind: &'static str, value: u64, max: u64) -> Result<u64, WordsError> {
    if value > max {
        return Err(WordsError::InvalidArgument { kind, value, max });
    }
    Ok(value)
}

// ============================================================================
// RANGE-CHECKED ARGUMENTS
// ============================================================================

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u64) -> Result<Self, WordsError> {
        check_range("digit", value, 9).map(|v| Digit(v as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// A number with at most two digits (0-99)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleDigit(u8);

impl DoubleDigit {
    pub fn new(value: u64) -> Result<Self, WordsError> {
        check_range("two-digit number", value, 99).map(|v| DoubleDigit(v as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    fn tens(&self) -> Digit {
        Digit(self.0 / 10)
    }

    fn ones(&self) -> Digit {
        Digit(self.0 % 10)
    }
}

/// One group of thousands (0-999)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment(u16);

impl Segment {
    pub fn new(value: u64) -> Result<Self, WordsError> {
        check_range("segment", value, 999).map(|v| Segment(v as u16))
    }

    /// Lowest group of `number` as a magnitude.
    /// Uses the remainder, so i64::MIN is never negated.
    fn from_remainder(number: i64) -> Self {
        Segment((number % 1000).unsigned_abs() as u16)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn hundreds(&self) -> Digit {
        Digit((self.0 / 100) as u8)
    }

    fn below_hundred(&self) -> DoubleDigit {
        DoubleDigit((self.0 % 100) as u8)
    }
}

// ============================================================================
// WORD SEQUENCE
// ============================================================================

/// Ordered words of a (partial) number. Displays as the words joined by
/// single spaces; an empty sequence displays as "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<&'static str>,
}

impl WordSequence {
    pub fn new() -> Self {
        WordSequence { words: Vec::new() }
    }

    /// Append a word. Empty words are dropped.
    pub fn push(&mut self, word: &'static str) {
        if !word.is_empty() {
            self.words.push(word);
        }
    }

    /// Append every word of `other`
    pub fn extend(&mut self, other: WordSequence) {
        self.words.extend(other.words);
    }

    /// Put every word of `other` in front of the current words
    pub fn prepend(&mut self, other: WordSequence) {
        self.words.splice(0..0, other.words);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| *w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.words
    }
}

impl From<&'static str> for WordSequence {
    fn from(word: &'static str) -> Self {
        let mut seq = WordSequence::new();
        seq.push(word);
        seq
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Word for a single digit; zero gives "" and the caller decides what to do
pub fn digit_word(digit: Digit) -> &'static str {
    ONES[digit.0 as usize]
}

/// Words for 0-99: nothing for 0, one word for 1-19 and round tens,
/// tens word then ones word otherwise.
pub fn double_digit_words(number: DoubleDigit) -> WordSequence {
    let n = number.value();

    if n < 10 {
        return WordSequence::from(digit_word(number.ones()));
    }

    if n < 20 {
        return WordSequence::from(TEENS[(n - 10) as usize]);
    }

    let mut words = WordSequence::from(TENS[(number.tens().value() - 1) as usize]);
    words.push(digit_word(number.ones()));
    words
}

/// Words for 0-999. "and" only joins a hundreds part to a non-zero remainder
/// inside this segment.
pub fn segment_words(segment: Segment) -> WordSequence {
    let mut words = WordSequence::new();
    if segment.is_zero() {
        return words;
    }

    let rest = segment.below_hundred();

    if segment.value() >= 100 {
        words.push(digit_word(segment.hundreds()));
        words.push("hundred");
        if rest.value() != 0 {
            words.push("and");
        }
    }

    if rest.value() != 0 {
        words.extend(double_digit_words(rest));
    }

    words
}

/// Converts any i64 into capitalized English words.
///
/// Groups are named from the lowest up and prepended, so the output reads
/// high-to-low. A group that is zero contributes no words and no scale name
/// (1,000,000 is "One million", not "One million thousand").
pub fn to_english(number: i64) -> String {
    let mut words = WordSequence::new();

    if number < 0 {
        debug!(number, "number is negative");
    }

    // Truncating division walks the number toward zero from either side,
    // so the sign never has to be removed up front.
    let mut remaining = number;
    let mut group = 0usize;
    while remaining != 0 {
        let segment = Segment::from_remainder(remaining);
        let mut group_words = segment_words(segment);
        if group > 0 && !segment.is_zero() {
            group_words.push(SCALES[group]);
        }
        words.prepend(group_words);
        trace!(remaining, group, words = %words, "named group");

        remaining /= 1000;
        group += 1;
    }

    if words.is_empty() {
        words.push("zero");
    }

    if number < 0 {
        words.prepend(WordSequence::from("negative"));
    }

    capitalize_first(&words.to_string())
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
