//! Animated numeric counters.

use thiserror::Error;

use crate::animation::ValueAnimator;
use crate::element::PageElement;

/// Error type for counter text parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterParseError {
    /// The text contains no digits at all
    #[error("counter text {text:?} contains no digits")]
    NoDigits { text: String },
    /// The digits do not fit the value range
    #[error("counter value {digits} is out of range")]
    OutOfRange { digits: String },
}

/// A counter's original text split into its numeric target and suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterText {
    /// All digits of the text read as one integer
    pub value: i64,
    /// Every non-digit, non-whitespace character, in order
    pub suffix: String,
}

/// Parse the display text of a counter element.
///
/// Digits are concatenated into the end value; every other
/// non-whitespace character is kept as the suffix.
///
/// ```rust
/// use page_fx::parse_counter_text;
///
/// let parsed = parse_counter_text("1234+").unwrap();
/// assert_eq!(parsed.value, 1234);
/// assert_eq!(parsed.suffix, "+");
///
/// assert!(parse_counter_text("many").is_err());
/// ```
pub fn parse_counter_text(text: &str) -> Result<CounterText, CounterParseError> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(CounterParseError::NoDigits {
            text: text.to_string(),
        });
    }
    let value = digits
        .parse::<i64>()
        .map_err(|_| CounterParseError::OutOfRange {
            digits: digits.clone(),
        })?;
    let suffix = text
        .chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
        .collect();
    Ok(CounterText { value, suffix })
}

/// Settings for the counter effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterEffect {
    /// Elements whose text is animated
    pub selector: String,
    /// Visible fraction required before counting starts
    pub threshold: f64,
    /// Run length in milliseconds
    pub duration_ms: f64,
    /// Marker class that guarantees a single run per element
    pub counted_class: String,
}

impl Default for CounterEffect {
    fn default() -> Self {
        Self {
            selector: ".metric-number".to_string(),
            threshold: 0.5,
            duration_ms: 1500.0,
            counted_class: "counted".to_string(),
        }
    }
}

impl CounterEffect {
    /// Start a run for an element that just became visible.
    ///
    /// Returns `Ok(None)` if the element has already been counted. On a
    /// parse error the element is left untouched.
    pub fn begin<E: PageElement>(
        &self,
        element: &E,
    ) -> Result<Option<CounterRun>, CounterParseError> {
        if element.has_class(&self.counted_class) {
            return Ok(None);
        }

        let parsed = parse_counter_text(&element.text())?;
        element.set_data("suffix", &parsed.suffix);
        element.add_class(&self.counted_class);
        log::debug!(
            "counter run to {}{} over {}ms",
            parsed.value,
            parsed.suffix,
            self.duration_ms
        );

        Ok(Some(CounterRun::new(parsed.value, parsed.suffix, self.duration_ms)))
    }
}

/// One counter animation: an animator from zero plus the preserved suffix.
#[derive(Clone, Debug)]
pub struct CounterRun {
    animator: ValueAnimator,
    suffix: String,
}

impl CounterRun {
    pub fn new(end: i64, suffix: String, duration_ms: f64) -> Self {
        Self {
            animator: ValueAnimator::new(0, end, duration_ms),
            suffix,
        }
    }

    #[inline]
    pub fn animator(&self) -> &ValueAnimator {
        &self.animator
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Text for the frame at `timestamp`, or `None` once done.
    pub fn frame_text(&mut self, timestamp: f64) -> Option<String> {
        self.animator
            .advance(timestamp)
            .map(|value| format!("{}{}", value, self.suffix))
    }

    /// Render one frame into `element`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn step<E: PageElement>(&mut self, element: &E, timestamp: f64) -> bool {
        if let Some(text) = self.frame_text(timestamp) {
            element.set_text(&text);
        }
        !self.animator.is_done()
    }
}
