//! Text sink that matchers describe themselves into.

use std::fmt::{self, Debug, Display};

use super::SelfDescribing;

/// Accumulates the human-readable text produced by matchers.
///
/// Values are rendered with their [`Debug`] representation. A single value
/// is wrapped in angle brackets (`<42>`); items of a list are rendered bare
/// between the given delimiters (`[4,5,6]`).
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::Description;
///
/// let mut description = Description::new();
/// description
///     .append_text("size was ")
///     .append_value(&3)
///     .append_text(", missing ")
///     .append_list("[", ",", "]", [4, 5]);
///
/// assert_eq!(description.as_str(), "size was <3>, missing [4,5]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    buffer: String,
}

impl Description {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a single value as `<value>`.
    pub fn append_value<V: Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        self.buffer.push_str(&format!("<{value:?}>"));
        self
    }

    /// Append a delimited list of values.
    pub fn append_list<I>(&mut self, start: &str, separator: &str, end: &str, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Debug,
    {
        let rendered: Vec<String> = items.into_iter().map(|item| format!("{item:?}")).collect();
        self.buffer.push_str(start);
        self.buffer.push_str(&rendered.join(separator));
        self.buffer.push_str(end);
        self
    }

    /// Append the self-description of another matcher.
    pub fn append_description_of<D: SelfDescribing + ?Sized>(&mut self, value: &D) -> &mut Self {
        value.describe_to(self);
        self
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the sink and return its text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
