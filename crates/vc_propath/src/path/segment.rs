use alloc::string::String;
use core::fmt;

/// The bracketed part of a [`Segment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `[digits]`
    Index(usize),
    /// `[text]`, taken verbatim.
    Key(String),
}

/// One dot-separated component of a [`PropertyPath`](super::PropertyPath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: String,
    selector: Option<Selector>,
    // Bracket text as written, so `[007]` keys a name map by `007`.
    raw: Option<String>,
}

impl Segment {
    /// A bare property name.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: None,
            raw: None,
        }
    }

    /// A property name with a bracketed selector, classified from `raw`.
    pub fn with_selector(name: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let selector = match raw.parse::<usize>() {
            Ok(index) if raw.bytes().all(|b| b.is_ascii_digit()) => Selector::Index(index),
            _ => Selector::Key(raw.clone()),
        };
        Self {
            name: name.into(),
            selector: Some(selector),
            raw: Some(raw),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    #[inline]
    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self.selector {
            Some(Selector::Index(index)) => Some(index),
            _ => None,
        }
    }

    #[inline]
    pub fn key(&self) -> Option<&str> {
        match &self.selector {
            Some(Selector::Key(key)) => Some(key),
            _ => None,
        }
    }

    /// Returns the bracket text exactly as written.
    #[inline]
    pub fn selector_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "{}[{raw}]", self.name),
            None => f.write_str(&self.name),
        }
    }
}
