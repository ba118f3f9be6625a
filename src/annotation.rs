//! Parsing of raw annotation strings into tagged records.
//!
//! The corpus stores each annotation as a whitespace-delimited field list.
//! The second field names the event class or timex type, except on
//! continuation fragments of multiword annotations, where that position holds
//! unrelated data. The parse decides this once, from the whole record.

use crate::vocabulary::{EventClass, TimexType};

/// Field that marks a fragment of a multiword annotation.
pub const MULTIWORD_MARKER: &str = "multiword=\"true\"";

/// Returns true if the annotation string carries the multiword marker.
pub fn is_multiword(annotation: &str) -> bool {
    annotation.split_whitespace().any(|field| field == MULTIWORD_MARKER)
}

/// The subtype position of an annotation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtype<T> {
    /// A member of the closed vocabulary
    Known(T),
    /// Something else; for multiword continuations this is unrelated data
    Unrecognized(String),
}

impl<T: Copy> Subtype<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Subtype::Known(value) => Some(*value),
            Subtype::Unrecognized(_) => None,
        }
    }
}

/// A parsed event annotation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub class: Subtype<EventClass>,
    /// The second field verbatim, empty when the string has fewer fields
    pub raw_class: String,
    pub multiword: bool,
}

impl ParsedEvent {
    pub fn parse(annotation: &str) -> Self {
        let raw_class = annotation.split_whitespace().nth(1).unwrap_or_default().to_string();
        let class = match EventClass::parse(&raw_class) {
            Some(class) => Subtype::Known(class),
            None => Subtype::Unrecognized(raw_class.clone()),
        };
        Self {
            class,
            raw_class,
            multiword: is_multiword(annotation),
        }
    }

    /// True for a multiword fragment whose class has to come from another
    /// fragment of the same event.
    pub fn is_continuation(&self) -> bool {
        self.multiword && self.class.known().is_none()
    }
}

/// A parsed timex annotation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTimex {
    pub kind: Subtype<TimexType>,
    /// The normalized value (third field), only read for typed fragments
    pub value: Option<String>,
}

impl ParsedTimex {
    pub fn parse(annotation: &str) -> Self {
        let mut fields = annotation.split_whitespace().skip(1);
        let raw_kind = fields.next().unwrap_or_default();
        match TimexType::parse(raw_kind) {
            Some(kind) => Self {
                kind: Subtype::Known(kind),
                value: fields.next().map(str::to_string),
            },
            None => Self {
                kind: Subtype::Unrecognized(raw_kind.to_string()),
                value: None,
            },
        }
    }

    /// True for a fragment that inherits type and value from the last typed
    /// fragment.
    pub fn is_continuation(&self) -> bool {
        self.kind.known().is_none()
    }
}
