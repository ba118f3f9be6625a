//! Closed vocabularies of the TimeML annotation scheme.

use serde::{Deserialize, Serialize};

/// Semantic class of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventClass {
    Reporting,
    Perception,
    Aspectual,
    IAction,
    IState,
    State,
    Modal,
    Occurrence,
    EventContainer,
    Cause,
}

impl EventClass {
    pub const ALL: [EventClass; 10] = [
        EventClass::Reporting,
        EventClass::Perception,
        EventClass::Aspectual,
        EventClass::IAction,
        EventClass::IState,
        EventClass::State,
        EventClass::Modal,
        EventClass::Occurrence,
        EventClass::EventContainer,
        EventClass::Cause,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventClass::Reporting => "REPORTING",
            EventClass::Perception => "PERCEPTION",
            EventClass::Aspectual => "ASPECTUAL",
            EventClass::IAction => "I_ACTION",
            EventClass::IState => "I_STATE",
            EventClass::State => "STATE",
            EventClass::Modal => "MODAL",
            EventClass::Occurrence => "OCCURRENCE",
            EventClass::EventContainer => "EVENT_CONTAINER",
            EventClass::Cause => "CAUSE",
        }
    }

    /// Look up a class by its corpus spelling.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|class| class.as_str() == s)
    }
}

impl std::fmt::Display for EventClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimexType {
    Date,
    Time,
    Duration,
    Set,
}

impl TimexType {
    pub const ALL: [TimexType; 4] = [
        TimexType::Date,
        TimexType::Time,
        TimexType::Duration,
        TimexType::Set,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimexType::Date => "DATE",
            TimexType::Time => "TIME",
            TimexType::Duration => "DURATION",
            TimexType::Set => "SET",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == s)
    }
}

impl std::fmt::Display for TimexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temporal relation type of a TLINK.
///
/// The four interval relations with a known inverse get their own variant;
/// every other label is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    After,
    Before,
    Includes,
    IsIncluded,
    Other(String),
}

impl RelationType {
    pub fn parse(s: &str) -> Self {
        match s {
            "AFTER" => RelationType::After,
            "BEFORE" => RelationType::Before,
            "INCLUDES" => RelationType::Includes,
            "IS_INCLUDED" => RelationType::IsIncluded,
            other => RelationType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RelationType::After => "AFTER",
            RelationType::Before => "BEFORE",
            RelationType::Includes => "INCLUDES",
            RelationType::IsIncluded => "IS_INCLUDED",
            RelationType::Other(label) => label,
        }
    }

    /// The relation that holds with the arguments swapped.
    ///
    /// Labels without a known inverse are returned unchanged.
    pub fn inverse(&self) -> Self {
        match self {
            RelationType::After => RelationType::Before,
            RelationType::Before => RelationType::After,
            RelationType::Includes => RelationType::IsIncluded,
            RelationType::IsIncluded => RelationType::Includes,
            RelationType::Other(label) => RelationType::Other(label.clone()),
        }
    }
}

impl From<String> for RelationType {
    fn from(s: String) -> Self {
        RelationType::parse(&s)
    }
}

impl From<RelationType> for String {
    fn from(rel: RelationType) -> Self {
        rel.as_str().to_string()
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_class_spelling() {
        assert_eq!(EventClass::parse("I_ACTION"), Some(EventClass::IAction));
        assert_eq!(EventClass::parse("EVENT_CONTAINER"), Some(EventClass::EventContainer));
        assert_eq!(EventClass::parse("occurrence"), None);
        for class in EventClass::ALL {
            assert_eq!(EventClass::parse(class.as_str()), Some(class));
        }
    }

    #[test]
    fn test_timex_type_spelling() {
        assert_eq!(TimexType::parse("DURATION"), Some(TimexType::Duration));
        assert_eq!(TimexType::parse("2010-03-12"), None);
    }

    #[test]
    fn test_relation_inverse() {
        assert_eq!(RelationType::parse("AFTER").inverse(), RelationType::Before);
        assert_eq!(RelationType::parse("BEFORE").inverse(), RelationType::After);
        assert_eq!(RelationType::parse("INCLUDES").inverse(), RelationType::IsIncluded);
        assert_eq!(RelationType::parse("IS_INCLUDED").inverse(), RelationType::Includes);

        let vague = RelationType::parse("SIMULTANEOUS/OVERLAP");
        assert_eq!(vague.inverse(), vague);
        assert_eq!(vague.as_str(), "SIMULTANEOUS/OVERLAP");
    }

    #[test]
    fn test_relation_serializes_as_label() {
        let json = serde_json::to_string(&RelationType::IsIncluded).unwrap();
        assert_eq!(json, "\"IS_INCLUDED\"");
        let back: RelationType = serde_json::from_str("\"VAGUE\"").unwrap();
        assert_eq!(back, RelationType::Other("VAGUE".into()));
    }
}
