//! Maps the raw status tokens reported by the server to a closed set of
//! display categories.
//!
//! Every resource has its own vocabulary. A token outside of it is reported
//! as [`StatusCategory::Unrecognized`] so that a change in the server's data
//! shows up on screen instead of being folded into `ok` or `error`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Ok,
    Error,
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Success,
    Danger,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    Check,
    Block,
    Question,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClass {
    pub category: StatusCategory,
    pub icon: StatusIcon,
    pub color: StatusColor,
    pub token: String,
}

impl StatusClass {
    fn new(category: StatusCategory, token: &str) -> Self {
        let (icon, color) = match category {
            StatusCategory::Ok => (StatusIcon::Check, StatusColor::Success),
            StatusCategory::Error => (StatusIcon::Block, StatusColor::Danger),
            StatusCategory::Unrecognized => (StatusIcon::Question, StatusColor::Warning),
        };
        Self {
            category,
            icon,
            color,
            token: token.to_string(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.category != StatusCategory::Unrecognized
    }

    /// Text to show next to the icon. Unrecognized tokens keep the raw value
    /// visible so the operator can tell what the server sent.
    pub fn label(&self) -> String {
        match self.category {
            StatusCategory::Unrecognized if self.token.is_empty() => "unknown".to_string(),
            StatusCategory::Unrecognized => format!("unknown ({})", self.token),
            _ => self.token.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusVocabulary {
    ok: &'static [&'static str],
    error: &'static [&'static str],
}

/// Tokens reported in the `succeeded` field of a job.
pub const JOB_STATUSES: StatusVocabulary =
    StatusVocabulary::new(&["ok", "Success"], &["error", "Error"]);

/// Tokens reported in the `succeeded` field of a job execution.
pub const EXECUTION_STATUSES: StatusVocabulary = StatusVocabulary::new(&["ok"], &["error"]);

impl StatusVocabulary {
    pub const fn new(ok: &'static [&'static str], error: &'static [&'static str]) -> Self {
        Self { ok, error }
    }

    pub fn classify(&self, raw: &str) -> StatusClass {
        let category = if self.ok.iter().any(|t| *t == raw) {
            StatusCategory::Ok
        } else if self.error.iter().any(|t| *t == raw) {
            StatusCategory::Error
        } else {
            StatusCategory::Unrecognized
        };
        StatusClass::new(category, raw)
    }
}

/// Classifies a job status token.
pub fn classify(raw: &str) -> StatusClass {
    JOB_STATUSES.classify(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_tokens() {
        assert_eq!(classify("ok").category, StatusCategory::Ok);
        assert_eq!(classify("Success").category, StatusCategory::Ok);
        assert_eq!(classify("error").category, StatusCategory::Error);
        assert_eq!(classify("Error").category, StatusCategory::Error);

        let ok = classify("ok");
        assert_eq!(ok.icon, StatusIcon::Check);
        assert_eq!(ok.color, StatusColor::Success);
        assert_eq!(ok.label(), "ok");

        let error = classify("error");
        assert_eq!(error.icon, StatusIcon::Block);
        assert_eq!(error.color, StatusColor::Danger);
    }

    #[test]
    fn classify_unknown_token_is_distinct_from_known_categories() {
        let unknown = classify("unknown-token");
        assert_eq!(unknown.category, StatusCategory::Unrecognized);
        assert_ne!(unknown.category, classify("ok").category);
        assert_ne!(unknown.category, classify("error").category);
        assert_eq!(unknown.color, StatusColor::Warning);
        assert!(!unknown.is_recognized());
        assert_eq!(unknown.label(), "unknown (unknown-token)");
        assert_eq!(classify("").label(), "unknown");
    }

    #[test]
    fn vocabularies_are_closed_per_resource() {
        assert_eq!(
            EXECUTION_STATUSES.classify("Success").category,
            StatusCategory::Unrecognized
        );
        assert_eq!(EXECUTION_STATUSES.classify("ok").category, StatusCategory::Ok);
        assert_eq!(JOB_STATUSES.classify("OK").category, StatusCategory::Unrecognized);
    }
}
