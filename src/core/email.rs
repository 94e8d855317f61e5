//! Call-to-action email capture

/// Transient contents of the call-to-action email field.
///
/// The draft is never validated or sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailDraft(String);

/// What pressing the call-to-action button did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No submission target exists in this build
    NotWired,
}

impl EmailDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft with the field's full current text.
    pub fn replace(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Call-to-action button handler. Leaves the draft untouched.
    pub fn submit(&self) -> SubmitOutcome {
        SubmitOutcome::NotWired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = EmailDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.as_str(), "");
    }

    #[test]
    fn test_typing_replaces_with_full_value() {
        let mut draft = EmailDraft::new();
        let mut field = String::new();
        for key in ["a", "b", "c"] {
            field.push_str(key);
            draft.replace(field.clone());
        }
        assert_eq!(draft.as_str(), "abc");
    }

    #[test]
    fn test_clear() {
        let mut draft = EmailDraft::new();
        draft.replace("donor@example.com");
        draft.clear();
        assert_eq!(draft.as_str(), "");
    }

    #[test]
    fn test_no_validation_applied() {
        let mut draft = EmailDraft::new();
        draft.replace("not an email");
        assert_eq!(draft.as_str(), "not an email");
    }

    #[test]
    fn test_submit_has_no_effect() {
        let mut draft = EmailDraft::new();
        draft.replace("abc");
        let before = draft.clone();

        assert_eq!(draft.submit(), SubmitOutcome::NotWired);
        assert_eq!(draft.submit(), SubmitOutcome::NotWired);
        assert_eq!(draft, before);
    }
}
