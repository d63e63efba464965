use thiserror::Error;

use super::EditError;

/// Where an editing session stands relative to the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    /// Working copy matches the last server-confirmed payload.
    Loaded,
    /// Local mutations not yet submitted.
    Dirty,
    /// An update is in flight; no further submit until it settles.
    Saving,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a save is already in flight")]
    SaveInFlight,
    #[error("nothing to save")]
    NotDirty,
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// One editing session's working copy plus its save state machine:
/// `Loaded -> Dirty -> Saving -> Loaded` (or back to `Dirty` on a failed
/// save, keeping the draft for retry). Mutations are local until a save
/// succeeds; an abandoned session loses them.
#[derive(Debug, Clone)]
pub struct EditorSession<P> {
    payload: P,
    status: EditorStatus,
}

impl<P: Clone> EditorSession<P> {
    /// Start a session from a resolved (or default) payload.
    pub fn load(payload: P) -> Self {
        Self {
            payload,
            status: EditorStatus::Loaded,
        }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn status(&self) -> EditorStatus {
        self.status
    }

    /// Run a pure editor operation against the working copy. On success
    /// the result becomes the new working copy and the session is `Dirty`;
    /// a refused operation changes nothing.
    pub fn apply<F>(&mut self, op: F) -> Result<(), SessionError>
    where
        F: FnOnce(&P) -> Result<P, EditError>,
    {
        if self.status == EditorStatus::Saving {
            return Err(SessionError::SaveInFlight);
        }
        self.payload = op(&self.payload)?;
        self.status = EditorStatus::Dirty;
        Ok(())
    }

    /// Take the payload to submit. Only one update may be outstanding, so
    /// this refuses while already `Saving`.
    pub fn begin_save(&mut self) -> Result<P, SessionError> {
        match self.status {
            EditorStatus::Saving => Err(SessionError::SaveInFlight),
            EditorStatus::Loaded => Err(SessionError::NotDirty),
            EditorStatus::Dirty => {
                self.status = EditorStatus::Saving;
                Ok(self.payload.clone())
            }
        }
    }

    /// The update went through; adopt the server-confirmed payload.
    pub fn save_succeeded(&mut self, confirmed: P) {
        self.payload = confirmed;
        self.status = EditorStatus::Loaded;
    }

    /// The update failed; keep the draft so the user can retry.
    pub fn save_failed(&mut self) {
        self.status = EditorStatus::Dirty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append(s: &str) -> impl FnOnce(&Vec<String>) -> Result<Vec<String>, EditError> + '_ {
        move |items| {
            let mut next = items.clone();
            next.push(s.to_string());
            Ok(next)
        }
    }

    #[test]
    fn mutation_marks_dirty() {
        let mut session = EditorSession::load(vec!["a".to_string()]);
        assert_eq!(session.status(), EditorStatus::Loaded);
        session.apply(append("b")).unwrap();
        assert_eq!(session.status(), EditorStatus::Dirty);
        assert_eq!(session.payload().len(), 2);
    }

    #[test]
    fn refused_mutation_leaves_session_untouched() {
        let mut session = EditorSession::load(vec!["a".to_string()]);
        let result = session.apply(|_| Err::<Vec<String>, _>(EditError::ParagraphFloor));
        assert!(result.is_err());
        assert_eq!(session.status(), EditorStatus::Loaded);
        assert_eq!(session.payload(), &vec!["a".to_string()]);
    }

    #[test]
    fn save_lifecycle() {
        let mut session = EditorSession::load(vec!["a".to_string()]);
        assert_eq!(session.begin_save(), Err(SessionError::NotDirty));

        session.apply(append("b")).unwrap();
        let draft = session.begin_save().unwrap();
        assert_eq!(session.status(), EditorStatus::Saving);

        // Second submit while in flight is refused, as is editing.
        assert_eq!(session.begin_save(), Err(SessionError::SaveInFlight));
        assert_eq!(session.apply(append("c")), Err(SessionError::SaveInFlight));

        session.save_succeeded(draft);
        assert_eq!(session.status(), EditorStatus::Loaded);
    }

    #[test]
    fn failed_save_returns_to_dirty_with_draft_intact() {
        let mut session = EditorSession::load(vec!["a".to_string()]);
        session.apply(append("b")).unwrap();
        let _ = session.begin_save().unwrap();
        session.save_failed();
        assert_eq!(session.status(), EditorStatus::Dirty);
        assert_eq!(session.payload().len(), 2);
        // Retry is possible without re-entering data.
        assert!(session.begin_save().is_ok());
    }
}
