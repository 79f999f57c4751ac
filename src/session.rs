//! Per-session state threaded through every action.

/// Who the assistant is and who it is talking to.
///
/// Owned by the dispatcher and passed by value into each action, which hands
/// back the state the next iteration should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Name the assistant answers to. Changed by the rename intent.
    pub assistant_name: String,
    /// Name the user gave during the greeting, if any.
    pub user_name: Option<String>,
}

impl SessionState {
    /// Fresh session with no user name.
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            user_name: None,
        }
    }

    /// Same session with the assistant renamed.
    #[must_use]
    pub fn renamed(self, assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            ..self
        }
    }

    /// Record the user's name. Only the first name recorded is kept.
    #[must_use]
    pub fn with_user_name(self, user_name: impl Into<String>) -> Self {
        if self.user_name.is_some() {
            return self;
        }
        Self {
            user_name: Some(user_name.into()),
            ..self
        }
    }
}
