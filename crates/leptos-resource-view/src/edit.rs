//! Edit Session
//!
//! Modal edit state machine:
//! `closed -> open -> submitting -> closed | open(with error)`.
//! The draft itself lives with the caller; this only tracks which record is
//! being edited and where the save is.

#[derive(Clone, Debug, PartialEq)]
pub enum EditSession<K> {
    Closed,
    Open { key: K, error: Option<String> },
    Submitting { key: K },
}

impl<K> Default for EditSession<K> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<K: Clone + PartialEq> EditSession<K> {
    /// Open the modal for `key`. Ignored while a save is in flight.
    pub fn open(&mut self, key: K) -> bool {
        if matches!(self, Self::Submitting { .. }) {
            return false;
        }
        *self = Self::Open { key, error: None };
        true
    }

    /// Move to submitting. Returns the key to save, or `None` when the
    /// modal is not open.
    pub fn submit(&mut self) -> Option<K> {
        match self {
            Self::Open { key, .. } => {
                let key = key.clone();
                *self = Self::Submitting { key: key.clone() };
                Some(key)
            }
            _ => None,
        }
    }

    /// Save succeeded: close.
    pub fn succeed(&mut self) {
        if matches!(self, Self::Submitting { .. }) {
            *self = Self::Closed;
        }
    }

    /// Save (or validation) failed: back to open with an inline error.
    pub fn fail(&mut self, message: impl Into<String>) {
        let key = match self {
            Self::Open { key, .. } | Self::Submitting { key } => key.clone(),
            Self::Closed => return,
        };
        *self = Self::Open {
            key,
            error: Some(message.into()),
        };
    }

    /// Close without saving. Ignored while a save is in flight.
    pub fn cancel(&mut self) -> bool {
        if matches!(self, Self::Submitting { .. }) {
            return false;
        }
        *self = Self::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Open { key, .. } | Self::Submitting { key } => Some(key),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
