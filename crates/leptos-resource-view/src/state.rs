//! View Lifecycle State
//!
//! Loading / error / ready bookkeeping for one collection screen.

/// Records that can be matched across reloads and edits.
pub trait Keyed {
    type Key: PartialEq + Clone;

    fn key(&self) -> Self::Key;
}

/// Generation handed out by [`ViewState::begin`].
///
/// A completion is only applied when its ticket is still the newest one,
/// so a slow response cannot overwrite a faster, later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What the screen should show right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStatus<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Populated(usize),
}

/// Collection plus in-flight flag and error, owned by a single view
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState<T> {
    records: Vec<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    /// Empty and in flight: views start loading as soon as they mount.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }

    /// Start a load. Clears any previous error.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket(self.generation)
    }

    /// Apply a finished load. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    pub fn resolve(&mut self, ticket: LoadTicket, outcome: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => {
                self.records.clear();
                self.error = Some(message);
            }
        }
        true
    }

    /// Hide the error notification. Does not reload.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> ViewStatus<'_> {
        if self.loading {
            ViewStatus::Loading
        } else if let Some(message) = self.error.as_deref() {
            ViewStatus::Failed(message)
        } else if self.records.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Populated(self.records.len())
        }
    }
}

impl<T: Keyed> ViewState<T> {
    /// Swap in the server's version of a record. Returns `false` if no
    /// record with that key is loaded.
    pub fn replace(&mut self, record: T) -> bool {
        let key = record.key();
        match self.records.iter_mut().find(|r| r.key() == key) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }
}
