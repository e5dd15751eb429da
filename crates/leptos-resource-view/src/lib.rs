//! Leptos Resource View
//!
//! Building blocks for screens that list a REST collection:
//! lifecycle state with stale-response protection, `results` envelope
//! normalization, an edit-session state machine, and the components that
//! render them.

mod edit;
mod envelope;
mod feedback;
mod state;
mod table;
mod view;

pub use edit::EditSession;
pub use envelope::{extract_collection, RESULTS_FIELD};
pub use feedback::{EmptyState, ErrorNotice, Spinner};
pub use state::{Keyed, LoadTicket, ViewState, ViewStatus};
pub use table::{Column, DataTable};
pub use view::{LoadFuture, Loader, ResourceView};
