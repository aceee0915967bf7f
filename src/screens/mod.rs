//! Per-request view state for each console screen.
//!
//! Nothing here performs I/O; handlers fetch through the gateway and feed
//! the results in.

pub mod dashboard;
pub mod form;
pub mod list;
pub mod matching;
pub mod results;

pub use dashboard::Dashboard;
pub use form::{CandidateDraft, FormAction, FormMode, FormOutcome, FormScreen, OfferDraft, SkillEditor};
pub use list::{ListScreen, Listable};
pub use matching::{MatchingConsole, MatchTicket};
pub use results::{MatchCard, ScoreTier};
