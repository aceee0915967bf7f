//! Matching console state machine.
//!
//! ```text
//! Idle -> CandidatesLoading -> Ready -> Matching -> ResultsShown
//!               |                          |
//!               +--------> Error <---------+
//! ```
//!
//! Each match request gets a [`MatchTicket`]; only the latest ticket may
//! complete, so a slow earlier response cannot overwrite a newer one.

use crate::core::ApiResult;
use crate::types::{Candidate, MatchParams, MatchResponse};

pub const SELECT_FIRST_MESSAGE: &str = "Please select a candidate first.";
pub const MATCH_FAILED_MESSAGE: &str = "Failed to perform matching. Please try again later.";
pub const CANDIDATES_FAILED_MESSAGE: &str = "Failed to fetch candidates. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsolePhase {
    Idle,
    CandidatesLoading,
    Ready,
    Matching,
    ResultsShown,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTicket {
    seq: u64,
}

#[derive(Debug)]
pub struct MatchingConsole {
    phase: ConsolePhase,
    candidates: Vec<Candidate>,
    selected: Option<Candidate>,
    pub params: MatchParams,
    results: Option<MatchResponse>,
    error: Option<String>,
    issued: u64,
}

impl Default for MatchingConsole {
    fn default() -> Self {
        Self::new(MatchParams::default())
    }
}

impl MatchingConsole {
    pub fn new(params: MatchParams) -> Self {
        Self {
            phase: ConsolePhase::Idle,
            candidates: Vec::new(),
            selected: None,
            params,
            results: None,
            error: None,
            issued: 0,
        }
    }

    pub fn phase(&self) -> ConsolePhase {
        self.phase
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.selected.as_ref()
    }

    pub fn results(&self) -> Option<&MatchResponse> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_loading(&mut self) {
        self.phase = ConsolePhase::CandidatesLoading;
        self.error = None;
    }

    pub fn candidates_loaded(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.phase = ConsolePhase::Ready;
    }

    pub fn candidates_failed(&mut self) {
        self.error = Some(CANDIDATES_FAILED_MESSAGE.to_string());
        self.phase = ConsolePhase::Error;
    }

    /// Selects a candidate, clearing previous results.
    ///
    /// Returns true when the selection changed, which the caller treats as a
    /// match trigger. A candidate missing from the loaded list (resolved by
    /// id from outside) is added to it so the picker can show it.
    pub fn select(&mut self, candidate: Candidate) -> bool {
        let changed = self.selected.as_ref().map(|c| c.id.as_str()) != Some(candidate.id.as_str());
        if !self.candidates.iter().any(|c| c.id == candidate.id) {
            self.candidates.push(candidate.clone());
        }
        self.selected = Some(candidate);
        self.results = None;
        if self.phase != ConsolePhase::Error {
            self.phase = ConsolePhase::Ready;
        }
        changed
    }

    /// Selects from the loaded list by id.
    pub fn select_id(&mut self, candidate_id: &str) -> bool {
        match self.candidates.iter().find(|c| c.id == candidate_id).cloned() {
            Some(candidate) => self.select(candidate),
            None => false,
        }
    }

    pub fn begin_match(&mut self) -> Result<MatchTicket, String> {
        if self.selected.is_none() {
            self.error = Some(SELECT_FIRST_MESSAGE.to_string());
            return Err(SELECT_FIRST_MESSAGE.to_string());
        }
        self.issued += 1;
        self.error = None;
        self.phase = ConsolePhase::Matching;
        Ok(MatchTicket { seq: self.issued })
    }

    /// Applies a match outcome. Returns false when the ticket is stale and
    /// the outcome was dropped.
    pub fn finish_match(&mut self, ticket: MatchTicket, outcome: ApiResult<MatchResponse>) -> bool {
        if ticket.seq != self.issued {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.results = Some(response);
                self.phase = ConsolePhase::ResultsShown;
            }
            Err(_) => {
                self.error = Some(MATCH_FAILED_MESSAGE.to_string());
                self.phase = ConsolePhase::Error;
            }
        }
        true
    }

    /// Id of the selected candidate, for the match request.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|c| c.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ApiError;
    use crate::types::MatchRecord;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            ..Default::default()
        }
    }

    fn response(title: &str) -> MatchResponse {
        MatchResponse {
            matches: vec![MatchRecord {
                title: Some(title.to_string()),
                ..Default::default()
            }],
            total_matches: 1,
            ..Default::default()
        }
    }

    fn failure() -> ApiError {
        ApiError::Decode {
            url: "http://api/match".to_string(),
            message: "boom".to_string(),
        }
    }

    fn ready_console() -> MatchingConsole {
        let mut console = MatchingConsole::default();
        console.begin_loading();
        console.candidates_loaded(vec![candidate("C1"), candidate("C2")]);
        console
    }

    #[test]
    fn loading_moves_to_ready() {
        let console = ready_console();
        assert_eq!(console.phase(), ConsolePhase::Ready);
        assert_eq!(console.candidates().len(), 2);
        assert_eq!(console.params, MatchParams::default());
    }

    #[test]
    fn failed_load_is_error() {
        let mut console = MatchingConsole::default();
        console.begin_loading();
        console.candidates_failed();
        assert_eq!(console.phase(), ConsolePhase::Error);
        assert_eq!(console.error(), Some(CANDIDATES_FAILED_MESSAGE));
    }

    #[test]
    fn match_without_selection_is_rejected() {
        let mut console = ready_console();
        assert_eq!(console.begin_match(), Err(SELECT_FIRST_MESSAGE.to_string()));
        assert_eq!(console.phase(), ConsolePhase::Ready);
    }

    #[test]
    fn successful_match_shows_results() {
        let mut console = ready_console();
        assert!(console.select_id("C1"));
        let ticket = console.begin_match().unwrap();
        assert_eq!(console.phase(), ConsolePhase::Matching);

        assert!(console.finish_match(ticket, Ok(response("Dev"))));
        assert_eq!(console.phase(), ConsolePhase::ResultsShown);
        assert_eq!(console.results().unwrap().total_matches, 1);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut console = ready_console();
        console.select_id("C1");
        let first = console.begin_match().unwrap();
        console.select_id("C2");
        let second = console.begin_match().unwrap();

        assert!(console.finish_match(second, Ok(response("Newer"))));
        assert!(!console.finish_match(first, Ok(response("Older"))));

        let shown = console.results().unwrap();
        assert_eq!(shown.matches[0].title.as_deref(), Some("Newer"));
    }

    #[test]
    fn failed_match_keeps_previous_results() {
        let mut console = ready_console();
        console.select_id("C1");
        let ticket = console.begin_match().unwrap();
        console.finish_match(ticket, Ok(response("Dev")));

        let ticket = console.begin_match().unwrap();
        console.finish_match(ticket, Err(failure()));
        assert_eq!(console.phase(), ConsolePhase::Error);
        assert_eq!(console.error(), Some(MATCH_FAILED_MESSAGE));
        assert!(console.results().is_some());
    }

    #[test]
    fn selecting_clears_results_and_adds_unknown_candidate() {
        let mut console = ready_console();
        console.select_id("C1");
        let ticket = console.begin_match().unwrap();
        console.finish_match(ticket, Ok(response("Dev")));

        assert!(console.select(candidate("C9")));
        assert!(console.results().is_none());
        assert_eq!(console.candidates().len(), 3);
        assert!(!console.select(candidate("C9")));
        assert!(!console.select_id("missing"));
    }
}
