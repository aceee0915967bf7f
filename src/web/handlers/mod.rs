pub mod candidate_handlers;
pub mod matching_handlers;
pub mod offer_handlers;
pub mod stats_handlers;
pub mod system_handlers;
