use classboard_construction::Construction;
use classboard_fusion::FusedSnapshot;
use classboard_journal::Event;
use std::collections::HashMap;

/// Result of running one snapshot through fusion, diff, and construction.
pub struct SolveResponse {
    pub fused: FusedSnapshot,
    pub recommended: Vec<(String, Construction)>,
    pub letters_to_steal: HashMap<String, usize>,
    pub events: Vec<Event>,
}
