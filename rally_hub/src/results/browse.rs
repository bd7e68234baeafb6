//! Results browsing: archive filters and grouping by tournament.

use super::models::{MatchResult, TournamentSummary};
use crate::divisions::{AgeGroup, Category, Gender, Stage};
use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Serialize};

/// Filter state for the results archive. [`Default`] is the reset state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ResultFilters {
    /// Exact tournament name.
    pub tournament: Option<String>,
    pub year: Option<i32>,
    pub category: Option<Category>,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub stage: Option<Stage>,
    /// Case-insensitive substring over both competitor names, the
    /// tournament name, and the venue.
    pub search: String,
}

impl ResultFilters {
    pub fn matches(&self, result: &MatchResult) -> bool {
        if let Some(tournament) = &self.tournament
            && result.tournament_name != *tournament
        {
            return false;
        }
        if let Some(year) = self.year
            && result.date.year() != year
        {
            return false;
        }
        if let Some(category) = self.category
            && result.category != category
        {
            return false;
        }
        if let Some(gender) = self.gender
            && result.gender != gender
        {
            return false;
        }
        if let Some(age_group) = self.age_group
            && result.age_group != age_group
        {
            return false;
        }
        if let Some(stage) = self.stage
            && result.stage != stage
        {
            return false;
        }
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let hit = result.side_a.name.to_lowercase().contains(&query)
                || result.side_b.name.to_lowercase().contains(&query)
                || result.tournament_name.to_lowercase().contains(&query)
                || result.venue.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Run the pipeline. Output is most recent first.
    pub fn apply(&self, results: &[MatchResult]) -> Vec<MatchResult> {
        let mut filtered: Vec<MatchResult> = results
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(
            "results filter pass: {} of {} results",
            filtered.len(),
            results.len()
        );
        filtered
    }

    pub fn active_count(&self) -> usize {
        [
            self.tournament.is_some(),
            self.year.is_some(),
            self.category.is_some(),
            self.gender.is_some(),
            self.age_group.is_some(),
            self.stage.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// One archived tournament with its filtered results.
#[derive(Clone, Debug)]
pub struct TournamentGroup {
    pub tournament: TournamentSummary,
    pub matches: Vec<MatchResult>,
}

/// Group results by tournament via the archive's string keys. Results whose
/// tournament id resolves to nothing in the archive are skipped. Groups come
/// back most recently finished first; matches keep the input's date order.
pub fn group_by_tournament(
    results: &[MatchResult],
    archive: &[TournamentSummary],
) -> Vec<TournamentGroup> {
    let mut groups: Vec<TournamentGroup> = Vec::new();
    for result in results {
        if let Some(group) = groups
            .iter_mut()
            .find(|g| g.tournament.id == result.tournament_id)
        {
            group.matches.push(result.clone());
            continue;
        }
        match archive.iter().find(|t| t.id == result.tournament_id) {
            Some(tournament) => groups.push(TournamentGroup {
                tournament: tournament.clone(),
                matches: vec![result.clone()],
            }),
            None => debug!(
                "skipping result {} with unknown tournament {}",
                result.id, result.tournament_id
            ),
        }
    }
    groups.sort_by(|a, b| b.tournament.end_date.cmp(&a.tournament.end_date));
    groups
}
