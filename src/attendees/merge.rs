//! Backfill that merges attendees sharing a profile URL but booked
//! under different emails.
//!
//! `plan_merges` works out what would change without touching storage
//! and `apply_merge_plan` writes it. Applying a plan twice is harmless:
//! merged rows already carry the primary's email so a fresh plan skips
//! them.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use serde::Serialize;

use super::models::Attendee;
use super::store::AttendeeStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMerge {
    pub attendee_id: i64,
    pub booking_id: i64,
    pub previous_email: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeGroup {
    pub linkedin_url: String,
    pub primary_id: i64,
    pub primary_email: String,
    pub duplicates: Vec<DuplicateMerge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergePlan {
    pub groups: Vec<MergeGroup>,
}

impl MergePlan {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(|g| g.duplicates.len()).sum()
    }

    pub fn duplicates(&self) -> impl Iterator<Item = &DuplicateMerge> {
        self.groups.iter().flat_map(|g| g.duplicates.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub dry_run: bool,
    pub groups: usize,
    pub duplicates: usize,
    pub merged: usize,
}

/// Group attendees by their stored profile URL (exact match, not
/// normalized) and pick the lowest id in each group as primary. Every
/// other attendee whose email differs from the primary's, ignoring
/// case, is a duplicate to merge.
pub fn plan_merges(attendees: &[Attendee]) -> MergePlan {
    let mut sorted: Vec<&Attendee> = attendees
        .iter()
        .filter(|a| a.linkedin_url.as_deref().is_some_and(|url| !url.is_empty()))
        .collect();
    sorted.sort_by_key(|a| a.id);

    // Groups stay in order of their primary's id
    let mut by_url: Vec<(&str, Vec<&Attendee>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for attendee in sorted {
        let url = attendee.linkedin_url.as_deref().unwrap_or_default();
        match positions.get(url) {
            Some(&pos) => by_url[pos].1.push(attendee),
            None => {
                positions.insert(url, by_url.len());
                by_url.push((url, vec![attendee]));
            }
        }
    }

    let groups = by_url
        .into_iter()
        .filter_map(|(url, members)| {
            let distinct: HashSet<String> =
                members.iter().map(|a| a.email.to_lowercase()).collect();
            if distinct.len() < 2 {
                return None;
            }

            let primary = members[0];
            let primary_email = primary.email.to_lowercase();
            let duplicates = members[1..]
                .iter()
                .filter(|a| a.email.to_lowercase() != primary_email)
                .map(|a| DuplicateMerge {
                    attendee_id: a.id,
                    booking_id: a.booking_id,
                    previous_email: a.email.clone(),
                    email: primary.email.clone(),
                })
                .collect();

            Some(MergeGroup {
                linkedin_url: url.to_string(),
                primary_id: primary.id,
                primary_email: primary.email.clone(),
                duplicates,
            })
        })
        .collect();

    MergePlan { groups }
}

/// Write a merge plan. Each duplicate gets the primary's email and
/// keeps its own as the outreach email. Stops at the first failed
/// write; rows already merged stay merged. With `dry_run` nothing is
/// written and the report counts zero merges.
pub async fn apply_merge_plan(
    store: &dyn AttendeeStore,
    plan: &MergePlan,
    dry_run: bool,
) -> Result<MergeReport> {
    let mut merged = 0;

    if !dry_run {
        for duplicate in plan.duplicates() {
            let updated = store
                .update_email(
                    duplicate.attendee_id,
                    &duplicate.email,
                    Some(&duplicate.previous_email),
                )
                .await?;

            if updated {
                tracing::info!(
                    "Merged attendee {}: {} -> {}",
                    duplicate.attendee_id,
                    duplicate.previous_email,
                    duplicate.email
                );
                merged += 1;
            } else {
                tracing::warn!(
                    "Attendee {} no longer exists, skipping",
                    duplicate.attendee_id
                );
            }
        }
    }

    Ok(MergeReport {
        dry_run,
        groups: plan.groups.len(),
        duplicates: plan.duplicate_count(),
        merged,
    })
}

/// Load every attendee with a profile URL, plan the merge, and apply
/// it unless `dry_run` is set.
pub async fn merge_duplicate_attendees(
    store: &dyn AttendeeStore,
    dry_run: bool,
) -> Result<(MergePlan, MergeReport)> {
    let attendees = store.list_with_linkedin_url().await?;
    tracing::debug!("Found {} attendees with a LinkedIn URL", attendees.len());

    let plan = plan_merges(&attendees);
    let report = apply_merge_plan(store, &plan, dry_run).await?;
    Ok((plan, report))
}
