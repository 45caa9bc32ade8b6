use anyhow::Result;

use crate::attendees::{
    AttendeeStore, MergePlan, MergeReport, SqliteAttendeeStore, merge_duplicate_attendees,
};
use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::core::logging::{cli_directives, init_tracing};

pub async fn run(dry_run: bool, config: &AppConfig) -> Result<()> {
    init_tracing(&cli_directives());

    let db = match async_db(&config.db_path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Merge aborted: {}", e);
            return Err(e);
        }
    };
    let store = SqliteAttendeeStore::new(db);

    merge_attendees(&store, dry_run).await?;

    Ok(())
}

/// Run the merge against `store` and print what changed. Any failure,
/// whether loading attendees or writing a merge, is logged before it
/// is returned.
pub async fn merge_attendees(store: &dyn AttendeeStore, dry_run: bool) -> Result<MergeReport> {
    if dry_run {
        println!("Dry run, no changes will be written");
    }

    let (plan, report) = match merge_duplicate_attendees(store, dry_run).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Merge aborted: {}", e);
            return Err(e);
        }
    };

    print_plan(&plan);

    if report.dry_run {
        println!(
            "\nDry run complete: {} attendees would be merged",
            report.duplicates
        );
    } else {
        println!("\nMerged {} of {} attendees", report.merged, report.duplicates);
    }

    Ok(report)
}

fn print_plan(plan: &MergePlan) {
    println!(
        "Found {} LinkedIn URLs with differing emails ({} attendees to merge)",
        plan.groups.len(),
        plan.duplicate_count()
    );

    for group in &plan.groups {
        println!(
            "\n{} -> primary attendee {} <{}>",
            group.linkedin_url, group.primary_id, group.primary_email
        );
        for duplicate in &group.duplicates {
            println!(
                "  attendee {} (booking {}): email {} -> {}, outreach_email -> {}",
                duplicate.attendee_id,
                duplicate.booking_id,
                duplicate.previous_email,
                duplicate.email,
                duplicate.previous_email
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use async_trait::async_trait;

    use super::*;
    use crate::attendees::{Attendee, InMemoryAttendeeStore, NewAttendee};

    fn attendee(id: i64, email: &str) -> Attendee {
        Attendee {
            id,
            booking_id: 1,
            email: email.to_string(),
            name: email.to_string(),
            linkedin_url: Some("linkedin.com/in/p".to_string()),
            outreach_email: None,
        }
    }

    #[tokio::test]
    async fn it_merges_and_reports() {
        let store = InMemoryAttendeeStore::with_attendees(vec![
            attendee(1, "p@x.com"),
            attendee(2, "d1@x.com"),
        ]);

        let report = merge_attendees(&store, false).await.unwrap();

        assert_eq!(report.merged, 1);
        assert_eq!(store.snapshot()[1].email, "p@x.com");
    }

    struct UnreadableStore;

    #[async_trait]
    impl AttendeeStore for UnreadableStore {
        async fn find_earliest_by_linkedin_url(&self, _url: &str) -> Result<Option<Attendee>> {
            Err(anyhow!("no such table: attendee"))
        }

        async fn list_with_linkedin_url(&self) -> Result<Vec<Attendee>> {
            Err(anyhow!("no such table: attendee"))
        }

        async fn list_for_booking(&self, _booking_id: i64) -> Result<Vec<Attendee>> {
            Err(anyhow!("no such table: attendee"))
        }

        async fn insert(&self, _attendee: NewAttendee) -> Result<Attendee> {
            Err(anyhow!("no such table: attendee"))
        }

        async fn update_email(
            &self,
            _id: i64,
            _email: &str,
            _outreach_email: Option<&str>,
        ) -> Result<bool> {
            Err(anyhow!("no such table: attendee"))
        }
    }

    #[tokio::test]
    async fn it_fails_when_attendees_cannot_be_loaded() {
        let result = merge_attendees(&UnreadableStore, false).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }
}
