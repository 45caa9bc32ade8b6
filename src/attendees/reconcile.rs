use anyhow::Result;

use super::models::ReconciledEmail;
use super::store::AttendeeStore;

/// Decide which email a new attendee with `linkedin_url` should be
/// stored under.
///
/// Looks up the earliest attendee with the same (already normalized)
/// profile URL. When there is none this returns `None` and the booking
/// email is used as is. Otherwise the stored email is canonical and the
/// booking email is kept as the outreach email if it differs
/// (ignoring case). Only reads; the caller persists the result.
pub async fn reconcile_attendee_email(
    store: &dyn AttendeeStore,
    linkedin_url: &str,
    email: &str,
) -> Result<Option<ReconciledEmail>> {
    let Some(existing) = store.find_earliest_by_linkedin_url(linkedin_url).await? else {
        return Ok(None);
    };

    let outreach_email = if existing.email.to_lowercase() == email.to_lowercase() {
        None
    } else {
        Some(email.to_string())
    };

    tracing::debug!(
        "Reconciled {} against attendee {} ({})",
        linkedin_url,
        existing.id,
        existing.email
    );

    Ok(Some(ReconciledEmail {
        email: existing.email,
        outreach_email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendees::memory::InMemoryAttendeeStore;
    use crate::attendees::models::Attendee;

    fn attendee(id: i64, email: &str, url: &str) -> Attendee {
        Attendee {
            id,
            booking_id: 1,
            email: email.to_string(),
            name: format!("Attendee {}", id),
            linkedin_url: Some(url.to_string()),
            outreach_email: None,
        }
    }

    #[tokio::test]
    async fn it_returns_none_without_a_match() {
        let store = InMemoryAttendeeStore::with_attendees(vec![attendee(
            1,
            "a@x.com",
            "linkedin.com/in/other",
        )]);
        let result = reconcile_attendee_email(&store, "linkedin.com/in/someone", "a@x.com")
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn it_keeps_the_booking_email_as_outreach_when_different() {
        let store = InMemoryAttendeeStore::with_attendees(vec![attendee(
            1,
            "b@x.com",
            "linkedin.com/in/jane",
        )]);
        let result = reconcile_attendee_email(&store, "linkedin.com/in/jane", "a@x.com")
            .await
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciledEmail {
                email: "b@x.com".to_string(),
                outreach_email: Some("a@x.com".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn it_compares_emails_case_insensitively() {
        let store = InMemoryAttendeeStore::with_attendees(vec![attendee(
            1,
            "a@x.com",
            "linkedin.com/in/jane",
        )]);
        let result = reconcile_attendee_email(&store, "linkedin.com/in/jane", "A@X.com")
            .await
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciledEmail {
                email: "a@x.com".to_string(),
                outreach_email: None,
            })
        );
    }

    #[tokio::test]
    async fn it_uses_the_earliest_attendee() {
        let store = InMemoryAttendeeStore::with_attendees(vec![
            attendee(7, "late@x.com", "linkedin.com/in/jane"),
            attendee(3, "first@x.com", "linkedin.com/in/jane"),
            attendee(5, "middle@x.com", "linkedin.com/in/jane"),
        ]);
        let result = reconcile_attendee_email(&store, "linkedin.com/in/jane", "new@x.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.email, "first@x.com");
        assert_eq!(result.outreach_email.as_deref(), Some("new@x.com"));
    }

    #[tokio::test]
    async fn it_does_not_write() {
        let rows = vec![attendee(1, "b@x.com", "linkedin.com/in/jane")];
        let store = InMemoryAttendeeStore::with_attendees(rows.clone());
        reconcile_attendee_email(&store, "linkedin.com/in/jane", "a@x.com")
            .await
            .unwrap();
        assert_eq!(store.snapshot(), rows);
    }
}
