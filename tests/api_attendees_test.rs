//! Integration tests for the attendees API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rollcall::attendees::{AttendeeStore, NewAttendee, SqliteAttendeeStore};
    use rollcall::bookings::{NewBooking, insert_booking};
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_json, body_to_string, test_app};

    async fn seed_attendee(db: &tokio_rusqlite::Connection, email: &str, url: &str) {
        let booking = insert_booking(
            db,
            &NewBooking {
                event_type_id: 1,
                title: "Intro call".to_string(),
                attendee_name: "Jane".to_string(),
                attendee_email: email.to_string(),
                responses: None,
            },
        )
        .await
        .unwrap();
        SqliteAttendeeStore::new(db.clone())
            .insert(NewAttendee {
                booking_id: booking.id,
                email: email.to_string(),
                name: "Jane".to_string(),
                linkedin_url: Some(url.to_string()),
                outreach_email: None,
            })
            .await
            .unwrap();
    }

    fn reconcile_request(query: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/api/attendees/reconcile?{}", query))
            .body(Body::empty())
            .unwrap()
    }

    /// Tests reconcile returns null when no attendee shares the URL
    #[tokio::test]
    async fn it_returns_null_without_a_match() {
        let app = test_app().await;

        let response = app
            .router
            .oneshot(reconcile_request(
                "linkedin_url=linkedin.com/in/nobody&email=a@x.com",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, "null");
    }

    /// Tests reconcile normalizes the URL and reports the outreach email
    #[tokio::test]
    async fn it_reconciles_with_a_normalized_url() {
        let app = test_app().await;
        seed_attendee(&app.db, "b@x.com", "linkedin.com/in/jane").await;

        let response = app
            .router
            .oneshot(reconcile_request(
                "linkedin_url=https%3A%2F%2Fwww.LinkedIn.com%2Fin%2Fjane%2F&email=a@x.com",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["linkedin_url"], "linkedin.com/in/jane");
        assert_eq!(body["email"], "b@x.com");
        assert_eq!(body["outreach_email"], "a@x.com");
    }

    /// Tests reconcile requires both query parameters
    #[tokio::test]
    async fn it_returns_400_for_missing_email() {
        let app = test_app().await;

        let response = app
            .router
            .oneshot(reconcile_request("linkedin_url=linkedin.com/in/jane"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
