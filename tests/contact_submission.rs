use httpmock::prelude::*;
use portfolio_site::contact::{ContactClient, ContactError, ContactForm, ContactPayload};
use portfolio_site::toast::{ToastKind, ToastQueue};
use serde_json::json;

fn filled_form() -> ContactForm {
    ContactForm {
        fields: ContactPayload {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            subject: "Project Discussion".into(),
            message: "Tell me about your project...".into(),
        },
        pending: false,
    }
}

/// Runs one submission the way the form does: mark pending, send, resolve,
/// then raise the resulting notification.
async fn submit_through_form(client: &ContactClient, form: &mut ContactForm, toasts: &mut ToastQueue) {
    let payload = form.begin_submit().expect("form should be idle");
    assert!(form.pending);
    assert_eq!(form.begin_submit(), None);
    let outcome = client.submit(&payload).await;
    let notice = form.apply_outcome(&outcome);
    toasts.push(notice.kind, notice.title, Some(notice.description));
}

#[tokio::test]
async fn test_successful_submission_clears_form() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/submit").json_body(json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "subject": "Project Discussion",
                "message": "Tell me about your project..."
            }));
            then.status(200).json_body(json!({ "result": "success" }));
        })
        .await;

    let client = ContactClient::new(server.url("/submit"));
    let mut form = filled_form();
    let outcome = client.submit(&form.payload()).await;
    assert!(outcome.is_ok());

    let notice = form.apply_outcome(&outcome);
    assert_eq!(notice.kind, ToastKind::Success);
    assert_eq!(form.fields, ContactPayload::default());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_submission_keeps_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(200)
                .json_body(json!({ "result": "error", "message": "Mailbox full" }));
        })
        .await;

    let client = ContactClient::new(server.url("/submit"));
    let mut form = filled_form();
    let outcome = client.submit(&form.payload()).await;
    assert!(matches!(outcome, Err(ContactError::Rejected(Some(ref m))) if m == "Mailbox full"));

    let notice = form.apply_outcome(&outcome);
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.description, "Mailbox full");
    assert_eq!(form, filled_form());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_without_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(503).body("unavailable");
        })
        .await;

    let client = ContactClient::new(server.url("/submit"));
    let outcome = client.submit(&filled_form().payload()).await;
    assert!(matches!(outcome, Err(ContactError::Status(503))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // port 9 (discard) is not listening on test machines
    let client = ContactClient::new("http://127.0.0.1:9/submit");
    let mut form = filled_form();
    let outcome = client.submit(&form.payload()).await;
    assert!(matches!(outcome, Err(ContactError::Transport(_))));

    let notice = form.apply_outcome(&outcome);
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn test_every_outcome_reenables_submit_with_one_toast() {
    let server = MockServer::start_async().await;
    let ok = server
        .mock_async(|when, then| {
            when.method(POST).path("/ok");
            then.status(200).json_body(json!({ "result": "success" }));
        })
        .await;
    let rejected = server
        .mock_async(|when, then| {
            when.method(POST).path("/rejected");
            then.status(200).json_body(json!({ "result": "error" }));
        })
        .await;

    let cases = [
        (server.url("/ok"), ToastKind::Success),
        (server.url("/rejected"), ToastKind::Error),
        ("http://127.0.0.1:9/submit".to_string(), ToastKind::Error),
    ];
    for (endpoint, kind) in cases {
        let client = ContactClient::new(endpoint);
        let mut form = filled_form();
        let mut toasts = ToastQueue::new();
        submit_through_form(&client, &mut form, &mut toasts).await;

        assert!(!form.pending);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.toasts()[0].kind, kind);
        assert!(form.begin_submit().is_some());
    }
    ok.assert_async().await;
    rejected.assert_async().await;
}
