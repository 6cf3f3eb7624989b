//! Outcome tests for the SubmissionGateway: exactly one branch fires per
//! attempt, the cause never leaks into the dialog, and every submission
//! targets the fixed `Escola/Aluno` location.

use cadastro_client::{StoreConfig, SubmissionGateway};
use cadastro_core::{FieldSet, StudentField, WriteOutcome};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOC_PATH: &str = "/v1/projects/test-project/databases/(default)/documents/Escola/Aluno";

fn gateway_for(mock_server: &MockServer) -> SubmissionGateway {
    let config = StoreConfig::local_mock(&mock_server.uri()).unwrap();
    SubmissionGateway::new(config).unwrap()
}

#[tokio::test]
async fn successful_write_yields_success_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let mut fields = FieldSet::new();
    fields.set(StudentField::Nome, "Ana");

    let outcome = gateway.submit(fields.snapshot()).await;
    assert_eq!(outcome, WriteOutcome::Success);
    assert_eq!(outcome.dialog().title, "Sucesso");
}

#[tokio::test]
async fn backend_failure_yields_failure_outcome_with_cause() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let outcome = gateway.submit(FieldSet::new().snapshot()).await;

    match &outcome {
        WriteOutcome::Failure { cause } => {
            assert!(cause.contains("503"));
            assert!(cause.contains("backend unavailable"));
        }
        WriteOutcome::Success => panic!("backend failure must not succeed"),
    }
    // The dialog stays generic regardless of the cause.
    assert_eq!(outcome.dialog().title, "Erro");
    assert_eq!(outcome.dialog().message, "Erro ao realizar o cadastro.");
}

#[tokio::test]
async fn network_failure_yields_failure_outcome() {
    let config = StoreConfig::local_mock("http://127.0.0.1:1").unwrap();
    let gateway = SubmissionGateway::new(config).unwrap();

    let outcome = gateway.submit(FieldSet::new().snapshot()).await;
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn each_submit_issues_exactly_one_write() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let mut fields = FieldSet::new();

    fields.set(StudentField::Nome, "Primeira");
    assert!(gateway.submit(fields.snapshot()).await.is_success());

    fields.set(StudentField::Nome, "Segunda");
    assert!(gateway.submit(fields.snapshot()).await.is_success());
    // MockServer verifies the expect(2) count on drop: one write per
    // submit, no retries.
}

#[tokio::test]
async fn no_retry_after_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let outcome = gateway.submit(FieldSet::new().snapshot()).await;
    assert!(!outcome.is_success());
    // expect(1) on drop proves the failed attempt was not retried.
}
