//! Integration tests for the FHIR REST client against a mock server

use clinical_summary::adapters::fhir::{FhirClient, FhirSource};
use clinical_summary::config::FhirConfig;
use clinical_summary::domain::{FhirError, PatientId, ResourceType};
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> FhirClient {
    let config = FhirConfig {
        base_url: server.url(),
        timeout_seconds: 5,
        search_count: 100,
        tls_verify: true,
    };
    FhirClient::new(&config).unwrap()
}

fn patient_id() -> PatientId {
    PatientId::new("p1").unwrap()
}

#[tokio::test]
async fn test_read_patient() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Patient/p1")
        .match_header("accept", "application/fhir+json")
        .with_status(200)
        .with_header("content-type", "application/fhir+json")
        .with_body(json!({"resourceType": "Patient", "id": "p1", "gender": "female"}).to_string())
        .create_async()
        .await;

    let patient = client_for(&server)
        .read_patient(&patient_id())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patient["gender"], "female");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_patient_not_found_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/Patient/p1")
        .with_status(404)
        .with_body(json!({"resourceType": "OperationOutcome"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.read_patient(&patient_id()).await.unwrap().is_none());
    assert!(client
        .fetch(ResourceType::Patient, &patient_id())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_read_patient_empty_body_is_none() {
    for body in ["{}", "null"] {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/Patient/p1")
            .with_status(200)
            .with_header("content-type", "application/fhir+json")
            .with_body(body)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.read_patient(&patient_id()).await.unwrap().is_none(), "{body}");
        assert!(client
            .fetch(ResourceType::Patient, &patient_id())
            .await
            .unwrap()
            .is_empty());
    }
}

#[tokio::test]
async fn test_read_patient_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/Patient/p1")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = client_for(&server)
        .read_patient(&patient_id())
        .await
        .unwrap_err();

    assert!(matches!(err, FhirError::ServerError { status: 503, .. }));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_search_sends_patient_count_and_format() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Condition")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("patient".into(), "p1".into()),
            Matcher::UrlEncoded("_count".into(), "100".into()),
            Matcher::UrlEncoded("_format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "resourceType": "Bundle",
                "type": "searchset",
                "total": 2,
                "entry": [
                    {"resource": {"resourceType": "Condition", "id": "c1"}},
                    {"resource": {"resourceType": "Condition", "id": "c2"}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let resources = client_for(&server)
        .fetch(ResourceType::Condition, &patient_id())
        .await
        .unwrap();

    let ids: Vec<_> = resources.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_empty_bundle() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/AllergyIntolerance")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"resourceType": "Bundle", "type": "searchset", "total": 0}).to_string())
        .create_async()
        .await;

    let resources = client_for(&server)
        .search(ResourceType::AllergyIntolerance, &patient_id())
        .await
        .unwrap();
    assert!(resources.is_empty());
}

#[tokio::test]
async fn test_search_invalid_json() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/Observation")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not fhir</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .search(ResourceType::Observation, &patient_id())
        .await
        .unwrap_err();
    assert!(matches!(err, FhirError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_search_client_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/MedicationRequest")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body("unknown search parameter")
        .create_async()
        .await;

    let err = client_for(&server)
        .search(ResourceType::MedicationRequest, &patient_id())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FhirError::ClientError { status: 400, ref message } if message == "unknown search parameter"
    ));
}
