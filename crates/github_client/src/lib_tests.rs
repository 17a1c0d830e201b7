//! Unit tests for the github_client crate.

use super::*; // Import items from lib.rs
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a token-authenticated client pointed at the mock server.
fn client_for(mock_server: &MockServer) -> GitHubClient {
    let octocrab = Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .personal_token("test-token".to_string())
        .build()
        .unwrap();
    GitHubClient::new(octocrab)
}

fn repository_json(owner: &str, name: &str) -> serde_json::Value {
    json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "private": false,
        "url": format!("https://api.github.com/repos/{owner}/{name}"),
        "clone_url": format!("https://github.com/{owner}/{name}.git"),
        "html_url": format!("https://github.com/{owner}/{name}"),
    })
}

#[tokio::test]
async fn test_list_user_repositories_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repository_json("octocat", "alpha"),
            repository_json("octocat", "beta"),
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repositories = client.list_user_repositories().await.unwrap();

    assert_eq!(repositories.len(), 2);
    assert_eq!(repositories[0].name(), "alpha");
    assert_eq!(repositories[1].name(), "beta");
    assert_eq!(
        repositories[0].clone_url(),
        "https://github.com/octocat/alpha.git"
    );
}

#[tokio::test]
async fn test_list_user_repositories_empty_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repositories = client.list_user_repositories().await.unwrap();

    assert!(repositories.is_empty());
}

#[tokio::test]
async fn test_list_user_repositories_bad_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.list_user_repositories().await;

    assert!(matches!(result, Err(Error::AuthError(_))));
}

#[tokio::test]
async fn test_create_user_repository_success() {
    let mock_server = MockServer::start().await;
    let payload = RepositoryCreatePayload::public("new-repo");

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_json(json!({ "name": "new-repo", "private": false })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(repository_json("octocat", "new-repo")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repository = client.create_user_repository(&payload).await.unwrap();

    assert_eq!(repository.name(), "new-repo");
    assert_eq!(
        repository.clone_url(),
        "https://github.com/octocat/new-repo.git"
    );
}

#[tokio::test]
async fn test_create_user_repository_name_collision() {
    let mock_server = MockServer::start().await;
    let payload = RepositoryCreatePayload::public("taken");

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed.",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.create_user_repository(&payload).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_repository_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/octocat/alpha"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_repository("octocat", "alpha").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_repository_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/octocat/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_repository("octocat", "missing").await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_create_token_client_builds() {
    let result = create_token_client("ghp_0123456789abcdef");
    assert!(result.is_ok());
}
