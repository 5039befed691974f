//! Integration tests for the Application API services.

use pterodactyl_api::models::{
    AllocationCreateOptions, ServerUpdateDetailsOptions, UserCreateOptions,
};
use pterodactyl_api::{Client, HttpError, KeyType};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::new(server.uri(), "ptla_test", KeyType::Application).unwrap()
}

fn user_attributes(id: u64, username: &str) -> Value {
    json!({
        "id": id,
        "external_id": null,
        "uuid": "c4022c6c-9bf1-4a23-bff9-519cceb38335",
        "username": username,
        "email": format!("{username}@example.com"),
        "first_name": "Example",
        "last_name": "User",
        "language": "en",
        "root_admin": false,
        "2fa": false,
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-01-02T00:00:00+00:00"
    })
}

fn server_attributes(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "external_id": "billing-7",
        "uuid": "1a7ce997-259b-452e-8b4e-cecc464142ca",
        "identifier": "1a7ce997",
        "name": name,
        "description": "",
        "suspended": false,
        "limits": {"memory": 1024, "swap": 0, "disk": 5120, "io": 500, "cpu": 200, "threads": null},
        "feature_limits": {"databases": 2, "allocations": 1, "backups": 3},
        "user": 1,
        "node": 1,
        "allocation": 10,
        "nest": 1,
        "egg": 5,
        "container": {
            "startup_command": "java -jar server.jar",
            "image": "ghcr.io/pterodactyl/yolks:java_17",
            "installed": 1,
            "environment": {"SERVER_JARFILE": "server.jar", "P_SERVER_LOCATION": "eu"}
        },
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-01-01T00:00:00+00:00"
    })
}

#[tokio::test]
async fn test_get_user_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/application/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "user",
            "attributes": user_attributes(1, "admin")
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let user = assert_ok!(client.application().users().get(1).await);

    assert_eq!(user.id, 1);
    assert_eq!(user.username, "admin");
    assert!(!user.two_factor);
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn test_get_external_user_encodes_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/application/users/external/crm%2F42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "user",
            "attributes": user_attributes(5, "external")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let user = assert_ok!(client.application().users().get_external("crm/42").await);
    assert_eq!(user.id, 5);
}

#[tokio::test]
async fn test_create_user_validation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .and(body_json(json!({
            "email": "taken@example.com",
            "username": "taken",
            "first_name": "Taken",
            "last_name": "User"
        })))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{
                "code": "ValidationException",
                "status": "422",
                "detail": "The email has already been taken.",
                "meta": {"source_field": "email", "rule": "unique"}
            }]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let options = UserCreateOptions {
        email: "taken@example.com".to_string(),
        username: "taken".to_string(),
        first_name: "Taken".to_string(),
        last_name: "User".to_string(),
        ..Default::default()
    };
    let error = assert_err!(client.application().users().create(&options).await);

    let api_error = error.api_error().unwrap();
    assert!(api_error.is_validation_error());
    assert_eq!(api_error.detail(), Some("The email has already been taken."));
}

#[tokio::test]
async fn test_list_all_servers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/application/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"object": "server", "attributes": server_attributes(1, "Survival")},
                {"object": "server", "attributes": server_attributes(2, "Creative")}
            ],
            "meta": {"pagination": {"total": 2, "count": 2, "per_page": 100, "current_page": 1, "total_pages": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let servers = assert_ok!(client.application().servers().list_all().await);

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1].name, "Creative");
    assert!(servers[0].container.installed);
    assert_eq!(servers[0].limits.memory, 1024);
}

#[tokio::test]
async fn test_update_server_details_patches_section() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/application/servers/1/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "server",
            "attributes": server_attributes(1, "Renamed")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let options = ServerUpdateDetailsOptions {
        name: "Renamed".to_string(),
        user: 1,
        ..Default::default()
    };
    let updated = assert_ok!(client.application().servers().update_details(1, &options).await);
    assert_eq!(updated.name, "Renamed");
}

#[tokio::test]
async fn test_suspend_server_posts_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/servers/3/suspend"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert_ok!(client.application().servers().suspend(3).await);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_force_delete_sends_force_flag() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/application/servers/4"))
        .and(body_json(json!({"force": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert_ok!(client.application().servers().delete(4, true).await);
}

#[tokio::test]
async fn test_plain_delete_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/application/servers/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert_ok!(client.application().servers().delete(4, false).await);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_node_configuration_is_not_enveloped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/application/nodes/2/configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "debug": false,
            "uuid": "0f4e5a3c-0a44-4c36-a2c4-4a1e4b0b3c1d",
            "token_id": "abcdefghijklmnop",
            "token": "long-daemon-token",
            "api": {"host": "0.0.0.0", "port": 8080, "ssl": {"enabled": true, "cert": "/etc/letsencrypt/live/node/fullchain.pem", "key": "/etc/letsencrypt/live/node/privkey.pem"}, "upload_limit": 100},
            "system": {"data": "/var/lib/pterodactyl/volumes", "sftp": {"bind_port": 2022}},
            "allowed_mounts": [],
            "remote": "https://panel.example.com"
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let configuration = assert_ok!(client.application().nodes().configuration(2).await);

    assert_eq!(configuration.api.port, 8080);
    assert!(configuration.api.ssl.enabled);
    assert_eq!(configuration.system.sftp.bind_port, 2022);
    assert_eq!(configuration.remote, "https://panel.example.com");
}

#[tokio::test]
async fn test_create_allocations_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/nodes/2/allocations"))
        .and(body_json(json!({"ip": "10.0.0.5", "ports": ["25565", "25570-25575"]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let options = AllocationCreateOptions {
        ip: "10.0.0.5".to_string(),
        ports: vec!["25565".to_string(), "25570-25575".to_string()],
        alias: None,
    };
    assert_ok!(client.application().nodes().allocations(2).create(&options).await);
}

#[tokio::test]
async fn test_delete_node_in_use_is_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/application/nodes/2"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "errors": [{"code": "HasActiveServersException", "status": "409", "detail": "Cannot delete a node with active servers attached to it."}]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let error = assert_err!(client.application().nodes().delete(2).await);

    assert!(matches!(&error, HttpError::Api(api_error) if api_error.is_conflict()));
}

#[tokio::test]
async fn test_list_eggs_of_nest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/application/nests/1/eggs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "object": "egg",
                "attributes": {
                    "id": 5,
                    "uuid": "9ac39f3d-0c34-4d93-8174-c52ab9e6c57b",
                    "name": "Paper",
                    "nest": 1,
                    "author": "parker@pterodactyl.io",
                    "description": "High performance Spigot fork.",
                    "docker_image": "ghcr.io/pterodactyl/yolks:java_17",
                    "docker_images": {"Java 17": "ghcr.io/pterodactyl/yolks:java_17"},
                    "config": {"files": {}, "startup": {"done": ")! For help, type "}, "stop": "stop", "logs": {}, "file_denylist": [], "extends": null},
                    "startup": "java -jar {{SERVER_JARFILE}}",
                    "script": {"privileged": true, "install": "#!/bin/ash", "entry": "ash", "container": "alpine:3.4", "extends": null}
                }
            }],
            "meta": {"pagination": {"total": 1, "count": 1, "per_page": 50, "current_page": 1, "total_pages": 1}}
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let eggs = assert_ok!(client.application().nests().eggs(1).list(None).await);

    assert_eq!(eggs.len(), 1);
    assert_eq!(eggs[0].name, "Paper");
    assert_eq!(eggs[0].config.stop, "stop");
    assert_eq!(eggs[0].docker_images.len(), 1);
}
