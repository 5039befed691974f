//! Integration tests for the Client API services.

use pterodactyl_api::models::{
    ApiKeyCreateOptions, ClientDatabaseCreateOptions, PowerSignal, UpdateVariableOptions,
};
use pterodactyl_api::{Client, KeyType};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVER: &str = "/api/client/servers/1a7ce997";

fn client(server: &MockServer) -> Client {
    Client::new(server.uri(), "ptlc_test", KeyType::Client).unwrap()
}

#[tokio::test]
async fn test_list_servers_uses_client_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/client"))
        .and(header("authorization", "Bearer ptlc_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "object": "server",
                "attributes": {
                    "server_owner": true,
                    "identifier": "1a7ce997",
                    "internal_id": 1,
                    "uuid": "1a7ce997-259b-452e-8b4e-cecc464142ca",
                    "name": "Survival",
                    "node": "Node 1",
                    "sftp_details": {"ip": "node.example.com", "port": 2022},
                    "description": null,
                    "limits": {"memory": 1024, "swap": 0, "disk": 5120, "io": 500, "cpu": 200},
                    "invocation": "java -jar server.jar",
                    "docker_image": "ghcr.io/pterodactyl/yolks:java_17",
                    "egg_features": ["eula"],
                    "feature_limits": {"databases": 2, "allocations": 1, "backups": 3},
                    "status": null,
                    "is_suspended": false,
                    "is_installing": false,
                    "is_transferring": false
                }
            }],
            "meta": {"pagination": {"total": 1, "count": 1, "per_page": 50, "current_page": 1, "total_pages": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let servers = assert_ok!(client.client_api().list_servers(None).await);

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].identifier, "1a7ce997");
    assert_eq!(servers[0].sftp_details.port, 2022);
    assert!(servers[0].server_owner);
}

#[tokio::test]
async fn test_permissions_accepts_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/client/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "system_permissions",
            "attributes": {"permissions": {
                "control": {
                    "description": "Permissions that control a user's ability to control the power state of a server.",
                    "keys": {"console": "Allows a user to send commands.", "start": "Allows a user to start the server."}
                }
            }}
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let permissions = assert_ok!(client.client_api().permissions().await);

    let control = &permissions.permissions["control"];
    assert_eq!(control.keys.len(), 2);
    assert!(control.keys.contains_key("console"));
}

#[tokio::test]
async fn test_two_factor_details_unwraps_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/client/account/two-factor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"image_url_data": "otpauth://totp/Pterodactyl:user%40example.com?secret=ABC"}
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let details = assert_ok!(client.client_api().account().two_factor_details().await);
    assert!(details.image_url_data.starts_with("otpauth://"));
}

#[tokio::test]
async fn test_created_api_key_carries_secret() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/client/account/api-keys"))
        .and(body_json(json!({"description": "deploy bot"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "object": "api_key",
            "attributes": {
                "identifier": "ptlc_wYpx2",
                "description": "deploy bot",
                "allowed_ips": [],
                "last_used_at": null,
                "created_at": "2024-03-01T12:00:00+00:00"
            },
            "meta": {"secret_token": "ptlc_wYpx2SECRETPART"}
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let options = ApiKeyCreateOptions {
        description: "deploy bot".to_string(),
        allowed_ips: Vec::new(),
    };
    let key = assert_ok!(client.client_api().account().api_keys().create(&options).await);

    assert_eq!(key.identifier, "ptlc_wYpx2");
    assert_eq!(key.token.as_deref(), Some("ptlc_wYpx2SECRETPART"));
    assert!(!format!("{key:?}").contains("SECRETPART"));
}

#[tokio::test]
async fn test_websocket_unwraps_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVER}/websocket")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"token": "jwt.token.here", "socket": "wss://node.example.com:8080/api/servers/1a7ce997/ws"}
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let websocket = assert_ok!(client.client_api().servers("1a7ce997").websocket().await);

    assert_eq!(websocket.token, "jwt.token.here");
    assert!(websocket.socket.starts_with("wss://"));
}

#[tokio::test]
async fn test_resources_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVER}/resources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "stats",
            "attributes": {
                "current_state": "running",
                "is_suspended": false,
                "resources": {
                    "memory_bytes": 588_701_696_u64,
                    "cpu_absolute": 12.5,
                    "disk_bytes": 130_156_361_u64,
                    "network_rx_bytes": 694_220,
                    "network_tx_bytes": 337_090,
                    "uptime": 3_600_000
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let usage = assert_ok!(client.client_api().servers("1a7ce997").resources().await);

    assert_eq!(usage.current_state, "running");
    assert_eq!(usage.resources.memory_bytes, 588_701_696);
}

#[tokio::test]
async fn test_power_and_command_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER}/power")))
        .and(body_json(json!({"signal": "restart"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER}/command")))
        .and(body_json(json!({"command": "say hello"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let target = client.client_api().servers("1a7ce997");
    assert_ok!(target.set_power_state(PowerSignal::Restart).await);
    assert_ok!(target.send_command("say hello").await);
}

#[tokio::test]
async fn test_created_database_carries_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER}/databases")))
        .and(body_json(json!({"database": "stats", "remote": "%"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "server_database",
            "attributes": {
                "id": "y9YVr4Ax",
                "host": {"address": "127.0.0.1", "port": 3306},
                "name": "s1_stats",
                "username": "u1_QsIAp1jhvS",
                "connections_from": "%",
                "max_connections": 0,
                "relationships": {
                    "password": {"object": "database_password", "attributes": {"password": "2HtjUZ!wBHz.T1r"}}
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let options = ClientDatabaseCreateOptions {
        database: "stats".to_string(),
        remote: "%".to_string(),
    };
    let database = assert_ok!(
        client
            .client_api()
            .servers("1a7ce997")
            .databases()
            .create(&options)
            .await
    );

    assert_eq!(database.name, "s1_stats");
    assert_eq!(database.password.as_deref(), Some("2HtjUZ!wBHz.T1r"));
}

#[tokio::test]
async fn test_file_listing_without_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVER}/files/list")))
        .and(query_param("directory", "/plugins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"object": "file_object", "attributes": {"name": "config.yml", "mode": "-rw-r--r--", "mode_bits": "644", "size": 1024, "is_file": true, "is_symlink": false, "mimetype": "text/plain"}},
                {"object": "file_object", "attributes": {"name": "data", "mode": "drwxr-xr-x", "mode_bits": "755", "size": 4096, "is_file": false, "is_symlink": false, "mimetype": "inode/directory"}}
            ]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let files = assert_ok!(client.client_api().servers("1a7ce997").files().list("/plugins").await);

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "config.yml");
    assert!(!files[1].is_file);
}

#[tokio::test]
async fn test_file_contents_and_write_are_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVER}/files/contents")))
        .and(query_param("file", "/server.properties"))
        .respond_with(ResponseTemplate::new(200).set_body_string("motd=A Minecraft Server\n"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER}/files/write")))
        .and(query_param("file", "/server.properties"))
        .and(header("content-type", "text/plain"))
        .and(body_string("motd=Renamed\n"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let files = client.client_api().servers("1a7ce997").files();

    let contents = assert_ok!(files.contents("/server.properties").await);
    assert_eq!(contents, "motd=A Minecraft Server\n");
    assert_ok!(files.write("/server.properties", "motd=Renamed\n").await);
}

#[tokio::test]
async fn test_schedule_details_includes_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVER}/schedules/4")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "server_schedule",
            "attributes": {
                "id": 4,
                "name": "Nightly restart",
                "cron": {"day_of_week": "*", "day_of_month": "*", "month": "*", "hour": "4", "minute": "0"},
                "is_active": true,
                "is_processing": false,
                "only_when_online": false,
                "last_run_at": null,
                "next_run_at": "2024-03-02T04:00:00+00:00",
                "created_at": "2024-03-01T12:00:00+00:00",
                "updated_at": "2024-03-01T12:00:00+00:00",
                "relationships": {"tasks": {"object": "list", "data": [
                    {"object": "schedule_task", "attributes": {"id": 9, "sequence_id": 1, "action": "power", "payload": "restart", "time_offset": 0, "is_queued": false, "continue_on_failure": false}}
                ]}}
            }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let schedule = assert_ok!(client.client_api().servers("1a7ce997").schedules().details(4).await);

    assert_eq!(schedule.tasks.len(), 1);
    assert_eq!(schedule.tasks[0].payload, "restart");
    assert!(schedule.next_run_at.is_some());
}

#[tokio::test]
async fn test_update_startup_variable_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{SERVER}/startup/variable")))
        .and(body_json(json!({"key": "SERVER_JARFILE", "value": "paper.jar"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "egg_variable",
            "attributes": {
                "name": "Server Jar File",
                "description": "The name of the server jarfile to run the server with.",
                "env_variable": "SERVER_JARFILE",
                "default_value": "server.jar",
                "server_value": "paper.jar",
                "is_editable": true,
                "rules": "required|regex:/^([\\w\\d._-]+)(\\.jar)$/"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let options = UpdateVariableOptions {
        key: "SERVER_JARFILE".to_string(),
        value: "paper.jar".to_string(),
    };
    let variable = assert_ok!(
        client
            .client_api()
            .servers("1a7ce997")
            .startup()
            .update_variable(&options)
            .await
    );

    assert_eq!(variable.server_value.as_deref(), Some("paper.jar"));
}

#[tokio::test]
async fn test_set_primary_allocation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER}/network/allocations/12/primary")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "allocation",
            "attributes": {"id": 12, "ip": "10.0.0.5", "ip_alias": null, "port": 25566, "notes": null, "is_default": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let allocation = assert_ok!(
        client
            .client_api()
            .servers("1a7ce997")
            .network()
            .set_primary_allocation(12)
            .await
    );

    assert!(allocation.is_default);
    assert_eq!(allocation.port, 25566);
}
