mod common;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{backup_count, test_router, test_state, xlsx_part};
use officetracker::api::create_router;
use serde_json::{Value, json};
use std::fs;
use std::time::{Duration, SystemTime};
use tower::ServiceExt;

async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec(), headers)
}

async fn call_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body, _) = call(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let (_, app) = test_router("api_health");
    let (status, json) = call_json(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn add_then_list_returns_calendar_shape() {
    let (cfg, app) = test_router("api_add_list");

    let (status, json) = call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "2024-01-01", "type": "WFH"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "success"}));
    assert_eq!(backup_count(&cfg), 1);

    let (status, json) = call_json(&app, get("/api/events")).await;
    assert_eq!(status, StatusCode::OK);
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Work From Home");
    assert_eq!(events[0]["start"], "2024-01-01");
    assert_eq!(events[0]["classNames"], json!(["WFH"]));
    assert_eq!(events[0]["type"], "WFH");
    assert!(events[0]["id"].is_i64());
}

#[tokio::test]
async fn update_and_delete_flow() {
    let (cfg, app) = test_router("api_update_delete");

    call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "2024-01-02", "type": "WFO"})),
    )
    .await;
    let (_, list) = call_json(&app, get("/api/events")).await;
    let id = list[0]["id"].as_i64().unwrap();

    let (status, json) = call_json(
        &app,
        with_json("PUT", &format!("/api/events/{id}"), json!({"date": "2024-01-03", "type": "SL"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");

    let (_, list) = call_json(&app, get("/api/events")).await;
    assert_eq!(list[0]["id"].as_i64().unwrap(), id);
    assert_eq!(list[0]["start"], "2024-01-03");
    assert_eq!(list[0]["title"], "Sick Leave");

    let (status, _) = call_json(&app, delete(&format!("/api/events/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, list) = call_json(&app, get("/api/events")).await;
    assert!(list.as_array().unwrap().is_empty());

    assert!((1..=5).contains(&backup_count(&cfg)));
}

#[tokio::test]
async fn delete_and_update_missing_id_succeed() {
    let (_, app) = test_router("api_missing_id");

    let (status, json) = call_json(&app, delete("/api/events/424242")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");

    let (status, json) = call_json(
        &app,
        with_json("PUT", "/api/events/424242", json!({"date": "2024-01-03", "type": "AL"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");

    let (_, list) = call_json(&app, get("/api/events")).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_type_is_displayed_verbatim() {
    let (_, app) = test_router("api_unknown_type");

    call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "2024-01-04", "type": "CONF"})),
    )
    .await;

    let (_, list) = call_json(&app, get("/api/events")).await;
    assert_eq!(list[0]["title"], "CONF");
    assert_eq!(list[0]["classNames"], json!(["CONF"]));
}

#[tokio::test]
async fn malformed_payload_is_structured_error() {
    let (cfg, app) = test_router("api_malformed");

    let (status, json) = call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "not-a-date", "type": "WFH"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert!(json["message"].is_string());
    assert_eq!(backup_count(&cfg), 0);
}

#[tokio::test]
async fn non_numeric_id_is_structured_error() {
    let (cfg, app) = test_router("api_bad_id");

    let (status, json) = call_json(
        &app,
        with_json("PUT", "/api/events/abc", json!({"date": "2024-01-01", "type": "WFH"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert!(json["message"].is_string());

    let (status, json) = call_json(&app, delete("/api/events/abc")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert_eq!(backup_count(&cfg), 0);
}

#[tokio::test]
async fn mutation_waits_for_write_lock() {
    let (cfg, state) = test_state("api_write_lock");
    let app = create_router(state.clone());

    let guard = state.write_lock.clone().lock_owned().await;

    let pending = tokio::spawn({
        let app = app.clone();
        async move {
            call_json(
                &app,
                with_json("POST", "/api/events", json!({"date": "2024-02-01", "type": "WFO"})),
            )
            .await
        }
    });

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!pending.is_finished());
    assert_eq!(backup_count(&cfg), 0);

    drop(guard);
    let (status, json) = tokio::time::timeout(Duration::from_secs(5), pending)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(backup_count(&cfg), 1);

    let (_, list) = call_json(&app, get("/api/events")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn backups_listing_is_newest_first() {
    let (cfg, app) = test_router("api_backups_list");

    call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "2024-01-05", "type": "WFH"})),
    )
    .await;
    // an older copy whose name sorts after every snapshot
    let manual = cfg.backup_path().join("zzz_manual.db");
    fs::write(&manual, b"old").unwrap();
    fs::File::options()
        .write(true)
        .open(&manual)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(946_684_800))
        .unwrap();

    let (status, json) = call_json(&app, get("/api/backups")).await;
    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    for item in list {
        assert!(item["filename"].is_string());
        assert!(item["timestamp"].is_string());
        assert!(item["size"].is_u64());
    }
    let first = list[0]["timestamp"].as_str().unwrap();
    let second = list[1]["timestamp"].as_str().unwrap();
    assert!(first >= second);
    assert_eq!(list[1]["filename"], "zzz_manual.db");
}

#[tokio::test]
async fn restore_unknown_backup_is_404() {
    let (cfg, app) = test_router("api_restore_404");

    let (status, json) = call_json(
        &app,
        post_empty("/api/backup/restore/office_tracker_backup_19990101_000000.db"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Backup file not found");
    assert_eq!(backup_count(&cfg), 0);
}

#[tokio::test]
async fn restore_makes_listing_match_backup() {
    let (cfg, app) = test_router("api_restore");

    call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "2024-01-08", "type": "HOL"})),
    )
    .await;

    // pin the one-event state under a name later snapshots cannot reuse
    let snapshot = fs::read_dir(cfg.backup_path())
        .unwrap()
        .filter_map(Result::ok)
        .next()
        .unwrap()
        .path();
    fs::copy(&snapshot, cfg.backup_path().join("pinned_one_event.db")).unwrap();

    call_json(
        &app,
        with_json("POST", "/api/events", json!({"date": "2024-01-09", "type": "WFO"})),
    )
    .await;
    let (_, list) = call_json(&app, get("/api/events")).await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (status, json) =
        call_json(&app, post_empty("/api/backup/restore/pinned_one_event.db")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Backup restored successfully");

    let (_, list) = call_json(&app, get("/api/events")).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["start"], "2024-01-08");
    assert_eq!(list[0]["type"], "HOL");
}

#[tokio::test]
async fn export_returns_xlsx_attachment() {
    let (_, app) = test_router("api_export");

    for (date, kind) in [("2024-01-15", "AL"), ("2024-01-01", "WFH")] {
        call_json(
            &app,
            with_json("POST", "/api/events", json!({"date": date, "type": kind})),
        )
        .await;
    }

    let (status, body, headers) = call(&app, get("/api/export/2024/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"office_tracker_January_2024_exported_"));
    assert!(disposition.ends_with(".xlsx\""));

    let strings = xlsx_part(&body, "xl/sharedStrings.xml");
    assert!(strings.contains("<t>Work From Home</t>"));
    assert!(strings.contains("<t>Annual Leave</t>"));
}

#[tokio::test]
async fn export_invalid_month_is_structured_error() {
    let (_, app) = test_router("api_export_invalid");

    for uri in ["/api/export/2024/13", "/api/export/2024/xx", "/api/export/year/1"] {
        let (status, json) = call_json(&app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(json["status"], "error");
    }
}
