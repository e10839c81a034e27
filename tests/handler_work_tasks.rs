mod common;

use axum::http::StatusCode;
use common::{ADVISOR_ID, FakeWorkTasks, TestApp, bearer, task};
use reference_data_api::domain::DataError;
use serde_json::{Value, json};
use std::collections::HashMap;

fn advisor_tasks() -> FakeWorkTasks {
    FakeWorkTasks {
        roles: HashMap::from([(ADVISOR_ID.to_string(), vec!["ADVISOR".to_string()])]),
        person_tasks: HashMap::from([(
            ADVISOR_ID.to_string(),
            vec![task("T1", "Approve timesheet"), task("T2", "Sign contract")],
        )]),
        role_tasks: HashMap::from([(
            "ADVISOR".to_string(),
            vec![task("T2", "Sign contract"), task("T3", "Review holds")],
        )]),
        failure: None,
    }
}

#[tokio::test]
async fn test_missing_person_id_is_bad_request() {
    let server = TestApp::default().server();

    let response = server
        .get("/work-tasks")
        .add_header("Authorization", bearer(common::TOKEN))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "personId is required");
}

#[tokio::test]
async fn test_blank_person_id_is_bad_request() {
    let server = TestApp::default().server();

    server
        .get("/work-tasks")
        .add_query_param("personId", "   ")
        .add_header("Authorization", bearer(common::TOKEN))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_own_tasks_merged_with_role_tasks() {
    let server = TestApp::default()
        .with_work_tasks(advisor_tasks())
        .server();

    let response = server
        .get("/work-tasks")
        .add_query_param("personId", ADVISOR_ID)
        .add_header("Authorization", bearer(common::TOKEN))
        .await;

    response.assert_status_ok();
    let ids: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["T1", "T2", "T3"]);
}

#[tokio::test]
async fn test_other_person_without_permission_is_forbidden() {
    let server = TestApp::default()
        .with_work_tasks(advisor_tasks())
        .server();

    server
        .get("/work-tasks")
        .add_query_param("personId", "0000555")
        .add_header("Authorization", bearer(common::TOKEN))
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_supervisor_may_read_other_person() {
    let server = TestApp::default()
        .with_work_tasks(advisor_tasks())
        .server();

    let response = server
        .get("/work-tasks")
        .add_query_param("personId", ADVISOR_ID)
        .add_header("Authorization", bearer(common::SUPERVISOR_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 3);
}

#[tokio::test]
async fn test_optional_fields_omitted() {
    let server = TestApp::default()
        .with_work_tasks(advisor_tasks())
        .server();

    let response = server
        .get("/work-tasks")
        .add_query_param("personId", ADVISOR_ID)
        .add_header("Authorization", bearer(common::TOKEN))
        .await;

    let tasks = response.json::<Vec<Value>>();
    assert_eq!(
        tasks[0],
        json!({"id": "T1", "category": "APPROVAL", "description": "Approve timesheet"})
    );
}

#[tokio::test]
async fn test_session_expiry_is_unauthorized() {
    let work_tasks = FakeWorkTasks {
        failure: Some(DataError::SessionExpired("28P01".to_string())),
        ..Default::default()
    };
    let server = TestApp::default().with_work_tasks(work_tasks).server();

    let response = server
        .get("/work-tasks")
        .add_query_param("personId", ADVISOR_ID)
        .add_header("Authorization", bearer(common::TOKEN))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json = response.json::<Value>();
    assert_eq!(
        json["error"]["message"],
        "Session has expired while retrieving work tasks: 28P01"
    );
}
