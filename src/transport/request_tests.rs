use super::*;
use serde_json::json;

#[test]
fn test_request_serializes_camel_case() {
    let request = GraphqlRequest {
        operation_name: "Tasks",
        query: "query Tasks { tasks { id } }",
        variables: json!({ "projectId": "7" }),
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["operationName"], "Tasks");
    assert_eq!(body["variables"]["projectId"], "7");
    assert!(body.get("operation_name").is_none());
}

#[test]
fn test_into_data_success() {
    let response: GraphqlResponse =
        serde_json::from_value(json!({ "data": { "tasks": [] } })).unwrap();
    assert_eq!(response.into_data().unwrap(), json!({ "tasks": [] }));
}

#[test]
fn test_into_data_reports_all_errors() {
    let response: GraphqlResponse = serde_json::from_value(json!({
        "data": null,
        "errors": [
            { "message": "Invalid organization slug", "locations": [] },
            { "message": "second" }
        ]
    }))
    .unwrap();
    let err = response.into_data().unwrap_err();
    assert_eq!(err.to_string(), "Invalid organization slug; second");
}

#[test]
fn test_into_data_errors_win_over_partial_data() {
    let response: GraphqlResponse = serde_json::from_value(json!({
        "data": { "createProject": null },
        "errors": [{ "message": "boom" }]
    }))
    .unwrap();
    assert!(matches!(
        response.into_data(),
        Err(TransportError::Graphql(messages)) if messages == vec!["boom".to_string()]
    ));
}

#[test]
fn test_into_data_missing() {
    let response: GraphqlResponse = serde_json::from_value(json!({})).unwrap();
    assert!(matches!(response.into_data(), Err(TransportError::MissingData)));

    let response: GraphqlResponse = serde_json::from_value(json!({ "data": null })).unwrap();
    assert!(matches!(response.into_data(), Err(TransportError::MissingData)));
}
