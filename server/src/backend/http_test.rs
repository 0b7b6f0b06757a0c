use super::*;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:8000", SUBMIT_ROLE_ARN_PATH), "http://localhost:8000/api/receive-role-arn/");
    assert_eq!(endpoint("http://localhost:8000/", RECORD_USER_PATH), "http://localhost:8000/user-data/");
}

#[test]
fn rejection_extracts_message() {
    let err = rejection(400, r#"{"message":"Invalid role"}"#);
    match err {
        BackendError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("Invalid role"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn rejection_with_html_body_has_no_message() {
    let err = rejection(502, "<html>Bad Gateway</html>");
    assert!(matches!(err, BackendError::Rejected { status: 502, message: None }));
}

#[test]
fn parse_message_tolerates_non_json() {
    assert_eq!(parse_message(r#"{"message":"Stored"}"#).as_deref(), Some("Stored"));
    assert_eq!(parse_message(r#"{"message":""}"#), None);
    assert_eq!(parse_message("OK"), None);
    assert_eq!(parse_message(""), None);
}

#[test]
fn parse_role_arn_reads_camel_case_key() {
    let arn = parse_role_arn(r#"{"roleArn":"arn:aws:iam::123456789012:role/R"}"#).unwrap();
    assert_eq!(arn.as_deref(), Some("arn:aws:iam::123456789012:role/R"));
    assert_eq!(parse_role_arn(r#"{"roleArn":""}"#).unwrap(), None);
    assert_eq!(parse_role_arn("{}").unwrap(), None);
}

#[test]
fn parse_role_arn_rejects_non_json() {
    assert!(matches!(parse_role_arn("nope"), Err(BackendError::Parse(_))));
}

#[test]
fn parse_metrics_unwraps_aws_metrics() {
    let body = serde_json::json!({
        "aws_metrics": {
            "Optimization_Recommendations": {
                "CPU_Utilization": { "Recommendation": "ok", "Current_Usage": 70, "Optimized_Usage": 40 }
            },
            "Carbon_Footprint_Reduction": { "Reduction_Percentage": 8 }
        }
    })
    .to_string();
    let doc = parse_metrics(&body).unwrap();
    assert_eq!(doc.charts().len(), 1);
    assert_eq!(doc.carbon_reduction(), Some(8.0));
}

#[test]
fn parse_metrics_requires_envelope() {
    assert!(matches!(parse_metrics("{}"), Err(BackendError::Parse(_))));
}

#[test]
fn client_builds_from_config() {
    let config = BackendConfig::from_env();
    let client = HttpBackend::new(&config).unwrap();
    assert!(!client.base_url().ends_with('/'));
}
