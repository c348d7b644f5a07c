//! JSON protocol spoken with the remote catalog endpoint.
//!
//! Requests are a single object naming the action. Responses carry a
//! `result` field that must equal `"success"`, and the records under a
//! resource-specific field (`data` for events, `members` for members).

use serde::{Deserialize, Serialize};

use crate::error::{SgpiError, SgpiResult};
use crate::record::Record;
use crate::resource::Resource;

const SUCCESS: &str = "success";

/// Request body sent to the endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogRequest {
    pub action: String,
}

impl CatalogRequest {
    pub fn for_resource(resource: Resource) -> Self {
        CatalogRequest {
            action: resource.action().to_string(),
        }
    }
}

/// Parse a raw response body into the records of `resource`.
pub fn parse_response(resource: Resource, body: &str) -> SgpiResult<Vec<Record>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SgpiError::MalformedResponse(format!("Response is not JSON: {e}")))?;

    let serde_json::Value::Object(mut object) = value else {
        return Err(SgpiError::MalformedResponse(
            "Response is not a JSON object".into(),
        ));
    };

    let result = match object.get("result") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<missing>".to_string(),
    };
    if result != SUCCESS {
        return Err(SgpiError::Rejected {
            action: resource.action().to_string(),
            result,
        });
    }

    let payload = object.remove(resource.payload_field()).ok_or_else(|| {
        SgpiError::MalformedResponse(format!(
            "Missing '{}' field in response",
            resource.payload_field()
        ))
    })?;

    serde_json::from_value(payload).map_err(|e| {
        SgpiError::MalformedResponse(format!(
            "'{}' is not an array of records: {e}",
            resource.payload_field()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_action_only() {
        let body = serde_json::to_string(&CatalogRequest::for_resource(Resource::Members)).unwrap();
        assert_eq!(body, r#"{"action":"get_members"}"#);
    }

    #[test]
    fn parses_events_payload_from_data_field() {
        let body = r#"{"result":"success","data":[{"title":"Annual Conference","date":"2099-10-12"}]}"#;
        let records = parse_response(Resource::Events, body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("title"), "Annual Conference");
    }

    #[test]
    fn members_payload_must_be_under_members() {
        let body = r#"{"result":"success","data":[]}"#;
        let err = parse_response(Resource::Members, body).unwrap_err();
        assert!(matches!(err, SgpiError::MalformedResponse(_)));
    }

    #[test]
    fn non_success_result_is_rejected() {
        let body = r#"{"result":"error","error":"quota exceeded"}"#;
        let err = parse_response(Resource::Events, body).unwrap_err();
        match err {
            SgpiError::Rejected { action, result } => {
                assert_eq!(action, "get_events");
                assert_eq!(result, "error");
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn html_error_page_is_malformed() {
        let err = parse_response(Resource::Events, "<html>Moved</html>").unwrap_err();
        assert!(matches!(err, SgpiError::MalformedResponse(_)));
    }

    #[test]
    fn payload_of_wrong_shape_is_malformed() {
        let body = r#"{"result":"success","members":{"name":"x"}}"#;
        let err = parse_response(Resource::Members, body).unwrap_err();
        assert!(matches!(err, SgpiError::MalformedResponse(_)));
    }
}
