//! Invoking the deployed function through the `current` alias.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use fnctl_remote::{InvokeRequest, LogType};
use fnctl_types::{InvocationType, InvokeError, CURRENT_ALIAS};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{FunctionError, FunctionResult};
use crate::function::Function;

/// Reply payload and decoded log tail of a successful invocation.
///
/// Both are empty for [`InvocationType::Event`] calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeOutput {
    reply: Vec<u8>,
    logs: Vec<u8>,
}

impl InvokeOutput {
    pub fn new(reply: Vec<u8>, logs: Vec<u8>) -> Self {
        Self { reply, logs }
    }

    /// Raw reply payload. `&[u8]` implements `Read`.
    pub fn reply(&self) -> &[u8] {
        &self.reply
    }

    /// Decoded execution log tail.
    pub fn logs(&self) -> &[u8] {
        &self.logs
    }

    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.reply, self.logs)
    }
}

impl Function {
    /// Invoke the function with `event` as payload and `context` as client context.
    ///
    /// A failure inside the function comes back as
    /// [`FunctionError::Invocation`]; transport and service failures as
    /// [`FunctionError::Remote`].
    #[instrument(skip(self, event, context, kind), fields(function = %self.name, kind = %kind))]
    pub fn invoke<E, C>(&self, event: &E, context: &C, kind: InvocationType) -> FunctionResult<InvokeOutput>
    where
        E: Serialize + ?Sized,
        C: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(event).map_err(|source| FunctionError::Encode {
            what: "event",
            source,
        })?;
        let context = serde_json::to_vec(context).map_err(|source| FunctionError::Encode {
            what: "context",
            source,
        })?;
        let client_context = STANDARD.encode(context);

        debug!(bytes = payload.len(), "invoking");
        let response = self.service.invoke(&InvokeRequest {
            function_name: &self.function_name,
            qualifier: CURRENT_ALIAS,
            invocation_type: kind,
            log_type: LogType::Tail,
            client_context: &client_context,
            payload: &payload,
        })?;

        if let Some(fault) = response.function_error {
            let mut error: InvokeError =
                serde_json::from_slice(&response.payload).map_err(FunctionError::Decode)?;
            error.handled = fault.is_handled();
            return Err(error.into());
        }

        if kind == InvocationType::Event {
            return Ok(InvokeOutput::default());
        }

        let logs = match response.log_result.as_deref() {
            Some(tail) => STANDARD.decode(tail)?,
            None => Vec::new(),
        };
        Ok(InvokeOutput::new(response.payload, logs))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::sync::Arc;

    use fnctl_remote::{FunctionFault, InvokeResponse, RemoteError};
    use serde_json::json;

    use super::*;
    use crate::testing::{node_dir, open_function, Call, RecordingService};

    fn service(response: InvokeResponse) -> Arc<RecordingService> {
        Arc::new(RecordingService::deployed("hash", &["1"], "1").with_invoke_response(response))
    }

    #[test]
    fn sync_call_returns_reply_and_logs() {
        let dir = node_dir();
        let service = service(InvokeResponse {
            payload: br#"{"width":64}"#.to_vec(),
            function_error: None,
            log_result: Some(STANDARD.encode("START RequestId: 1\nEND\n")),
        });
        let function = open_function(dir.path(), service.clone());

        let output = function
            .invoke(&json!({"key": "a.png"}), &json!({"user": "tj"}), InvocationType::RequestResponse)
            .unwrap();

        let mut reply = String::new();
        output.reply().read_to_string(&mut reply).unwrap();
        assert_eq!(reply, r#"{"width":64}"#);
        assert_eq!(output.logs(), b"START RequestId: 1\nEND\n");
    }

    #[test]
    fn request_carries_alias_tail_and_encoded_context() {
        let dir = node_dir();
        let service = service(InvokeResponse::default());
        let function = open_function(dir.path(), service.clone());

        function
            .invoke(&json!({"key": "a.png"}), &json!({"user": "tj"}), InvocationType::DryRun)
            .unwrap();

        let Some(Call::Invoke {
            qualifier,
            kind,
            log_type,
            client_context,
            payload,
        }) = service.calls().pop()
        else {
            panic!("expected an invoke call");
        };
        assert_eq!(qualifier, CURRENT_ALIAS);
        assert_eq!(kind, InvocationType::DryRun);
        assert_eq!(log_type, LogType::Tail);
        assert_eq!(STANDARD.decode(client_context).unwrap(), br#"{"user":"tj"}"#);
        assert_eq!(payload, br#"{"key":"a.png"}"#);
    }

    #[test]
    fn event_call_returns_empty_streams() {
        let dir = node_dir();
        let service = service(InvokeResponse {
            payload: b"ignored".to_vec(),
            function_error: None,
            log_result: Some(STANDARD.encode("ignored")),
        });
        let function = open_function(dir.path(), service);

        let output = function.invoke(&json!({}), &json!({}), InvocationType::Event).unwrap();
        assert!(output.reply().is_empty());
        assert!(output.logs().is_empty());
    }

    #[test]
    fn function_error_is_decoded() {
        let dir = node_dir();
        let service = service(InvokeResponse {
            payload: br#"{"errorMessage":"boom","errorType":"TypeError","stackTrace":["at index.js:3"]}"#.to_vec(),
            function_error: Some(FunctionFault::Handled),
            log_result: Some(STANDARD.encode("logs")),
        });
        let function = open_function(dir.path(), service);

        let err = function
            .invoke(&json!({}), &json!({}), InvocationType::RequestResponse)
            .unwrap_err();
        let invocation = err.as_invocation().unwrap();
        assert_eq!(invocation.message, "boom");
        assert_eq!(invocation.kind, "TypeError");
        assert_eq!(invocation.stack, vec!["at index.js:3".to_string()]);
        assert!(invocation.handled);
    }

    #[test]
    fn unhandled_fault_on_event_call_is_still_an_error() {
        let dir = node_dir();
        let service = service(InvokeResponse {
            payload: br#"{"errorMessage":"Process exited before completing request"}"#.to_vec(),
            function_error: Some(FunctionFault::Unhandled),
            log_result: None,
        });
        let function = open_function(dir.path(), service);

        let err = function.invoke(&json!({}), &json!({}), InvocationType::Event).unwrap_err();
        assert!(!err.as_invocation().unwrap().handled);
    }

    #[test]
    fn malformed_error_payload() {
        let dir = node_dir();
        let service = service(InvokeResponse {
            payload: b"not json".to_vec(),
            function_error: Some(FunctionFault::Unhandled),
            log_result: None,
        });
        let function = open_function(dir.path(), service);

        let err = function
            .invoke(&json!({}), &json!({}), InvocationType::RequestResponse)
            .unwrap_err();
        assert!(matches!(err, FunctionError::Decode(_)));
    }

    #[test]
    fn transport_failure_propagates() {
        let dir = node_dir();
        let service = Arc::new(
            RecordingService::deployed("hash", &["1"], "1")
                .failing("invoke", RemoteError::service("TooManyRequestsException", "rate")),
        );
        let function = open_function(dir.path(), service);

        let err = function
            .invoke(&json!({}), &json!({}), InvocationType::RequestResponse)
            .unwrap_err();
        assert!(matches!(err, FunctionError::Remote(_)));
        assert!(err.as_invocation().is_none());
    }
}
