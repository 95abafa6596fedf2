//! Scripted transport for service and page tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::api::{ApiError, ApiTransport};

/// One request seen by [`ScriptedTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// Transport that replays canned responses in order and records every call.
/// Clones share the script and the call log.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<Value, ApiError>>>>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl ScriptedTransport {
    pub fn replying(responses: Vec<Result<Value, ApiError>>) -> Self {
        Self { responses: Rc::new(RefCell::new(responses.into())), calls: Rc::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(&self) -> Result<Value, ApiError> {
        self.responses.borrow_mut().pop_front().unwrap_or(Err(ApiError::Network("no scripted response".to_owned())))
    }
}

impl ApiTransport for ScriptedTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call { method: "POST", path: path.to_owned(), body: Some(body.clone()), bearer: None });
        self.next()
    }

    async fn get_json(&self, path: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call {
            method: "GET",
            path: path.to_owned(),
            body: None,
            bearer: bearer.map(str::to_owned),
        });
        self.next()
    }
}
