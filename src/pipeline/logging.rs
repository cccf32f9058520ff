//! Request/response logging around the rest of the chain.

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{error, info};

use super::{Behavior, HandlerResult, Next, Request};

/// Logs the request before calling `next` and the response after it.
///
/// Hard faults are logged at error level and returned unchanged. A panic
/// in the inner chain is logged and then resumed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingBehavior;

impl LoggingBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl<R: Request> Behavior<R> for LoggingBehavior {
    fn handle(&self, request: &R, next: Next<'_, R>) -> HandlerResult<R::Output> {
        info!(request = R::NAME, value = %render(request), "handling request");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| next(request)));
        match outcome {
            Ok(Ok(response)) => {
                info!(request = R::NAME, value = %render(&response), "handled request");
                Ok(response)
            }
            Ok(Err(err)) => {
                error!(request = R::NAME, error = %err, "request failed");
                Err(err)
            }
            Err(payload) => {
                error!(request = R::NAME, "request handler panicked");
                panic::resume_unwind(payload)
            }
        }
    }
}

/// JSON when the value serializes, `Debug` otherwise.
fn render<T: Serialize + Debug>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}
