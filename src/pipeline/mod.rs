//! Pipeline: cross-cutting behaviors wrapped around a request handler.
//!
//! A [`Pipeline<R>`] is an ordered list of [`Behavior`]s ending in one
//! [`RequestHandler`]. Each behavior receives the request and a `next`
//! callback for the rest of the chain; it may short-circuit by not calling
//! `next`. The standard chain is validation, then logging, then the
//! handler.
//!
//! ## Example
//!
//! ```ignore
//! use device_manager::pipeline::{handler_fn, Pipeline, RuleSet};
//!
//! let pipeline = Pipeline::standard(
//!     handler_fn(|cmd: &AddDeviceCommand| Ok(ApiResult::from_result(...))),
//!     vec![AddDeviceCommand::rules().boxed()],
//! );
//! let envelope = pipeline.send(&command)?;
//! ```
//!
//! ## Outcomes
//!
//! - `Ok(envelope)` with errors: validation rejected the request, or the
//!   handler reported a not-found / operation-failed condition.
//! - `Ok(envelope)` without errors: handled.
//! - `Err(DeviceError)`: a hard fault. Logged, then returned unchanged.

mod logging;
mod validation;

use std::fmt;

use serde::Serialize;

use crate::envelope::ApiResult;
use crate::error::DeviceError;

pub use logging::LoggingBehavior;
pub use validation::{RuleSet, ValidationBehavior, Validator};

/// What a handler (and therefore a pipeline) returns.
pub type HandlerResult<T> = Result<ApiResult<T>, DeviceError>;

/// A request object sent through a pipeline.
pub trait Request: Serialize + fmt::Debug + Send + Sync + 'static {
    /// Payload of a successful envelope.
    type Output: Serialize + fmt::Debug + Send + Sync;

    /// Name used in log records.
    const NAME: &'static str;
}

/// Terminal step of a pipeline.
pub trait RequestHandler<R: Request>: Send + Sync {
    fn handle(&self, request: &R) -> HandlerResult<R::Output>;
}

/// Wrap a closure as a [`RequestHandler`].
pub fn handler_fn<R, F>(handle: F) -> FnHandler<F>
where
    R: Request,
    F: Fn(&R) -> HandlerResult<R::Output> + Send + Sync,
{
    FnHandler(handle)
}

/// Closure-backed handler built by [`handler_fn`].
pub struct FnHandler<F>(F);

impl<R, F> RequestHandler<R> for FnHandler<F>
where
    R: Request,
    F: Fn(&R) -> HandlerResult<R::Output> + Send + Sync,
{
    fn handle(&self, request: &R) -> HandlerResult<R::Output> {
        (self.0)(request)
    }
}

/// The remainder of the chain, as seen by a behavior.
pub type Next<'a, R> = &'a dyn Fn(&R) -> HandlerResult<<R as Request>::Output>;

/// A cross-cutting step wrapped around the rest of the chain.
pub trait Behavior<R: Request>: Send + Sync {
    fn handle(&self, request: &R, next: Next<'_, R>) -> HandlerResult<R::Output>;
}

/// Behaviors in order, then the handler.
pub struct Pipeline<R: Request> {
    behaviors: Vec<Box<dyn Behavior<R>>>,
    handler: Box<dyn RequestHandler<R>>,
}

impl<R: Request> Pipeline<R> {
    /// A pipeline with no behaviors: requests go straight to `handler`.
    pub fn new<H>(handler: H) -> Self
    where
        H: RequestHandler<R> + 'static,
    {
        Self {
            behaviors: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// Validation with `validators`, then logging, then `handler`.
    pub fn standard<H>(handler: H, validators: Vec<Box<dyn Validator<R>>>) -> Self
    where
        H: RequestHandler<R> + 'static,
    {
        Self::new(handler)
            .with(ValidationBehavior::new(validators))
            .with(LoggingBehavior::new())
    }

    /// Append a behavior. Earlier behaviors wrap later ones.
    ///
    /// Returns `self` for chaining.
    pub fn with<B>(mut self, behavior: B) -> Self
    where
        B: Behavior<R> + 'static,
    {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Run `request` through every behavior and the handler.
    pub fn send(&self, request: &R) -> HandlerResult<R::Output> {
        self.run(0, request)
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    fn run(&self, index: usize, request: &R) -> HandlerResult<R::Output> {
        match self.behaviors.get(index) {
            Some(behavior) => {
                let next = |request: &R| self.run(index + 1, request);
                behavior.handle(request, &next)
            }
            None => self.handler.handle(request),
        }
    }
}
