//! Validation behavior and declarative rule sets.

use tracing::warn;

use super::{Behavior, HandlerResult, Next, Request};
use crate::envelope::ApiResult;
use crate::error::DeviceError;

/// A set of rules checked against a request.
pub trait Validator<R>: Send + Sync {
    /// Failure messages, empty when the request is valid.
    fn validate(&self, request: &R) -> Vec<String>;
}

type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

struct Rule<R> {
    when: Option<Predicate<R>>,
    check: Predicate<R>,
    message: String,
}

/// Ordered list of `check -> message` rules, optionally conditional.
///
/// ```ignore
/// let rules = RuleSet::new()
///     .rule(|cmd: &AddDeviceCommand| !cmd.name.trim().is_empty(), "Name is missing.")
///     .rule_when(|cmd| cmd.full, |cmd| cmd.brand.is_some(), "Brand is missing.");
/// ```
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R> Default for RuleSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RuleSet<R> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Fail with `message` unless `check` holds.
    pub fn rule<F>(mut self, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            when: None,
            check: Box::new(check),
            message: message.into(),
        });
        self
    }

    /// Like [`rule`](Self::rule), but only checked when `when` holds.
    pub fn rule_when<W, F>(mut self, when: W, check: F, message: impl Into<String>) -> Self
    where
        W: Fn(&R) -> bool + Send + Sync + 'static,
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            when: Some(Box::new(when)),
            check: Box::new(check),
            message: message.into(),
        });
        self
    }

    pub fn boxed(self) -> Box<dyn Validator<R>>
    where
        R: 'static,
    {
        Box::new(self)
    }
}

impl<R> Validator<R> for RuleSet<R> {
    fn validate(&self, request: &R) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.when.as_ref().map_or(true, |when| when(request)))
            .filter(|rule| !(rule.check)(request))
            .map(|rule| rule.message.clone())
            .collect()
    }
}

/// Runs every registered validator; on any failure returns a failed
/// envelope carrying all messages and never calls `next`.
///
/// With no validators registered it is a pass-through.
pub struct ValidationBehavior<R> {
    validators: Vec<Box<dyn Validator<R>>>,
}

impl<R> ValidationBehavior<R> {
    pub fn new(validators: Vec<Box<dyn Validator<R>>>) -> Self {
        Self { validators }
    }
}

impl<R: Request> Behavior<R> for ValidationBehavior<R> {
    fn handle(&self, request: &R, next: Next<'_, R>) -> HandlerResult<R::Output> {
        if self.validators.is_empty() {
            return next(request);
        }

        let failures: Vec<String> = self
            .validators
            .iter()
            .flat_map(|validator| validator.validate(request))
            .collect();

        if failures.is_empty() {
            return next(request);
        }

        let rejection = DeviceError::ValidationFailed(failures);
        warn!(request = R::NAME, reason = %rejection, "request rejected");
        Ok(ApiResult::from_errors(rejection.messages()))
    }
}
