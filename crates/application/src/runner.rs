//! Sequential runner.
//!
//! Runs one test case or an ordered list of them against a single endpoint,
//! one request at a time. A list stops at the first case that is invalid or
//! does not match its expectation; later cases are never dispatched.

use std::sync::Arc;

use qltest_domain::{LogCategory, Session, TestCase};
use serde_json::Value;

use crate::classifier::classify;
use crate::dispatcher::RequestDispatcher;
use crate::error::{HarnessError, HarnessResult};
use crate::ports::{EventLog, Transport};

/// Either one test case or an ordered list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum TestPlan {
    /// A single case.
    Single(TestCase),
    /// Cases run in order, halting on the first mismatch.
    Sequence(Vec<TestCase>),
}

impl From<TestCase> for TestPlan {
    fn from(case: TestCase) -> Self {
        Self::Single(case)
    }
}

impl From<Vec<TestCase>> for TestPlan {
    fn from(cases: Vec<TestCase>) -> Self {
        Self::Sequence(cases)
    }
}

impl FromIterator<TestCase> for TestPlan {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

/// Result of one executed test within a [`RunReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Test name.
    pub name: String,
    /// Matched payload, or why the test was rejected.
    pub result: HarnessResult<Value>,
}

/// Per-test record of a list run.
///
/// Contains only the tests that were executed: the run halts after the
/// first rejected entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunReport {
    /// Executed tests in order.
    pub entries: Vec<ReportEntry>,
    /// Number of tests in the list, executed or not.
    pub total: usize,
}

impl RunReport {
    /// Number of matched tests.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    /// Number of tests never executed because the run halted.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.total - self.entries.len()
    }

    /// The entry the run halted on, if any.
    #[must_use]
    pub fn failure(&self) -> Option<(&str, &HarnessError)> {
        self.entries
            .iter()
            .find_map(|e| e.result.as_ref().err().map(|err| (e.name.as_str(), err)))
    }

    /// Returns true if every test in the list matched.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure().is_none() && self.entries.len() == self.total
    }
}

/// Test harness bound to one endpoint.
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(ReqwestTransport::new()?);
/// let harness = TestHarness::new("http://localhost:8080/", transport, TracingEventLog)?;
///
/// harness
///     .run_all(&[
///         TestCase::positive("good request", json!({"test": "test"})),
///         TestCase::negative("bad request", json!("not json")),
///     ])
///     .await?;
/// ```
pub struct TestHarness<T: Transport, L: EventLog> {
    dispatcher: RequestDispatcher<T>,
    log: L,
}

impl<T: Transport, L: EventLog> TestHarness<T, L> {
    /// Creates a harness for `url`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `url` is blank. Nothing is sent.
    pub fn new(url: impl Into<String>, transport: Arc<T>, log: L) -> HarnessResult<Self> {
        Ok(Self {
            dispatcher: RequestDispatcher::new(url, transport)?,
            log,
        })
    }

    /// Endpoint the harness targets.
    #[must_use]
    pub fn url(&self) -> &str {
        self.dispatcher.url()
    }

    /// Current authentication session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        self.dispatcher.session()
    }

    /// The transcript sink.
    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Sends `Authorization: Bearer <token>` with every later request.
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.dispatcher.session_mut().set_bearer_token(token);
    }

    /// Stops sending the `Authorization` header.
    pub fn clear_bearer_token(&mut self) {
        self.dispatcher.session_mut().clear_bearer_token();
    }

    /// Runs a single test case.
    ///
    /// Resolves with the payload of the expected branch: the success body for
    /// a positive test, the error body (or `null`) for a negative one.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Configuration`] if the case has no name or no
    /// query, and [`HarnessError::Mismatch`] if the outcome did not match.
    pub async fn run(&self, case: &TestCase) -> HarnessResult<Value> {
        let query = case.validate()?;

        let title = if case.positive {
            LogCategory::Title
        } else {
            LogCategory::ErrorTitle
        };
        self.log.record(title, &case.name);

        let settled = self.dispatcher.dispatch(query, &self.log).await;
        classify(case, settled, &self.log)
            .into_result()
            .map_err(HarnessError::from)
    }

    /// Runs `cases` in order, halting at the first rejection.
    ///
    /// Resolves with the last matched payload, or `None` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns the first rejection unchanged; later cases are not run.
    pub async fn run_all(&self, cases: &[TestCase]) -> HarnessResult<Option<Value>> {
        let mut last = None;
        for case in cases {
            last = Some(self.run(case).await?);
        }
        Ok(last)
    }

    /// Runs a single case or a list.
    ///
    /// # Errors
    ///
    /// See [`Self::run`] and [`Self::run_all`].
    pub async fn execute(&self, plan: impl Into<TestPlan>) -> HarnessResult<Option<Value>> {
        match plan.into() {
            TestPlan::Single(case) => self.run(&case).await.map(Some),
            TestPlan::Sequence(cases) => self.run_all(&cases).await,
        }
    }

    /// Runs `cases` like [`Self::run_all`] and records each executed test.
    pub async fn run_report(&self, cases: &[TestCase]) -> RunReport {
        let mut report = RunReport {
            entries: Vec::with_capacity(cases.len()),
            total: cases.len(),
        };

        for case in cases {
            let result = self.run(case).await;
            let failed = result.is_err();
            report.entries.push(ReportEntry {
                name: case.name.clone(),
                result,
            });
            if failed {
                break;
            }
        }

        report
    }
}
