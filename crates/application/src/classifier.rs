//! Outcome classifier.
//!
//! Collapses the test's intent (positive / negative) and the transport's
//! result (success / failure) into an [`Outcome`]. The expected payload is
//! only compared on the branch the test asked for: success payload for a
//! positive test, error payload for a negative one.

use qltest_domain::{
    Discrepancy, LogCategory, Outcome, Settled, TestCase, TransportFailure, TransportResponse,
    assert_equal,
};
use serde_json::Value;

use crate::ports::{EventLog, render_payload};

/// Classifies a settled request against `case`.
///
/// Every branch records the received response before resolving.
pub fn classify<L: EventLog>(case: &TestCase, settled: Settled, log: &L) -> Outcome {
    match (case.positive, settled) {
        (true, Ok(response)) => {
            log_response(log, &response);
            check_payload(response.payload, case.expected.as_ref())
        }
        (true, Err(failure)) => {
            log_failure(log, &failure);
            Outcome::Mismatched(Discrepancy::UnexpectedFailure {
                message: failure.message,
                payload: failure.payload,
            })
        }
        (false, Ok(response)) => {
            log_response(log, &response);
            Outcome::Mismatched(Discrepancy::UnexpectedSuccess {
                payload: response.payload,
            })
        }
        (false, Err(failure)) => {
            log_failure(log, &failure);
            // Without a response body there is nothing to compare.
            match failure.payload {
                Some(payload) => check_payload(payload, case.expected.as_ref()),
                None => Outcome::Matched(Value::Null),
            }
        }
    }
}

fn check_payload(actual: Value, expected: Option<&Value>) -> Outcome {
    match assert_equal(&actual, expected) {
        Ok(()) => Outcome::Matched(actual),
        Err(mismatch) => Outcome::Mismatched(mismatch.into()),
    }
}

fn log_response<L: EventLog>(log: &L, response: &TransportResponse) {
    log.record(LogCategory::Response, &render_payload(&response.payload));
}

fn log_failure<L: EventLog>(log: &L, failure: &TransportFailure) {
    let entry = match &failure.payload {
        Some(payload) => format!("{}\n{}", failure.message, render_payload(payload)),
        None => failure.message.clone(),
    };
    log.record(LogCategory::ErrorResponse, &entry);
}
