//! Steps exercising outcome construction, predicates and unwrap.

use crate::fixtures::{OutcomeContext, outcome_context};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use rstest_bdd_macros::{given, then};
use test_helpers::{assert, text};
use verdict::{Outcome, PartsState, VerdictError};

#[given("a successful outcome holding {value}")]
fn successful_outcome(outcome_context: &OutcomeContext, value: String) -> Result<()> {
    ensure!(
        outcome_context.outcome.is_empty(),
        "outcome already initialised"
    );
    outcome_context
        .outcome
        .set(Outcome::success(text::parse_scalar(&value)?));
    Ok(())
}

#[given("a failed outcome with message {message}")]
fn failed_outcome(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    ensure!(
        outcome_context.outcome.is_empty(),
        "outcome already initialised"
    );
    outcome_context
        .outcome
        .set(Outcome::failure(text::normalize_scalar(&message)));
    Ok(())
}

#[given("an outcome built from value {value} and error {error}")]
fn built_from_both(outcome_context: &OutcomeContext, value: String, error: String) -> Result<()> {
    ensure!(
        outcome_context.construction.is_empty(),
        "construction already attempted"
    );
    let built = Outcome::from_parts(
        Some(text::parse_scalar(&value)?),
        Some(text::normalize_scalar(&error)),
    );
    outcome_context.construction.set(built);
    Ok(())
}

#[given("an outcome built from no value and no error")]
fn built_from_neither(outcome_context: &OutcomeContext) -> Result<()> {
    ensure!(
        outcome_context.construction.is_empty(),
        "construction already attempted"
    );
    outcome_context
        .construction
        .set(Outcome::from_parts(None, None));
    Ok(())
}

fn current(outcome_context: &OutcomeContext) -> Result<Outcome<i32>> {
    outcome_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("outcome has not been initialised"))
}

#[then("the outcome is ok")]
fn outcome_is_ok(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    ensure!(outcome.is_ok(), "expected ok outcome, got {outcome:?}");
    ensure!(!outcome.is_err(), "is_err disagrees with is_ok");
    Ok(())
}

#[then("the outcome is an error")]
fn outcome_is_err(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    ensure!(outcome.is_err(), "expected failed outcome, got {outcome:?}");
    ensure!(!outcome.is_ok(), "is_ok disagrees with is_err");
    Ok(())
}

#[then("unwrapping yields {value}")]
fn unwrap_yields(outcome_context: &OutcomeContext, value: String) -> Result<()> {
    let expected: i32 = text::parse_scalar(&value)?;
    let actual = current(outcome_context)?.unwrap()?;
    ensure!(actual == expected, "expected {expected}, unwrapped {actual}");
    Ok(())
}

#[then("unwrapping fails with a message containing {needle}")]
fn unwrap_fails(outcome_context: &OutcomeContext, needle: String) -> Result<()> {
    match current(outcome_context)?.unwrap() {
        Ok(value) => Err(anyhow!("expected unwrap to fail, got {value}")),
        Err(err @ VerdictError::Unwrap { .. }) => {
            assert::contains(&err, &text::normalize_scalar(&needle))
        }
        Err(other) => Err(anyhow!("unexpected error: {other:?}")),
    }
}

fn expect_rejection(outcome_context: &OutcomeContext, expected: PartsState) -> Result<()> {
    let built = outcome_context
        .construction
        .take()
        .ok_or_else(|| anyhow!("no two-field construction was attempted"))?;
    match built {
        Err(VerdictError::InvalidParts { state }) if state == expected => Ok(()),
        other => Err(anyhow!("expected {expected} rejection, got {other:?}")),
    }
}

#[then("construction is rejected because both fields were set")]
fn rejected_both(outcome_context: &OutcomeContext) -> Result<()> {
    expect_rejection(outcome_context, PartsState::Both)
}

#[then("construction is rejected because neither field was set")]
fn rejected_neither(outcome_context: &OutcomeContext) -> Result<()> {
    expect_rejection(outcome_context, PartsState::Neither)
}

#[rstest]
fn two_field_construction_is_attempted_once(outcome_context: OutcomeContext) {
    assert!(built_from_both(&outcome_context, "1".to_owned(), "\"boom\"".to_owned()).is_ok());
    assert!(built_from_both(&outcome_context, "2".to_owned(), "\"bang\"".to_owned()).is_err());
    assert!(built_from_neither(&outcome_context).is_err());
}
