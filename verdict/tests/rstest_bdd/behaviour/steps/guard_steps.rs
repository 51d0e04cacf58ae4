//! Steps exercising the runtime type guard.

use crate::fixtures::{GuardContext, Sample};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{assert, text};
use verdict::{TypeGuard, VerdictError};

fn parse_list(value: &str) -> Result<Vec<i32>> {
    text::normalize_scalar(value)
        .split(',')
        .map(text::parse_scalar)
        .collect()
}

fn store(guard_context: &GuardContext, sample: Sample) -> Result<()> {
    ensure!(guard_context.sample.is_empty(), "value already initialised");
    guard_context.sample.set(sample);
    Ok(())
}

#[given("the value is the integer {value}")]
fn integer_value(guard_context: &GuardContext, value: String) -> Result<()> {
    store(guard_context, Sample::Integer(text::parse_scalar(&value)?))
}

#[given("the value is the string {value}")]
fn string_value(guard_context: &GuardContext, value: String) -> Result<()> {
    store(guard_context, Sample::Text(text::normalize_scalar(&value)))
}

#[given("the value is absent")]
fn absent_value(guard_context: &GuardContext) -> Result<()> {
    store(guard_context, Sample::Absent(None))
}

#[given("the value is the list {values}")]
fn list_value(guard_context: &GuardContext, values: String) -> Result<()> {
    store(guard_context, Sample::List(parse_list(&values)?))
}

#[given("the value is the tuple {values}")]
fn tuple_value(guard_context: &GuardContext, values: String) -> Result<()> {
    let parsed = parse_list(&values)?;
    let [a, b, c] = parsed.as_slice() else {
        return Err(anyhow!("a tuple needs exactly three items, got {parsed:?}"));
    };
    store(guard_context, Sample::Triple((*a, *b, *c)))
}

fn run_check(
    guard_context: &GuardContext,
    check: impl FnOnce(&TypeGuard, &Sample) -> verdict::VerdictResult<()>,
) -> Result<()> {
    let sample = guard_context
        .sample
        .get()
        .ok_or_else(|| anyhow!("no value to check"))?;
    guard_context.result.set(check(&TypeGuard::new(), &sample));
    Ok(())
}

#[when("the value is checked as an integer")]
fn check_integer(guard_context: &GuardContext) -> Result<()> {
    run_check(guard_context, |guard, sample| {
        guard.ensure::<i32>(sample.as_inspect())
    })
}

#[when("the value is checked as an integer named {name}")]
fn check_named_integer(guard_context: &GuardContext, name: String) -> Result<()> {
    let label = text::normalize_scalar(&name);
    run_check(guard_context, |guard, sample| {
        guard.ensure_named::<i32>(sample.as_inspect(), &label)
    })
}

#[when("the value is checked as a list named {name}")]
fn check_named_list(guard_context: &GuardContext, name: String) -> Result<()> {
    let label = text::normalize_scalar(&name);
    run_check(guard_context, |guard, sample| {
        guard.ensure_named::<Vec<i32>>(sample.as_inspect(), &label)
    })
}

fn take_mismatch(guard_context: &GuardContext) -> Result<VerdictError> {
    let result = guard_context
        .result
        .take()
        .ok_or_else(|| anyhow!("no check was run"))?;
    match result {
        Ok(()) => Err(anyhow!("expected the check to fail")),
        Err(err @ VerdictError::TypeMismatch { .. }) => Ok(err),
        Err(other) => Err(anyhow!("unexpected error: {other:?}")),
    }
}

#[then("the check passes")]
fn check_passes(guard_context: &GuardContext) -> Result<()> {
    let result = guard_context
        .result
        .take()
        .ok_or_else(|| anyhow!("no check was run"))?;
    result.map_err(|err| anyhow!("expected the check to pass: {err}"))
}

#[then("the check fails with message {message}")]
fn check_fails_with(guard_context: &GuardContext, message: String) -> Result<()> {
    let err = take_mismatch(guard_context)?;
    assert::renders_as(&err, &text::normalize_scalar(&message))
}

#[then("the check fails with a message containing {needle}")]
fn check_fails_containing(guard_context: &GuardContext, needle: String) -> Result<()> {
    let err = take_mismatch(guard_context)?;
    assert::contains(&err, &text::normalize_scalar(&needle))
}
