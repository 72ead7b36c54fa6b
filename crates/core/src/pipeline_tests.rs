// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::fake::FakePipeline;
use yare::parameterized;

#[parameterized(
    both_unbounded = { None, None, None },
    only_supplied = { Some(5), None, Some(5) },
    only_configured = { None, Some(7), Some(7) },
    supplied_smaller = { Some(3), Some(9), Some(3) },
    configured_smaller = { Some(9), Some(4), Some(4) },
    equal = { Some(6), Some(6), Some(6) },
)]
fn effective_timeout_is_minimum(supplied: Option<u64>, configured: Option<u64>, expected: Option<u64>) {
    assert_eq!(
        effective_timeout(
            supplied.map(Duration::from_secs),
            configured.map(Duration::from_secs)
        ),
        expected.map(Duration::from_secs)
    );
}

#[test]
fn boxed_pipeline_converts_without_rewrapping() {
    let boxed: BoxPipeline = Box::new(FakePipeline::succeeding("inner"));
    let converted = boxed.into_pipeline();
    assert_eq!(converted.describe(), "inner");
}

#[test]
fn concrete_pipeline_converts_into_box() {
    let converted = FakePipeline::failing("outer", "nope").into_pipeline();
    assert_eq!(converted.describe(), "outer");
}
