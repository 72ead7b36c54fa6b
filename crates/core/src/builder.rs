// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Constructors for parallel operations
//!
//! Every entry point preserves input order and consumes each input once.

use crate::parallel::Parallel;
use crate::pipeline::{BoxPipeline, IntoPipeline};

/// Parallel operation over an ordered collection of pipelines
pub fn parallel<I>(pipelines: I) -> Parallel
where
    I: IntoIterator,
    I::Item: IntoPipeline,
{
    pipelines.into_iter().collect()
}

/// Parallel operation that takes every pipeline out of `container`
///
/// The container is left empty and may be refilled by the caller.
pub fn parallel_from<T: IntoPipeline>(container: &mut Vec<T>) -> Parallel {
    container.drain(..).collect()
}

impl<P: IntoPipeline> FromIterator<P> for Parallel {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let pipelines: Vec<BoxPipeline> = iter.into_iter().map(IntoPipeline::into_pipeline).collect();
        Parallel::new(pipelines)
    }
}

/// Parallel operation over a fixed list of pipelines of any type
///
/// ```ignore
/// let op = parallel![fetch_a, fetch_b, Box::new(fetch_c) as BoxPipeline].any();
/// ```
#[macro_export]
macro_rules! parallel {
    ($($pipeline:expr),* $(,)?) => {
        $crate::Parallel::new(::std::vec![
            $($crate::IntoPipeline::into_pipeline($pipeline)),*
        ])
    };
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
