//! Transform pipeline infrastructure
//!
//! A composable, type-safe transformation system. Any transform can be chained with another
//! if their types are compatible.
//!
//! # The `Runnable` Trait
//!
//! The interface for every processing stage. A type implementing `Runnable<I, O>` turns an `I`
//! into an `O`, or fails with a [ParseError]:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, ParseError>;
//! }
//! ```
//!
//! # The `Transform<I, O>` Type
//!
//! A wrapper that enables composition through `.then()`:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Recognition::new())   // String → ParseTree
//!     .then(Building::new());     // ParseTree → Document
//! ```
//!
//! The compiler checks that each stage's input type matches the previous output type.
//!
//! # Static Lazy Transforms
//!
//! The standard pipelines are built once as `once_cell::sync::Lazy` statics. See [standard].

pub mod stages;
pub mod standard;

use crate::rst::error::ParseError;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, ParseError>;
}

/// A composable transformation pipeline
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, ParseError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, ParseError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with the stage's output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a static pipeline after this one
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, ParseError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, ParseError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::error::BuildError;
    use once_cell::sync::Lazy;

    struct Double;
    impl Runnable<i32, i32> for Double {
        fn run(&self, input: i32) -> Result<i32, ParseError> {
            Ok(input * 2)
        }
    }

    struct Describe;
    impl Runnable<i32, String> for Describe {
        fn run(&self, input: i32) -> Result<String, ParseError> {
            Ok(format!("n={}", input))
        }
    }

    struct Fail;
    impl Runnable<i32, i32> for Fail {
        fn run(&self, _input: i32) -> Result<i32, ParseError> {
            Err(BuildError::OrphanCodeBlock.into())
        }
    }

    static DOUBLE_TWICE: Lazy<Transform<i32, i32>> =
        Lazy::new(|| Transform::from_fn(Ok).then(Double).then(Double));

    #[test]
    fn test_chained_stages() {
        let transform = Transform::from_fn(|x: i32| Ok(x + 1))
            .then(Double)
            .then(Describe);
        assert_eq!(transform.run(4).unwrap(), "n=10");
    }

    #[test]
    fn test_error_short_circuits() {
        let transform = Transform::from_fn(Ok).then(Fail).then(Describe);
        assert_eq!(
            transform.run(1).unwrap_err(),
            ParseError::Internal(BuildError::OrphanCodeBlock)
        );
    }

    #[test]
    fn test_then_transform() {
        let transform = Transform::from_fn(Ok)
            .then_transform(&DOUBLE_TWICE)
            .then(Describe);
        assert_eq!(transform.run(3).unwrap(), "n=12");
    }
}
