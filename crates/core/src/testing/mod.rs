//! Testing utilities and mock implementations.
//!
//! Lets the conversion flow be exercised without a real `serz.exe`.
//!
//! # Example
//!
//! ```rust,ignore
//! use serzkit_core::testing::MockToolRunner;
//! use serzkit_core::serz::ToolOutput;
//!
//! let runner = MockToolRunner::new();
//! runner.push_output(ToolOutput::new("Error: bad file", "")).await;
//! ```

mod mock_runner;

pub use mock_runner::MockToolRunner;
