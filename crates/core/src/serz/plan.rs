//! Working out what a conversion will produce.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::SerzError;
use crate::formats::{self, Direction, FormatClass};

/// Source and target of a single conversion, before anything runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub source: PathBuf,
    pub source_extension: String,
    pub class: FormatClass,
    pub target: PathBuf,
    pub target_extension: &'static str,
    pub direction: Direction,
}

impl ConversionPlan {
    /// Plans the conversion of `source`. Fails for extensions serz does not
    /// support rather than producing a made-up target.
    pub fn for_path(source: &Path) -> Result<Self, SerzError> {
        let source_extension = formats::extension_of(source).unwrap_or_default();
        let unsupported = || SerzError::UnsupportedExtension {
            path: source.to_path_buf(),
            extension: source_extension.to_string(),
        };

        let class = formats::classify(source_extension).ok_or_else(unsupported)?;
        let target_extension = formats::paired_extension(source_extension).ok_or_else(unsupported)?;

        let source_str = source.to_str().ok_or_else(|| SerzError::NonUtf8Path {
            path: source.to_path_buf(),
        })?;
        // Trailing separators or `/.` give an extension the name doesn't end with
        let target = formats::replace_suffix(source_str, source_extension, target_extension)
            .map(PathBuf::from)
            .ok_or_else(unsupported)?;

        Ok(Self {
            source: source.to_path_buf(),
            source_extension: source_extension.to_string(),
            class,
            target,
            target_extension,
            direction: Direction::for_source(class),
        })
    }

    pub fn is_special(&self) -> bool {
        self.class == FormatClass::SpecialBinary
    }
}

/// One serz call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerzInvocation {
    pub executable: PathBuf,
    pub source: PathBuf,
    pub target: PathBuf,
    pub direction: Direction,
}

impl SerzInvocation {
    pub fn new(executable: PathBuf, plan: &ConversionPlan) -> Self {
        Self {
            executable,
            source: plan.source.clone(),
            target: plan.target.clone(),
            direction: plan.direction,
        }
    }

    /// Arguments as passed to the process on platforms with argv semantics.
    pub fn args(&self) -> Vec<OsString> {
        let mut switch = OsString::from(format!("/{}:", self.direction));
        switch.push(&self.target);
        vec![self.source.clone().into_os_string(), switch]
    }

    /// Arguments exactly as serz expects them on its own command line:
    /// `"<source>" /<xml|bin>:"<target>"`.
    pub fn raw_args(&self) -> String {
        format!(
            "\"{}\" /{}:\"{}\"",
            self.source.display(),
            self.direction,
            self.target.display()
        )
    }

    /// Full command line, for logs and error reports.
    pub fn command_line(&self) -> String {
        format!("\"{}\" {}", self.executable.display(), self.raw_args())
    }
}
