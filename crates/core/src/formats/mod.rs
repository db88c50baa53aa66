//! Format registry for serz-convertible files.
//!
//! Static knowledge of which extensions serz understands, whether they hold
//! the text or the binary representation, and which extension a converted
//! file gets. Nothing in here touches the filesystem.
//!
//! # Example
//!
//! ```
//! use serzkit_core::formats::{classify, paired_extension, FormatClass};
//!
//! assert_eq!(classify("GeoPcDx"), Some(FormatClass::SpecialBinary));
//! assert_eq!(paired_extension("proxyxml"), Some("proxybin"));
//! ```

mod path;
mod registry;

pub use path::{extension_of, replace_suffix, sibling_path};
pub use registry::{
    classify, is_binary, is_binary_file, is_special_binary, paired_extension, Direction,
    FormatClass, ALL_EXTENSIONS, BINARY_EXTENSIONS, SPECIAL_BINARY_EXTENSIONS, TEXT_EXTENSIONS,
};
