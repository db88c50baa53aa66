//! Extension classification and pairing table.

use std::fmt;
use std::path::Path;

use super::path::extension_of;

/// Text file extensions supported by serz.
pub const TEXT_EXTENSIONS: [&str; 2] = ["xml", "proxyxml"];

/// Binary extensions serz cannot address by name. They convert to plain `xml`
/// and need the recovery map to find their way back.
pub const SPECIAL_BINARY_EXTENSIONS: [&str; 3] = ["GeoPcDx", "TgPcDx", "XSec"];

/// Binary file extensions supported by serz.
pub const BINARY_EXTENSIONS: [&str; 5] = ["bin", "proxybin", "GeoPcDx", "TgPcDx", "XSec"];

/// All of the file extensions supported by serz.
pub const ALL_EXTENSIONS: [&str; 7] = [
    "xml", "proxyxml", "bin", "proxybin", "GeoPcDx", "TgPcDx", "XSec",
];

/// Extension -> converted extension.
const PAIRINGS: [(&str, &str); 7] = [
    ("xml", "bin"),
    ("proxyxml", "proxybin"),
    ("bin", "xml"),
    ("proxybin", "proxyxml"),
    ("GeoPcDx", "xml"),
    ("TgPcDx", "xml"),
    ("XSec", "xml"),
];

/// Which representation a file extension holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatClass {
    /// XML text (`xml`, `proxyxml`).
    Text,
    /// Binary with a dedicated text sibling (`bin`, `proxybin`).
    OrdinaryBinary,
    /// Binary that converts to plain `xml`.
    SpecialBinary,
}

impl FormatClass {
    pub fn is_binary(self) -> bool {
        matches!(self, Self::OrdinaryBinary | Self::SpecialBinary)
    }
}

/// Classifies an extension (without the leading dot). Matching is
/// case-sensitive; `None` means serz does not support it.
pub fn classify(extension: &str) -> Option<FormatClass> {
    if SPECIAL_BINARY_EXTENSIONS.contains(&extension) {
        Some(FormatClass::SpecialBinary)
    } else if BINARY_EXTENSIONS.contains(&extension) {
        Some(FormatClass::OrdinaryBinary)
    } else if TEXT_EXTENSIONS.contains(&extension) {
        Some(FormatClass::Text)
    } else {
        None
    }
}

/// Returns the extension a file with `extension` gets once converted.
pub fn paired_extension(extension: &str) -> Option<&'static str> {
    PAIRINGS
        .iter()
        .find(|(from, _)| *from == extension)
        .map(|(_, to)| *to)
}

pub fn is_binary(extension: &str) -> bool {
    classify(extension).is_some_and(FormatClass::is_binary)
}

pub fn is_special_binary(extension: &str) -> bool {
    classify(extension) == Some(FormatClass::SpecialBinary)
}

/// Checks whether the file at `path` is a serz binary file, judging by its
/// extension only.
pub fn is_binary_file(path: &Path) -> bool {
    extension_of(path).is_some_and(is_binary)
}

/// Output switch passed to serz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Binary to text (`/xml:`).
    Xml,
    /// Text to binary (`/bin:`).
    Bin,
}

impl Direction {
    /// Direction for converting a file of the given class.
    pub fn for_source(class: FormatClass) -> Self {
        if class.is_binary() {
            Self::Xml
        } else {
            Self::Bin
        }
    }

    pub fn switch(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Bin => "bin",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.switch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_extension_has_exactly_one_class() {
        for ext in ALL_EXTENSIONS {
            let classes = [
                TEXT_EXTENSIONS.contains(&ext),
                BINARY_EXTENSIONS.contains(&ext) && !SPECIAL_BINARY_EXTENSIONS.contains(&ext),
                SPECIAL_BINARY_EXTENSIONS.contains(&ext),
            ];
            assert_eq!(classes.iter().filter(|c| **c).count(), 1, "{ext}");
            assert!(classify(ext).is_some());
        }
    }

    #[test]
    fn test_every_extension_has_a_pairing() {
        for ext in ALL_EXTENSIONS {
            assert!(paired_extension(ext).is_some(), "{ext}");
        }
        assert_eq!(PAIRINGS.len(), ALL_EXTENSIONS.len());
    }

    #[test]
    fn test_all_is_union_of_text_and_binary() {
        let union: Vec<&str> = TEXT_EXTENSIONS
            .iter()
            .chain(BINARY_EXTENSIONS.iter())
            .copied()
            .collect();
        assert_eq!(union, ALL_EXTENSIONS.to_vec());
    }

    #[test]
    fn test_ordinary_pairs_round_trip() {
        for ext in ["xml", "bin", "proxyxml", "proxybin"] {
            let paired = paired_extension(ext).unwrap();
            assert_eq!(paired_extension(paired), Some(ext));
        }
    }

    #[test]
    fn test_special_pairs_are_one_directional() {
        for ext in SPECIAL_BINARY_EXTENSIONS {
            assert_eq!(paired_extension(ext), Some("xml"));
            assert_eq!(paired_extension("xml"), Some("bin"));
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("xml"), Some(FormatClass::Text));
        assert_eq!(classify("proxyxml"), Some(FormatClass::Text));
        assert_eq!(classify("bin"), Some(FormatClass::OrdinaryBinary));
        assert_eq!(classify("proxybin"), Some(FormatClass::OrdinaryBinary));
        assert_eq!(classify("TgPcDx"), Some(FormatClass::SpecialBinary));
        assert_eq!(classify("txt"), None);
        // Case-sensitive on purpose, serz keys off the literal suffix
        assert_eq!(classify("XML"), None);
        assert_eq!(classify("geopcdx"), None);
    }

    #[test]
    fn test_unknown_extension_has_no_pairing() {
        assert_eq!(paired_extension("txt"), None);
        assert_eq!(paired_extension(""), None);
    }

    #[test]
    fn test_is_binary() {
        assert!(is_binary("bin"));
        assert!(is_binary("XSec"));
        assert!(!is_binary("xml"));
        assert!(!is_binary("txt"));
        assert!(is_special_binary("XSec"));
        assert!(!is_special_binary("bin"));
    }

    #[test]
    fn test_is_binary_file() {
        assert!(is_binary_file(Path::new("/routes/signal.GeoPcDx")));
        assert!(is_binary_file(Path::new("track.bin")));
        assert!(!is_binary_file(Path::new("track.xml")));
        assert!(!is_binary_file(Path::new("README")));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::for_source(FormatClass::Text), Direction::Bin);
        assert_eq!(Direction::for_source(FormatClass::OrdinaryBinary), Direction::Xml);
        assert_eq!(Direction::for_source(FormatClass::SpecialBinary), Direction::Xml);
        assert_eq!(Direction::Xml.to_string(), "xml");
    }
}
