use humansize::{format_size, BINARY};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};

/// What the uploader knows about a picked file before reading it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
    }
}

/// Restrictions applied to files picked in a `FileInput`.
///
/// `accept` follows the HTML `accept` attribute: `.ext`, `type/*` or a full
/// MIME type. An empty list accepts anything.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FileRules {
    pub accept: Vec<String>,
    pub max_size: Option<u64>,
    pub multiple: bool,
    pub max_files: Option<usize>,
}

#[derive(Debug, Default)]
pub struct FileSelection {
    pub accepted: Vec<CandidateFile>,
    pub rejected: Vec<ValueError>,
}

impl FileRules {
    pub fn accept_attribute(&self) -> String {
        self.accept.join(",")
    }

    fn accepts_type(&self, file: &CandidateFile) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        let extension = file.extension();
        let mime = file.mime.to_lowercase();
        self.accept.iter().any(|rule| {
            let rule = rule.trim().to_lowercase();
            if rule.starts_with('.') {
                extension.as_deref() == Some(rule.as_str())
            } else if let Some(prefix) = rule.strip_suffix("/*") {
                mime.split('/').next() == Some(prefix)
            } else {
                rule == "*/*" || rule == mime
            }
        })
    }

    pub fn check(&self, file: &CandidateFile) -> Result<()> {
        let reject = |reason: String| ValueError::FileRejected {
            name: file.name.clone(),
            reason,
        };
        if !self.accepts_type(file) {
            return Err(reject(format!("type not accepted ({})", self.accept_attribute())));
        }
        if let Some(max_size) = self.max_size {
            if file.size > max_size {
                return Err(reject(format!(
                    "{} exceeds the {} limit",
                    format_size(file.size, BINARY),
                    format_size(max_size, BINARY)
                )));
            }
        }
        Ok(())
    }

    /// Splits a picked batch into accepted files and rejections, honoring the
    /// single-file mode and the file count limit.
    pub fn select(&self, files: impl IntoIterator<Item = CandidateFile>) -> FileSelection {
        let limit = if self.multiple { self.max_files } else { Some(1) };
        let mut selection = FileSelection::default();
        for file in files {
            if let Err(error) = self.check(&file) {
                selection.rejected.push(error);
                continue;
            }
            if limit.is_some_and(|limit| selection.accepted.len() >= limit) {
                selection.rejected.push(ValueError::FileRejected {
                    name: file.name,
                    reason: "too many files selected".to_string(),
                });
                continue;
            }
            selection.accepted.push(file);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(accept: &[&str]) -> FileRules {
        FileRules {
            accept: accept.iter().map(|rule| rule.to_string()).collect(),
            ..FileRules::default()
        }
    }

    #[test]
    fn extension_and_wildcard_rules() {
        let rules = rules(&[".pdf", "image/*"]);
        assert!(rules.check(&CandidateFile::new("cv.PDF", "application/pdf", 10)).is_ok());
        assert!(rules.check(&CandidateFile::new("me.png", "image/png", 10)).is_ok());
        assert!(rules.check(&CandidateFile::new("notes.txt", "text/plain", 10)).is_err());
    }

    #[test]
    fn empty_accept_list_takes_anything() {
        assert!(FileRules::default().check(&CandidateFile::new("a.bin", "", 1)).is_ok());
    }

    #[test]
    fn oversized_file_is_rejected_with_readable_sizes() {
        let rules = FileRules {
            max_size: Some(1024),
            ..FileRules::default()
        };
        let error = rules.check(&CandidateFile::new("big.zip", "application/zip", 2048)).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("big.zip"));
        assert!(message.contains("2 KiB"));
        assert!(message.contains("1 KiB"));
    }

    #[test]
    fn single_mode_keeps_the_first_valid_file() {
        let rules = rules(&["image/*"]);
        let selection = rules.select([
            CandidateFile::new("a.txt", "text/plain", 1),
            CandidateFile::new("b.png", "image/png", 1),
            CandidateFile::new("c.png", "image/png", 1),
        ]);
        assert_eq!(selection.accepted.len(), 1);
        assert_eq!(selection.accepted[0].name, "b.png");
        assert_eq!(selection.rejected.len(), 2);
    }

    #[test]
    fn multiple_mode_honors_max_files() {
        let rules = FileRules {
            multiple: true,
            max_files: Some(2),
            ..FileRules::default()
        };
        let files = (0..3).map(|i| CandidateFile::new(format!("{i}.txt"), "text/plain", 1));
        let selection = rules.select(files);
        assert_eq!(selection.accepted.len(), 2);
        assert_eq!(selection.rejected.len(), 1);
        assert_eq!(rules.accept_attribute(), "");
    }
}
