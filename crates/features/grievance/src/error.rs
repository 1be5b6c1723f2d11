use ghub_kernel::store::StoreError;
use std::borrow::Cow;
use std::fmt;

/// A specialized [`GrievanceError`] enum of this crate.
#[ghub_derive::ghub_error]
pub enum GrievanceError {
    /// Malformed `{days},{hours}` token or out-of-range component.
    #[error("Invalid duration format{}: {message}", format_context(.context))]
    InvalidDurationFormat { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Structurally invalid configuration entry.
    #[error("Configuration rejected at {path}{}: {message}", format_context(.context))]
    ConfigValidation {
        path: EntryPath,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown category{}: {name}", format_context(.context))]
    UnknownCategory { name: String, context: Option<Cow<'static, str>> },

    #[error("Unknown flag{}: {name}", format_context(.context))]
    UnknownFlag { name: String, context: Option<Cow<'static, str>> },

    #[error("Permission denied{}: {message}", format_context(.context))]
    PermissionDenied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Configuration store failure{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal grievance error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl GrievanceError {
    pub(crate) fn invalid_entry(path: &EntryPath, message: impl Into<Cow<'static, str>>) -> Self {
        Self::ConfigValidation { path: path.clone(), message: message.into(), context: None }
    }
}

/// Location of a configuration entry: the payload section followed by entry names.
///
/// Entries whose name could not be read are labelled by position (`#3`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EntryPath(Vec<String>);

impl EntryPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn section(key: &str) -> Self {
        Self(vec![key.to_owned()])
    }

    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<payload>");
        }
        f.write_str(&self.0.join(" > "))
    }
}
