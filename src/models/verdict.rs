use serde::{Deserialize, Serialize};

/// Outcome of grading one submission.
///
/// `ok` is derived from `errors`; warnings never affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub ok: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Verdict {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Terminal verdict with a single error and nothing else.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self::new(vec![error.into()], Vec::new())
    }
}
