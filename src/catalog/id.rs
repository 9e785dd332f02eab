use crate::foundation::error::{RepcueError, RepcueResult};

/// Opaque key identifying one catalog entry.
///
/// Ids name asset files (`<id>.<ext>`) and output folders, so they must be a single, non-empty
/// path component.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseId(String);

impl ExerciseId {
    /// Validate and wrap an id.
    pub fn new(id: impl Into<String>) -> RepcueResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RepcueError::validation("exercise id must be non-empty"));
        }
        if id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(RepcueError::validation(format!(
                "exercise id '{id}' must be a single path component"
            )));
        }
        Ok(Self(id))
    }

    /// Borrow the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExerciseId {
    type Error = RepcueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExerciseId> for String {
    fn from(value: ExerciseId) -> Self {
        value.0
    }
}

impl std::str::FromStr for ExerciseId {
    type Err = RepcueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExerciseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/id.rs"]
mod tests;
