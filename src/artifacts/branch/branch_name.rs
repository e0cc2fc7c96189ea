use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::{LitError, LitResult};
use serde::{Deserialize, Serialize};

/// Name of the branch a fresh repository starts on
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> LitResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(LitError::InvalidBranchName(name));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map_err(|err| LitError::InvalidBranchName(format!("{name} ({err})")))?;

        if re.is_match(&name) {
            Err(LitError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }

    pub fn is_default_branch(&self) -> bool {
        self.0 == DEFAULT_BRANCH
    }
}

impl TryFrom<String> for BranchName {
    type Error = LitError;

    fn try_from(value: String) -> LitResult<Self> {
        Self::try_parse(value)
    }
}

impl From<BranchName> for String {
    fn from(value: BranchName) -> Self {
        value.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
