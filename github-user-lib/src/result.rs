use crate::error::GitHubUserError;

pub type GitHubUserResult<T> = std::result::Result<T, GitHubUserError>;
