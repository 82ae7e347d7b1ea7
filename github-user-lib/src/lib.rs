mod error;
mod field_reader;
mod object_model;
mod response_body;
mod result;

pub use self::error::{DecodeError, GitHubUserError, JsonKind};
pub use self::object_model::User;
pub use self::response_body::{
    decode_document, decode_each, decode_users, parse_body, parse_each_str, parse_str, Decoded,
};
pub use self::result::GitHubUserResult;
