use crate::error::{DecodeError, JsonKind, ROOT_PATH};
use crate::field_reader::FieldReader;
use crate::result::GitHubUserResult;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

const LOGIN_KEY: &str = "login";
const ID_KEY: &str = "id";
const AVATAR_URL_KEY: &str = "avatar_url";
const NAME_KEY: &str = "name";

/// A GitHub user as returned by the `/users` endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(try_from = "Value")]
pub struct User {
    #[serde(rename = "login")]
    login: String,

    #[serde(rename = "id")]
    id: i64,

    #[serde(rename = "avatar_url")]
    avatar_url: Option<Url>,

    #[serde(rename = "name")]
    name: Option<String>,
}

impl User {
    pub fn new<S>(login: S, id: i64, avatar_url: Option<Url>, name: Option<String>) -> Self
    where
        S: Into<String>,
    {
        Self {
            login: login.into(),
            id,
            avatar_url,
            name,
        }
    }

    pub fn from_json_object(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(object);
        let user = Self {
            login: fields.required_string(LOGIN_KEY)?,
            id: fields.required_integer(ID_KEY)?,
            avatar_url: fields.optional_absolute_url(AVATAR_URL_KEY)?,
            name: fields.optional_string(NAME_KEY)?,
        };
        trace!("decoded user {} ({})", user.login, user.id);
        Ok(user)
    }

    pub fn from_json_value(value: &Value) -> Result<Self, DecodeError> {
        let Value::Object(object) = value else {
            let e = DecodeError::TypeMismatch {
                path: String::from(ROOT_PATH),
                expected: "object",
                found: JsonKind::of(value),
            };
            debug!("rejected user payload: {}", e);
            return Err(e);
        };

        Self::from_json_object(object).map_err(|e| {
            debug!("rejected user payload: {}", e);
            e
        })
    }

    pub fn to_json_value(&self) -> GitHubUserResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl TryFrom<Value> for User {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json_value(&value)
    }
}
