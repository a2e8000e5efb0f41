//! Serialized form of [`ServiceResult`]
//!
//! Both branches share one flat shape:
//! ```json
//! {
//!     "data": 42,
//!     "errorMessages": null,
//!     "isSuccessful": true,
//!     "statusCode": 200
//! }
//! ```

use crate::error::ServiceError;
use crate::result::ServiceResult;
use crate::status::{DEFAULT_FAILURE_STATUS, DEFAULT_SUCCESS_STATUS};
use serde::de::{self, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodyRef<'a, T> {
    data: Option<&'a T>,
    error_messages: Option<&'a [String]>,
    is_successful: bool,
    status_code: u16,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Body<T> {
    data: Option<T>,
    #[serde(default)]
    error_messages: Option<Vec<String>>,
    is_successful: bool,
    #[serde(default)]
    status_code: Option<u16>,
}

impl<T: Serialize> Serialize for ServiceResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BodyRef {
            data: self.data(),
            error_messages: self.error_messages(),
            is_successful: self.is_successful(),
            status_code: self.status_code(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ServiceResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Body::<T>::deserialize(deserializer)?;

        if !body.is_successful {
            return Ok(Self::Failure(ServiceError {
                status_code: body.status_code.unwrap_or(DEFAULT_FAILURE_STATUS),
                error_messages: body.error_messages.unwrap_or_default(),
            }));
        }

        // `null` data is only valid for payloads that read from a unit value
        let data = match body.data {
            Some(data) => data,
            None => {
                let unit = <() as IntoDeserializer<'de, de::value::Error>>::into_deserializer(());
                T::deserialize(unit).map_err(|_| <D::Error as de::Error>::missing_field("data"))?
            }
        };

        Ok(Self::Success {
            data,
            status_code: body.status_code.unwrap_or(DEFAULT_SUCCESS_STATUS),
        })
    }
}
