//! Lenient integer parsing of request query parameters.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::num::IntErrorKind;

use crate::error::CoreError;

/// Read-only access to raw query-string values by name.
///
/// Implemented for `HashMap<String, String>` (what
/// `axum::extract::Query<HashMap<String, String>>` produces) and for
/// slices of key/value pairs, where the last occurrence of a key wins.
pub trait ParamSource {
    fn get(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> ParamSource for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ParamSource for [(K, V)] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .rev()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn get(&self, name: &str) -> Option<&str> {
        (**self).get(name)
    }
}

/// A source with no parameters, for callers outside a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl ParamSource for NoParams {
    fn get(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Read an integer query parameter.
///
/// Accepts an optional sign and surrounding whitespace; decimals are not
/// integers. Values beyond the `i64` range saturate. A missing parameter
/// yields `default`. A malformed one yields `default` as well, unless
/// `raise_on_value_error` is set, in which case
/// [`CoreError::InvalidParameter`] is returned.
pub fn get_int<P: ParamSource + ?Sized>(
    params: &P,
    name: &str,
    default: i64,
    raise_on_value_error: bool,
) -> Result<i64, CoreError> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) if raise_on_value_error => Err(CoreError::InvalidParameter {
            name: name.to_string(),
            value: raw.to_string(),
        }),
        Err(_) => {
            tracing::debug!(param = name, value = raw, default, "Malformed integer parameter, using default");
            Ok(default)
        }
    }
}
