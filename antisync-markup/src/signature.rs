//! Content signature
//!
//!     The signature is an MD5 digest fed by a depth-first walk of a JSON value. Object members
//!     are visited in ascending key order regardless of how the object was built; array elements
//!     are visited in order. Only scalar values reach the digest, keys never do.
//!
//!     The remote side computes the same digest, so the scalar encoding below is part of the
//!     contract: strings as-is, numbers in their JSON form, booleans as `true`/`false`, and null
//!     as the empty string.

use md5::{Digest, Md5};
use serde_json::Value;

/// Hex-encoded signature of `value`.
pub fn signature(value: &Value) -> String {
    let mut hasher = Md5::new();
    feed(value, &mut hasher);
    hex::encode(hasher.finalize())
}

fn feed(value: &Value, hasher: &mut Md5) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                feed(&map[key], hasher);
            }
        }
        Value::Array(items) => {
            for item in items {
                feed(item, hasher);
            }
        }
        Value::String(text) => hasher.update(text.as_bytes()),
        Value::Number(number) => hasher.update(number.to_string().as_bytes()),
        Value::Bool(flag) => hasher.update(flag.to_string().as_bytes()),
        Value::Null => {}
    }
}
