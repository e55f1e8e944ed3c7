//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod create_message;

pub use create_message::{
    decode_create_message_json_response, decode_error_json_response,
    encode_create_message_form,
};
