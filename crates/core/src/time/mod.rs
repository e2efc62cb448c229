pub mod unix;

pub use unix::{
    format_local, format_local_millis, from_unix_millis, from_unix_seconds, parse_unix_seconds,
    TimestampError,
};
