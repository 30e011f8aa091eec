pub use std::collections::BTreeMap;

// Build a string-to-string map inline, labels!("env" => "production") syntax;
// also used for node selectors and annotations, which have the same shape
#[macro_export]
macro_rules! labels {
    ($($key:expr => $val:expr),+$(,)?) => {
        $crate::macros::BTreeMap::from([$(($key.to_string(), $val.to_string())),+])
    };
}

pub use labels;
