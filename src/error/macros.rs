//! Error macros for graphkit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphkitError::invalid_value($context, $value))
    };
}

/// Macro for positional access beyond the current length
#[macro_export]
macro_rules! bail_out_of_range {
    ($index:expr, $len:expr) => {
        return Err($crate::error::GraphkitError::IndexOutOfRange {
            index: $index,
            len: $len,
        })
    };
}
