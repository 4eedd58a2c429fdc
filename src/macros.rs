//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates an `Err(CompileError)`

/// Creates a Token instance.
///
/// The four-argument form builds a token with no literal type or keyword;
/// the optional named arguments fill those in.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Literal, "42".to_string(), location, 0, data_type: Some(DataType::Int));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $location:expr, $level:expr) => {
        Token {
            kind: $kind,
            value: $value,
            location: $location,
            scope_level: $level,
            data_type: None,
            keyword: None,
        }
    };
    ($kind:expr, $value:expr, $location:expr, $level:expr, data_type: $data_type:expr) => {
        Token {
            kind: $kind,
            value: $value,
            location: $location,
            scope_level: $level,
            data_type: $data_type,
            keyword: None,
        }
    };
    ($kind:expr, $value:expr, $location:expr, $level:expr, keyword: $keyword:expr) => {
        Token {
            kind: $kind,
            value: $value,
            location: $location,
            scope_level: $level,
            data_type: None,
            keyword: $keyword,
        }
    };
}

/// Creates an `Err(CompileError)` from an `ErrorImpl` variant and a location.
///
/// # Example
///
/// ```ignore
/// return MK_ERROR!(ErrorImpl::TypeMismatch, node_location.clone());
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error:expr, $location:expr) => {
        Err($crate::errors::errors::CompileError::new($error, $location))
    };
}
