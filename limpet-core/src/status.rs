use thiserror::Error;

/// Numeric code reported by a successful operation.
pub const STATUS_OK: i32 = 0;

/// Outcome taxonomy for list operations.
///
/// Positive codes are hard errors: a violated precondition or a resource
/// failure. Negative codes are warnings: a benign, expected edge case the
/// caller must be able to tell apart from "operation failed". The only
/// warning today is [`ListError::EmptyList`] ("nothing to do").
///
/// Every fallible operation reports its outcome through `Result`; an
/// operation that cannot complete leaves the chain exactly as it was.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// The caller's list handle is already absent.
    #[error("list reference is null")]
    NullPointer,

    /// Allocation failure. Unreachable on the default allocator (a failed
    /// `Box` allocation aborts), kept so the numeric code table stays
    /// complete for callers that persist codes.
    #[error("memory allocation failed")]
    MemAlloc,

    /// Index past the end of the list.
    #[error("index out of bound")]
    IndexOutOfBound,

    /// A scan that required a match reached the end without one.
    #[error("no element satisfied the predicate")]
    PredicateFailed,

    /// Warning: the list holds no elements, the operation had nothing to do.
    #[error("list is empty")]
    EmptyList,
}

impl ListError {
    /// Stable numeric code for this outcome.
    pub fn code(&self) -> i32 {
        match self {
            ListError::NullPointer => 1,
            ListError::MemAlloc => 2,
            ListError::IndexOutOfBound => 3,
            ListError::PredicateFailed => 4,
            ListError::EmptyList => -1,
        }
    }

    /// Warnings carry negative codes and leave the list valid and usable.
    pub fn is_warning(&self) -> bool {
        self.code() < 0
    }

    /// Inverse of [`ListError::code`]. `None` for `STATUS_OK` and for
    /// codes outside the table.
    pub fn from_code(code: i32) -> Option<ListError> {
        match code {
            1 => Some(ListError::NullPointer),
            2 => Some(ListError::MemAlloc),
            3 => Some(ListError::IndexOutOfBound),
            4 => Some(ListError::PredicateFailed),
            -1 => Some(ListError::EmptyList),
            _ => None,
        }
    }
}

/// Human-readable rendering of a numeric status code.
///
/// Covers `STATUS_OK` as well as every [`ListError`] code; anything else
/// renders as `"unknown status code"`.
pub fn describe(code: i32) -> &'static str {
    match code {
        STATUS_OK => "ok",
        1 => "list reference is null",
        2 => "memory allocation failed",
        3 => "index out of bound",
        4 => "no element satisfied the predicate",
        -1 => "list is empty",
        _ => "unknown status code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for err in [
            ListError::NullPointer,
            ListError::MemAlloc,
            ListError::IndexOutOfBound,
            ListError::PredicateFailed,
            ListError::EmptyList,
        ] {
            assert_eq!(ListError::from_code(err.code()), Some(err));
        }
        assert_eq!(ListError::from_code(STATUS_OK), None);
        assert_eq!(ListError::from_code(99), None);
    }

    #[test]
    fn test_warning_classification() {
        assert!(ListError::EmptyList.is_warning());
        assert!(!ListError::NullPointer.is_warning());
        assert!(!ListError::IndexOutOfBound.is_warning());
        assert!(!ListError::PredicateFailed.is_warning());
    }

    #[test]
    fn test_describe_known_and_unknown() {
        assert_eq!(describe(STATUS_OK), "ok");
        assert_eq!(describe(3), "index out of bound");
        assert_eq!(describe(-1), "list is empty");
        assert_eq!(describe(42), "unknown status code");
    }

    #[test]
    fn test_display_matches_describe() {
        assert_eq!(
            ListError::PredicateFailed.to_string(),
            describe(ListError::PredicateFailed.code())
        );
    }
}
