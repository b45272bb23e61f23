//! Identifier types for routes, directions and stops.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing an identifier from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

/// Defines an opaque, non-empty string identifier.
///
/// NexTrip identifiers are opaque: route ids look like `"901"`, direction
/// ids like `"0"`, stop codes like `"MAAM"`. The only thing we check is
/// that they are non-empty, which is what lets `""` mean "nothing chosen"
/// at the form boundary.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            ///
            /// Returns an error if the string is empty.
            pub fn new(s: impl Into<String>) -> Result<Self, InvalidId> {
                let s = s.into();
                if s.is_empty() {
                    return Err(InvalidId {
                        kind: $kind,
                        reason: "cannot be empty",
                    });
                }
                Ok(Self(s))
            }

            /// Parse an optional identifier from a form value.
            ///
            /// Surrounding whitespace is ignored; a blank value means "none".
            pub fn parse_optional(s: &str) -> Option<Self> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// A NexTrip route identifier, e.g. `"901"` for the METRO Blue Line.
    RouteId,
    "route id"
);

string_id!(
    /// A direction identifier, scoped to one route (usually `"0"` or `"1"`).
    DirectionId,
    "direction id"
);

string_id!(
    /// A stop's place code, scoped to one (route, direction) pair.
    ///
    /// ```
    /// use nextrip_server::domain::StopCode;
    ///
    /// let stop = StopCode::new("MAAM").unwrap();
    /// assert_eq!(stop.as_str(), "MAAM");
    ///
    /// // Empty strings are rejected
    /// assert!(StopCode::new("").is_err());
    /// ```
    StopCode,
    "stop code"
);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is accepted and returned unchanged
        #[test]
        fn roundtrip(s in ".{1,20}") {
            let id = RouteId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Whitespace-only form values never produce an id
        #[test]
        fn blank_form_values_are_none(s in "[ \t]{0,8}") {
            prop_assert!(StopCode::parse_optional(&s).is_none());
        }
    }
}
