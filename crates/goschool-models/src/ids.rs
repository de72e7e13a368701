//! Strongly-typed ID newtypes for the rows the tool touches.
//!
//! The backend uses `BIGINT UNSIGNED AUTO_INCREMENT` keys, so every id wraps
//! a `u64`. The newtypes keep a course id from being bound where a user id is
//! expected.
//!
//! # Example
//!
//! ```ignore
//! use goschool_models::ids::{CourseId, UserId};
//!
//! fn assign(course: CourseId, preceptor: UserId) { /* ... */ }
//!
//! assign(CourseId::new(34), UserId::new(3));
//! // assign(UserId::new(3), CourseId::new(34)); // Compile error! Type mismatch.
//! ```

use sqlx::mysql::{MySql, MySqlTypeInfo};
use sqlx::{Database, Decode, Encode, Type};
use std::fmt;

/// Defines a newtype wrapper around `u64` that binds and decodes like the
/// underlying integer.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u64);

        impl $name {
            #[inline]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl Type<MySql> for $name {
            fn type_info() -> MySqlTypeInfo {
                <u64 as Type<MySql>>::type_info()
            }

            fn compatible(ty: &MySqlTypeInfo) -> bool {
                <u64 as Type<MySql>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, MySql> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <u64 as Encode<'q, MySql>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, MySql> for $name {
            fn decode(
                value: <MySql as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <u64 as Decode<'r, MySql>>::decode(value).map(Self)
            }
        }
    };
}

define_id!(
    /// Id of a row in `users`.
    UserId
);

define_id!(
    /// Id of a row in `courses`.
    CourseId
);
