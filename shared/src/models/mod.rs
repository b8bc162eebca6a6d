//! Data models
//!
//! Record types for the four back-office pages and the drafts that feed
//! their add/edit forms. Enum values serialize as their display labels
//! (`"On Leave"`, `"Main Course"`, `"In Progress"`).

/// Declares a closed enum whose variants carry a display label.
///
/// Generates `ALL`, `LABELS`, `as_str`, `Display` and a case-insensitive
/// `FromStr` that rejects unknown labels with an `InvalidChoice` error.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every variant, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Every display label, in display order
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// Display label
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::AppError::invalid_choice($field, s))
            }
        }
    };
}

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod staff;

// Re-exports
pub use customer::*;
pub use menu_item::*;
pub use order::*;
pub use staff::*;
