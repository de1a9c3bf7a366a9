// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Refining free-form strings into fixed literal sets.
//!
//! Two flavours. [`refine`] checks a string against a slice of allowed literals
//! and hands back the matching member. [`refine_literal`] does the same against
//! an enum declared with [`literal_union!`], so the result carries its domain in
//! the type.
//!
//! Matching is exact byte equality. No trimming, no case folding.
//!
//! ```
//! use narrow::{refine, refine_literal, EventName};
//!
//! const EVENTS: &[&str] = &["site_subscription_created", "site_subscription_deleted"];
//! assert_eq!(refine(Some("site_subscription_created"), EVENTS), Some(EVENTS[0]));
//! assert_eq!(refine(Some(""), EVENTS), None);
//!
//! assert_eq!(
//!     refine_literal::<EventName>(Some("site_subscription_deleted")),
//!     Some(EventName::SiteSubscriptionDeleted),
//! );
//! ```

use crate::contracts::check_distinct_literals;

/// Return the allowed member equal to `value`, or `None` when there is none.
///
/// A missing candidate never matches.
pub fn refine<'a>(value: Option<&str>, allowed: &[&'a str]) -> Option<&'a str> {
    let value = value?;
    allowed.iter().copied().find(|member| *member == value)
}

/// An enum whose variants each stand for one string literal.
///
/// Implemented by [`literal_union!`]; hand-written impls must keep `as_str`
/// injective over `VARIANTS`.
pub trait LiteralUnion: Copy + Eq + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The literal this variant stands for.
    fn as_str(&self) -> &'static str;

    /// All literals, in declaration order.
    fn literals() -> impl Iterator<Item = &'static str> {
        Self::VARIANTS.iter().map(|v| v.as_str())
    }
}

/// Refine `value` into the literal union `T`.
pub fn refine_literal<T: LiteralUnion>(value: Option<&str>) -> Option<T> {
    let value = value?;
    check_distinct_literals(T::literals());
    T::VARIANTS.iter().copied().find(|v| v.as_str() == value)
}

/// Declare an enum of string literals implementing [`LiteralUnion`].
///
/// The enum also gets `Display`, `AsRef<str>` and serde impls that read and
/// write the literal itself.
///
/// ```
/// narrow::literal_union! {
///     pub enum Language {
///         En = "en",
///         Fr = "fr",
///     }
/// }
///
/// assert_eq!(Language::Fr.to_string(), "fr");
/// assert_eq!(narrow::refine_literal::<Language>(Some("en")), Some(Language::En));
/// ```
#[macro_export]
macro_rules! literal_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::LiteralUnion for $name {
            const VARIANTS: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $literal ),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as $crate::LiteralUnion>::as_str(self))
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                <Self as $crate::LiteralUnion>::as_str(self)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(<Self as $crate::LiteralUnion>::as_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                use $crate::__private::serde::Deserialize as _;
                let raw = ::std::string::String::deserialize(deserializer)?;
                let candidate = ::core::option::Option::Some(raw.as_str());
                $crate::refine_literal::<Self>(candidate).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::unknown_variant(
                        &raw,
                        &[ $( $literal ),+ ],
                    )
                })
            }
        }
    };
}

literal_union! {
    /// Site subscription lifecycle events.
    pub enum EventName {
        SiteSubscriptionCreated = "site_subscription_created",
        SiteSubscriptionDeleted = "site_subscription_deleted",
    }
}
