//! Literal-union refinement properties.

use super::common::EVENTS;
use narrow::{refine, refine_literal, EventName, LiteralUnion};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C ]{0,3}").unwrap()
}

fn allowed_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..6)
}

proptest! {
    /// Property: refining twice is the same as refining once.
    #[test]
    fn prop_refine_is_idempotent(
        allowed in allowed_strategy(),
        candidate in prop::option::of(word_strategy()),
    ) {
        let allowed: Vec<&str> = allowed.iter().map(String::as_str).collect();
        let once = refine(candidate.as_deref(), &allowed);
        prop_assert_eq!(refine(once, &allowed), once);
    }

    /// Property: the result is the candidate exactly when it is a member.
    #[test]
    fn prop_refine_is_exact_membership(
        allowed in allowed_strategy(),
        candidate in word_strategy(),
    ) {
        let allowed: Vec<&str> = allowed.iter().map(String::as_str).collect();
        let refined = refine(Some(candidate.as_str()), &allowed);

        if allowed.contains(&candidate.as_str()) {
            prop_assert_eq!(refined, Some(candidate.as_str()));
        } else {
            prop_assert_eq!(refined, None);
        }
    }

    /// Property: every member of the set refines to itself.
    #[test]
    fn prop_members_refine_to_themselves(
        allowed in prop::collection::vec(word_strategy(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let allowed: Vec<&str> = allowed.iter().map(String::as_str).collect();
        let member = *pick.get(&allowed);
        prop_assert_eq!(refine(Some(member), &allowed), Some(member));
    }

    /// Property: enum refinement agrees with slice refinement over its literals.
    #[test]
    fn prop_refine_literal_agrees_with_refine(
        candidate in prop_oneof![
            prop::sample::select(EVENTS.to_vec()).prop_map(str::to_string),
            prop::string::string_regex("[a-z_]{0,28}").unwrap(),
        ],
    ) {
        let via_enum = refine_literal::<EventName>(Some(candidate.as_str())).map(|e| e.as_str());
        prop_assert_eq!(via_enum, refine(Some(candidate.as_str()), EVENTS));
    }
}
