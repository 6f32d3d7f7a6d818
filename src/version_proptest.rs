//! Property-based tests for versions and artifact coordinates.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::artifact::ArtifactId;
    use crate::path::encode_url_path;
    use crate::version::Version;
    use proptest::prelude::*;

    // ============================================================================
    // Version property tests
    // ============================================================================

    proptest! {
        /// Property: lenient parsing never panics and is deterministic
        #[test]
        fn version_parse_is_deterministic(input in ".*") {
            prop_assert_eq!(Version::parse_lenient(&input), Version::parse_lenient(&input));
        }

        /// Property: numeric triples order like tuples
        #[test]
        fn version_orders_numerically(
            a in (0u64..1000, 0u64..1000, 0u64..1000),
            b in (0u64..1000, 0u64..1000, 0u64..1000),
        ) {
            let va = Version::parse_lenient(&format!("{}.{}.{}", a.0, a.1, a.2));
            let vb = Version::parse_lenient(&format!("{}.{}.{}", b.0, b.1, b.2));
            prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        }

        /// Property: a plain release sorts before the same version with a qualifier
        #[test]
        fn version_release_before_qualified(
            major in 0u64..100,
            minor in 0u64..100,
            qualifier in "[A-Za-z][A-Za-z0-9]{0,8}",
        ) {
            let release = Version::parse_lenient(&format!("{}.{}", major, minor));
            let qualified = Version::parse_lenient(&format!("{}.{}-{}", major, minor, qualifier));
            prop_assert!(release < qualified);
        }
    }

    // ============================================================================
    // ArtifactId property tests
    // ============================================================================

    fn segment() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9.\\-]{0,12}"
    }

    proptest! {
        /// Property: the colon form parses back to the same coordinate
        #[test]
        fn artifact_id_display_parses_back(
            group in segment(),
            artifact in segment(),
            version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,2}",
            r#type in prop::option::of(segment()),
            classifier in prop::option::of(segment()),
        ) {
            let mut id = ArtifactId::new(&group, &artifact, &version);
            if let Some(t) = &r#type {
                id = id.with_type(t);
            }
            if let Some(c) = &classifier {
                id = id.with_classifier(c);
            }
            prop_assert_eq!(ArtifactId::parse(&id.to_string()).unwrap(), id.clone());
            prop_assert_eq!(ArtifactId::parse(&id.to_mvn_url()).unwrap(), id);
        }

        /// Property: encode_url_path never produces path separators
        #[test]
        fn encode_url_path_is_a_single_component(input in ".*") {
            let result = encode_url_path(&input);
            prop_assert!(!result.contains('/'));
            prop_assert!(!result.contains('\\'));
        }
    }
}
