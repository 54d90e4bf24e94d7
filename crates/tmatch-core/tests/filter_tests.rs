//! Integration tests for match-criteria assembly

use tmatch_core::{
    AddrFamily, ConflictKind, Error, FilterConfig, MatchSpec, NetAddr, NetmaskPair, RoleFlags,
};

fn spec_with_src(tokens: &[&str]) -> MatchSpec {
    MatchSpec {
        src: tokens.iter().map(|s| s.to_string()).collect(),
        ..MatchSpec::default()
    }
}

#[test]
fn test_empty_invocation_is_maximally_permissive() {
    let config = FilterConfig::assemble(&MatchSpec::default()).unwrap();

    assert!(config.either.is_empty());
    assert!(config.src.is_empty());
    assert!(config.dst.is_empty());
    assert_eq!(config.flags, RoleFlags::empty());
    // Full host masks when no width was requested
    assert_eq!(config.masks.v4, [0xff; 4]);
    assert_eq!(config.masks.v6, [0xff; 16]);
}

#[test]
fn test_full_pipeline() {
    let spec = MatchSpec {
        src: vec!["10.0.0.1@80".into(), "10.0.0.2@81".into()],
        dst: vec!["@443".into()],
        msk4: 24,
        msk6: 64,
        ..MatchSpec::default()
    };

    let config = FilterConfig::assemble(&spec).unwrap();

    assert_eq!(config.src.len(), 2);
    assert_eq!(config.src[0].to_string(), "10.0.0.1@80");
    assert_eq!(config.src[1].to_string(), "10.0.0.2@81");
    assert_eq!(config.dst.len(), 1);
    assert_eq!(config.masks.v4, [0xff, 0xff, 0xff, 0x00]);
    assert_eq!(&config.masks.v6[..8], &[0xff; 8]);
    assert_eq!(
        config.flags,
        RoleFlags::SRC_ADDR | RoleFlags::SRC_PORT | RoleFlags::DST_PORT
    );
}

#[test]
fn test_host_exclusive_with_src_dst() {
    let spec = MatchSpec {
        host: vec!["10.0.0.1".into()],
        src: vec!["10.0.0.2".into()],
        ..MatchSpec::default()
    };

    assert!(matches!(
        FilterConfig::assemble(&spec),
        Err(Error::ExclusiveRoles)
    ));
}

#[test]
fn test_host_role_sets_either_flags() {
    let spec = MatchSpec {
        host: vec!["192.168.1.1".into(), "192.168.1.2".into()],
        ..MatchSpec::default()
    };

    let config = FilterConfig::assemble(&spec).unwrap();
    assert_eq!(config.either.len(), 2);
    assert_eq!(config.flags, RoleFlags::EITHER_ADDR);
}

#[test]
fn test_conflict_reports_offending_token() {
    let spec = spec_with_src(&["10.0.0.1@80", "@81"]);

    match FilterConfig::assemble(&spec) {
        Err(Error::ListConflict { kind, token }) => {
            assert_eq!(kind, ConflictKind::MissingIp);
            assert_eq!(token, "@81");
        }
        other => panic!("expected list conflict, got {other:?}"),
    }
}

#[test]
fn test_invalid_token_reports_verbatim() {
    match FilterConfig::assemble(&spec_with_src(&["8080"])) {
        Err(Error::InvalidAddrToken { token }) => assert_eq!(token, "8080"),
        other => panic!("expected invalid token, got {other:?}"),
    }
}

#[test]
fn test_narrow_v4_mask_rejected() {
    let spec = MatchSpec {
        msk4: 4,
        ..MatchSpec::default()
    };

    match FilterConfig::assemble(&spec) {
        Err(Error::InvalidMaskWidth { family, width }) => {
            assert_eq!(family, AddrFamily::V4);
            assert_eq!(width, 4);
        }
        other => panic!("expected mask width error, got {other:?}"),
    }
}

#[test]
fn test_oversized_widths_clamp() {
    let spec = MatchSpec {
        msk4: 33,
        msk6: 200,
        ..MatchSpec::default()
    };

    let config = FilterConfig::assemble(&spec).unwrap();
    assert_eq!(config.masks, NetmaskPair::default());
}

#[test]
fn test_assemble_has_no_hidden_state() {
    let spec = MatchSpec {
        dst: vec!["::1@53".into()],
        msk6: 96,
        ..MatchSpec::default()
    };

    let first = FilterConfig::assemble(&spec).unwrap();
    for _ in 0..3 {
        assert_eq!(FilterConfig::assemble(&spec).unwrap(), first);
    }
}

#[test]
fn test_spec_file_roundtrip() {
    let spec = MatchSpec {
        dst: vec!["10.1.2.3@8443".into()],
        msk4: 16,
        ..MatchSpec::default()
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match.toml");
    std::fs::write(&path, spec.to_toml().unwrap()).unwrap();

    let loaded = MatchSpec::load(&path).unwrap();
    assert_eq!(loaded, spec);
    assert_eq!(
        FilterConfig::assemble(&loaded).unwrap(),
        FilterConfig::assemble(&spec).unwrap()
    );
}

#[test]
fn test_spec_file_missing() {
    match MatchSpec::load("/nonexistent/match.toml") {
        Err(Error::SpecNotFound { path }) => assert!(path.contains("match.toml")),
        other => panic!("expected spec-not-found, got {other:?}"),
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn valid_v4_widths_set_leading_bits(width in 8u32..=32) {
            let mask = tmatch_core::filter::netmask::v4(width).unwrap();
            let bits = u32::from_be_bytes(mask);
            prop_assert_eq!(bits.leading_ones(), width);
            prop_assert_eq!(bits.trailing_zeros(), 32 - width);
        }

        #[test]
        fn valid_v6_widths_set_leading_bits(width in 64u32..=128) {
            let mask = tmatch_core::filter::netmask::v6(width).unwrap();
            let bits = u128::from_be_bytes(mask);
            prop_assert_eq!(bits.leading_ones(), width);
        }

        #[test]
        fn ip_port_tokens_roundtrip(a in 0u8..=255, b in 0u8..=255, port in 0u16..=65535) {
            let token = format!("10.{a}.{b}.1@{port}");
            let na: NetAddr = token.parse().unwrap();
            prop_assert_eq!(na.port, Some(port));
            prop_assert_eq!(na.to_string(), token);
        }

        #[test]
        fn bare_words_never_parse(word in "[a-z0-9]{1,12}") {
            // No '@', '.' or ':' anywhere: the grammar rejects it unless empty.
            prop_assert!(word.parse::<NetAddr>().is_err());
        }
    }
}
