//! Unit tests for session cookie loading

use super::*;

const GOOD_SWID: &str = "{12345678-90AB-CDEF-1234-567890ABCDEF}";
const GOOD_S2: &str = "AECpXk2Yt%2Bq9sL0mExampleCookieValue%3D";

fn env(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

#[cfg(test)]
mod swid_tests {
    use super::*;

    #[test]
    fn test_well_formed_swids_accepted() {
        for swid in [
            GOOD_SWID,
            "{00000000-0000-0000-0000-000000000000}",
            "{abcdef01-2345-6789-abcd-ef0123456789}",
            "{ABCDEF01-2345-6789-aBcD-Ef0123456789}",
        ] {
            assert!(Swid::is_well_formed(swid), "{swid} should be accepted");
            assert_eq!(swid.parse::<Swid>().unwrap().as_str(), swid);
        }
    }

    #[test]
    fn test_missing_braces_rejected() {
        for swid in [
            "12345678-90AB-CDEF-1234-567890ABCDEF",
            "{12345678-90AB-CDEF-1234-567890ABCDEF",
            "12345678-90AB-CDEF-1234-567890ABCDEF}",
            "(12345678-90AB-CDEF-1234-567890ABCDEF)",
        ] {
            match swid.parse::<Swid>() {
                Err(EspnError::MalformedCredential { env_var, reason }) => {
                    assert_eq!(env_var, SWID_ENV_VAR);
                    assert!(reason.contains("braces"), "unexpected reason: {reason}");
                }
                other => panic!("expected MalformedCredential for {swid}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_wrong_group_lengths_rejected() {
        for swid in [
            "{1234567-90AB-CDEF-1234-567890ABCDEF}",
            "{12345678-90AB-CDEF-1234-567890ABCDE}",
            "{12345678-90ABC-DEF-1234-567890ABCDEF}",
            "{12345678-90AB-CDEF-1234567890ABCDEF}",
            "{12345678-90AB-CDEF-1234-567890ABCDEF-0}",
            "{}",
        ] {
            match swid.parse::<Swid>() {
                Err(EspnError::MalformedCredential { reason, .. }) => {
                    assert!(reason.contains("8-4-4-4-12"), "unexpected reason: {reason}");
                }
                other => panic!("expected MalformedCredential for {swid}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_hex_rejected() {
        for swid in [
            "{1234567G-90AB-CDEF-1234-567890ABCDEF}",
            "{12345678-90AB-CDEF-1234-567890ABCDEZ}",
            "{12345678-90 B-CDEF-1234-567890ABCDEF}",
        ] {
            match swid.parse::<Swid>() {
                Err(EspnError::MalformedCredential { reason, .. }) => {
                    assert!(reason.contains("hexadecimal"), "unexpected reason: {reason}");
                }
                other => panic!("expected MalformedCredential for {swid}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert!(!Swid::is_well_formed(&format!(" {GOOD_SWID}")));
        assert!(!Swid::is_well_formed(&format!("{GOOD_SWID}\n")));
    }

    #[test]
    fn test_empty_swid_is_missing() {
        match "".parse::<Swid>() {
            Err(EspnError::MissingCredential { env_var }) => assert_eq!(env_var, SWID_ENV_VAR),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_error_does_not_echo_value() {
        let secret = "{not-a-real-swid-but-secret-looking-value}";
        let err = secret.parse::<Swid>().unwrap_err();
        assert!(!err.to_string().contains(secret));
        assert!(!format!("{err:?}").contains(secret));
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn test_private_league_returns_exact_values() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2), (SWID_ENV_VAR, GOOD_SWID)]);

        let creds = load_credentials(&env, LeagueAccess::Private)
            .unwrap()
            .expect("private league yields credentials");

        assert_eq!(creds.espn_s2.as_str(), GOOD_S2);
        assert_eq!(creds.swid.as_str(), GOOD_SWID);
    }

    #[test]
    fn test_private_league_missing_espn_s2() {
        let env = env(&[(SWID_ENV_VAR, GOOD_SWID)]);

        match load_credentials(&env, LeagueAccess::Private) {
            Err(EspnError::MissingCredential { env_var }) => assert_eq!(env_var, ESPN_S2_ENV_VAR),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_private_league_missing_swid() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2)]);

        match load_credentials(&env, LeagueAccess::Private) {
            Err(EspnError::MissingCredential { env_var }) => assert_eq!(env_var, SWID_ENV_VAR),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_private_league_empty_value_counts_as_missing() {
        let env = env(&[(ESPN_S2_ENV_VAR, "   "), (SWID_ENV_VAR, GOOD_SWID)]);

        match load_credentials(&env, LeagueAccess::Private) {
            Err(EspnError::MissingCredential { env_var }) => assert_eq!(env_var, ESPN_S2_ENV_VAR),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_private_league_malformed_swid() {
        let env = env(&[
            (ESPN_S2_ENV_VAR, GOOD_S2),
            (SWID_ENV_VAR, "12345678-90AB-CDEF-1234-567890ABCDEF"),
        ]);

        let err = load_credentials(&env, LeagueAccess::Private).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(SWID_ENV_VAR));
        assert!(!err.to_string().contains(GOOD_S2));
    }

    #[test]
    fn test_espn_s2_with_header_breaking_characters_rejected() {
        for (value, rule) in [
            ("AECp\ncookie", "control characters"),
            ("AECp\u{7f}x", "control characters"),
            ("AECp\r\nSet-Cookie: x", "control characters"),
            ("AECp; other=1", "';'"),
        ] {
            let env = env(&[(ESPN_S2_ENV_VAR, value), (SWID_ENV_VAR, GOOD_SWID)]);

            let err = load_credentials(&env, LeagueAccess::Private).unwrap_err();
            match &err {
                EspnError::MalformedCredential { env_var, reason } => {
                    assert_eq!(env_var, ESPN_S2_ENV_VAR);
                    assert!(reason.contains(rule), "unexpected reason: {reason}");
                }
                other => panic!("expected MalformedCredential for {value:?}, got {other:?}"),
            }
            assert!(err.is_configuration());
            assert!(err.to_string().contains(ESPN_S2_ENV_VAR));
            assert!(!err.to_string().contains(value));
            assert!(!format!("{err:?}").contains(value));
        }
    }

    #[test]
    fn test_espn_s2_accepted_values_build_a_cookie_header() {
        for value in [GOOD_S2, "AECp+with/slashes=and%25escapes", "AECp\twith-tab"] {
            let env = env(&[(ESPN_S2_ENV_VAR, value), (SWID_ENV_VAR, GOOD_SWID)]);

            let creds = load_credentials(&env, LeagueAccess::Private)
                .unwrap()
                .expect("private league yields credentials");
            assert!(creds.cookie_header().is_ok());
        }
    }

    #[test]
    fn test_public_league_without_cookies() {
        let env = env(&[]);
        assert!(load_credentials(&env, LeagueAccess::Public).unwrap().is_none());
    }

    #[test]
    fn test_public_league_uses_cookies_when_present() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2), (SWID_ENV_VAR, GOOD_SWID)]);
        let creds = load_credentials(&env, LeagueAccess::Public).unwrap();
        assert!(creds.is_some());
    }

    #[test]
    fn test_public_league_with_one_cookie_proceeds_unauthenticated() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2)]);
        assert!(load_credentials(&env, LeagueAccess::Public).unwrap().is_none());
    }

    #[test]
    fn test_public_league_still_rejects_malformed_swid() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2), (SWID_ENV_VAR, "{bad}")]);
        assert!(matches!(
            load_credentials(&env, LeagueAccess::Public),
            Err(EspnError::MalformedCredential { .. })
        ));
    }

    #[test]
    fn test_loading_twice_is_idempotent() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2), (SWID_ENV_VAR, GOOD_SWID)]);

        let first = load_credentials(&env, LeagueAccess::Private).unwrap();
        let second = load_credentials(&env, LeagueAccess::Private).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_string_map_env_source() {
        let mut env: HashMap<String, String> = HashMap::new();
        env.insert(ESPN_S2_ENV_VAR.to_string(), GOOD_S2.to_string());
        env.insert(SWID_ENV_VAR.to_string(), GOOD_SWID.to_string());

        let creds = Credentials::from_env(&env).unwrap();
        assert_eq!(creds.swid.as_str(), GOOD_SWID);
    }
}

#[cfg(test)]
mod redaction_tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new(GOOD_S2.parse().unwrap(), GOOD_SWID.parse().unwrap())
    }

    #[test]
    fn test_debug_output_redacts_values() {
        let debug = format!("{:?}", creds());
        assert!(!debug.contains(GOOD_S2));
        assert!(!debug.contains(GOOD_SWID));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_cookie_header_format() {
        let header = creds().cookie_header().unwrap();
        assert!(header.is_sensitive());
        assert_eq!(
            header.to_str().unwrap(),
            format!("SWID={GOOD_SWID}; espn_s2={GOOD_S2}")
        );
    }

    #[test]
    fn test_cookie_header_debug_is_redacted() {
        let header = creds().cookie_header().unwrap();
        assert!(!format!("{header:?}").contains(GOOD_S2));
    }

    #[test]
    fn test_cookie_status_reports_presence_only() {
        let env = env(&[(ESPN_S2_ENV_VAR, GOOD_S2)]);
        let status = CookieStatus::from_env(&env);

        assert!(status.espn_s2_set);
        assert!(!status.swid_set);
        assert_eq!(status.to_string(), "ESPN_S2 set: yes | SWID set: no");
        assert!(!status.to_string().contains(GOOD_S2));
    }

    #[test]
    fn test_cookie_status_whitespace_only_reports_unset() {
        let env = env(&[(ESPN_S2_ENV_VAR, "   "), (SWID_ENV_VAR, "\t")]);
        let status = CookieStatus::from_env(&env);

        assert!(!status.espn_s2_set);
        assert!(!status.swid_set);
        assert_eq!(status.to_string(), "ESPN_S2 set: no | SWID set: no");
    }
}
