//! Property tests for the fallback chain and the definitions file parser

use proptest::prelude::*;
use shopkeys_core::{SecretName, SecretSource};
use shopkeys_secrets::{EnvFile, FixedEnvironment, ResolverConfig, SecretResolver};
use std::path::PathBuf;

const ENV_FILE: &str = "/repo/.env";

fn resolver(environment: FixedEnvironment) -> SecretResolver {
    SecretResolver::with_environment(
        Box::new(environment.with_current_dir("/repo/android/app")),
        ResolverConfig::default(),
    )
}

fn secret_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}"
}

/// Values without line terminators, possibly padded and containing `=`
fn line_value() -> impl Strategy<Value = String> {
    "[ \t]{0,2}[a-zA-Z0-9=+/_ -]{0,24}[ \t]{0,2}"
}

fn non_blank() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-zA-Z0-9=+/_-]{1,24}[ ]{0,2}"
}

/// Arbitrary file lines that never start with a valid assignment prefix
fn noise_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("# comment".to_string()),
        "[a-z ]{0,12}",
        "[a-z_]{1,8}=[a-z]{0,8}",
        " [A-Z_]{1,8}=[a-z]{0,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn non_blank_environment_always_wins(
        name in secret_name(),
        env_value in non_blank(),
        file_value in line_value(),
    ) {
        let environment = FixedEnvironment::new()
            .with_var(name.clone(), env_value.clone())
            .with_file(ENV_FILE, format!("{name}={file_value}\n"));
        let secret = resolver(environment).resolve(&SecretName::new(name).unwrap());

        prop_assert_eq!(secret.value().expose(), env_value.as_str());
        prop_assert_eq!(secret.source(), &SecretSource::Environment);
    }

    #[test]
    fn blank_or_unset_environment_uses_first_file_match(
        name in secret_name(),
        blank in prop::option::of("[ \t]{0,3}"),
        before in prop::collection::vec(noise_line(), 0..5),
        first in line_value(),
        second in line_value(),
        after in prop::collection::vec(noise_line(), 0..5),
    ) {
        let mut lines = before.clone();
        lines.push(format!("{name}={first}"));
        lines.extend(after.iter().cloned());
        lines.push(format!("{name}={second}"));
        let contents = lines.join("\n");

        let mut environment = FixedEnvironment::new().with_file(ENV_FILE, contents);
        if let Some(blank) = blank {
            environment = environment.with_var(name.clone(), blank);
        }
        let secret = resolver(environment).resolve(&SecretName::new(name).unwrap());

        prop_assert_eq!(secret.value().expose(), first.trim());
        prop_assert_eq!(
            secret.source(),
            &SecretSource::File { path: PathBuf::from(ENV_FILE) }
        );
    }

    #[test]
    fn missing_name_resolves_to_empty(
        name in secret_name(),
        lines in prop::collection::vec(noise_line(), 0..8),
        with_file in any::<bool>(),
    ) {
        let mut environment = FixedEnvironment::new();
        if with_file {
            environment = environment.with_file(ENV_FILE, lines.join("\n"));
        }
        let secret = resolver(environment).resolve(&SecretName::new(name).unwrap());

        prop_assert_eq!(secret.value().expose(), "");
        prop_assert_eq!(secret.source(), &SecretSource::Absent);
    }

    #[test]
    fn find_agrees_with_parse(
        name in secret_name(),
        contents in "[A-Z_=a-z \t\r\n]{0,80}",
    ) {
        let name = SecretName::new(name).unwrap();
        let scanned = EnvFile::find(&contents, &name);
        let parsed = EnvFile::parse(&contents);
        prop_assert_eq!(scanned.as_deref(), parsed.get(name.as_str()));
    }

    #[test]
    fn resolution_is_deterministic(
        name in secret_name(),
        env_value in prop::option::of(line_value()),
        contents in "[A-Z_=a-z0-9 \n]{0,80}",
    ) {
        let mut environment = FixedEnvironment::new().with_file(ENV_FILE, contents);
        if let Some(value) = env_value {
            environment = environment.with_var(name.clone(), value);
        }
        let resolver = resolver(environment);
        let name = SecretName::new(name).unwrap();

        prop_assert_eq!(resolver.resolve(&name), resolver.resolve(&name));
    }
}
