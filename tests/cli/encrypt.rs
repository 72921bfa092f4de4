//! Tests for single-secret encryption in its three destinations.

use crate::support::*;

#[test]
fn test_password_written_into_empty_file() {
    let t = Test::with_yml("");

    let output = t.encrypt(&[".travis.yml", "--password", "SUPER_SECURE_PASSWORD"]);
    assert_success(&output);

    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["password"]);
    assert_eq!(
        decrypt_fixture(&secure_at(&document, &["password"])),
        "SUPER_SECURE_PASSWORD"
    );
}

#[test]
fn test_password_creates_file_when_absent() {
    let t = Test::new();

    let output = t.encrypt(&[".travis.yml", "--password", "pw"]);
    assert_success(&output);

    assert!(t.yml_path().exists());
    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["password"]);
}

#[test]
fn test_password_overwrite_preserves_key_order() {
    let t = Test::with_yml("language: python\ndist: trusty\npassword:\n  secure: OLD\n");

    let output = t.encrypt(&[".travis.yml", "--password", "fresh"]);
    assert_success(&output);

    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["language", "dist", "password"]);
    let secure = secure_at(&document, &["password"]);
    assert_ne!(secure, "OLD");
    assert_eq!(decrypt_fixture(&secure), "fresh");
}

#[test]
fn test_unrelated_keys_and_sequences_survive() {
    let t = Test::with_yml("language: python\nsudo: false\nscript:\n- pytest\n- flake8\n");

    let output = t.encrypt(&[".travis.yml", "--password", "pw"]);
    assert_success(&output);

    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["language", "sudo", "script"]);
    let script = lookup(&document, &["script"]).unwrap().as_sequence().unwrap();
    assert_eq!(script[0].as_str(), Some("pytest"));
    assert_eq!(script[1].as_str(), Some("flake8"));
}

#[test]
fn test_unrelated_u64_range_value_survives_verbatim() {
    let t = Test::with_yml("language: python\ncache_id: 18446744073709551615\n");

    let output = t.encrypt(&[".travis.yml", "--password", "pw"]);
    assert_success(&output);

    let content = t.read_yml();
    assert!(
        content.contains("cache_id: 18446744073709551615"),
        "value was rewritten: {}",
        content
    );
    assert_eq!(top_keys(&decode(&content)), vec!["language", "cache_id", "password"]);
}

#[test]
fn test_deploy_password_placed_under_deploy() {
    let t = Test::with_yml("language: python\ndeploy:\n  provider: pypi\n");

    let output = t.encrypt(&[".travis.yml", "--password", "deploy-pw", "--deploy"]);
    assert_success(&output);

    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["language", "deploy"]);
    assert_eq!(
        decrypt_fixture(&secure_at(&document, &["deploy", "password"])),
        "deploy-pw"
    );
    let deploy = lookup(&document, &["deploy"]).unwrap().as_mapping().unwrap();
    assert_eq!(deploy.get("provider").unwrap().as_str(), Some("pypi"));
}

#[test]
fn test_env_global_mapping_secure_overwritten() {
    let t = Test::with_yml("language: python\nenv:\n  global:\n    secure: OLD\n");

    let output = t.encrypt(&[".travis.yml", "--password", "env-pw", "--env"]);
    assert_success(&output);

    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["language", "env"]);
    assert_eq!(
        decrypt_fixture(&secure_at(&document, &["env", "global"])),
        "env-pw"
    );
}

#[test]
fn test_env_global_sequence_keeps_plain_entries_in_place() {
    let t = Test::with_yml(concat!(
        "language: python\n",
        "env:\n",
        "  global:\n",
        "  - SOMETHING=1\n",
        "  - OR_ANOTHER=2\n",
        "  - secure: OLD\n",
    ));

    let output = t.encrypt(&[".travis.yml", "--password", "pw", "--env"]);
    assert_success(&output);

    let document = decode(&t.read_yml());
    let global = lookup(&document, &["env", "global"])
        .unwrap()
        .as_sequence()
        .unwrap();
    assert_eq!(global.len(), 3);
    assert_eq!(global[0].as_str(), Some("SOMETHING=1"));
    assert_eq!(global[1].as_str(), Some("OR_ANOTHER=2"));

    let entry = global[2].as_mapping().unwrap();
    let secure = entry.get("secure").unwrap().as_str().unwrap();
    assert_eq!(decrypt_fixture(secure), "pw");
}

#[test]
fn test_second_run_keeps_structure_stable() {
    let t = Test::with_yml("language: python\n");

    assert_success(&t.encrypt(&[".travis.yml", "--password", "one", "--deploy"]));
    assert_success(&t.encrypt(&[".travis.yml", "--password", "two", "--deploy"]));

    let document = decode(&t.read_yml());
    assert_eq!(top_keys(&document), vec!["language", "deploy"]);
    assert_eq!(
        decrypt_fixture(&secure_at(&document, &["deploy", "password"])),
        "two"
    );
}

#[test]
fn test_snippet_printed_when_no_path_given() {
    let t = Test::new();

    let output = t.encrypt(&["--password", "pw"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Please add the following to your .travis.yml:");
    assert_stdout_contains(&output, "secure:");

    // The snippet's ciphertext decrypts back to the password
    let out = stdout(&output);
    let ciphertext = out
        .split_whitespace()
        .last()
        .expect("snippet should end with the ciphertext");
    assert_eq!(decrypt_fixture(ciphertext), "pw");
}

#[test]
fn test_password_read_from_piped_stdin() {
    let t = Test::with_yml("");

    let output = t.encrypt_with_stdin(&[".travis.yml"], "piped-secret\n");
    assert_success(&output);

    let document = decode(&t.read_yml());
    assert_eq!(
        decrypt_fixture(&secure_at(&document, &["password"])),
        "piped-secret"
    );
}

#[test]
fn test_written_file_stays_parseable_and_idempotent() {
    let t = Test::with_yml("language: python\ndist: trusty\n");

    assert_success(&t.encrypt(&[".travis.yml", "--password", "pw", "--env"]));
    let first = t.read_yml();

    // Loading and re-rendering the merged file must not shuffle anything
    let document = decode(&first);
    assert_eq!(top_keys(&document), vec!["language", "dist", "env"]);
}
