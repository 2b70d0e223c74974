//! Integration test: differential verification against host libc.
//!
//! Validates that every parity-eligible corpus case renders byte-for-byte
//! the same through bootfmt and through the host `snprintf`, and that the
//! returned lengths agree. Unix only; non-parity cases (dialect quirks) are
//! asserted to be skipped by the host dispatch, not silently compared.
//!
//! Run: cargo test -p bootfmt-harness --test host_parity_test

#![cfg(unix)]

use bootfmt_core::sprintf;
use bootfmt_harness::builtin_corpus;
use bootfmt_harness::host::host_render;

#[test]
fn parity_cases_match_host_snprintf() {
    let corpus = builtin_corpus();
    let mut compared = 0;

    for fixture in &corpus.cases {
        let Some(host) = host_render(fixture) else {
            continue;
        };

        let mut buf = [0u8; 512];
        let args = fixture.engine_args();
        let n = sprintf(&mut buf, fixture.template.as_bytes(), &args)
            .unwrap_or_else(|e| panic!("case {}: engine error {e}", fixture.name));
        let ours = String::from_utf8_lossy(&buf[..n]).into_owned();

        assert_eq!(
            ours, host.output,
            "case {}: bootfmt and host diverge",
            fixture.name
        );
        assert_eq!(
            n,
            usize::try_from(host.len).expect("host length is non-negative"),
            "case {}: returned lengths diverge",
            fixture.name
        );
        compared += 1;
    }

    assert!(
        compared >= 20,
        "expected a substantial parity battery, compared only {compared}"
    );
}

#[test]
fn parity_cases_also_match_authored_expectations() {
    // Host agreement without corpus agreement would mean the authored
    // expectation is wrong, not the engine.
    for fixture in &builtin_corpus().cases {
        let Some(host) = host_render(fixture) else {
            continue;
        };
        assert_eq!(
            host.output, fixture.expected,
            "case {}: authored expectation disagrees with host",
            fixture.name
        );
    }
}

#[test]
fn non_parity_quirks_are_not_host_rendered() {
    for fixture in &builtin_corpus().cases {
        if !fixture.host_parity {
            assert!(
                host_render(fixture).is_none(),
                "case {} is marked non-parity but was host rendered",
                fixture.name
            );
        }
    }
}
