use super::fixture_loader::{
    FixtureFailure, FixtureResult, Locality, PartsCase, TestCase, load_url_parts_cases,
};
/// Fixture runner
///
/// Checks `UrlHelper` against the expected parts of every fixture case
use url_helper::{UrlHelper, UrlParts};

fn check(
    result: &mut FixtureResult,
    input: &str,
    field: &str,
    expected: &str,
    actual: &str,
) -> bool {
    if expected == actual {
        return true;
    }
    result.failures.push(FixtureFailure {
        input: input.to_string(),
        field: field.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    });
    false
}

fn locality(url: &UrlHelper) -> Locality {
    if url.is_absolute() {
        Locality::Absolute
    } else if url.is_root_relative() {
        Locality::RootRelative
    } else {
        Locality::ContextRelative
    }
}

fn run_parts_case(result: &mut FixtureResult, case: &PartsCase) -> bool {
    let url = UrlHelper::new(&case.input);
    let input = case.input.as_str();
    let parts = url.parts();

    let mut passed = true;
    passed &= check(result, input, "scheme", &case.scheme, parts.scheme());
    passed &= check(result, input, "user", &case.user, parts.user());
    passed &= check(result, input, "pass", &case.pass, parts.pass());
    passed &= check(result, input, "host", &case.host, parts.host());
    passed &= check(
        result,
        input,
        "port",
        &case.port.to_string(),
        &parts.port().to_string(),
    );
    passed &= check(result, input, "dir", &case.dir, parts.dir());
    passed &= check(result, input, "file", &case.file, parts.file());
    passed &= check(result, input, "ext", &case.ext, parts.ext());
    passed &= check(result, input, "query", &case.query, parts.query());
    passed &= check(result, input, "fragment", &case.fragment, parts.fragment());
    passed &= check(
        result,
        input,
        "locality",
        &format!("{:?}", case.locality),
        &format!("{:?}", locality(&url)),
    );
    passed &= check(
        result,
        input,
        "context",
        &case.context,
        url.get_context_part().as_str(),
    );
    passed &= check(result, input, "to_string", input, &url.to_string());

    for (expression, expected) in &case.get {
        passed &= check(
            result,
            input,
            &format!("get({expression})"),
            expected,
            url.get(expression).as_str(),
        );
    }

    passed
}

fn run_failure_case(result: &mut FixtureResult, input: &str, failure: &str) -> bool {
    let strict = match UrlHelper::parse(input) {
        Ok(_) => "success".to_string(),
        Err(err) => format!("{err:?}"),
    };
    let mut passed = check(result, input, "parse", failure, &strict);

    let lenient = UrlHelper::new(input);
    if lenient.parts() != &UrlParts::new() {
        passed &= check(result, input, "parts", "all empty", "non-empty");
    }
    passed &= check(result, input, "to_string", input, &lenient.to_string());
    passed
}

/// Run every fixture case
pub fn run_fixture_tests(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();

    for case in cases {
        let passed = match case {
            TestCase::Comment(_) => continue,
            TestCase::Parts(case) => run_parts_case(&mut result, &case),
            TestCase::Failure { input, failure } => {
                run_failure_case(&mut result, &input, &failure)
            }
        };
        if passed {
            result.passed += 1;
        }
    }

    result
}

#[test]
fn test_url_parts_fixtures() {
    let result = run_fixture_tests(load_url_parts_cases());
    assert!(result.failures.is_empty(), "{}", result.summary());
    assert_eq!(result.passed, 19);
}
