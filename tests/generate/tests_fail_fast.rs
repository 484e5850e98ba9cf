//! Per-file failures stop generation at the failing target file.
//!
//! Later target files are not converted even when they would succeed, and
//! the artifacts of earlier files are returned next to the error. Skipping
//! the bad file and carrying on would be a behaviour change.

use pipegen::generate::{
    ArtifactContext, ArtifactFormatter, GenerateError, Generator, GeneratorConfig,
};
use pipegen::schema::{CompilationRequest, FieldDecl, FileDecl};

use crate::helpers::request_fixtures::*;

fn three_targets_with_broken_middle() -> CompilationRequest {
    let first = FileDecl::new("first.proto", Some("one")).with_message(annotated("A", "alpha"));
    let broken = FileDecl::new("broken.proto", Some("two")).with_message(
        annotated("B", "beta").with_field(FieldDecl::message("missing", 1, ".nowhere.Missing")),
    );
    let last = FileDecl::new("last.proto", Some("three")).with_message(annotated("C", "gamma"));
    CompilationRequest::new()
        .with_target(first)
        .with_target(broken)
        .with_target(last)
}

#[test]
fn test_conversion_failure_stops_remaining_target_files() {
    let response =
        Generator::new(GeneratorConfig::default()).generate(&three_targets_with_broken_middle());

    let names: Vec<_> = response.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["one/alpha.schema"]);
}

#[test]
fn test_conversion_failure_names_file_and_cause() {
    let response =
        Generator::new(GeneratorConfig::default()).generate(&three_targets_with_broken_middle());

    let error = response.error.expect("broken file should be reported");
    assert!(error.starts_with("Failed to convert broken.proto: "), "{error}");
    assert!(error.contains("`.nowhere.Missing`"), "{error}");
    assert!(error.contains("`missing`"), "{error}");
}

#[test]
fn test_failing_file_contributes_no_partial_artifacts() {
    let broken = FileDecl::new("broken.proto", Some("two"))
        .with_message(annotated("Good", "good"))
        .with_message(
            annotated("Bad", "bad").with_field(FieldDecl::message("x", 1, "Unknown")),
        );
    let request = CompilationRequest::new().with_target(broken);

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.files.is_empty());
    assert!(response.error.is_some());
}

#[test]
fn test_broken_non_target_file_is_ignored() {
    let broken_dependency = FileDecl::new("dep.proto", Some("dep")).with_message(
        annotated("Dep", "dep").with_field(FieldDecl::message("x", 1, ".nowhere.Missing")),
    );
    let main = FileDecl::new("main.proto", Some("main")).with_message(annotated("M", "main"));
    let request = CompilationRequest::new()
        .with_file(broken_dependency)
        .with_target(main);

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.is_success(), "{:?}", response.error);
    assert_eq!(response.files.len(), 1);
}

#[test]
fn test_duplicate_topic_in_one_file_is_reported() {
    let request = single_target_request(
        Some("p"),
        vec![annotated("First", "shared"), annotated("Second", "shared")],
    );

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.files.is_empty());
    assert_eq!(
        response.error.as_deref(),
        Some(
            "Failed to convert file.proto: artifact `p/shared.schema` for message `Second` \
             was already generated"
        )
    );
}

#[test]
fn test_duplicate_artifact_across_files_stops_at_second_file() {
    let request = CompilationRequest::new()
        .with_target(FileDecl::new("a.proto", Some("p")).with_message(annotated("A", "shared")))
        .with_target(FileDecl::new("b.proto", Some("p")).with_message(annotated("B", "shared")));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    let names: Vec<_> = response.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["p/shared.schema"]);
    let error = response.error.expect("second file should be reported");
    assert!(error.starts_with("Failed to convert b.proto: "), "{error}");
}

#[test]
fn test_same_topic_in_different_packages_is_allowed() {
    let request = CompilationRequest::new()
        .with_target(FileDecl::new("a.proto", Some("a")).with_message(annotated("A", "shared")))
        .with_target(FileDecl::new("b.proto", Some("b")).with_message(annotated("B", "shared")));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.is_success(), "{:?}", response.error);
    assert_eq!(response.files.len(), 2);
}

struct RejectTopic(&'static str);

impl ArtifactFormatter for RejectTopic {
    fn format(&self, context: &ArtifactContext<'_>) -> Result<String, GenerateError> {
        if context.directive.topic() == self.0 {
            return Err(GenerateError::Format {
                message: context.qualified_name(),
                reason: "rejected".to_string(),
            });
        }
        Ok(format!("{}:{}", context.file.name, context.message.name))
    }
}

#[test]
fn test_custom_formatter_failure_is_fail_fast() {
    let request = CompilationRequest::new()
        .with_target(FileDecl::new("a.proto", Some("a")).with_message(annotated("A", "ok")))
        .with_target(FileDecl::new("b.proto", Some("b")).with_message(annotated("B", "reject")))
        .with_target(FileDecl::new("c.proto", Some("c")).with_message(annotated("C", "ok")));

    let generator = Generator::with_formatter(GeneratorConfig::default(), RejectTopic("reject"));
    let response = generator.generate(&request);

    assert_eq!(response.files.len(), 1);
    assert_eq!(response.files[0].content, "a.proto:A");
    assert_eq!(
        response.error.as_deref(),
        Some("Failed to convert b.proto: cannot format `.b.B`: rejected")
    );
}
