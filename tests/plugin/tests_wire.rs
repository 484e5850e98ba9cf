//! Full plugin runs: encoded request in, encoded response out.

use pipegen::plugin::Outcome;
use pipegen::schema::wire::{
    CodeGeneratorRequest, FieldDescriptorProto, FileDescriptorProto, MessageOptionsProto,
};
use prost::Message;

use crate::helpers::wire_helpers::*;

fn request(
    files_to_generate: &[&str],
    proto_file: Vec<FileDescriptorProto>,
) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: files_to_generate.iter().map(|f| f.to_string()).collect(),
        parameter: None,
        proto_file,
    }
}

#[test]
fn test_annotated_message_over_the_wire() {
    let request = request(
        &["a/b/m.proto"],
        vec![wire_file("a/b/m.proto", "a.b", vec![wire_message("M", Some("topicX"))])],
    );

    let (outcome, response) = run_request(&request);

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(response.error, None);
    assert_eq!(file_names(&response), vec!["a/b/topicX.schema"]);
    assert_eq!(response.supported_features, Some(1));
}

#[test]
fn test_unannotated_message_over_the_wire() {
    let request = request(
        &["a/b/m.proto"],
        vec![wire_file("a/b/m.proto", "a.b", vec![wire_message("M", None)])],
    );

    let (outcome, response) = run_request(&request);

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(response.error, None);
    assert!(response.file.is_empty());
}

#[test]
fn test_malformed_input_is_reported() {
    let (outcome, response) = run_plugin(b"\x0a\xff\xff\xff\xff\x0fnot a request");

    assert_eq!(outcome, Outcome::Reported);
    assert!(response.file.is_empty());
    let error = response.error.expect("malformed input should be reported");
    assert!(error.starts_with("Failed to read input:"), "{error}");
}

#[test]
fn test_conversion_failure_over_the_wire() {
    let mut broken = wire_message("B", Some("beta"));
    broken.field.push(FieldDescriptorProto {
        name: Some("missing".to_string()),
        number: Some(1),
        label: Some(1),
        r#type: Some(11),
        type_name: Some(".nowhere.Missing".to_string()),
    });
    let request = request(
        &["one.proto", "two.proto"],
        vec![
            wire_file("one.proto", "one", vec![wire_message("A", Some("alpha"))]),
            wire_file("two.proto", "two", vec![broken]),
        ],
    );

    let (outcome, response) = run_request(&request);

    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(file_names(&response), vec!["one/alpha.schema"]);
    assert!(
        response
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to convert two.proto:"))
    );
}

#[test]
fn test_invalid_parameter_over_the_wire() {
    let mut request = request(
        &["m.proto"],
        vec![wire_file("m.proto", "p", vec![wire_message("M", Some("t"))])],
    );
    request.parameter = Some("content".to_string());

    let (outcome, response) = run_request(&request);

    assert_eq!(outcome, Outcome::Reported);
    assert!(response.file.is_empty());
}

#[test]
fn test_pipe_options_use_the_declared_extension_number() {
    let options = MessageOptionsProto {
        pipe_opts: Some(Default::default()),
    };
    let mut expected_key = Vec::new();
    prost::encoding::encode_key(
        pipe_extension_number(),
        prost::encoding::WireType::LengthDelimited,
        &mut expected_key,
    );

    let bytes = options.encode_to_vec();

    assert!(bytes.starts_with(&expected_key), "{bytes:?}");
}
