//! Helpers for driving the plugin through its wire envelope.

use pipegen::plugin::{self, Outcome};
use pipegen::schema::PIPE_OPTIONS_EXTENSION;
use pipegen::schema::wire::{
    CodeGeneratorRequest, DescriptorProto, FileDescriptorProto, MessageOptionsProto,
    PipeOptionsProto,
};
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;

/// A descriptor for message `name`, annotated when `topic` is given.
pub fn wire_message(name: &str, topic: Option<&str>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        options: topic.map(|topic| MessageOptionsProto {
            pipe_opts: Some(PipeOptionsProto {
                pubsub_topic_name: Some(topic.to_string()),
            }),
        }),
        ..Default::default()
    }
}

/// A file descriptor named `name` in `package`.
pub fn wire_file(name: &str, package: &str, messages: Vec<DescriptorProto>) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: Some(package.to_string()),
        message_type: messages,
    }
}

/// Run the plugin over raw bytes and decode what it wrote.
pub fn run_plugin(input: &[u8]) -> (Outcome, CodeGeneratorResponse) {
    let mut output = Vec::new();
    let outcome = plugin::run(input, &mut output).expect("writing to a Vec cannot fail");
    let response = CodeGeneratorResponse::decode(output.as_slice())
        .expect("plugin should write a valid response");
    (outcome, response)
}

/// Run the plugin over an encoded request.
pub fn run_request(request: &CodeGeneratorRequest) -> (Outcome, CodeGeneratorResponse) {
    run_plugin(&request.encode_to_vec())
}

/// Names of the files in a response.
pub fn file_names(response: &CodeGeneratorResponse) -> Vec<&str> {
    response
        .file
        .iter()
        .filter_map(|file| file.name.as_deref())
        .collect()
}

/// The extension number declared for the pipe annotation.
pub fn pipe_extension_number() -> u32 {
    PIPE_OPTIONS_EXTENSION
}
