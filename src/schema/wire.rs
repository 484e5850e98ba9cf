//! Wire envelope — `CodeGeneratorRequest` in, `CodeGeneratorResponse` out.
//!
//! The request side is declared here rather than taken from `prost-types`
//! because the pipe annotation is an extension of `MessageOptions`: declaring
//! it as a regular field at the extension number lets `prost` decode it in
//! the same pass as the rest of the descriptor. Only the fields the generator
//! reads are declared; everything else is skipped as unknown.
//!
//! The response side uses the stock `prost-types` definitions.

use prost::Message;
use prost_types::compiler::{CodeGeneratorResponse, code_generator_response};

use super::model::{
    CompilationRequest, CompilationResponse, FieldDecl, FieldKind, FieldLabel, FileDecl,
    MessageDecl, MessageOptions, PipeOptions,
};

/// Field number of the pipe annotation on `google.protobuf.MessageOptions`.
pub const PIPE_OPTIONS_EXTENSION: u32 = 50_101;

// ============================================================================
// REQUEST
// ============================================================================

/// `google.protobuf.compiler.CodeGeneratorRequest`.
#[derive(Clone, PartialEq, Message)]
pub struct CodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

/// `google.protobuf.FileDescriptorProto`.
#[derive(Clone, PartialEq, Message)]
pub struct FileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
}

/// `google.protobuf.DescriptorProto`.
#[derive(Clone, PartialEq, Message)]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorProto>,
    #[prost(message, optional, tag = "7")]
    pub options: Option<MessageOptionsProto>,
}

/// `google.protobuf.FieldDescriptorProto`.
#[derive(Clone, PartialEq, Message)]
pub struct FieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub number: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub label: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub r#type: Option<i32>,
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
}

/// `google.protobuf.MessageOptions` with the pipe extension.
#[derive(Clone, PartialEq, Message)]
pub struct MessageOptionsProto {
    /// Keep in sync with [`PIPE_OPTIONS_EXTENSION`].
    #[prost(message, optional, tag = "50101")]
    pub pipe_opts: Option<PipeOptionsProto>,
}

/// The pipe annotation payload.
#[derive(Clone, PartialEq, Message)]
pub struct PipeOptionsProto {
    #[prost(string, optional, tag = "1")]
    pub pubsub_topic_name: Option<String>,
}

/// Decode a serialized `CodeGeneratorRequest`.
pub fn decode_request(bytes: &[u8]) -> Result<CompilationRequest, prost::DecodeError> {
    CodeGeneratorRequest::decode(bytes).map(CompilationRequest::from)
}

impl From<CodeGeneratorRequest> for CompilationRequest {
    fn from(request: CodeGeneratorRequest) -> Self {
        Self {
            files_to_generate: request.file_to_generate.into_iter().collect(),
            parameter: request.parameter,
            files: request.proto_file.into_iter().map(FileDecl::from).collect(),
        }
    }
}

impl From<FileDescriptorProto> for FileDecl {
    fn from(file: FileDescriptorProto) -> Self {
        Self {
            name: file.name.unwrap_or_default(),
            package: file.package,
            message_types: file.message_type.into_iter().map(MessageDecl::from).collect(),
        }
    }
}

impl From<DescriptorProto> for MessageDecl {
    fn from(message: DescriptorProto) -> Self {
        Self {
            name: message.name.unwrap_or_default(),
            fields: message.field.into_iter().map(FieldDecl::from).collect(),
            nested_types: message
                .nested_type
                .into_iter()
                .map(MessageDecl::from)
                .collect(),
            options: message.options.map(MessageOptions::from),
        }
    }
}

impl From<FieldDescriptorProto> for FieldDecl {
    fn from(field: FieldDescriptorProto) -> Self {
        Self {
            name: field.name.unwrap_or_default(),
            number: field.number.unwrap_or_default(),
            label: field.label.map(FieldLabel::from_wire).unwrap_or_default(),
            kind: FieldKind::from_wire(field.r#type.unwrap_or_default()),
            type_name: field.type_name,
        }
    }
}

impl From<MessageOptionsProto> for MessageOptions {
    fn from(options: MessageOptionsProto) -> Self {
        Self {
            pipe: options.pipe_opts.map(|pipe| PipeOptions {
                pubsub_topic_name: pipe.pubsub_topic_name,
            }),
        }
    }
}

// ============================================================================
// RESPONSE
// ============================================================================

/// Encode a response as a serialized `CodeGeneratorResponse`.
pub fn encode_response(response: &CompilationResponse) -> Vec<u8> {
    CodeGeneratorResponse::from(response).encode_to_vec()
}

impl From<&CompilationResponse> for CodeGeneratorResponse {
    fn from(response: &CompilationResponse) -> Self {
        Self {
            error: response.error.clone(),
            supported_features: Some(code_generator_response::Feature::Proto3Optional as u64),
            file: response
                .files
                .iter()
                .map(|file| code_generator_response::File {
                    name: Some(file.name.clone()),
                    content: Some(file.content.clone()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }
}
