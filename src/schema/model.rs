use indexmap::IndexSet;

// ============================================================================
// MESSAGES
// ============================================================================

/// A declared message type, possibly nested inside another message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageDecl {
    /// Short name, unique among its siblings.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Messages declared directly inside this one, in declaration order.
    pub nested_types: Vec<MessageDecl>,
    /// Decoded message options, if the declaration carried any.
    pub options: Option<MessageOptions>,
}

impl MessageDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a nested message declaration.
    pub fn with_nested(mut self, nested: MessageDecl) -> Self {
        self.nested_types.push(nested);
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the message options.
    pub fn with_options(mut self, options: MessageOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Attach a pipe annotation carrying `topic`.
    pub fn with_topic(self, topic: impl Into<String>) -> Self {
        self.with_options(MessageOptions {
            pipe: Some(PipeOptions {
                pubsub_topic_name: Some(topic.into()),
            }),
        })
    }

    /// Find a directly nested message by its short name.
    pub fn nested(&self, name: &str) -> Option<&MessageDecl> {
        self.nested_types.iter().find(|nested| nested.name == name)
    }
}

/// Message options the generator understands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageOptions {
    /// The custom pipe annotation, when present.
    pub pipe: Option<PipeOptions>,
}

/// Payload of the custom pipe annotation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipeOptions {
    pub pubsub_topic_name: Option<String>,
}

// ============================================================================
// FIELDS
// ============================================================================

/// A field of a message declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub number: i32,
    pub label: FieldLabel,
    pub kind: FieldKind,
    /// Referenced type for message, group and enum fields, as written by the
    /// host compiler (usually absolute, e.g. `.pkg.Type`).
    pub type_name: Option<String>,
}

impl FieldDecl {
    /// A singular scalar field.
    pub fn scalar(name: impl Into<String>, number: i32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            label: FieldLabel::Optional,
            kind,
            type_name: None,
        }
    }

    /// A singular field referencing a message type.
    pub fn message(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number,
            label: FieldLabel::Optional,
            kind: FieldKind::Message,
            type_name: Some(type_name.into()),
        }
    }

    /// Mark the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.label = FieldLabel::Repeated;
        self
    }
}

/// Field cardinality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    #[default]
    Optional,
    Required,
    Repeated,
}

impl FieldLabel {
    /// Convert from the descriptor's numeric label.
    pub fn from_wire(value: i32) -> Self {
        match value {
            2 => FieldLabel::Required,
            3 => FieldLabel::Repeated,
            _ => FieldLabel::Optional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::Optional => "optional",
            FieldLabel::Required => "required",
            FieldLabel::Repeated => "repeated",
        }
    }
}

/// Field value type, mirroring the descriptor's numeric type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    Uint32,
    Enum,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    /// A type code this generator does not know.
    Unknown(i32),
}

impl FieldKind {
    /// Convert from the descriptor's numeric type code.
    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => FieldKind::Double,
            2 => FieldKind::Float,
            3 => FieldKind::Int64,
            4 => FieldKind::Uint64,
            5 => FieldKind::Int32,
            6 => FieldKind::Fixed64,
            7 => FieldKind::Fixed32,
            8 => FieldKind::Bool,
            9 => FieldKind::String,
            10 => FieldKind::Group,
            11 => FieldKind::Message,
            12 => FieldKind::Bytes,
            13 => FieldKind::Uint32,
            14 => FieldKind::Enum,
            15 => FieldKind::Sfixed32,
            16 => FieldKind::Sfixed64,
            17 => FieldKind::Sint32,
            18 => FieldKind::Sint64,
            other => FieldKind::Unknown(other),
        }
    }

    /// Scalar type keyword, or `None` for kinds that name another type.
    pub fn scalar_name(&self) -> Option<&'static str> {
        Some(match self {
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Int64 => "int64",
            FieldKind::Uint64 => "uint64",
            FieldKind::Int32 => "int32",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Uint32 => "uint32",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Sint32 => "sint32",
            FieldKind::Sint64 => "sint64",
            FieldKind::Group | FieldKind::Message | FieldKind::Enum | FieldKind::Unknown(_) => {
                return None;
            }
        })
    }

    /// Whether the field refers to a message declaration in the namespace.
    pub fn references_message(&self) -> bool {
        matches!(self, FieldKind::Message | FieldKind::Group)
    }
}

// ============================================================================
// FILES AND REQUEST
// ============================================================================

/// One input file of a compilation request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileDecl {
    /// File name as given to the host compiler (e.g. `a/b/m.proto`).
    pub name: String,
    /// Package path, if the file declares one.
    pub package: Option<String>,
    /// Top-level message declarations, in declaration order.
    pub message_types: Vec<MessageDecl>,
}

impl FileDecl {
    pub fn new(name: impl Into<String>, package: Option<&str>) -> Self {
        Self {
            name: name.into(),
            package: package.map(str::to_string),
            message_types: Vec::new(),
        }
    }

    /// Add a top-level message declaration.
    pub fn with_message(mut self, message: MessageDecl) -> Self {
        self.message_types.push(message);
        self
    }
}

/// A decoded compilation request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilationRequest {
    /// Names of the files artifacts are generated for, in request order.
    pub files_to_generate: IndexSet<String>,
    /// Raw plugin parameter string (`--pipe_opt=...`).
    pub parameter: Option<String>,
    /// Every input file, including dependencies of the targets.
    pub files: Vec<FileDecl>,
}

impl CompilationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input file that is only registered for resolution.
    pub fn with_file(mut self, file: FileDecl) -> Self {
        self.files.push(file);
        self
    }

    /// Add an input file and mark it as a generation target.
    pub fn with_target(mut self, file: FileDecl) -> Self {
        self.files_to_generate.insert(file.name.clone());
        self.files.push(file);
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Whether artifacts should be generated for the file named `name`.
    pub fn is_target(&self, name: &str) -> bool {
        self.files_to_generate.contains(name)
    }
}

// ============================================================================
// RESPONSE
// ============================================================================

/// One generated artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}

/// Result of one generation run.
///
/// `files` may be non-empty alongside `error` when generation stopped part
/// way through the target files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilationResponse {
    pub files: Vec<OutputFile>,
    pub error: Option<String>,
}

impl CompilationResponse {
    /// A response carrying only an error.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
