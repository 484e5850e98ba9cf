//! Artifact content formatters.

use serde::Serialize;

use super::directive::Directive;
use super::error::GenerateError;
use crate::base::qualify;
use crate::namespace::{NamespaceId, NamespaceTree, Resolver};
use crate::schema::{FieldDecl, FieldKind, FileDecl, MessageDecl};

/// Content written by [`PlaceholderFormatter`].
pub const PLACEHOLDER_CONTENT: &str = "pubSubTOPIC!";

/// Everything a formatter may look at for one annotated message.
pub struct ArtifactContext<'a> {
    /// The target file declaring the message.
    pub file: &'a FileDecl,
    /// The annotated top-level message.
    pub message: &'a MessageDecl,
    pub directive: &'a Directive,
    /// Namespace of the file's package.
    pub scope: NamespaceId,
    /// The fully built namespace tree of the request.
    pub tree: &'a NamespaceTree<'a>,
}

impl ArtifactContext<'_> {
    /// Fully qualified name of the message (`.pkg.Message`).
    pub fn qualified_name(&self) -> String {
        qualify(self.tree.get(self.scope).qualified_name(), &self.message.name)
    }
}

/// Produces the content of one artifact.
pub trait ArtifactFormatter {
    fn format(&self, context: &ArtifactContext<'_>) -> Result<String, GenerateError>;
}

/// Writes [`PLACEHOLDER_CONTENT`] for every artifact.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderFormatter;

impl ArtifactFormatter for PlaceholderFormatter {
    fn format(&self, _context: &ArtifactContext<'_>) -> Result<String, GenerateError> {
        Ok(PLACEHOLDER_CONTENT.to_string())
    }
}

/// Writes a JSON description of the message's fields.
///
/// Message-typed fields are resolved from inside the annotated message, then
/// from the file's namespace outwards, and recorded by their fully qualified
/// name. A reference that does not resolve fails the artifact.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaFormatter;

#[derive(Serialize)]
struct TopicSchema<'s> {
    topic: &'s str,
    message: String,
    fields: Vec<FieldSchema<'s>>,
}

#[derive(Serialize)]
struct FieldSchema<'s> {
    name: &'s str,
    number: i32,
    label: &'static str,
    #[serde(rename = "type")]
    type_name: String,
}

impl ArtifactFormatter for SchemaFormatter {
    fn format(&self, context: &ArtifactContext<'_>) -> Result<String, GenerateError> {
        let resolver = Resolver::new(context.tree);
        let mut fields = Vec::with_capacity(context.message.fields.len());
        for field in &context.message.fields {
            fields.push(FieldSchema {
                name: &field.name,
                number: field.number,
                label: field.label.as_str(),
                type_name: field_type(context, &resolver, field)?,
            });
        }

        let schema = TopicSchema {
            topic: context.directive.topic(),
            message: context.qualified_name(),
            fields,
        };
        let mut content =
            serde_json::to_string_pretty(&schema).map_err(|err| GenerateError::Format {
                message: context.qualified_name(),
                reason: err.to_string(),
            })?;
        content.push('\n');
        Ok(content)
    }
}

fn field_type<'a>(
    context: &ArtifactContext<'a>,
    resolver: &Resolver<'_, 'a>,
    field: &FieldDecl,
) -> Result<String, GenerateError> {
    let reference = field.type_name.as_deref().unwrap_or_default();
    match field.kind {
        kind if kind.references_message() => {
            let message_name = context.qualified_name();
            resolver
                .resolve_from_message(context.scope, context.message, &message_name, reference)
                .into_resolved()
                .map(|resolved| resolved.qualified_name)
                .ok_or_else(|| GenerateError::UnresolvedReference {
                    reference: reference.to_string(),
                    field: field.name.clone(),
                    message: message_name,
                })
        }
        // Enums are not registered in the namespace tree.
        FieldKind::Enum => Ok(reference.to_string()),
        FieldKind::Unknown(code) => Err(GenerateError::Format {
            message: context.qualified_name(),
            reason: format!("field `{}` has unknown type code {code}", field.name),
        }),
        scalar => Ok(scalar.scalar_name().unwrap_or_default().to_string()),
    }
}
