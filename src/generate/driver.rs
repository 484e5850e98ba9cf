use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::config::{ContentKind, GeneratorConfig};
use super::directive::extract_directive;
use super::error::GenerateError;
use super::formatter::{ArtifactContext, ArtifactFormatter, PlaceholderFormatter, SchemaFormatter};
use crate::base::{PATH_SEPARATOR, package_dir};
use crate::namespace::NamespaceTree;
use crate::schema::{CompilationRequest, CompilationResponse, FileDecl, OutputFile};

/// Generate artifacts for `request`, configured by its plugin parameter.
///
/// Errors never escape: an invalid parameter or a failing target file is
/// reported through [`CompilationResponse::error`].
pub fn generate(request: &CompilationRequest) -> CompilationResponse {
    match GeneratorConfig::from_parameter(request.parameter.as_deref()) {
        Ok(config) => Generator::new(config).generate(request),
        Err(err) => CompilationResponse::failed(err.to_string()),
    }
}

/// Build the artifact name `<package dir>/<topic>.<extension>`.
///
/// `dir` is the package directory from [`package_dir`]; when it is empty the
/// artifact sits at the output root.
pub fn artifact_name(dir: &str, topic: &str, extension: &str) -> String {
    if dir.is_empty() {
        format!("{topic}.{extension}")
    } else {
        format!("{dir}{PATH_SEPARATOR}{topic}.{extension}")
    }
}

/// The generation driver.
pub struct Generator {
    config: GeneratorConfig,
    formatter: Box<dyn ArtifactFormatter>,
}

impl Generator {
    /// Create a generator using the formatter selected by `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        let formatter: Box<dyn ArtifactFormatter> = match config.content {
            ContentKind::Schema => Box::new(SchemaFormatter),
            ContentKind::Placeholder => Box::new(PlaceholderFormatter),
        };
        Self { config, formatter }
    }

    /// Create a generator with a custom formatter.
    pub fn with_formatter(
        config: GeneratorConfig,
        formatter: impl ArtifactFormatter + 'static,
    ) -> Self {
        Self {
            config,
            formatter: Box::new(formatter),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run both passes over `request`.
    ///
    /// Generation stops at the first target file that fails; artifacts of
    /// earlier files are kept in the response next to the error. Artifact
    /// names must be unique across the whole response.
    pub fn generate(&self, request: &CompilationRequest) -> CompilationResponse {
        let tree = Self::register_all(request);

        let mut response = CompilationResponse::default();
        let mut emitted = FxHashSet::default();
        for file in request.files.iter().filter(|f| request.is_target(&f.name)) {
            debug!("Converting {}", file.name);
            match self.convert_file(&tree, file, &mut emitted) {
                Ok(outputs) => response.files.extend(outputs),
                Err(err) => {
                    let err = err.in_file(&file.name);
                    warn!("{err}");
                    response.error = Some(err.to_string());
                    return response;
                }
            }
        }
        response
    }

    /// Registration pass: every top-level message of every input file.
    fn register_all(request: &CompilationRequest) -> NamespaceTree<'_> {
        let mut tree = NamespaceTree::new();
        for file in &request.files {
            for message in &file.message_types {
                tree.register(file.package.as_deref(), message);
            }
        }
        debug!(
            "Registered {} namespaces from {} files",
            tree.namespace_count(),
            request.files.len()
        );
        tree
    }

    fn convert_file(
        &self,
        tree: &NamespaceTree<'_>,
        file: &FileDecl,
        emitted: &mut FxHashSet<String>,
    ) -> Result<Vec<OutputFile>, GenerateError> {
        let package = file.package.as_deref();
        let scope = package
            .and_then(|package| tree.find_namespace(package))
            .unwrap_or(tree.root());
        let dir = package_dir(package);

        let mut outputs = Vec::new();
        for message in &file.message_types {
            let Some(directive) = extract_directive(message) else {
                trace!("Skipping {} without pipe options", message.name);
                continue;
            };
            let name = artifact_name(&dir, directive.topic(), &self.config.extension);
            if !emitted.insert(name.clone()) {
                return Err(GenerateError::DuplicateArtifact {
                    artifact: name,
                    message: message.name.clone(),
                });
            }
            let context = ArtifactContext {
                file,
                message,
                directive: &directive,
                scope,
                tree,
            };
            let content = self.formatter.format(&context)?;
            debug!("Generated {} for {}", name, message.name);
            outputs.push(OutputFile { name, content });
        }
        Ok(outputs)
    }
}
