use crate::assembler::assemble_fragment;
use crate::ast::AnnotatedBlock;
use crate::comment::extract_blocks;
use crate::config::GeneratorOptions;
use crate::document::SpecDocument;
use crate::error::{MalformedTypedefError, SwaggerError};
use crate::spec::SpecFragment;
use log::{debug, info};
use miette::NamedSource;

/// A block only reaches the assembler if it carries at least one directive.
#[must_use]
pub fn is_significant(block: &AnnotatedBlock) -> bool {
    !block.directives.is_empty()
}

/// Compiles annotation blocks into one fragment per significant block, in input order.
///
/// Fragments are not merged; see [`SpecDocument::merge`].
///
/// # Errors
///
/// Returns `MalformedTypedefError` if a `@typedef` block has no type name.
pub fn compile<'a, I>(blocks: I) -> Result<Vec<SpecFragment>, MalformedTypedefError>
where
    I: IntoIterator<Item = &'a AnnotatedBlock>,
{
    blocks
        .into_iter()
        .filter(|block| {
            let keep = is_significant(block);
            if !keep {
                debug!("skipping annotation block without directives");
            }
            keep
        })
        .map(assemble_fragment)
        .collect()
}

/// Extracts the doc comments of one source file and compiles them.
///
/// # Arguments
///
/// * `source` - The file's text.
/// * `file_name` - Name used in diagnostics.
///
/// # Errors
///
/// Returns `SwaggerError::Annotation`, pointing at the offending comment, if a
/// `@typedef` block has no type name.
pub fn compile_source(source: &str, file_name: &str) -> Result<Vec<SpecFragment>, SwaggerError> {
    let blocks = extract_blocks(source);
    debug!("{file_name}: {} doc comment(s)", blocks.len());

    let mut fragments = Vec::with_capacity(blocks.len());
    for block in blocks.iter().filter(|b| is_significant(b)) {
        let fragment = assemble_fragment(block).map_err(|cause| match block.span {
            Some(span) => SwaggerError::Annotation {
                src: NamedSource::new(file_name, source.to_string()),
                span,
                file: file_name.to_string(),
                cause,
            },
            None => cause.into(),
        })?;
        fragments.push(fragment);
    }
    Ok(fragments)
}

/// Builds the full document: resolve options, expand file patterns, compile every
/// file and merge the fragments into the template.
///
/// # Errors
///
/// Fails fast on missing options before touching the file system, then on bad
/// patterns, unreadable files, or malformed typedefs.
pub fn generate(options: GeneratorOptions) -> Result<SpecDocument, SwaggerError> {
    let options = options.resolve()?;
    let files = options.expand_files()?;

    let mut document = SpecDocument::new(options.template);
    let mut fragment_count = 0;
    for path in &files {
        let source = std::fs::read_to_string(path).map_err(|source| SwaggerError::Io {
            path: path.clone(),
            source,
        })?;
        let fragments = compile_source(&source, &path.to_string_lossy())?;
        fragment_count += fragments.len();
        document.merge_all(fragments);
    }

    info!(
        "generated document from {} file(s): {} fragment(s), {} operation(s), {} definition(s)",
        files.len(),
        fragment_count,
        document.operation_count(),
        document.definitions.len()
    );
    Ok(document)
}
