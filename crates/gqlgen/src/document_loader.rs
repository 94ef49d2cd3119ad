use crate::file_reader;
use graphql_codegen_go::CodegenError;
use graphql_codegen_go::DocumentFile;
use graphql_codegen_go::LoadedFragment;
use graphql_codegen_go::SchemaIndex;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, DocumentLoadError>;

/// Normalizes `--graphql-file-exts` values to bare extensions (no leading
/// `.`).
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Every GraphQL file at or under `paths`, in a stable order.
///
/// Files found while walking a directory are filtered by extension. Paths
/// that name a file directly are always included since the user asked for
/// them explicitly.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> Result<Vec<PathBuf>> {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut file_paths = IndexSet::new();
    for path in paths {
        if path.is_file() {
            if !has_graphql_ext(path, graphql_file_exts) {
                log::warn!(
                    "Loading {path:#?} even though it doesn't match any of the \
                    --graphql-file-exts ({}).",
                    graphql_file_exts.iter()
                        .map(|ext| format!("`{ext}`"))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
            file_paths.insert(path.to_owned());
            continue;
        }

        if !path.exists() {
            return Err(DocumentLoadError::PathNotFound(path.to_owned()));
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|err| DocumentLoadError::WalkError {
                path: path.to_owned(),
                err,
            })?;

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            if has_graphql_ext(entry_path, graphql_file_exts) {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                file_paths.insert(entry_path.to_path_buf());
            } else {
                log::trace!("Skipping non-GraphQL file: {entry_path:#?}.");
            }
        }
    }

    log::debug!("Found {} GraphQL files.", file_paths.len());
    Ok(file_paths.into_iter().collect())
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()))
}

/// Parses every schema file found under `paths` into one [`SchemaIndex`].
pub(crate) fn load_schema(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> Result<SchemaIndex> {
    let file_paths = find_graphql_files(paths, graphql_file_exts)?;
    if file_paths.is_empty() {
        return Err(DocumentLoadError::NoSchemaFiles);
    }

    let mut docs = vec![];
    for file_path in &file_paths {
        let content = file_reader::read_content(file_path)
            .map_err(|err| DocumentLoadError::FileReadError(Box::new(err)))?;
        docs.push(SchemaIndex::parse_document(Some(file_path.as_path()), content.as_str())?);
    }

    Ok(SchemaIndex::from_documents(docs))
}

/// Parses every executable document found under `paths`.
pub(crate) fn load_documents(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> Result<Vec<DocumentFile>> {
    let mut documents = vec![];
    for file_path in find_graphql_files(paths, graphql_file_exts)? {
        let content = file_reader::read_content(&file_path)
            .map_err(|err| DocumentLoadError::FileReadError(Box::new(err)))?;
        documents.push(DocumentFile::parse(Some(file_path), content.as_str())?);
    }
    Ok(documents)
}

/// Loads the fragments of the documents under `paths`, marked as generated
/// elsewhere.
pub(crate) fn load_external_fragments(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> Result<Vec<LoadedFragment>> {
    Ok(
        load_documents(paths, graphql_file_exts)?
            .iter()
            .flat_map(|file| LoadedFragment::from_document(&file.document, true))
            .collect()
    )
}

#[derive(Debug, Error)]
pub(crate) enum DocumentLoadError {
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("{0}")]
    FileReadError(Box<file_reader::ReadContentError>),

    #[error("No schema files were found.")]
    NoSchemaFiles,

    #[error("{0:?} does not exist")]
    PathNotFound(PathBuf),

    #[error("Error walking {path:?}: {err}")]
    WalkError {
        path: PathBuf,
        err: walkdir::Error,
    },
}
