//! Generates Go source from a GraphQL schema and a set of executable
//! documents.
//!
//! Each plugin ([`types_plugin`], [`operations_plugin`],
//! [`documents_plugin`], [`introspection_types_plugin`]) is a single,
//! synchronous pass over parsed ASTs that returns a [`PluginOutput`]. Reading
//! inputs and writing generated files is left to the caller.

pub mod ast;
mod comments;
mod config;
mod declaration_block;
mod documents_visitor;
mod error;
mod fragments;
pub mod modifiers;
pub mod naming;
mod operation_kind;
mod operations_visitor;
mod plugin;
mod scalars;
mod schema_index;
mod selection_set_to_object;
mod types_visitor;
mod variables_to_object;

pub use comments::indent;
pub use comments::transform_comment;
pub use config::EnumValuesConfig;
pub use config::ExternalType;
pub use config::GoPluginConfig;
pub use config::ParsedGoConfig;
pub use declaration_block::DeclarationBlock;
pub use declaration_block::DeclarationBlockConfig;
pub use declaration_block::DeclarationKind;
pub use documents_visitor::raw_string;
pub use documents_visitor::CollectedOperation;
pub use documents_visitor::DocumentsOutput;
pub use documents_visitor::DocumentsVisitor;
pub use error::CodegenError;
pub use fragments::FragmentRegistry;
pub use fragments::LoadedFragment;
pub use modifiers::ScalarReference;
pub use modifiers::TypeResolver;
pub use naming::ConvertNameOptions;
pub use naming::NameConverter;
pub use naming::NamingConvention;
pub use operation_kind::OperationKind;
pub use operations_visitor::operation_suffix;
pub use operations_visitor::OperationsVisitor;
pub use plugin::concat_documents;
pub use plugin::documents_plugin;
pub use plugin::introspection_types_plugin;
pub use plugin::load_fragments;
pub use plugin::operations_plugin;
pub use plugin::package_name;
pub use plugin::types_plugin;
pub use plugin::DocumentFile;
pub use plugin::Plugin;
pub use plugin::PluginInfo;
pub use plugin::PluginOutput;
pub use scalars::build_scalars_map;
pub use scalars::default_go_scalars;
pub use scalars::ScalarsMap;
pub use scalars::DEFAULT_CUSTOM_SCALAR_TYPE;
pub use schema_index::GraphQLTypeKind;
pub use schema_index::SchemaIndex;
pub use selection_set_to_object::SelectionSetOptions;
pub use selection_set_to_object::SelectionSetToObject;
pub use types_visitor::enum_constant_name;
pub use types_visitor::TypesVisitor;
pub use variables_to_object::VariableLike;
pub use variables_to_object::VariablesToObject;

#[cfg(test)]
mod tests;
