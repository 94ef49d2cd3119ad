use crate::ast;
use crate::CodegenError;
use crate::OperationKind;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CodegenError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Similar to [`ast::schema::TypeDefinition`] except without the definition
/// itself. Useful when a generator only needs to branch on what kind of type
/// a name refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl std::convert::From<&ast::schema::TypeDefinition> for GraphQLTypeKind {
    fn from(value: &ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition;
        match value {
            TypeDefinition::Enum(_) => Self::Enum,
            TypeDefinition::InputObject(_) => Self::InputObject,
            TypeDefinition::Interface(_) => Self::Interface,
            TypeDefinition::Object(_) => Self::Object,
            TypeDefinition::Scalar(_) => Self::Scalar,
            TypeDefinition::Union(_) => Self::Union,
        }
    }
}

/// A parsed schema document with type extensions folded into the types they
/// extend, indexed by type name for the lookups the generators need.
#[derive(Clone, Debug)]
pub struct SchemaIndex {
    document: ast::schema::Document,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: HashMap<String, usize>,
}
impl SchemaIndex {
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_file(None, content)
    }

    pub fn parse_file(file_path: Option<&Path>, content: &str) -> Result<Self> {
        Ok(Self::from_document(Self::parse_document(file_path, content)?))
    }

    /// Parses one schema source without indexing it, for callers that
    /// combine several files with [`SchemaIndex::from_documents`].
    pub fn parse_document(
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<ast::schema::Document> {
        ast::schema::parse(content)
            .map_err(|err| CodegenError::SchemaParse {
                file: file_path.map(Path::to_path_buf),
                err: Arc::new(err),
            })
    }

    /// Concatenates several parsed schema documents (e.g. one per schema
    /// file) before indexing them.
    pub fn from_documents(docs: Vec<ast::schema::Document>) -> Self {
        let definitions = docs.into_iter()
            .flat_map(|doc| doc.definitions)
            .collect();

        Self::from_document(ast::schema::Document { definitions })
    }

    pub fn from_document(doc: ast::schema::Document) -> Self {
        let mut definitions = vec![];
        let mut extensions = vec![];
        for def in doc.definitions {
            match def {
                ast::schema::Definition::TypeExtension(ext) => extensions.push(ext),
                other => definitions.push(other),
            }
        }

        let mut types = HashMap::new();
        let mut schema_def = None;
        for (idx, def) in definitions.iter().enumerate() {
            match def {
                ast::schema::Definition::TypeDefinition(type_def) => {
                    types.insert(type_definition_name(type_def).to_string(), idx);
                },
                ast::schema::Definition::SchemaDefinition(def) => {
                    schema_def = Some(def.clone());
                },
                ast::schema::Definition::DirectiveDefinition(_)
                | ast::schema::Definition::TypeExtension(_) => (),
            }
        }

        for ext in extensions {
            merge_type_extension(&mut definitions, &types, ext);
        }

        let mut index = Self {
            document: ast::schema::Document { definitions },
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types,
        };

        let default_root = |name: &str| {
            index.is_object_type(name).then(|| name.to_string())
        };
        let (query_type, mutation_type, subscription_type) = match schema_def {
            Some(def) => (def.query, def.mutation, def.subscription),
            None => (
                default_root("Query"),
                default_root("Mutation"),
                default_root("Subscription"),
            ),
        };
        index.query_type = query_type;
        index.mutation_type = mutation_type;
        index.subscription_type = subscription_type;

        log::trace!(
            "Indexed {} schema types (query: {:?}, mutation: {:?}, \
            subscription: {:?}).",
            index.types.len(),
            index.query_type,
            index.mutation_type,
            index.subscription_type,
        );

        index
    }

    /// The schema document with all type extensions merged.
    pub fn document(&self) -> &ast::schema::Document {
        &self.document
    }

    pub fn get_type(&self, name: &str) -> Option<&ast::schema::TypeDefinition> {
        let idx = self.types.get(name)?;
        match self.document.definitions.get(*idx) {
            Some(ast::schema::Definition::TypeDefinition(type_def)) => Some(type_def),
            _ => None,
        }
    }

    /// The kind of type `name` refers to. The built-in scalars report
    /// [`GraphQLTypeKind::Scalar`] even though they are never defined in the
    /// schema document.
    pub fn type_kind(&self, name: &str) -> Option<GraphQLTypeKind> {
        match self.get_type(name) {
            Some(type_def) => Some(type_def.into()),
            None if BUILTIN_SCALAR_NAMES.contains(&name) => Some(GraphQLTypeKind::Scalar),
            None => None,
        }
    }

    pub fn is_interface_type(&self, name: &str) -> bool {
        self.type_kind(name) == Some(GraphQLTypeKind::Interface)
    }

    /// Scalars and enums: types that never carry a selection set.
    pub fn is_leaf_type(&self, name: &str) -> bool {
        matches!(
            self.type_kind(name),
            Some(GraphQLTypeKind::Scalar | GraphQLTypeKind::Enum),
        )
    }

    pub fn is_object_type(&self, name: &str) -> bool {
        self.type_kind(name) == Some(GraphQLTypeKind::Object)
    }

    pub fn is_union_type(&self, name: &str) -> bool {
        self.type_kind(name) == Some(GraphQLTypeKind::Union)
    }

    /// The name of the root object type for the given kind of operation, if
    /// the schema declares one.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Names of every object type that declares it implements
    /// `interface_name`, in schema order.
    pub fn implementing_types(&self, interface_name: &str) -> Vec<&str> {
        self.document.definitions.iter()
            .filter_map(|def| match def {
                ast::schema::Definition::TypeDefinition(
                    ast::schema::TypeDefinition::Object(obj),
                ) if obj.implements_interfaces.iter().any(|i| i == interface_name)
                    => Some(obj.name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Looks up the declared type of `field_name` on an object or interface
    /// type. `__typename` resolves on every composite type.
    pub fn field_type(&self, parent_type: &str, field_name: &str) -> Option<&ast::Type> {
        if field_name == "__typename" {
            return Some(typename_field_type());
        }

        let fields = match self.get_type(parent_type)? {
            ast::schema::TypeDefinition::Object(obj) => &obj.fields,
            ast::schema::TypeDefinition::Interface(iface) => &iface.fields,
            _ => return None,
        };

        fields.iter()
            .find(|field| field.name == field_name)
            .map(|field| &field.field_type)
    }

    /// Names of all scalars defined in the schema document, in schema order.
    pub fn custom_scalar_names(&self) -> impl Iterator<Item = &str> {
        self.document.definitions.iter().filter_map(|def| match def {
            ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Scalar(scalar),
            ) => Some(scalar.name.as_str()),
            _ => None,
        })
    }

    pub fn description(&self, type_name: &str) -> Option<&str> {
        use ast::schema::TypeDefinition;
        match self.get_type(type_name)? {
            TypeDefinition::Enum(def) => def.description.as_deref(),
            TypeDefinition::InputObject(def) => def.description.as_deref(),
            TypeDefinition::Interface(def) => def.description.as_deref(),
            TypeDefinition::Object(def) => def.description.as_deref(),
            TypeDefinition::Scalar(def) => def.description.as_deref(),
            TypeDefinition::Union(def) => def.description.as_deref(),
        }
    }
}

fn typename_field_type() -> &'static ast::Type {
    static TYPENAME_TYPE: std::sync::OnceLock<ast::Type> = std::sync::OnceLock::new();
    TYPENAME_TYPE.get_or_init(|| {
        ast::Type::NonNullType(Box::new(ast::Type::NamedType("String".to_string())))
    })
}

pub(crate) fn type_definition_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => def.name.as_str(),
        TypeDefinition::InputObject(def) => def.name.as_str(),
        TypeDefinition::Interface(def) => def.name.as_str(),
        TypeDefinition::Object(def) => def.name.as_str(),
        TypeDefinition::Scalar(def) => def.name.as_str(),
        TypeDefinition::Union(def) => def.name.as_str(),
    }
}

fn type_extension_name(ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}

fn merge_type_extension(
    definitions: &mut [ast::schema::Definition],
    types: &HashMap<String, usize>,
    ext: ast::schema::TypeExtension,
) {
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;

    let type_name = type_extension_name(&ext).to_string();
    let type_def = match types.get(&type_name).and_then(|idx| definitions.get_mut(*idx)) {
        Some(ast::schema::Definition::TypeDefinition(type_def)) => type_def,
        _ => {
            log::warn!("Skipping extension of undefined type `{type_name}`.");
            return;
        },
    };

    match (type_def, ext) {
        (TypeDefinition::Enum(def), TypeExtension::Enum(mut ext)) => {
            def.directives.append(&mut ext.directives);
            def.values.append(&mut ext.values);
        },

        (TypeDefinition::InputObject(def), TypeExtension::InputObject(mut ext)) => {
            def.directives.append(&mut ext.directives);
            def.fields.append(&mut ext.fields);
        },

        (TypeDefinition::Interface(def), TypeExtension::Interface(mut ext)) => {
            def.implements_interfaces.append(&mut ext.implements_interfaces);
            def.directives.append(&mut ext.directives);
            def.fields.append(&mut ext.fields);
        },

        (TypeDefinition::Object(def), TypeExtension::Object(mut ext)) => {
            def.implements_interfaces.append(&mut ext.implements_interfaces);
            def.directives.append(&mut ext.directives);
            def.fields.append(&mut ext.fields);
        },

        (TypeDefinition::Scalar(def), TypeExtension::Scalar(mut ext)) => {
            def.directives.append(&mut ext.directives);
        },

        (TypeDefinition::Union(def), TypeExtension::Union(mut ext)) => {
            def.directives.append(&mut ext.directives);
            def.types.append(&mut ext.types);
        },

        (_, _) => log::warn!(
            "Skipping extension of `{type_name}`: the extension kind does not \
            match the kind of the type it extends."
        ),
    }
}
