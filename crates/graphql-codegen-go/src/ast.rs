//! Owned (`'static`, `String`-backed) aliases for the `graphql_parser` AST
//! nodes consumed by the generators.

pub type Type = graphql_parser::query::Type<'static, String>;

pub mod query {
    pub use graphql_parser::query::ParseError;
    pub use graphql_parser::query::TypeCondition;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::parse_query::<String>(content)?.into_static())
    }

    /// The name, variable definitions and selection set of an operation.
    /// The `{ ... }` shorthand is an anonymous query without variables.
    pub fn operation_parts(
        op: &OperationDefinition,
    ) -> (Option<&str>, &[VariableDefinition], &SelectionSet) {
        match op {
            OperationDefinition::Mutation(m) =>
                (m.name.as_deref(), m.variable_definitions.as_slice(), &m.selection_set),
            OperationDefinition::Query(q) =>
                (q.name.as_deref(), q.variable_definitions.as_slice(), &q.selection_set),
            OperationDefinition::SelectionSet(ss) => (None, &[], ss),
            OperationDefinition::Subscription(s) =>
                (s.name.as_deref(), s.variable_definitions.as_slice(), &s.selection_set),
        }
    }
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::parse_schema::<String>(content)?.into_static())
    }
}
