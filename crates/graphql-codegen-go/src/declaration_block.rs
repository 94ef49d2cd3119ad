use crate::comments;

/// The structural kind of a generated Go type declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclarationKind {
    /// A string-backed named type (Go has no native enumerations).
    Enum,
    Struct,
}
impl DeclarationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Enum => "string",
            Self::Struct => "struct",
        }
    }

    fn empty_body(&self) -> Option<&'static str> {
        match self {
            Self::Enum => None,
            Self::Struct => Some("{}"),
        }
    }
}

/// Rendering hooks shared by every [`DeclarationBlock`] created by a
/// generator.
#[derive(Clone, Debug)]
pub struct DeclarationBlockConfig {
    /// Emitted directly inside the opening brace and directly before the
    /// closing brace of a block.
    pub block_wrapper: String,

    /// Post-processes the fully braced block text.
    pub block_transformer: fn(&str) -> String,
}
impl std::default::Default for DeclarationBlockConfig {
    fn default() -> Self {
        Self {
            block_wrapper: String::new(),
            block_transformer: |block| block.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MethodCall {
    ignore_block_wrapper: bool,
    name: String,
}

/// A single `type ...` declaration.
///
/// Every `with_*` method consumes the block and returns it with one more
/// attribute set, so a declaration is described as a chain of calls ending in
/// [`DeclarationBlock::string`]. Rendering is a pure function of the
/// attributes: calling `string()` repeatedly yields identical text.
///
/// No attempt is made to validate the resulting Go syntax; attribute
/// combinations that make no sense render whatever partial text they
/// describe.
#[derive(Clone, Debug)]
pub struct DeclarationBlock {
    block: Option<String>,
    comment: Option<String>,
    config: DeclarationBlockConfig,
    content: Option<String>,
    implements: Vec<String>,
    kind: Option<DeclarationKind>,
    method_call: Option<MethodCall>,
    name: String,
}
impl DeclarationBlock {
    pub fn new(config: &DeclarationBlockConfig) -> Self {
        Self {
            block: None,
            comment: None,
            config: config.clone(),
            content: None,
            implements: vec![],
            kind: None,
            method_call: None,
            name: String::new(),
        }
    }

    pub fn as_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Attaches a GraphQL description, rendered as Go line comments above the
    /// declaration. `None` and blank descriptions are ignored.
    pub fn with_comment(mut self, description: Option<&str>) -> Self {
        let comment = comments::transform_comment(description, 0);
        if !comment.is_empty() {
            self.comment = Some(comment);
        }
        self
    }

    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    /// Raw, already formatted text emitted directly after the header.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Wraps the rendered block in a call expression: `name(<block>)`.
    pub fn with_method_call(
        mut self,
        name: impl Into<String>,
        ignore_block_wrapper: bool,
    ) -> Self {
        self.method_call = Some(MethodCall {
            ignore_block_wrapper,
            name: name.into(),
        });
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Names of the marker capabilities (interfaces) this declaration
    /// satisfies. Each one is rendered as an `Is<Name>()` marker method.
    pub fn implements(mut self, interfaces: Vec<String>) -> Self {
        self.implements = interfaces;
        self
    }

    pub fn string(&self) -> String {
        let mut result = format!("type {}", self.name);

        if let Some(kind) = self.kind {
            result.push(' ');
            result.push_str(kind.keyword());
        }

        let block = self.block.as_deref().filter(|block| !block.is_empty());
        let content = self.content.as_deref().filter(|content| !content.is_empty());
        if let Some(block) = block {
            result.push(' ');
            if let Some(content) = content {
                result.push_str(content);
            }
            result.push_str(&self.render_block(block));
        } else if let Some(content) = content {
            result.push(' ');
            result.push_str(content);
        } else if let Some(empty_body) = self.kind.and_then(|kind| kind.empty_body()) {
            result.push(' ');
            result.push_str(empty_body);
        }

        for interface in &self.implements {
            result.push_str(&format!(
                "\nfunc (*{}) Is{interface}() {{}}",
                self.name,
            ));
        }

        format!("{}{result}\n", self.comment.as_deref().unwrap_or_default())
    }

    fn render_block(&self, block: &str) -> String {
        let ignore_wrapper = self.method_call.as_ref()
            .is_some_and(|call| call.ignore_block_wrapper);
        let wrapper =
            if ignore_wrapper {
                ""
            } else {
                self.config.block_wrapper.as_str()
            };

        let before = format!("{{{wrapper}");
        let after = format!("{wrapper}}}");
        let braced = [before.as_str(), block, after.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        let transformed = (self.config.block_transformer)(&braced);

        match &self.method_call {
            Some(call) => format!("{}({transformed})", call.name),
            None => transformed,
        }
    }
}
