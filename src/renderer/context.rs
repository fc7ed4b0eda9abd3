use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::model::{ParameterName, TypeArgument, TypeName};
use crate::renderer::renderer::UnparseVisitor;
use crate::renderer::traits::Render;

/// Separates every token of the output.
pub const SEPARATOR: char = '\t';
pub const CURSOR_MARKER: &str = "!!";
pub const UNKNOWN_MARKER: &str = "???";
pub const STRING_LITERAL_MARKER: &str = "\"str\"";
/// Printed for a bracketed block without statements.
pub const EMPTY_BLOCK: &str = "{\t}";

/// Output buffer of a render pass.
///
/// Tokens are appended one at a time, each preceded by [`SEPARATOR`]. Line breaks carry no
/// indentation of their own; callers follow them with [`RenderContext::indentation`].
#[derive(Debug, Default, Clone)]
pub struct RenderContext {
    buffer: String,
    level: usize,
    seen_namespaces: BTreeSet<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Namespaces of every type printed so far, in lexical order.
    pub fn seen_namespaces(&self) -> impl Iterator<Item = &str> {
        self.seen_namespaces.iter().map(String::as_str)
    }

    /// Raises the indentation level until the returned guard is dropped.
    pub fn indented(&mut self) -> IndentGuard<'_> {
        let previous = self.level;
        self.level += 1;
        IndentGuard {
            context: self,
            previous,
        }
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buffer.push(SEPARATOR);
        self.buffer.push_str(text.trim());
        self
    }

    pub fn keyword(&mut self, keyword: &str) -> &mut Self {
        self.text(keyword)
    }

    /// Delimiters must be part of `comment`.
    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.text(comment)
    }

    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn space(&mut self) -> &mut Self {
        self.buffer.push(SEPARATOR);
        self
    }

    pub fn indentation(&mut self) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push(SEPARATOR);
        }
        self
    }

    /// No separator precedes the marker.
    pub fn cursor_position(&mut self) -> &mut Self {
        self.buffer.push_str(CURSOR_MARKER);
        self
    }

    pub fn unknown_marker(&mut self) -> &mut Self {
        self.text(UNKNOWN_MARKER)
    }

    /// String contents are never printed.
    pub fn string_literal(&mut self, _value: &str) -> &mut Self {
        self.text(STRING_LITERAL_MARKER)
    }

    pub fn type_name_only(&mut self, type_name: &TypeName) -> &mut Self {
        if let Some(namespace) = &type_name.namespace {
            self.seen_namespaces.insert(namespace.clone());
        }
        self.text(&type_name.name)
    }

    pub fn type_name(&mut self, type_name: &TypeName) -> &mut Self {
        self.type_name_only(type_name);
        if type_name.has_type_arguments() {
            self.type_parameters(&type_name.type_arguments);
        }
        self
    }

    pub fn type_parameters(&mut self, arguments: &[TypeArgument]) -> &mut Self {
        self.text("<");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.buffer.push(SEPARATOR);
                self.buffer.push(',');
            }
            match argument {
                TypeArgument::Unknown => {
                    self.text("?");
                }
                TypeArgument::Bound(bound) => {
                    self.type_name(bound);
                }
                TypeArgument::Free(short_name) => {
                    self.buffer.push(SEPARATOR);
                    self.buffer.push_str(short_name);
                }
            }
        }
        self.text(">")
    }

    pub fn parameter_list(&mut self, parameters: &[ParameterName]) -> &mut Self {
        self.text("(");
        for (i, parameter) in parameters.iter().enumerate() {
            if parameter.passed_by_reference && parameter.value_type.is_value_type {
                self.keyword("ref").space();
            }
            if parameter.is_output {
                self.keyword("out").space();
            }
            if parameter.is_optional {
                self.keyword("opt").space();
            }
            if parameter.is_parameter_array {
                self.keyword("params").space();
            }

            self.type_name(&parameter.value_type)
                .space()
                .text(&parameter.name);

            if i + 1 < parameters.len() {
                self.text(",").space();
            }
        }
        self.text(")")
    }

    /// Appends `block` one level deeper than the current indentation.
    ///
    /// With `with_brackets` the block is wrapped in `{`/`}` on their own lines; an empty block then
    /// prints as [`EMPTY_BLOCK`].
    pub fn statement_block<R: Render>(
        &mut self,
        block: &[R],
        visitor: &mut UnparseVisitor,
        with_brackets: bool,
    ) -> &mut Self {
        if block.is_empty() {
            if with_brackets {
                self.text(EMPTY_BLOCK);
            }
            return self;
        }

        if with_brackets {
            self.new_line().indentation().text("{");
        }

        {
            let mut body = self.indented();
            for statement in block {
                body.new_line();
                statement.render(visitor, &mut body);
            }
        }

        if with_brackets {
            self.new_line().indentation().text("}");
        }
        self
    }

    pub(crate) fn absorb_namespaces(&mut self, other: &RenderContext) {
        self.seen_namespaces
            .extend(other.seen_namespaces.iter().cloned());
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// Restores the indentation level of its [`RenderContext`] when dropped.
pub struct IndentGuard<'a> {
    context: &'a mut RenderContext,
    previous: usize,
}

impl Deref for IndentGuard<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.context
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.context
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.context.level = self.previous;
    }
}
