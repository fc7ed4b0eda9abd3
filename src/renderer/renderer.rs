use crate::model::*;
use crate::renderer::components::Substitutions;
use crate::renderer::context::RenderContext;
use crate::renderer::traits::Render;

/// Renders a code-entity tree into tab-separated pseudocode.
///
/// A visitor carries the substitution table of one render pass. The render entry points take the
/// visitor by value so that captured placeholders never leak into another tree.
#[derive(Debug, Default)]
pub struct UnparseVisitor {
    substitutions: Substitutions,
}

impl UnparseVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a whole type declaration, with supertypes when `hierarchy` lists any.
    pub fn render_entity(
        mut self,
        entity: &TypeDeclaration,
        hierarchy: Option<&TypeHierarchy>,
    ) -> RenderContext {
        tracing::trace!(entity = %entity.name.name, kind = ?entity.kind, "rendering entity");
        let mut context = RenderContext::new();
        self.render_type_declaration(entity, hierarchy, &mut context);
        tracing::debug!(
            entity = %entity.name.name,
            placeholders = self.substitutions.len(),
            "rendered entity"
        );
        context
    }

    /// Renders a statement list as a method body would appear, without brackets.
    pub fn render_statements(mut self, statements: &[Statement]) -> RenderContext {
        let mut context = RenderContext::new();
        for (i, statement) in statements.iter().enumerate() {
            if i > 0 {
                context.new_line();
            }
            statement.render(&mut self, &mut context);
        }
        context
    }

    pub fn render_expression(mut self, expression: &Expression) -> RenderContext {
        let mut context = RenderContext::new();
        expression.render(&mut self, &mut context);
        context
    }

    pub(crate) fn resolve<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.substitutions.resolve(identifier)
    }

    pub(crate) fn capture(&mut self, identifier: &str, text: String) {
        tracing::debug!(placeholder = identifier, text = %text, "captured placeholder");
        if let Some(previous) = self.substitutions.insert(identifier, text) {
            tracing::trace!(placeholder = identifier, previous = %previous, "placeholder reassigned");
        }
    }

    fn render_type_declaration(
        &mut self,
        entity: &TypeDeclaration,
        hierarchy: Option<&TypeHierarchy>,
        context: &mut RenderContext,
    ) {
        context
            .indentation()
            .keyword(entity.kind.keyword())
            .space()
            .type_name(&entity.name);

        if let Some(hierarchy) = hierarchy.filter(|h| h.has_supertypes()) {
            context.text(" : ");
            let supertypes = hierarchy.superclass.iter().chain(&hierarchy.interfaces);
            for (i, supertype) in supertypes.enumerate() {
                if i > 0 {
                    context.text(", ");
                }
                context.type_name(supertype);
            }
        }

        context.new_line().indentation().text("{").new_line();

        {
            let mut body = context.indented();
            self.append_member_group(&entity.delegates, &mut body, 1, 2);
            self.append_member_group(&entity.events, &mut body, 1, 2);
            self.append_member_group(&entity.fields, &mut body, 1, 2);
            self.append_member_group(&entity.properties, &mut body, 1, 2);
            self.append_member_group(&entity.methods, &mut body, 2, 1);
        }

        context.indentation().text("}");
    }

    fn append_member_group<R: Render>(
        &mut self,
        group: &[R],
        context: &mut RenderContext,
        between: usize,
        trailing: usize,
    ) {
        for (i, member) in group.iter().enumerate() {
            member.render(self, context);

            let line_breaks = if i + 1 < group.len() { between } else { trailing };
            for _ in 0..line_breaks {
                context.new_line();
            }
        }
    }
}

/// Renders `entity` with a fresh visitor and returns the pseudocode.
pub fn unparse(entity: &TypeDeclaration, hierarchy: Option<&TypeHierarchy>) -> String {
    UnparseVisitor::new()
        .render_entity(entity, hierarchy)
        .into_string()
}

/// Renders a loaded [`EntityDocument`].
pub fn unparse_document(document: &EntityDocument) -> RenderContext {
    UnparseVisitor::new().render_entity(&document.entity, document.hierarchy.as_ref())
}
