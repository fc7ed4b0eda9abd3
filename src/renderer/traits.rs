use crate::renderer::context::RenderContext;
use crate::renderer::renderer::UnparseVisitor;

/// Core rendering trait for every node of the code-entity tree.
///
/// Implementations append to `context` and never fail; nodes that cannot be classified render the
/// unknown marker instead.
pub trait Render {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext);
}
