use crate::model::*;
use crate::renderer::components::{is_placeholder, is_verbatim_literal};
use crate::renderer::context::RenderContext;
use crate::renderer::renderer::UnparseVisitor;
use crate::renderer::traits::Render;

/// Stands in for the body of an `unsafe` block, which is never printed.
pub const UNSAFE_BODY_COMMENT: &str = "/* content ignored */";

impl Render for DelegateDeclaration {
    fn render(&self, _visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        context
            .indentation()
            .keyword("delegate")
            .space()
            .type_name(&self.name)
            .parameter_list(&self.parameters)
            .text(";");
    }
}

impl Render for EventDeclaration {
    fn render(&self, _visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        context
            .indentation()
            .keyword("event")
            .space()
            .type_name(&self.handler_type)
            .space()
            .text(&self.name)
            .text(";");
    }
}

impl Render for FieldDeclaration {
    fn render(&self, _visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        context.indentation();
        if self.is_static {
            context.keyword("static").space();
        }
        context
            .type_name(&self.value_type)
            .space()
            .text(&self.name)
            .text(";");
    }
}

impl Render for PropertyDeclaration {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        context
            .indentation()
            .type_name(&self.value_type)
            .space()
            .text(&self.name);

        let has_body = !self.get.is_empty() || !self.set.is_empty();
        if !has_body {
            // Accessor declarations stay on the same line.
            context.text(" { ");
            if self.has_getter {
                context.keyword("get").text(";").space();
            }
            if self.has_setter {
                context.keyword("set").text(";").space();
            }
            context.text("}");
            return;
        }

        context.new_line().indentation();
        {
            let mut accessors = context.indented();
            accessors.text("{").new_line();
            if self.has_getter {
                append_accessor(&self.get, "get", visitor, &mut accessors);
            }
            if self.has_setter {
                append_accessor(&self.set, "set", visitor, &mut accessors);
            }
        }
        context.indentation().text("}");
    }
}

fn append_accessor(
    body: &[Statement],
    keyword: &str,
    visitor: &mut UnparseVisitor,
    context: &mut RenderContext,
) {
    context.indentation().text(keyword);
    if body.is_empty() {
        context.text(";");
    } else {
        context.statement_block(body, visitor, true);
    }
    context.new_line();
}

impl Render for MethodDeclaration {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        let method = &self.name;
        context.indentation();
        if method.is_static {
            context.keyword("static").space();
        }
        context
            .type_name(&method.return_type)
            .space()
            .text(&method.name);
        if method.has_type_parameters() {
            context.type_parameters(&method.type_parameters);
        }
        context
            .parameter_list(&method.parameters)
            .statement_block(&self.body, visitor, true);
    }
}

impl Render for Statement {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        match self {
            Statement::Assignment {
                reference,
                expression,
            } => render_assignment(reference, expression, visitor, context),
            Statement::Break => {
                context.indentation().keyword("break").text(";");
            }
            Statement::Continue => {
                context.indentation().keyword("continue").text(";");
            }
            Statement::Expression { expression } => {
                context.indentation();
                expression.render(visitor, context);
                context.text(";");
            }
            Statement::Goto { label } => {
                context
                    .indentation()
                    .keyword("goto")
                    .space()
                    .text(label)
                    .text(";");
            }
            Statement::Labelled { label, statement } => {
                context.indentation().keyword(label).text(":").new_line();
                statement.render(visitor, context);
            }
            Statement::Return { expression } => {
                context.indentation().keyword("return");
                if let Some(expression) = expression {
                    context.space();
                    expression.render(visitor, context);
                }
                context.text(";");
            }
            Statement::Throw { reference } => {
                let exception = visitor.resolve(&reference.identifier);
                context
                    .indentation()
                    .keyword("throw")
                    .space()
                    .keyword("new")
                    .space()
                    .text(exception)
                    .text("();");
            }
            Statement::VariableDeclaration(declaration) => {
                // Temporaries are inlined where they are used.
                if is_placeholder(&declaration.reference.identifier) {
                    return;
                }
                context.indentation().type_name(&declaration.var_type).space();
                declaration.reference.render(visitor, context);
                context.text(";");
            }
            Statement::EventSubscription {
                reference,
                operation,
                expression,
            } => {
                context.indentation();
                reference.render(visitor, context);
                context.text(match operation {
                    EventSubscriptionOperation::Add => " += ",
                    EventSubscriptionOperation::Remove => " -= ",
                    EventSubscriptionOperation::Unknown => " ?? ",
                });
                expression.render(visitor, context);
            }
            Statement::Unknown => {
                context.indentation().unknown_marker().text(";");
            }
            Statement::DoLoop { condition, body } => {
                context
                    .indentation()
                    .keyword("do")
                    .statement_block(body, visitor, true);
                context
                    .new_line()
                    .indentation()
                    .keyword("while")
                    .space()
                    .text("(");
                condition.render(visitor, &mut context.indented());
                context.new_line().indentation().text(")");
            }
            Statement::ForEach {
                declaration,
                looped_reference,
                body,
            } => {
                context
                    .indentation()
                    .keyword("foreach")
                    .space()
                    .text("(")
                    .type_name(&declaration.var_type)
                    .space();
                declaration.reference.render(visitor, context);
                context.space().keyword("in").space();
                looped_reference.render(visitor, context);
                context.text(")").statement_block(body, visitor, true);
            }
            Statement::For {
                init,
                condition,
                step,
                body,
            } => {
                context.indentation().keyword("for").space().text("(");
                {
                    let mut header = context.indented();
                    header.statement_block(init, visitor, true).text(";");
                    condition.render(visitor, &mut header);
                    header.text(";").statement_block(step, visitor, true);
                }
                context
                    .new_line()
                    .indentation()
                    .text(")")
                    .statement_block(body, visitor, true);
            }
            Statement::IfElse {
                condition,
                then,
                otherwise,
            } => {
                context.indentation().keyword("if").space().text("(");
                condition.render(visitor, context);
                context.text(")").statement_block(then, visitor, true);

                if !otherwise.is_empty() {
                    context
                        .new_line()
                        .indentation()
                        .keyword("else")
                        .statement_block(otherwise, visitor, true);
                }
            }
            Statement::Lock { reference, body } => {
                context.indentation().keyword("lock").space().text("(");
                reference.render(visitor, context);
                context.text(")").statement_block(body, visitor, true);
            }
            Statement::Switch {
                reference,
                sections,
                default_section,
            } => render_switch(reference, sections, default_section, visitor, context),
            Statement::Try {
                body,
                catch_blocks,
                finally,
            } => {
                context
                    .indentation()
                    .keyword("try")
                    .statement_block(body, visitor, true);

                for catch_block in catch_blocks {
                    catch_block.render(visitor, context);
                }

                if !finally.is_empty() {
                    context
                        .new_line()
                        .indentation()
                        .keyword("finally")
                        .statement_block(finally, visitor, true);
                }
            }
            Statement::Unchecked { body } => {
                context
                    .indentation()
                    .keyword("unchecked")
                    .statement_block(body, visitor, true);
            }
            Statement::Unsafe { .. } => {
                context
                    .indentation()
                    .keyword("unsafe")
                    .text(" { ")
                    .comment(UNSAFE_BODY_COMMENT)
                    .text(" }");
            }
            Statement::Using { reference, body } => {
                context.indentation().keyword("using").space().text("(");
                reference.render(visitor, context);
                context.text(")").statement_block(body, visitor, true);
            }
            Statement::While { condition, body } => {
                context.indentation().keyword("while").space().text("(");
                condition.render(visitor, &mut context.indented());
                context
                    .new_line()
                    .indentation()
                    .text(")")
                    .statement_block(body, visitor, true);
            }
        }
    }
}

/// Placeholder assignments print nothing; their right-hand side is captured for later references.
fn render_assignment(
    reference: &Reference,
    expression: &Expression,
    visitor: &mut UnparseVisitor,
    context: &mut RenderContext,
) {
    if let Reference::Variable { identifier } = reference {
        if is_placeholder(identifier) {
            let mut scratch = RenderContext::new();
            expression.render(visitor, &mut scratch);
            context.absorb_namespaces(&scratch);
            visitor.capture(identifier, scratch.as_str().trim().to_string());
            return;
        }
    }

    context.indentation();
    reference.render(visitor, context);
    context.text(" = ");
    expression.render(visitor, context);
    context.text(";");
}

fn render_switch(
    reference: &VariableReference,
    sections: &[CaseBlock],
    default_section: &[Statement],
    visitor: &mut UnparseVisitor,
    context: &mut RenderContext,
) {
    context.indentation().keyword("switch").space().text("(");
    reference.render(visitor, context);
    context.text(")").new_line().indentation();

    {
        let mut cases = context.indented();
        cases.text("{");

        for section in sections {
            cases.new_line().indentation().keyword("case").space();
            section.label.render(visitor, &mut cases);
            cases.text(":").statement_block(&section.body, visitor, false);
        }

        if !default_section.is_empty() {
            cases
                .new_line()
                .indentation()
                .keyword("default")
                .text(":")
                .statement_block(default_section, visitor, false);
        }

        cases.new_line();
    }

    context.indentation().text("}");
}

impl Render for CatchBlock {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        context.new_line().indentation().keyword("catch");

        if self.kind != CatchBlockKind::General {
            context
                .space()
                .text("(")
                .type_name(&self.parameter.value_type);
            if self.kind != CatchBlockKind::Unnamed {
                context.space().text(&self.parameter.name);
            }
            context.text(")");
        }

        context.statement_block(&self.body, visitor, true);
    }
}

impl Render for VariableReference {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        context.text(visitor.resolve(&self.identifier));
    }
}

impl Render for Reference {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        let (receiver, member) = match self {
            Reference::Variable { identifier } => {
                context.text(visitor.resolve(identifier));
                return;
            }
            Reference::IndexAccess { expression } => {
                expression.render(visitor, context);
                return;
            }
            Reference::Unknown => {
                context.unknown_marker();
                return;
            }
            Reference::Field { reference, field } => (reference, field),
            Reference::Property {
                reference,
                property,
            } => (reference, property),
            Reference::Method { reference, method } => (reference, method),
            Reference::Event { reference, event } => (reference, event),
        };

        receiver.render(visitor, context);
        context.text(".").text(member);
    }
}

impl Render for Expression {
    fn render(&self, visitor: &mut UnparseVisitor, context: &mut RenderContext) {
        match self {
            Expression::Completion {
                variable,
                type_reference,
                token,
            } => {
                if let Some(variable) = variable {
                    variable.render(visitor, context);
                    context.text(".");
                } else if let Some(type_reference) = type_reference {
                    context.type_name(type_reference).text(".");
                }
                context.text(token).cursor_position();
            }
            Expression::Composed { references } => {
                context.keyword("composed").text("(");
                for (i, reference) in references.iter().enumerate() {
                    if i > 0 {
                        context.text(", ");
                    }
                    reference.render(visitor, context);
                }
                context.text(")");
            }
            Expression::IfElse {
                condition,
                then,
                otherwise,
            } => {
                context.text("(");
                condition.render(visitor, context);
                context.text(")").space().text("?").space();
                then.render(visitor, context);
                context.space().text(":").space();
                otherwise.render(visitor, context);
            }
            Expression::Invocation {
                reference,
                method,
                arguments,
            } => {
                if method.is_constructor {
                    context
                        .keyword("new")
                        .space()
                        .text(&method.declaring_type.name);
                } else {
                    if method.is_static {
                        context.text(&method.declaring_type.name);
                    } else {
                        reference.render(visitor, context);
                    }
                    context.text(".").text(&method.name);
                }

                context.text("(");
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        context.text(", ");
                    }
                    argument.render(visitor, context);
                }
                context.text(")");
            }
            Expression::Lambda { parameters, body } => {
                context
                    .parameter_list(parameters)
                    .space()
                    .text("=>")
                    .statement_block(body, visitor, true);
            }
            Expression::LoopHeaderBlock { body } => {
                context.statement_block(body, visitor, true);
            }
            Expression::Constant { value } => match value.as_deref() {
                None | Some("") => {}
                Some(value) if is_verbatim_literal(value) => {
                    context.keyword(value);
                }
                Some(value) => {
                    context.string_literal(value);
                }
            },
            Expression::Null => {
                context.keyword("null");
            }
            Expression::Reference { reference } => reference.render(visitor, context),
            Expression::Unknown => {
                context.unknown_marker();
            }
            Expression::Unary { operator, operand } => {
                let (prefix, postfix) = unary_affixes(*operator);
                if let Some(prefix) = prefix {
                    context.text(prefix);
                }
                operand.render(visitor, context);
                if let Some(postfix) = postfix {
                    context.text(postfix);
                }
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                left.render(visitor, context);
                context.text(operator.symbol());
                right.render(visitor, context);
            }
            Expression::Cast {
                reference,
                target_type,
                operator,
            } => match operator {
                CastOperator::SafeCast => {
                    reference.render(visitor, context);
                    context.text(" as ").text(&target_type.name);
                }
                CastOperator::Cast => {
                    context.text(&format!("({}) ", target_type.name));
                    reference.render(visitor, context);
                }
            },
            Expression::TypeCheck {
                reference,
                checked_type,
            } => {
                reference.render(visitor, context);
                context.text(" instanceof ").text(&checked_type.name);
            }
            Expression::IndexAccess { reference, indices } => {
                reference.render(visitor, context);
                context.text("[");
                for (i, index) in indices.iter().enumerate() {
                    if i > 0 {
                        context.text(",");
                    }
                    index.render(visitor, context);
                }
                context.text("]");
            }
        }
    }
}

fn unary_affixes(operator: UnaryOperator) -> (Option<&'static str>, Option<&'static str>) {
    match operator {
        UnaryOperator::Not => (Some("!"), None),
        UnaryOperator::PreIncrement => (Some("++"), None),
        UnaryOperator::PostIncrement => (None, Some("++")),
        UnaryOperator::PreDecrement => (Some("--"), None),
        UnaryOperator::PostDecrement => (None, Some("--")),
        UnaryOperator::Plus => (Some("+"), None),
        UnaryOperator::Minus => (Some("-"), None),
        UnaryOperator::Complement => (Some("~"), None),
        UnaryOperator::Unknown => (Some("?"), None),
    }
}
