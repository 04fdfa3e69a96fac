//! Infix text form of a template.
//!
//! `render` gives the plain expression, e.g. `(1 OR ?) = 2`.
//! `render_with_slots` prefixes every changeable slot with its binding
//! position, e.g. `(1 OR v1:?) = 2`, so a reader can tell which slot index
//! to address.

use crate::ast::node::{AstNode, NodeId};
use crate::ast::slot::SlotState;
use crate::ast::template::AstTemplate;

/// Render the expression and its expected answer.
pub fn render(template: &AstTemplate) -> String {
    format!("{} = {}", render_node(template, template.root(), false, true), template.answer())
}

/// Render with slot indices on every slot that is not locked.
pub fn render_with_slots(template: &AstTemplate) -> String {
    format!("{} = {}", render_node(template, template.root(), true, true), template.answer())
}

fn render_node(template: &AstTemplate, id: NodeId, slots: bool, top: bool) -> String {
    let Some(node) = template.node(id) else {
        return "<missing>".to_string();
    };

    match node {
        AstNode::Value(leaf) => {
            let text = leaf.value().map_or_else(|| "?".to_string(), |v| v.to_string());
            label(id, leaf.state().is_locked(), slots, text)
        }
        AstNode::Operator(interior) => {
            let keyword = match interior.state() {
                SlotState::Unset => "?".to_string(),
                SlotState::Open(op) | SlotState::Locked(op) => op.keyword().to_string(),
            };
            let keyword = label(id, interior.is_locked(), slots, keyword);
            let left = render_node(template, interior.left(), slots, false);

            let body = match interior.right() {
                Some(right) => {
                    let right = render_node(template, right, slots, false);
                    format!("{} {} {}", left, keyword, right)
                }
                None => format!("{} {}", keyword, left),
            };

            if top { body } else { format!("({})", body) }
        }
    }
}

fn label(id: NodeId, locked: bool, slots: bool, text: String) -> String {
    if slots && !locked {
        format!("{}:{}", id, text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::factory::{self, ComplexOperators};
    use crate::ast::builder::TemplateBuilder;
    use crate::ternary::{Operator, Trit};

    #[test]
    fn test_render_binary() {
        let t = factory::binary(Operator::Or, Trit::True, true, [Some(Trit::Neutral), None]).unwrap();
        assert_eq!(render(&t), "1 OR ? = 2");
        assert_eq!(render_with_slots(&t), "1 OR v1:? = 2");
    }

    #[test]
    fn test_render_open_operator() {
        let mut t = factory::binary(Operator::Imply, Trit::Neutral, false, [None, None]).unwrap();
        t.value_slot_mut(0).unwrap().set_value(Trit::False).unwrap();
        assert_eq!(render_with_slots(&t), "v0:0 o0:IMPLY v1:? = 1");
    }

    #[test]
    fn test_render_nested() {
        let t = factory::complex(
            ComplexOperators {
                left: Operator::Or,
                right: Operator::Xor,
                root: Operator::And,
            },
            Trit::Neutral,
            true,
            [None, Some(Trit::Neutral), None, Some(Trit::True)],
        )
        .unwrap();
        assert_eq!(render(&t), "(? OR 1) AND (? XOR 2) = 1");
    }

    #[test]
    fn test_render_not_and_unset_operator() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let y = b.open_value();
        let not = b.operator(SlotState::Locked(Operator::Not), x, None).unwrap();
        let and = b.operator(SlotState::Unset, not, Some(y)).unwrap();
        let t = b.finish(and, Trit::Neutral).unwrap();

        assert_eq!(render(&t), "(NOT ?) ? ? = 1");
        assert_eq!(render_with_slots(&t), "(NOT v0:?) o1:? v1:? = 1");
    }
}
