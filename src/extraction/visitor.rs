use swc_ecma_ast::{
    AssignExpr, AssignTarget, Expr, MemberExpr, MemberProp, ObjectLit, Prop, PropName,
    PropOrSpread, SimpleAssignTarget,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::{ExportNames, LOCALS_PROPERTY, identifier::is_exportable_name};

/// Collects the keys of every object literal assigned to `<sentinel>.locals`.
///
/// The walk is exhaustive: all matching assignments anywhere in the module
/// contribute to the same set.
pub struct LocalsVisitor<'a> {
    sentinel: &'a str,
    names: ExportNames,
}

impl<'a> LocalsVisitor<'a> {
    pub fn new(sentinel: &'a str) -> Self {
        Self {
            sentinel,
            names: ExportNames::new(),
        }
    }

    pub fn into_names(self) -> ExportNames {
        self.names
    }

    /// Matches `<sentinel>.locals`, non-computed on both sides.
    fn is_locals_target(&self, target: &AssignTarget) -> bool {
        let AssignTarget::Simple(SimpleAssignTarget::Member(MemberExpr { obj, prop, .. })) = target
        else {
            return false;
        };

        let Expr::Ident(object) = &**obj else {
            return false;
        };

        &*object.sym == self.sentinel
            && matches!(prop, MemberProp::Ident(name) if &*name.sym == LOCALS_PROPERTY)
    }

    fn collect_keys(&mut self, obj: &ObjectLit) {
        for prop in &obj.props {
            let PropOrSpread::Prop(prop) = prop else {
                continue;
            };

            if let Some(key) = property_key(prop)
                && is_exportable_name(&key)
            {
                self.names.insert(key);
            }
        }
    }
}

impl Visit for LocalsVisitor<'_> {
    fn visit_assign_expr(&mut self, node: &AssignExpr) {
        if self.is_locals_target(&node.left)
            && let Some(obj) = object_literal(&node.right)
        {
            self.collect_keys(obj);
        }

        node.visit_children_with(self);
    }
}

/// Unwraps parentheses around an object literal.
fn object_literal(expr: &Expr) -> Option<&ObjectLit> {
    match expr {
        Expr::Object(obj) => Some(obj),
        Expr::Paren(paren) => object_literal(&paren.expr),
        _ => None,
    }
}

/// Key string of a property, for identifier and string-literal keys only.
fn property_key(prop: &Prop) -> Option<String> {
    match prop {
        Prop::KeyValue(kv) => match &kv.key {
            PropName::Ident(ident) => Some(ident.sym.to_string()),
            PropName::Str(s) => s.value.as_str().map(str::to_string),
            _ => None,
        },
        Prop::Shorthand(ident) => Some(ident.sym.to_string()),
        _ => None,
    }
}
