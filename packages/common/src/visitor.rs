use crate::class_value::ClassValue;

/// Visitor pattern for traversing class values immutably
///
/// This trait provides default implementations that walk the entire value.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_class_value(&mut self, value: &ClassValue) {
        walk_class_value(self, value);
    }

    fn visit_token(&mut self, _token: &str) {
        // Leaf node, no children to walk
    }

    fn visit_condition(&mut self, key: &ClassValue, enabled: bool) {
        walk_condition(self, key, enabled);
    }
}

/// Mutable visitor pattern for rewriting class values
///
/// Similar to Visitor, but provides mutable access to nodes.
/// Use this when you need to rewrite tokens in place, e.g. to add a prefix.
pub trait VisitorMut: Sized {
    fn visit_class_value_mut(&mut self, value: &mut ClassValue) {
        walk_class_value_mut(self, value);
    }

    fn visit_token_mut(&mut self, _token: &mut String) {
        // Leaf node, no children to walk
    }

    fn visit_condition_mut(&mut self, key: &mut ClassValue, enabled: bool) {
        if enabled {
            self.visit_class_value_mut(key);
        }
    }
}

// Default walk implementations for immutable visitor

pub fn walk_class_value<V: Visitor>(visitor: &mut V, value: &ClassValue) {
    match value {
        ClassValue::Empty => {
            // Contributes nothing
        }
        ClassValue::Token(token) => visitor.visit_token(token),
        ClassValue::Seq(items) => {
            for item in items {
                visitor.visit_class_value(item);
            }
        }
        ClassValue::Conditional(entries) => {
            for (key, enabled) in entries {
                visitor.visit_condition(key, *enabled);
            }
        }
    }
}

pub fn walk_condition<V: Visitor>(visitor: &mut V, key: &ClassValue, enabled: bool) {
    if enabled {
        visitor.visit_class_value(key);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_class_value_mut<V: VisitorMut>(visitor: &mut V, value: &mut ClassValue) {
    match value {
        ClassValue::Empty => {}
        ClassValue::Token(token) => visitor.visit_token_mut(token),
        ClassValue::Seq(items) => {
            for item in items {
                visitor.visit_class_value_mut(item);
            }
        }
        ClassValue::Conditional(entries) => {
            for (key, enabled) in entries {
                visitor.visit_condition_mut(key, *enabled);
            }
        }
    }
}
