use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let children = expr.children();
            let descend = children.last()
                .map_or(false, |&last| !self.is_last_visited(last));
            if descend {
                self.stack.extend(children.into_iter().rev());
            } else {
                return self.visit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::{ExpressionType::*, TrigKind};

    #[test]
    fn post_order() {
        // sin(x) + y^2
        let expr = Expr::Sum(vec![
            Expr::trig(TrigKind::Sin, Expr::Variable('x')),
            Expr::power(Expr::Variable('y'), Expr::Constant(2.0)),
        ]);
        let visited = expr.post_order_iter()
            .map(|expr| expr.expression_type())
            .collect::<Vec<_>>();

        assert_eq!(visited, vec![Variable, Sin, Variable, Constant, Power, Sum]);
    }
}
