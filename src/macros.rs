/// Construct an expression from a lisp-like template.
///
/// Operators are written prefix with two operands, `pow` raises the first
/// operand to the second, and `d <template> <variable>` differentiates the
/// template with respect to the variable. Numeric literals become number
/// nodes and identifiers become symbols. The macro expands to a
/// [`MaybeExpr`](crate::expr::MaybeExpr), so construction errors surface at
/// the end rather than panicking mid-template.
///
/// ```
/// use linden::defexpr;
///
/// let quadratic = defexpr!(+ (* a (pow x 2)) (+ (* b x) c)).unwrap();
/// assert_eq!(format!("{quadratic}"), "a * x ^ 2 + b * x + c");
///
/// let slope = defexpr!(d (pow x 2) x).unwrap();
/// assert_eq!(format!("{slope}"), "2 * x ^ (2 - 1)");
/// ```
#[macro_export]
macro_rules! defexpr {
    () => {};
    (($($a:tt)*)) => {
        $crate::defexpr!($($a)*)
    };
    (+ $a:tt $b:tt) => {
        $crate::expr::add($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (- $a:tt $b:tt) => {
        $crate::expr::sub($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (* $a:tt $b:tt) => {
        $crate::expr::mul($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (/ $a:tt $b:tt) => {
        $crate::expr::div($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (pow $a:tt $b:tt) => {
        $crate::expr::pow($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (d $a:tt $var:ident) => {
        $crate::derivative::differentiate(
            $crate::defexpr!($a),
            stringify!($var),
        )
    };
    ($a:literal) => {{
        let out: $crate::expr::MaybeExpr =
            Ok($crate::expr::Expr::from($a));
        out
    }};
    ($a:ident) => {
        $crate::expr::Expr::symbol(stringify!($a))
    };
}

#[cfg(test)]
mod test {
    use crate::{
        defexpr,
        expr::{BinaryOp::*, Node::*},
    };

    #[test]
    fn t_leaf_templates() {
        assert_eq!(defexpr!(2).unwrap().nodes(), &[Number(2.)]);
        assert_eq!(defexpr!(2.5).unwrap().nodes(), &[Number(2.5)]);
        assert_eq!(
            defexpr!(x).unwrap().nodes(),
            &[Symbol("x".to_string())]
        );
    }

    #[test]
    fn t_nested_templates() {
        let e = defexpr!(/ (- x y) (pow x 2)).unwrap();
        assert_eq!(
            e.nodes(),
            &[
                Symbol("x".to_string()),
                Symbol("y".to_string()),
                Binary(Sub, 0, 1),
                Symbol("x".to_string()),
                Number(2.),
                Binary(Pow, 3, 4),
                Binary(Div, 2, 5),
            ]
        );
    }

    #[test]
    fn t_redundant_parens() {
        assert_eq!(defexpr!((+ x 1)), defexpr!(+ x 1));
        assert_eq!(defexpr!(((x))), defexpr!(x));
    }

    #[test]
    fn t_derivative_template() {
        assert_eq!(
            defexpr!(d (* x x) x),
            defexpr!(* x x)
                .unwrap()
                .differentiate("x")
        );
    }
}
