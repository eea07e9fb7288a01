/// Declares an evaluation test run against both builders.
///
/// ```ignore
/// eval_case! {
///     name: simple_sum,
///     build: |b| b.addition(b.number(1), b.number(2)),
///     value: 3,
///     formatted: "1 + 2",
/// }
/// ```
macro_rules! eval_case {
    (
        name: $name:ident,
        build: |$b:ident| $build:expr,
        value: $value:expr,
        formatted: $formatted:expr $(,)?
    ) => {
        mod $name {
            #[allow(unused_imports)]
            use arbor::{ArenaBuilder, BoxBuilder, Bump, ExprBuilder, ExprDisplay, evaluate};
            use pretty_assertions::assert_eq;

            fn build<B: ExprBuilder>($b: B) -> arbor::Expr<B> {
                $build
            }

            #[test]
            fn arena() {
                let arena = Bump::new();
                let b = ArenaBuilder::new(&arena);
                let expr = build(b);
                assert_eq!(evaluate(b, &expr), $value);
                assert_eq!(expr.display(b), $formatted);
            }

            #[test]
            fn boxed() {
                let b = BoxBuilder::new();
                let expr = build(b);
                assert_eq!(evaluate(b, &expr), $value);
                assert_eq!(expr.display(b), $formatted);
            }
        }
    };
}
