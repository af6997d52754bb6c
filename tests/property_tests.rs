// Whole-translation properties: line accounting, indentation balance,
// independence of top-level definitions, fresh state per call.

use c2py::generator::Generator;
use c2py::parser::frontend::parse;
use c2py::{translate, Translation};
use pretty_assertions::assert_eq;

const SAMPLES: &[&str] = &[
    "int add(a, b) { return a + b; }",
    "void f() { int x; x = 5; if (x > 3) { printf(\"big\"); } else { printf(\"small\"); } }",
    "void f() { for (i = 0; i < 10; i = i + 1) { printf(i); } }",
    "void f(int x) { switch (x) { case 1: printf(\"one\"); default: printf(\"other\"); } }",
    "void f() { int *p; int y = 2; }",
    "void f() { while (a) { if (b) { for (int i = 0; i < n; i++) { switch (i) { case 1: g(); } } } } }",
    "void noop() { }",
];

fn generator_for(source: &str) -> Generator {
    let program = parse(source).unwrap();
    let mut generator = Generator::new();
    generator.visit_program(&program);
    generator
}

#[test]
fn test_output_line_count_matches_emitted_lines() {
    for source in SAMPLES {
        let generator = generator_for(source);
        let emitted = generator.lines().len();

        assert_eq!(translate(source).lines().count(), emitted, "{}", source);
    }
}

#[test]
fn test_indentation_returns_to_zero() {
    for source in SAMPLES {
        assert_eq!(generator_for(source).depth(), 0, "{}", source);
    }
}

#[test]
fn test_deep_nesting_restores_each_level() {
    let python = translate(
        "void f() {
            while (a) {
                if (b) {
                    for (i = 0; i < n; i++) {
                        if (c) { g(); }
                        h();
                    }
                    k();
                }
                m();
            }
            z();
        }",
    );

    assert_eq!(
        python,
        "def f():
    while a:
        if b:
            for i in range(0, n):
                if c:
                    g()
                h()
            k()
        m()
    z()"
    );
}

#[test]
fn test_reordering_functions_reorders_blocks() {
    let first = "int one(int a) { if (a) { return 1; } return 0; }";
    let second = "void two() { int v[4]; v[0] = 2; }";

    let forward = translate(&format!("{}\n{}", first, second));
    let backward = translate(&format!("{}\n{}", second, first));

    assert_eq!(forward, format!("{}\n{}", translate(first), translate(second)));
    assert_eq!(backward, format!("{}\n{}", translate(second), translate(first)));
}

#[test]
fn test_calls_do_not_share_state() {
    let inside_switch = "void f(int x) { switch (x) { case 1: a(); case 2: b(); } }";
    let plain = "void g() { c(); }";

    let once = translate(plain);
    translate(inside_switch);
    assert_eq!(translate(plain), once);
    assert_eq!(
        translate(inside_switch),
        "def f(x):\n    # switch(x) equivalent\n    if x == 1:\n        a()\n    elif x == 2:\n        b()"
    );
}

#[test]
fn test_translation_summary() {
    let translation = Translation::of("void f() { int *p; x += 1; y = 1; }");
    assert!(translation.parsed);
    assert_eq!(translation.unhandled, 2);
    assert_eq!(translation.text, translate("void f() { int *p; x += 1; y = 1; }"));

    let failed = Translation::of("int f( {");
    assert!(!failed.parsed);
    assert_eq!(failed.unhandled, 0);
}

#[test]
fn test_continued_string_stays_on_one_line() {
    let source = "void f() { g(\"a\\\n b\"); }";
    let generator = generator_for(source);

    assert_eq!(translate(source), "def f():\n    g(\"a b\")");
    assert_eq!(translate(source).lines().count(), generator.lines().len());
}
