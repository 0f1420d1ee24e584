use criterion::{black_box, criterion_group, criterion_main, Criterion};
use halo_compiler_html::ScopeRewriter;

fn rewrite_small_component(c: &mut Criterion) {
    let source = r#"
        :host { display: inline-flex; }
        :host([disabled]) { opacity: 0.5; }
        :host(:hover) { background: var(--surface-hover); }
        ::slotted(svg) { width: 1em; }
        button { all: unset; }
    "#;
    let rewriter = ScopeRewriter::new("ha").unwrap();

    c.bench_function("rewrite_small_component", |b| {
        b.iter(|| rewriter.rewrite(black_box(source), "button"))
    });
}

fn rewrite_large_component(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!(
            ":host([variant=\"v{i}\"]:hover) .part-{i} > ::slotted(span) {{ color: var(--c-{i}); }}\n\
             @media (min-width: {i}px) {{ input, label.l{i} {{ margin: {i}px; }} }}\n"
        ));
    }
    let rewriter = ScopeRewriter::new("ha").unwrap();

    c.bench_function("rewrite_large_component", |b| {
        b.iter(|| rewriter.rewrite(black_box(&source), "field"))
    });
}

criterion_group!(benches, rewrite_small_component, rewrite_large_component);
criterion_main!(benches);
