use crate::{rewrite_stylesheet, verify_balance, BalanceCounts, RewriteError, ScopeRewriter};

#[test]
fn test_host_only_stylesheet() {
    let out = rewrite_stylesheet(":host { color: red; }", "widget").expect("Failed to rewrite");
    assert_eq!(out.css, ".ha-widget { color: red; }");
    assert!(out.is_clean());
}

#[test]
fn test_rewrite_equivalence() {
    let source = r#":host {
  display: block;
}

:host([open]) {
  outline: 1px solid;
}

:host(:hover) {
  opacity: 0.9;
}

.frame > ::slotted(img) {
  width: 100%;
}

::slotted(img) {
  display: block;
}

button {
  cursor: pointer;
}
"#;

    let out = rewrite_stylesheet(source, "foo").expect("Failed to rewrite");

    println!("Rewritten CSS:\n{}", out.css);

    assert!(out.css.contains(".ha-foo {\n  display: block;"));
    assert!(out.css.contains(".ha-foo[open] {"));
    assert!(out.css.contains(".ha-foo:hover {"));
    assert!(out.css.contains(".frame > img {"));
    assert!(out.css.contains(".ha-foo img {"));
    assert!(out.css.contains(".ha-foo button {"));
    assert!(!out.css.contains(":host"));
    assert!(!out.css.contains("::slotted"));
    assert!(out.is_clean());
}

#[test]
fn test_host_descendant_slotted() {
    let out = rewrite_stylesheet(":host ::slotted(img) { x: 1; }", "foo").unwrap();
    assert_eq!(out.css, ".ha-foo img { x: 1; }");
}

#[test]
fn test_host_attribute_with_pseudo() {
    let out = rewrite_stylesheet(":host([disabled]:hover) button { x: 1; }", "foo").unwrap();
    assert_eq!(out.css, ".ha-foo[disabled]:hover button { x: 1; }");
}

#[test]
fn test_host_class() {
    let out = rewrite_stylesheet(":host(.compact) { x: 1; }", "foo").unwrap();
    assert_eq!(out.css, ".ha-foo.compact { x: 1; }");
}

#[test]
fn test_selector_list_mixed() {
    let out = rewrite_stylesheet(":host(:focus-within), input:focus { x: 1; }", "field").unwrap();
    assert_eq!(out.css, ".ha-field:focus-within, .ha-field input:focus { x: 1; }");
}

#[test]
fn test_media_query_passthrough() {
    let source = "@media (prefers-color-scheme: dark) {\n  :host { color: white; }\n  a { color: cyan; }\n}";
    let out = rewrite_stylesheet(source, "link").unwrap();
    assert_eq!(
        out.css,
        "@media (prefers-color-scheme: dark) {\n  .ha-link { color: white; }\n  .ha-link a { color: cyan; }\n}"
    );
}

#[test]
fn test_unrecognised_selector_left_unchanged() {
    let source = ":host-context(.dark) { color: white; }\n.label { color: gray; }";
    let out = rewrite_stylesheet(source, "foo").unwrap();

    assert_eq!(out.css, source);
    assert_eq!(out.residual, vec![":host-context(.dark) { color: white; }"]);
}

#[test]
fn test_commented_shadow_syntax_is_not_residual() {
    let source = "/* dark mode via :host-context(.dark)\n   and ::slotted(*) later */\n:host { x: 1; }";
    let out = rewrite_stylesheet(source, "foo").unwrap();

    assert!(out.css.starts_with("/* dark mode via :host-context(.dark)"));
    assert!(out.css.ends_with(".ha-foo { x: 1; }"));
    assert!(out.is_clean(), "{:?}", out.residual);
}

#[test]
fn test_residual_after_comment_on_same_line() {
    let source = "/* note */ :host-context(.dark) { x: 1; }";
    let out = rewrite_stylesheet(source, "foo").unwrap();
    assert_eq!(out.residual, vec![":host-context(.dark) { x: 1; }"]);
}

#[test]
fn test_compound_slotted_becomes_descendant() {
    let source = ":host::slotted(img) { x: 1; }\nslot[name=\"icon\"]::slotted(svg) { y: 2; }\n:host(.compact)::slotted(span) { z: 3; }";
    let out = rewrite_stylesheet(source, "foo").unwrap();

    assert_eq!(
        out.css,
        ".ha-foo img { x: 1; }\nslot[name=\"icon\"] svg { y: 2; }\n.ha-foo.compact span { z: 3; }"
    );
    assert!(out.is_clean());
}

#[test]
fn test_is_idempotent_on_rewritten_output() {
    let first = rewrite_stylesheet(":host([open]) button { x: 1; }", "foo").unwrap();
    let second = rewrite_stylesheet(&first.css, "foo").unwrap();
    assert_eq!(first.css, second.css);
}

#[test]
fn test_brace_counts_preserved() {
    let sources = [
        ":host { a: 1; }",
        ":host([open]:hover) .x { a: calc(1px + 2px); }",
        "@keyframes pulse { from { opacity: 0; } to { opacity: 1; } }",
        ":host(.a) ::slotted(span), div > ::slotted(p) { a: url(\"x.png\"); }",
    ];

    for source in sources {
        let out = rewrite_stylesheet(source, "foo").unwrap();
        let before = BalanceCounts::of(source);
        let after = BalanceCounts::of(&out.css);

        assert_eq!(before.open_braces, after.open_braces, "{}", source);
        assert_eq!(before.close_braces, after.close_braces, "{}", source);
        assert_eq!(before.paren_balance(), after.paren_balance(), "{}", source);
        assert!(verify_balance(source, &out.css).is_ok());
    }
}

#[test]
fn test_custom_prefix() {
    let rewriter = ScopeRewriter::new("acme").unwrap();
    assert_eq!(rewriter.scope_class("card"), "acme-card");

    let out = rewriter.rewrite(":host { x: 1; }", "card").unwrap();
    assert_eq!(out.css, ".acme-card { x: 1; }");
}

#[test]
fn test_invalid_component_name() {
    let err = rewrite_stylesheet(":host {}", "bad name").unwrap_err();
    assert_eq!(
        err,
        RewriteError::InvalidComponentName {
            name: "bad name".to_string()
        }
    );
}
