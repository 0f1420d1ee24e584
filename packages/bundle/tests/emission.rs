use halo_bundle::{build, prepare, BuildError, BuildOptions, EmitError, Pattern, RealFileSystem};
use halo_tokens::TokenDocument;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn tokens() -> Vec<TokenDocument> {
    vec![TokenDocument::new(
        "tokens/core.json",
        r##"{
            "base": { "ink": { "value": "#222222", "type": "color" } },
            "semantic": { "text": { "value": "{base.ink}", "type": "color", "description": "Body text" } },
            "theme": {
                "light": { "text": "#222222" },
                "dark": { "text": "#eeeeee" }
            }
        }"##,
    )]
}

#[test]
fn test_every_pattern_has_every_component() {
    let temp = TempDir::new().unwrap();
    let components = temp.path().join("components");
    write(&components, "actions/button.css", ":host { cursor: pointer; }\nbutton { all: unset; }\n");
    write(&components, "actions/icon-button.css", ":host(:hover) { opacity: 0.8; }\n");
    write(&components, "forms/text-field.css", ":host([invalid]) input { border-color: red; }\n");
    write(&components, "badge.css", ".dot { width: 4px; }\n");

    let out = temp.path().join("dist");
    let report = build(&RealFileSystem, &tokens(), &components, &out, &BuildOptions::default()).unwrap();
    assert_eq!(report.components, 4);

    let count = |dir: &str, suffix: &str| {
        walk(&out.join(dir))
            .into_iter()
            .filter(|p| p.ends_with(suffix))
            .count()
    };
    assert_eq!(count("shadow", ".css"), 4);
    assert_eq!(count("html", ".css"), 4);
    assert_eq!(count("js", ".styles.js"), 4);
    assert_eq!(count("js", ".html-styles.js"), 4);

    let index = fs::read_to_string(out.join("js/index.js")).unwrap();
    assert_eq!(index.lines().filter(|l| l.starts_with("export {")).count(), 8);

    for bundle in ["bundle/halo.shadow.css", "bundle/halo.html.css"] {
        let text = fs::read_to_string(out.join(bundle)).unwrap();
        let headers = ["/* actions/button */", "/* actions/icon-button */", "/* badge */", "/* forms/text-field */"];
        let positions: Vec<usize> = headers.iter().map(|h| text.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", bundle);
    }

    let html = fs::read_to_string(out.join("html/forms/text-field.css")).unwrap();
    assert_eq!(html, ".ha-text-field[invalid] input { border-color: red; }\n");
    let html = fs::read_to_string(out.join("html/actions/button.css")).unwrap();
    assert_eq!(html, ".ha-button { cursor: pointer; }\n.ha-button button { all: unset; }\n");
}

#[test]
fn test_duplicate_identifier_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let components = temp.path().join("components");
    write(&components, "a/date-picker.css", ":host {}");
    write(&components, "b/date_picker.css", ":host {}");

    let out = temp.path().join("dist");
    let err = build(&RealFileSystem, &tokens(), &components, &out, &BuildOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        BuildError::Emit(EmitError::DuplicateComponent { ref identifier, .. }) if identifier == "datePickerStyles"
    ));
    assert!(!out.exists());
}

#[test]
fn test_prepare_does_not_write() {
    let temp = TempDir::new().unwrap();
    let components = temp.path().join("components");
    write(&components, "card.css", ":host { padding: 8px; }");

    let prepared = prepare(&RealFileSystem, &tokens(), &components, &BuildOptions::default()).unwrap();
    assert_eq!(prepared.plan.files_of(Pattern::Html).count(), 1);
    assert!(prepared.report.written.is_empty());
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn test_shadow_and_html_forms_stay_balanced() {
    let temp = TempDir::new().unwrap();
    let components = temp.path().join("components");
    write(
        &components,
        "menu.css",
        "@media (max-width: 600px) {\n  :host([open]:focus-within) ::slotted(li) { margin: calc(2px * (1 + 1)); }\n}\n",
    );

    let out = temp.path().join("dist");
    build(&RealFileSystem, &tokens(), &components, &out, &BuildOptions::default()).unwrap();

    let shadow = fs::read_to_string(out.join("shadow/menu.css")).unwrap();
    let html = fs::read_to_string(out.join("html/menu.css")).unwrap();
    assert_eq!(shadow.matches('{').count(), html.matches('{').count());
    assert_eq!(shadow.matches('}').count(), html.matches('}').count());
    assert_eq!(
        html,
        "@media (max-width: 600px) {\n  .ha-menu[open]:focus-within li { margin: calc(2px * (1 + 1)); }\n}\n"
    );
}

fn walk(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walk(&path));
            } else {
                files.push(path.to_string_lossy().into_owned());
            }
        }
    }
    files
}
