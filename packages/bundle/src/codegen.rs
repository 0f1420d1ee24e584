//! String-export modules: each stylesheet text as a JavaScript string
//! constant, plus matching type declarations and an index.

/// First line of every generated module
pub const MODULE_HEADER: &str = "// Generated by halo. Do not edit.";

/// One exported constant and the module that defines it
#[derive(Debug, Clone, PartialEq)]
pub struct ExportEntry {
    pub identifier: String,
    /// Module specifier relative to the index, e.g. `./forms/button.styles.js`
    pub specifier: String,
}

/// `export const <identifier> = "<css>";`
pub fn string_module(identifier: &str, css: &str) -> String {
    format!(
        "{}\nexport const {} = {};\n",
        MODULE_HEADER,
        identifier,
        js_string(css)
    )
}

/// Type stub for a module emitted by [`string_module`]
pub fn string_declaration(identifier: &str) -> String {
    format!(
        "{}\nexport declare const {}: string;\n",
        MODULE_HEADER, identifier
    )
}

/// Re-export every entry; the same text serves `index.js` and `index.d.ts`
pub fn index_module(entries: &[ExportEntry]) -> String {
    let mut out = String::from(MODULE_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&format!(
            "export {{ {} }} from \"{}\";\n",
            entry.identifier, entry.specifier
        ));
    }
    out
}

/// Quote `text` as a JavaScript string literal
///
/// JSON string syntax is a subset of JavaScript's.
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_module_escapes() {
        let module = string_module("buttonStyles", ":host {\n  content: \"\\2014\";\n}");
        assert_eq!(
            module,
            "// Generated by halo. Do not edit.\nexport const buttonStyles = \":host {\\n  content: \\\"\\\\2014\\\";\\n}\";\n"
        );
    }

    #[test]
    fn test_declaration() {
        assert!(string_declaration("cardHtmlStyles").ends_with("export declare const cardHtmlStyles: string;\n"));
    }

    #[test]
    fn test_index_module() {
        let index = index_module(&[
            ExportEntry {
                identifier: "buttonStyles".to_string(),
                specifier: "./forms/button.styles.js".to_string(),
            },
            ExportEntry {
                identifier: "buttonHtmlStyles".to_string(),
                specifier: "./forms/button.html-styles.js".to_string(),
            },
        ]);

        let lines: Vec<&str> = index.lines().collect();
        assert_eq!(
            lines,
            vec![
                MODULE_HEADER,
                "export { buttonStyles } from \"./forms/button.styles.js\";",
                "export { buttonHtmlStyles } from \"./forms/button.html-styles.js\";",
            ]
        );
    }
}
