use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use crate::rules::LintRule;
use crate::value_kind::ValueKind;

/// Lint rule requiring every theme layer to override the same aliases
/// with values of the same kind
pub struct ThemeSymmetryRule;

impl LintRule for ThemeSymmetryRule {
    fn name(&self) -> &'static str {
        "theme-symmetry"
    }

    fn description(&self) -> &'static str {
        "Theme layers should define the same aliases with matching value kinds"
    }

    fn check_graph(&self, context: &LintContext) -> Vec<Diagnostic> {
        let layers = &context.layers.layers;
        if layers.len() < 2 {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        let mut seen: Vec<&[String]> = Vec::new();
        let overridden = layers.iter().flat_map(|l| l.values.iter().map(|v| v.alias));

        for alias in overridden {
            if seen.contains(&alias) {
                continue;
            }
            seen.push(alias);

            let alias_name = alias.join(".");
            let mut first_kind: Option<(&str, ValueKind)> = None;

            for layer in layers {
                let Some(value) = layer.get(alias) else {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("Theme '{}' does not define alias '{}'", layer.name, alias_name),
                            format!("{}.{}.{}", context.roots.theme, layer.name, alias_name),
                        )
                        .with_suggestion("Add the alias to every theme layer"),
                    );
                    continue;
                };

                let kind = ValueKind::of(&value.token.value);
                match first_kind {
                    None => first_kind = Some((layer.name, kind)),
                    Some((first_layer, expected)) if expected != kind => {
                        diagnostics.push(Diagnostic::warning(
                            self.name(),
                            format!(
                                "Alias '{}' is {:?} in theme '{}' but {:?} in theme '{}'",
                                alias_name, expected, first_layer, kind, layer.name
                            ),
                            value.token.name(),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }

        diagnostics
    }
}
