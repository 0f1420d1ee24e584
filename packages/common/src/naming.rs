/// Convert a kebab- or snake-case name into a lower camel case identifier
///
/// Runs of non-alphanumeric characters act as word separators. An identifier
/// that would start with a digit is prefixed with `_`.
///
/// ```
/// use halo_common::to_camel_case;
///
/// assert_eq!(to_camel_case("icon-button"), "iconButton");
/// assert_eq!(to_camel_case("2-col-grid"), "_2ColGrid");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    let mut upper_next = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if ident.is_empty() {
                ident.push(ch.to_ascii_lowercase());
            } else if upper_next {
                ident.push(ch.to_ascii_uppercase());
            } else {
                ident.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = !ident.is_empty();
        }
    }

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    ident
}

/// CSS custom property name for a sequence of path segments
///
/// `["base", "spacing", "sm"]` becomes `--base-spacing-sm`.
pub fn css_variable<S: AsRef<str>>(segments: &[S]) -> String {
    let mut name = String::from("--");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            name.push('-');
        }
        name.push_str(segment.as_ref());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_from_kebab() {
        assert_eq!(to_camel_case("button"), "button");
        assert_eq!(to_camel_case("icon-button"), "iconButton");
        assert_eq!(to_camel_case("date-range-picker"), "dateRangePicker");
    }

    #[test]
    fn test_camel_case_separators() {
        assert_eq!(to_camel_case("menu_item"), "menuItem");
        assert_eq!(to_camel_case("tab--panel"), "tabPanel");
        assert_eq!(to_camel_case("-leading"), "leading");
        assert_eq!(to_camel_case("trailing-"), "trailing");
    }

    #[test]
    fn test_camel_case_leading_digit() {
        assert_eq!(to_camel_case("3d-card"), "_3dCard");
    }

    #[test]
    fn test_css_variable() {
        assert_eq!(css_variable(&["base", "spacing", "sm"]), "--base-spacing-sm");
        assert_eq!(css_variable(&["x"]), "--x");
    }
}
