//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const TITLE: &'static str = "title";
    pub const PERMALINK: &'static str = "permalink";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_known_placeholders() {
        let out = render(
            "title: {{title}}\npermalink: /{{permalink}}/\n",
            &[
                (TemplateVars::TITLE, "Sorting"),
                (TemplateVars::PERMALINK, "sorting"),
            ],
        );
        assert_eq!(out, "title: Sorting\npermalink: /sorting/\n");
    }

    #[test]
    fn render_leaves_unknown_placeholders_untouched() {
        let out = render("{{title}} {{other}}", &[(TemplateVars::TITLE, "X")]);
        assert_eq!(out, "X {{other}}");
    }
}
