use log::error;
use stylist::ast::Sheet;
use stylist::yew::Global;
use stylist::StyleSource;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("global stylesheet failed to parse: {0}")]
    Parse(String),
}

pub struct DesignTokens {
    pub primary: &'static str,
    pub accent: &'static str,
    pub dark: &'static str,
    pub secondary: &'static str,
    pub light: &'static str,
    pub transition: &'static str,
    pub font_family: &'static str,
}

pub const TOKENS: DesignTokens = DesignTokens {
    primary: "#4a6dff",
    accent: "#2541b2",
    dark: "#333",
    secondary: "#666",
    light: "#f5f7fa",
    transition: "all 0.3s ease",
    font_family: "Inter, -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Oxygen, Ubuntu, Cantarell, Fira Sans, Droid Sans, Helvetica Neue, sans-serif",
};

impl DesignTokens {
    pub fn custom_properties(&self) -> [(&'static str, &'static str); 6] {
        [
            ("--primary-color", self.primary),
            ("--accent-color", self.accent),
            ("--dark-color", self.dark),
            ("--secondary-color", self.secondary),
            ("--light-color", self.light),
            ("--transition", self.transition),
        ]
    }

    pub fn global_css(&self) -> String {
        let properties: String = self
            .custom_properties()
            .iter()
            .map(|(name, value)| format!("{}: {};\n", name, value))
            .collect();

        format!(
            r#"
            :root {{
                {properties}
            }}

            * {{
                margin: 0;
                padding: 0;
                box-sizing: border-box;
            }}

            body {{
                font-family: {font};
                -webkit-font-smoothing: antialiased;
                -moz-osx-font-smoothing: grayscale;
                color: var(--dark-color);
                line-height: 1.5;
                background-color: #fff;
            }}

            a {{
                text-decoration: none;
            }}

            .section-title {{
                font-size: 2.5rem;
                font-weight: 700;
                color: var(--dark-color);
                margin-bottom: 1rem;
                text-align: center;
                position: relative;
            }}

            .section-subtitle {{
                font-size: 1.1rem;
                color: var(--secondary-color);
                margin-bottom: 3rem;
                text-align: center;
                max-width: 700px;
            }}

            @media (max-width: 768px) {{
                .section-title {{
                    font-size: 2rem;
                }}
            }}
            "#,
            properties = properties,
            font = self.font_family,
        )
    }

    pub fn style_source(&self) -> Result<StyleSource, ThemeError> {
        let sheet: Sheet = self
            .global_css()
            .parse()
            .map_err(|e| ThemeError::Parse(format!("{}", e)))?;
        Ok(StyleSource::from(sheet))
    }
}

/// Mounts the token sheet once for the lifetime of the page.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let source = use_memo(|_| TOKENS.style_source(), ());

    match &*source {
        Ok(css) => html! { <Global css={css.clone()} /> },
        Err(err) => {
            error!("{}", err);
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_becomes_a_custom_property() {
        let css = TOKENS.global_css();
        for (name, value) in TOKENS.custom_properties() {
            assert!(css.contains(&format!("{}: {};", name, value)), "missing {}", name);
        }
    }

    #[test]
    fn global_sheet_parses() {
        assert!(TOKENS.style_source().is_ok());
    }
}
