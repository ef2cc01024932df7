use std::sync::Arc;

use qpmc_templates_contracts::{EmailBodies, Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        // Registering under the `.html` name keeps tera's autoescaping on for
        // the HTML rendition; the `.txt` rendition stays raw.
        for &(name, html, text) in TEMPLATES {
            tera.add_raw_template(&format!("{name}.html"), html).unwrap();
            tera.add_raw_template(&format!("{name}.txt"), text).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<EmailBodies> {
        let context = tera::Context::from_serialize(template)?;
        let html = self.state.0.render(&format!("{}.html", T::NAME), &context)?;
        let text = self.state.0.render(&format!("{}.txt", T::NAME), &context)?;

        Ok(EmailBodies { text, html })
    }
}
