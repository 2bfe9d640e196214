//! Index page rendering.

use tera::{Context, Tera};

use crate::alphabet::map_alphabet;
use crate::shift::ShiftAmount;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Renders the HTML front page.
pub struct PageRenderer {
    template_engine: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut template_engine = Tera::default();
        template_engine.add_raw_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { template_engine })
    }

    /// Renders the index page pre-filled with `shift` and its alphabet rows.
    pub fn index(&self, shift: ShiftAmount) -> Result<String, tera::Error> {
        let pair = map_alphabet(shift);
        let mut context = Context::new();
        context.insert("shift", &shift);
        context.insert("original_alphabet", &pair.original);
        context.insert("shifted_alphabet", &pair.shifted);
        self.template_engine.render("index.html", &context)
    }
}
