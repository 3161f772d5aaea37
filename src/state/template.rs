//! Static template parameters: the dimension and structure form fields.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

/// Raw values of the dimension/structure form fields.
///
/// Values are kept exactly as the inputs produce them and carried into the
/// request payload verbatim; the generation service parses them on its side.
/// Defaults mirror the service defaults for a standard case binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateParams {
    /// Textblock width (mm).
    pub book_w: String,
    /// Textblock height (mm).
    pub book_h: String,
    /// Textblock thickness (mm).
    pub book_t: String,
    /// Greyboard thickness (mm).
    pub board_thickness: String,
    /// Leather folded over the board edges (mm).
    pub turn_in: String,
    /// Space between spine and boards (mm).
    pub hinge_gap: String,
    /// Cover overhang past the pages (mm).
    pub square: String,
    /// Raised bands on the spine.
    pub num_hubs: String,
}

impl Default for TemplateParams {
    fn default() -> Self {
        Self {
            book_w: "152".to_owned(),
            book_h: "229".to_owned(),
            book_t: "25".to_owned(),
            board_thickness: "2".to_owned(),
            turn_in: "20".to_owned(),
            hinge_gap: "7".to_owned(),
            square: "3".to_owned(),
            num_hubs: "5".to_owned(),
        }
    }
}
