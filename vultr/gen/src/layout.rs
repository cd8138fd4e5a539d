//! Positional assumptions about the reference page.
//!
//! The page is not machine-readable, so the extractor locates everything by
//! position. Every such position lives here; a layout change on the vendor
//! side should only need an edit to [`PageLayout::default`].

/// Positions and tag names the extractor relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Leading elements of the content region that precede the first category.
    pub intro_block_count: usize,
    /// Heading tag holding a category's display name.
    pub category_heading_tag: String,
    /// Heading tag holding a call's URL path.
    pub call_heading_tag: String,
    /// Class identifying a call's code blocks.
    pub code_block_class: String,
    /// Index of the code block listing the call's parameters.
    pub parameter_block_index: usize,
    /// Row of the call's first table stating whether an API key is required.
    pub auth_row_index: usize,
    /// Row of the call's first table stating the HTTP method.
    pub method_row_index: usize,
    /// Cell (among `td` cells) holding the value in those rows.
    pub value_cell_index: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            intro_block_count: 3,
            category_heading_tag: "h2".to_string(),
            call_heading_tag: "h3".to_string(),
            code_block_class: "code".to_string(),
            parameter_block_index: 2,
            auth_row_index: 0,
            method_row_index: 1,
            value_cell_index: 1,
        }
    }
}

/// Sentinel line meaning a call takes no parameters.
pub const NO_PARAMETERS: &str = "No parameters.";

/// Token marking a parameter as optional.
pub const OPTIONAL_MARKER: &str = "(optional)";

/// Auth cell text meaning an API key is required.
pub const AUTH_REQUIRED: &str = "Yes";

/// Auth cell text meaning no API key is required.
pub const AUTH_NOT_REQUIRED: &str = "No";

/// Apostrophe entity left undecoded in parameter descriptions.
pub const APOSTROPHE_ENTITY: &str = "&#039;";
