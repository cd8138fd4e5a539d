//! Shared test utilities for vultr-gen tests.
//!
//! Builders for reference-page fragments shaped like the live page: a
//! `main-content` container, three intro blocks, then one block per
//! category holding one `div` per call.

/// A single documented call.
#[derive(Debug, Clone)]
pub struct CallFixture {
    id: String,
    path: String,
    auth: String,
    method: String,
    description: Vec<String>,
    params: String,
    code_blocks: usize,
}

impl CallFixture {
    /// A GET call requiring a key, with no description and no parameters.
    pub fn new(id: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            path: path.to_string(),
            auth: "Yes".to_string(),
            method: "GET".to_string(),
            description: vec![],
            params: "No parameters.".to_string(),
            code_blocks: 3,
        }
    }

    pub fn auth(mut self, auth: &str) -> Self {
        self.auth = auth.to_string();
        self
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn description(mut self, paragraphs: &[&str]) -> Self {
        self.description = paragraphs.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Raw parameter block text, one parameter per line.
    pub fn params(mut self, params: &str) -> Self {
        self.params = params.to_string();
        self
    }

    /// Number of `div.code` blocks; the parameters go in the third.
    pub fn code_blocks(mut self, count: usize) -> Self {
        self.code_blocks = count;
        self
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"{}\">\n<h3>{}</h3>\n", self.id, self.path);
        for paragraph in &self.description {
            html.push_str(&format!("<p>{paragraph}</p>\n"));
        }
        html.push_str(&format!(
            "<table>\n<tr><td>API Key Required</td><td>{}</td></tr>\n\
             <tr><td>Request Type</td><td>{}</td></tr>\n</table>\n",
            self.auth, self.method
        ));
        for index in 0..self.code_blocks {
            let body = match index {
                0 => "curl https://api.vultr.com/...".to_string(),
                1 => "{ \"example\": true }".to_string(),
                _ => self.params.clone(),
            };
            html.push_str(&format!("<div class=\"code\"><pre><code>{body}</code></pre></div>\n"));
        }
        html.push_str("</div>\n");
        html
    }
}

/// A category block with the given anchor id and heading.
pub fn category_html(id: &str, heading: &str, calls: &[CallFixture]) -> String {
    let mut html = format!("<div id=\"{id}\">\n<h2>{heading}</h2>\n");
    for call in calls {
        html.push_str(&call.to_html());
    }
    html.push_str("</div>\n");
    html
}

/// The sliced content region: container, intro blocks, categories.
pub fn page_html(categories: &[String]) -> String {
    let mut html = String::from(
        "<div class=\"main-content\">\n\
         <div class=\"intro\"><h1>Vultr API</h1></div>\n\
         <div class=\"intro\"><p>Authentication</p></div>\n\
         <div class=\"intro\"><p>Response codes</p></div>\n",
    );
    for category in categories {
        html.push_str(category);
    }
    html.push_str("</div>");
    html
}
