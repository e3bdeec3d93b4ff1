use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::{ClientError, CreatedPage, PageId, PageSink};

pub const API_BASE: &str = "https://api.notion.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the Notion API.
pub struct NotionClient {
    agent: ureq::Agent,
    token: String,
    notion_version: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    id: String,
    url: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>, notion_version: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            token: token.into(),
            notion_version: notion_version.into(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Points the client at another API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        self.agent
            .request(method, &format!("{}{path}", self.base_url))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Notion-Version", &self.notion_version)
    }
}

impl PageSink for NotionClient {
    fn create_child_page(&self, parent: &PageId, title: &str) -> Result<CreatedPage, ClientError> {
        log::info!("Creating child page '{title}' under {parent}");
        let page: PageResponse = self
            .request("POST", "/pages")
            .send_json(create_page_body(parent, title))?
            .into_json()?;

        let id = PageId::parse(&page.id)?;
        log::info!("Child page created: {id}");
        Ok(CreatedPage { id, url: page.url })
    }

    fn append_children(&self, page: &PageId, children: &[Value]) -> Result<(), ClientError> {
        self.request("PATCH", &format!("/blocks/{page}/children"))
            .send_json(append_children_body(children))?;
        Ok(())
    }
}

/// Request body creating a page titled `title` under `parent`.
pub fn create_page_body(parent: &PageId, title: &str) -> Value {
    json!({
        "parent": { "page_id": parent.as_str() },
        "properties": {
            "title": [{ "text": { "content": title } }]
        }
    })
}

pub fn append_children_body(children: &[Value]) -> Value {
    json!({ "children": children })
}
