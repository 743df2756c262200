//! Server-side rendering of the fixed page containers. One handlebars
//! registry, templates registered at startup, view structs from
//! `views` as template data.

use anyhow::Result;
use handlebars::{handlebars_helper, Handlebars, RenderError};
use serde::Serialize;
use serde_json::{json, Value};

use crate::views::dashboard::DashboardStats;
use crate::views::project_detail::DetailPage;
use crate::views::projects::ProjectsPage;
use crate::views::ProjectCard;

fn base_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(exists: |v: Value| !v.is_null());
    handlebars.register_helper("exists", Box::new(exists));

    handlebars_helper!(stringeq: |s1: String, s2: String| s1.eq(&s2));
    handlebars.register_helper("stringeq", Box::new(stringeq));

    handlebars
}

pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = base_handlebars();
        for (name, template) in [
            ("page", include_str!("templates/page.hbs")),
            ("featured_grid", include_str!("templates/featured_grid.hbs")),
            ("projects_grid", include_str!("templates/projects_grid.hbs")),
            ("project_detail", include_str!("templates/project_detail.hbs")),
            ("about", include_str!("templates/about.hbs")),
            ("contact", include_str!("templates/contact.hbs")),
            ("admin", include_str!("templates/admin.hbs")),
            ("dashboard", include_str!("templates/dashboard.hbs")),
        ] {
            handlebars.register_template_string(name, template)?;
        }
        Ok(Self { handlebars })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        self.handlebars.render(name, data)
    }

    /// Wrap a rendered container in the page shell.
    pub fn page(&self, title: &str, body: &str) -> Result<String, RenderError> {
        self.render("page", &json!({ "title": title, "body": body }))
    }

    pub fn featured_grid(&self, cards: &[ProjectCard]) -> Result<String, RenderError> {
        self.render("featured_grid", &json!({ "cards": cards }))
    }

    pub fn projects_grid(&self, page: &ProjectsPage) -> Result<String, RenderError> {
        self.render("projects_grid", page)
    }

    pub fn project_detail(&self, page: &DetailPage) -> Result<String, RenderError> {
        self.render("project_detail", page)
    }

    pub fn about_page(&self) -> Result<String, RenderError> {
        self.render("about", &json!({}))
    }

    pub fn contact_page(&self) -> Result<String, RenderError> {
        self.render("contact", &json!({}))
    }

    /// Admin shell: login modal markup; data arrives over the admin
    /// API once a session exists.
    pub fn admin_shell(&self) -> Result<String, RenderError> {
        self.render("admin", &json!({}))
    }

    pub fn dashboard(&self, stats: &DashboardStats) -> Result<String, RenderError> {
        self.render("dashboard", stats)
    }
}
