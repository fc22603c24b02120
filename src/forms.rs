//! Form state for the public forms and the admin managers.
//!
//! Each manager form mirrors one record's editable fields. The hidden `id`
//! field holds the id of the record being edited; empty means "create".

use serde::Deserialize;

use crate::models::{
    AboutInput, AboutSection, BlogInput, BlogPost, ContactInput, Project, ProjectInput,
};

// =============================================================================
// Public forms
// =============================================================================

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RiddleForm {
    #[serde(default)]
    pub answer: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ThemeForm {
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Second step of a delete: the POST must carry `confirm=yes`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

// =============================================================================
// Admin dashboard
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Blogs,
    Projects,
    About,
    Contacts,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Blogs,
        AdminTab::Projects,
        AdminTab::About,
        AdminTab::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Blogs => "blogs",
            AdminTab::Projects => "projects",
            AdminTab::About => "about",
            AdminTab::Contacts => "contacts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Blogs => "Blogs",
            AdminTab::Projects => "Projects",
            AdminTab::About => "About",
            AdminTab::Contacts => "Contact Submissions",
        }
    }

    /// Tab for a `?tab=` value; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<AdminTab> {
        AdminTab::ALL.into_iter().find(|tab| tab.as_str() == name)
    }
}

/// Dashboard query: `?tab=projects&edit=<id>`, `?tab=blogs&new=1`,
/// `?tab=contacts&delete=<id>`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DashboardQuery {
    #[serde(default, deserialize_with = "tab_or_default")]
    pub tab: AdminTab,
    #[serde(default)]
    pub edit: Option<String>,
    #[serde(default)]
    pub new: Option<String>,
    #[serde(default)]
    pub delete: Option<String>,
}

/// A stale bookmark with an unknown tab lands on the default tab.
fn tab_or_default<'de, D>(deserializer: D) -> Result<AdminTab, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name
        .as_deref()
        .and_then(AdminTab::parse)
        .unwrap_or_default())
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct BlogForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
}

impl BlogForm {
    pub fn editing(post: &BlogPost) -> Self {
        let input = BlogInput::from(post);
        Self {
            id: post.id.clone(),
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
        }
    }

    /// Id of the record being edited, `None` when creating
    pub fn editing_id(&self) -> Option<String> {
        non_blank(&self.id)
    }

    pub fn to_input(&self) -> BlogInput {
        BlogInput {
            title: self.title.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProjectForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Current (or directly entered) image URL; replaced when a file is uploaded
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub demo_link: String,
}

impl ProjectForm {
    pub fn editing(project: &Project) -> Self {
        let input = ProjectInput::from(project);
        Self {
            id: project.id.clone(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            github_link: input.github_link,
            demo_link: input.demo_link.unwrap_or_default(),
        }
    }

    pub fn editing_id(&self) -> Option<String> {
        non_blank(&self.id)
    }

    /// Set one field from a multipart text part. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "id" => self.id = value,
            "title" => self.title = value,
            "description" => self.description = value,
            "image_url" => self.image_url = value,
            "github_link" => self.github_link = value,
            "demo_link" => self.demo_link = value,
            _ => {}
        }
    }

    /// Fill fields the browser never delivered (a form cut short by the
    /// body limit) from the stored record. Fields that arrived stay as sent.
    pub fn restore_missing(&mut self, project: &Project, received: &[String]) {
        let stored = ProjectForm::editing(project);
        let missing = |name: &str| !received.iter().any(|r| r == name);
        if missing("title") {
            self.title = stored.title;
        }
        if missing("description") {
            self.description = stored.description;
        }
        if missing("image_url") {
            self.image_url = stored.image_url;
        }
        if missing("github_link") {
            self.github_link = stored.github_link;
        }
        if missing("demo_link") {
            self.demo_link = stored.demo_link;
        }
    }

    pub fn to_input(&self) -> ProjectInput {
        ProjectInput {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            image_url: self.image_url.trim().to_string(),
            github_link: self.github_link.trim().to_string(),
            demo_link: non_blank(&self.demo_link),
        }
    }
}

/// Skills and hobbies are edited one per line.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AboutForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub hobbies: String,
}

impl AboutForm {
    pub fn editing(about: &AboutSection) -> Self {
        Self {
            id: about.id.clone(),
            bio: about.bio.clone(),
            skills: about.skills.join("\n"),
            hobbies: about.hobbies.join("\n"),
        }
    }

    pub fn editing_id(&self) -> Option<String> {
        non_blank(&self.id)
    }

    pub fn to_input(&self) -> AboutInput {
        AboutInput {
            bio: self.bio.clone(),
            skills: split_lines(&self.skills),
            hobbies: split_lines(&self.hobbies),
        }
    }
}

/// Trimmed non-empty lines, order preserved
fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
