//! Admin panel handlers.
//!
//! Every write follows post/redirect/get: success answers 303 back to the
//! manager tab, which re-fetches its list. A failed write re-renders the tab
//! with the error and the submitted form. A 401 from the API at any point
//! drops the session (see [`WebError::Unauthorized`]).

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::{inline_message, recover, AppState, WebError, ADMIN_ROUTE};
use crate::client::{ImageUpload, PortfolioClient, UploadError};
use crate::forms::{
    AboutForm, AdminTab, BlogForm, DashboardQuery, DeleteForm, LoginForm, ProjectForm,
};
use crate::models::find_record;
use crate::session::{clear_token_cookie, token_cookie, SiteContext};
use crate::ui::pages::admin::{
    tab_href, AboutPanel, AdminPanel, BlogPanel, ContactPanel, DashboardPage, LoginPage,
    ProjectPanel,
};
use crate::ui::render_page;

// =============================================================================
// Session
// =============================================================================

/// GET /admin-secret-panel - Login form, or the dashboard once authenticated
pub async fn dashboard_page(
    State(state): State<AppState>,
    ctx: SiteContext,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, WebError> {
    if !ctx.auth.is_authenticated() {
        return Ok(render_login(&ctx, None));
    }

    let client = state.client_for(&ctx);
    if state.config.auth.revalidate {
        match client.auth().verify().await {
            Err(e) if e.is_unauthorized() => return Err(WebError::Unauthorized),
            // Keep the session when the API is merely unreachable
            Err(e) => warn!("Could not revalidate admin token: {}", e),
            Ok(()) => {}
        }
    }

    let panel = load_panel(&state, &client, &query).await?;
    Ok(render_dashboard(&ctx, panel))
}

/// POST /admin-secret-panel/login - Exchange the password for a token cookie
pub async fn login(
    State(state): State<AppState>,
    ctx: SiteContext,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.client.auth().login(&form.password).await {
        Ok(token) => {
            info!("Admin logged in");
            let auth = &state.config.auth;
            (
                [(
                    header::SET_COOKIE,
                    token_cookie(&token, auth.session_ttl_secs, auth.secure_cookies),
                )],
                Redirect::to(ADMIN_ROUTE),
            )
                .into_response()
        }
        Err(e) => {
            warn!("Admin login failed: {}", e);
            render_login(&ctx, Some(e.user_message()))
        }
    }
}

/// POST /admin-secret-panel/logout - Drop the token cookie
pub async fn logout(State(state): State<AppState>) -> Response {
    info!("Admin logged out");
    (
        [(
            header::SET_COOKIE,
            clear_token_cookie(state.config.auth.secure_cookies),
        )],
        Redirect::to("/"),
    )
        .into_response()
}

fn render_login(ctx: &SiteContext, error: Option<String>) -> Response {
    let theme = ctx.theme;
    render_page(theme, rsx! { LoginPage { theme: theme, error: error } }).into_response()
}

fn render_dashboard(ctx: &SiteContext, panel: AdminPanel) -> Response {
    let theme = ctx.theme;
    render_page(theme, rsx! { DashboardPage { theme: theme, panel: panel } }).into_response()
}

/// Writes need a token; without one go to the login form.
fn require_login(ctx: &SiteContext) -> Option<Response> {
    (!ctx.auth.is_authenticated()).then(|| Redirect::to(ADMIN_ROUTE).into_response())
}

fn back_to(tab: AdminTab) -> Response {
    Redirect::to(&tab_href(tab)).into_response()
}

/// The delete confirmation view for one record
fn confirm_first(tab: AdminTab, id: &str) -> Response {
    let href = format!("{}&delete={}", tab_href(tab), urlencoding::encode(id));
    Redirect::to(&href).into_response()
}

fn tab_query(tab: AdminTab) -> DashboardQuery {
    DashboardQuery {
        tab,
        ..Default::default()
    }
}

// =============================================================================
// Panels
// =============================================================================

async fn load_panel(
    state: &AppState,
    client: &PortfolioClient,
    query: &DashboardQuery,
) -> Result<AdminPanel, WebError> {
    Ok(match query.tab {
        AdminTab::Blogs => AdminPanel::Blogs(blog_panel(client, query).await?),
        AdminTab::Projects => AdminPanel::Projects(project_panel(state, client, query).await?),
        AdminTab::About => AdminPanel::About(about_panel(client).await?),
        AdminTab::Contacts => AdminPanel::Contacts(contact_panel(client, query).await?),
    })
}

async fn blog_panel(
    client: &PortfolioClient,
    query: &DashboardQuery,
) -> Result<BlogPanel, WebError> {
    let (posts, error) = recover(client.blogs().list().await)?;
    let form = if query.new.is_some() {
        Some(BlogForm::default())
    } else {
        find_record(&posts, query.edit.as_deref()).map(BlogForm::editing)
    };
    let confirm_delete = find_record(&posts, query.delete.as_deref()).cloned();
    Ok(BlogPanel {
        posts,
        form,
        confirm_delete,
        error,
    })
}

async fn project_panel(
    state: &AppState,
    client: &PortfolioClient,
    query: &DashboardQuery,
) -> Result<ProjectPanel, WebError> {
    let (projects, error) = recover(client.projects().list().await)?;
    let form = if query.new.is_some() {
        Some(ProjectForm::default())
    } else {
        find_record(&projects, query.edit.as_deref()).map(ProjectForm::editing)
    };
    let confirm_delete = find_record(&projects, query.delete.as_deref()).cloned();
    Ok(ProjectPanel {
        projects,
        form,
        confirm_delete,
        error,
        api_base: state.client.base_url().to_string(),
    })
}

async fn about_panel(client: &PortfolioClient) -> Result<AboutPanel, WebError> {
    let (about, error) = recover(client.about().current().await)?;
    Ok(AboutPanel {
        form: about.as_ref().map(AboutForm::editing).unwrap_or_default(),
        error,
    })
}

async fn contact_panel(
    client: &PortfolioClient,
    query: &DashboardQuery,
) -> Result<ContactPanel, WebError> {
    let (submissions, error) = recover(client.contact().list().await)?;
    let confirm_delete = find_record(&submissions, query.delete.as_deref()).cloned();
    Ok(ContactPanel {
        submissions,
        confirm_delete,
        error,
    })
}

// =============================================================================
// Blogs
// =============================================================================

/// POST /admin-secret-panel/blogs - Create, or update when `id` is set
pub async fn save_blog(
    State(state): State<AppState>,
    ctx: SiteContext,
    Form(form): Form<BlogForm>,
) -> Result<Response, WebError> {
    if let Some(redirect) = require_login(&ctx) {
        return Ok(redirect);
    }
    let client = state.client_for(&ctx);
    let input = form.to_input();
    let result = match form.editing_id() {
        Some(id) => client.blogs().update(&id, &input).await,
        None => client.blogs().create(&input).await.map(|post| {
            debug!("Created blog post {}", post.id);
        }),
    };

    match result {
        Ok(()) => {
            info!("Saved blog post \"{}\"", input.title);
            Ok(back_to(AdminTab::Blogs))
        }
        Err(e) => {
            let message = inline_message(e)?;
            let mut panel = blog_panel(&client, &tab_query(AdminTab::Blogs)).await?;
            panel.form = Some(form);
            panel.error = Some(message);
            Ok(render_dashboard(&ctx, AdminPanel::Blogs(panel)))
        }
    }
}

/// POST /admin-secret-panel/blogs/{id}/delete
pub async fn delete_blog(
    State(state): State<AppState>,
    ctx: SiteContext,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, WebError> {
    if let Some(redirect) = require_login(&ctx) {
        return Ok(redirect);
    }
    if !form.is_confirmed() {
        return Ok(confirm_first(AdminTab::Blogs, &id));
    }
    let client = state.client_for(&ctx);
    match client.blogs().delete(&id).await {
        Ok(()) => {
            info!("Deleted blog post {}", id);
            Ok(back_to(AdminTab::Blogs))
        }
        Err(e) => {
            let message = inline_message(e)?;
            let mut panel = blog_panel(&client, &tab_query(AdminTab::Blogs)).await?;
            panel.error = Some(message);
            Ok(render_dashboard(&ctx, AdminPanel::Blogs(panel)))
        }
    }
}

// =============================================================================
// Projects
// =============================================================================

/// A file part from the project form, not yet validated
struct ReceivedFile {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Read the multipart project form. An empty file input (no file chosen)
/// yields `None` for the file. Names of the parts read so far land in
/// `received`, also when reading fails part-way.
async fn read_project_form(
    mut multipart: Multipart,
    form: &mut ProjectForm,
    received: &mut Vec<String>,
) -> Result<Option<ReceivedFile>, String> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await.map_err(form_read_error)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(String::from);
            let bytes = field.bytes().await.map_err(form_read_error)?;
            if !file_name.is_empty() && !bytes.is_empty() {
                file = Some(ReceivedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field.text().await.map_err(form_read_error)?;
            form.set_field(&name, value);
        }
        received.push(name);
    }
    Ok(file)
}

/// A body cut off by the route's size limit means the image was too big.
fn form_read_error(err: MultipartError) -> String {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge.to_string()
    } else {
        format!("Could not read the submitted form: {}", err.body_text())
    }
}

/// POST /admin-secret-panel/projects - Optional image upload, then create or update
pub async fn save_project(
    State(state): State<AppState>,
    ctx: SiteContext,
    multipart: Multipart,
) -> Result<Response, WebError> {
    if let Some(redirect) = require_login(&ctx) {
        return Ok(redirect);
    }
    let client = state.client_for(&ctx);
    let mut form = ProjectForm::default();
    let mut received = Vec::new();

    let file = match read_project_form(multipart, &mut form, &mut received).await {
        Ok(file) => file,
        Err(message) => {
            warn!("Could not read project form: {}", message);
            if let Some(id) = form.editing_id() {
                match client.projects().get(&id).await {
                    Ok(project) => form.restore_missing(&project, &received),
                    Err(e) => debug!("Could not reload project {}: {}", id, e),
                }
            }
            return project_failure(&state, &client, &ctx, form, message).await;
        }
    };

    if let Some(file) = file {
        let upload = match ImageUpload::new(file.file_name, file.content_type.as_deref(), file.bytes)
        {
            Ok(upload) => upload,
            Err(e) => return project_failure(&state, &client, &ctx, form, e.to_string()).await,
        };
        match client.projects().upload_image(upload).await {
            Ok(url) => {
                debug!("Uploaded project image to {}", url);
                form.image_url = url;
            }
            Err(e) => {
                let message = format!("Image upload error: {}", inline_message(e)?);
                return project_failure(&state, &client, &ctx, form, message).await;
            }
        }
    }

    let input = form.to_input();
    let result = match form.editing_id() {
        Some(id) => client.projects().update(&id, &input).await,
        None => client.projects().create(&input).await.map(|project| {
            debug!("Created project {}", project.id);
        }),
    };

    match result {
        Ok(()) => {
            info!("Saved project \"{}\"", input.title);
            Ok(back_to(AdminTab::Projects))
        }
        Err(e) => {
            let message = inline_message(e)?;
            project_failure(&state, &client, &ctx, form, message).await
        }
    }
}

async fn project_failure(
    state: &AppState,
    client: &PortfolioClient,
    ctx: &SiteContext,
    form: ProjectForm,
    message: String,
) -> Result<Response, WebError> {
    let mut panel = project_panel(state, client, &tab_query(AdminTab::Projects)).await?;
    panel.form = Some(form);
    panel.error = Some(message);
    Ok(render_dashboard(ctx, AdminPanel::Projects(panel)))
}

/// POST /admin-secret-panel/projects/{id}/delete
pub async fn delete_project(
    State(state): State<AppState>,
    ctx: SiteContext,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, WebError> {
    if let Some(redirect) = require_login(&ctx) {
        return Ok(redirect);
    }
    if !form.is_confirmed() {
        return Ok(confirm_first(AdminTab::Projects, &id));
    }
    let client = state.client_for(&ctx);
    match client.projects().delete(&id).await {
        Ok(()) => {
            info!("Deleted project {}", id);
            Ok(back_to(AdminTab::Projects))
        }
        Err(e) => {
            let message = inline_message(e)?;
            let mut panel =
                project_panel(&state, &client, &tab_query(AdminTab::Projects)).await?;
            panel.error = Some(message);
            Ok(render_dashboard(&ctx, AdminPanel::Projects(panel)))
        }
    }
}

// =============================================================================
// About
// =============================================================================

/// POST /admin-secret-panel/about - Create the section, or update the existing one
pub async fn save_about(
    State(state): State<AppState>,
    ctx: SiteContext,
    Form(form): Form<AboutForm>,
) -> Result<Response, WebError> {
    if let Some(redirect) = require_login(&ctx) {
        return Ok(redirect);
    }
    let client = state.client_for(&ctx);
    let input = form.to_input();
    let result = match form.editing_id() {
        Some(id) => client.about().update(&id, &input).await,
        None => client.about().create(&input).await.map(|about| {
            debug!("Created about section {}", about.id);
        }),
    };

    match result {
        Ok(()) => {
            info!("Saved about section");
            Ok(back_to(AdminTab::About))
        }
        Err(e) => {
            let panel = AboutPanel {
                form,
                error: Some(inline_message(e)?),
            };
            Ok(render_dashboard(&ctx, AdminPanel::About(panel)))
        }
    }
}

// =============================================================================
// Contact submissions
// =============================================================================

/// POST /admin-secret-panel/contacts/{id}/delete
pub async fn delete_contact(
    State(state): State<AppState>,
    ctx: SiteContext,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, WebError> {
    if let Some(redirect) = require_login(&ctx) {
        return Ok(redirect);
    }
    if !form.is_confirmed() {
        return Ok(confirm_first(AdminTab::Contacts, &id));
    }
    let client = state.client_for(&ctx);
    match client.contact().delete(&id).await {
        Ok(()) => {
            info!("Deleted contact submission {}", id);
            Ok(back_to(AdminTab::Contacts))
        }
        Err(e) => {
            let message = inline_message(e)?;
            let mut panel = contact_panel(&client, &tab_query(AdminTab::Contacts)).await?;
            panel.error = Some(message);
            Ok(render_dashboard(&ctx, AdminPanel::Contacts(panel)))
        }
    }
}
