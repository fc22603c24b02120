//! Public site handlers.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, info};

use super::{inline_message, recover, AppState, WebError};
use crate::forms::{ContactForm, RiddleForm, ThemeForm};
use crate::models::find_record;
use crate::riddle;
use crate::session::{safe_return_path, theme_cookie, SiteContext};
use crate::ui::pages::{
    AboutPage, BlogPage, ContactState, HiddenPage, HomePage, ProjectsPage, RiddleState,
};
use crate::ui::render_page;

/// Query params for the home page (`/?riddle` opens the riddle modal)
#[derive(Deserialize, Default)]
pub struct HomeQuery {
    pub riddle: Option<String>,
}

/// GET / - Hero, plus the riddle modal on request
pub async fn home_page(
    State(state): State<AppState>,
    ctx: SiteContext,
    Query(query): Query<HomeQuery>,
) -> Response {
    let riddle = query.riddle.is_some().then(RiddleState::default);
    render_home(&state, &ctx, riddle)
}

fn render_home(state: &AppState, ctx: &SiteContext, riddle: Option<RiddleState>) -> Response {
    let theme = ctx.theme;
    let site = state.config.site.clone();
    render_page(theme, rsx! { HomePage { theme: theme, site: site, riddle: riddle } })
        .into_response()
}

/// POST /riddle - Check the answer; correct goes to /hidden
pub async fn riddle_answer(
    State(state): State<AppState>,
    ctx: SiteContext,
    Form(form): Form<RiddleForm>,
) -> Response {
    if riddle::is_correct(&form.answer) {
        debug!("Riddle solved");
        return Redirect::to("/hidden").into_response();
    }
    let riddle = RiddleState {
        error: Some(riddle::WRONG_ANSWER.to_string()),
        answer: form.answer,
    };
    render_home(&state, &ctx, Some(riddle))
}

/// GET /hidden - Reachable directly; the riddle is only decoration
pub async fn hidden_page(ctx: SiteContext) -> Response {
    let theme = ctx.theme;
    render_page(theme, rsx! { HiddenPage { theme: theme } }).into_response()
}

/// Query params for the about page (`?sent=1` after a successful contact post)
#[derive(Deserialize, Default)]
pub struct AboutQuery {
    pub sent: Option<String>,
}

/// GET /about - Bio, skills, hobbies and the contact form
pub async fn about_page(
    State(state): State<AppState>,
    ctx: SiteContext,
    Query(query): Query<AboutQuery>,
) -> Result<Response, WebError> {
    let contact = ContactState {
        sent: query.sent.is_some(),
        ..Default::default()
    };
    render_about(&state, &ctx, contact).await
}

async fn render_about(
    state: &AppState,
    ctx: &SiteContext,
    contact: ContactState,
) -> Result<Response, WebError> {
    let client = state.client_for(ctx);
    let (about, load_error) = recover(client.about().current().await)?;
    let theme = ctx.theme;

    Ok(render_page(
        theme,
        rsx! {
            AboutPage {
                theme: theme,
                about: about,
                load_error: load_error,
                contact: contact,
            }
        },
    )
    .into_response())
}

/// POST /contact - Forward a contact submission
///
/// Success redirects back to the about page (`?sent=1`); failure re-renders
/// it with the error and the submitted values.
pub async fn contact_submit(
    State(state): State<AppState>,
    ctx: SiteContext,
    Form(form): Form<ContactForm>,
) -> Result<Response, WebError> {
    let client = state.client_for(&ctx);
    match client.contact().submit(&form.to_input()).await {
        Ok(submission) => {
            info!("Contact submission {} received", submission.id);
            Ok(Redirect::to("/about?sent=1#contact").into_response())
        }
        Err(e) => {
            let contact = ContactState {
                form,
                error: Some(inline_message(e)?),
                sent: false,
            };
            render_about(&state, &ctx, contact).await
        }
    }
}

/// Query params for the blog page (`?post=<id>` opens one post)
#[derive(Deserialize, Default)]
pub struct BlogQuery {
    pub post: Option<String>,
}

/// GET /blog - Post list, or one post picked from the fetched list
pub async fn blog_page(
    State(state): State<AppState>,
    ctx: SiteContext,
    Query(query): Query<BlogQuery>,
) -> Result<Response, WebError> {
    let client = state.client_for(&ctx);
    let (posts, error) = recover(client.blogs().list().await)?;
    let selected = find_record(&posts, query.post.as_deref()).cloned();
    let theme = ctx.theme;

    Ok(render_page(
        theme,
        rsx! {
            BlogPage {
                theme: theme,
                posts: posts,
                selected: selected,
                error: error,
            }
        },
    )
    .into_response())
}

/// GET /projects - Project grid
pub async fn projects_page(
    State(state): State<AppState>,
    ctx: SiteContext,
) -> Result<Response, WebError> {
    let client = state.client_for(&ctx);
    let (projects, error) = recover(client.projects().list().await)?;
    let api_base = state.client.base_url().to_string();
    let theme = ctx.theme;

    Ok(render_page(
        theme,
        rsx! {
            ProjectsPage {
                theme: theme,
                projects: projects,
                api_base: api_base,
                error: error,
            }
        },
    )
    .into_response())
}

/// POST /theme - Flip the theme cookie and go back where the user was
pub async fn theme_toggle(
    State(state): State<AppState>,
    ctx: SiteContext,
    Form(form): Form<ThemeForm>,
) -> Response {
    let theme = ctx.theme.toggled();
    let next = safe_return_path(form.next.as_deref());
    debug!("Theme set to {}", theme.as_str());
    (
        [(
            header::SET_COOKIE,
            theme_cookie(theme, state.config.auth.secure_cookies),
        )],
        Redirect::to(next),
    )
        .into_response()
}
