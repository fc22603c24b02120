//! Blog list and single-post view.

use dioxus::prelude::*;

use crate::models::{long_date, BlogPost};
use crate::session::Theme;
use crate::ui::components::{ErrorBanner, Layout};

#[derive(Props, Clone, PartialEq)]
pub struct BlogPageProps {
    pub theme: Theme,
    pub posts: Vec<BlogPost>,
    /// Post opened with `?post=<id>`
    #[props(default)]
    pub selected: Option<BlogPost>,
    #[props(default)]
    pub error: Option<String>,
}

#[component]
pub fn BlogPage(props: BlogPageProps) -> Element {
    let path = match &props.selected {
        Some(post) => format!("/blog?post={}", urlencoding::encode(&post.id)),
        None => "/blog".to_string(),
    };
    let empty = props.posts.is_empty() && props.error.is_none();

    rsx! {
        Layout {
            title: "Blog".to_string(),
            nav_active: "blog".to_string(),
            theme: props.theme,
            path: path,

            ErrorBanner { message: props.error.clone() }
            if let Some(post) = props.selected {
                BlogPostView { post: post }
            } else {
                h1 { "Blog" }
                if empty {
                    p { class: "muted", "No blog posts yet." }
                }
                div { class: "card-grid",
                    for post in props.posts.iter() {
                        BlogCard { post: post.clone() }
                    }
                }
            }
        }
    }
}

fn post_date(post: &BlogPost) -> String {
    post.created_at.as_ref().map(long_date).unwrap_or_default()
}

#[component]
fn BlogCard(post: BlogPost) -> Element {
    let date = post_date(&post);
    let href = format!("/blog?post={}", urlencoding::encode(&post.id));

    rsx! {
        article {
            header {
                h3 { "{post.title}" }
                small { "{date}" }
            }
            p { "{post.excerpt}" }
            a { href: "{href}", "Read More →" }
        }
    }
}

#[component]
fn BlogPostView(post: BlogPost) -> Element {
    let date = post_date(&post);
    let paragraphs: Vec<String> = post.paragraphs().into_iter().map(String::from).collect();

    rsx! {
        article { class: "blog-content",
            a { href: "/blog", "← Back to List" }
            h1 { "{post.title}" }
            small { "{date}" }
            for paragraph in paragraphs.iter() {
                p { "{paragraph}" }
            }
        }
    }
}
