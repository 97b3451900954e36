//! Page renderers for the login, registration, scheduling and home views.

use std::path::Path;

use axum::response::Html;

use crate::backend::auth::users::User;
use crate::backend::posts::db::Post;
use crate::backend::views::{escape_html, layout};

const GUEST_NAV: &str = r#"<a href="/login">Log in</a> | <a href="/register">Register</a>"#;
const USER_NAV: &str =
    r#"<a href="/home">My posts</a> | <a href="/register_post">Schedule a post</a> | <a href="/logout">Log out</a>"#;

/// Format used by `<input type="datetime-local">` and by the scheduling form
pub const POST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Login form; shows a hint when the visitor already has a session
pub fn login_page(user_authenticated: bool) -> Html<String> {
    let notice = if user_authenticated {
        r#"<p>You are already logged in. <a href="/home">Go to your posts</a>.</p>"#
    } else {
        ""
    };
    let nav = if user_authenticated { USER_NAV } else { GUEST_NAV };

    let body = format!(
        r#"<h1>Log in</h1>
{notice}
<form method="post" action="/login">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Log in</button>
</form>"#
    );
    Html(layout("Log in", nav, &body))
}

pub fn register_page() -> Html<String> {
    let body = r#"<h1>Register</h1>
<form method="post" action="/register">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<label>Platform account ID <input type="text" name="platform_account_id"></label>
<label>Access token <input type="text" name="access_token"></label>
<button type="submit">Register</button>
</form>"#;
    Html(layout("Register", GUEST_NAV, body))
}

/// Scheduling form, pre-filled with the logged-in user's ID when known
pub fn register_post_page(user: Option<&User>) -> Html<String> {
    let user_id = user.map(|u| u.id.to_string()).unwrap_or_default();
    let greeting = user
        .map(|u| format!("<p>Scheduling as {}.</p>", escape_html(&u.name)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Schedule a post</h1>
{greeting}
<form method="post" action="/register_post" enctype="multipart/form-data">
<input type="hidden" name="user_id" value="{user_id}">
<label>Post <textarea name="post" required></textarea></label>
<label>Publish at <input type="datetime-local" name="post_time" required></label>
<label>Photo <input type="file" name="photo" accept=".jpg,.jpeg,.png"></label>
<button type="submit">Schedule</button>
</form>"#
    );
    Html(layout("Schedule a post", USER_NAV, &body))
}

/// Listing of the user's scheduled posts, in storage order
pub fn home_page(user: &User, posts: &[Post], success: bool) -> Html<String> {
    let banner = if success {
        r#"<p class="success">Post scheduled.</p>"#
    } else {
        ""
    };

    let listing = if posts.is_empty() {
        "<p>No scheduled posts.</p>".to_string()
    } else {
        let items: String = posts.iter().map(post_item).collect();
        format!("<ul>\n{}</ul>", items)
    };

    let body = format!(
        "<h1>Welcome, {name}</h1>\n{banner}\n<h2>Scheduled posts</h2>\n{listing}",
        name = escape_html(&user.name),
    );
    Html(layout("My posts", USER_NAV, &body))
}

fn post_item(post: &Post) -> String {
    let photo = post
        .photo_path
        .as_deref()
        .and_then(|path| Path::new(path).file_name())
        .map(|name| {
            let name = escape_html(&name.to_string_lossy());
            format!(r#" <a href="/uploads/{name}">photo</a>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<li><time>{time}</time> {content}{photo}
<form method="post" action="/delete_post/{id}"><button type="submit">Delete</button></form></li>
"#,
        time = post.post_time.format(POST_TIME_FORMAT),
        content = escape_html(&post.content),
        id = post.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn user() -> User {
        User {
            id: 7,
            name: "<Alice>".to_string(),
            email: "a@x.com".to_string(),
            password_hash: String::new(),
            platform_account_id: "alice_ig".to_string(),
            access_token: Some("tok".to_string()),
            created_at: Utc::now(),
        }
    }

    fn post(photo_path: Option<&str>) -> Post {
        Post {
            id: 3,
            user_id: 7,
            content: "hello & bye".to_string(),
            post_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            photo_path: photo_path.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_home_page_lists_posts() {
        let Html(page) = home_page(&user(), &[post(Some("uploads/cat.png"))], true);
        assert!(page.contains("Welcome, &lt;Alice&gt;"));
        assert!(page.contains("2024-01-01T10:00</time> hello &amp; bye"));
        assert!(page.contains(r#"href="/uploads/cat.png""#));
        assert!(page.contains(r#"action="/delete_post/3""#));
        assert!(page.contains("Post scheduled."));
    }

    #[test]
    fn test_home_page_empty() {
        let Html(page) = home_page(&user(), &[], false);
        assert!(page.contains("No scheduled posts."));
        assert!(!page.contains("Post scheduled."));
    }

    #[test]
    fn test_register_post_page_prefills_user_id() {
        let Html(page) = register_post_page(Some(&user()));
        assert!(page.contains(r#"name="user_id" value="7""#));
        assert!(page.contains(r#"enctype="multipart/form-data""#));

        let Html(anonymous) = register_post_page(None);
        assert!(anonymous.contains(r#"name="user_id" value="""#));
    }

    #[test]
    fn test_login_page_notice() {
        let Html(page) = login_page(true);
        assert!(page.contains("already logged in"));
        let Html(page) = login_page(false);
        assert!(!page.contains("already logged in"));
    }
}
