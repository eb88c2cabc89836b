use askama::Template;

use super::PublicContext;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PublicContext,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PublicContext,
    pub error: Option<String>,
    pub email: String,
}
