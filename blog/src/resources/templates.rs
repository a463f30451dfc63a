use crate::errors::BlogError;
use handlebars::Handlebars;
use serde::Serialize;

const LAYOUT: &str = "layout";
pub const POSTS: &str = "posts";
pub const POST: &str = "post";
pub const AUTHOR_POSTS: &str = "author_posts";
pub const NEW_POST: &str = "new_post";
pub const EDIT_POST: &str = "edit_post";
pub const DELETE_POST: &str = "delete_post";

pub struct Templates {
    pub registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, BlogError> {
        let mut registry = Handlebars::new();

        registry.register_partial(LAYOUT, include_str!("./templates/layout.hbs"))?;

        registry.register_template_string(POSTS, include_str!("./templates/posts.hbs"))?;
        registry.register_template_string(POST, include_str!("./templates/post.hbs"))?;
        registry.register_template_string(AUTHOR_POSTS, include_str!("./templates/author_posts.hbs"))?;
        registry.register_template_string(NEW_POST, include_str!("./templates/new_post.hbs"))?;
        registry.register_template_string(EDIT_POST, include_str!("./templates/edit_post.hbs"))?;
        registry.register_template_string(DELETE_POST, include_str!("./templates/delete_post.hbs"))?;

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, BlogError> {
        let html = self.registry.render(name, data)?;

        Ok(html)
    }
}
