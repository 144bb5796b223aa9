mod batch;
mod formats;
mod frontmatter;
mod html;
mod multimarkdown;
