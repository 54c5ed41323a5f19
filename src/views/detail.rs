//! Project detail page: the full record plus the related-projects panel.
//! Resolution and the related selection happen in the route; this module
//! only renders what it is handed.

use crate::config::SiteConfig;
use crate::render::{self, html_escape};
use crate::store::Project;

pub fn render_page(config: &SiteConfig, project: &Project, related: &[&Project]) -> String {
    let body = format!(
        r#"<main class="project-page">
    <div class="container">
        <a href="/#portfolio" class="back-link">&larr; Back to Portfolio</a>
        {header}
        {info}
        {images}
        {sections}
    </div>
    {related}
</main>"#,
        header = render_header(project),
        info = render_info(project),
        images = render_images(project),
        sections = render_sections(project),
        related = render_related(related),
    );
    let title = format!("{} - {}", project.title, config.site.owner);
    render::page(config, &title, &project.description, "/#", &body)
}

fn render_header(project: &Project) -> String {
    format!(
        r#"<header class="project-header">
            <span class="project-category">{label}</span>
            <h1>{title}</h1>
            <p>{description}</p>
        </header>"#,
        label = html_escape(&project.category_label),
        title = html_escape(&project.title),
        description = html_escape(&project.description),
    )
}

fn render_info(project: &Project) -> String {
    let item = |heading: &str, value: &str| -> String {
        format!(
            r#"<div class="project-info-item"><h4>{}</h4><p>{}</p></div>"#,
            heading,
            html_escape(value)
        )
    };
    format!(
        r#"<div class="project-info-grid">
            {client}
            {year}
            {role}
            {tools}
        </div>"#,
        client = item("Client", &project.client),
        year = item("Year", &project.year),
        role = item("Role", &project.role),
        tools = item("Tools", &project.tools.join(", ")),
    )
}

fn render_images(project: &Project) -> String {
    // A lone image gets its own layout variant instead of the grid.
    let variant = if project.images.len() == 1 {
        " single-image"
    } else {
        ""
    };

    let wrappers: String = project
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            format!(
                r#"<div class="project-image-wrapper"><img src="/assets/{src}" alt="{title} - Image {n}" loading="lazy"></div>"#,
                src = html_escape(image),
                title = html_escape(&project.title),
                n = index + 1,
            )
        })
        .collect();

    format!(
        r#"<div class="project-images{variant}" id="projectImages">{wrappers}</div>"#,
        variant = variant,
        wrappers = wrappers,
    )
}

fn render_sections(project: &Project) -> String {
    let section = |heading: &str, text: &str| -> String {
        format!(
            r#"<div class="project-section"><h2>{}</h2><p>{}</p></div>"#,
            heading,
            html_escape(text)
        )
    };
    format!(
        "{}\n        {}\n        {}",
        section("The Challenge", &project.challenge),
        section("The Solution", &project.solution),
        section("The Result", &project.result),
    )
}

fn render_related(related: &[&Project]) -> String {
    if related.is_empty() {
        return String::new();
    }

    let cards: String = related
        .iter()
        .map(|project| {
            format!(
                r#"<div class="related-project-card">
                <a href="/project?id={id}">
                    <div class="related-project-image">
                        <img src="/assets/{thumbnail}" alt="{title}" loading="lazy">
                        <div class="related-project-overlay"><span>View Detail &rarr;</span></div>
                    </div>
                    <div class="related-project-info">
                        <span class="related-project-category">{label}</span>
                        <h3>{title}</h3>
                    </div>
                </a>
            </div>"#,
                id = project.id,
                thumbnail = html_escape(&project.thumbnail),
                title = html_escape(&project.title),
                label = html_escape(&project.category_label),
            )
        })
        .collect();

    format!(
        r#"<section class="related-projects">
        <div class="container">
            <h2 class="section-title">Related Projects</h2>
            <div class="related-grid" id="relatedProjects">{cards}</div>
        </div>
    </section>"#,
        cards = cards,
    )
}
