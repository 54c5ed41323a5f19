//! Listing page: hero, about, the filterable portfolio grid, and the
//! contact section, rendered as one single-page body.

use crate::config::SiteConfig;
use crate::render::{self, html_escape};
use crate::store::{Project, ProjectStore};

pub fn render_page(config: &SiteConfig, store: &ProjectStore) -> String {
    let body = format!(
        "{}\n{}\n{}\n{}",
        render_hero(config),
        render_about(config),
        render_portfolio(store),
        render_contact(config),
    );
    let title = format!("{} - Portfolio", config.site.owner);
    render::page(config, &title, &config.site.description, "#", &body)
}

fn render_hero(config: &SiteConfig) -> String {
    format!(
        r##"<section id="home" class="hero">
    <div class="hero-background"></div>
    <div class="container">
        <p class="tagline">{tagline}</p>
        <h1>{heading}</h1>
        <p>{subheading}</p>
        <a href="#portfolio" class="btn btn-primary">View My Work</a>
        <a href="#contact" class="btn btn-outline">Get In Touch</a>
    </div>
</section>"##,
        tagline = html_escape(&config.site.tagline),
        heading = html_escape(&config.hero.heading),
        subheading = html_escape(&config.hero.subheading),
    )
}

fn render_about(config: &SiteConfig) -> String {
    let stats: String = config
        .about
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat-card"><div class="stat-number" data-target="{value}">0+</div><div class="stat-label">{label}</div></div>"#,
                value = stat.value,
                label = html_escape(&stat.label),
            )
        })
        .collect();

    format!(
        r#"<section id="about" class="about">
    <div class="container">
        <h2 class="section-title">{heading}</h2>
        <div class="about-grid">
            <p class="about-bio">{bio}</p>
            <div class="about-stats">{stats}</div>
        </div>
    </div>
</section>"#,
        heading = html_escape(&config.about.heading),
        bio = html_escape(&config.about.bio),
        stats = stats,
    )
}

fn render_portfolio(store: &ProjectStore) -> String {
    if store.is_empty() {
        return r#"<section id="portfolio" class="portfolio">
    <div class="container">
        <h2 class="section-title">My Portfolio</h2>
        <p>No projects yet.</p>
    </div>
</section>"#
            .to_string();
    }

    let mut filters = String::from(
        r#"<button class="filter-btn active" data-filter="all">All</button>"#,
    );
    for (tag, label) in store.categories() {
        filters.push_str(&format!(
            r#"<button class="filter-btn" data-filter="{}">{}</button>"#,
            html_escape(tag),
            html_escape(label),
        ));
    }

    // One card per project, store order; filtering happens in the page
    // script by toggling a class on these cards.
    let cards: String = store
        .by_category("all")
        .into_iter()
        .map(render_card)
        .collect();

    format!(
        r#"<section id="portfolio" class="portfolio">
    <div class="container">
        <h2 class="section-title">My Portfolio</h2>
        <div class="filter-bar">{filters}</div>
        <div class="portfolio-grid" id="portfolioGrid">
{cards}        </div>
    </div>
</section>"#,
        filters = filters,
        cards = cards,
    )
}

fn render_card(project: &Project) -> String {
    format!(
        r#"<div class="portfolio-item" data-category="{category}">
    <div class="portfolio-image">
        <img src="/assets/{thumbnail}" alt="{title}" loading="lazy">
        <div class="portfolio-overlay">
            <div class="portfolio-info">
                <p>{label}</p>
                <h3>{title}</h3>
                <a href="/project?id={id}" class="view-project">View Project &rarr;</a>
            </div>
        </div>
    </div>
</div>
"#,
        category = html_escape(&project.category),
        thumbnail = html_escape(&project.thumbnail),
        title = html_escape(&project.title),
        label = html_escape(&project.category_label),
        id = project.id,
    )
}

fn render_contact(config: &SiteConfig) -> String {
    let mut details = String::new();
    if !config.contact.email.is_empty() {
        details.push_str(&format!(
            r#"<div class="contact-detail"><strong>Email:</strong> <a href="mailto:{email}">{email}</a></div>"#,
            email = html_escape(&config.contact.email),
        ));
    }
    if !config.contact.location.is_empty() {
        details.push_str(&format!(
            r#"<div class="contact-detail"><strong>Location:</strong> {}</div>"#,
            html_escape(&config.contact.location),
        ));
    }

    let socials: String = config
        .social
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                html_escape(&link.url),
                html_escape(&link.label),
            )
        })
        .collect();
    let social_block = if socials.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="contact-social">{}</div>"#, socials)
    };

    format!(
        r#"<section id="contact" class="contact">
    <div class="container">
        <h2 class="section-title">Get In Touch</h2>
        <div class="contact-grid">
            <div class="contact-info">
                {details}
                {social_block}
            </div>
            <form id="contactForm" class="contact-form" method="post" action="/api/contact">
                <div class="form-group"><label for="cf-name">Name</label><input type="text" id="cf-name" name="name" required placeholder="Your name"></div>
                <div class="form-group"><label for="cf-email">Email</label><input type="email" id="cf-email" name="email" required placeholder="your@email.com"></div>
                <div class="form-group"><label for="cf-message">Message</label><textarea id="cf-message" name="message" required placeholder="Your message"></textarea></div>
                <div style="display:none"><input type="text" name="_honey" tabindex="-1" autocomplete="off"></div>
                <button type="submit" class="btn btn-primary"><span class="btn-text">Send Message</span><span class="btn-loading" style="display:none">Sending...</span></button>
                <div id="formResponse" class="form-response"></div>
            </form>
        </div>
    </div>
</section>"#,
        details = details,
        social_block = social_block,
    )
}
