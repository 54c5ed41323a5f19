#![cfg(test)]

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SiteConfig;
use crate::contact::{self, ContactForm};
use crate::render;
use crate::store::{seed_projects, Project, ProjectStore, RELATED_LIMIT};
use crate::views::{detail, listing};

fn project(id: i64, title: &str, category: &str, label: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        category: category.to_string(),
        category_label: label.to_string(),
        thumbnail: format!("thumb{}.png", id),
        images: vec![format!("img{}.png", id)],
        client: "Client".to_string(),
        year: "2024".to_string(),
        role: "Designer".to_string(),
        tools: vec!["Figma".to_string(), "Adobe XD".to_string()],
        challenge: "The challenge text".to_string(),
        solution: "The solution text".to_string(),
        result: "The result text".to_string(),
    }
}

/// Four ui-ux projects and two branding ones, ids 1..=6.
fn mixed_store() -> ProjectStore {
    ProjectStore::new(vec![
        project(1, "One", "ui-ux", "UI/UX"),
        project(2, "Two", "ui-ux", "UI/UX"),
        project(3, "Three", "branding", "Branding"),
        project(4, "Four", "ui-ux", "UI/UX"),
        project(5, "Five", "branding", "Branding"),
        project(6, "Six", "ui-ux", "UI/UX"),
    ])
    .unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("folio_test_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════
// Store lookups
// ═══════════════════════════════════════════════════════════

#[test]
fn find_by_id_returns_unique_match() {
    let store = mixed_store();
    for id in 1..=6 {
        let found = store.find_by_id(id).unwrap();
        assert_eq!(found.id, id);
    }
    assert!(store.find_by_id(0).is_none());
    assert!(store.find_by_id(99).is_none());
    assert!(store.find_by_id(-1).is_none());
}

#[test]
fn find_by_raw_id_coerces_to_integer() {
    let store = mixed_store();
    assert_eq!(store.find_by_raw_id("3").unwrap().id, 3);
    assert_eq!(store.find_by_raw_id(" 3 ").unwrap().id, 3);
    assert!(store.find_by_raw_id("3abc").is_none());
    assert!(store.find_by_raw_id("abc").is_none());
    assert!(store.find_by_raw_id("").is_none());
    assert!(store.find_by_raw_id("3.5").is_none());
}

#[test]
fn by_category_all_returns_collection_verbatim() {
    let store = mixed_store();
    let all = store.by_category("all");
    assert_eq!(all.len(), 6);
    let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn by_category_preserves_relative_order() {
    let store = mixed_store();
    let ui = store.by_category("ui-ux");
    assert_eq!(ui.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 4, 6]);
    assert!(ui.iter().all(|p| p.category == "ui-ux"));

    let branding = store.by_category("branding");
    assert_eq!(branding.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 5]);
}

#[test]
fn by_category_unknown_is_empty_not_an_error() {
    let store = mixed_store();
    assert!(store.by_category("sculpture").is_empty());
}

#[test]
fn categories_are_distinct_with_labels() {
    let store = mixed_store();
    let cats = store.categories();
    assert_eq!(cats, vec![("ui-ux", "UI/UX"), ("branding", "Branding")]);
}

// ═══════════════════════════════════════════════════════════
// Store construction invariants
// ═══════════════════════════════════════════════════════════

#[test]
fn new_rejects_duplicate_ids() {
    let err = ProjectStore::new(vec![
        project(1, "A", "ui-ux", "UI/UX"),
        project(1, "B", "ui-ux", "UI/UX"),
    ])
    .unwrap_err();
    assert!(err.contains("duplicate"), "unexpected error: {}", err);
}

#[test]
fn new_rejects_non_positive_ids() {
    assert!(ProjectStore::new(vec![project(0, "A", "ui-ux", "UI/UX")]).is_err());
    assert!(ProjectStore::new(vec![project(-2, "A", "ui-ux", "UI/UX")]).is_err());
}

#[test]
fn new_rejects_empty_image_list() {
    let mut p = project(1, "A", "ui-ux", "UI/UX");
    p.images.clear();
    assert!(ProjectStore::new(vec![p]).is_err());
}

#[test]
fn new_rejects_conflicting_category_labels() {
    let err = ProjectStore::new(vec![
        project(1, "A", "ui-ux", "UI/UX"),
        project(2, "B", "ui-ux", "User Experience"),
    ])
    .unwrap_err();
    assert!(err.contains("labeled"), "unexpected error: {}", err);
}

#[test]
fn empty_store_is_valid() {
    let store = ProjectStore::new(vec![]).unwrap();
    assert!(store.is_empty());
    assert!(store.by_category("all").is_empty());
    assert!(store.categories().is_empty());
}

#[test]
fn seed_collection_satisfies_invariants() {
    let store = ProjectStore::new(seed_projects()).unwrap();
    assert_eq!(store.len(), 3);
    assert!(store.find_by_id(1).is_some());
}

// ═══════════════════════════════════════════════════════════
// Data file loading
// ═══════════════════════════════════════════════════════════

#[test]
fn load_missing_file_falls_back_to_seed() {
    let store = ProjectStore::load(std::path::Path::new("/nonexistent/projects.toml")).unwrap();
    assert_eq!(store.len(), seed_projects().len());
}

#[test]
fn load_parses_toml_data_file() {
    let path = write_temp(
        "projects.toml",
        r#"
[[projects]]
id = 10
title = "Poster Series"
description = "Concert posters"
category = "illustration"
category_label = "Illustration"
thumbnail = "poster.png"
images = ["poster.png", "poster-2.png"]
client = "Venue"
year = "2025"
role = "Illustrator"
tools = ["Procreate"]
challenge = "c"
solution = "s"
result = "r"
"#,
    );
    let store = ProjectStore::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(store.len(), 1);
    let p = store.find_by_id(10).unwrap();
    assert_eq!(p.title, "Poster Series");
    assert_eq!(p.images.len(), 2);
    assert_eq!(store.categories(), vec![("illustration", "Illustration")]);
}

#[test]
fn load_rejects_invalid_data_file() {
    let path = write_temp("broken.toml", "projects = 3\n");
    assert!(ProjectStore::load(&path).is_err());
    std::fs::remove_file(&path).ok();
}

// ═══════════════════════════════════════════════════════════
// Related-projects selection
// ═══════════════════════════════════════════════════════════

#[test]
fn related_prefers_same_category_in_order_without_randomization() {
    // Four same-category candidates: the first three in collection order
    // win, regardless of the rng.
    let store = ProjectStore::new(vec![
        project(1, "One", "ui-ux", "UI/UX"),
        project(2, "Two", "ui-ux", "UI/UX"),
        project(3, "Three", "ui-ux", "UI/UX"),
        project(4, "Four", "ui-ux", "UI/UX"),
    ])
    .unwrap();
    let current = store.find_by_id(1).unwrap();

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let related = store.related_projects(current, &mut rng);
        let ids: Vec<i64> = related.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }
}

#[test]
fn related_size_is_min_of_limit_and_rest() {
    let store = mixed_store();
    let current = store.find_by_id(3).unwrap();
    let related = store.related_projects(current, &mut rng());
    assert_eq!(related.len(), RELATED_LIMIT);

    let small = ProjectStore::new(vec![
        project(1, "One", "ui-ux", "UI/UX"),
        project(2, "Two", "branding", "Branding"),
        project(3, "Three", "motion", "Motion"),
    ])
    .unwrap();
    let current = small.find_by_id(1).unwrap();
    let related = small.related_projects(current, &mut rng());
    // |collection| - 1 = 2: both come from the other categories, no padding.
    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|p| p.category != "ui-ux"));
}

#[test]
fn related_never_contains_current_or_duplicates() {
    let store = mixed_store();
    for id in 1..=6 {
        let current = store.find_by_id(id).unwrap();
        let related = store.related_projects(current, &mut rng());
        let mut ids: Vec<i64> = related.iter().map(|p| p.id).collect();
        assert!(!ids.contains(&id));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), related.len());
    }
}

#[test]
fn related_fallback_keeps_same_category_first() {
    let store = mixed_store();
    // Project 3 has exactly one same-category sibling (5); it must lead,
    // and the remaining two get drawn from the ui-ux projects.
    let current = store.find_by_id(3).unwrap();
    let related = store.related_projects(current, &mut rng());
    assert_eq!(related[0].id, 5);
    assert_eq!(related.len(), 3);
    assert!(related[1..].iter().all(|p| p.category == "ui-ux"));
}

#[test]
fn related_is_deterministic_for_a_fixed_seed() {
    let store = mixed_store();
    let current = store.find_by_id(3).unwrap();
    let a: Vec<i64> = store
        .related_projects(current, &mut StdRng::seed_from_u64(42))
        .iter()
        .map(|p| p.id)
        .collect();
    let b: Vec<i64> = store
        .related_projects(current, &mut StdRng::seed_from_u64(42))
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(a, b);
}

#[test]
fn related_for_lone_project_is_empty() {
    let store = ProjectStore::new(vec![project(1, "Only", "ui-ux", "UI/UX")]).unwrap();
    let current = store.find_by_id(1).unwrap();
    assert!(store.related_projects(current, &mut rng()).is_empty());
}

// ═══════════════════════════════════════════════════════════
// Site configuration
// ═══════════════════════════════════════════════════════════

#[test]
fn config_parses_full_document() {
    let raw = r#"
[site]
name = "Studio"
owner = "Jane Doe"
tagline = "Product Designer"
description = "Jane's selected work"
url = "https://jane.example"

[hero]
heading = "Hello"
subheading = "World"

[about]
heading = "About"
bio = "Short bio"

[[about.stats]]
label = "Projects"
value = 12

[contact]
endpoint = "https://forms.example/submit"
access_key = "key-123"
email = "jane@example.com"
location = "Berlin"

[[social]]
label = "GitHub"
url = "https://github.com/janedoe"
"#;
    let config: SiteConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.site.owner, "Jane Doe");
    assert_eq!(config.about.stats.len(), 1);
    assert_eq!(config.about.stats[0].value, 12);
    assert_eq!(config.contact.access_key, "key-123");
    assert_eq!(config.social.len(), 1);
}

#[test]
fn config_missing_sections_use_defaults() {
    let config: SiteConfig = toml::from_str("[site]\nowner = \"Jane\"\n").unwrap();
    assert_eq!(config.site.owner, "Jane");
    assert!(!config.site.name.is_empty());
    assert!(!config.hero.heading.is_empty());
    assert!(!config.contact.endpoint.is_empty());
    assert!(config.social.is_empty());

    let empty: SiteConfig = toml::from_str("").unwrap();
    assert_eq!(empty.site.owner, SiteConfig::default().site.owner);
}

#[test]
fn config_load_or_default_survives_missing_file() {
    let config = SiteConfig::load_or_default(std::path::Path::new("/nonexistent/site.toml"));
    assert!(!config.site.owner.is_empty());
}

// ═══════════════════════════════════════════════════════════
// Listing view
// ═══════════════════════════════════════════════════════════

#[test]
fn listing_renders_one_card_per_project_in_order() {
    let config = SiteConfig::default();
    let store = mixed_store();
    let html = listing::render_page(&config, &store);

    assert_eq!(html.matches("<div class=\"portfolio-item\"").count(), 6);
    for id in 1..=6 {
        assert!(html.contains(&format!("href=\"/project?id={}\"", id)));
    }
    // Store order is preserved in the markup.
    let one = html.find("data-category=\"ui-ux\"").unwrap();
    let three = html.find("data-category=\"branding\"").unwrap();
    assert!(one < three);
}

#[test]
fn listing_renders_filter_controls_with_all_active() {
    let config = SiteConfig::default();
    let store = mixed_store();
    let html = listing::render_page(&config, &store);

    assert_eq!(
        html.matches("<button class=\"filter-btn active\" data-filter=\"all\"").count(),
        1
    );
    assert!(html.contains("data-filter=\"ui-ux\">UI/UX</button>"));
    assert!(html.contains("data-filter=\"branding\">Branding</button>"));
    // One control per distinct category plus "all".
    assert_eq!(html.matches("<button class=\"filter-btn").count(), 3);
}

#[test]
fn listing_includes_contact_form_and_honeypot() {
    let config = SiteConfig::default();
    let store = mixed_store();
    let html = listing::render_page(&config, &store);

    assert!(html.contains("id=\"contactForm\""));
    assert!(html.contains("name=\"_honey\""));
    assert!(html.contains("action=\"/api/contact\""));
    assert!(html.contains("id=\"formResponse\""));
}

#[test]
fn listing_empty_store_renders_placeholder() {
    let config = SiteConfig::default();
    let store = ProjectStore::new(vec![]).unwrap();
    let html = listing::render_page(&config, &store);
    assert!(html.contains("No projects yet."));
    assert!(!html.contains("<button class=\"filter-btn"));
    assert!(!html.contains("<div class=\"portfolio-item\""));
}

#[test]
fn listing_escapes_project_titles() {
    let config = SiteConfig::default();
    let store = ProjectStore::new(vec![project(1, "Cats & <Dogs>", "ui-ux", "UI/UX")]).unwrap();
    let html = listing::render_page(&config, &store);
    assert!(html.contains("Cats &amp; &lt;Dogs&gt;"));
    assert!(!html.contains("<Dogs>"));
}

// ═══════════════════════════════════════════════════════════
// Detail view
// ═══════════════════════════════════════════════════════════

#[test]
fn detail_single_image_uses_layout_variant() {
    let config = SiteConfig::default();
    let p = project(1, "One", "ui-ux", "UI/UX");
    assert_eq!(p.images.len(), 1);
    let html = detail::render_page(&config, &p, &[]);
    assert!(html.contains("class=\"project-images single-image\""));
}

#[test]
fn detail_multi_image_uses_standard_grid() {
    let config = SiteConfig::default();
    let mut p = project(1, "One", "ui-ux", "UI/UX");
    p.images.push("img1-b.png".to_string());
    let html = detail::render_page(&config, &p, &[]);
    assert!(html.contains("class=\"project-images\""));
    assert!(!html.contains("class=\"project-images single-image\""));
    assert_eq!(html.matches("<div class=\"project-image-wrapper\">").count(), 2);
}

#[test]
fn detail_renders_every_field() {
    let config = SiteConfig::default();
    let p = project(1, "One", "ui-ux", "UI/UX");
    let html = detail::render_page(&config, &p, &[]);

    assert!(html.contains("<h1>One</h1>"));
    assert!(html.contains("One description"));
    assert!(html.contains("UI/UX"));
    assert!(html.contains("Client"));
    assert!(html.contains("2024"));
    assert!(html.contains("Designer"));
    // Tools render as one comma-joined list.
    assert!(html.contains("Figma, Adobe XD"));
    assert!(html.contains("The challenge text"));
    assert!(html.contains("The solution text"));
    assert!(html.contains("The result text"));
    assert!(html.contains("<title>One - Your Name</title>"));
}

#[test]
fn detail_related_panel_lists_given_projects() {
    let config = SiteConfig::default();
    let p = project(1, "One", "ui-ux", "UI/UX");
    let r2 = project(2, "Two", "ui-ux", "UI/UX");
    let r3 = project(3, "Three", "branding", "Branding");
    let html = detail::render_page(&config, &p, &[&r2, &r3]);

    assert!(html.contains("Related Projects"));
    assert_eq!(html.matches("<div class=\"related-project-card\">").count(), 2);
    assert!(html.contains("href=\"/project?id=2\""));
    assert!(html.contains("href=\"/project?id=3\""));
}

#[test]
fn detail_omits_related_panel_when_empty() {
    let config = SiteConfig::default();
    let p = project(1, "One", "ui-ux", "UI/UX");
    let html = detail::render_page(&config, &p, &[]);
    assert!(!html.contains("Related Projects"));
}

// ═══════════════════════════════════════════════════════════
// Rendering helpers
// ═══════════════════════════════════════════════════════════

#[test]
fn html_escape_covers_markup_characters() {
    assert_eq!(
        render::html_escape(r#"<a href="x">&</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
    );
    assert_eq!(render::html_escape("plain"), "plain");
}

// ═══════════════════════════════════════════════════════════
// Contact relay
// ═══════════════════════════════════════════════════════════

fn contact_form(honey: &str) -> ContactForm {
    ContactForm {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        message: "Hello".to_string(),
        honey: honey.to_string(),
    }
}

#[test]
fn reply_states_are_mutually_exclusive() {
    let sent = contact::reply_for(Ok(true));
    assert!(sent.ok);
    assert_eq!(sent.message, contact::SENT_MESSAGE);

    let rejected = contact::reply_for(Ok(false));
    assert!(!rejected.ok);
    assert_eq!(rejected.message, contact::REJECTED_MESSAGE);

    let network = contact::reply_for(Err("connection refused".to_string()));
    assert!(!network.ok);
    assert_eq!(network.message, contact::NETWORK_MESSAGE);

    assert_ne!(rejected.message, network.message);
    assert_ne!(sent.message, rejected.message);
}

#[test]
fn honeypot_flags_spam() {
    assert!(!contact::is_spam(&contact_form("")));
    assert!(contact::is_spam(&contact_form("gotcha")));
}

#[test]
fn deliver_without_endpoint_is_a_network_failure() {
    let mut config = crate::config::ContactConfig::default();
    config.endpoint.clear();
    let err = contact::deliver(&config, &contact_form("")).unwrap_err();
    assert!(err.contains("not configured"));
}
