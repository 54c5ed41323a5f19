//! Page shell: wraps a rendered body in the full HTML document with the
//! site chrome (navbar, footer), the stylesheet, and the page script.

use crate::config::SiteConfig;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a complete HTML document around `body`.
///
/// `nav_prefix` is "#" on the listing page (same-page anchors, so smooth
/// scrolling applies) and "/#" on the detail page (anchors resolve back to
/// the listing sections).
pub fn page(
    config: &SiteConfig,
    title: &str,
    description: &str,
    nav_prefix: &str,
    body: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <style>{style}</style>
</head>
<body>
{nav}
{body}
{footer}
<script>{js}</script>
</body>
</html>"#,
        title = html_escape(title),
        description = html_escape(description),
        style = STYLE,
        nav = build_nav(config, nav_prefix),
        body = body,
        footer = build_footer(config),
        js = SITE_JS,
    )
}

fn build_nav(config: &SiteConfig, prefix: &str) -> String {
    let link = |anchor: &str, label: &str| -> String {
        format!(
            r#"<li><a href="{}{}" class="nav-link">{}</a></li>"#,
            prefix, anchor, label
        )
    };
    format!(
        r#"<nav class="navbar" id="navbar">
    <div class="nav-container">
        <a href="/" class="nav-logo">{owner}</a>
        <ul class="nav-menu">
            {home}
            {about}
            {portfolio}
            {contact}
        </ul>
        <div class="hamburger" id="hamburger"><span></span><span></span><span></span></div>
    </div>
</nav>"#,
        owner = html_escape(&config.site.owner),
        home = link("home", "Home"),
        about = link("about", "About"),
        portfolio = link("portfolio", "Portfolio"),
        contact = link("contact", "Contact"),
    )
}

fn build_footer(config: &SiteConfig) -> String {
    format!(
        r#"<footer class="site-footer"><p>&copy; {} {}</p></footer>"#,
        chrono::Utc::now().format("%Y"),
        html_escape(&config.site.owner)
    )
}

const STYLE: &str = r##"
:root {
    --color-bg: #0f1115;
    --color-surface: #181b22;
    --color-text: #e8eaf0;
    --color-text-secondary: #9aa1b0;
    --color-accent: #667eea;
    --color-accent-2: #764ba2;
    --nav-height: 72px;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: auto; }
body {
    font-family: -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: var(--color-bg); color: var(--color-text); line-height: 1.6;
}
img { max-width: 100%; display: block; }
a { color: inherit; }
.container { max-width: 1100px; margin: 0 auto; padding: 0 24px; }
section { padding: 80px 0; }
.section-title { font-size: 2rem; margin-bottom: 32px; text-align: center; }

/* Navbar */
.navbar {
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    height: var(--nav-height); transition: background .25s, box-shadow .25s;
}
.navbar.scrolled { background: rgba(15,17,21,.92); box-shadow: 0 2px 12px rgba(0,0,0,.4); }
.nav-container {
    max-width: 1100px; margin: 0 auto; height: 100%;
    display: flex; align-items: center; justify-content: space-between; padding: 0 24px;
}
.nav-logo { font-weight: 700; font-size: 1.1rem; text-decoration: none; }
.nav-menu { display: flex; gap: 28px; list-style: none; }
.nav-link { text-decoration: none; font-size: .95rem; color: var(--color-text-secondary); }
.nav-link:hover, .nav-link.active { color: var(--color-text); }
.hamburger { display: none; flex-direction: column; gap: 5px; cursor: pointer; padding: 6px; }
.hamburger span { width: 22px; height: 2px; background: var(--color-text); transition: transform .2s, opacity .2s; }
.hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.active span:nth-child(2) { opacity: 0; }
.hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

/* Hero */
.hero { min-height: 100vh; display: flex; align-items: center; position: relative; overflow: hidden; }
.hero-background {
    position: absolute; inset: -20% 0; z-index: -1;
    background: radial-gradient(ellipse at 30% 20%, rgba(102,126,234,.25), transparent 60%),
                radial-gradient(ellipse at 80% 80%, rgba(118,75,162,.25), transparent 60%);
}
.hero h1 { font-size: 3rem; margin-bottom: 8px; }
.hero .tagline { color: var(--color-accent); font-size: 1.2rem; margin-bottom: 16px; }
.hero p { max-width: 560px; color: var(--color-text-secondary); margin-bottom: 28px; }
.btn {
    display: inline-block; padding: 12px 28px; border-radius: 6px; border: none;
    font-size: .95rem; font-weight: 600; text-decoration: none; cursor: pointer;
}
.btn-primary { background: linear-gradient(135deg, var(--color-accent), var(--color-accent-2)); color: #fff; }
.btn-outline { border: 1px solid var(--color-text-secondary); color: var(--color-text); margin-left: 12px; }

/* About */
.about-grid { display: grid; grid-template-columns: 1.2fr 1fr; gap: 48px; align-items: center; }
.about-bio { color: var(--color-text-secondary); }
.about-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.stat-card { background: var(--color-surface); border-radius: 10px; padding: 24px 12px; text-align: center; }
.stat-number { font-size: 1.8rem; font-weight: 700; color: var(--color-accent); }
.stat-label { font-size: .8rem; color: var(--color-text-secondary); margin-top: 4px; }

/* Portfolio */
.filter-bar { display: flex; flex-wrap: wrap; gap: 10px; justify-content: center; margin-bottom: 36px; }
.filter-btn {
    padding: 8px 20px; border-radius: 20px; border: 1px solid var(--color-text-secondary);
    background: transparent; color: var(--color-text-secondary); font-size: .85rem; cursor: pointer;
}
.filter-btn.active { background: var(--color-accent); border-color: var(--color-accent); color: #fff; }
.portfolio-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
.portfolio-item.hide { display: none; }
.portfolio-image { position: relative; border-radius: 10px; overflow: hidden; background: var(--color-surface); }
.portfolio-image img { width: 100%; aspect-ratio: 4/3; object-fit: cover; }
.portfolio-overlay {
    position: absolute; inset: 0; display: flex; align-items: flex-end;
    background: linear-gradient(to top, rgba(0,0,0,.85), transparent 60%);
    opacity: 0; transition: opacity .25s;
}
.portfolio-item:hover .portfolio-overlay { opacity: 1; }
.portfolio-info { padding: 20px; }
.portfolio-info h3 { font-size: 1.1rem; }
.portfolio-info p { font-size: .8rem; color: var(--color-accent); margin-bottom: 8px; }
.view-project { font-size: .85rem; text-decoration: none; color: #fff; }

/* Project detail */
.project-page { padding-top: calc(var(--nav-height) + 40px); }
.back-link { display: inline-block; margin-bottom: 28px; font-size: .9rem; color: var(--color-text-secondary); text-decoration: none; }
.project-header { margin-bottom: 40px; }
.project-category { color: var(--color-accent); font-size: .85rem; text-transform: uppercase; letter-spacing: .08em; }
.project-header h1 { font-size: 2.4rem; margin: 8px 0; }
.project-header p { color: var(--color-text-secondary); max-width: 640px; }
.project-info-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 20px; margin-bottom: 48px; }
.project-info-item h4 { font-size: .75rem; text-transform: uppercase; letter-spacing: .08em; color: var(--color-text-secondary); margin-bottom: 4px; }
.project-images { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin-bottom: 48px; }
.project-images.single-image { grid-template-columns: 1fr; max-width: 820px; margin-left: auto; margin-right: auto; }
.project-image-wrapper { border-radius: 10px; overflow: hidden; background: var(--color-surface); }
.project-section { max-width: 720px; margin: 0 auto 36px; }
.project-section h2 { font-size: 1.3rem; margin-bottom: 10px; }
.project-section p { color: var(--color-text-secondary); }

/* Related projects */
.related-projects { border-top: 1px solid rgba(255,255,255,.06); }
.related-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px; }
.related-project-card a { text-decoration: none; }
.related-project-image { position: relative; border-radius: 10px; overflow: hidden; background: var(--color-surface); }
.related-project-image img { width: 100%; aspect-ratio: 4/3; object-fit: cover; }
.related-project-overlay {
    position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;
    background: rgba(0,0,0,.55); opacity: 0; transition: opacity .25s; font-size: .9rem;
}
.related-project-card:hover .related-project-overlay { opacity: 1; }
.related-project-info { padding: 12px 4px; }
.related-project-category { font-size: .75rem; color: var(--color-accent); }
.related-project-info h3 { font-size: 1rem; margin-top: 2px; }

/* Contact */
.contact-grid { display: grid; grid-template-columns: 1fr 1.2fr; gap: 48px; }
.contact-detail { margin-bottom: 12px; color: var(--color-text-secondary); }
.contact-detail strong { color: var(--color-text); }
.contact-social { display: flex; gap: 16px; margin-top: 20px; }
.contact-social a { color: var(--color-text-secondary); font-size: .9rem; }
.form-group { margin-bottom: 16px; }
.form-group label { display: block; font-size: .85rem; margin-bottom: 6px; }
.form-group input, .form-group textarea {
    width: 100%; padding: 10px 14px; border-radius: 6px; font-size: .95rem;
    border: 1px solid rgba(255,255,255,.12); background: var(--color-surface);
    color: var(--color-text); font-family: inherit;
}
.form-group textarea { resize: vertical; min-height: 140px; }
.form-response { display: none; margin-top: 16px; padding: 12px 16px; border-radius: 6px; font-size: .9rem; }
.form-response.success { background: rgba(34,197,94,.12); color: #4ade80; }
.form-response.error { background: rgba(239,68,68,.12); color: #f87171; }

/* Image fallback */
img.missing {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 240px;
}

.site-footer { padding: 32px 0; text-align: center; color: var(--color-text-secondary); font-size: .85rem; }

@media (max-width: 768px) {
    .nav-menu {
        display: none; position: fixed; top: var(--nav-height); left: 0; right: 0;
        flex-direction: column; gap: 0; background: var(--color-surface); padding: 12px 0;
    }
    .nav-menu.active { display: flex; }
    .nav-menu li { padding: 12px 24px; }
    .hamburger { display: flex; }
    .hero h1 { font-size: 2.2rem; }
    .about-grid, .contact-grid { grid-template-columns: 1fr; }
    .project-images { grid-template-columns: 1fr; }
}
"##;

/// Behaviors the browser owns: menu toggling, scroll effects, the one-shot
/// reveal and counter observers, grid filtering, and the contact submission
/// flow. Filtering only toggles a class per card; nothing re-renders.
const SITE_JS: &str = r##"
(function () {
    'use strict';

    // Mobile menu
    var hamburger = document.getElementById('hamburger');
    var navMenu = document.querySelector('.nav-menu');
    if (hamburger && navMenu) {
        hamburger.addEventListener('click', function () {
            hamburger.classList.toggle('active');
            navMenu.classList.toggle('active');
        });
    }
    var navLinks = document.querySelectorAll('.nav-link');
    navLinks.forEach(function (link) {
        link.addEventListener('click', function () {
            if (hamburger && navMenu) {
                hamburger.classList.remove('active');
                navMenu.classList.remove('active');
            }
        });
    });

    // Navbar scroll state
    var navbar = document.getElementById('navbar');
    if (navbar) {
        window.addEventListener('scroll', function () {
            if (window.pageYOffset > 100) {
                navbar.classList.add('scrolled');
            } else {
                navbar.classList.remove('scrolled');
            }
        });
    }

    // Smooth scroll for same-page anchors
    document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
        anchor.addEventListener('click', function (e) {
            var target = document.querySelector(this.getAttribute('href'));
            if (target) {
                e.preventDefault();
                window.scrollTo({ top: target.offsetTop - 80, behavior: 'smooth' });
            }
        });
    });

    // Active nav link tracking
    var sections = document.querySelectorAll('section[id]');
    if (sections.length) {
        window.addEventListener('scroll', function () {
            var current = '';
            sections.forEach(function (section) {
                if (window.pageYOffset >= section.offsetTop - 100) {
                    current = section.getAttribute('id');
                }
            });
            navLinks.forEach(function (link) {
                var href = link.getAttribute('href');
                link.classList.toggle('active', href === '#' + current || href === '/#' + current);
            });
        });
    }

    // Reveal animation: each element is observed until its first
    // intersection, then released. One trigger per element, ever.
    var revealElements = document.querySelectorAll(
        '.portfolio-item, .stat-card, .project-image-wrapper, .related-project-card');
    if (revealElements.length && 'IntersectionObserver' in window) {
        var revealObserver = new IntersectionObserver(function (entries) {
            entries.forEach(function (entry, index) {
                if (entry.isIntersecting) {
                    setTimeout(function () {
                        entry.target.style.opacity = '1';
                        entry.target.style.transform = 'translateY(0)';
                    }, index * 100);
                    revealObserver.unobserve(entry.target);
                }
            });
        }, { threshold: 0.1 });
        revealElements.forEach(function (element) {
            element.style.opacity = '0';
            element.style.transform = 'translateY(30px)';
            element.style.transition = 'opacity 0.6s ease, transform 0.6s ease';
            revealObserver.observe(element);
        });
    }

    // Stat counters, animated once when the stats block scrolls into view
    var statNumbers = document.querySelectorAll('.stat-number');
    var statsBlock = document.querySelector('.about-stats');
    if (statsBlock && statNumbers.length && 'IntersectionObserver' in window) {
        var counted = false;
        var animateCounter = function (element) {
            var target = parseInt(element.getAttribute('data-target'), 10) || 0;
            var increment = target / (2000 / 16);
            var current = 0;
            var step = function () {
                current += increment;
                if (current < target) {
                    element.textContent = Math.floor(current) + '+';
                    requestAnimationFrame(step);
                } else {
                    element.textContent = target + '+';
                }
            };
            step();
        };
        var statsObserver = new IntersectionObserver(function (entries) {
            entries.forEach(function (entry) {
                if (entry.isIntersecting && !counted) {
                    counted = true;
                    statNumbers.forEach(animateCounter);
                    statsObserver.unobserve(entry.target);
                }
            });
        }, { threshold: 0.5 });
        statsObserver.observe(statsBlock);
    }

    // Portfolio filtering: class toggling over the already-rendered cards,
    // exactly one filter active at a time
    var filterButtons = document.querySelectorAll('.filter-btn');
    var portfolioItems = document.querySelectorAll('.portfolio-item');
    filterButtons.forEach(function (button) {
        button.addEventListener('click', function () {
            filterButtons.forEach(function (btn) { btn.classList.remove('active'); });
            button.classList.add('active');
            var filter = button.getAttribute('data-filter');
            portfolioItems.forEach(function (item) {
                var match = filter === 'all' || item.getAttribute('data-category') === filter;
                item.classList.toggle('hide', !match);
            });
        });
    });

    // Placeholder presentation for images that fail to load
    document.querySelectorAll('img').forEach(function (img) {
        img.addEventListener('error', function () {
            this.classList.add('missing');
        });
    });

    // Contact form: single outstanding submission, three terminal states.
    // Inputs are cleared only on confirmed success.
    var form = document.getElementById('contactForm');
    var formResponse = document.getElementById('formResponse');
    if (form && formResponse) {
        form.addEventListener('submit', function (e) {
            e.preventDefault();
            var submitBtn = form.querySelector('button[type="submit"]');
            var btnText = submitBtn.querySelector('.btn-text');
            var btnLoading = submitBtn.querySelector('.btn-loading');
            btnText.style.display = 'none';
            btnLoading.style.display = 'inline';
            submitBtn.disabled = true;
            formResponse.style.display = 'none';

            fetch('/api/contact', { method: 'POST', body: new FormData(form) })
                .then(function (r) { return r.json(); })
                .then(function (data) {
                    formResponse.textContent = data.message;
                    formResponse.className = data.ok ? 'form-response success' : 'form-response error';
                    formResponse.style.display = 'block';
                    if (data.ok) { form.reset(); }
                })
                .catch(function () {
                    formResponse.textContent = 'Network error. Please check your connection and try again.';
                    formResponse.className = 'form-response error';
                    formResponse.style.display = 'block';
                })
                .finally(function () {
                    btnText.style.display = 'inline';
                    btnLoading.style.display = 'none';
                    submitBtn.disabled = false;
                });
        });
    }
})();
"##;
