//! HTML rendering for the site's pages.
//!
//! The pages carry structure only: every piece of display copy is looked up
//! in the locale's string bundle, so the same markup serves every language.
//! Styling is left to the stylesheet shipped with the deployment.

use crate::contact::ContactSubject;
use crate::events::{self, EventCategory};
use crate::i18n::{BundleMetrics, Locale, LocaleRegistry, StringBundle};
use chrono::{Datelike, Utc};
use tracing::warn;

/// Look up a bundle string, falling back to the key itself.
///
/// The startup validator guarantees every required key, so a miss here means
/// a renderer asked for something outside the validated set. The key is
/// rendered as a visible marker and the miss is logged and counted.
pub fn text<'a>(bundle: &'a StringBundle, key: &'a str) -> &'a str {
    match bundle.get(key) {
        Some(value) => {
            BundleMetrics::global().record_hit();
            value
        }
        None => {
            BundleMetrics::global().record_miss();
            warn!("Missing translation key '{}'", key);
            key
        }
    }
}

/// Escaped lookup for interpolation into markup.
fn t(bundle: &StringBundle, key: &str) -> String {
    escape_html(text(bundle, key))
}

/// Escape text for safe interpolation into HTML.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Compute the language-switcher target for the current page.
///
/// Strips the current locale prefix from the path and prepends the target
/// locale, so `/pt/about` switches to `/en/about` and `/pt` to `/en`.
pub fn switch_locale_href(current: Locale, target: Locale, path: &str) -> String {
    let prefix = format!("/{}", current.code());
    let rest = path.strip_prefix(&prefix).unwrap_or(path);
    format!("/{}{}", target.code(), rest)
}

/// Navigation entries: path suffix under the locale prefix + label key.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("", "navigation.home"),
    ("/about", "navigation.about"),
    ("/services", "navigation.services"),
    ("/events", "navigation.events"),
    ("/contact", "navigation.contact"),
];

/// Wrap a page body in the shared shell: document head, navigation, footer.
fn layout(locale: Locale, bundle: &StringBundle, suffix: &str, title_key: &str, body: &str) -> String {
    let site_name = t(bundle, "common.siteName");
    let current_path = format!("/{}{}", locale.code(), suffix);

    let mut nav_links = String::new();
    for (item_suffix, label_key) in NAV_ITEMS {
        let href = format!("/{}{}", locale.code(), item_suffix);
        let current = if *item_suffix == suffix {
            " aria-current=\"page\""
        } else {
            ""
        };
        nav_links.push_str(&format!(
            "<li><a href=\"{href}\"{current}>{}</a></li>",
            t(bundle, label_key)
        ));
    }

    let mut switcher = String::new();
    for config in LocaleRegistry::get().list_enabled() {
        let Ok(target) = Locale::from_code(config.code) else {
            continue;
        };
        let href = switch_locale_href(locale, target, &current_path);
        let current = if target == locale {
            " aria-current=\"true\""
        } else {
            ""
        };
        switcher.push_str(&format!(
            "<a href=\"{href}\" hreflang=\"{}\"{current}>{}</a>",
            target.code(),
            target.code().to_uppercase()
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site_name}</title>
</head>
<body>
<header>
<nav>
<a class="logo" href="/{lang}">{site_name}</a>
<ul>{nav_links}</ul>
<div class="locale-switcher">{switcher}</div>
</nav>
</header>
<main>
{body}
</main>
<footer>
<section>
<h2>{site_name}</h2>
<p>{tagline}</p>
</section>
<section>
<h2>{quick_links}</h2>
<ul>{nav_links}</ul>
</section>
<section>
<h2>{footer_contact}</h2>
<p><a href="mailto:info@caplondonchurch.co.uk">info@caplondonchurch.co.uk</a></p>
</section>
<p>{rights}</p>
</footer>
</body>
</html>
"#,
        lang = locale.code(),
        title = t(bundle, title_key),
        site_name = site_name,
        nav_links = nav_links,
        switcher = switcher,
        body = body,
        tagline = t(bundle, "common.tagline"),
        quick_links = t(bundle, "common.footer.quickLinks"),
        footer_contact = t(bundle, "common.footer.contact"),
        rights = t(bundle, "common.footer.rights").replace("{year}", &Utc::now().year().to_string()),
    )
}

/// Render the home page.
pub fn home(locale: Locale, bundle: &StringBundle) -> String {
    let mut pillars = String::new();
    for key in [
        "homepage.pillars.worship",
        "homepage.pillars.evangelism",
        "homepage.pillars.discipleship",
        "homepage.pillars.family",
        "homepage.pillars.ministry",
    ] {
        pillars.push_str(&format!("<li>{}</li>", t(bundle, key)));
    }

    let body = format!(
        r#"<section class="hero">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<p>{description}</p>
<a class="cta" href="/{lang}/services">{cta}</a>
</section>
<section class="mission">
<p>{mission}</p>
</section>
<section class="pillars">
<h2>{pillars_title}</h2>
<ul>{pillars}</ul>
</section>"#,
        title = t(bundle, "homepage.hero.title"),
        subtitle = t(bundle, "homepage.hero.subtitle"),
        description = t(bundle, "homepage.hero.description"),
        lang = locale.code(),
        cta = t(bundle, "homepage.hero.cta"),
        mission = t(bundle, "homepage.mission.description"),
        pillars_title = t(bundle, "homepage.pillars.title"),
        pillars = pillars,
    );

    layout(locale, bundle, "", "homepage.hero.title", &body)
}

/// Render the about page.
pub fn about(locale: Locale, bundle: &StringBundle) -> String {
    let body = format!(
        r#"<section class="page-hero">
<h1>{title}</h1>
<p>{subtitle}</p>
</section>
<section class="mission">
<h2>{mission_title}</h2>
<p>{mission}</p>
</section>
<section class="vision">
<h2>{vision_title}</h2>
<p>{vision}</p>
</section>
<section class="pillars">
<h2>{pillars_title}</h2>
<p>{pillars_subtitle}</p>
</section>
<section class="leadership">
<h2>{leadership_title}</h2>
<p>{leadership_subtitle}</p>
</section>
<section class="cta">
<h2>{cta_title}</h2>
<p>{cta_description}</p>
<a href="/{lang}/contact">{cta_button}</a>
</section>"#,
        title = t(bundle, "about.title"),
        subtitle = t(bundle, "about.subtitle"),
        mission_title = t(bundle, "about.mission.title"),
        mission = t(bundle, "about.mission.description"),
        vision_title = t(bundle, "about.vision.title"),
        vision = t(bundle, "about.vision.description"),
        pillars_title = t(bundle, "about.pillars.title"),
        pillars_subtitle = t(bundle, "about.pillars.subtitle"),
        leadership_title = t(bundle, "about.leadership.title"),
        leadership_subtitle = t(bundle, "about.leadership.subtitle"),
        cta_title = t(bundle, "about.cta.title"),
        cta_description = t(bundle, "about.cta.description"),
        lang = locale.code(),
        cta_button = t(bundle, "about.cta.button"),
    );

    layout(locale, bundle, "/about", "about.title", &body)
}

/// Render the services page.
pub fn services(locale: Locale, bundle: &StringBundle) -> String {
    let mut weekly = String::new();
    for (day, highlight_keys) in [
        (
            "sunday",
            [
                "services.sunday.worship",
                "services.sunday.preaching",
                "services.sunday.prayer",
                "services.sunday.fellowship",
            ],
        ),
        (
            "tuesday",
            [
                "services.tuesday.intercession",
                "services.tuesday.healing",
                "services.tuesday.breakthrough",
                "services.tuesday.community",
            ],
        ),
        (
            "thursday",
            [
                "services.thursday.study",
                "services.thursday.discussion",
                "services.thursday.application",
                "services.thursday.growth",
            ],
        ),
    ] {
        let mut highlights = String::new();
        for key in highlight_keys {
            highlights.push_str(&format!("<li>{}</li>", t(bundle, key)));
        }
        weekly.push_str(&format!(
            r#"<article class="service">
<h3>{title}</h3>
<p class="time">{time}</p>
<p>{description}</p>
<ul>{highlights}</ul>
</article>"#,
            title = t(bundle, &format!("services.{day}.title")),
            time = t(bundle, &format!("services.{day}.time")),
            description = t(bundle, &format!("services.{day}.description")),
            highlights = highlights,
        ));
    }

    let body = format!(
        r#"<section class="page-hero">
<h1>{title}</h1>
<p>{subtitle}</p>
</section>
<section class="weekly">
<h2>{weekly_title}</h2>
<p>{weekly_subtitle}</p>
{weekly}
</section>
<section class="expect">
<h2>{expect_title}</h2>
<p>{expect_subtitle}</p>
</section>
<section class="special">
<h2>{special_title}</h2>
<p>{special_subtitle}</p>
</section>
<section class="cta">
<h2>{cta_title}</h2>
<p>{cta_description}</p>
<a href="/{lang}/contact">{cta_button}</a>
</section>"#,
        title = t(bundle, "services.title"),
        subtitle = t(bundle, "services.subtitle"),
        weekly_title = t(bundle, "services.weekly.title"),
        weekly_subtitle = t(bundle, "services.weekly.subtitle"),
        weekly = weekly,
        expect_title = t(bundle, "services.expect.title"),
        expect_subtitle = t(bundle, "services.expect.subtitle"),
        special_title = t(bundle, "services.special.title"),
        special_subtitle = t(bundle, "services.special.subtitle"),
        cta_title = t(bundle, "services.cta.title"),
        cta_description = t(bundle, "services.cta.description"),
        lang = locale.code(),
        cta_button = t(bundle, "services.cta.button"),
    );

    layout(locale, bundle, "/services", "services.title", &body)
}

/// Render the events page, optionally filtered to one category.
pub fn events_page(locale: Locale, bundle: &StringBundle, selected: Option<EventCategory>) -> String {
    let all_events = events::upcoming();

    let mut filter_bar = String::new();
    let all_current = if selected.is_none() {
        " aria-current=\"true\""
    } else {
        ""
    };
    filter_bar.push_str(&format!(
        "<li><a href=\"/{lang}/events\"{all_current}>{}</a></li>",
        t(bundle, "events.categories.all"),
        lang = locale.code(),
    ));
    for category in EventCategory::all() {
        let current = if selected == Some(category) {
            " aria-current=\"true\""
        } else {
            ""
        };
        filter_bar.push_str(&format!(
            "<li><a href=\"/{lang}/events?category={code}\"{current}>{label}</a></li>",
            lang = locale.code(),
            code = category.code(),
            label = t(bundle, category.label_key()),
        ));
    }

    let mut featured_list = String::new();
    for event in events::featured(&all_events) {
        featured_list.push_str(&format!(
            r#"<article class="event featured">
<h3>{title}</h3>
<p class="when">{date}, {time}</p>
<p>{description}</p>
</article>"#,
            title = t(bundle, event.title_key),
            date = events::format_date(event.date),
            time = event.time,
            description = t(bundle, event.description_key),
        ));
    }

    let mut event_list = String::new();
    for event in events::filter_by_category(&all_events, selected) {
        event_list.push_str(&format!(
            r#"<article class="event">
<h3>{title}</h3>
<p class="category">{category}</p>
<p class="when">{date}, {time}</p>
<p class="where">{location}</p>
<p>{description}</p>
<p><a href="/{lang}/contact">{learn_more}</a> <a href="/{lang}/contact?subject=events">{register}</a></p>
</article>"#,
            title = t(bundle, event.title_key),
            category = t(bundle, event.category.label_key()),
            date = events::format_date(event.date),
            time = event.time,
            location = t(bundle, event.location_key),
            description = t(bundle, event.description_key),
            lang = locale.code(),
            learn_more = t(bundle, "events.learnMore"),
            register = t(bundle, "events.register"),
        ));
    }

    let mut regular = String::new();
    for day in ["sunday", "tuesday", "thursday"] {
        regular.push_str(&format!(
            r#"<article class="gathering">
<h3>{title}</h3>
<p class="time">{time}</p>
<p>{description}</p>
</article>"#,
            title = t(bundle, &format!("events.regular.{day}.title")),
            time = t(bundle, &format!("events.regular.{day}.time")),
            description = t(bundle, &format!("events.regular.{day}.description")),
        ));
    }

    let body = format!(
        r#"<section class="page-hero">
<h1>{title}</h1>
<p>{subtitle}</p>
</section>
<section class="featured">
<h2>{featured_title}</h2>
<p>{featured_subtitle}</p>
{featured_list}
</section>
<section class="upcoming">
<h2>{upcoming_title}</h2>
<p>{upcoming_subtitle}</p>
<ul class="filter">{filter_bar}</ul>
{event_list}
</section>
<section class="regular">
<h2>{regular_title}</h2>
<p>{regular_subtitle}</p>
{regular}
</section>
<section class="cta">
<h2>{cta_title}</h2>
<p>{cta_description}</p>
<a href="mailto:info@caplondonchurch.co.uk">{subscribe}</a>
<a href="/{lang}/contact">{cta_contact}</a>
</section>"#,
        title = t(bundle, "events.title"),
        subtitle = t(bundle, "events.subtitle"),
        featured_title = t(bundle, "events.featured.title"),
        featured_subtitle = t(bundle, "events.featured.subtitle"),
        featured_list = featured_list,
        upcoming_title = t(bundle, "events.upcoming.title"),
        upcoming_subtitle = t(bundle, "events.upcoming.subtitle"),
        filter_bar = filter_bar,
        event_list = event_list,
        regular_title = t(bundle, "events.regular.title"),
        regular_subtitle = t(bundle, "events.regular.subtitle"),
        regular = regular,
        cta_title = t(bundle, "events.cta.title"),
        cta_description = t(bundle, "events.cta.description"),
        subscribe = t(bundle, "events.cta.subscribe"),
        lang = locale.code(),
        cta_contact = t(bundle, "events.cta.contact"),
    );

    layout(locale, bundle, "/events", "events.title", &body)
}

/// Render the contact page with the enquiry form.
pub fn contact(locale: Locale, bundle: &StringBundle) -> String {
    let mut subject_options = format!(
        "<option value=\"\">{}</option>",
        t(bundle, "contact.form.selectSubject")
    );
    for subject in ContactSubject::all() {
        subject_options.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            subject.code(),
            t(bundle, subject.label_key()),
        ));
    }

    let mut directions = String::new();
    for way in ["tube", "bus", "car"] {
        directions.push_str(&format!(
            r#"<article>
<h3>{title}</h3>
<p>{description}</p>
</article>"#,
            title = t(bundle, &format!("contact.directions.{way}.title")),
            description = t(bundle, &format!("contact.directions.{way}.description")),
        ));
    }

    let body = format!(
        r#"<section class="page-hero">
<h1>{title}</h1>
<p>{subtitle}</p>
</section>
<section class="info">
<h2>{info_title}</h2>
<p>{info_subtitle}</p>
<article class="address">
<h3>{address_title}</h3>
<p>{address_line1}<br>{address_line2}<br>{address_line3}</p>
</article>
<article class="phone">
<h3>{phone_title}</h3>
<p><a href="tel:+44XXXXXXXXX">+44 XXX XXX XXXX</a></p>
</article>
<article class="email">
<h3>{email_title}</h3>
<p><a href="mailto:info@caplondonchurch.co.uk">info@caplondonchurch.co.uk</a><br>
<a href="mailto:pastor@caplondonchurch.co.uk">pastor@caplondonchurch.co.uk</a></p>
</article>
<article class="hours">
<h3>{hours_title}</h3>
<p>{hours_weekdays}<br>{hours_saturday}<br>{hours_sunday}</p>
</article>
</section>
<section class="form">
<h2>{form_title}</h2>
<p>{form_subtitle}</p>
<form method="post" action="/{lang}/contact">
<label for="name">{name_label}</label>
<input type="text" id="name" name="name" required placeholder="{name_placeholder}">
<label for="email">{email_label}</label>
<input type="email" id="email" name="email" required placeholder="{email_placeholder}">
<label for="phone">{phone_label}</label>
<input type="tel" id="phone" name="phone" placeholder="{phone_placeholder}">
<label for="subject">{subject_label}</label>
<select id="subject" name="subject" required>{subject_options}</select>
<label for="message">{message_label}</label>
<textarea id="message" name="message" rows="6" required placeholder="{message_placeholder}"></textarea>
<label><input type="checkbox" name="prayerRequest" value="true"> {prayer_request}</label>
<button type="submit">{submit}</button>
</form>
</section>
<section class="location">
<h2>{location_title}</h2>
<p>{location_subtitle}</p>
<p>{map_placeholder}</p>
<p>{map_note}</p>
{directions}
</section>"#,
        title = t(bundle, "contact.title"),
        subtitle = t(bundle, "contact.subtitle"),
        info_title = t(bundle, "contact.info.title"),
        info_subtitle = t(bundle, "contact.info.subtitle"),
        address_title = t(bundle, "contact.info.address.title"),
        address_line1 = t(bundle, "contact.info.address.line1"),
        address_line2 = t(bundle, "contact.info.address.line2"),
        address_line3 = t(bundle, "contact.info.address.line3"),
        phone_title = t(bundle, "contact.info.phone.title"),
        email_title = t(bundle, "contact.info.email.title"),
        hours_title = t(bundle, "contact.info.hours.title"),
        hours_weekdays = t(bundle, "contact.info.hours.weekdays"),
        hours_saturday = t(bundle, "contact.info.hours.saturday"),
        hours_sunday = t(bundle, "contact.info.hours.sunday"),
        form_title = t(bundle, "contact.form.title"),
        form_subtitle = t(bundle, "contact.form.subtitle"),
        lang = locale.code(),
        name_label = t(bundle, "contact.form.name"),
        name_placeholder = t(bundle, "contact.form.namePlaceholder"),
        email_label = t(bundle, "contact.form.email"),
        email_placeholder = t(bundle, "contact.form.emailPlaceholder"),
        phone_label = t(bundle, "contact.form.phone"),
        phone_placeholder = t(bundle, "contact.form.phonePlaceholder"),
        subject_label = t(bundle, "contact.form.subject"),
        subject_options = subject_options,
        message_label = t(bundle, "contact.form.message"),
        message_placeholder = t(bundle, "contact.form.messagePlaceholder"),
        prayer_request = t(bundle, "contact.form.prayerRequest"),
        submit = t(bundle, "contact.form.submit"),
        location_title = t(bundle, "contact.location.title"),
        location_subtitle = t(bundle, "contact.location.subtitle"),
        map_placeholder = t(bundle, "contact.location.mapPlaceholder"),
        map_note = t(bundle, "contact.location.mapNote"),
        directions = directions,
    );

    layout(locale, bundle, "/contact", "contact.title", &body)
}

/// Render the page shown after a successful form submission.
pub fn contact_submitted(locale: Locale, bundle: &StringBundle) -> String {
    let body = format!(
        r#"<section class="form-result">
<h1>{title}</h1>
<p class="form-success">{success}</p>
<p><a href="/{lang}">{home}</a></p>
</section>"#,
        title = t(bundle, "contact.title"),
        success = t(bundle, "contact.form.success"),
        lang = locale.code(),
        home = t(bundle, "navigation.home"),
    );

    layout(locale, bundle, "/contact", "contact.title", &body)
}

/// Render the page shown when required fields are missing or invalid.
pub fn contact_rejected(locale: Locale, bundle: &StringBundle, fields: &[&str]) -> String {
    let mut field_list = String::new();
    for field in fields {
        let label_key = match *field {
            "name" => "contact.form.name",
            "email" => "contact.form.email",
            "subject" => "contact.form.subject",
            "message" => "contact.form.message",
            other => other,
        };
        field_list.push_str(&format!("<li>{}</li>", t(bundle, label_key)));
    }

    let body = format!(
        r#"<section class="form-result">
<h1>{title}</h1>
<p class="form-error">{error}</p>
<ul>{field_list}</ul>
<p><a href="/{lang}/contact">{back}</a></p>
</section>"#,
        title = t(bundle, "contact.title"),
        error = t(bundle, "contact.form.validationError"),
        field_list = field_list,
        lang = locale.code(),
        back = t(bundle, "contact.form.title"),
    );

    layout(locale, bundle, "/contact", "contact.title", &body)
}
