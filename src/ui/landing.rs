use gtk4 as gtk;
use gtk4::prelude::*;

// Static product page. Hover rules are the only interactivity it has.
const LANDING_CSS: &str = r#"
.landing-nav-link { padding: 4px 10px; border-radius: 6px; }
.landing-nav-link:hover { background: alpha(@window_fg_color, 0.08); }
.landing-cta { padding: 8px 20px; border-radius: 999px; }
.landing-cta:hover { box-shadow: 0 1px 4px alpha(@window_fg_color, 0.25); }
.landing-chip { padding: 4px 14px; border-radius: 999px; border: 1px solid alpha(@window_fg_color, 0.2); }
.landing-chip:hover { background: alpha(@window_fg_color, 0.08); }
"#;

const NAV_LINKS: [&str; 5] = ["Overview", "Features", "Pricing", "Business", "Download"];
const SUGGESTIONS: [&str; 4] = [
    "Plan a trip",
    "Summarize a document",
    "Draft an email",
    "Brainstorm gift ideas",
];

pub struct LandingView;

impl LandingView {
    pub fn new() -> gtk::Widget {
        install_css();

        let root = gtk::Box::new(gtk::Orientation::Vertical, 24);
        root.set_margin_top(16);
        root.set_margin_bottom(24);
        root.set_margin_start(24);
        root.set_margin_end(24);

        let nav = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        let brand = gtk::Label::new(Some("Acme AI"));
        brand.add_css_class("heading");
        brand.set_margin_end(16);
        nav.append(&brand);
        for link in NAV_LINKS {
            let btn = gtk::Button::with_label(link);
            btn.add_css_class("flat");
            btn.add_css_class("landing-nav-link");
            nav.append(&btn);
        }
        let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        nav.append(&spacer);
        let login = gtk::Button::with_label("Log in");
        login.add_css_class("flat");
        login.add_css_class("landing-nav-link");
        nav.append(&login);
        root.append(&nav);

        let hero = gtk::Box::new(gtk::Orientation::Vertical, 12);
        hero.set_valign(gtk::Align::Center);
        hero.set_vexpand(true);
        let headline = gtk::Label::new(Some("What can I help with?"));
        headline.add_css_class("title-1");
        hero.append(&headline);
        let sub = gtk::Label::new(Some("Ask anything. Get answers, find inspiration and be more productive."));
        sub.add_css_class("dim-label");
        sub.set_wrap(true);
        sub.set_justify(gtk::Justification::Center);
        hero.append(&sub);

        let ctas = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        ctas.set_halign(gtk::Align::Center);
        let start = gtk::Button::with_label("Start now");
        start.add_css_class("suggested-action");
        start.add_css_class("landing-cta");
        let learn = gtk::Button::with_label("Learn more");
        learn.add_css_class("landing-cta");
        ctas.append(&start);
        ctas.append(&learn);
        hero.append(&ctas);

        let chips = gtk::FlowBox::new();
        chips.set_selection_mode(gtk::SelectionMode::None);
        chips.set_halign(gtk::Align::Center);
        chips.set_max_children_per_line(SUGGESTIONS.len() as u32);
        chips.set_column_spacing(8);
        for text in SUGGESTIONS {
            let chip = gtk::Button::with_label(text);
            chip.add_css_class("flat");
            chip.add_css_class("landing-chip");
            chips.insert(&chip, -1);
        }
        hero.append(&chips);
        root.append(&hero);

        let footer = gtk::Label::new(Some("By messaging, you agree to our Terms and have read our Privacy Policy."));
        footer.add_css_class("caption");
        footer.add_css_class("dim-label");
        root.append(&footer);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .child(&root)
            .build();
        scroller.upcast()
    }
}

fn install_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        log::warn!("No display, landing page styles not installed");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(LANDING_CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
