use adw::Application;
use adw::prelude::*;
use dm_composer::DmClient;

pub fn show_main_window(app: &Application, client: DmClient) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("DM Composer")
        .default_width(720)
        .default_height(520)
        .build();

    let overlay = adw::ToastOverlay::new();

    let stack = adw::ViewStack::new();
    let compose = crate::ui::compose::ComposeView::new(client, overlay.clone());
    stack.add_titled_with_icon(&compose.widget(), Some("compose"), "Compose", "mail-send-symbolic");
    let landing = crate::ui::landing::LandingView::new();
    stack.add_titled_with_icon(&landing, Some("landing"), "Discover", "starred-symbolic");
    stack.set_visible_child_name("compose");
    stack.set_vexpand(true);

    overlay.set_child(Some(&stack));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let switcher = adw::ViewSwitcher::builder()
        .stack(&stack)
        .policy(adw::ViewSwitcherPolicy::Wide)
        .build();
    header.set_title_widget(Some(&switcher));
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();
}
