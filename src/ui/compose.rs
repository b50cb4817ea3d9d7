use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dm_composer::{DmClient, Effect, FormState, Msg, SendError, update};

/// The submission view: identifier, message, Send, status line.
pub struct ComposeView {
    root: gtk::Box,
    username_entry: gtk::Entry,
    message_entry: gtk::Entry,
    send_btn: gtk::Button,
    status: gtk::Label,
    state: RefCell<FormState>,
    client: DmClient,
    toasts: adw::ToastOverlay,
}

impl ComposeView {
    pub fn new(client: DmClient, toasts: adw::ToastOverlay) -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.set_margin_top(24);
        root.set_margin_bottom(24);
        root.set_margin_start(24);
        root.set_margin_end(24);
        root.set_valign(gtk::Align::Start);

        let title = gtk::Label::new(Some("Send a direct message"));
        title.add_css_class("title-2");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let username_entry = gtk::Entry::new();
        username_entry.set_placeholder_text(Some("Username"));
        username_entry.set_hexpand(true);

        let message_entry = gtk::Entry::new();
        message_entry.set_placeholder_text(Some("Type a message…"));
        message_entry.set_hexpand(true);

        let form = gtk::Box::new(gtk::Orientation::Vertical, 8);
        form.append(&username_entry);
        form.append(&message_entry);
        root.append(&form);

        let send_btn = gtk::Button::with_label("Send");
        send_btn.add_css_class("suggested-action");
        send_btn.set_halign(gtk::Align::End);
        root.append(&send_btn);

        let status = gtk::Label::new(None);
        status.add_css_class("dim-label");
        status.set_halign(gtk::Align::Start);
        status.set_wrap(true);
        status.set_selectable(true);
        root.append(&status);

        let view = Rc::new(Self {
            root,
            username_entry,
            message_entry,
            send_btn,
            status,
            state: RefCell::new(FormState::new()),
            client,
            toasts,
        });
        view.connect_signals();
        view.render();
        view
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    fn connect_signals(self: &Rc<Self>) {
        {
            let weak = Rc::downgrade(self);
            self.username_entry.connect_changed(move |entry| {
                with_view(&weak, |view| view.dispatch(Msg::UsernameChanged(entry.text().to_string())));
            });
        }
        {
            let weak = Rc::downgrade(self);
            self.message_entry.connect_changed(move |entry| {
                with_view(&weak, |view| view.dispatch(Msg::MessageChanged(entry.text().to_string())));
            });
        }
        // Enter in the message field submits, same as the button
        {
            let weak = Rc::downgrade(self);
            self.message_entry.connect_activate(move |_| {
                with_view(&weak, |view| view.dispatch(Msg::SubmitClicked));
            });
        }
        {
            let weak = Rc::downgrade(self);
            self.send_btn.connect_clicked(move |_| {
                with_view(&weak, |view| view.dispatch(Msg::SubmitClicked));
            });
        }
    }

    fn dispatch(self: &Rc<Self>, msg: Msg) {
        let effects = {
            let mut state = self.state.borrow_mut();
            let (next, effects) = update(std::mem::take(&mut *state), msg);
            *state = next;
            effects
        };
        self.render();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::Send(req) => {
                let client = self.client.clone();
                let rx = crate::utils::run_async_to_main(async move { client.send_dm(&req).await });
                let weak = Rc::downgrade(self);
                rx.attach(None, move |res: Result<String, SendError>| {
                    with_view(&weak, |view| view.dispatch(Msg::SendFinished(res)));
                    glib::ControlFlow::Continue
                });
            }
            Effect::Notify(text) => self.toasts.add_toast(adw::Toast::new(&text)),
        }
    }

    fn render(&self) {
        // Clone so the entry `changed` handlers can re-enter dispatch.
        let state = self.state.borrow().clone();
        if self.username_entry.text().as_str() != state.username {
            self.username_entry.set_text(&state.username);
        }
        if self.message_entry.text().as_str() != state.message {
            self.message_entry.set_text(&state.message);
        }
        self.status.set_label(state.status.as_deref().unwrap_or(""));
        self.send_btn.set_sensitive(state.can_submit());
    }
}

fn with_view(weak: &Weak<ComposeView>, f: impl FnOnce(&Rc<ComposeView>)) {
    if let Some(view) = weak.upgrade() {
        f(&view);
    }
}
