//! Lifecycle of the bridge: what gets wired up when, and the reverse order on shutdown.

use crate::channel::{
    channel_name, BinaryMessenger, ChannelHub, MethodCall, MethodResponse, TRAY_CHANNEL, URI_CHANNEL,
    WINDOW_CHANNEL,
};
use crate::config::ShellConfig;
use crate::tray::router::{EventPattern, EventRoute, EventRouter, HandlerResult};
use crate::tray::{builder, ids, MenuBackend, TrayBridge, TrayCommandHandler, TrayRegistry};
use crate::uri::UriForwarder;
use crate::window::{ActiveWindowFn, NativeWindow, Visibility, VisibilityToggle, WindowCommandHandler};
use anyhow::Result;
use std::cell::Cell;
use std::rc::Rc;

pub struct ShellParts {
    pub config: ShellConfig,
    pub messenger: Rc<dyn BinaryMessenger>,
    pub window: Rc<dyn NativeWindow>,
    pub active_window: ActiveWindowFn,
    pub args: Vec<String>,
}

pub struct Shell {
    config: ShellConfig,
    hub: ChannelHub,
    window: Rc<dyn NativeWindow>,
    tray: TrayBridge,
    visibility: Rc<VisibilityToggle>,
    router: EventRouter,
    uri: UriForwarder,
    args: Vec<String>,
    first_frame_seen: Cell<bool>,
    shut_down: Cell<bool>,
}

impl Shell {
    /// Wires the bridge to an existing window and surface and opens the window channel.
    pub fn new(parts: ShellParts) -> Self {
        let ShellParts {
            config,
            messenger,
            window,
            active_window,
            args,
        } = parts;

        let hub = ChannelHub::new(messenger);
        let registry = Rc::new(TrayRegistry::new());
        let tray = TrayBridge::new(
            registry.clone(),
            hub.channel(&channel_name(&config.channel_prefix, TRAY_CHANNEL)),
        );
        let visibility = Rc::new(VisibilityToggle::new(
            window.clone(),
            registry,
            config.app_name.clone(),
        ));
        let router = native_routes(visibility.clone());
        let uri = UriForwarder::new(&config.uri_scheme);

        let window_handler =
            WindowCommandHandler::new(window.clone(), active_window).with_visibility(visibility.clone());
        hub.set_handler(
            &channel_name(&config.channel_prefix, WINDOW_CHANNEL),
            Rc::new(window_handler),
        );

        Self {
            config,
            hub,
            window,
            tray,
            visibility,
            router,
            uri,
            args,
            first_frame_seen: Cell::new(false),
            shut_down: Cell::new(false),
        }
    }

    /// Builds the tray, opens the tray channel, and forwards the startup URI.
    ///
    /// The tray channel only opens once the registry is populated. A failure to show the
    /// indicator is returned after the remaining steps have run.
    pub fn start(&self, backend: Box<dyn MenuBackend>) -> Result<()> {
        let tree = builder::shell_menu(&self.config);
        let built = self.tray.build(&tree, backend);

        let tray_channel = self.tray_channel();
        if self.tray.is_built() && !self.hub.has_handler(&tray_channel) {
            let handler = TrayCommandHandler::new(self.tray.registry().clone());
            self.hub.set_handler(&tray_channel, Rc::new(handler));
        }

        let uri_channel = self.hub.channel(&channel_name(&self.config.channel_prefix, URI_CHANNEL));
        self.uri.forward(&self.args, &uri_channel);

        built.map(|_| ())
    }

    /// Called for every rendered frame notification; only the first one has an effect.
    pub fn on_first_frame(&self) {
        if self.first_frame_seen.replace(true) {
            return;
        }
        if self.visibility.state() == Visibility::Visible {
            self.window.present();
        }
        let state = self.visibility.resync();
        log::debug!("First frame rendered, window {:?}", state);
    }

    /// Entry point for calls coming from the embedded UI.
    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> MethodResponse {
        self.hub.dispatch(channel, call)
    }

    /// Handles a native tray activation: notifies the UI, then applies native side effects.
    pub fn handle_menu_event(&self, id: &str) -> HandlerResult {
        log::debug!("Menu event: {}", id);
        if !self.tray.notify_activation(id) {
            return HandlerResult::Continue;
        }

        match self.router.route(id) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Error handling menu event {}: {:#}", id, e);
                HandlerResult::Continue
            }
        }
    }

    /// Closes the channels before releasing tray items and the indicator.
    pub fn shutdown(&self) {
        if self.shut_down.replace(true) {
            return;
        }
        self.hub.clear();
        self.tray.teardown();
        log::info!("Shell shut down");
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &Rc<TrayRegistry> {
        self.tray.registry()
    }

    pub fn visibility(&self) -> &VisibilityToggle {
        &self.visibility
    }

    pub fn window_channel(&self) -> String {
        channel_name(&self.config.channel_prefix, WINDOW_CHANNEL)
    }

    pub fn tray_channel(&self) -> String {
        channel_name(&self.config.channel_prefix, TRAY_CHANNEL)
    }
}

fn native_routes(visibility: Rc<VisibilityToggle>) -> EventRouter {
    EventRouter::new(vec![
        EventRoute {
            pattern: EventPattern::Exact(ids::WINDOW_TOGGLE.to_string()),
            handler: Box::new(move |_| {
                visibility.toggle();
                Ok(HandlerResult::Continue)
            }),
        },
        EventRoute {
            pattern: EventPattern::Exact(ids::APP_QUIT.to_string()),
            handler: Box::new(|_| {
                log::info!("Quit requested");
                Ok(HandlerResult::Quit)
            }),
        },
    ])
}
