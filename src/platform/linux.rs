use crate::channel::LoggingMessenger;
use crate::config::ShellConfig;
use crate::shell::{Shell, ShellParts};
use crate::tray::native::{self, TrayIconBackend};
use crate::tray::router::HandlerResult;
use crate::window::{ActiveWindowFn, NativeWindow};
use anyhow::Result;
use gtk::prelude::*;
use gtk::{gio, glib};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub const APPLICATION_ID: &str = "com.logger.desktop";

pub struct GtkNativeWindow {
    window: gtk::Window,
}

impl GtkNativeWindow {
    pub fn new(window: gtk::Window) -> Self {
        Self { window }
    }
}

impl NativeWindow for GtkNativeWindow {
    fn set_keep_above(&self, above: bool) {
        self.window.set_keep_above(above);
    }

    fn iconify(&self) {
        self.window.iconify();
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn maximize(&self) {
        self.window.maximize();
    }

    fn unmaximize(&self) {
        self.window.unmaximize();
    }

    fn close(&self) {
        self.window.close();
    }

    fn set_titlebar_visible(&self, visible: bool) -> bool {
        match self.window.titlebar() {
            Some(titlebar) => {
                titlebar.set_visible(visible);
                true
            }
            None => false,
        }
    }

    fn set_decorated(&self, decorated: bool) {
        self.window.set_decorated(decorated);
    }

    fn pointer_position(&self) -> Option<(i32, i32)> {
        let gdk_window = self.window.window()?;
        let seat = gdk_window.display().default_seat()?;
        let pointer = seat.pointer()?;
        let (_screen, x, y) = pointer.position();
        Some((x, y))
    }

    fn begin_move_drag(&self, x: i32, y: i32) {
        self.window.begin_move_drag(1, x, y, gtk::current_event_time());
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    fn hide(&self) {
        self.window.hide();
    }

    fn present(&self) {
        self.window.present();
    }
}

/// Runs the GTK application until the last window closes or the tray asks to quit.
pub fn run(config: ShellConfig, args: Vec<String>) -> Result<()> {
    let app = gtk::Application::new(Some(APPLICATION_ID), gio::ApplicationFlags::NON_UNIQUE);
    let config = Rc::new(config);
    let shell: Rc<RefCell<Option<Rc<Shell>>>> = Rc::new(RefCell::new(None));

    {
        let shell = shell.clone();
        app.connect_activate(move |app| {
            if shell.borrow().is_some() {
                log::debug!("Already activated");
                return;
            }
            match activate(app, &config, args.clone()) {
                Ok(created) => *shell.borrow_mut() = Some(created),
                Err(e) => {
                    log::error!("Failed to create main window: {:#}", e);
                    app.quit();
                }
            }
        });
    }

    {
        let shell = shell.clone();
        app.connect_shutdown(move |_| {
            if let Some(shell) = shell.borrow_mut().take() {
                shell.shutdown();
            }
        });
    }

    // Startup arguments are forwarded to the UI, not parsed by GTK.
    let exit = app.run_with_args(&[env!("CARGO_PKG_NAME")]);
    if exit != glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with {:?}", exit);
    }
    Ok(())
}

fn activate(app: &gtk::Application, config: &ShellConfig, args: Vec<String>) -> Result<Rc<Shell>> {
    let window = gtk::ApplicationWindow::new(app);

    if config.window.use_header_bar {
        let header_bar = gtk::HeaderBar::new();
        header_bar.set_title(Some(config.window.title.as_str()));
        header_bar.set_show_close_button(true);
        header_bar.show();
        window.set_titlebar(Some(&header_bar));
    } else {
        window.set_title(&config.window.title);
    }
    window.set_default_size(config.window.width, config.window.height);

    let icon_path = config.icon_path();
    if let Ok(path) = &icon_path {
        if let Err(e) = window.set_icon_from_file(path) {
            log::warn!("Failed to set window icon from {:?}: {}", path, e);
        }
    }

    // Stand-in for the engine view; its first draw is the first rendered frame.
    let surface = gtk::DrawingArea::new();
    surface.show();
    window.add(&surface);

    let native_window: Rc<dyn NativeWindow> = Rc::new(GtkNativeWindow::new(window.clone().upcast()));
    let shell = Rc::new(Shell::new(ShellParts {
        config: config.clone(),
        messenger: Rc::new(LoggingMessenger),
        window: native_window,
        active_window: active_window_lookup(app),
        args,
    }));

    {
        let shell = Rc::downgrade(&shell);
        surface.connect_draw(move |_, _| {
            if let Some(shell) = shell.upgrade() {
                shell.on_first_frame();
            }
            glib::Propagation::Proceed
        });
    }
    surface.realize();

    let icon = match icon_path.and_then(|path| native::load_icon(&path)) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("Tray icon unavailable: {:#}", e);
            None
        }
    };
    let backend = TrayIconBackend::new(config.window.title.clone(), icon);
    if let Err(e) = shell.start(Box::new(backend)) {
        log::error!("Failed to start tray: {:#}", e);
    }
    poll_menu_events(app, &shell);

    window.show();
    Ok(shell)
}

fn active_window_lookup(app: &gtk::Application) -> ActiveWindowFn {
    let app = app.downgrade();
    Box::new(move || {
        let window = app.upgrade()?.active_window()?;
        Some(Rc::new(GtkNativeWindow::new(window)) as Rc<dyn NativeWindow>)
    })
}

fn poll_menu_events(app: &gtk::Application, shell: &Rc<Shell>) {
    use tray_icon::menu::MenuEvent;

    let menu_receiver = MenuEvent::receiver();
    let shell = Rc::downgrade(shell);
    let app = app.downgrade();

    glib::timeout_add_local(Duration::from_millis(100), move || {
        let Some(shell) = shell.upgrade() else {
            return glib::ControlFlow::Break;
        };
        while let Ok(event) = menu_receiver.try_recv() {
            if shell.handle_menu_event(&event.id.0) == HandlerResult::Quit {
                log::info!("Quitting application");
                if let Some(app) = app.upgrade() {
                    app.quit();
                }
                return glib::ControlFlow::Break;
            }
        }
        glib::ControlFlow::Continue
    });
}
