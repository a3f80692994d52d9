use gpui::*;
use pageboard::app::PageCanvas;
use pageboard::settings;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pageboard=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = settings::shared();

    // Write defaults on first launch so the file exists to edit and watch
    if let Some(path) = settings::default_settings_path() {
        if !path.exists() {
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
        }
    }

    tracing::info!(
        modifier = ?settings.modifier_key,
        drag_threshold = settings.drag_threshold,
        "Starting pageboard"
    );

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(760.0), px(680.0)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Pageboard".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| PageCanvas::new(settings, window, cx)),
        );
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
