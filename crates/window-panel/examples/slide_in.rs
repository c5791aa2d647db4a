//! Slides a panel in from the top and out to the right, printing each frame.
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=window_panel=debug cargo run -p window-panel --example slide_in
//! ```

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use window_panel::prelude::*;

const FRAME: f32 = 1.0 / 30.0;

fn run(panel: &mut WindowPanel, clock: &ManualClock, window: &Surface, background: &Surface) -> Result<()> {
    while panel.is_transitioning() {
        panel.tick()?;
        let position = window.anchored_position();
        println!(
            "{:>6.3}s  {:<8?} window=({:>7.1}, {:>7.1}) background={:.2}",
            clock.elapsed().as_secs_f32(),
            panel.state(),
            position.x,
            position.y,
            background.alpha(),
        );
        clock.advance_secs(FRAME);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let clock = ManualClock::new();
    let window = Surface::new("window");
    let background = Surface::new("background");
    let surfaces = PanelSurfaces::new(
        Surface::new("panel")
            .with_rect(Rect::new(0.0, 0.0, 640.0, 360.0))
            .with_blocks_input(false),
    )
    .with_window(window.clone())
    .with_background(background.clone());

    let config = PanelConfig::from_toml_str(
        r#"
        open_duration = 0.3
        close_duration = 0.25
        close_on_background_clicked = true

        [variant]
        kind = "slide_in"
        entry_outer = "up"
        exit_outer = "right"

        [variant.easing_curve]
        preset = "back_out"
        "#,
    )?;

    let mut panel = WindowPanel::builder(surfaces)
        .config(config)
        .clock(Arc::new(clock.clone()))
        .build()?;

    panel.opened().connect(|_| println!("-- opened"));
    panel.closed().connect(|_| println!("-- closed"));

    panel.open()?;
    run(&mut panel, &clock, &window, &background)?;

    background.click();
    panel.process_requests()?;
    run(&mut panel, &clock, &window, &background)?;

    Ok(())
}
