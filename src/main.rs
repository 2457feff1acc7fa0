#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 600.0])
            .with_title("pixel_paint"),
        ..Default::default()
    };
    eframe::run_native(
        "pixel_paint",
        native_options,
        Box::new(|cc| Ok(Box::new(pixel_paint::PaintApp::new(cc)))),
    )
}
