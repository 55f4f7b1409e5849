//! Windowed frontend: drawing and input on top of the simulation engine.

use macroquad::prelude::*;
use oceansweep::clock::FrameClock;
use oceansweep::daycycle::Rgb;
use oceansweep::engine::Engine;
use oceansweep::session::Phase;

const DEBRIS_RADIUS_PX: f32 = 8.0;
const VESSEL_WIDTH_PX: f32 = 40.0;
const VESSEL_HEIGHT_PX: f32 = 20.0;
const BAR_WIDTH_PX: f32 = 200.0;
const BAR_HEIGHT_PX: f32 = 20.0;
const FONT_SIZE: f32 = 24.0;

/// Open the window and run the tick-render loop until the engine stops.
pub fn run_windowed(engine: Engine) {
    let conf = Conf {
        window_title: "Ocean Cleanup Simulation".to_string(),
        window_width: engine.cfg().arena.width_px as i32,
        window_height: engine.cfg().arena.height_px as i32,
        high_dpi: true,
        ..Default::default()
    };

    macroquad::Window::from_config(conf, main_loop(engine));
}

async fn main_loop(mut engine: Engine) {
    // Window close requests must reach the engine as quit events, even
    // while the day-end report is waiting for a keypress.
    prevent_quit();

    let mut clock = FrameClock::new(engine.cfg().cycle.max_fps);

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            engine.quit();
        }

        match engine.phase() {
            Phase::Stopped => break,
            Phase::Running => {
                let dt = clock.tick();
                engine.step(dt);
                draw_frame(&engine);
            }
            Phase::DayComplete => {
                // Keep pacing while frozen so the post-acknowledge dt stays
                // one frame long.
                clock.tick();
                draw_day_report(&engine);

                if get_last_key_pressed().is_some() {
                    engine.acknowledge();
                }
            }
        }

        next_frame().await;
    }
}

fn draw_frame(engine: &Engine) {
    clear_background(to_color(engine.background()));

    for debris in engine.field().items() {
        draw_circle(
            debris.pos.x as f32,
            debris.pos.y as f32,
            DEBRIS_RADIUS_PX,
            RED,
        );
    }

    let agent = engine.agent();
    let (x, y) = (agent.pos().x as f32, agent.pos().y as f32);
    draw_circle_lines(x, y, agent.sensor_range_px() as f32, 1.0, WHITE);
    draw_rectangle(
        x - VESSEL_WIDTH_PX / 2.0,
        y - VESSEL_HEIGHT_PX / 2.0,
        VESSEL_WIDTH_PX,
        VESSEL_HEIGHT_PX,
        LIGHTGRAY,
    );

    let bar_y = engine.cfg().arena.height_px as f32 - 50.0;
    draw_bar(50.0, bar_y, agent.capacity_fraction() as f32, GREEN);
    draw_text("Trash Capacity", 50.0, bar_y - 8.0, FONT_SIZE, WHITE);
    draw_bar(300.0, bar_y, engine.energy().state_of_charge() as f32, GOLD);
    draw_text("Battery", 300.0, bar_y - 8.0, FONT_SIZE, WHITE);

    draw_readouts(engine);
}

fn draw_bar(x: f32, y: f32, fraction: f32, fill: Color) {
    draw_rectangle(x, y, BAR_WIDTH_PX, BAR_HEIGHT_PX, LIGHTGRAY);
    draw_rectangle(x, y, BAR_WIDTH_PX * fraction, BAR_HEIGHT_PX, fill);
}

fn draw_readouts(engine: &Engine) {
    let session = engine.session();
    let meters_per_pixel = engine.cfg().arena.meters_per_pixel;
    let battery_percent = engine.energy().state_of_charge() * 100.0;

    let lines = [
        format!("Day: {}", session.day()),
        format!("Trash Collected: {}", engine.agent().carried()),
        format!("Distance: {:.2} km", session.distance_km(meters_per_pixel)),
        format!("Solar Today: {:.2} kWh", session.solar_kwh()),
        format!("Energy Used: {:.2} kWh", session.consumed_kwh()),
        format!("Battery: {battery_percent:.0}%"),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 20.0, 28.0 + i as f32 * 20.0, FONT_SIZE, WHITE);
    }
}

fn draw_day_report(engine: &Engine) {
    clear_background(BLACK);

    let Some(summary) = engine.summary() else {
        return;
    };

    let width = engine.cfg().arena.width_px as f32;
    let mut y = engine.cfg().arena.height_px as f32 / 2.0 - 80.0;

    let mut lines = summary.report_lines();
    lines.push("Press any key to start the next day...".to_string());

    for line in &lines {
        let dims = measure_text(line, None, FONT_SIZE as u16, 1.0);
        draw_text(line, (width - dims.width) / 2.0, y, FONT_SIZE, WHITE);
        y += 25.0;
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}
