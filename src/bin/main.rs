use core::cell::Cell;

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use folio_core::app::{PortfolioApp, TickResult};
use log::{error, info};

#[path = "main/env_config.rs"]
mod env_config;
#[path = "main/keys.rs"]
mod keys;
#[path = "main/term.rs"]
mod term;

use keys::KeyInput;
use term::TerminalScreen;

const FRAME_CAP_MS: u64 = 16;
const REPORT_INTERVAL_SECS: u64 = 5;

async fn report_loop(revealed: &Cell<u64>) {
    let mut report_start = Instant::now();
    loop {
        Timer::after_secs(REPORT_INTERVAL_SECS).await;

        let elapsed_ms = report_start.elapsed().as_millis().max(1);
        let chars = revealed.replace(0);
        let cps_x100 = chars * 100_000 / elapsed_ms;
        info!(
            "reveal_rate={}.{:02} chars/s chars={} elapsed_ms={}",
            cps_x100 / 100,
            cps_x100 % 100,
            chars,
            elapsed_ms
        );
        report_start = Instant::now();
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_config::init_logging();
    let config = env_config::app_config_from_env();

    let mut screen = match TerminalScreen::enter() {
        Ok(screen) => screen,
        Err(err) => {
            error!("terminal setup failed: {}", err);
            eprintln!("folio: terminal setup failed: {err}");
            std::process::exit(1);
        }
    };

    let loop_start = Instant::now();
    let mut app = PortfolioApp::new(KeyInput::new(), config, 0);
    let revealed = Cell::new(0u64);
    info!("folio started: frame_cap_ms={}", FRAME_CAP_MS);

    let ui_future = async {
        let mut draw_fault_logged = false;
        loop {
            let now_ms = loop_start.elapsed().as_millis();

            if app.tick(now_ms) == TickResult::RenderRequested {
                let mut result = Ok(());
                app.with_screen(now_ms, |view| result = screen.draw(view));
                if let Err(err) = result
                    && !draw_fault_logged
                {
                    error!("draw failed: {}", err);
                    draw_fault_logged = true;
                }
            }

            revealed.set(
                revealed
                    .get()
                    .saturating_add(app.drain_revealed_chars() as u64),
            );

            if app.quit_requested() {
                info!("quit requested at {}ms", now_ms);
                break;
            }

            // Keys are polled, so never sleep past one frame even when idle.
            let wait_ms = app
                .next_deadline(now_ms)
                .map_or(FRAME_CAP_MS, |due| due.saturating_sub(now_ms))
                .clamp(1, FRAME_CAP_MS);
            Timer::after(Duration::from_millis(wait_ms)).await;
        }
    };

    if let Either::Second(()) = select(ui_future, report_loop(&revealed)).await {
        error!("report loop exited unexpectedly");
    }

    if let Err(err) = screen.leave() {
        eprintln!("folio: terminal restore failed: {err}");
    }
    std::process::exit(0);
}
